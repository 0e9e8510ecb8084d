//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! The solve loop alternates propagation with either conflict analysis or a decision.
//!
//! - Initially, the literal of each unit clause is recorded at level zero.
//!   If two unit clauses conflict the formula is unsatisfiable, and nothing more is done.
//! - Queued literals are propagated until a fixpoint or a conflict.
//!   + On a conflict without any decision the formula is unsatisfiable.
//!   + On a conflict after some decision, conflict analysis derives an asserting clause.
//!     A backjump is made to the backjump level of the clause, the clause is learnt, and the literal asserted by the clause is queued.
//!   + At a fixpoint, either every clause is satisfied and the formula is satisfiable, or a decision is made and queued.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!          +---------------+
//!   +----->|   propagate   |-----------------+
//!   |      +---------------+                 |
//!   |              |                         |
//!   |              | if no conflict          | if conflict
//!   |              ⌄                         ⌄
//!   |      +---------------+       +-------------------+
//!   +------| make_decision |       | conflict_analysis |
//!   |      +---------------+       +-------------------+
//!   |              |                         |
//!   |              ⌄                         ⌄
//!   |    satisfiable, if every     unsatisfiable, if no decision
//!   |    clause is satisfied       has been made
//!   |                                        |
//!   |                                        | otherwise
//!   |                                        ⌄
//!   |                              +-------------------+
//!   +------------------------------| backjump and learn|
//!                                  +-------------------+
//! ```
//!
//! In addition, the loop stops with an unknown result if a [time limit](crate::config::Config::time_limit) is reached or a [conflict limit](crate::config::Config::conflict_limit) is exceeded.
//!
//! # Example
//!
//! ```rust
//! # use bar_sat::context::Context;
//! # use bar_sat::reports::Report;
//! let mut the_context = Context::default();
//!
//! let not_p_or_q = the_context.clause_from_string("pbar + q").unwrap();
//! let p_or_not_q = the_context.clause_from_string("p + qbar").unwrap();
//! let _ = the_context.add_clause(not_p_or_q);
//! let _ = the_context.add_clause(p_or_not_q);
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of("p"), the_context.value_of("q"));
//!
//! let p_clause = the_context.clause_from_string("p").unwrap();
//! assert!(the_context.add_clause(p_clause).is_err());
//! ```
//!
//! # Literature
//!
//! The solve procedure follows the presentation of conflict-driven clause learning in [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0)
//! and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::{
        analysis::AnalysisResult,
        bcp::BCPResult,
        decision::DecisionOk,
    },
    reports::Report,
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    ///
    /// A solve may be made once.
    /// Further calls return the report of the first solve.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Ok(self.report());
        }

        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        log::info!(target: targets::SOLVE, "Solve of {} clauses on {} atoms", self.clause_db.original_count(), self.atom_db.count());

        if let BCPResult::Conflict(key) = self.queue_unit_clauses() {
            log::info!(target: targets::SOLVE, "Conflicting unit clause {key}");
            self.state = ContextState::Unsatisfiable(key);
        }

        'solve_loop: while self.state == ContextState::Solving {
            self.counters.total_iterations += 1;
            log::trace!(target: targets::SOLVE, "Iteration {}", self.counters.total_iterations);

            self.counters.time = total_time.elapsed();
            if self
                .config
                .time_limit
                .is_some_and(|limit| self.counters.time > limit)
            {
                log::info!(target: targets::SOLVE, "Time limit reached");
                self.state = ContextState::Unknown;
                break 'solve_loop;
            }

            let propagation = self.propagate();
            log::info!(target: targets::TRAIL, "{}", self.trail_string());

            match propagation {
                BCPResult::NoConflict => match self.make_decision() {
                    DecisionOk::Literal(_) => continue 'solve_loop,
                    DecisionOk::Exhausted => break 'solve_loop,
                },

                BCPResult::Conflict(key) => {
                    self.counters.total_conflicts += 1;
                    if self
                        .config
                        .conflict_limit
                        .is_some_and(|limit| self.counters.total_conflicts > limit)
                    {
                        log::info!(target: targets::SOLVE, "Conflict limit exceeded");
                        self.state = ContextState::Unknown;
                        break 'solve_loop;
                    }

                    match self.conflict_analysis(&key) {
                        AnalysisResult::Unsatisfiable => {
                            self.state = ContextState::Unsatisfiable(key);
                            break 'solve_loop;
                        }

                        AnalysisResult::AssertingClause {
                            clause,
                            literal,
                            level,
                        } => {
                            self.backjump(level);
                            self.learn(clause, literal)?;
                        }
                    }
                }
            }
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::SOLVE, "{} after {} conflicts and {} decisions", self.state, self.counters.total_conflicts, self.counters.total_decisions);

        Ok(self.report())
    }
}
