//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions above level *l - i* are undone, and the propagation queue is cut back to the end of the trail.
//!
//! # Methods
//!
//! # [backjump](Context::backjump): backjump to a target level
//!
//! Performs a backjump to some level.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe, as nothing will happen.
//!
//! # [backjump_level](Context::non_chronological_backjump_level): the backjump level of a(n unsatisfiable) clause
//!
//! The backjump level of a clause is the highest level for which the clause is satisfiable on the corresponding valuation.
//!
//! - Soundness
//!   + With respect to implementation, the backjump level of a clause is the second highest decision level from the given literals, if the clause has two or more literals, and 0 (zero) otherwise. \
//!     In this respect the implementation of non_chronological_backjump_level is only sound to use when applied to a clause unsatisfiable on the current valuation.
//!
//! # [learn](Context::learn): store an asserting clause
//!
//! After a backjump to the backjump level of an asserting clause, the clause is stored and the asserted literal is recorded with the clause as antecedent.
//!
//! # Example
//!
//! ```rust,ignore
//! if let AnalysisResult::AssertingClause { clause, literal, level } = result {
//!     self.backjump(level);
//!     self.learn(clause, literal)?;
//! }
//! ```
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping, and a follow-up: [Backing Backtracking](https://www.doi.org/10.1007/978-3-030-24258-9_18).

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// Assignments are undone in reverse order of assignment.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        log::info!(target: targets::BACKJUMP, "Backjump from {} to {}", self.trail.level(), target);

        let removed = self.trail.clear_assignments_above(target);
        for assignment in removed.iter().rev() {
            self.atom_db.drop_value(assignment.literal.atom());
        }
    }

    /// The non-chronological backjump level of a unsatisfiable clause.
    ///
    /// + The *non-chronological* backjump level is the previous decision level of a clause.
    /// + The *chronological* backjump level is the previous decision level of a context.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    ///
    /// # Panics
    /// If some literal of the clause has no value.
    pub fn non_chronological_backjump_level(&self, clause: &impl Clause) -> LevelIndex {
        match clause.size() {
            0 => {
                panic!("! Attempted search for non-chronological backjump level on an empty clause")
            }
            1 => 0,
            _ => {
                // Work through the clause, keeping an ordered record of the top two decision levels: (second_to_top, top)
                let mut top_two = (None, None);
                for literal in clause.literals() {
                    let Some(dl) = self.atom_db.level_of(literal.atom()) else {
                        panic!("! {literal} has no value");
                    };

                    match top_two {
                        (_, None) => top_two.1 = Some(dl),
                        (_, Some(the_top)) if dl > the_top => {
                            top_two.0 = top_two.1;
                            top_two.1 = Some(dl);
                        }
                        (None, _) => top_two.0 = Some(dl),
                        (Some(second_to_top), _) if dl > second_to_top => top_two.0 = Some(dl),
                        _ => {}
                    }
                }

                top_two.0.unwrap_or(0)
            }
        }
    }

    /// Stores an asserting clause and records the asserted literal with the clause as antecedent.
    ///
    /// The asserted literal must have no value, and every other literal of the clause must be false.
    /// In other words, a backjump to the backjump level of the clause is required.
    pub fn learn(&mut self, clause: CClause, literal: CLiteral) -> Result<ClauseKey, err::ClauseDBError> {
        let key = self.clause_db.store(clause, ClauseSource::Resolution)?;
        self.record_assignment(literal, Some(key));
        Ok(key)
    }
}
