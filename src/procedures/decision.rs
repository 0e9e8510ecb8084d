/*!
Methods for choosing the value of an atom.

# Overview

A decision is made by counting, for each literal without a value, how often the literal occurs in clauses which are not satisfied on the current valuation.
The literal with the strictly greatest count is chosen, with ties broken in favour of the literal first encountered when examining clauses in order of storage (original clauses first) and literals in the order of the clause.

The heuristic is deterministic, and so a solve of a given formula always follows the same path.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

As counts are made of literals, rather than atoms, the heuristic chooses an atom and a value together.
*/

use std::collections::HashMap;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// Every clause is satisfied, so no decision is needed.
    Exhausted,
}

/// Methods related to making decisions.
impl Context {
    /// Chooses a literal with [pick_literal](Context::pick_literal) and records the literal as a decision at a fresh level.
    ///
    /// If every clause is satisfied the state of the context is set to satisfiable, and no decision is made.
    ///
    /// ```rust, ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.pick_literal() {
            Some(literal) => {
                self.counters.total_decisions += 1;
                self.record_decision(literal);
                log::debug!(target: targets::DECISION, "Decision {} at level {}", self.atom_db.literal_string(&literal), self.trail.level());
                DecisionOk::Literal(literal)
            }
            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }
        }
    }

    /// The most frequent literal without a value among clauses not satisfied on the current valuation, or none if every clause is satisfied.
    ///
    /// For details, see [procedures::decision](crate::procedures::decision).
    ///
    /// # Panics
    /// If some clause is not satisfied but no literal of any unsatisfied clause is without a value.
    /// After propagation to a fixpoint without conflict every clause not satisfied has at least two literals without a value.
    pub fn pick_literal(&self) -> Option<CLiteral> {
        let valuation = self.atom_db.valuation();

        let mut counts: HashMap<CLiteral, usize> = HashMap::default();
        // Literals in order of first encounter, for deterministic tie breaks.
        let mut encountered: Vec<CLiteral> = Vec::default();
        let mut unsatisfied = false;

        for db_clause in self.clause_db.all_clauses() {
            if db_clause.satisfied_on(valuation) {
                continue;
            }
            unsatisfied = true;

            for literal in db_clause.literals() {
                if valuation.value_of(literal.atom()).is_some() {
                    continue;
                }

                let count = counts.entry(*literal).or_insert_with(|| {
                    encountered.push(*literal);
                    0
                });
                *count += 1;
            }
        }

        if !unsatisfied {
            return None;
        }

        let mut best: Option<(CLiteral, usize)> = None;
        for literal in encountered {
            let count = counts[&literal];
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((literal, count)),
            }
        }

        match best {
            Some((literal, _)) => Some(literal),
            None => panic!("! No decision candidate while some clause is unsatisfied"),
        }
    }
}
