/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, together with the level to backjump to before the clause is learnt.

In other words, conflict analysis applies resolution using the clauses used to (eventually) make the observation of a conflict given decisions made, stopping at the first unique implication point of the current level.

For details on resolution, see the [resolution buffer](crate::resolution_buffer).

For the method, see: [conflict_analysis](Context::conflict_analysis).

# Example

```rust,ignore
match self.conflict_analysis(&key) {
    AnalysisResult::Unsatisfiable => {
        self.state = ContextState::Unsatisfiable(key);
        ...
    }

    AnalysisResult::AssertingClause { clause, literal, level } => {
        self.backjump(level);
        self.learn(clause, literal)?;
    }
}
```
*/

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// Possible results from conflict analysis.
#[derive(Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict is independent of any decision, and so the formula is unsatisfiable.
    Unsatisfiable,

    /// An asserting clause was derived.
    AssertingClause {
        /// The clause, with the asserted literal first.
        clause: CClause,

        /// The literal asserted by the clause after a backjump.
        literal: CLiteral,

        /// The level to backjump to.
        level: LevelIndex,
    },
}

impl Context {
    /// For details on conflict analysis see the [analysis](crate::procedures::analysis) procedure.
    ///
    /// # Panics
    /// If resolution fails to isolate a unique implication point.
    /// See [resolution_buffer](crate::resolution_buffer).
    pub fn conflict_analysis(&mut self, key: &ClauseKey) -> AnalysisResult {
        log::info!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.trail.level());

        if self.trail.level() == 0 {
            log::info!(target: targets::ANALYSIS, "Conflict of {key} without a decision");
            return AnalysisResult::Unsatisfiable;
        }

        if let Ok(conflict) = self.clause_db.get(key) {
            log::info!(target: targets::ANALYSIS, "Conflict: {}", self.atom_db.clause_string(conflict));
        }
        log::debug!(target: targets::ANALYSIS, "Valuation: {}", self.atom_db.valuation_string());

        let clause = self.resolution_buffer.resolve_through_current_level(
            key,
            &self.clause_db,
            &self.atom_db,
            &self.trail,
        );

        let literal = clause[0];
        let level = self.non_chronological_backjump_level(&clause);

        log::info!(target: targets::ANALYSIS, "UIP: {}", self.atom_db.literal_string(&literal.negate()));
        log::info!(target: targets::ANALYSIS, "Learned clause: {}", self.atom_db.clause_string(&clause));

        AnalysisResult::AssertingClause {
            clause,
            literal,
            level,
        }
    }
}
