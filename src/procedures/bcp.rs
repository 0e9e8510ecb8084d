/*!
A context method for boolean constraint propagation.

See [Context::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal (as the watched literal of each such clause has just become false) and updating the watches of the clause, if possible, recording the consequence of an asserting clause, or identifying the clause conflicts with the current valuation.

Each consequence is recorded to the [trail](crate::db::trail), and the trail doubles as a first-in first-out queue of literals to propagate.
So, [propagate](Context::propagate) takes literals from the queue until either the queue is empty or a conflict is found.

# Complications

The watch list examined is taken from the clause database for the duration of the examination.
This avoids a mutable borrow of the watch list conflicting with a mutable borrow of the clause database to update the watches of a clause.

Still, the *taken* watch list will not be extended while taken.
For, the negation of the literal bcp is called on is false, and a false literal is never a candidate when updating a watch.

# Example

```rust,ignore
match self.propagate() {
    BCPResult::Conflict(key) => {
        let analysis_result = self.conflict_analysis(&key);
        ...
    }

    BCPResult::NoConflict => {
        match self.make_decision() {
            ...
        }
    }
}
```
*/

use crate::{
    context::Context,
    db::{clause::db_clause::WatchStatus, ClauseKey},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// The result of propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPResult {
    /// Propagation completed without conflict.
    NoConflict,

    /// The clause with the given key conflicts with the current valuation.
    Conflict(ClauseKey),
}

impl Context {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// Propagation stops at the first conflict, and consequences recorded before the conflict remain on the trail.
    ///
    /// # Panics
    /// If some clause watching the negation of `literal` is missing from the clause database.
    pub fn bcp(&mut self, literal: CLiteral) -> BCPResult {
        let false_literal = literal.negate();
        let mut watchers = self.clause_db.take_watchers(&false_literal);

        let mut index = 0;
        let mut result = BCPResult::NoConflict;

        while index < watchers.len() {
            let key = watchers[index];

            let Ok(status) =
                self.clause_db
                    .update_watch(key, false_literal, self.atom_db.valuation())
            else {
                panic!("! Watch list of {false_literal} holds a missing clause {key}");
            };

            match status {
                WatchStatus::Moved => {
                    watchers.swap_remove(index);
                }

                WatchStatus::Witness => index += 1,

                WatchStatus::Unit(consequence) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal}: {consequence}");
                    self.record_assignment(consequence, Some(key));
                    self.counters.total_propagations += 1;
                    index += 1;
                }

                WatchStatus::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction.");
                    result = BCPResult::Conflict(key);
                    break;
                }
            }
        }

        self.clause_db.restore_watchers(&false_literal, watchers);
        result
    }

    /// Propagates each queued literal of the trail, in order, until the queue is empty or some conflict is found.
    pub fn propagate(&mut self) -> BCPResult {
        while let Some(literal) = self.trail.next_queued() {
            if let BCPResult::Conflict(key) = self.bcp(literal) {
                return BCPResult::Conflict(key);
            }
        }
        BCPResult::NoConflict
    }

    /// Records the literal of each standing unit clause at level zero, to be propagated.
    ///
    /// A unit clause whose literal is already false conflicts with the (level zero) valuation.
    /// A unit clause whose literal is already true is skipped.
    pub fn queue_unit_clauses(&mut self) -> BCPResult {
        let unit_keys = self.clause_db.unit_keys().to_vec();
        for key in unit_keys {
            let literal = match self.clause_db.get(&key) {
                Ok(db_clause) => db_clause[0],
                Err(_) => panic!("! Missing unit clause {key}"),
            };

            match self.atom_db.literal_value(&literal) {
                Some(true) => {}
                Some(false) => return BCPResult::Conflict(key),
                None => self.record_assignment(literal, Some(key)),
            }
        }
        BCPResult::NoConflict
    }
}
