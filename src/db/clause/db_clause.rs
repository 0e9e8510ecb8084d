//! A struct holding a [clause](Clause) and associated metadata.
//!
//! A [DBClause] contains:
//! - A [clause](Clause) (represented as a [CClause]).
//! - A [key](ClauseKey) used to access the [DBClause].
//! - The positions of the two watched literals of the clause.
//!
//! # Terminology
//! ## Watch candidate
//!   - A literal which is not false on the current valuation.
//!
//! ## Watched literals
//!
//! Two positions in the clause.
//! Initially, these are the *first* and *last* positions of the clause.
//!
//! The order of literals in a clause is never mutated, and instead the positions of the watches move.
//! A unit clause has a single literal, and so both positions are the same and no watch is noted.

use crate::{
    db::{keys::ClauseKey, watches::Watches},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
        valuation::Valuation,
    },
};

use std::ops::Deref;

/// The status of a clause after an update to the watched literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// The other watched literal is true, so the clause is satisfied and the watch remains.
    Witness,

    /// The watch moved to some candidate.
    Moved,

    /// No candidate was found and the other watched literal has no value, so the clause asserts the other watched literal.
    Unit(CLiteral),

    /// No candidate was found and the other watched literal is false, so the clause conflicts with the valuation.
    Conflict,
}

/// A clause together with some metadata.
pub struct DBClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause, stored as a [CClause].
    clause: CClause,

    /// The positions of the watched literals.
    watch_ptrs: [usize; 2],
}

impl DBClause {
    /// Bundles a [ClauseKey] and [Clause] into a [DBClause], with watches on the first and last literals of the clause.
    ///
    /// Note: This does not store the [DBClause] in the [clause database](crate::db::clause::ClauseDB), nor note the watches.
    pub(crate) fn from(key: ClauseKey, clause: CClause) -> Self {
        let last = clause.len().saturating_sub(1);
        Self {
            key,
            clause,
            watch_ptrs: [0, last],
        }
    }

    /// The key used to access the [DBClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The watched literals of the clause, or none for a unit clause.
    pub fn watched_literals(&self) -> Option<[CLiteral; 2]> {
        match self.clause.len() {
            0 | 1 => None,
            _ => Some([
                self.clause[self.watch_ptrs[0]],
                self.clause[self.watch_ptrs[1]],
            ]),
        }
    }

    /// On the assumption `literal` is a watched literal which has become false, updates the watched literals.
    ///
    /// In order:
    /// - If the other watched literal is true the clause is satisfied, and nothing changes.
    /// - Otherwise, the watch on `literal` moves to the first candidate found by a circular sweep forward from the watch, skipping the other watch.
    ///   The clause is then noted as watching the candidate in `watches`.
    /// - If no candidate exists, the status is determined by the other watched literal.
    ///
    /// As `literal` is false, it is never a candidate, and so the watch list of `literal` is never extended.
    ///
    /// # Panics
    /// If `literal` is not watched by the clause, as the watch lists are then corrupt.
    pub(crate) fn update_watch(
        &mut self,
        literal: CLiteral,
        valuation: &impl Valuation,
        watches: &mut Watches,
    ) -> WatchStatus {
        let (this, other) = if self.clause[self.watch_ptrs[0]] == literal {
            (0, 1)
        } else if self.clause[self.watch_ptrs[1]] == literal {
            (1, 0)
        } else {
            panic!("! {} is not watched by {}", literal, self.key);
        };

        let other_literal = self.clause[self.watch_ptrs[other]];
        if valuation.literal_value(&other_literal) == Some(true) {
            return WatchStatus::Witness;
        }

        let length = self.clause.len();
        let start = self.watch_ptrs[this];
        let mut index = start;
        loop {
            index = (index + 1) % length;
            if index == start {
                break;
            }
            if index == self.watch_ptrs[other] {
                continue;
            }

            let candidate = self.clause[index];
            if valuation.literal_value(&candidate) != Some(false) {
                self.watch_ptrs[this] = index;
                watches.watch(&candidate, self.key);
                return WatchStatus::Moved;
            }
        }

        match valuation.literal_value(&other_literal) {
            None => WatchStatus::Unit(other_literal),
            _ => WatchStatus::Conflict,
        }
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_string())
    }
}

impl Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}
