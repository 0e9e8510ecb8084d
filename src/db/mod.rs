//! Databases for holding information relevant to a solve.
//!
//!   - [The atom database](crate::db::atom)
//!     + Names of atoms, and properties of atoms on the current valuation.
//!       * Value, level, and antecedent of each atom.
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a clause key. \
//!       From an external perspective there are two important kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some external source (e.g. a formula file).
//!       * Addition clauses \
//!         Clauses added to the context through conflict analysis.
//!         Every addition clause is a consequence of the collection of original clauses.
//!     + The watch lists of each literal.
//!   - [The trail](crate::db::trail)
//!     + Assignments, in order, with the start of each decision level.
//!     + The propagation queue.

pub mod atom;
pub mod clause;
pub mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

use crate::{
    context::Context,
    db::trail::Assignment,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// The index of a decision level.
pub type LevelIndex = u32;

/// Canonical methods to record assignments to the context.
impl Context {
    /// Records `literal` as true at the current level, as a consequence of `antecedent`.
    ///
    /// An antecedent of none marks a decision.
    ///
    /// The atom of the literal must have no value.
    pub fn record_assignment(&mut self, literal: CLiteral, antecedent: Option<ClauseKey>) {
        debug_assert!(self.atom_db.value_of(literal.atom()).is_none());

        let assignment = Assignment {
            literal,
            level: self.trail.level(),
            antecedent,
        };

        log::trace!(target: targets::TRAIL, "Assignment {} at level {}", self.atom_db.literal_string(&literal), assignment.level);

        self.atom_db.set_value(&assignment);
        self.trail.store_assignment(assignment);
    }

    /// Opens a fresh decision level and records `literal` as the decision of the level.
    pub fn record_decision(&mut self, literal: CLiteral) {
        self.trail.open_level();
        self.record_assignment(literal, None);
    }
}
