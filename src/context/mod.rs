/*!
The context, to which formulas are added and within which solves take place.

A context bundles together the databases of a solve with the state of the solve and some counters.

# Example
```rust
# use bar_sat::context::Context;
# use bar_sat::config::Config;
# use bar_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p_or_q = the_context.clause_from_string("p + q").unwrap();
let not_p = the_context.clause_from_string("pbar").unwrap();

assert!(the_context.add_clause(p_or_q).is_ok());
assert!(the_context.add_clause(not_p).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.model(), vec![("p", false), ("q", true)]);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress, and the consistency of the database is unknown.
    Solving,

    /// The database is known to be consistent, with a valuation on which every clause is satisfied.
    Satisfiable,

    /// The database is known to be inconsistent, with the given clause conflicting with the top level valuation.
    Unsatisfiable(ClauseKey),

    /// A solve stopped at some limit before the consistency of the database was determined.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The resolution buffer, used during conflict analysis.
    pub resolution_buffer: ResolutionBuffer,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            state: ContextState::Input,
            resolution_buffer: ResolutionBuffer::default(),
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The key of a clause which conflicts with the top level valuation, if the context is unsatisfiable.
    pub fn unsatisfiable_clause(&self) -> Option<ClauseKey> {
        match self.state {
            ContextState::Unsatisfiable(key) => Some(key),
            _ => None,
        }
    }

    /// The value of the atom with the given name, if the atom exists and has some value.
    pub fn value_of(&self, name: &str) -> Option<bool> {
        self.atom_db
            .atom_of(name)
            .and_then(|atom| self.atom_db.value_of(atom))
    }

    /// Each atom name paired with its value on the current valuation, in order of first appearance.
    ///
    /// An atom without a value is paired with false.
    /// After a satisfiable solve any atom without a value occurs only in satisfied clauses, and so either value would do.
    pub fn model(&self) -> Vec<(&str, bool)> {
        self.atom_db
            .names()
            .zip(self.atom_db.valuation().iter())
            .map(|(name, value)| (name, value.unwrap_or(false)))
            .collect()
    }

    /// The trail, as a sequence of literals paired with the level of their assignment, e.g. `<x1,0> <x2bar,1>`.
    pub fn trail_string(&self) -> String {
        self.trail
            .assignments()
            .iter()
            .map(|assignment| {
                format!(
                    "<{},{}>",
                    self.atom_db.literal_string(&assignment.literal),
                    assignment.level
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
