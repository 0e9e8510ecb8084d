/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [clause_from_string](crate::context::Context::clause_from_string), to obtain a clause from a string, with atoms for any fresh names.
- [add_clause](crate::context::Context::add_clause), to add a clause.

And, [read_formula](crate::context::Context::read_formula) reads a formula line by line, with one clause to each line.

# Format

A clause is written as a sum of literals, e.g. `x1 + x3bar + x8bar`.
- A literal is the name of an atom, or the name of an atom followed by `bar` for the negation of the atom.
- Whitespace is ignored, and so `x 1 + x3 bar` is read as `x1 + x3bar`.
- Atoms are introduced in order of first appearance.

# Examples

A clause built using basic methods.

```rust
# use bar_sat::context::Context;
# use bar_sat::reports::Report;
let mut the_context = Context::default();

let clause_a = the_context.clause_from_string("p + qbar").unwrap();
let clause_b = the_context.clause_from_string("pbar + q").unwrap();

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

A clause built from atoms.

```rust
# use bar_sat::context::Context;
# use bar_sat::reports::Report;
# use bar_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::default();
let p = the_context.atom_db.fresh_or_existing_atom("p").unwrap();

assert!(the_context.add_clause(vec![CLiteral::new(p, true)]).is_ok());
assert!(the_context.add_clause(vec![CLiteral::new(p, false)]).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

mod parse;
pub use parse::ParserInfo;

use crate::{
    context::{Context, ContextState},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause, ClauseSource},
    types::err::{self, ErrorKind},
};

/// The marker of a negated literal, written after the name of the atom.
pub const NEGATION_MARKER: &str = "bar";

/// The separator of literals in a clause.
pub const LITERAL_SEPARATOR: char = '+';

impl Context {
    /// Adds a clause to the context, as part of the formula.
    ///
    /// Every atom of the clause must be part of the context, and no literal may occur twice.
    /// A tautology is added, though it is satisfied on every valuation.
    ///
    /// Clauses may only be added before a solve.
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseKey, ErrorKind> {
        if self.state != ContextState::Input {
            return Err(ErrorKind::from(err::StateError::SolveInProgress));
        }

        if clause
            .atoms()
            .any(|atom| atom as usize >= self.atom_db.count())
        {
            return Err(ErrorKind::from(err::ClauseDBError::UnknownAtom));
        }

        if clause.is_tautology() {
            log::debug!(target: targets::CLAUSE_DB, "Tautology: {}", self.atom_db.clause_string(&clause));
        }

        let clause_string = self.atom_db.clause_string(&clause);
        let key = self.clause_db.store(clause, ClauseSource::Original)?;
        log::info!(target: targets::CLAUSE_DB, "Clause {}: {clause_string}", key.index() + 1);

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn unknown_atom() {
        let mut the_context = Context::default();
        assert_eq!(
            the_context.add_clause(vec![CLiteral::new(0, true)]),
            Err(ErrorKind::from(err::ClauseDBError::UnknownAtom))
        );
    }

    #[test]
    fn no_clause_after_solve() {
        let mut the_context = Context::default();
        let clause = the_context.clause_from_string("p + q").unwrap();
        assert!(the_context.add_clause(clause).is_ok());
        assert!(the_context.solve().is_ok());

        let clause = the_context.clause_from_string("pbar").unwrap();
        assert_eq!(
            the_context.add_clause(clause),
            Err(ErrorKind::from(err::StateError::SolveInProgress))
        );
    }
}
