/*!
A database of 'atom related' things, aka. the variable table.

For each atom the database records:
- The name of the atom, as given in the input.
- The value of the atom, if any, on the current valuation.
- The decision level at which the atom was valued, if the atom has some value.
- The clause which forced the value of the atom, if the value was a consequence of BCP (and so not a decision).

Each of these fields is a cache of the [trail](crate::db::trail).
The value, level, and antecedent of an atom are set when an assignment is recorded to the trail and cleared when the assignment is removed from the trail by a [backjump](crate::procedures::backjump).
Outside of this crate the database is read-only.

```rust
# use bar_sat::db::atom::AtomDB;
let mut atom_db = AtomDB::default();
let p = atom_db.fresh_or_existing_atom("p").unwrap();
let q = atom_db.fresh_or_existing_atom("q").unwrap();

assert_eq!(atom_db.fresh_or_existing_atom("p"), Ok(p));
assert_eq!(atom_db.name_of(q), Some("q"));
assert_eq!(atom_db.value_of(p), None);
```
*/

use std::collections::HashMap;

use crate::{
    builder::NEGATION_MARKER,
    db::{keys::ClauseKey, trail::Assignment, LevelIndex},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// The name of each atom, indexed by atom.
    names: Vec<String>,

    /// A map from names to atoms.
    atom_map: HashMap<String, Atom>,

    /// The current (partial) valuation.
    valuation: CValuation,

    /// The decision level at which each valued atom was valued.
    levels: Vec<Option<LevelIndex>>,

    /// The clause which forced the value of each atom valued through BCP.
    antecedents: Vec<Option<ClauseKey>>,
}

impl AtomDB {
    /// The atom with the given name, if one exists, and otherwise a fresh atom with the name.
    pub fn fresh_or_existing_atom(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        if let Some(atom) = self.atom_map.get(name) {
            return Ok(*atom);
        }

        let atom = self.names.len() as Atom;
        if atom > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted);
        }

        self.names.push(name.to_owned());
        self.atom_map.insert(name.to_owned(), atom);
        self.valuation.push(None);
        self.levels.push(None);
        self.antecedents.push(None);

        Ok(atom)
    }

    /// The atom with the given name, if one exists.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atom_map.get(name).copied()
    }

    /// The name of an atom, if the atom exists.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// An iterator through the names of all atoms, in atom order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The value of a literal on the current valuation, if the atom of the literal has some value.
    pub fn literal_value(&self, literal: &CLiteral) -> Option<bool> {
        self.valuation.literal_value(literal)
    }

    /// The decision level at which an atom was valued, if the atom has some value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// The clause which forced the value of an atom, if the atom was valued through BCP.
    pub fn antecedent_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.antecedents.get(atom as usize).copied().flatten()
    }

    /// Values the atom of an assignment, noting the level and antecedent of the assignment.
    ///
    /// The counterpart of [drop_value](AtomDB::drop_value).
    pub(crate) fn set_value(&mut self, assignment: &Assignment) {
        let index = assignment.literal.atom() as usize;
        self.valuation[index] = Some(assignment.literal.polarity());
        self.levels[index] = Some(assignment.level);
        self.antecedents[index] = assignment.antecedent;
    }

    /// Clears the value, level, and antecedent of an atom.
    ///
    /// The counterpart of [set_value](AtomDB::set_value).
    pub(crate) fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        self.valuation[index] = None;
        self.levels[index] = None;
        self.antecedents[index] = None;
    }

    /// The literal written as in the input, e.g. `x3` or `x3bar`.
    pub fn literal_string(&self, literal: &CLiteral) -> String {
        let name = self.name_of(literal.atom()).unwrap_or("?");
        match literal.polarity() {
            true => name.to_owned(),
            false => format!("{name}{NEGATION_MARKER}"),
        }
    }

    /// The clause written as in the input, e.g. `x1 + x3bar`.
    pub fn clause_string(&self, clause: &impl Clause) -> String {
        clause
            .literals()
            .map(|literal| self.literal_string(literal))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Each atom name paired with its atom, in atom order, e.g. `<x1,0> <x3,1>`.
    pub fn index_string(&self) -> String {
        self.names
            .iter()
            .enumerate()
            .map(|(atom, name)| format!("<{name},{atom}>"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The current valuation as a string of literals, e.g. `x1 x2bar`.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .atom_value_pairs()
            .filter_map(|(atom, value)| value.map(|v| self.literal_string(&CLiteral::new(atom, v))))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_in_order_of_appearance() {
        let mut atom_db = AtomDB::default();
        assert_eq!(atom_db.fresh_or_existing_atom("b"), Ok(0));
        assert_eq!(atom_db.fresh_or_existing_atom("a"), Ok(1));
        assert_eq!(atom_db.fresh_or_existing_atom("b"), Ok(0));
        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn set_and_drop() {
        let mut atom_db = AtomDB::default();
        let p = atom_db.fresh_or_existing_atom("p").unwrap();
        let key = ClauseKey::Original(0);

        atom_db.set_value(&Assignment {
            literal: CLiteral::new(p, false),
            level: 2,
            antecedent: Some(key),
        });
        assert_eq!(atom_db.value_of(p), Some(false));
        assert_eq!(atom_db.level_of(p), Some(2));
        assert_eq!(atom_db.antecedent_of(p), Some(key));
        assert_eq!(atom_db.valuation_string(), "pbar");

        atom_db.drop_value(p);
        assert_eq!(atom_db.value_of(p), None);
        assert_eq!(atom_db.level_of(p), None);
        assert_eq!(atom_db.antecedent_of(p), None);
    }

    #[test]
    fn strings() {
        let mut atom_db = AtomDB::default();
        let x1 = atom_db.fresh_or_existing_atom("x1").unwrap();
        let x3 = atom_db.fresh_or_existing_atom("x3").unwrap();

        let clause = vec![CLiteral::new(x1, true), CLiteral::new(x3, false)];
        assert_eq!(atom_db.clause_string(&clause), "x1 + x3bar");
        assert_eq!(atom_db.index_string(), "<x1,0> <x3,1>");
    }
}
