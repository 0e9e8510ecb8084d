/*!
A database of clauses.

The clause database owns every clause of a solve:
- Original clauses, read as part of the formula.
- Addition clauses, learned through [conflict analysis](crate::procedures::analysis).

Each clause is accessed through a [ClauseKey], which encodes whether the clause is original or an addition together with an index.
Clauses are only ever added to the database, and so a key remains valid throughout a solve.

The database also owns the [watch lists](crate::db::watches) of each literal.
When a clause of two or more literals is stored the first and last literals of the clause are watched.
A unit clause is instead noted as a standing unit clause, and the literal of the clause is valued at the start of a solve (or on learning the clause).

```rust
# use bar_sat::db::clause::ClauseDB;
# use bar_sat::structures::clause::ClauseSource;
# use bar_sat::structures::literal::{CLiteral, Literal};
let mut clause_db = ClauseDB::default();
let p = CLiteral::new(0, true);
let q = CLiteral::new(1, false);

let key = clause_db.store(vec![p, q], ClauseSource::Original).unwrap();
assert_eq!(clause_db.watchers_of(&p), &[key]);
assert_eq!(clause_db.watchers_of(&q), &[key]);

let unit = clause_db.store(vec![q], ClauseSource::Original).unwrap();
assert_eq!(clause_db.unit_keys(), &[unit]);
```
*/

pub mod db_clause;
use db_clause::{DBClause, WatchStatus};

use crate::{
    db::{keys::ClauseKey, watches::Watches},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, ClauseSource},
        literal::CLiteral,
        valuation::Valuation,
    },
    types::err::{self},
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Original clauses, indexed by the key of the clause.
    original: Vec<DBClause>,

    /// Addition clauses, indexed by the key of the clause.
    addition: Vec<DBClause>,

    /// Keys to all unit clauses, original or addition.
    unit_keys: Vec<ClauseKey>,

    /// The watch list of each literal.
    watches: Watches,
}

impl ClauseDB {
    /// Stores a clause and returns the key to the clause.
    ///
    /// The clause must contain some literal, and no literal more than once.
    /// A clause which contains some literal and its negation is stored, though it is satisfied on every valuation.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }

        if clause
            .iter()
            .enumerate()
            .any(|(index, literal)| clause[index + 1..].contains(literal))
        {
            return Err(err::ClauseDBError::DuplicateLiteral);
        }

        let key = match source {
            ClauseSource::Original => ClauseKey::Original(self.original.len() as u32),
            ClauseSource::Resolution => ClauseKey::Addition(self.addition.len() as u32),
        };

        let db_clause = DBClause::from(key, clause);

        match db_clause.watched_literals() {
            None => self.unit_keys.push(key),
            Some([first, last]) => {
                self.watches.watch(&first, key);
                self.watches.watch(&last, key);
            }
        }

        log::debug!(target: targets::CLAUSE_DB, "Stored {key}: {db_clause}");

        match key {
            ClauseKey::Original(_) => self.original.push(db_clause),
            ClauseKey::Addition(_) => self.addition.push(db_clause),
        }

        Ok(key)
    }

    /// The clause stored with the given key.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(index) => self.original.get(*index as usize),
            ClauseKey::Addition(index) => self.addition.get(*index as usize),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index) => self.addition.get_mut(*index as usize),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// The keys of clauses watching `literal`.
    pub fn watchers_of(&self, literal: &CLiteral) -> &[ClauseKey] {
        self.watches.watchers_of(literal)
    }

    /// Keys to every unit clause, in order of storage.
    pub fn unit_keys(&self) -> &[ClauseKey] {
        &self.unit_keys
    }

    /// An iterator over all original clauses, in order of storage.
    pub fn original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original.iter()
    }

    /// An iterator over all addition clauses, in order of storage.
    pub fn addition_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.addition.iter()
    }

    /// An iterator over all clauses, original clauses first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.original.iter().chain(self.addition.iter())
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    /// A count of addition clauses.
    pub fn addition_count(&self) -> usize {
        self.addition.len()
    }

    /// Updates the watches of the clause `key`, on the assumption `literal` is watched by the clause and has become false.
    ///
    /// See [DBClause::update_watch].
    pub(crate) fn update_watch(
        &mut self,
        key: ClauseKey,
        literal: CLiteral,
        valuation: &impl Valuation,
    ) -> Result<WatchStatus, err::ClauseDBError> {
        // The watches are split from the clause to allow a watch to be noted as the clause is mutated.
        let mut watches = std::mem::take(&mut self.watches);
        let status = self
            .get_mut(&key)
            .map(|db_clause| db_clause.update_watch(literal, valuation, &mut watches));
        self.watches = watches;
        status
    }

    /// Takes the watch list of `literal`.
    /// See [Watches::take_watchers].
    pub(crate) fn take_watchers(&mut self, literal: &CLiteral) -> Vec<ClauseKey> {
        self.watches.take_watchers(literal)
    }

    /// Restores the watch list of `literal`.
    /// See [Watches::restore_watchers].
    pub(crate) fn restore_watchers(&mut self, literal: &CLiteral, watchers: Vec<ClauseKey>) {
        self.watches.restore_watchers(literal, watchers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn empty_and_duplicate() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);

        assert_eq!(
            clause_db.store(vec![], ClauseSource::Original),
            Err(err::ClauseDBError::EmptyClause)
        );
        assert_eq!(
            clause_db.store(vec![p, p], ClauseSource::Original),
            Err(err::ClauseDBError::DuplicateLiteral)
        );
        assert_eq!(clause_db.original_count(), 0);
    }

    #[test]
    fn tautology_is_stored() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);

        let key = clause_db.store(vec![p, p.negate()], ClauseSource::Original);
        assert_eq!(key, Ok(ClauseKey::Original(0)));
        assert_eq!(clause_db.watchers_of(&p), &[ClauseKey::Original(0)]);
        assert_eq!(clause_db.watchers_of(&p.negate()), &[ClauseKey::Original(0)]);
    }

    #[test]
    fn keys_by_source() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let original = clause_db.store(vec![p, q], ClauseSource::Original).unwrap();
        let addition = clause_db.store(vec![p.negate()], ClauseSource::Resolution).unwrap();

        assert_eq!(original, ClauseKey::Original(0));
        assert_eq!(addition, ClauseKey::Addition(0));
        assert_eq!(clause_db.unit_keys(), &[addition]);
        assert_eq!(clause_db.all_clauses().count(), 2);
        assert!(clause_db.get(&ClauseKey::Addition(1)).is_err());
    }
}
