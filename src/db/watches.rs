/*!
A structure to record which clauses are watching a literal.

# Theory

BCP applies to a clause only when every literal of the clause but one is false.
So, a clause need only be inspected when one of two chosen literals (the 'watched' literals) becomes false.
- If the clause has two literals, neither of which are false, the clause cannot be used for BCP.
- If one watched literal becomes false, the clause is inspected to find some other literal to watch, or to find the clause is unit or in conflict.

For each literal the watch database records the keys of clauses watching the literal.
A clause with two or more literals is watched by exactly two of its literals, and a unit clause never watches any literal.

For the update of watches, see [update_watch](crate::db::clause::db_clause::DBClause::update_watch).

# Literature

[The art of computer programming, Volume 4](https://www-cs-faculty.stanford.edu/~knuth/taocp.html) discusses watched literals in the *Lazy data structures* section of *Backtracking Algorithms*.
And, general use of watched literals followed from [Chaff](https://dl.acm.org/doi/10.1145/378239.379017).
*/

use crate::{
    db::keys::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

#[derive(Default)]
pub struct Watches {
    /// The watch list of each literal, indexed by [Literal::index].
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Notes the clause `key` is watching `literal`.
    pub fn watch(&mut self, literal: &CLiteral, key: ClauseKey) {
        let index = literal.index();
        if self.lists.len() <= index {
            self.lists.resize_with(index + 1, Vec::default);
        }
        self.lists[index].push(key);
    }

    /// The keys of clauses watching `literal`.
    pub fn watchers_of(&self, literal: &CLiteral) -> &[ClauseKey] {
        match self.lists.get(literal.index()) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Takes the watch list of `literal`, leaving an empty list until the list is restored.
    /// To be used in conjunction with [restore_watchers](Watches::restore_watchers).
    pub(crate) fn take_watchers(&mut self, literal: &CLiteral) -> Vec<ClauseKey> {
        match self.lists.get_mut(literal.index()) {
            Some(list) => std::mem::take(list),
            None => Vec::default(),
        }
    }

    /// Restores a watch list taken by [take_watchers](Watches::take_watchers).
    ///
    /// Any watches noted while the list was taken are kept.
    pub(crate) fn restore_watchers(&mut self, literal: &CLiteral, mut watchers: Vec<ClauseKey>) {
        let index = literal.index();
        if self.lists.len() <= index {
            self.lists.resize_with(index + 1, Vec::default);
        }
        let noted = std::mem::take(&mut self.lists[index]);
        watchers.extend(noted);
        self.lists[index] = watchers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_take_restore() {
        let mut watches = Watches::default();
        let p = CLiteral::new(2, false);

        assert!(watches.watchers_of(&p).is_empty());

        watches.watch(&p, ClauseKey::Original(0));
        watches.watch(&p, ClauseKey::Addition(0));
        assert_eq!(watches.watchers_of(&p), &[ClauseKey::Original(0), ClauseKey::Addition(0)]);
        assert!(watches.watchers_of(&p.negate()).is_empty());

        let taken = watches.take_watchers(&p);
        assert!(watches.watchers_of(&p).is_empty());

        watches.watch(&p, ClauseKey::Original(1));
        watches.restore_watchers(&p, taken);
        assert_eq!(
            watches.watchers_of(&p),
            &[ClauseKey::Original(0), ClauseKey::Addition(0), ClauseKey::Original(1)]
        );
    }
}
