/*!
A structure to derive an asserting clause from a conflict by resolution.

The buffer implements the first unique implication point (1-UIP) method:
- Literals of the conflict clause are marked.
  Those valued at the current level are counted as pending, those at some previous (positive) level are kept aside, and those valued at level zero are dropped, as their negations are consequences of the formula.
- The trail is examined backwards from the most recent assignment.
  On reaching a marked atom, the count of pending literals drops by one, and if some other literal remains pending the antecedent of the atom is resolved into the buffer by marking each of its literals in the same way.
- Once exactly one pending literal remains, the (negation of the) assignment to the atom is the unique implication point.

The asserting clause is the negation of the unique implication point together with the literals kept aside.
The asserting literal is placed first in the clause and a literal of the highest remaining level is placed last, so that the first and last literals are suitable watches after a backjump.

# Panics
Resolution panics if a literal of the clause has no value, if an assignment above level zero and after the unique implication point has no antecedent, or if the trail is exhausted before a unique implication point is found.
Each case is a corruption of the trail or of the clause database.
*/

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// A buffer for use when applying resolution to a sequence of clauses.
#[derive(Default)]
pub struct ResolutionBuffer {
    /// Whether each atom has been marked during the current resolution.
    seen: Vec<bool>,

    /// Literals of the resolvent valued at some level between zero and the current level.
    lower: CClause,

    /// A count of literals of the resolvent valued at the current level.
    pending: usize,
}

impl ResolutionBuffer {
    /// Clears the buffer, sized for the given count of atoms.
    fn refresh(&mut self, atom_count: usize) {
        self.seen.clear();
        self.seen.resize(atom_count, false);
        self.lower.clear();
        self.pending = 0;
    }

    /// Marks each unmarked literal of `literals`, sorted by level.
    fn mark<'l>(
        &mut self,
        literals: impl Iterator<Item = &'l CLiteral>,
        atom_db: &AtomDB,
        level: LevelIndex,
    ) {
        for literal in literals {
            let atom = literal.atom() as usize;
            if self.seen[atom] {
                continue;
            }
            self.seen[atom] = true;

            match atom_db.level_of(literal.atom()) {
                None => panic!("! Resolution on {literal}, which has no value"),
                Some(0) => {}
                Some(l) if l == level => self.pending += 1,
                Some(_) => self.lower.push(*literal),
            }
        }
    }

    /// Resolves from the conflict clause `key` through the assignments of the current level until a unique implication point is found, and returns the asserting clause.
    ///
    /// For details, see [resolution_buffer](crate::resolution_buffer).
    pub fn resolve_through_current_level(
        &mut self,
        key: &ClauseKey,
        clause_db: &ClauseDB,
        atom_db: &AtomDB,
        trail: &Trail,
    ) -> CClause {
        let level = trail.level();
        self.refresh(atom_db.count());

        let Ok(conflict) = clause_db.get(key) else {
            panic!("! Missing conflict clause {key}");
        };
        self.mark(conflict.iter(), atom_db, level);

        let mut uip = None;
        for assignment in trail.assignments().iter().rev() {
            if assignment.level != level {
                break;
            }

            if !self.seen[assignment.literal.atom() as usize] {
                continue;
            }

            self.pending -= 1;
            if self.pending == 0 {
                uip = Some(assignment.literal);
                break;
            }

            let Some(antecedent) = assignment.antecedent else {
                panic!("! No antecedent for {}", assignment.literal);
            };
            let Ok(antecedent) = clause_db.get(&antecedent) else {
                panic!("! Missing antecedent clause {antecedent}");
            };
            self.mark(antecedent.iter(), atom_db, level);
        }

        let Some(uip) = uip else {
            panic!("! No unique implication point isolated at level {level}");
        };

        let mut clause = Vec::with_capacity(self.lower.len() + 1);
        clause.push(uip.negate());
        clause.append(&mut self.lower);

        let highest = clause
            .iter()
            .enumerate()
            .skip(1)
            .max_by_key(|(_, literal)| atom_db.level_of(literal.atom()))
            .map(|(index, _)| index);
        if let Some(index) = highest {
            let last = clause.len() - 1;
            clause.swap(index, last);
        }

        clause
    }
}
