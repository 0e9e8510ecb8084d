/*!
The trail of assignments made during a solve.

The trail is the single record of what is valued now.
Each [Assignment] notes a literal made true, the decision level of the assignment, and the clause which forced the assignment (if any).

Two invariants are kept:
- At most one assignment is made to any atom.
- Decision levels are non-decreasing along the trail.

Level zero holds only consequences of the formula itself, and a new level is opened only by a decision.

The trail doubles as the queue of [BCP](crate::procedures::bcp).
Assignments are propagated in the order they were made, and the queue head notes the first assignment which has not been propagated.
*/

use crate::{
    db::{keys::ClauseKey, LevelIndex},
    structures::literal::CLiteral,
};

/// An assignment of a literal to true, at some level, with the clause which forced the assignment (or none, for a decision).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The literal made true.
    pub literal: CLiteral,

    /// The decision level of the assignment.
    pub level: LevelIndex,

    /// The clause which forced the assignment, if the assignment is not a decision.
    pub antecedent: Option<ClauseKey>,
}

#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order.
    assignments: Vec<Assignment>,

    /// The index of the first assignment of each (non-zero) level.
    level_indicies: Vec<usize>,

    /// The index of the first assignment yet to be propagated.
    q_head: usize,
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// All assignments, in order of assignment.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// The decision which opened the given level, if the level exists and is not level zero.
    pub fn decision_at(&self, level: LevelIndex) -> Option<&Assignment> {
        let start = *self.level_indicies.get((level as usize).checked_sub(1)?)?;
        self.assignments.get(start)
    }

    /// True if every assignment has been propagated.
    pub fn queue_is_empty(&self) -> bool {
        self.q_head >= self.assignments.len()
    }

    /// Stores an assignment to the top level.
    ///
    /// # Soundness
    /// Does not set the *valuation* of the atom.
    pub(crate) fn store_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Opens a fresh level, to which the next stored assignment is the decision.
    pub(crate) fn open_level(&mut self) {
        self.level_indicies.push(self.assignments.len());
    }

    /// Returns the next assignment to propagate, if any, and advances the queue.
    pub(crate) fn next_queued(&mut self) -> Option<CLiteral> {
        let assignment = self.assignments.get(self.q_head)?;
        self.q_head += 1;
        Some(assignment.literal)
    }

    /// Removes levels above the given level index, if they exist, and returns the removed assignments in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub(crate) fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<Assignment> {
        // level_indicies stores with zero-indexing, and so the start of level l + 1 is at level_indicies[l].
        if let Some(&level_start) = self.level_indicies.get(level as usize) {
            self.level_indicies.truncate(level as usize);
            let removed = self.assignments.split_off(level_start);
            self.q_head = std::cmp::min(self.q_head, self.assignments.len());
            removed
        } else {
            Vec::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    fn assignment(atom: u32, level: LevelIndex) -> Assignment {
        Assignment {
            literal: CLiteral::new(atom, true),
            level,
            antecedent: None,
        }
    }

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.store_assignment(assignment(0, 0));
        assert_eq!(trail.level(), 0);

        trail.open_level();
        trail.store_assignment(assignment(1, 1));
        trail.store_assignment(assignment(2, 1));
        trail.open_level();
        trail.store_assignment(assignment(3, 2));

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.decision_at(1), Some(&assignment(1, 1)));
        assert_eq!(trail.decision_at(0), None);

        let removed = trail.clear_assignments_above(0);
        assert_eq!(removed.len(), 3);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assignments(), &[assignment(0, 0)]);
    }

    #[test]
    fn queue() {
        let mut trail = Trail::default();
        trail.store_assignment(assignment(0, 0));
        trail.open_level();
        trail.store_assignment(assignment(1, 1));

        assert_eq!(trail.next_queued(), Some(CLiteral::new(0, true)));
        assert_eq!(trail.next_queued(), Some(CLiteral::new(1, true)));
        assert_eq!(trail.next_queued(), None);
        assert!(trail.queue_is_empty());

        trail.clear_assignments_above(0);
        trail.store_assignment(assignment(2, 0));
        assert_eq!(trail.next_queued(), Some(CLiteral::new(2, true)));
    }

    #[test]
    fn clear_above_current_is_a_no_op() {
        let mut trail = Trail::default();
        trail.open_level();
        trail.store_assignment(assignment(0, 1));
        assert!(trail.clear_assignments_above(1).is_empty());
        assert_eq!(trail.assignments().len(), 1);
    }
}
