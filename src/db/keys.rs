/// The index to a clause, within the original or addition clauses of the [clause database](crate::db::clause).
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database original and addition clauses are stored in separate vectors, and a key contains the index to the clause in the relevant vector.
/// As no clause is ever removed from the database, a key is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original clause, read as part of the formula.
    Original(FormulaIndex),

    /// The key to an addition, learned through conflict analysis.
    Addition(FormulaIndex),
}

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        match self {
            Self::Original(i) | Self::Addition(i) => *i as usize,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key) => write!(f, "Addition({key})"),
        }
    }
}
