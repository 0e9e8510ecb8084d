//! Error types used in the library.
//!
//! - Errors are external: malformed input, or a request made of a context in the wrong state.
//! - Conflicts found during a solve are *not* errors, and are instead returned as values to the solve loop.
//!   See [BCPResult](crate::procedures::bcp::BCPResult) and [AnalysisResult](crate::procedures::analysis::AnalysisResult).
//! - Violations of internal invariants (e.g. conflict analysis failing to isolate a unique implication point) are bugs, and panic.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "{e}"),
            Self::ClauseDB(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

impl std::fmt::Display for AtomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms remain"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause contains the same literal twice.
    DuplicateLiteral,

    /// A clause contains an atom unknown to the atom database.
    UnknownAtom,

    /// A key does not refer to any stored clause.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause => write!(f, "a clause must contain some literal"),
            Self::DuplicateLiteral => write!(f, "a clause contains the same literal twice"),
            Self::UnknownAtom => write!(f, "a clause contains an unknown atom"),
            Self::Missing => write!(f, "no clause is stored with the given key"),
        }
    }
}

/// Errors during parsing.
///
/// Each error notes the (one-indexed) line of the input on which it occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty line, where some clause was required.
    EmptyClause(usize),

    /// An empty literal, e.g. from `x1 + + x2`.
    EmptyLiteral(usize),

    /// A negation marker was read, but no candidate for negation was found.
    Negation(usize),

    /// A clause repeats some literal.
    DuplicateLiteral(usize),

    /// The line could not be read.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause(line) => write!(f, "line {line}: empty clause"),
            Self::EmptyLiteral(line) => write!(f, "line {line}: empty literal"),
            Self::Negation(line) => write!(f, "line {line}: negation without a variable"),
            Self::DuplicateLiteral(line) => write!(f, "line {line}: repeated literal"),
            Self::Line(line) => write!(f, "line {line}: unreadable"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A solve has started, and so the formula may not be extended.
    SolveInProgress,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SolveInProgress => write!(f, "clauses may only be added before a solve"),
        }
    }
}
