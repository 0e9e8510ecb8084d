//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use bar_sat::structures::literal::{CLiteral, Literal};
//! # use bar_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(0, true),
//!                   CLiteral::new(1, false),
//!                   CLiteral::new(2, true)];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut valuation = vec![Some(false), Some(true), None];
//! assert_eq!(clause.asserts(&valuation), Some(CLiteral::new(2, true)));
//!
//! valuation[2] = Some(false);
//! assert!(clause.unsatisfiable_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing a single literal is a 'unit' clause, and the literal is the 'unit'.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived by resolution during conflict analysis.
    Resolution,
}

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, in the order of the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order of the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether every literal of the clause is false on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and every other literal of the clause is false.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The clause as a string of internal literals, e.g. `0 -1 2`.
    fn as_string(&self) -> String;
}

impl<T: std::ops::Deref<Target = [CLiteral]>> Clause for T {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.literal_value(literal) == Some(true))
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.literal_value(literal) == Some(false))
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut asserted = None;
        for literal in self.iter() {
            match valuation.literal_value(literal) {
                Some(true) => return None,
                Some(false) => {}
                None if asserted.is_some() => return None,
                None => asserted = Some(*literal),
            }
        }
        asserted
    }

    fn is_tautology(&self) -> bool {
        let literals: &[CLiteral] = self;
        literals.iter().enumerate().any(|(index, literal)| {
            literals[index + 1..]
                .iter()
                .any(|other| literal.complements(other))
        })
    }

    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::CValuation;

    #[test]
    fn satisfaction() {
        let clause = vec![CLiteral::new(0, true), CLiteral::new(1, false)];

        let empty: CValuation = vec![None, None];
        assert!(!clause.satisfied_on(&empty));
        assert!(!clause.unsatisfiable_on(&empty));

        let second_false: CValuation = vec![None, Some(false)];
        assert!(clause.satisfied_on(&second_false));

        let both_fail: CValuation = vec![Some(false), Some(true)];
        assert!(clause.unsatisfiable_on(&both_fail));
    }

    #[test]
    fn no_assertion_when_satisfied() {
        let clause = vec![CLiteral::new(0, true), CLiteral::new(1, true), CLiteral::new(2, true)];

        let first_true: CValuation = vec![Some(true), None, Some(false)];
        assert_eq!(clause.asserts(&first_true), None);

        let two_open: CValuation = vec![None, None, Some(false)];
        assert_eq!(clause.asserts(&two_open), None);
    }

    #[test]
    fn tautology() {
        let clause = vec![CLiteral::new(0, true), CLiteral::new(1, true), CLiteral::new(0, false)];
        assert!(clause.is_tautology());

        let clause = vec![CLiteral::new(0, true), CLiteral::new(1, false)];
        assert!(!clause.is_tautology());
    }
}
