//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical implementation of the [Literal] trait is [CLiteral], made of an atom and a boolean.
//! Negation is an explicit polarity bit, set once when a formula is read.
//! Nothing during a solve inspects the name of an atom to determine the polarity of a literal.
//!
//! ```rust
//! # use bar_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//!
//! assert!(literal.negate() < literal);
//! assert!(literal < CLiteral::new(80, false));
//! ```
//!
//! Literals are ordered by atom and then polarity, with 'false' (strictly) less than 'true'.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// A dense index of the literal, `2 * atom + polarity`.
    ///
    /// Used to index structures with an entry for each literal, such as [watch lists](crate::db::watches).
    fn index(&self) -> usize;
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn index(&self) -> usize {
        2 * (self.atom as usize) + (self.polarity as usize)
    }
}

impl CLiteral {
    /// Whether the literal and `other` are complementary, i.e. share an atom with opposite polarity.
    pub fn complements(&self, other: &CLiteral) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

/// A literal without access to atom names is written with the internal atom, and `-` for negation.
impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement() {
        let p = CLiteral::new(3, true);
        assert!(p.complements(&p.negate()));
        assert!(!p.complements(&p));
        assert!(!p.complements(&CLiteral::new(4, false)));
    }

    #[test]
    fn index_is_dense() {
        let indicies = [
            CLiteral::new(0, false).index(),
            CLiteral::new(0, true).index(),
            CLiteral::new(1, false).index(),
            CLiteral::new(1, true).index(),
        ];
        assert_eq!(indicies, [0, 1, 2, 3]);
    }

    #[test]
    fn ordering() {
        let mut literals = vec![
            CLiteral::new(2, true),
            CLiteral::new(0, true),
            CLiteral::new(2, false),
            CLiteral::new(1, false),
        ];
        literals.sort();
        assert_eq!(
            literals,
            vec![
                CLiteral::new(0, true),
                CLiteral::new(1, false),
                CLiteral::new(2, false),
                CLiteral::new(2, true),
            ]
        );
    }
}
