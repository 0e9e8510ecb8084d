/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where the value of atom *a* is at index *a*:
-  *v*\[a\] = Some(true) *if and only if* the atom is true.
-  *v*\[a\] = Some(false) *if and only if* the atom is false.
-  *v*\[a\] = None *if and only if* the atom has no value.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use bar_sat::structures::valuation::Valuation;
# use bar_sat::structures::literal::{CLiteral, Literal};
let valuation = vec![Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.literal_value(&CLiteral::new(2, false)), Some(true));
assert_eq!(valuation.unvalued_atoms().count(), 1);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if any.
    ///
    /// An atom outside the valuation has no value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal under the valuation, if the atom of the literal has some value.
    fn literal_value(&self, literal: &CLiteral) -> Option<bool>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// An iterator through all (Atom, Value) pairs.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn literal_value(&self, literal: &CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .map(|(atom, value)| (atom as Atom, *value))
    }
}
