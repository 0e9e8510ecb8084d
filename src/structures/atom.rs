/*!
(The internal representation of) an atom (aka. a 'variable').

Externally an atom is a name read from the input, such as `x1` or `valve_open`.
Internally each atom is a u32 *u* such that either *u* is 0, or *u - 1* is an atom.
So, the atoms of a context are [0..*m*) for some *m*, in order of first appearance in the input.

This representation allows atoms to be used as the indices of a structure, e.g. `values[atom]`.
The name of an atom is stored in the [atom database](crate::db::atom).

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Literals are indexed by `2 * atom + polarity`, and so half of the range is available.
pub const ATOM_MAX: Atom = Atom::MAX / 2;
