//! Nested lists: lists of lists with atoms at the leaves, the shape of S-expressions and of most quoted code.
//!
//! Only lists are branches; atoms cannot be descended into. A list which is empty is still a branch: it can get children through the zipper just like any other list.
//!
//! # Example
//! ```rust
//! use kindling::{nested_list, NestedList, Zipper};
//!
//! let tree = nested_list![1, 2, 3];
//! let tree = Zipper::new(tree)
//!     .down()
//!     .and_then(|zipper| zipper.right())
//!     .and_then(|zipper| zipper.insert_right(NestedList::Atom(42)))
//!     .unwrap() // You can replace this with proper error handling
//!     .root();
//! assert_eq!(tree, nested_list![1, 2, 42, 3]);
//! ```

use alloc::vec::Vec;
use core::fmt::{self, Formatter, Display};
use crate::Tree;


/// A list of lists with atoms of type `T` at the leaves.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NestedList<T> {
    /// A single value which cannot have children.
    Atom(T),
    /// An ordered list of nested lists and atoms.
    List(Vec<NestedList<T>>),
}
impl<T> NestedList<T> {
    /// Creates a list out of the specified items.
    #[inline]
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }
    /// Returns `true` if the node is an atom, `false` if it's a list.
    #[inline]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(..))
    }
    /// Returns a reference to the value of an atom, or `None` for a list.
    #[inline]
    pub const fn as_atom(&self) -> Option<&T> {
        match self {
            Self::Atom(value) => Some(value),
            Self::List(..) => None,
        }
    }
    /// Returns the items of a list, or `None` for an atom.
    #[inline]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::Atom(..) => None,
            Self::List(items) => Some(items),
        }
    }
}
impl<T> Tree for NestedList<T> {
    #[inline]
    fn into_children(self) -> Result<(Self, Vec<Self>), Self> {
        match self {
            Self::List(items) => Ok((Self::List(Vec::new()), items)),
            atom => Err(atom),
        }
    }
    #[inline]
    fn make(self, children: Vec<Self>) -> Self {
        Self::List(children)
    }
    /// Replaces the atom with a list of the specified children. Atoms have no room for children, so the atom's value is dropped.
    #[inline]
    fn with_children(self, children: Vec<Self>) -> Self {
        Self::List(children)
    }
    #[inline]
    fn is_branch(&self) -> bool {
        !self.is_atom()
    }
}
impl<T> From<Vec<NestedList<T>>> for NestedList<T> {
    #[inline(always)]
    fn from(items: Vec<NestedList<T>>) -> Self {
        Self::List(items)
    }
}
impl<T: Display> Display for NestedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(value) => Display::fmt(value, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Creates a [`NestedList`] with the same syntax as array literals, with nested brackets for nested lists.
///
/// Every atom has to be a single token tree: a literal, an identifier or something wrapped in parentheses, like `(-1)`.
///
/// ```rust
/// use kindling::{nested_list, NestedList};
///
/// let tree = nested_list![1, [2, (-3)], []];
/// assert_eq!(
///     tree,
///     NestedList::List(vec![
///         NestedList::Atom(1),
///         NestedList::List(vec![NestedList::Atom(2), NestedList::Atom(-3)]),
///         NestedList::List(vec![]),
///     ]),
/// );
/// ```
///
/// [`NestedList`]: nested_list/enum.NestedList.html " "
#[macro_export]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nested_list")))]
macro_rules! nested_list {
    (@item [$($inner:tt)*]) => {
        $crate::nested_list![$($inner)*]
    };
    (@item $atom:expr) => {
        $crate::nested_list::NestedList::Atom($atom)
    };
    ($($item:tt),* $(,)?) => {
        $crate::nested_list::NestedList::list([$($crate::nested_list!(@item $item)),*])
    };
}
