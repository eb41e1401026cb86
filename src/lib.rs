//! Implements tree zippers: cursors for navigating and locally editing arbitrary ordered trees.
//!
//! # Overview
//! A zipper is a cursor over a tree which it owns. It is *focused* on one node and remembers the way back to the root as a chain of crumbs, each holding the siblings and the parent of one level. Moving to a sibling, down to a child or editing the focused node never touches the rest of the tree; ancestors are only put back together when the zipper moves up to them or is closed. This makes local movements and edits cheap no matter how large the tree is, and lets algorithms walk a tree without planning out its shape in advance. Rewriting a parsed syntax tree one node at a time is the typical use case.
//!
//! Kindling doesn't prescribe a tree representation. Any type can be zipped as long as it implements [`Tree`], a small trait for taking a node's children out and putting a new list of children back in. Three tree types are provided out of the box:
//! - [`NestedList`]: lists of lists with atoms at the leaves, like S-expressions
//! - [`FreeformNode`]: nodes with payloads and any number of children
//! - [`BinaryNode`]: nodes with at most two children, stored inline
//!
//! # Traversal
//! The [`traversal`] module builds depth-first pre-order traversal on top of the zipper's movements: [`Zipper::next`] and [`Zipper::prev`] step through the nodes one at a time, while [`traverse`] and its relatives walk a whole tree, handing every node to a closure which may edit it, fold over it or stop the walk early.
//!
//! # Example
//! ```rust
//! use kindling::{nested_list, traverse, NestedList};
//!
//! let tree = nested_list![1, [2, 3], 4];
//! // Double every atom in the tree:
//! let doubled = traverse(tree, |zipper| {
//!     zipper.update(|node| match node {
//!         NestedList::Atom(x) => NestedList::Atom(x * 2),
//!         list => list,
//!     })
//! });
//! assert_eq!(doubled, nested_list![2, [4, 6], 8]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. An allocator is always required.
//! - `nested_list`, `freeform_tree`, `binary_tree` (**enabled by default**): the bundled tree types.
//! - `smallvec`: keeps the siblings of every level of the zipper in a [`SmallVec`] with inline capacity, avoiding allocations while walking trees with few children per node.
//!
//! # Public dependencies
//! - `arrayvec` (**required**, only visible through [`BinaryNode`]): `^0.5`
//! - `smallvec` (*optional*, not visible in the public API): `^1.4`
//!
//! [`Tree`]: tree/trait.Tree.html " "
//! [`NestedList`]: nested_list/enum.NestedList.html " "
//! [`FreeformNode`]: freeform_tree/enum.FreeformNode.html " "
//! [`BinaryNode`]: binary_tree/struct.BinaryNode.html " "
//! [`traversal`]: traversal/index.html " "
//! [`Zipper::next`]: zipper/struct.Zipper.html#method.next " "
//! [`Zipper::prev`]: zipper/struct.Zipper.html#method.prev " "
//! [`traverse`]: traversal/fn.traverse.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod tree;
#[doc(no_inline)]
pub use tree::Tree;

pub mod zipper;
pub use zipper::{Zipper, ZipperError, ZipperResult};

pub mod traversal;
pub use traversal::{
    traverse,
    traverse_with,
    traverse_while,
    traverse_while_with,
    Step,
    VisitorDirection,
};

#[cfg(feature = "nested_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nested_list")))]
pub mod nested_list;
#[cfg(feature = "nested_list")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nested_list")))]
pub use nested_list::NestedList;

#[cfg(feature = "freeform_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
pub mod freeform_tree;
#[cfg(feature = "freeform_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
pub use freeform_tree::FreeformNode;

#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub mod binary_tree;
#[cfg(feature = "binary_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
pub use binary_tree::BinaryNode;

/// A prelude for using Kindling, containing the most used items for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        tree::Tree,
        traversal::{Step, VisitorDirection},
        zipper::{Zipper, ZipperResult},
    };
    #[cfg(feature = "nested_list")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "nested_list")))]
    #[doc(no_inline)]
    pub use crate::nested_list::NestedList;
    #[cfg(feature = "freeform_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "freeform_tree")))]
    #[doc(no_inline)]
    pub use crate::freeform_tree::FreeformNode;
    #[cfg(feature = "binary_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_tree::BinaryNode;
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// The payload of a node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeValue<B, L = B> {
    /// The payload of a branch node, i.e. a node with children. Those are also sometimes referred to as internal nodes or inodes.
    Branch(B),
    /// The payload of a leaf node, i.e. a node without any children.
    Leaf(L),
}
impl<B, L> NodeValue<B, L> {
    /// Converts from `&NodeValue<B, L>` to `NodeValue<&B, &L>`.
    #[inline]
    pub const fn as_ref(&self) -> NodeValue<&B, &L> {
        match self {
            Self::Branch(x) => NodeValue::Branch(x),
            Self::Leaf(x) => NodeValue::Leaf(x),
        }
    }
    /// Converts from `&mut NodeValue<B, L>` to `NodeValue<&mut B, &mut L>`.
    #[inline]
    pub fn as_mut(&mut self) -> NodeValue<&mut B, &mut L> {
        match self {
            Self::Branch(x) => NodeValue::Branch(x),
            Self::Leaf(x) => NodeValue::Leaf(x),
        }
    }
    /// Returns `true` if this is the payload of a branch node, `false` otherwise.
    #[inline]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(..))
    }
}
impl<T> NodeValue<T, T> {
    /// Extracts the value, discarding information about whether the node was a leaf or branch. *Available only if the leaf and branch payloads are the same type.*
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_inner(self) -> T {
        match self {
              NodeValue::Branch(x)
            | NodeValue::Leaf(x)
            => x,
        }
    }
}

/// The direction of a zipper movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// To the first child.
    Down,
    /// To the parent.
    Up,
    /// To the previous sibling.
    Left,
    /// To the next sibling.
    Right,
    /// To the previous node in depth-first pre-order.
    Prev,
}
impl Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::Prev => "prev",
        })
    }
}

/// The reason why a zipper movement or edit could not be performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Failure {
    /// There is no node in the requested direction: the focus is a leaf, the root, or the first or last of its siblings.
    NoSuchMovement(Direction),
    /// The focus was the root node, which cannot be removed.
    RemoveAtRoot,
    /// The focus was the root node, which cannot have siblings.
    SiblingOfRoot,
}
impl Display for Failure {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NoSuchMovement(Direction::Down) => {
                "cannot move down from a node without children"
            }
            Self::NoSuchMovement(Direction::Up) => "cannot move up from the root node",
            Self::NoSuchMovement(Direction::Left) => "there is no sibling to the left",
            Self::NoSuchMovement(Direction::Right) => "there is no sibling to the right",
            Self::NoSuchMovement(Direction::Prev) => "the root node has no predecessor",
            Self::RemoveAtRoot => "cannot remove the root node of a tree",
            Self::SiblingOfRoot => "cannot insert siblings next to the root node of a tree",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for Failure {}

/// The error type returned when inspecting a traversal which has already reached its end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InvalidStateError;
impl Display for InvalidStateError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the traversal has already reached its end")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidStateError {}
