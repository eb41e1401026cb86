//! Freeform trees, ones which don't impose any restrictions on the number of child nodes that a branch node can have.
//!
//! Branch nodes and leaf nodes may carry different payload types. A leaf which gets a child inserted into it through the zipper becomes a branch, with its payload converted using [`Into`].
//!
//! # Example
//! ```rust
//! use kindling::{FreeformNode, NodeValue, Zipper};
//!
//! let tree = FreeformNode::branch("fn", vec![
//!     FreeformNode::leaf("main"),
//!     FreeformNode::branch("block", vec![]),
//! ]);
//!
//! let zipper = Zipper::new(tree)
//!     .down()
//!     .and_then(|zipper| zipper.right())
//!     .unwrap() // You can replace this with proper error handling
//!     .append_child(FreeformNode::leaf("return"));
//! assert_eq!(zipper.node().value(), NodeValue::Branch(&"block"));
//! assert_eq!(zipper.node().children().len(), 1);
//! ```
//!
//! [`Into`]: https://doc.rust-lang.org/std/convert/trait.Into.html " "

use alloc::vec::Vec;
use crate::{NodeValue, Tree};


/// A node of a freeform tree, owning its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FreeformNode<B, L = B> {
    /// A node which can have children. Can also have zero children, in which case it's still considered a branch.
    Branch {
        /// The data payload of the node.
        payload: B,
        /// The children of the node, in order.
        children: Vec<FreeformNode<B, L>>,
    },
    /// A node which cannot have children until it's converted into a branch.
    Leaf(L),
}
impl<B, L> FreeformNode<B, L> {
    /// Creates a leaf node with the specified payload.
    #[inline(always)]
    pub const fn leaf(payload: L) -> Self {
        Self::Leaf(payload)
    }
    /// Creates a branch node with the specified payload and children.
    #[inline]
    pub fn branch(payload: B, children: impl IntoIterator<Item = Self>) -> Self {
        Self::Branch {
            payload,
            children: children.into_iter().collect(),
        }
    }
    /// Returns `true` if the node is a leaf, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(..))
    }
    /// Returns a by-reference `NodeValue` of the node.
    #[inline]
    pub fn value(&self) -> NodeValue<&'_ B, &'_ L> {
        match self {
            Self::Branch { payload, .. } => NodeValue::Branch(payload),
            Self::Leaf(payload) => NodeValue::Leaf(payload),
        }
    }
    /// Returns a *mutable* by-reference `NodeValue` of the node, allowing modifications.
    #[inline]
    pub fn value_mut(&mut self) -> NodeValue<&'_ mut B, &'_ mut L> {
        match self {
            Self::Branch { payload, .. } => NodeValue::Branch(payload),
            Self::Leaf(payload) => NodeValue::Leaf(payload),
        }
    }
    /// Returns the children of the node. Leaves have none.
    #[inline]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Branch { children, .. } => children,
            Self::Leaf(..) => &[],
        }
    }
    /// Discards the children of the node and returns its payload.
    #[inline]
    pub fn into_value(self) -> NodeValue<B, L> {
        match self {
            Self::Branch { payload, .. } => NodeValue::Branch(payload),
            Self::Leaf(payload) => NodeValue::Leaf(payload),
        }
    }
}
impl<B, L: Into<B>> Tree for FreeformNode<B, L> {
    #[inline]
    fn into_children(self) -> Result<(Self, Vec<Self>), Self> {
        match self {
            Self::Branch { payload, children } => Ok((
                Self::Branch {
                    payload,
                    children: Vec::new(),
                },
                children,
            )),
            leaf => Err(leaf),
        }
    }
    #[inline]
    fn make(self, children: Vec<Self>) -> Self {
        let payload = match self.into_value() {
            NodeValue::Branch(payload) => payload,
            NodeValue::Leaf(payload) => payload.into(),
        };
        Self::Branch { payload, children }
    }
    #[inline]
    fn with_children(self, children: Vec<Self>) -> Self {
        self.make(children)
    }
    #[inline]
    fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
}
