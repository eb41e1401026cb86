//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Children are stored inline in an [`ArrayVec`], with no separate allocation for the list itself. If a node has only one child, it's always treated as the left one, and removing the left child of a full branch shifts the right child into the position of the left one. A node without children is a leaf and cannot be descended into; inserting a child into it through the zipper makes it a branch.
//!
//! Being a fixed-arity tree, a binary tree node panics if it's rebuilt with more than two children, for example when a third child is inserted through the zipper. Check [`is_full`] before inserting children or siblings.
//!
//! # Example
//! ```rust
//! use kindling::{BinaryNode, Zipper};
//!
//! let tree = BinaryNode::branch("+", BinaryNode::new("1"), Some(BinaryNode::new("2")));
//!
//! let zipper = Zipper::new(tree).down().unwrap(); // You can replace this with proper error handling
//! assert_eq!(zipper.node().value(), &"1");
//! let zipper = zipper.right().unwrap(); // Same here
//! assert_eq!(zipper.node().value(), &"2");
//!
//! let tree = zipper.remove().unwrap().root(); // And here
//! assert!(tree.right_child().is_none());
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`is_full`]: struct.BinaryNode.html#method.is_full " "

use alloc::{boxed::Box, vec::Vec};
use core::mem;
use arrayvec::ArrayVec;
use crate::Tree;


type Children<T> = ArrayVec<[Box<BinaryNode<T>>; 2]>;

/// A node of a binary tree, owning up to two children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryNode<T> {
    value: T,
    children: Children<T>,
}
impl<T> BinaryNode<T> {
    /// Creates a leaf node with the specified value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: ArrayVec::new(),
        }
    }
    /// Creates a branch node with the specified value and children. A single child is always the left one.
    pub fn branch(value: T, left_child: Self, right_child: Option<Self>) -> Self {
        let mut children = ArrayVec::new();
        children.push(Box::new(left_child));
        if let Some(right_child) = right_child {
            children.push(Box::new(right_child));
        }
        Self { value, children }
    }
    /// Returns a reference to the value of the node.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }
    /// Returns a *mutable* reference to the value of the node.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    /// Returns `true` if the node has both children, `false` otherwise.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.children.is_full()
    }
    /// Returns a reference to the left child, or `None` if the node is a leaf.
    #[inline]
    pub fn left_child(&self) -> Option<&Self> {
        self.children.first().map(|child| &**child)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<&Self> {
        self.children.get(1).map(|child| &**child)
    }
}
impl<T> Tree for BinaryNode<T> {
    fn into_children(mut self) -> Result<(Self, Vec<Self>), Self> {
        if self.is_leaf() {
            return Err(self);
        }
        let children = mem::replace(&mut self.children, ArrayVec::new())
            .into_iter()
            .map(|child| *child)
            .collect();
        Ok((self, children))
    }
    /// Rebuilds the node with the specified children.
    ///
    /// # Panics
    /// Panics if there are more than two children.
    fn make(mut self, children: Vec<Self>) -> Self {
        assert!(
            children.len() <= 2,
            "a binary tree node cannot have {} children",
            children.len(),
        );
        self.children = children.into_iter().map(Box::new).collect();
        self
    }
    /// Same as [`make`].
    ///
    /// # Panics
    /// Panics if there are more than two children.
    ///
    /// [`make`]: #method.make " "
    #[inline]
    fn with_children(self, children: Vec<Self>) -> Self {
        self.make(children)
    }
    #[inline]
    fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
}
