//! The trait through which the zipper takes nodes apart and puts them back together.

use alloc::vec::Vec;

/// Tree-like data structures which can be taken apart and rebuilt by a [`Zipper`].
///
/// The zipper never looks inside a node on its own: all it needs is a way to detach a node's children, to reattach a new list of children and to turn a leaf into a branch. A node which refuses to give away children is an *atom*, a leaf that cannot be descended into.
///
/// Taking children out leaves behind a *shell*: the node with its own payload (label, metadata, span information and so on) intact but with no children. Shells are only ever handed back to [`make`], so an implementation is free to leave them in whatever childless state is cheapest.
///
/// # Contract
/// - For any branch `node` whose `into_children` returns `Ok((shell, cs))`, `shell.make(cs)` must be equal to `node`.
/// - For admissible `cs`, `shell.make(cs).into_children()` must return `cs` back in the same order.
/// - `make` and `with_children` only replace the node's own child list.
///
/// Trees which restrict the number of children (see [`BinaryNode`]) may panic when given a child list they cannot hold. Breaking the contract is a logic error: it cannot cause undefined behavior, but the zipper may rebuild a different tree than expected.
///
/// [`Zipper`]: ../zipper/struct.Zipper.html " "
/// [`make`]: #tymethod.make " "
/// [`BinaryNode`]: ../binary_tree/struct.BinaryNode.html " "
pub trait Tree: Sized {
    /// Detaches the ordered children of a branch node, returning the shell and the children, or gives the node back as `Err` if it's an atom.
    ///
    /// A branch with zero children is still a branch and should return `Ok` with an empty list.
    ///
    /// # Errors
    /// Returns the node itself if it cannot have children.
    fn into_children(self) -> Result<(Self, Vec<Self>), Self>;
    /// Rebuilds the node with the specified list of children, keeping its own payload.
    fn make(self, children: Vec<Self>) -> Self;
    /// Turns a node which was an atom into a branch with the specified children.
    ///
    /// Only called by the zipper on nodes for which [`into_children`] returned `Err`. How (and whether) the atom's own payload survives the conversion is up to the tree type.
    ///
    /// [`into_children`]: #tymethod.into_children " "
    fn with_children(self, children: Vec<Self>) -> Self;
    /// Returns `true` if the node can have children, `false` if it's an atom.
    ///
    /// Must agree with [`into_children`]: `true` exactly when it would return `Ok`.
    ///
    /// [`into_children`]: #tymethod.into_children " "
    fn is_branch(&self) -> bool;
}
