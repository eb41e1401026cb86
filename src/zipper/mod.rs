//! The zipper: a cursor which owns the tree it walks over.
//!
//! The module is home to the following items:
//! - [`Zipper`], the cursor itself: the focused node plus the path back to the root
//! - [`ZipperError`], the error returned by movements and edits which could not be performed, which gives the zipper back untouched
//! - [`ZipperResult`], the result type of such movements and edits
//!
//! The path back to the root is a chain of *crumbs*, one per level of depth. Each crumb holds the siblings to the left and to the right of the node below it and the shell of the parent node which those siblings were taken out of. Moving sideways only shuffles siblings between two stacks of a single crumb, while moving up puts the parent back together from its shell and the siblings. Edits to the focus are therefore never propagated upwards right away: the ancestors are rebuilt lazily, when the zipper climbs up to them.
//!
//! Depth-first traversal is built on top of the movements defined here, see the [`traversal`] module.
//!
//! [`Zipper`]: struct.Zipper.html " "
//! [`ZipperError`]: struct.ZipperError.html " "
//! [`ZipperResult`]: type.ZipperResult.html " "
//! [`traversal`]: ../traversal/index.html " "

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt::{self, Formatter, Debug, Display},
    mem,
};
use crate::{
    tree::Tree,
    util::{Siblings, siblings_from},
    Direction,
    Failure,
};

#[cfg(all(test, feature = "nested_list"))]
mod tests;

/// One level of context on the way back to the root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Crumb<T> {
    /// Siblings to the left of the focus in document order, so the nearest one is on top.
    left: Siblings<T>,
    /// Siblings to the right of the focus in *reverse* document order, so the nearest one is on top.
    right: Siblings<T>,
    /// The parent node with its children taken out.
    parent: T,
    parent_crumb: Option<Box<Crumb<T>>>,
}
impl<T: Tree> Crumb<T> {
    /// Puts the parent back together around the specified focus.
    fn close(self: Box<Self>, focus: T) -> (T, Option<Box<Crumb<T>>>) {
        let Crumb {
            left,
            right,
            parent,
            parent_crumb,
        } = *self;
        let mut children = Vec::with_capacity(left.len() + 1 + right.len());
        children.extend(left);
        children.push(focus);
        children.extend(right.into_iter().rev());
        (parent.make(children), parent_crumb)
    }
}

/// A cursor into an owned tree, focused on one of its nodes.
///
/// Every movement and edit consumes the zipper and produces a new one. Those which can fail return a [`ZipperResult`], the error variant of which holds the zipper exactly as it was before the call, so that a failed movement never loses the tree. If all you need is to know whether the movement succeeded, `.ok()` turns the result into an `Option`.
///
/// The zipper never becomes "finished" by itself: the terminal state of a depth-first traversal is represented by [`Step::End`] instead, which is a separate type of value.
///
/// # Example
/// ```rust
/// use kindling::{nested_list, NestedList, Zipper};
///
/// let zipper = Zipper::new(nested_list![1, [2, 3], 4]);
/// let zipper = zipper.down().unwrap(); // You can replace this with proper error handling
/// assert_eq!(zipper.node(), &NestedList::Atom(1));
///
/// let zipper = zipper
///     .right()
///     .unwrap() // Same here
///     .down()
///     .unwrap() // And here
///     .replace(NestedList::Atom(20));
/// assert_eq!(zipper.depth(), 2);
///
/// // Closing the zipper rebuilds every ancestor of the focus:
/// assert_eq!(zipper.root(), nested_list![1, [20, 3], 4]);
/// ```
///
/// [`ZipperResult`]: type.ZipperResult.html " "
/// [`Step::End`]: ../traversal/enum.Step.html#variant.End " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Zipper<T> {
    focus: T,
    crumb: Option<Box<Crumb<T>>>,
}

/// A result type for movements and edits which might not be possible at the zipper's position.
pub type ZipperResult<T> = Result<Zipper<T>, ZipperError<T>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<T> Zipper<T> {
    /// Creates a zipper focused on the root of the specified tree.
    #[inline]
    pub const fn new(root: T) -> Self {
        Self {
            focus: root,
            crumb: None,
        }
    }
    /// Returns a reference to the focused node.
    #[inline(always)]
    pub const fn node(&self) -> &T {
        &self.focus
    }
    /// Returns a *mutable* reference to the focused node. Changes made through it are picked up when the ancestors get rebuilt.
    #[inline(always)]
    pub fn node_mut(&mut self) -> &mut T {
        &mut self.focus
    }
    /// Discards the path to the root and returns the focused node.
    ///
    /// Unless the zipper is at the root, the rest of the tree is dropped. Use [`root`] to get the whole tree back.
    ///
    /// [`root`]: #method.root " "
    #[inline]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_node(self) -> T {
        self.focus
    }
    /// Returns `true` if the focus is the root of the tree, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.crumb.is_none()
    }
    /// Returns how far below the root the focus is. The root itself is at depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut crumb = self.crumb.as_deref();
        while let Some(current) = crumb {
            depth += 1;
            crumb = current.parent_crumb.as_deref();
        }
        depth
    }
    /// Returns a reference to the sibling immediately to the left of the focus, or `None` if there is none.
    #[inline]
    pub fn left_sibling(&self) -> Option<&T> {
        self.crumb.as_deref().and_then(|crumb| crumb.left.last())
    }
    /// Returns a reference to the sibling immediately to the right of the focus, or `None` if there is none.
    #[inline]
    pub fn right_sibling(&self) -> Option<&T> {
        self.crumb.as_deref().and_then(|crumb| crumb.right.last())
    }

    /// Moves the focus to the sibling on the left.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Left)`] if the focus is the leftmost child or the root.
    ///
    /// [`NoSuchMovement(Left)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    #[inline]
    pub fn left(self) -> ZipperResult<T> {
        self.shift(Side::Left)
    }
    /// Moves the focus to the sibling on the right.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Right)`] if the focus is the rightmost child or the root.
    ///
    /// [`NoSuchMovement(Right)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    #[inline]
    pub fn right(self) -> ZipperResult<T> {
        self.shift(Side::Right)
    }
    fn shift(mut self, side: Side) -> ZipperResult<T> {
        let next = self.crumb.as_deref_mut().and_then(|crumb| match side {
            Side::Left => crumb.left.pop(),
            Side::Right => crumb.right.pop(),
        });
        let next = match next {
            Some(node) => node,
            None => {
                let direction = match side {
                    Side::Left => Direction::Left,
                    Side::Right => Direction::Right,
                };
                return Err(ZipperError::new(self, Failure::NoSuchMovement(direction)));
            }
        };
        let previous = mem::replace(&mut self.focus, next);
        if let Some(crumb) = self.crumb.as_deref_mut() {
            match side {
                Side::Left => crumb.right.push(previous),
                Side::Right => crumb.left.push(previous),
            }
        }
        Ok(self)
    }
    /// Moves the focus to the leftmost sibling. Does nothing if the focus already is the leftmost one or the root.
    pub fn leftmost(mut self) -> Self {
        if let Some(crumb) = self.crumb.as_deref_mut() {
            let mut left = mem::take(&mut crumb.left).into_iter();
            if let Some(leftmost) = left.next() {
                let previous = mem::replace(&mut self.focus, leftmost);
                crumb.right.push(previous);
                crumb.right.extend(left.rev());
            }
        }
        self
    }
    /// Moves the focus to the rightmost sibling. Does nothing if the focus already is the rightmost one or the root.
    pub fn rightmost(mut self) -> Self {
        if let Some(crumb) = self.crumb.as_deref_mut() {
            let mut right = mem::take(&mut crumb.right).into_iter();
            if let Some(rightmost) = right.next() {
                let previous = mem::replace(&mut self.focus, rightmost);
                crumb.left.push(previous);
                crumb.left.extend(right.rev());
            }
        }
        self
    }

    /// Replaces the focused node, dropping the previous one. The ancestors are not touched until the zipper moves up to them.
    #[inline]
    pub fn replace(mut self, node: T) -> Self {
        self.focus = node;
        self
    }
    /// Replaces the focused node with the result of calling the closure on it.
    #[inline]
    pub fn update(self, f: impl FnOnce(T) -> T) -> Self {
        Self {
            focus: f(self.focus),
            crumb: self.crumb,
        }
    }
    /// Inserts a node as the sibling immediately to the left of the focus, without moving the focus.
    ///
    /// # Errors
    /// Fails with [`SiblingOfRoot`] if the focus is the root, which cannot have siblings. The node is dropped in that case, so check [`is_root`] first if it needs to be kept:
    /// ```rust
    /// use kindling::{nested_list, Failure, NestedList, Zipper};
    ///
    /// let err = Zipper::new(nested_list![1]).insert_left(NestedList::Atom(0)).unwrap_err();
    /// assert_eq!(err.failure(), Failure::SiblingOfRoot);
    /// // Only the untouched tree comes back.
    /// assert_eq!(err.recover().root(), nested_list![1]);
    /// ```
    ///
    /// [`SiblingOfRoot`]: ../enum.Failure.html#variant.SiblingOfRoot " "
    /// [`is_root`]: #method.is_root " "
    pub fn insert_left(mut self, node: T) -> ZipperResult<T> {
        match self.crumb.as_deref_mut() {
            Some(crumb) => crumb.left.push(node),
            None => return Err(ZipperError::new(self, Failure::SiblingOfRoot)),
        }
        Ok(self)
    }
    /// Inserts a node as the sibling immediately to the right of the focus, without moving the focus.
    ///
    /// # Errors
    /// Fails with [`SiblingOfRoot`] if the focus is the root, which cannot have siblings. The node is dropped in that case, as with [`insert_left`].
    ///
    /// [`SiblingOfRoot`]: ../enum.Failure.html#variant.SiblingOfRoot " "
    /// [`insert_left`]: #method.insert_left " "
    pub fn insert_right(mut self, node: T) -> ZipperResult<T> {
        match self.crumb.as_deref_mut() {
            Some(crumb) => crumb.right.push(node),
            None => return Err(ZipperError::new(self, Failure::SiblingOfRoot)),
        }
        Ok(self)
    }
}

impl<T: Tree> Zipper<T> {
    /// Moves the focus to the first child of the current one.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Down)`] if the focus is an atom or a branch without children.
    ///
    /// [`NoSuchMovement(Down)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    pub fn down(self) -> ZipperResult<T> {
        let Zipper { focus, crumb } = self;
        match focus.into_children() {
            Ok((parent, children)) => {
                let mut right = siblings_from(children.into_iter().rev());
                match right.pop() {
                    Some(first) => Ok(Self {
                        focus: first,
                        crumb: Some(Box::new(Crumb {
                            left: Siblings::new(),
                            right,
                            parent,
                            parent_crumb: crumb,
                        })),
                    }),
                    None => Err(ZipperError::new(
                        Self {
                            focus: parent.make(Vec::new()),
                            crumb,
                        },
                        Failure::NoSuchMovement(Direction::Down),
                    )),
                }
            }
            Err(atom) => Err(ZipperError::new(
                Self { focus: atom, crumb },
                Failure::NoSuchMovement(Direction::Down),
            )),
        }
    }
    /// Moves the focus to the parent of the current one, rebuilding the parent from its siblings and the focus.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Up)`] if the focus is the root.
    ///
    /// [`NoSuchMovement(Up)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    pub fn up(self) -> ZipperResult<T> {
        match self.crumb {
            Some(crumb) => {
                let (parent, parent_crumb) = crumb.close(self.focus);
                Ok(Self {
                    focus: parent,
                    crumb: parent_crumb,
                })
            }
            None => Err(ZipperError::new(
                Self::new(self.focus),
                Failure::NoSuchMovement(Direction::Up),
            )),
        }
    }
    /// Moves the focus all the way up to the root, rebuilding every ancestor on the way.
    pub fn top(self) -> Self {
        let mut zipper = self;
        loop {
            zipper = match zipper.up() {
                Ok(parent) => parent,
                Err(err) => return err.recover(),
            };
        }
    }
    /// Closes the zipper, returning the root of the rebuilt tree.
    #[inline]
    pub fn root(self) -> T {
        self.top().into_node()
    }

    /// Inserts a node as the new first child of the focus.
    ///
    /// If the focus was an atom, it's converted into a branch using [`Tree::with_children`].
    ///
    /// [`Tree::with_children`]: ../tree/trait.Tree.html#tymethod.with_children " "
    pub fn insert_child(self, child: T) -> Self {
        let Zipper { focus, crumb } = self;
        let focus = match focus.into_children() {
            Ok((parent, mut children)) => {
                children.insert(0, child);
                parent.make(children)
            }
            Err(atom) => atom.with_children(alloc::vec![child]),
        };
        Self { focus, crumb }
    }
    /// Inserts a node as the new last child of the focus.
    ///
    /// If the focus was an atom, it's converted into a branch using [`Tree::with_children`].
    ///
    /// [`Tree::with_children`]: ../tree/trait.Tree.html#tymethod.with_children " "
    pub fn append_child(self, child: T) -> Self {
        let Zipper { focus, crumb } = self;
        let focus = match focus.into_children() {
            Ok((parent, mut children)) => {
                children.push(child);
                parent.make(children)
            }
            Err(atom) => atom.with_children(alloc::vec![child]),
        };
        Self { focus, crumb }
    }
    /// Removes the focused node, moving the focus to the node which precedes it in depth-first order.
    ///
    /// If the focus had a sibling to its left, the new focus is the deepest last descendant of that sibling. Otherwise, the parent is rebuilt right away without the removed node and becomes the new focus.
    ///
    /// # Errors
    /// Fails with [`RemoveAtRoot`] if the focus is the root, since there is nothing to replace it with.
    ///
    /// [`RemoveAtRoot`]: ../enum.Failure.html#variant.RemoveAtRoot " "
    pub fn remove(self) -> ZipperResult<T> {
        let Zipper { focus, crumb } = self;
        let mut crumb = match crumb {
            Some(crumb) => crumb,
            None => return Err(ZipperError::new(Self::new(focus), Failure::RemoveAtRoot)),
        };
        drop(focus);
        match crumb.left.pop() {
            Some(previous) => Ok(Self {
                focus: previous,
                crumb: Some(crumb),
            }
            .into_last_descendant()),
            None => {
                let Crumb {
                    right,
                    parent,
                    parent_crumb,
                    ..
                } = *crumb;
                Ok(Self {
                    focus: parent.make(right.into_iter().rev().collect()),
                    crumb: parent_crumb,
                })
            }
        }
    }
    /// Descends into the last child as long as there is one.
    pub(crate) fn into_last_descendant(self) -> Self {
        let mut zipper = self;
        loop {
            zipper = match zipper.down() {
                Ok(child) => child.rightmost(),
                Err(err) => return err.recover(),
            };
        }
    }
}

impl<T> From<T> for Zipper<T> {
    #[inline(always)]
    fn from(root: T) -> Self {
        Self::new(root)
    }
}

/// The error returned by zipper movements and edits which cannot be performed at the zipper's position.
///
/// Those are expected outcomes rather than exceptional ones (running into the last sibling is how most loops over siblings end), so the error carries the zipper in the exact state it was in before the failed call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipperError<T> {
    /// The zipper as it was right before the failed operation.
    pub previous_state: Zipper<T>,
    /// What went wrong.
    pub failure: Failure,
}
impl<T> ZipperError<T> {
    #[inline(always)]
    pub(crate) const fn new(previous_state: Zipper<T>, failure: Failure) -> Self {
        Self {
            previous_state,
            failure,
        }
    }
    /// Returns the zipper as it was before the failed operation.
    ///
    /// Primarily used as a convenience function for `unwrap_or_else` on `ZipperResult`.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn recover(self) -> Zipper<T> {
        self.previous_state
    }
    /// Returns what went wrong.
    #[inline(always)]
    pub const fn failure(&self) -> Failure {
        self.failure
    }
}
impl<T> Display for ZipperError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.failure, f)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for ZipperError<T> {}
