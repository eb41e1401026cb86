//! Depth-first pre-order traversal, built purely from the zipper's movements.
//!
//! The module is home to the following items:
//! - [`Step`]: the result of moving to the next node, which is either a zipper on that node or the terminal end marker holding the rebuilt tree
//! - Methods on [`Zipper`] for moving in depth-first order: [`next`], [`skip`], [`prev`], [`find`] and [`find_prev`]
//! - [`traverse`], [`traverse_with`], [`traverse_while`] and [`traverse_while_with`]: drivers which walk a whole tree, handing every node to a closure
//! - [`VisitorDirection`]: the way a closure passed to [`traverse_while`] tells the driver where to go next
//!
//! The drivers always derive the next position by calling [`next`] (or [`skip`]) on whatever zipper the closure returned. Closures are expected to edit the focus and stay where they were given the zipper; edits like [`remove`] which move the focus themselves are fine, since they leave it on the node which precedes the removed one. A closure which navigates elsewhere makes the traversal continue from wherever it left the zipper, which can visit nodes twice or never finish.
//!
//! [`Step`]: enum.Step.html " "
//! [`Zipper`]: ../zipper/struct.Zipper.html " "
//! [`next`]: ../zipper/struct.Zipper.html#method.next " "
//! [`skip`]: ../zipper/struct.Zipper.html#method.skip " "
//! [`prev`]: ../zipper/struct.Zipper.html#method.prev " "
//! [`find`]: ../zipper/struct.Zipper.html#method.find " "
//! [`find_prev`]: ../zipper/struct.Zipper.html#method.find_prev " "
//! [`remove`]: ../zipper/struct.Zipper.html#method.remove " "
//! [`traverse`]: fn.traverse.html " "
//! [`traverse_with`]: fn.traverse_with.html " "
//! [`traverse_while`]: fn.traverse_while.html " "
//! [`traverse_while_with`]: fn.traverse_while_with.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "

use crate::{
    tree::Tree,
    zipper::{Zipper, ZipperError, ZipperResult},
    Direction,
    Failure,
    InvalidStateError,
};


/// The result of a single traversal step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// Traversal is not yet done; the zipper is focused on the next node to visit.
    Next(Zipper<T>),
    /// Traversal has finished. Contains the root of the rebuilt tree.
    End(T),
}
impl<T> Step<T> {
    /// Returns `true` if the traversal has reached its end, `false` otherwise.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End(..))
    }
    /// Returns a reference to the node the traversal is on.
    ///
    /// # Errors
    /// Returns [`InvalidStateError`] if the traversal has already reached its end. Use [`into_root`] to retrieve the tree in that case.
    ///
    /// [`InvalidStateError`]: ../struct.InvalidStateError.html " "
    /// [`into_root`]: #method.into_root " "
    #[inline]
    pub fn node(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Next(zipper) => Ok(zipper.node()),
            Self::End(..) => Err(InvalidStateError),
        }
    }
    /// Returns the node the traversal is on, discarding the rest of the tree.
    ///
    /// # Errors
    /// Returns [`InvalidStateError`] if the traversal has already reached its end.
    ///
    /// [`InvalidStateError`]: ../struct.InvalidStateError.html " "
    #[inline]
    pub fn into_node(self) -> Result<T, InvalidStateError> {
        match self {
            Self::Next(zipper) => Ok(zipper.into_node()),
            Self::End(..) => Err(InvalidStateError),
        }
    }
    /// Returns the zipper if the traversal is not yet done, `None` otherwise.
    #[inline]
    #[allow(clippy::missing_const_for_fn)]
    pub fn zipper(self) -> Option<Zipper<T>> {
        match self {
            Self::Next(zipper) => Some(zipper),
            Self::End(..) => None,
        }
    }
}
impl<T: Tree> Step<T> {
    /// Moves on to the next node in depth-first pre-order. Once the end has been reached, keeps returning it unchanged.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Self::Next(zipper) => zipper.next(),
            end => end,
        }
    }
    /// Closes the zipper if there is one, returning the root of the tree.
    #[inline]
    pub fn into_root(self) -> T {
        match self {
            Self::Next(zipper) => zipper.root(),
            Self::End(root) => root,
        }
    }
}
impl<T> From<Zipper<T>> for Step<T> {
    #[inline(always)]
    fn from(zipper: Zipper<T>) -> Self {
        Self::Next(zipper)
    }
}

impl<T: Tree> Zipper<T> {
    /// Moves to the next node in depth-first pre-order: the first child if there is one, otherwise the next sibling of the focus or of its closest ancestor which has one.
    ///
    /// If there is no such node, the tree is closed and [`Step::End`] is returned.
    ///
    /// # Example
    /// ```rust
    /// use kindling::{nested_list, NestedList, Step, Zipper};
    ///
    /// let mut step = Step::from(Zipper::new(nested_list![1, [2], 3]));
    /// let mut atoms = Vec::new();
    /// while let Step::Next(zipper) = step {
    ///     if let NestedList::Atom(x) = zipper.node() {
    ///         atoms.push(*x);
    ///     }
    ///     step = zipper.next();
    /// }
    /// assert_eq!(atoms, [1, 2, 3]);
    /// assert_eq!(step, Step::End(nested_list![1, [2], 3]));
    /// ```
    ///
    /// [`Step::End`]: ../traversal/enum.Step.html#variant.End " "
    pub fn next(self) -> Step<T> {
        match self.down() {
            Ok(child) => Step::Next(child),
            Err(err) => err.recover().skip(),
        }
    }
    /// Moves to the next node in depth-first pre-order *without* descending into the focus, skipping its entire subtree.
    ///
    /// If there is no such node, the tree is closed and [`Step::End`] is returned.
    ///
    /// [`Step::End`]: ../traversal/enum.Step.html#variant.End " "
    pub fn skip(self) -> Step<T> {
        let mut zipper = self;
        loop {
            zipper = match zipper.right() {
                Ok(sibling) => return Step::Next(sibling),
                Err(err) => err.recover(),
            };
            zipper = match zipper.up() {
                Ok(parent) => parent,
                Err(err) => return Step::End(err.recover().into_node()),
            };
        }
    }
    /// Moves to the previous node in depth-first pre-order: the deepest last descendant of the sibling on the left if there is one, the parent otherwise.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Prev)`] if the focus is the root.
    ///
    /// [`NoSuchMovement(Prev)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    pub fn prev(self) -> ZipperResult<T> {
        match self.left() {
            Ok(sibling) => Ok(sibling.into_last_descendant()),
            Err(err) => err.recover().up().map_err(|err| {
                ZipperError::new(err.recover(), Failure::NoSuchMovement(Direction::Prev))
            }),
        }
    }
    /// Searches forward in depth-first pre-order, starting with the focus itself, for a node satisfying the predicate.
    ///
    /// Returns [`Step::End`] with the closed tree if no remaining node matches.
    ///
    /// [`Step::End`]: ../traversal/enum.Step.html#variant.End " "
    pub fn find(self, mut predicate: impl FnMut(&T) -> bool) -> Step<T> {
        let mut zipper = self;
        loop {
            if predicate(zipper.node()) {
                return Step::Next(zipper);
            }
            zipper = match zipper.next() {
                Step::Next(next) => next,
                end => return end,
            };
        }
    }
    /// Searches backward in depth-first pre-order, starting with the focus itself, for a node satisfying the predicate.
    ///
    /// # Errors
    /// Fails with [`NoSuchMovement(Prev)`] if no node up to and including the root matches, holding the zipper focused on the root.
    ///
    /// [`NoSuchMovement(Prev)`]: ../enum.Failure.html#variant.NoSuchMovement " "
    pub fn find_prev(self, mut predicate: impl FnMut(&T) -> bool) -> ZipperResult<T> {
        let mut zipper = self;
        loop {
            if predicate(zipper.node()) {
                return Ok(zipper);
            }
            zipper = zipper.prev()?;
        }
    }
}

/// The direction in which a visitor wishes the traversal to go after visiting a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<T> {
    /// Carry on with the next node in depth-first order, descending into the focus.
    Continue(Zipper<T>),
    /// Carry on with the next node in depth-first order, skipping the children of the focus.
    Skip(Zipper<T>),
    /// Stop the traversal, closing the tree.
    Stop(Zipper<T>),
}
impl<T: Tree> VisitorDirection<T> {
    #[inline]
    fn advance(self) -> Step<T> {
        match self {
            Self::Continue(zipper) => zipper.next(),
            Self::Skip(zipper) => zipper.skip(),
            Self::Stop(zipper) => Step::End(zipper.root()),
        }
    }
}

/// Visits every node of the tree in depth-first pre-order, returning the rebuilt tree.
///
/// The closure receives a zipper focused on each node in turn and returns the zipper to continue from, typically after editing the focus.
///
/// # Example
/// ```rust
/// use kindling::{nested_list, traverse, NestedList};
///
/// // Turn every atom into the sum of itself and its right sibling, dropping atoms with no such sibling:
/// let tree = traverse(nested_list![1, 2, 3, [4, 5]], |zipper| {
///     let right = match zipper.right_sibling() {
///         Some(NestedList::Atom(right)) => Some(*right),
///         _ => None,
///     };
///     match (zipper.node(), right) {
///         (NestedList::Atom(x), Some(right)) => {
///             let sum = x + right;
///             zipper.replace(NestedList::Atom(sum))
///         }
///         (NestedList::Atom(..), None) => zipper.remove().unwrap_or_else(|err| err.recover()),
///         _ => zipper,
///     }
/// });
/// assert_eq!(tree, nested_list![3, 5, [9]]);
/// ```
pub fn traverse<T: Tree>(root: T, mut visit: impl FnMut(Zipper<T>) -> Zipper<T>) -> T {
    traverse_while(root, |zipper| VisitorDirection::Continue(visit(zipper)))
}
/// Visits every node of the tree in depth-first pre-order while threading an accumulator through the visits, returning the rebuilt tree and the final value of the accumulator.
///
/// # Example
/// ```rust
/// use kindling::{nested_list, traverse_with};
///
/// let tree = nested_list![1, [2, 3], 4];
/// let (tree, depths) = traverse_with(tree, Vec::new(), |zipper, mut depths| {
///     depths.push(zipper.depth());
///     (zipper, depths)
/// });
/// assert_eq!(depths, [0, 1, 1, 2, 2, 1]);
/// assert_eq!(tree, nested_list![1, [2, 3], 4]);
/// ```
pub fn traverse_with<T: Tree, A>(
    root: T,
    acc: A,
    mut visit: impl FnMut(Zipper<T>, A) -> (Zipper<T>, A),
) -> (T, A) {
    traverse_while_with(root, acc, |zipper, acc| {
        let (zipper, acc) = visit(zipper, acc);
        (VisitorDirection::Continue(zipper), acc)
    })
}
/// Visits the nodes of the tree in depth-first pre-order, letting the closure skip subtrees or stop early, and returns the rebuilt tree.
pub fn traverse_while<T: Tree>(
    root: T,
    mut visit: impl FnMut(Zipper<T>) -> VisitorDirection<T>,
) -> T {
    traverse_while_with(root, (), |zipper, ()| (visit(zipper), ())).0
}
/// Visits the nodes of the tree in depth-first pre-order while threading an accumulator through the visits, letting the closure skip subtrees or stop early. Returns the rebuilt tree and the final value of the accumulator.
///
/// # Example
/// ```rust
/// use kindling::{nested_list, traverse_while_with, NestedList, VisitorDirection};
///
/// // Find the first atom greater than 2, without looking inside the list that starts with 0:
/// let tree = nested_list![1, [0, 7], 3, 4];
/// let (_, found) = traverse_while_with(tree, None, |zipper, found| match zipper.node() {
///     NestedList::Atom(x) if *x > 2 => {
///         let x = *x;
///         (VisitorDirection::Stop(zipper), Some(x))
///     }
///     NestedList::List(items) if items.first() == Some(&NestedList::Atom(0)) => {
///         (VisitorDirection::Skip(zipper), found)
///     }
///     _ => (VisitorDirection::Continue(zipper), found),
/// });
/// assert_eq!(found, Some(3));
/// ```
pub fn traverse_while_with<T: Tree, A>(
    root: T,
    acc: A,
    mut visit: impl FnMut(Zipper<T>, A) -> (VisitorDirection<T>, A),
) -> (T, A) {
    let mut step = Step::Next(Zipper::new(root));
    let mut acc = acc;
    loop {
        match step {
            Step::Next(zipper) => {
                let (direction, new_acc) = visit(zipper, acc);
                acc = new_acc;
                step = direction.advance();
            }
            Step::End(root) => return (root, acc),
        }
    }
}
