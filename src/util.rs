// Sibling stacks are kept nearest-sibling-last, so moving one step sideways is a push and a pop.
#[cfg(feature = "smallvec")]
const INLINE_SIBLINGS: usize = 8;

#[cfg(feature = "smallvec")]
pub(crate) type Siblings<T> = smallvec::SmallVec<[T; INLINE_SIBLINGS]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type Siblings<T> = alloc::vec::Vec<T>;

/// Collects siblings into a stack. The last element yielded ends up nearest to the focus.
#[inline]
pub(crate) fn siblings_from<T>(iter: impl IntoIterator<Item = T>) -> Siblings<T> {
    iter.into_iter().collect()
}
