use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

/// A set of visited vertices.
pub trait VisitSet<I> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Returns `true` if the element is marked as visited.
    fn is_visited(&self, id: &I) -> bool;

    /// Returns the number of visited elements.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited elements to be empty.
    fn reset_visited(&mut self);
}

impl<I> VisitSet<I> for TypedBitSet<I>
where
    I: Copy,
    usize: From<I>,
{
    fn visit(&mut self, id: I) -> bool {
        let index = usize::from(id);
        if self.inner.len() <= index {
            self.inner.grow(index + 1);
        }
        !self.inner.put(index)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.inner.contains(usize::from(*id))
    }

    fn visited_count(&self) -> usize {
        self.inner.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.inner.clear()
    }
}

/// Tiny [`FixedBitSet`] wrapper adding a generic type of the elements the set
/// holds.
#[derive(Debug)]
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    /// Creates a new empty bit set with given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Clone for TypedBitSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::core::VertexId;

    use super::*;

    #[test]
    fn bit_set_grows() {
        let mut set = TypedBitSet::<VertexId>::new();

        assert!(set.visit(VertexId::from(0)));
        assert!(set.visit(VertexId::from(7)));
        assert!(!set.visit(VertexId::from(7)));

        assert!(set.is_visited(&VertexId::from(7)));
        assert!(!set.is_visited(&VertexId::from(3)));
        assert!(!set.is_visited(&VertexId::from(100)));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
    }
}
