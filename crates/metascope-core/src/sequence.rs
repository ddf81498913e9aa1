//! Ordered, fixed-length sequences.
//!
//! Every list the catalog hands out (base classes, members, enum values, the
//! result of a filter) is a [`Sequence`]. Indices run `0..size()` and always
//! follow declaration order.

use std::ops::Index;

/// An ordered, immutable collection of catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Create a sequence from items in the given order.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at `index`, or `None` when `index >= size()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Invoke `f(element, index)` for every element, in index order.
    pub fn foreach<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(item, index);
        }
    }

    /// Keep exactly the elements satisfying `predicate`, in original order.
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Sequence {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }

    /// Count the elements satisfying `predicate`.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
