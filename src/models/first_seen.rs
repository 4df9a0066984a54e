//! Insertion-ordered set.
//!
//! Employee columns and job-code rows are laid out in the order each value
//! first appears in the input, never sorted. [`FirstSeen`] keeps that order
//! explicit: a sequence for layout plus a position map for membership.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A set that remembers the order in which values were first inserted.
#[derive(Debug, Clone)]
pub struct FirstSeen<T> {
    order: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T> Default for FirstSeen<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> FirstSeen<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` if unseen. Returns `true` when it was new.
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_full(value).1
    }

    /// Inserts `value` if unseen and returns its position along with
    /// whether it was new.
    pub fn insert_full(&mut self, value: T) -> (usize, bool) {
        if let Some(&position) = self.positions.get(&value) {
            return (position, false);
        }
        let position = self.order.len();
        self.positions.insert(value.clone(), position);
        self.order.push(value);
        (position, true)
    }

    /// Returns the first-seen position of `value`.
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.get(value).copied()
    }

    /// The values in first-seen order.
    pub fn as_slice(&self) -> &[T] {
        &self.order
    }

    /// Iterates the values in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the set, returning the values in first-seen order.
    pub fn into_vec(self) -> Vec<T> {
        self.order
    }
}

// Position maps are derived from the order, so comparing the order suffices.
impl<T: PartialEq> PartialEq for FirstSeen<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<T: Eq> Eq for FirstSeen<T> {}

impl<T: Eq + Hash + Clone> FromIterator<T> for FirstSeen<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for FirstSeen<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a FirstSeen<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
