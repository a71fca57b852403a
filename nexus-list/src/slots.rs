//! Contiguous slot array backing a list.
//!
//! Slots hold element handles in list order. Capacity grows by doubling
//! (starting at one slot) whenever an insert finds the array full, and is
//! never given back. Growth goes through `try_reserve_exact` so that an
//! allocation failure surfaces as a [`ReserveError`] and leaves the array
//! untouched.

use std::cmp::Ordering;

use crate::{Rejected, ReserveError};

/// Growable array of handles with explicit doubling growth.
pub(crate) struct SlotArray<T> {
    slots: Vec<T>,
}

impl<T> SlotArray<T> {
    /// Creates an empty array without allocating.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty array with room for at least `capacity` slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<&T> {
        self.slots.last()
    }

    /// Makes room for one more slot.
    ///
    /// A full array doubles its capacity, or goes to one slot when empty.
    fn grow(&mut self) -> Result<(), ReserveError> {
        let len = self.slots.len();
        let capacity = self.slots.capacity();
        if len < capacity {
            return Ok(());
        }

        let target = capacity.saturating_mul(2).max(1);
        tracing::trace!(from = capacity, to = target, "growing list storage");
        self.slots.try_reserve_exact(target - len).map_err(|source| {
            tracing::warn!(requested = target, "list storage growth failed");
            ReserveError::new(target, source)
        })
    }

    /// Grows the array to exactly `capacity` slots.
    ///
    /// Requests at or below the current capacity are a no-op.
    pub(crate) fn reserve_exact(&mut self, capacity: usize) -> Result<(), ReserveError> {
        if capacity <= self.slots.capacity() {
            return Ok(());
        }

        let len = self.slots.len();
        self.slots.try_reserve_exact(capacity - len).map_err(|source| {
            tracing::warn!(requested = capacity, "list storage reservation failed");
            ReserveError::new(capacity, source)
        })
    }

    /// Inserts `value` at `index`, shifting later slots up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), Rejected<T>> {
        assert!(
            index <= self.slots.len(),
            "insert index {index} out of range for length {}",
            self.slots.len()
        );

        if let Err(error) = self.grow() {
            return Err(Rejected::new(value, error));
        }
        self.slots.insert(index, value);

        debug_assert!(self.slots.len() <= self.slots.capacity());
        Ok(())
    }

    /// Removes the value at `index`, shifting later slots down by one.
    ///
    /// Returns `None` if `index` is out of range.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    /// Returns the index of the first slot matching `pred`.
    pub(crate) fn position<F>(&self, from: usize, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.slots
            .get(from..)?
            .iter()
            .position(|value| pred(value))
            .map(|offset| from + offset)
    }

    /// Removes every value, keeping the allocation.
    pub(crate) fn take_all(&mut self) -> Vec<T> {
        self.slots.drain(..).collect()
    }

    pub(crate) fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slots.sort_by(compare);
    }

    /// Reverses slot order by swapping from both ends.
    pub(crate) fn flip(&mut self) {
        let len = self.slots.len();
        for index in 0..len / 2 {
            self.slots.swap(index, len - 1 - index);
        }
    }
}

impl<T: Clone> SlotArray<T> {
    /// Copies `values` into a new array sized exactly to fit them.
    pub(crate) fn try_from_slice(values: &[T]) -> Result<Self, ReserveError> {
        let mut slots = Self::new();
        slots.reserve_exact(values.len())?;
        slots.slots.extend_from_slice(values);
        Ok(slots)
    }
}

impl<T> Default for SlotArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
