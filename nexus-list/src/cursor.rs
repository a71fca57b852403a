//! Registered cursors over a [`List`].
//!
//! A cursor holds a registration in its list's cursor table rather than an
//! index of its own, so the list can repair it whenever the list changes.
//! Dropping the cursor removes the registration.

use std::fmt;

use crate::{Handle, List, Rejected};

// =============================================================================
// Cursor
// =============================================================================

/// A position-tracking iterator bound to one [`List`].
///
/// Advancing yields handles in list order. The cursor remembers the element
/// it yielded last, which [`remove`](Cursor::remove),
/// [`delete`](Cursor::delete) and [`insert`](Cursor::insert) act on.
///
/// Any structural change to the list, from this cursor, another cursor or
/// another thread, keeps the cursor on the same logical element. Sorting,
/// flipping or flushing the list sends it back to the head.
///
/// # Example
///
/// ```
/// use nexus_list::List;
///
/// let list: List<u32> = List::new();
/// for v in [10, 20, 30] {
///     list.append(v).unwrap();
/// }
///
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.find(|&v| v > 15), Some(20));
///
/// // Insert before the element just yielded.
/// cursor.insert(15).unwrap();
/// assert_eq!(cursor.next(), Some(30));
///
/// cursor.reset();
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![10, 15, 20, 30]);
/// ```
pub struct Cursor<'a, T> {
    list: &'a List<T>,
    key: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, key: usize) -> Self {
        Self { list, key }
    }

    #[inline]
    pub(crate) fn key(&self) -> usize {
        self.key
    }

    #[inline]
    pub(crate) fn belongs_to(&self, list: &List<T>) -> bool {
        std::ptr::eq(self.list, list)
    }

    /// Returns the list this cursor is bound to.
    #[inline]
    pub fn list(&self) -> &'a List<T> {
        self.list
    }

    /// Moves the cursor back to the head.
    pub fn reset(&mut self) {
        self.list.lock().cursors[self.key].reset();
    }

    /// Inserts a handle before the element yielded last.
    ///
    /// With nothing yielded, inserts at the next position instead (the head
    /// when fresh, the tail once exhausted). The element the cursor yields
    /// next is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with the handle if storage could not grow.
    pub fn insert(&mut self, item: T) -> Result<(), Rejected<T>> {
        self.list.insert_before(self, item)
    }

    /// Removes the element yielded last and returns it to the caller.
    ///
    /// Returns `None` if nothing was yielded since the last reset, or if the
    /// yielded element is already gone. The destructor is not called.
    pub fn remove(&mut self) -> Option<T> {
        let mut state = self.list.lock();
        let at = state.cursors[self.key].yielded()?;
        state.remove_at(at)
    }

    /// Removes the element yielded last and releases it through the list's
    /// destructor. Returns whether an element was removed.
    pub fn delete(&mut self) -> bool {
        match self.remove() {
            Some(value) => {
                self.list.dispose(value);
                true
            }
            None => false,
        }
    }

    /// Unregisters the cursor. Equivalent to dropping it.
    pub fn destroy(self) {}
}

impl<T: Handle> Cursor<'_, T> {
    /// Returns the handle the next advance would yield, without advancing.
    pub fn peek_next(&self) -> Option<T> {
        let state = self.list.lock();
        let next = state.cursors[self.key].next();
        state.slots.get(next).cloned()
    }

    /// Advances until an element matches `pred` and returns it.
    ///
    /// Runs under a single lock acquisition. Returns `None`, leaving the
    /// cursor exhausted, if nothing further matches.
    pub fn find<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut guard = self.list.lock();
        let state = &mut *guard;
        let len = state.slots.len();
        let position = &mut state.cursors[self.key];
        while let Some(at) = position.advance(len) {
            if let Some(value) = state.slots.get(at).filter(|value| pred(value)) {
                return Some(value.clone());
            }
        }
        None
    }
}

impl<T: Handle> Iterator for Cursor<'_, T> {
    type Item = T;

    /// Yields the next handle, or `None` once past the tail.
    ///
    /// An exhausted cursor resumes if elements are appended later.
    fn next(&mut self) -> Option<T> {
        let mut guard = self.list.lock();
        let state = &mut *guard;
        let at = state.cursors[self.key].advance(state.slots.len())?;
        state.slots.get(at).cloned()
    }
}

impl<T> Drop for Cursor<'_, T> {
    fn drop(&mut self) {
        self.list.lock().cursors.remove(self.key);
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.list.lock();
        let position = &state.cursors[self.key];
        f.debug_struct("Cursor")
            .field("next", &position.next())
            .field("yielded", &position.yielded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Destructor, List};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn list_of(values: &[u32]) -> List<u32> {
        let list = List::new();
        for &v in values {
            list.append(v).unwrap();
        }
        list
    }

    fn contents(list: &List<u32>) -> Vec<u32> {
        list.cursor().collect()
    }

    #[test]
    fn iterates_in_order() {
        let list = list_of(&[1, 2, 3]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list: List<u32> = List::new();
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.remove(), None);
    }

    #[test]
    fn reset_restarts() {
        let list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        cursor.reset();
        assert_eq!(cursor.next(), Some(1));
    }

    #[test]
    fn exhausted_cursor_sees_appends() {
        let list = list_of(&[1]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);

        list.append(2).unwrap();
        assert_eq!(cursor.next(), Some(2));
    }

    #[test]
    fn peek_next_does_not_advance() {
        let list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.peek_next(), Some(1));
        assert_eq!(cursor.peek_next(), Some(1));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.peek_next(), Some(2));
    }

    #[test]
    fn find_advances_past_match() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.find(|&v| v % 2 == 0), Some(2));
        assert_eq!(cursor.find(|&v| v % 2 == 0), Some(4));
        assert_eq!(cursor.find(|&v| v % 2 == 0), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn remove_yielded_element() {
        let list = list_of(&[1, 2, 3]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.remove(), None);
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(contents(&list), vec![1, 3]);
    }

    #[test]
    fn remove_before_first_advance_is_noop() {
        let list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        assert_eq!(cursor.remove(), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_after_exhaustion_is_noop() {
        let list = list_of(&[1]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.remove(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_every_element() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut cursor = list.cursor();
        let mut removed = Vec::new();
        while cursor.next().is_some() {
            removed.extend(cursor.remove());
        }
        assert_eq!(removed, vec![1, 2, 3, 4]);
        assert!(list.is_empty());
    }

    #[test]
    fn delete_runs_destructor() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let list = List::with_destructor(Destructor::new(move |_: u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        list.append(1).unwrap();
        list.append(2).unwrap();

        let mut cursor = list.cursor();
        assert!(!cursor.delete());
        cursor.next();
        assert!(cursor.delete());
        assert!(!cursor.delete());
        assert_eq!(released.load(Ordering::SeqCst), 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_before_yielded() {
        let list = list_of(&[1, 3]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        cursor.insert(2).unwrap();

        assert_eq!(contents(&list), vec![1, 2, 3]);
        // The yielded element is still 3, one slot further on.
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn insert_on_fresh_cursor_goes_to_head() {
        let list = list_of(&[2, 3]);
        let mut cursor = list.cursor();
        cursor.insert(1).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(cursor.next(), Some(2));
    }

    #[test]
    fn insert_on_exhausted_cursor_goes_to_tail() {
        let list = list_of(&[1]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        cursor.insert(2).unwrap();
        assert_eq!(contents(&list), vec![1, 2]);
        assert_eq!(cursor.next(), Some(2));
    }

    #[test]
    fn other_cursor_survives_removal() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut reader = list.cursor();
        reader.next();
        reader.next();

        let mut writer = list.cursor();
        writer.next();
        assert_eq!(writer.remove(), Some(1));

        assert_eq!(reader.remove(), Some(2));
        assert_eq!(reader.next(), Some(3));
    }

    #[test]
    fn other_cursor_loses_removed_element() {
        let list = list_of(&[1, 2, 3]);
        let mut a = list.cursor();
        let mut b = list.cursor();
        a.next();
        b.next();

        assert_eq!(a.remove(), Some(1));
        assert_eq!(b.remove(), None);
        assert_eq!(b.next(), Some(2));
    }

    #[test]
    fn list_insert_before_uses_cursor() {
        let list = list_of(&[1, 3]);
        let mut cursor = list.cursor();
        cursor.next();
        cursor.next();
        list.insert_before(&cursor, 2).unwrap();
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "different list")]
    fn insert_before_foreign_cursor_panics() {
        let a = list_of(&[1]);
        let b = list_of(&[1]);
        let cursor = b.cursor();
        let _ = a.insert_before(&cursor, 2);
    }

    #[test]
    fn list_accessor() {
        let list = list_of(&[1]);
        let cursor = list.cursor();
        assert!(std::ptr::eq(cursor.list(), &list));
    }

    #[test]
    fn debug_shows_position() {
        let list = list_of(&[1, 2]);
        let mut cursor = list.cursor();
        cursor.next();
        let debug = format!("{cursor:?}");
        assert_eq!(debug, "Cursor { next: 1, yielded: Some(0) }");
    }
}
