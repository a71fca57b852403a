//! Cursor positions and the repair rules applied on every structural change.
//!
//! A cursor is two indices into the slot array:
//!
//! ```text
//!   slots:   [ a ][ b ][ c ][ d ]
//!                 ^    ^
//!               last  next
//! ```
//!
//! - `next` is the slot the cursor yields on its next advance, in `[0, len]`.
//! - `last` is the slot it yielded most recently. `last == next` is the
//!   "nothing to remove here" state: fresh, reset, exhausted, or invalidated
//!   by a removal.
//!
//! Invariant: `last <= next <= len` after every mutation.
//!
//! Indices are absolute, so every insert or remove shifts the indices that
//! lie beyond the mutation point. Sort, flip and flush have no positional
//! meaning to preserve and reset every cursor.

/// Position of one cursor within its list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Position {
    next: usize,
    last: usize,
}

impl Position {
    /// A fresh position at the head.
    pub(crate) const HEAD: Self = Self { next: 0, last: 0 };

    #[inline]
    pub(crate) fn next(&self) -> usize {
        self.next
    }

    /// Index of the last yielded slot, if it can still be removed.
    #[inline]
    pub(crate) fn yielded(&self) -> Option<usize> {
        (self.last != self.next).then_some(self.last)
    }

    /// Slot an insertion through this cursor lands on.
    ///
    /// Before the last yielded element, or at `next` when nothing is
    /// yielded (the head for a fresh cursor, the tail once exhausted).
    #[inline]
    pub(crate) fn insertion_point(&self) -> usize {
        self.last
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::HEAD;
    }

    /// Advances over a list of `len` slots.
    ///
    /// Returns the index to yield, or `None` once exhausted. An exhausted
    /// cursor keeps `next == len` and resumes if the list grows past it.
    pub(crate) fn advance(&mut self, len: usize) -> Option<usize> {
        self.last = self.next;
        if self.next < len {
            self.next += 1;
            Some(self.last)
        } else {
            None
        }
    }

    /// Repairs the position after a slot was inserted at `at`.
    ///
    /// `old_len` is the length before the insert. A cursor sitting exactly
    /// on `at` is bumped past the new slot unless `at` was the tail, where
    /// the cursor waits for appended elements.
    pub(crate) fn on_insert(&mut self, at: usize, old_len: usize) {
        let yielded = self.last != self.next;

        if self.next > at || (self.next == at && at < old_len) {
            self.next += 1;
        }

        if !yielded {
            self.last = self.next;
        } else if self.last >= at {
            self.last += 1;
        }

        debug_assert!(self.last <= self.next && self.next <= old_len + 1);
    }

    /// Repairs the position after the slot at `at` was removed.
    ///
    /// A cursor whose `next` was `at + 1` snaps back onto the gap and loses
    /// its yielded element. A cursor whose yielded element was removed
    /// loses it too. Indices past `at` shift down by one.
    pub(crate) fn on_remove(&mut self, at: usize) {
        if self.next == at + 1 {
            self.next = at;
            self.last = at;
            return;
        }

        if self.next > at + 1 {
            self.next -= 1;
        }

        if self.last == at {
            self.last = self.next;
        } else if self.last > at {
            self.last -= 1;
        }

        debug_assert!(self.last <= self.next);
    }
}
