//! Thread-safe list of element handles with position-tracking cursors.
//!
//! Handles live in a single contiguous slot array behind one mutex. Any
//! number of [`Cursor`]s can be bound to a list at once; each is registered
//! with the list, and every structural mutation repairs every registered
//! cursor's position while the lock is held. A cursor therefore stays
//! coherent no matter which thread or which other cursor changed the list.
//!
//! # Example
//!
//! ```
//! use nexus_list::List;
//!
//! let list: List<u32> = List::new();
//! list.append(1).unwrap();
//! list.append(2).unwrap();
//! list.prepend(0).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.peek(), Some(0));
//! assert_eq!(list.peek_last(), Some(2));
//!
//! let values: Vec<_> = list.cursor().collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! ```
//!
//! # Removing While Iterating
//!
//! A cursor removes the element it yielded last. Other cursors on the same
//! list keep pointing at the same logical elements.
//!
//! ```
//! use nexus_list::List;
//!
//! let list: List<u32> = List::new();
//! for v in [1, 2, 3, 4] {
//!     list.append(v).unwrap();
//! }
//!
//! let mut watcher = list.cursor();
//! assert_eq!(watcher.next(), Some(1));
//!
//! let mut evens = list.cursor();
//! while let Some(v) = evens.next() {
//!     if v % 2 == 0 {
//!         evens.remove();
//!     }
//! }
//!
//! assert_eq!(watcher.next(), Some(3));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Destructor Policy
//!
//! A list may own its elements through a [`Destructor`]. "Delete"
//! operations ([`delete_all`](List::delete_all),
//! [`delete_handle`](List::delete_handle), [`flush`](List::flush),
//! [`Cursor::delete`]) and teardown pass removed handles to it. "Remove"
//! operations ([`pop`](List::pop), [`remove_first`](List::remove_first),
//! [`Cursor::remove`]) hand the handle back to the caller instead.
//!
//! ```
//! use nexus_list::{Destructor, List};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let released = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&released);
//! let list: List<u32> = List::with_destructor(Destructor::new(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! }));
//!
//! list.append(1).unwrap();
//! list.append(2).unwrap();
//! assert_eq!(list.pop(), Some(1)); // caller owns it now
//! drop(list);                      // destructor runs on 2
//!
//! assert_eq!(released.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Deadlocks
//!
//! Predicates, comparators and `for_each` callbacks run with the list locked
//! and must not call back into the same list. Destructors run after the lock
//! is released, except at teardown where the list is no longer shared.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use slab::Slab;

use crate::position::Position;
use crate::slots::SlotArray;
use crate::{Cursor, Handle, Rejected, ReserveError};

/// Callback that releases a list element.
///
/// Cloning a `Destructor` shares the same callback; two lists built from
/// clones of one destructor have the same destructor policy, which
/// [`List::transfer_max`] requires.
pub struct Destructor<T> {
    release: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Destructor<T> {
    /// Wraps a release callback.
    pub fn new<F>(release: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            release: Arc::new(release),
        }
    }

    #[inline]
    fn release(&self, value: T) {
        (self.release)(value);
    }

    /// Returns `true` if both are clones of the same callback.
    pub fn same_policy(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.release, &other.release)
    }
}

impl<T> Clone for Destructor<T> {
    fn clone(&self) -> Self {
        Self {
            release: Arc::clone(&self.release),
        }
    }
}

impl<T> fmt::Debug for Destructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destructor").finish_non_exhaustive()
    }
}

/// What [`List::for_each_max`] does after a callback fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop at the first failure.
    Stop,
    /// Keep visiting the remaining elements.
    Continue,
}

/// Outcome of a [`List::for_each_max`] walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    /// Elements handed to the callback, including the failing ones.
    pub visited: usize,
    /// Whether any callback failed.
    pub failed: bool,
    /// Elements not visited.
    pub remaining: usize,
}

impl Walk {
    /// Visit count, negated if any callback failed.
    ///
    /// ```
    /// use nexus_list::Walk;
    ///
    /// let walk = Walk { visited: 2, failed: true, remaining: 1 };
    /// assert_eq!(walk.count(), -2);
    /// ```
    pub fn count(&self) -> isize {
        let visited = self.visited as isize;
        if self.failed { -visited } else { visited }
    }
}

/// State guarded by the list mutex.
pub(crate) struct State<T> {
    pub(crate) slots: SlotArray<T>,
    /// Positions of every live cursor, keyed by the cursor's registration.
    pub(crate) cursors: Slab<Position>,
}

impl<T> State<T> {
    fn new(slots: SlotArray<T>) -> Self {
        Self {
            slots,
            cursors: Slab::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Inserts at `at` and repairs every cursor.
    pub(crate) fn insert_at(&mut self, at: usize, value: T) -> Result<(), Rejected<T>> {
        let old_len = self.slots.len();
        self.slots.insert(at, value)?;
        for (_, position) in self.cursors.iter_mut() {
            position.on_insert(at, old_len);
        }
        Ok(())
    }

    /// Removes the slot at `at` and repairs every cursor.
    pub(crate) fn remove_at(&mut self, at: usize) -> Option<T> {
        let value = self.slots.remove(at)?;
        for (_, position) in self.cursors.iter_mut() {
            position.on_remove(at);
        }
        Some(value)
    }

    fn reset_cursors(&mut self) {
        for (_, position) in self.cursors.iter_mut() {
            position.reset();
        }
    }
}

/// A thread-safe, array-backed list of element handles.
///
/// All operations take `&self` and lock the list for their duration, so a
/// list is shared between threads by reference (`Arc<List<T>>` or scoped
/// threads). See the [module docs](self) for the destructor policy and
/// locking rules.
///
/// # Example
///
/// ```
/// use nexus_list::List;
///
/// let queue: List<u64> = List::new();
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct List<T> {
    state: Mutex<State<T>>,
    destructor: Option<Destructor<T>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction and queries
// =============================================================================

impl<T> List<T> {
    /// Creates an empty list without a destructor. Does not allocate.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State {
                slots: SlotArray::new(),
                cursors: Slab::new(),
            }),
            destructor: None,
        }
    }

    /// Creates an empty list with room for `capacity` handles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State::new(SlotArray::with_capacity(capacity))),
            destructor: None,
        }
    }

    /// Creates an empty list that releases its elements through `destructor`.
    pub fn with_destructor(destructor: Destructor<T>) -> Self {
        Self {
            state: Mutex::new(State::new(SlotArray::new())),
            destructor: Some(destructor),
        }
    }

    /// Creates an empty list with room for `capacity` handles and a destructor.
    pub fn with_capacity_and_destructor(capacity: usize, destructor: Destructor<T>) -> Self {
        Self {
            state: Mutex::new(State::new(SlotArray::with_capacity(capacity))),
            destructor: Some(destructor),
        }
    }

    #[inline]
    pub(crate) fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock()
    }

    /// Returns the destructor policy, if any.
    pub fn destructor(&self) -> Option<&Destructor<T>> {
        self.destructor.as_ref()
    }

    /// Returns the number of handles in the list.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the list holds no handles.
    pub fn is_empty(&self) -> bool {
        self.lock().len() == 0
    }

    /// Returns the number of slots allocated.
    pub fn capacity(&self) -> usize {
        self.lock().slots.capacity()
    }

    /// Returns the number of cursors bound to this list.
    pub fn cursor_count(&self) -> usize {
        self.lock().cursors.len()
    }

    /// Grows storage to exactly `capacity` slots.
    ///
    /// A request at or below the current capacity does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ReserveError`] if the allocation fails; the list is unchanged.
    pub fn reserve(&self, capacity: usize) -> Result<(), ReserveError> {
        self.lock().slots.reserve_exact(capacity)
    }

    /// Creates a cursor positioned at the head of this list.
    pub fn cursor(&self) -> Cursor<'_, T> {
        let key = self.lock().cursors.insert(Position::HEAD);
        Cursor::new(self, key)
    }

    /// Hands a removed handle to the destructor, or drops it.
    pub(crate) fn dispose(&self, value: T) {
        match &self.destructor {
            Some(destructor) => destructor.release(value),
            None => drop(value),
        }
    }

    fn dispose_all(&self, values: Vec<T>) {
        for value in values {
            self.dispose(value);
        }
    }

    /// Releases every remaining handle and unregisters all cursors.
    fn teardown(&mut self) -> usize {
        let state = self.state.get_mut();
        state.cursors.clear();
        let values = state.slots.take_all();
        let count = values.len();
        if let Some(destructor) = &self.destructor {
            for value in values {
                destructor.release(value);
            }
        }
        count
    }

    /// Destroys the list, releasing every remaining handle.
    ///
    /// Returns the number of handles released. Cursors borrow the list, so
    /// none can be alive here.
    pub fn destroy(mut self) -> usize {
        let count = self.teardown();
        tracing::debug!(released = count, "list destroyed");
        count
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl<T> List<T> {
    /// Inserts a handle at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with the handle if storage could not grow. The
    /// list is unchanged.
    pub fn append(&self, item: T) -> Result<(), Rejected<T>> {
        let mut state = self.lock();
        let at = state.len();
        state.insert_at(at, item)
    }

    /// Inserts a handle at the head.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with the handle if storage could not grow.
    pub fn prepend(&self, item: T) -> Result<(), Rejected<T>> {
        self.lock().insert_at(0, item)
    }

    /// Queue alias for [`append`](Self::append).
    #[inline]
    pub fn enqueue(&self, item: T) -> Result<(), Rejected<T>> {
        self.append(item)
    }

    /// Stack alias for [`prepend`](Self::prepend).
    #[inline]
    pub fn push(&self, item: T) -> Result<(), Rejected<T>> {
        self.prepend(item)
    }

    /// Inserts a handle immediately before the element `cursor` yielded last.
    ///
    /// A cursor that has not yielded inserts at its next position: the head
    /// when fresh, the tail once exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` belongs to another list.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] with the handle if storage could not grow.
    pub fn insert_before(&self, cursor: &Cursor<'_, T>, item: T) -> Result<(), Rejected<T>> {
        assert!(
            cursor.belongs_to(self),
            "cursor is bound to a different list"
        );

        let mut state = self.lock();
        let at = state.cursors[cursor.key()].insertion_point();
        state.insert_at(at, item)
    }
}

// =============================================================================
// Removal
// =============================================================================

impl<T> List<T> {
    /// Removes and returns the head handle. The destructor is not called.
    pub fn pop(&self) -> Option<T> {
        self.lock().remove_at(0)
    }

    /// Queue alias for [`pop`](Self::pop).
    #[inline]
    pub fn dequeue(&self) -> Option<T> {
        self.pop()
    }

    /// Removes and returns the first handle matching `pred`.
    ///
    /// Ownership passes to the caller; the destructor is not called.
    pub fn remove_first<F>(&self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut state = self.lock();
        let at = state.slots.position(0, pred)?;
        state.remove_at(at)
    }

    /// Deletes every handle matching `pred`, releasing each through the
    /// destructor. Returns the number deleted.
    pub fn delete_all<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let removed = {
            let mut state = self.lock();
            let mut removed = Vec::new();
            let mut from = 0;
            while let Some(at) = state.slots.position(from, &mut pred) {
                if let Some(value) = state.remove_at(at) {
                    removed.push(value);
                }
                from = at;
            }
            removed
        };

        let count = removed.len();
        self.dispose_all(removed);
        count
    }

    /// Removes all handles, releasing each through the destructor, and
    /// resets every cursor to the head. Returns the number removed.
    pub fn flush(&self) -> usize {
        let removed = {
            let mut state = self.lock();
            let removed = state.slots.take_all();
            state.reset_cursors();
            removed
        };

        let count = removed.len();
        tracing::debug!(removed = count, "list flushed");
        self.dispose_all(removed);
        count
    }
}

// =============================================================================
// Reordering
// =============================================================================

impl<T> List<T> {
    /// Sorts the list with `compare` and resets every cursor to the head.
    ///
    /// The sort is stable. Cursors are reset even when there is nothing to
    /// reorder.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut state = self.lock();
        if state.len() > 1 {
            state.slots.sort_by(compare);
        }
        state.reset_cursors();
    }

    /// Reverses the list in place and resets every cursor to the head.
    pub fn flip(&self) {
        let mut state = self.lock();
        state.slots.flip();
        state.reset_cursors();
    }
}

// =============================================================================
// Traversal
// =============================================================================

impl<T> List<T> {
    /// Calls `f` on up to `limit` handles in order (`None` visits all).
    ///
    /// A callback returning `Err` marks the walk failed; with
    /// [`OnFailure::Stop`] the walk ends there.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_list::{List, OnFailure};
    ///
    /// let list: List<u32> = List::new();
    /// for v in [1, 2, 3] {
    ///     list.append(v).unwrap();
    /// }
    ///
    /// let walk = list.for_each_max(None, OnFailure::Stop, |&v| {
    ///     if v == 2 { Err(()) } else { Ok(()) }
    /// });
    /// assert_eq!(walk.count(), -2);
    /// assert_eq!(walk.remaining, 1);
    /// ```
    pub fn for_each_max<E, F>(&self, limit: Option<usize>, on_failure: OnFailure, mut f: F) -> Walk
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        let state = self.lock();
        let slots = state.slots.as_slice();
        let limit = limit.unwrap_or(usize::MAX);

        let mut visited = 0;
        let mut failed = false;
        for value in slots {
            if visited >= limit {
                break;
            }
            visited += 1;
            if f(value).is_err() {
                failed = true;
                if on_failure == OnFailure::Stop {
                    break;
                }
            }
        }

        Walk {
            visited,
            failed,
            remaining: slots.len() - visited,
        }
    }

    /// Visits every handle, stopping at the first failure.
    pub fn for_each<E, F>(&self, f: F) -> Walk
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.for_each_max(None, OnFailure::Stop, f)
    }

    /// Visits every handle, tolerating failures.
    pub fn for_each_nobreak<E, F>(&self, f: F) -> Walk
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.for_each_max(None, OnFailure::Continue, f)
    }
}

// =============================================================================
// Handle operations (clone / identity)
// =============================================================================

impl<T: Handle> List<T> {
    /// Returns the head handle without removing it.
    pub fn peek(&self) -> Option<T> {
        self.lock().slots.get(0).cloned()
    }

    /// Returns the tail handle without removing it.
    pub fn peek_last(&self) -> Option<T> {
        self.lock().slots.last().cloned()
    }

    /// Returns the first handle matching `pred`.
    pub fn find_first<F>(&self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.lock()
            .slots
            .as_slice()
            .iter()
            .find(|value| pred(value))
            .cloned()
    }

    /// Deletes the first element identical to `handle`, releasing it through
    /// the destructor. Returns whether one was found.
    pub fn delete_handle(&self, handle: &T) -> bool {
        let removed = {
            let mut state = self.lock();
            state
                .slots
                .position(0, |value| value.same(handle))
                .and_then(|at| state.remove_at(at))
        };

        match removed {
            Some(value) => {
                self.dispose(value);
                true
            }
            None => false,
        }
    }

    /// Appends a copy of every handle in `other`, which keeps its own.
    ///
    /// Stops at the first failed append. Returns the number appended.
    ///
    /// # Panics
    ///
    /// Panics if this list has a destructor: the copied handles stay owned
    /// by `other`.
    pub fn append_list(&self, other: &List<T>) -> usize {
        assert!(
            self.destructor.is_none(),
            "append_list target must not have a destructor"
        );

        let snapshot = other.lock().slots.as_slice().to_vec();
        let mut appended = 0;
        for value in snapshot {
            if self.append(value).is_err() {
                break;
            }
            appended += 1;
        }
        appended
    }

    /// Returns a new list, without a destructor, holding the same handles.
    ///
    /// The copy shares no storage and no cursors with this list.
    ///
    /// # Errors
    ///
    /// Returns [`ReserveError`] if the copy's storage cannot be allocated.
    pub fn shallow_copy(&self) -> Result<List<T>, ReserveError> {
        let state = self.lock();
        let slots = SlotArray::try_from_slice(state.slots.as_slice())?;
        Ok(List {
            state: Mutex::new(State::new(slots)),
            destructor: None,
        })
    }
}

// =============================================================================
// Transfer between lists
// =============================================================================

impl<T> List<T> {
    /// Moves up to `max` handles (0 = all) from the head of `source` to the
    /// tail of this list. Returns the number moved.
    ///
    /// Each handle is popped and appended under one lock at a time, so two
    /// threads transferring in opposite directions cannot deadlock.
    /// `source` keeps whatever was not moved.
    ///
    /// # Panics
    ///
    /// Panics if `source` is this list, or if the two lists have different
    /// destructor policies.
    pub fn transfer_max(&self, source: &List<T>, max: usize) -> usize {
        assert!(
            !std::ptr::eq(self, source),
            "cannot transfer a list into itself"
        );
        let same_policy = match (&self.destructor, &source.destructor) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_policy(b),
            _ => false,
        };
        assert!(same_policy, "transfer between lists with different destructors");

        let mut moved = 0;
        while max == 0 || moved < max {
            let Some(value) = source.pop() else {
                break;
            };
            if let Err(rejected) = self.append(value) {
                // Popping never shrinks storage, so the slot is normally still there.
                if let Err(back) = source.prepend(rejected.into_inner()) {
                    source.dispose(back.into_inner());
                }
                break;
            }
            moved += 1;
        }

        tracing::debug!(moved, max, "transferred between lists");
        moved
    }

    /// Moves every handle from `source` to the tail of this list.
    ///
    /// See [`transfer_max`](Self::transfer_max).
    pub fn transfer(&self, source: &List<T>) -> usize {
        self.transfer_max(source, 0)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("List")
            .field("len", &state.len())
            .field("capacity", &state.slots.capacity())
            .field("cursors", &state.cursors.len())
            .field("destructor", &self.destructor.is_some())
            .finish()
    }
}


#[cfg(test)]
mod bench_list {
    use super::*;
    use hdrhistogram::Histogram;

    #[inline]
    fn rdtscp() -> u64 {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            core::arch::x86_64::__rdtscp(&mut 0)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            use std::sync::OnceLock;
            use std::time::Instant;
            static EPOCH: OnceLock<Instant> = OnceLock::new();
            EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
        }
    }

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const WARMUP: usize = 10_000;
    const ITERATIONS: usize = 100_000;

    #[test]
    #[ignore]
    fn bench_list_append() {
        let list: List<u64> = List::with_capacity(ITERATIONS + WARMUP);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..WARMUP {
            let _ = list.append(i as u64);
            let _ = list.pop();
        }

        for i in 0..ITERATIONS {
            let start = rdtscp();
            let _ = list.append(i as u64);
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
            let _ = list.pop();
        }

        print_histogram("append", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_pop() {
        let list: List<u64> = List::with_capacity(ITERATIONS + WARMUP);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..WARMUP {
            let _ = list.append(i as u64);
            let _ = list.pop();
        }

        for i in 0..ITERATIONS {
            let _ = list.append(i as u64);
            let start = rdtscp();
            let _ = std::hint::black_box(list.pop());
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
        }

        print_histogram("pop", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_cursor_next() {
        const LEN: usize = 1024;
        let list: List<u64> = List::with_capacity(LEN);
        for i in 0..LEN {
            let _ = list.append(i as u64);
        }
        let mut hist = Histogram::<u64>::new(3).unwrap();
        let mut cursor = list.cursor();

        for _ in 0..ITERATIONS {
            let start = rdtscp();
            let next = std::hint::black_box(cursor.next());
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
            if next.is_none() {
                cursor.reset();
            }
        }

        print_histogram("cursor next", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_remove_with_cursors() {
        const LEN: usize = 256;
        const CURSORS: usize = 8;
        let list: List<u64> = List::with_capacity(LEN + 1);
        for i in 0..LEN {
            let _ = list.append(i as u64);
        }
        let cursors: Vec<_> = (0..CURSORS).map(|_| list.cursor()).collect();
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..ITERATIONS {
            let start = rdtscp();
            let _ = std::hint::black_box(list.remove_first(|&v| v == (i % LEN) as u64));
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
            let _ = list.append((i % LEN) as u64);
        }

        drop(cursors);
        print_histogram("remove_first (8 cursors)", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_all() {
        println!("\n=== List Benchmarks ===");
        println!("Run with: cargo test --release bench_list::bench_list_all -- --ignored --nocapture\n");

        bench_list_append();
        bench_list_pop();
        bench_list_cursor_next();
        bench_list_remove_with_cursors();
    }
}
