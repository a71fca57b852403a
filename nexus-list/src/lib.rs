//! Thread-safe ordered lists of element handles with coherent cursors.
//!
//! A [`List`] stores opaque, caller-owned handles (an `Arc`, a reference, a
//! slab key) in a contiguous slot array behind a single mutex. It works as a
//! queue, a stack and a general ordered container at once.
//!
//! # Design
//!
//! ```text
//!   List ── Mutex ─┬─ slots:   [ h0 ][ h1 ][ h2 ][    ][    ]
//!                  │                  ▲
//!                  └─ cursors: { 0: next=2 last=1, 1: next=0 last=0 }
//! ```
//!
//! - **Slots**: handles in list order. Capacity doubles when full and never
//!   shrinks.
//! - **Cursors**: every live [`Cursor`] is registered with its list. Each
//!   insert or removal repairs all registered cursors under the same lock,
//!   so iteration stays coherent while other cursors or threads mutate.
//! - **Destructor**: an optional [`Destructor`] releases handles on delete,
//!   flush and teardown. Plain removals hand the handle back instead.
//!
//! # Quick Start
//!
//! ```
//! use nexus_list::List;
//! use std::sync::Arc;
//!
//! let jobs: List<Arc<str>> = List::new();
//! jobs.enqueue(Arc::from("build")).unwrap();
//! jobs.enqueue(Arc::from("test")).unwrap();
//! jobs.push(Arc::from("fetch")).unwrap();
//!
//! let order: Vec<_> = jobs.cursor().map(|j| j.to_string()).collect();
//! assert_eq!(order, ["fetch", "build", "test"]);
//!
//! assert_eq!(jobs.dequeue().as_deref(), Some("fetch"));
//! ```
//!
//! # Sharing Between Threads
//!
//! Every operation takes `&self`, so a list is shared by reference.
//!
//! ```
//! use nexus_list::List;
//! use std::thread;
//!
//! let list: List<u64> = List::new();
//! thread::scope(|s| {
//!     for t in 0..4 {
//!         let list = &list;
//!         s.spawn(move || {
//!             for i in 0..100 {
//!                 list.append(t * 100 + i).unwrap();
//!             }
//!         });
//!     }
//! });
//! assert_eq!(list.len(), 400);
//! ```
//!
//! # Allocation Failure
//!
//! Growth uses fallible reservation. A failed insert returns the handle in
//! [`Rejected`] and leaves the list untouched; [`List::reserve`] and
//! [`List::shallow_copy`] report [`ReserveError`].

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod handle;
pub mod list;

mod position;
mod slots;

pub use cursor::Cursor;
pub use error::{Rejected, ReserveError};
pub use handle::Handle;
pub use list::{Destructor, List, OnFailure, Walk};
