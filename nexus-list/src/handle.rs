//! Handle trait for list elements.
//!
//! A list never owns or inspects what its elements point at. It stores
//! cheap, cloneable handles and compares them by identity. The [`Handle`]
//! trait captures exactly that contract.

use std::sync::Arc;

/// Trait for element handles stored in a [`List`](crate::List).
///
/// A handle is an opaque reference to a caller-owned element. The list clones
/// handles to hand them out (peek, cursor advance, shallow copy) and compares
/// them with [`same`](Handle::same) when deleting by identity.
///
/// Implemented for:
/// - `Arc<T>` and `&T`: pointer identity
/// - unsigned integers: value identity (e.g. keys into a slab)
///
/// # Example
///
/// ```
/// use nexus_list::Handle;
/// use std::sync::Arc;
///
/// let a = Arc::new(String::from("job"));
/// let b = Arc::new(String::from("job"));
///
/// assert!(a.same(&Arc::clone(&a)));
/// assert!(!a.same(&b)); // equal contents, different elements
/// ```
///
/// # Custom Handle Types
///
/// ```
/// use nexus_list::Handle;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// struct JobId(u64);
///
/// impl Handle for JobId {
///     fn same(&self, other: &Self) -> bool {
///         self == other
///     }
/// }
/// ```
pub trait Handle: Clone {
    /// Returns `true` if both handles refer to the same element.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Handle for Arc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Handle for &T {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

macro_rules! impl_handle_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Handle for $ty {
                #[inline]
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_handle_for_unsigned!(u8, u16, u32, u64, usize);
