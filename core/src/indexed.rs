//! The host contract: what a container must provide to be iterated.
//!
//! A host exposes a length and an indexed accessor. Everything else (cursors,
//! ranges, the `begin`/`end` entry points, the algorithms) is synthesized from
//! those two operations.
//!
//! ```
//! use iterable_core::{Indexed, IndexedMut, Iterable, RandomAccess};
//!
//! struct Ring {
//!     slots: [u32; 4],
//!     head: usize,
//! }
//!
//! impl Indexed for Ring {
//!     type Element = u32;
//!     type Category = RandomAccess;
//!
//!     fn len(&self) -> usize {
//!         self.slots.len()
//!     }
//!
//!     fn at(&self, index: usize) -> &u32 {
//!         &self.slots[(self.head + index) % self.slots.len()]
//!     }
//! }
//!
//! impl IndexedMut for Ring {
//!     fn at_mut(&mut self, index: usize) -> &mut u32 {
//!         let len = self.slots.len();
//!         &mut self.slots[(self.head + index) % len]
//!     }
//! }
//!
//! let ring = Ring { slots: [30, 40, 10, 20], head: 2 };
//! assert_eq!(ring.elements().copied().collect::<Vec<_>>(), [10, 20, 30, 40]);
//! ```

use alloc::{collections::VecDeque, vec::Vec};

use crate::category::{Category, Contiguous, RandomAccess};

/// A container with a length and constant-time indexed access.
///
/// `at` is only ever called with an index in `[0, len)`. Implementations are
/// free to panic outside that range, the way slice indexing does.
pub trait Indexed {
    /// The element type handed out by [`at`](Indexed::at).
    type Element;

    /// Capability advertised by cursors over this host.
    ///
    /// [`Contiguous`] additionally requires [`ContiguousStorage`] before any
    /// contiguous-only operation becomes available.
    type Category: Category;

    fn len(&self) -> usize;

    fn at(&self, index: usize) -> &Self::Element;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A host whose elements can also be reached mutably.
pub trait IndexedMut: Indexed {
    fn at_mut(&mut self, index: usize) -> &mut Self::Element;
}

/// A host that can exchange two of its elements in place.
///
/// Kept separate from [`IndexedMut`]: two live `&mut` into the same host
/// cannot be obtained through `at_mut`, so the host has to do the exchange.
/// The in-place algorithms (sorting, reversing) need it.
pub trait Swap: IndexedMut {
    /// Exchanges the elements at `a` and `b`; `a == b` is a no-op.
    fn swap(&mut self, a: usize, b: usize);
}

/// A host whose elements live in one contiguous, ascending block of memory.
///
/// # Safety
///
/// Implementors guarantee that, for as long as the host is not mutated through
/// any other path:
///
/// - `as_ptr()` points to element 0 and is valid for reads of `len()`
///   consecutive elements with stride `size_of::<Element>()`;
/// - `as_mut_ptr()` is the same address and is additionally valid for writes;
/// - `at(i)` and `at_mut(i)` return references to exactly `as_ptr().add(i)`.
///
/// Address arithmetic on any element is then equivalent to index arithmetic,
/// which is what [`Cursor::to_address`](crate::Cursor::to_address) and the
/// slice conversions rely on.
pub unsafe trait ContiguousStorage: IndexedMut {
    fn as_ptr(&self) -> *const Self::Element;

    fn as_mut_ptr(&mut self) -> *mut Self::Element;
}

/// The element type of a host.
pub type Element<H> = <H as Indexed>::Element;

// --- Slices, arrays and vectors: contiguous ---

impl<T> Indexed for [T] {
    type Element = T;
    type Category = Contiguous;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexedMut for [T] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T> Swap for [T] {
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// SAFETY: a slice is one contiguous allocation and `at` indexes into it.
unsafe impl<T> ContiguousStorage for [T] {
    #[inline]
    fn as_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        <[T]>::as_mut_ptr(self)
    }
}

impl<T, const N: usize> Indexed for [T; N] {
    type Element = T;
    type Category = Contiguous;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> IndexedMut for [T; N] {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T, const N: usize> Swap for [T; N] {
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// SAFETY: arrays are laid out exactly like slices.
unsafe impl<T, const N: usize> ContiguousStorage for [T; N] {
    #[inline]
    fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }
}

impl<T> Indexed for Vec<T> {
    type Element = T;
    type Category = Contiguous;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexedMut for Vec<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T> Swap for Vec<T> {
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// SAFETY: `Vec` stores its elements in one contiguous buffer.
unsafe impl<T> ContiguousStorage for Vec<T> {
    #[inline]
    fn as_ptr(&self) -> *const T {
        Vec::as_ptr(self)
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        Vec::as_mut_ptr(self)
    }
}

// --- Ring buffers: random-access only ---

impl<T> Indexed for VecDeque<T> {
    type Element = T;
    type Category = RandomAccess;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexedMut for VecDeque<T> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }
}

impl<T> Swap for VecDeque<T> {
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}
