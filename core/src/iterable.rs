//! Iteration entry points attached to every [`Indexed`] host.
//!
//! There is nothing to implement: any type implementing [`Indexed`] is
//! [`Iterable`]. The mutable entry points additionally need [`IndexedMut`],
//! the in-place algorithms [`Swap`], and the slice views
//! [`ContiguousStorage`].
//!
//! Method names stay clear of the slice, `Vec` and `VecDeque` ones (the
//! inherent `as_slice`/`as_mut_slice` win anyway), so bringing the trait into
//! scope leaves `vec.iter()` or `vec.sort_unstable()` calling the standard
//! library.
//!
//! ```
//! use std::collections::VecDeque;
//! use iterable_core::Iterable;
//!
//! let mut host: VecDeque<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into();
//! host.sort_elements();
//! assert!(host.iter().is_sorted());
//! assert!(host.elements().eq(host.iter()));
//! assert_eq!(host.end() - host.begin(), 8);
//! ```

use core::{cmp::Ordering, slice};

use crate::{
    algo,
    cursor::{CategoryOf, Cursor, position_of},
    indexed::{ContiguousStorage, Element, Indexed, IndexedMut, Swap},
    iter::Iter,
};

/// `begin`/`end` style cursors and Rust iterators for an [`Indexed`] host.
pub trait Iterable: Indexed {
    /// Cursor at position 0.
    #[inline]
    fn begin(&self) -> Cursor<&Self, CategoryOf<Self>> {
        Cursor::new(self, 0)
    }

    /// Cursor at position `len`, one past the last element.
    #[inline]
    fn end(&self) -> Cursor<&Self, CategoryOf<Self>> {
        Cursor::new(self, position_of(self.len()))
    }

    /// Same as [`begin`](Self::begin); spelled out for symmetry with
    /// [`begin_mut`](Self::begin_mut).
    #[inline]
    fn cbegin(&self) -> Cursor<&Self, CategoryOf<Self>> {
        self.begin()
    }

    #[inline]
    fn cend(&self) -> Cursor<&Self, CategoryOf<Self>> {
        self.end()
    }

    /// Cursor at `position`, which may lie outside `[0, len]`.
    #[inline]
    fn cursor_at(&self, position: isize) -> Cursor<&Self, CategoryOf<Self>> {
        Cursor::new(self, position)
    }

    #[inline]
    fn begin_mut(&mut self) -> Cursor<&mut Self, CategoryOf<Self>>
    where
        Self: IndexedMut,
    {
        Cursor::new(self, 0)
    }

    #[inline]
    fn end_mut(&mut self) -> Cursor<&mut Self, CategoryOf<Self>>
    where
        Self: IndexedMut,
    {
        let len = position_of(self.len());
        Cursor::new(self, len)
    }

    #[inline]
    fn cursor_at_mut(&mut self, position: isize) -> Cursor<&mut Self, CategoryOf<Self>>
    where
        Self: IndexedMut,
    {
        Cursor::new(self, position)
    }

    /// Iterates the elements in increasing position.
    #[inline]
    fn elements(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    fn as_slice(&self) -> &[Element<Self>]
    where
        Self: ContiguousStorage,
    {
        // SAFETY: `ContiguousStorage` guarantees `len` readable elements at
        // `as_ptr()`, borrowed here for as long as `self`.
        unsafe { slice::from_raw_parts(ContiguousStorage::as_ptr(self), self.len()) }
    }

    fn as_mut_slice(&mut self) -> &mut [Element<Self>]
    where
        Self: ContiguousStorage,
    {
        let len = self.len();
        // SAFETY: as above, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(ContiguousStorage::as_mut_ptr(self), len) }
    }

    #[inline]
    fn elements_mut(&mut self) -> slice::IterMut<'_, Element<Self>>
    where
        Self: ContiguousStorage,
    {
        self.as_mut_slice().iter_mut()
    }

    /// Sorts in place without allocating; equal elements may be reordered.
    fn sort_elements(&mut self)
    where
        Self: Swap,
        Element<Self>: Ord,
    {
        self.sort_elements_by(Ord::cmp);
    }

    fn sort_elements_by<F>(&mut self, compare: F)
    where
        Self: Swap,
        F: FnMut(&Element<Self>, &Element<Self>) -> Ordering,
    {
        let len = self.len();
        algo::sort_unstable_by(self.begin_mut(), len, compare);
    }

    fn sort_elements_by_key<K, F>(&mut self, mut key: F)
    where
        Self: Swap,
        K: Ord,
        F: FnMut(&Element<Self>) -> K,
    {
        self.sort_elements_by(|a, b| key(a).cmp(&key(b)));
    }

    fn reverse_elements(&mut self)
    where
        Self: Swap,
    {
        let len = self.len();
        algo::reverse(self.begin_mut(), len);
    }
}

impl<H: Indexed + ?Sized> Iterable for H {}
