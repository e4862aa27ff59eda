//! Hosts that forward iteration to an inner storage handle.
//!
//! A host that already owns something iterable (a `Vec`, a slice, another
//! [`Indexed`] type) can expose it through [`Delegate`] instead of
//! implementing [`Indexed`] itself. The entry points then hand out the
//! storage's own cursors and the storage's native iterators: the elements are
//! the same, only the returned types differ.
//!
//! ```
//! use iterable_core::Delegate;
//!
//! struct Samples {
//!     data: Vec<i32>,
//! }
//!
//! impl Delegate for Samples {
//!     type Storage = Vec<i32>;
//!
//!     fn storage(&self) -> &Vec<i32> {
//!         &self.data
//!     }
//!
//!     fn storage_mut(&mut self) -> &mut Vec<i32> {
//!         &mut self.data
//!     }
//! }
//!
//! let mut samples = Samples { data: vec![7, 8, 9] };
//! let it: std::slice::Iter<'_, i32> = samples.iter();
//! assert_eq!(it.copied().collect::<Vec<_>>(), [7, 8, 9]);
//! for x in samples.iter_mut() {
//!     *x += 1;
//! }
//! assert_eq!(*(samples.end() - 1), 10);
//! ```

use crate::{
    cursor::{CategoryOf, Cursor},
    indexed::{Indexed, IndexedMut},
    iterable::Iterable,
};

/// Iteration through a storage handle owned by the host.
///
/// Implement either this or [`Indexed`] on a host, not both: both provide
/// `begin`/`end` and their mutable forms, and a type with both would make
/// those calls ambiguous.
pub trait Delegate {
    type Storage: Indexed + ?Sized;

    fn storage(&self) -> &Self::Storage;

    fn storage_mut(&mut self) -> &mut Self::Storage;

    #[inline]
    fn begin(&self) -> Cursor<&Self::Storage, CategoryOf<Self::Storage>> {
        self.storage().begin()
    }

    #[inline]
    fn end(&self) -> Cursor<&Self::Storage, CategoryOf<Self::Storage>> {
        self.storage().end()
    }

    #[inline]
    fn cbegin(&self) -> Cursor<&Self::Storage, CategoryOf<Self::Storage>> {
        self.storage().begin()
    }

    #[inline]
    fn cend(&self) -> Cursor<&Self::Storage, CategoryOf<Self::Storage>> {
        self.storage().end()
    }

    #[inline]
    fn begin_mut(&mut self) -> Cursor<&mut Self::Storage, CategoryOf<Self::Storage>>
    where
        Self::Storage: IndexedMut,
    {
        self.storage_mut().begin_mut()
    }

    #[inline]
    fn end_mut(&mut self) -> Cursor<&mut Self::Storage, CategoryOf<Self::Storage>>
    where
        Self::Storage: IndexedMut,
    {
        self.storage_mut().end_mut()
    }

    /// The storage's own iterator, e.g. `slice::Iter` for a `Vec`.
    #[inline]
    fn iter<'a>(&'a self) -> <&'a Self::Storage as IntoIterator>::IntoIter
    where
        Self::Storage: 'a,
        &'a Self::Storage: IntoIterator,
    {
        self.storage().into_iter()
    }

    #[inline]
    fn iter_mut<'a>(&'a mut self) -> <&'a mut Self::Storage as IntoIterator>::IntoIter
    where
        Self::Storage: 'a,
        &'a mut Self::Storage: IntoIterator,
    {
        self.storage_mut().into_iter()
    }
}
