//! Random-access cursors over [`Indexed`] hosts.
//!
//! A [`Cursor`] is a host reference plus a signed position. It never owns or
//! caches an element: every dereference goes back to the host's accessor, so
//! the host may move its storage around between accesses.
//!
//! Mutability is carried by the reference type `R`, not by a second cursor
//! type. `Cursor<&H>` can only read; `Cursor<&mut H>` can also write, and like
//! any `&mut` it cannot be copied.
//!
//! ```
//! use iterable_core::Iterable;
//!
//! let mut host = vec![1, 2, 3];
//! let mut cursor = host.begin_mut();
//! cursor += 1;
//! *cursor = 5;
//! assert_eq!(host, [1, 5, 3]);
//!
//! let (begin, end) = (host.begin(), host.end());
//! assert_eq!(end - begin, 3);
//! assert_eq!(*(begin + 2), 3);
//! assert_eq!(begin[1], 5);
//! ```
//!
//! A cursor obtained from a shared host cannot be written through:
//!
//! ```compile_fail
//! use iterable_core::Iterable;
//!
//! let host = vec![1, 2, 3];
//! let mut cursor = host.begin();
//! *cursor = 5;
//! ```
//!
//! Address conversion only exists on contiguous cursors:
//!
//! ```compile_fail
//! use std::collections::VecDeque;
//! use iterable_core::Iterable;
//!
//! let host: VecDeque<i32> = [1, 2, 3].into();
//! let _ = host.begin().to_address();
//! ```

use core::{
    any::type_name,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Range, Sub, SubAssign},
    slice,
};

use crate::{
    category::{Category, Contiguous, RandomAccess, Tag},
    error::{CursorError, Result},
    indexed::{ContiguousStorage, Element, Indexed, IndexedMut, Swap},
    iter::Iter,
};

/// Signed distance between two cursors.
pub type Difference = isize;

/// The category a host selects for its cursors.
pub type CategoryOf<H> = <H as Indexed>::Category;

/// A random-access position inside an [`Indexed`] host.
///
/// `R` is `&H` or `&mut H`; `C` is the capability tag, normally the host's
/// own [`Indexed::Category`].
///
/// Equality, ordering and hashing only look at the position. Comparing
/// cursors of two different hosts is meaningless and not detected.
pub struct Cursor<R, C = RandomAccess> {
    host: R,
    position: isize,
    category: PhantomData<C>,
}

static_assertions::assert_eq_size!(Cursor<&'static alloc::vec::Vec<u8>>, [usize; 2]);
static_assertions::assert_eq_size!(Cursor<&'static mut alloc::vec::Vec<u8>, Contiguous>, [usize; 2]);

#[inline]
pub(crate) fn position_of(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

impl<R, C> Cursor<R, C> {
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }
}

impl<R> Cursor<R>
where
    R: Deref,
    R::Target: Indexed,
{
    /// Creates a cursor tagged with the host's own category.
    ///
    /// `position` may be anything; only `0..len` can be dereferenced and
    /// `len` is the one-past-the-end position.
    #[inline]
    pub fn new(host: R, position: isize) -> Cursor<R, CategoryOf<R::Target>> {
        Cursor::with_category(host, position)
    }
}

impl<R, C> Cursor<R, C>
where
    R: Deref,
    R::Target: Indexed,
    C: Category,
{
    /// The capability this cursor advertises.
    pub const TAG: Tag = C::TAG;

    /// Creates a cursor with an explicit category.
    #[inline]
    pub fn with_category(host: R, position: isize) -> Self {
        Cursor {
            host,
            position,
            category: PhantomData,
        }
    }

    #[inline]
    pub fn host(&self) -> &R::Target {
        &self.host
    }

    /// Returns the element under the cursor, or `None` outside `[0, len)`.
    #[inline]
    pub fn get(&self) -> Option<&Element<R::Target>> {
        let index = self.resolve(0).ok()?;
        Some(self.host.at(index))
    }

    /// Like [`get`](Self::get), reporting why the access was rejected.
    pub fn try_get(&self) -> Result<&Element<R::Target>> {
        match self.resolve(0) {
            Ok(index) => Ok(self.host.at(index)),
            Err(err) => {
                tracing::debug!(position = self.position, len = self.host.len(), "rejected cursor read");
                Err(err)
            }
        }
    }

    /// Moves one position forward (prefix `++`).
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    /// Moves one position back (prefix `--`).
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.position -= 1;
        self
    }

    /// Moves by `offset` positions in place and returns the same cursor.
    #[inline]
    pub fn advance(&mut self, offset: isize) -> &mut Self {
        self.position += offset;
        self
    }

    /// `self - other` for cursors that differ in mutability or category.
    #[inline]
    pub fn offset_from<R2, C2>(&self, other: &Cursor<R2, C2>) -> Difference {
        self.position - other.position
    }

    /// A shared cursor at the same position.
    #[inline]
    pub fn as_const(&self) -> Cursor<&R::Target, C> {
        Cursor::with_category(&*self.host, self.position)
    }

    /// Forgets contiguity, keeping host and position.
    #[inline]
    pub fn into_random_access(self) -> Cursor<R, RandomAccess> {
        Cursor::with_category(self.host, self.position)
    }

    /// Resolves `position + offset` to a host index.
    pub(crate) fn resolve(&self, offset: isize) -> Result<usize> {
        let len = self.host.len();
        let position = self.position.saturating_add(offset);
        match usize::try_from(position) {
            Ok(index) if index < len => Ok(index),
            _ => Err(CursorError::OutOfBounds { position, len }),
        }
    }

    #[track_caller]
    fn expect_index(&self, offset: isize) -> usize {
        match self.resolve(offset) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Host indices covered by `[position, position + len)`.
    pub(crate) fn span(&self, len: usize) -> Result<Range<usize>> {
        self.span_to(self.position.saturating_add(position_of(len)))
    }

    /// Host indices covered by `[position, end)`.
    pub(crate) fn span_to(&self, end: isize) -> Result<Range<usize>> {
        let len = self.host.len();
        let invalid = CursorError::InvalidRange {
            start: self.position,
            end,
            len,
        };
        let (Ok(start), Ok(stop)) = (usize::try_from(self.position), usize::try_from(end)) else {
            return Err(invalid);
        };
        if start > stop || stop > len {
            return Err(invalid);
        }
        Ok(start..stop)
    }
}

impl<R, C> Cursor<R, C>
where
    R: DerefMut,
    R::Target: IndexedMut,
    C: Category,
{
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut Element<R::Target>> {
        let index = self.resolve(0).ok()?;
        Some(self.host.at_mut(index))
    }

    pub fn try_get_mut(&mut self) -> Result<&mut Element<R::Target>> {
        match self.resolve(0) {
            Ok(index) => Ok(self.host.at_mut(index)),
            Err(err) => {
                tracing::debug!(position = self.position, len = self.host.len(), "rejected cursor write");
                Err(err)
            }
        }
    }

    #[inline]
    pub(crate) fn host_mut(&mut self) -> &mut R::Target {
        &mut self.host
    }

    /// A mutable cursor at the same position that borrows from this one.
    #[inline]
    pub fn reborrow_mut(&mut self) -> Cursor<&mut R::Target, C> {
        Cursor::with_category(&mut *self.host, self.position)
    }
}

impl<R, C> Cursor<R, C>
where
    R: DerefMut,
    R::Target: Swap,
    C: Category,
{
    /// Exchanges the elements at `position + a` and `position + b`.
    ///
    /// # Panics
    ///
    /// If either position is outside `[0, len)`.
    #[track_caller]
    pub fn swap(&mut self, a: isize, b: isize) {
        let (a, b) = (self.expect_index(a), self.expect_index(b));
        self.host.swap(a, b);
    }
}

impl<R, C> Cursor<R, C>
where
    R: Deref + Copy,
    R::Target: Indexed,
    C: Category,
{
    /// Moves one position forward and returns the cursor as it was (postfix `++`).
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.position += 1;
        old
    }

    /// Moves one position back and returns the cursor as it was (postfix `--`).
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.position -= 1;
        old
    }
}

impl<'a, H, C> Cursor<&'a H, C>
where
    H: Indexed + ?Sized,
    C: Category,
{
    /// Iterates `[self, end)`.
    ///
    /// # Panics
    ///
    /// If the range is inverted or not within `[0, len]`.
    #[track_caller]
    pub fn iter_to<C2>(self, end: Cursor<&'a H, C2>) -> Iter<'a, H> {
        match self.span_to(end.position) {
            Ok(span) => Iter::from_span(self.host, span),
            Err(err) => panic!("{err}"),
        }
    }
}

// --- Contiguous-only capabilities ---

impl<R> Cursor<R, Contiguous>
where
    R: Deref,
    R::Target: ContiguousStorage,
{
    /// Raw address of the element under the cursor.
    ///
    /// Computed with wrapping arithmetic, so it is always safe to call; it is
    /// only valid to dereference for positions in `[0, len)`.
    #[inline]
    pub fn to_address(&self) -> *const Element<R::Target> {
        self.host.as_ptr().wrapping_offset(self.position)
    }

    /// The elements in `[self, end)` as a slice.
    pub fn as_slice_to<R2>(&self, end: &Cursor<R2, Contiguous>) -> Result<&[Element<R::Target>]> {
        let span = self.span_to(end.position)?;
        // SAFETY: `span` lies within `[0, len]` and `ContiguousStorage`
        // guarantees `len` readable elements at `as_ptr()`.
        Ok(unsafe { slice::from_raw_parts(self.host.as_ptr().add(span.start), span.len()) })
    }
}

impl<R> Cursor<R, Contiguous>
where
    R: DerefMut,
    R::Target: ContiguousStorage,
{
    #[inline]
    pub fn to_address_mut(&mut self) -> *mut Element<R::Target> {
        self.host.as_mut_ptr().wrapping_offset(self.position)
    }
}

impl<'a, H> Cursor<&'a H, Contiguous>
where
    H: ContiguousStorage + ?Sized,
{
    /// The elements in `[self, end)`, borrowed for the host's lifetime.
    pub fn into_slice_to(self, end: Cursor<&'a H, Contiguous>) -> Result<&'a [H::Element]> {
        let span = self.span_to(end.position)?;
        // SAFETY: as in `as_slice_to`.
        Ok(unsafe { slice::from_raw_parts(self.host.as_ptr().add(span.start), span.len()) })
    }
}

impl<'a, H> Cursor<&'a mut H, Contiguous>
where
    H: ContiguousStorage + ?Sized,
{
    /// The elements in `[self, end)` as a mutable slice.
    ///
    /// `end` is a position rather than a cursor: a second mutable cursor into
    /// the same host cannot exist alongside this one.
    ///
    /// ```
    /// use iterable_core::Iterable;
    ///
    /// let mut host = vec![3, 1, 2];
    /// let end = host.end().position();
    /// host.begin_mut().into_mut_slice_to(end).unwrap().sort();
    /// assert_eq!(host, [1, 2, 3]);
    /// ```
    pub fn into_mut_slice_to(self, end: isize) -> Result<&'a mut [H::Element]> {
        let span = self.span_to(end)?;
        let host = self.host;
        // SAFETY: `span` lies within `[0, len]`, `ContiguousStorage`
        // guarantees `len` writable elements at `as_mut_ptr()`, and the
        // exclusive borrow of the host moves into the returned slice.
        Ok(unsafe { slice::from_raw_parts_mut(host.as_mut_ptr().add(span.start), span.len()) })
    }
}

// --- Dereference and subscript ---

impl<R, C> Deref for Cursor<R, C>
where
    R: Deref,
    R::Target: Indexed,
    C: Category,
{
    type Target = Element<R::Target>;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &Self::Target {
        let index = self.expect_index(0);
        self.host.at(index)
    }
}

impl<R, C> DerefMut for Cursor<R, C>
where
    R: DerefMut,
    R::Target: IndexedMut,
    C: Category,
{
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        let index = self.expect_index(0);
        self.host.at_mut(index)
    }
}

impl<R, C> Index<isize> for Cursor<R, C>
where
    R: Deref,
    R::Target: Indexed,
    C: Category,
{
    type Output = Element<R::Target>;

    #[inline]
    #[track_caller]
    fn index(&self, offset: isize) -> &Self::Output {
        let index = self.expect_index(offset);
        self.host.at(index)
    }
}

impl<R, C> IndexMut<isize> for Cursor<R, C>
where
    R: DerefMut,
    R::Target: IndexedMut,
    C: Category,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, offset: isize) -> &mut Self::Output {
        let index = self.expect_index(offset);
        self.host.at_mut(index)
    }
}

// --- Arithmetic ---

impl<R, C> Add<isize> for Cursor<R, C> {
    type Output = Self;

    #[inline]
    fn add(mut self, offset: isize) -> Self {
        self.position += offset;
        self
    }
}

impl<R, C> Add<Cursor<R, C>> for isize {
    type Output = Cursor<R, C>;

    #[inline]
    fn add(self, cursor: Cursor<R, C>) -> Cursor<R, C> {
        cursor + self
    }
}

impl<R, C> Sub<isize> for Cursor<R, C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, offset: isize) -> Self {
        self.position -= offset;
        self
    }
}

impl<R, C, R2, C2> Sub<Cursor<R2, C2>> for Cursor<R, C> {
    type Output = Difference;

    #[inline]
    fn sub(self, other: Cursor<R2, C2>) -> Difference {
        self.position - other.position
    }
}

impl<R, C, R2, C2> Sub<&Cursor<R2, C2>> for &Cursor<R, C> {
    type Output = Difference;

    #[inline]
    fn sub(self, other: &Cursor<R2, C2>) -> Difference {
        self.position - other.position
    }
}

impl<R, C> AddAssign<isize> for Cursor<R, C> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        self.position += offset;
    }
}

impl<R, C> SubAssign<isize> for Cursor<R, C> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        self.position -= offset;
    }
}

// --- Identity: position only ---

impl<R, C, R2, C2> PartialEq<Cursor<R2, C2>> for Cursor<R, C> {
    #[inline]
    fn eq(&self, other: &Cursor<R2, C2>) -> bool {
        self.position == other.position
    }
}

impl<R, C> Eq for Cursor<R, C> {}

impl<R, C, R2, C2> PartialOrd<Cursor<R2, C2>> for Cursor<R, C> {
    #[inline]
    fn partial_cmp(&self, other: &Cursor<R2, C2>) -> Option<Ordering> {
        Some(self.position.cmp(&other.position))
    }
}

impl<R, C> Ord for Cursor<R, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.position.cmp(&other.position)
    }
}

impl<R, C> Hash for Cursor<R, C> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.position.hash(state);
    }
}

// --- Manual Clone/Copy/Debug to avoid bounds on the host and the tag ---

impl<R: Clone, C> Clone for Cursor<R, C> {
    #[inline]
    fn clone(&self) -> Self {
        Cursor {
            host: self.host.clone(),
            position: self.position,
            category: PhantomData,
        }
    }
}

impl<R: Copy, C> Copy for Cursor<R, C> {}

impl<R, C> fmt::Debug for Cursor<R, C>
where
    R: Deref,
    C: Category,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("host", &type_name::<R::Target>())
            .field("position", &self.position)
            .field("tag", &C::TAG)
            .finish()
    }
}

impl<'a, H, C> From<Cursor<&'a mut H, C>> for Cursor<&'a H, C>
where
    H: ?Sized,
{
    #[inline]
    fn from(cursor: Cursor<&'a mut H, C>) -> Self {
        Cursor {
            host: cursor.host,
            position: cursor.position,
            category: PhantomData,
        }
    }
}
