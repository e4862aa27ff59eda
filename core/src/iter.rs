//! Iterating a cursor range with the standard iterator traits.

use core::{fmt, iter::FusedIterator, ops::Range};

use crate::{
    cursor::{CategoryOf, Cursor, position_of},
    error::{CursorError, Result},
    indexed::Indexed,
};

/// Iterator over `&H::Element` for the positions in `[front, back)`.
///
/// Both ends move in constant time, so `nth`, `nth_back`, `len` and `last`
/// never walk the range.
pub struct Iter<'a, H: ?Sized> {
    host: &'a H,
    front: usize,
    back: usize,
}

impl<'a, H> Iter<'a, H>
where
    H: Indexed + ?Sized,
{
    /// Iterates the whole host.
    #[inline]
    pub fn new(host: &'a H) -> Self {
        Self::from_span(host, 0..host.len())
    }

    /// Iterates `host[start..end]`.
    pub fn with_bounds(host: &'a H, start: usize, end: usize) -> Result<Self> {
        if start > end || end > host.len() {
            return Err(CursorError::InvalidRange {
                start: position_of(start),
                end: position_of(end),
                len: host.len(),
            });
        }
        Ok(Self::from_span(host, start..end))
    }

    #[inline]
    pub(crate) fn from_span(host: &'a H, span: Range<usize>) -> Self {
        Iter {
            host,
            front: span.start,
            back: span.end,
        }
    }

    /// The cursors delimiting what is left to iterate.
    pub fn as_cursors(&self) -> (Cursor<&'a H, CategoryOf<H>>, Cursor<&'a H, CategoryOf<H>>) {
        (
            Cursor::new(self.host, position_of(self.front)),
            Cursor::new(self.host, position_of(self.back)),
        )
    }
}

impl<'a, H> Iterator for Iter<'a, H>
where
    H: Indexed + ?Sized,
{
    type Item = &'a H::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.host.at(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, H> DoubleEndedIterator for Iter<'a, H>
where
    H: Indexed + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.host.at(self.back))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<'a, H> ExactSizeIterator for Iter<'a, H> where H: Indexed + ?Sized {}

impl<'a, H> FusedIterator for Iter<'a, H> where H: Indexed + ?Sized {}

impl<'a, H: ?Sized> Clone for Iter<'a, H> {
    fn clone(&self) -> Self {
        Iter {
            host: self.host,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, H: ?Sized> fmt::Debug for Iter<'a, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("host", &core::any::type_name::<H>())
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
