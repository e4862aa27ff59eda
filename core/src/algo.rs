//! Random-access algorithms expressed over cursors.
//!
//! These work on any host, contiguous or not. In-place algorithms take a
//! mutable cursor and an element count, since a host can only hand out one
//! mutable cursor at a time; read-only algorithms take a `[first, last)`
//! pair of shared cursors, like their slice counterparts take a slice.
//!
//! ```
//! use std::collections::VecDeque;
//! use iterable_core::{Iterable, algo};
//!
//! let mut host: VecDeque<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into();
//! let len = host.len();
//! algo::sort_unstable(host.begin_mut(), len);
//!
//! let found = algo::lower_bound(host.begin(), host.end(), &4);
//! assert_eq!(found - host.begin(), 4);
//! assert_eq!(*found, 4);
//! ```

use core::{
    cmp::Ordering,
    ops::{Deref, DerefMut},
};

use crate::{
    category::Category,
    cursor::{Cursor, position_of},
    indexed::{Element, Indexed, Swap},
};

#[track_caller]
fn expect_span<R, C>(first: &Cursor<R, C>, len: usize) -> core::ops::Range<usize>
where
    R: Deref,
    R::Target: Indexed,
    C: Category,
{
    match first.span(len) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    }
}

#[track_caller]
fn expect_span_to<R, C, C2>(first: &Cursor<R, C>, last: &Cursor<R, C2>) -> core::ops::Range<usize>
where
    R: Deref,
    R::Target: Indexed,
    C: Category,
{
    match first.span_to(last.position()) {
        Ok(span) => span,
        Err(err) => panic!("{err}"),
    }
}

/// Sorts `[first, first + len)` in place.
///
/// # Panics
///
/// If the range is not within the host.
#[track_caller]
pub fn sort_unstable<R, C>(first: Cursor<R, C>, len: usize)
where
    R: DerefMut,
    R::Target: Swap,
    Element<R::Target>: Ord,
    C: Category,
{
    sort_unstable_by(first, len, Ord::cmp);
}

/// Sorts `[first, first + len)` in place with a comparator.
///
/// Heap sort: `O(len log len)` comparisons and swaps, no allocation, not
/// stable.
///
/// # Panics
///
/// If the range is not within the host.
#[track_caller]
pub fn sort_unstable_by<R, C, F>(mut first: Cursor<R, C>, len: usize, mut compare: F)
where
    R: DerefMut,
    R::Target: Swap,
    C: Category,
    F: FnMut(&Element<R::Target>, &Element<R::Target>) -> Ordering,
{
    let span = expect_span(&first, len);
    tracing::debug!(start = span.start, len, "sorting cursor range");
    if len < 2 {
        return;
    }

    let mut heap = Heap {
        host: first.host_mut(),
        base: span.start,
        is_less: |a: &Element<R::Target>, b: &Element<R::Target>| compare(a, b) == Ordering::Less,
    };
    for node in (0..len / 2).rev() {
        heap.sift_down(node, len);
    }
    for end in (1..len).rev() {
        heap.host.swap(heap.base, heap.base + end);
        heap.sift_down(0, end);
    }
}

struct Heap<'h, H: ?Sized, F> {
    host: &'h mut H,
    base: usize,
    is_less: F,
}

impl<H, F> Heap<'_, H, F>
where
    H: Swap + ?Sized,
    F: FnMut(&H::Element, &H::Element) -> bool,
{
    fn less(&mut self, a: usize, b: usize) -> bool {
        (self.is_less)(self.host.at(self.base + a), self.host.at(self.base + b))
    }

    fn sift_down(&mut self, mut node: usize, end: usize) {
        loop {
            let mut child = 2 * node + 1;
            if child >= end {
                break;
            }
            if child + 1 < end && self.less(child, child + 1) {
                child += 1;
            }
            if !self.less(node, child) {
                break;
            }
            self.host.swap(self.base + node, self.base + child);
            node = child;
        }
    }
}

/// Reverses `[first, first + len)` in place.
///
/// # Panics
///
/// If the range is not within the host.
#[track_caller]
pub fn reverse<R, C>(mut first: Cursor<R, C>, len: usize)
where
    R: DerefMut,
    R::Target: Swap,
    C: Category,
{
    let span = expect_span(&first, len);
    tracing::debug!(start = span.start, len, "reversing cursor range");
    let host = first.host_mut();
    let (mut lo, mut hi) = (span.start, span.end);
    while lo + 1 < hi {
        hi -= 1;
        host.swap(lo, hi);
        lo += 1;
    }
}

/// First cursor in `[first, last)` for which `pred` is false.
///
/// The range must be partitioned: every element satisfying `pred` comes
/// before every element that does not. Returns `last` if `pred` holds
/// everywhere.
///
/// # Panics
///
/// If the range is inverted or not within the host.
#[track_caller]
pub fn partition_point<'a, H, C, C2, P>(first: Cursor<&'a H, C>, last: Cursor<&'a H, C2>, mut pred: P) -> Cursor<&'a H, C>
where
    H: Indexed + ?Sized,
    C: Category,
    P: FnMut(&H::Element) -> bool,
{
    let span = expect_span_to(&first, &last);
    tracing::debug!(start = span.start, len = span.len(), "searching cursor range");
    let host = first.host();
    let (mut lo, mut hi) = (span.start, span.end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(host.at(mid)) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let offset = position_of(lo) - first.position();
    first + offset
}

/// First cursor whose element is not less than `value`.
#[track_caller]
pub fn lower_bound<'a, H, C, C2>(first: Cursor<&'a H, C>, last: Cursor<&'a H, C2>, value: &H::Element) -> Cursor<&'a H, C>
where
    H: Indexed + ?Sized,
    H::Element: Ord,
    C: Category,
{
    partition_point(first, last, |x| x < value)
}

/// First cursor whose element is greater than `value`.
#[track_caller]
pub fn upper_bound<'a, H, C, C2>(first: Cursor<&'a H, C>, last: Cursor<&'a H, C2>, value: &H::Element) -> Cursor<&'a H, C>
where
    H: Indexed + ?Sized,
    H::Element: Ord,
    C: Category,
{
    partition_point(first, last, |x| x <= value)
}

/// Binary search over a sorted `[first, last)`.
///
/// `Ok` holds a cursor at a matching element (any of them, if several
/// match); `Err` holds the cursor where a matching element could be inserted
/// keeping the order.
#[track_caller]
pub fn binary_search_by<'a, H, C, C2, F>(
    first: Cursor<&'a H, C>,
    last: Cursor<&'a H, C2>,
    mut compare: F,
) -> Result<Cursor<&'a H, C>, Cursor<&'a H, C>>
where
    H: Indexed + ?Sized,
    C: Category,
    F: FnMut(&H::Element) -> Ordering,
{
    let found = partition_point(first, last, |x| compare(x) == Ordering::Less);
    match found.get() {
        Some(x) if found < last && compare(x) == Ordering::Equal => Ok(found),
        _ => Err(found),
    }
}
