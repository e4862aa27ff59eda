//! Compile-time capability tags for cursors.

use core::fmt::Debug;

/// Capability published by a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Random access: constant-time jumps, differences and ordering.
    Default,
    /// Random access over elements stored at consecutive addresses.
    Contiguous,
}

mod private {
    pub trait Sealed {}
}

/// Type-level form of [`Tag`], selected by a host through
/// [`Indexed::Category`](crate::Indexed::Category).
///
/// This is a sealed trait: the only categories are [`RandomAccess`] and
/// [`Contiguous`].
pub trait Category: private::Sealed + Copy + Default + Debug + 'static {
    const TAG: Tag;
}

/// Marker for plain random-access cursors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

/// Marker for cursors over [`ContiguousStorage`](crate::ContiguousStorage)
/// hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

impl private::Sealed for RandomAccess {}
impl private::Sealed for Contiguous {}

impl Category for RandomAccess {
    const TAG: Tag = Tag::Default;
}

impl Category for Contiguous {
    const TAG: Tag = Tag::Contiguous;
}

static_assertions::assert_eq_size!(RandomAccess, ());
static_assertions::assert_eq_size!(Contiguous, ());
