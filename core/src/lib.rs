#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Random-access cursors and iteration for indexed containers.
//!
//! A host implements [`Indexed`] (a length and an accessor) and gets, through
//! the blanket [`Iterable`] impl, `begin`/`end` [`Cursor`]s, a Rust
//! [`Iter`]ator, and the in-place algorithms in [`algo`]. Hosts backed by
//! contiguous memory additionally implement [`ContiguousStorage`] and pick the
//! [`Contiguous`] category, which unlocks address and slice conversions.
//!
//! Hosts that merely wrap another container implement [`Delegate`] instead
//! and hand out the wrapped container's cursors and iterators.

extern crate alloc;

pub mod algo;
mod category;
mod cursor;
mod delegate;
mod error;
mod indexed;
mod iter;
mod iterable;

pub use category::{Category, Contiguous, RandomAccess, Tag};
pub use cursor::{CategoryOf, Cursor, Difference};
pub use delegate::Delegate;
pub use error::{CursorError, Result};
pub use indexed::{ContiguousStorage, Element, Indexed, IndexedMut, Swap};
pub use iter::Iter;
pub use iterable::Iterable;
