#![cfg_attr(not(feature = "std"), no_std)]

//! Iterable - random-access cursors for indexed containers
//!
//! # Overview
//!
//! Any container that can report its length and hand out an element by index
//! becomes a fully-fledged random-access iterable:
//!
//! - `begin`/`end` [`Cursor`]s with the whole random-access operation set
//!   (`*c`, `c[k]`, `c + k`, `b - a`, ordering, ...)
//! - a double-ended, exact-size [`Iter`] for Rust's iterator adapters
//! - in-place algorithms over cursor ranges in [`algo`]
//! - address and slice conversions when the storage is [`Contiguous`]
//!
//! # Quick Start
//!
//! ```
//! use iterable::{Indexed, IndexedMut, Iterable, RandomAccess};
//!
//! #[derive(Iterable)]
//! struct Stack {
//!     slots: [i32; 8],
//!     len: usize,
//! }
//!
//! impl Indexed for Stack {
//!     type Element = i32;
//!     type Category = RandomAccess;
//!
//!     fn len(&self) -> usize {
//!         self.len
//!     }
//!
//!     fn at(&self, index: usize) -> &i32 {
//!         &self.slots[index]
//!     }
//! }
//!
//! impl IndexedMut for Stack {
//!     fn at_mut(&mut self, index: usize) -> &mut i32 {
//!         &mut self.slots[index]
//!     }
//! }
//!
//! let mut stack = Stack { slots: [10, 20, 30, 40, 0, 0, 0, 0], len: 4 };
//!
//! // Cursors
//! let (begin, end) = (stack.begin(), stack.end());
//! assert_eq!(end - begin, 4);
//! assert_eq!(*(begin + 2), 30);
//! assert_eq!((end - 1) - (begin + 1), 2);
//!
//! // Iterators and `for` loops
//! assert_eq!(stack.elements().sum::<i32>(), 100);
//! let mut doubled = Vec::new();
//! for x in &stack {
//!     doubled.push(x * 2);
//! }
//! assert_eq!(doubled, [20, 40, 60, 80]);
//!
//! // Writes go through mutable cursors only
//! *(stack.begin_mut() + 1) = 5;
//! assert_eq!(stack.elements().copied().collect::<Vec<_>>(), [10, 5, 30, 40]);
//! ```
//!
//! # Delegation
//!
//! A host wrapping a container that is already iterable can forward to it
//! instead of implementing [`Indexed`]:
//!
//! ```
//! use iterable::{Delegate, Iterable};
//!
//! #[derive(Iterable)]
//! struct Samples {
//!     #[iterable(storage)]
//!     data: Vec<i32>,
//! }
//!
//! let samples = Samples { data: vec![7, 8, 9] };
//! let native: std::slice::Iter<'_, i32> = samples.iter();
//! assert_eq!(native.copied().collect::<Vec<_>>(), [7, 8, 9]);
//! assert_eq!(*samples.begin(), 7);
//! ```
//!
//! # Features
//!
//! - `derive` (default): `#[derive(Iterable)]`
//! - `std`: link `std`; without it the crate is `no_std` + `alloc`

pub use iterable_core::*;

#[cfg(feature = "derive")]
pub use iterable_macros::Iterable;
