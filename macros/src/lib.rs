//! Procedural macros for the `iterable` crate.
//!
//! - `#[derive(Iterable)]` - Make a host usable in `for` loops, or forward
//!   its iteration to a storage field

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod derive_iterable;

/// Attach `for`-loop support to a host.
///
/// # Indexed hosts
///
/// On a struct that implements [`Indexed`], generates
/// `impl IntoIterator for &Host` yielding [`Iter`], so `for x in &host` walks
/// `[begin, end)`:
///
/// ```
/// use iterable::{Indexed, Iterable, RandomAccess};
///
/// #[derive(Iterable)]
/// struct Stack {
///     slots: [u32; 4],
///     len: usize,
/// }
///
/// impl Indexed for Stack {
///     type Element = u32;
///     type Category = RandomAccess;
///     fn len(&self) -> usize { self.len }
///     fn at(&self, index: usize) -> &u32 { &self.slots[index] }
/// }
///
/// let stack = Stack { slots: [3, 5, 7, 0], len: 3 };
/// let mut seen = Vec::new();
/// for slot in &stack {
///     seen.push(*slot);
/// }
/// assert_eq!(seen, [3, 5, 7]);
/// ```
///
/// # Delegating hosts
///
/// Marking one field `#[iterable(storage)]` generates [`Delegate`] for that
/// field instead, plus `IntoIterator` for `&Host` and `&mut Host` returning
/// the field's own iterators:
///
/// ```
/// use iterable::{Delegate, Iterable};
///
/// #[derive(Iterable)]
/// struct Samples {
///     label: String,
///     #[iterable(storage)]
///     data: Vec<i32>,
/// }
///
/// let mut samples = Samples { label: "raw".into(), data: vec![1, 2, 3] };
/// for x in &mut samples {
///     // std::slice::IterMut
///     *x += 1;
/// }
/// let first = samples.begin(); // the Vec's own cursor
/// assert_eq!(*first, 2);
/// assert_eq!(samples.data, [2, 3, 4]);
/// assert_eq!(samples.label, "raw");
/// ```
///
/// # Restrictions
///
/// - Only structs are supported
/// - At most one field may be marked `#[iterable(storage)]`
/// - `storage` is the only argument the attribute accepts, and it must
///   appear exactly once
///
/// [`Indexed`]: https://docs.rs/iterable-core/latest/iterable_core/trait.Indexed.html
/// [`Iter`]: https://docs.rs/iterable-core/latest/iterable_core/struct.Iter.html
/// [`Delegate`]: https://docs.rs/iterable-core/latest/iterable_core/trait.Delegate.html
#[proc_macro_derive(Iterable, attributes(iterable))]
pub fn derive_iterable(input: TokenStream) -> TokenStream {
    derive_iterable::derive_iterable_impl(input)
}
