//! A pure-Rust library of rank-generic, multi-dimensional arrays with
//! array-language-style indexing and slicing.
//!
//! [`Array<T>`] is a rectangular array of `T` with any number of axes. The
//! `T` values are internally stored in a [`Box<[T]>`] in row-major order,
//! which is a dense 1-dimensional representation. The purpose of the `Array`
//! wrapper is to look like a nested collection, in which an array of rank
//! `N` is a sequence of arrays of rank `N - 1`.
//!
//! There are two ways to access an `Array`:
//!
//! - Indexing, with [`View::view()`], [`View::get()`] and their mutable
//!   counterparts in [`ViewMut`], takes one possibly negative index for each
//!   of the leading axes and returns a reference into the existing items.
//!   Writes through the reference modify the `Array`.
//! - Slicing, with [`View::slice()`] and [`View::slice_str()`], takes one
//!   [`Range`] for each of the leading axes and copies the selected items into
//!   a new `Array` of the same rank. Ranges are written like Python slices,
//!   e.g. `"0:1, 1:, ::2"`.
//!
//! ```
//! use slicearray::{Array, View, ViewMut};
//!
//! let mut a = Array::stack([
//!     Array::new([2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap(),
//!     Array::new([2, 3], vec![6, 7, 8, 9, 10, 11]).unwrap(),
//! ]).unwrap();
//!
//! a[[0, 1, 2]] = 777;
//! assert_eq!(a.get(&[0, -1, -1]), Ok(&777));
//!
//! let s = a.slice_str("0:1, 1:, ::2").unwrap();
//! assert_eq!(s.shape(), [1, 1, 2]);
//! assert_eq!(s.as_slice(), [3, 777]);
//! ```
//!
//! Both `Array` and the borrowed [`ArrayView`] and [`ArrayViewMut`]
//! implement [`View`], so views can be indexed and sliced in turn.

mod error;
pub use error::{ArrayError, Result};

mod range;
pub use range::{Range, FormatError, parse_ranges};

pub mod index;
pub use index::{normalize, OutOfRange};

mod shape;
pub use shape::{Shape};

mod view;
pub use view::{View, ViewMut, ArrayView, ArrayViewMut};

mod array;
pub use array::{Array};

mod new;

mod slice;

mod display;
