//! # selsort
//!
//! selsort is a small native Rust implementation of in-place selection sort, along with the
//! space-delimited printer that usually follows it.
//!
//! ## Usage
//!
//! In the simplest case, you can sort by calling `my_vec.selection_sort()`, or sort and print
//! in one go with `selsort::sort_and_print(&mut my_vec)`.
//!
//! ```
//! use selsort::SelectionSort;
//!
//! let mut values = vec![5, 3, 8, 1];
//! values.selection_sort();
//!
//! assert_eq!(values, [1, 3, 5, 8]);
//! ```
//!
//! ## Output format
//!
//! Every value is written followed by a single ASCII space. No newline is written after the
//! last value, and nothing at all is written for an empty sequence.
//!
//! ```
//! let mut values = vec![2, 2, 1];
//! let mut out = Vec::new();
//! selsort::sort_and_write(&mut values, &mut out).unwrap();
//!
//! assert_eq!(out, b"1 2 2 ");
//! ```
//!
//! ## Sorting a prefix
//!
//! The builder can restrict the sort to the first `n` elements. Anything after index `n - 1` is
//! left exactly where it was. Asking for more elements than the sequence holds is an error
//! rather than an out-of-bounds access.
//!
//! ```
//! use selsort::{SelectionSort, SortError};
//!
//! let mut values = vec![9, 4, 7, 1];
//! values.selection_sort_builder().with_len(3).sort().unwrap();
//! assert_eq!(values, [4, 7, 9, 1]);
//!
//! let err = values.selection_sort_builder().with_len(5).sort().unwrap_err();
//! assert!(matches!(err, SortError::LengthOutOfBounds { len: 5, capacity: 4 }));
//! ```
//!
//! ## Ordering of equal values
//!
//! Each pass selects the *earliest* minimum of the unsorted suffix. Selection sort as a whole
//! is still not a stable sort, as the swap can carry an element past its equals.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod error;
mod printer;
mod selection_sort;
mod selection_sort_builder;
mod sorts;

pub mod utils;

#[cfg(test)]
use utils::test_utils;

pub use error::SortError;
pub use printer::{sort_and_print, sort_and_write, write_values};
pub use selection_sort::SelectionSort;
pub use selection_sort_builder::SelectionSortBuilder;
pub use sorts::{min_index, selection_sort};
