//! A growable, index-addressable array that manages its own capacity.
//!
//! [`DynamicArray`] keeps its elements contiguous, appends in amortized constant time by growing
//! its buffer to 1.5x when full, and inserts or removes at arbitrary positions by shifting in
//! place. Capacity is tracked by the array itself, so [`DynamicArray::ensure_capacity`] and
//! [`DynamicArray::trim_to_size`] reallocate to exactly the size asked for.
//!
//! Every operation with a precondition returns a [`Result`]; searches report absence with
//! `None` or `false` rather than an error.
//!
//! ```
//! use dynamic_array::{DynamicArray, ErrorKind};
//!
//! let mut array: DynamicArray<i32> = [10, 20, 30, 40].into();
//! array.insert(2, 25)?;
//! assert_eq!(array.to_string(), "[10, 20, 25, 30, 40]");
//!
//! let err = array.get(7).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
//! assert_eq!(err.to_string(), "index 7 out of bounds for length 5");
//! # Ok::<(), dynamic_array::ArrayError>(())
//! ```
//!
//! The array is a plain single-owner value: sharing it between threads needs an outer lock.
#![forbid(unsafe_code)]
#![warn(explicit_outlives_requirements)]
#![warn(missing_debug_implementations)]
#![warn(clippy::pedantic)]
#![warn(missing_copy_implementations)]
#![warn(redundant_lifetimes)]
//#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]
#![allow(clippy::must_use_candidate)]

mod array;
mod config;
mod debug;
mod error;
mod iter;
mod proptesting;

pub use array::DynamicArray;
pub use config::{ArrayConfig, DEFAULT_CAPACITY};
pub use error::{ArrayError, ErrorKind, Result};
pub use iter::{IntoIter, Iter};

#[cfg(test)]
mod tests {
    use display_tree::format_tree;

    use crate::DynamicArray;

    #[test]
    fn basic_success() {
        let mut array = DynamicArray::new();
        for word in ["alpha", "beta", "gamma"] {
            array.push(word);
        }
        array.insert(1, "between").unwrap_or_else(|e| panic!("{e}"));

        let tree = format_tree!(array);
        insta::assert_snapshot!(tree, @r"
        DynamicArray [len 4, capacity 10]
        ├─0: alpha
        ├─1: between
        ├─2: beta
        └─3: gamma
        ");
    }

    #[test]
    fn strings_render_without_quotes() {
        let array = DynamicArray::from([String::from("a b"), String::new()]);
        insta::assert_snapshot!(array, @"[a b, ]");
        insta::assert_compact_debug_snapshot!(array, @r#"["a b", ""]"#);
    }
}
