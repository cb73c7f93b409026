//! A static centered interval tree for point and range overlap queries.
//!
//! An [`IntervalTree`] is built exactly once from a slice of ranges and is
//! read-only thereafter: construction recursively partitions the input around
//! the median range start at each level, producing a balanced ternary
//! structure (ranges left of the center, ranges covering it, ranges right of
//! it). There is no insertion, removal or rebalancing - any change to the
//! input means building a new tree. Because nothing mutates after
//! construction, a finished tree is freely shareable between readers.
//!
//! Ranges come in two point domains, each with an inclusive and an exclusive
//! upper-bound policy:
//!
//! * [`NumericRangeExclusive`] / [`NumericRangeInclusive`] over integer-like
//!   points with an integer step.
//! * [`DateRangeExclusive`] / [`DateRangeInclusive`] over
//!   [`chrono::DateTime<Utc>`] points with a [`chrono::Duration`] step.
//!
//! Inclusive ranges are stored in exclusive form by pushing their upper bound
//! one step past the requested end, so every overlap test is the same
//! half-open `start ≤ p < end` comparison. Custom range types can be indexed
//! or used as queries by implementing the [`Range`] trait.
//!
//! ```
//! use intermed::{IntervalTree, NumericRangeInclusive};
//!
//! let ranges = vec![
//!     NumericRangeInclusive::new(1, 5, 1),
//!     NumericRangeInclusive::new(6, 9, 1),
//! ];
//!
//! let tree = IntervalTree::new(&ranges)?;
//!
//! assert_eq!(tree.search_point(&4), vec![&ranges[0]]);
//! assert!(tree.search_point(&42).is_empty());
//! # Ok::<(), intermed::NegativeRangeError>(())
//! ```
//!
//! [`chrono::DateTime<Utc>`]: chrono::DateTime

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::todo,
    clippy::dbg_macro
)]

mod dot;
mod error;
mod node;
mod range;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use range::*;
pub use tree::*;
