//! # segtree
//!
//! A generic segment tree: a fixed-length sequence supporting point updates
//! and range aggregate queries in O(log n) under any associative operation.
//!
//! ## Overview
//!
//! - **Segment Tree**: [`tree::SegmentTree`] with bounds-checked `update`
//!   and order-preserving `query`, so non-commutative operations work
//! - **Operations**: closures, function items, or the element type's
//!   [`Semigroup`](typeclass::Semigroup) instance
//! - **Type Classes**: `Semigroup`, `Monoid` and the `Sum`, `Product`,
//!   `Max`, `Min` wrappers that select an operation for numeric types
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and the numeric wrappers
//! - `tree`: the segment tree (enables `typeclass`)
//! - `serde`: serialization of trees and wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use segtree::prelude::*;
//!
//! let mut tree = SegmentTree::new([2, 3, 5].map(Product::new));
//! assert_eq!(tree.query(0, 2), Ok(Product::new(30)));
//!
//! tree.update(0, Product::new(7)).unwrap();
//! assert_eq!(tree.query(0, 1), Ok(Product::new(21)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use segtree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "tree")]
pub mod tree;
