//! Segment tree for point updates and ordered range aggregation.
//!
//! - [`SegmentTree`]: fixed-length sequence answering range aggregates in
//!   O(log n) under any associative operation
//! - [`Operation`]: the binary operation a tree aggregates with
//! - [`Combine`]: the operation given by the element type's `Semigroup`
//! - [`SegmentTreeError`]: out-of-range and empty-range rejections
//!
//! # Examples
//!
//! ```rust
//! use segtree::tree::{SegmentTree, SegmentTreeError};
//! use segtree::typeclass::Sum;
//!
//! let mut tree = SegmentTree::new([1, 3, 5].map(Sum::new));
//! assert_eq!(tree.query(0, 2), Ok(Sum::new(9)));
//!
//! tree.update(1, Sum::new(2))?;
//! assert_eq!(tree.query(0, 2), Ok(Sum::new(8)));
//!
//! assert!(matches!(tree.update(3, Sum::new(0)), Err(SegmentTreeError::OutOfRange(_))));
//! # Ok::<(), SegmentTreeError>(())
//! ```
//!
//! Operations need not commute; ranges are combined in element order:
//!
//! ```rust
//! use segtree::tree::SegmentTree;
//!
//! let tree = SegmentTree::new(["s", "e", "g"].map(String::from));
//! assert_eq!(tree.query(0, 2).unwrap(), "seg");
//! ```

mod error;
mod operation;
mod segment_tree;

pub use error::{EmptyQueryError, OutOfRangeError, SegmentTreeError};
pub use operation::{Combine, Operation};
pub use segment_tree::SegmentTree;
