//! Error types for segment tree operations.
//!
//! Every error is a caller contract violation detected before the tree is
//! touched, so a failed call never leaves the tree partially rebuilt.

/// An index lies outside the elements of the tree.
///
/// # Examples
///
/// ```rust
/// use segtree::tree::OutOfRangeError;
///
/// let error = OutOfRangeError {
///     operation: "update",
///     index: 3,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "SegmentTree::update: index 3 is out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The operation that rejected the index.
    pub operation: &'static str,
    /// The offending index.
    pub index: usize,
    /// The number of elements in the tree.
    pub length: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "SegmentTree::{}: index {} is out of range for length {}",
            self.operation, self.index, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// A query selected no elements and no identity element was available.
///
/// Raised for `left > right`, for an empty half-open range, and for any
/// query on a tree with no elements. The range is reported half-open, so
/// `query(4, 2)` reports `4..3`.
///
/// # Examples
///
/// ```rust
/// use segtree::tree::EmptyQueryError;
///
/// let error = EmptyQueryError { start: 4, end: 3, length: 8 };
/// assert_eq!(
///     format!("{error}"),
///     "SegmentTree::query: range 4..3 selects no elements (length 8)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyQueryError {
    /// The requested start of the range (inclusive).
    pub start: usize,
    /// The requested end of the range (exclusive).
    pub end: usize,
    /// The number of elements in the tree.
    pub length: usize,
}

impl std::fmt::Display for EmptyQueryError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "SegmentTree::query: range {}..{} selects no elements (length {})",
            self.start, self.end, self.length
        )
    }
}

impl std::error::Error for EmptyQueryError {}

/// Errors returned by [`SegmentTree`](super::SegmentTree) operations.
///
/// # Examples
///
/// ```rust
/// use segtree::tree::{SegmentTree, SegmentTreeError};
/// use segtree::typeclass::Sum;
///
/// let tree: SegmentTree<Sum<i32>> = [1, 2, 3].map(Sum::new).into_iter().collect();
/// assert!(matches!(tree.query(0, 3), Err(SegmentTreeError::OutOfRange(_))));
/// assert!(matches!(tree.query(2, 1), Err(SegmentTreeError::EmptyQuery(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentTreeError {
    /// An index was outside `[0, len)`.
    OutOfRange(OutOfRangeError),
    /// The requested range was empty.
    EmptyQuery(EmptyQueryError),
}

impl std::fmt::Display for SegmentTreeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(error) => write!(formatter, "{error}"),
            Self::EmptyQuery(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SegmentTreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(error) => Some(error),
            Self::EmptyQuery(error) => Some(error),
        }
    }
}

impl From<OutOfRangeError> for SegmentTreeError {
    fn from(error: OutOfRangeError) -> Self {
        Self::OutOfRange(error)
    }
}

impl From<EmptyQueryError> for SegmentTreeError {
    fn from(error: EmptyQueryError) -> Self {
        Self::EmptyQuery(error)
    }
}

static_assertions::assert_impl_all!(SegmentTreeError: std::error::Error, Send, Sync, Clone);
static_assertions::assert_impl_all!(OutOfRangeError: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(EmptyQueryError: std::error::Error, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    fn out_of_range() -> OutOfRangeError {
        OutOfRangeError {
            operation: "query",
            index: 10,
            length: 4,
        }
    }

    #[rstest]
    fn out_of_range_display() {
        assert_eq!(
            out_of_range().to_string(),
            "SegmentTree::query: index 10 is out of range for length 4"
        );
    }

    #[rstest]
    fn empty_query_display() {
        let error = EmptyQueryError {
            start: 0,
            end: 1,
            length: 0,
        };
        assert_eq!(
            error.to_string(),
            "SegmentTree::query: range 0..1 selects no elements (length 0)"
        );
    }

    #[rstest]
    fn segment_tree_error_displays_inner_error() {
        let error = SegmentTreeError::from(out_of_range());
        assert_eq!(error.to_string(), out_of_range().to_string());
    }

    #[rstest]
    fn segment_tree_error_source_is_inner_error() {
        let error = SegmentTreeError::from(out_of_range());
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(out_of_range().to_string()));
    }

    #[rstest]
    fn leaf_errors_have_no_source() {
        assert!(out_of_range().source().is_none());
    }

    #[rstest]
    fn from_conversions_pick_matching_variant() {
        let empty = EmptyQueryError {
            start: 2,
            end: 2,
            length: 3,
        };
        assert_eq!(
            SegmentTreeError::from(empty.clone()),
            SegmentTreeError::EmptyQuery(empty)
        );
        assert_eq!(
            SegmentTreeError::from(out_of_range()),
            SegmentTreeError::OutOfRange(out_of_range())
        );
    }
}
