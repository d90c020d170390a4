//! Segment tree over an associative operation.
//!
//! # Layout
//!
//! Nodes are numbered in a single 1-based index space of size `2n`:
//! node `j` has children `2j` and `2j + 1` and parent `j / 2`. Nodes
//! `[n, 2n)` are the leaves (leaf `k` is node `n + k`); nodes `[1, n)` are
//! internal and hold the aggregate of their two children. Leaves and
//! internal nodes live in separate vectors, so `n` elements need exactly
//! `2n - 1` stored values and no identity element ever has to be invented.
//!
//! The layout is not padded to a power of two. For such lengths a few
//! internal nodes (the root among them) combine children that are not
//! adjacent in element order; queries never select those nodes, which is
//! why [`SegmentTree::total`] is computed as a range query.
//!
//! # Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | construction   | O(n)       |
//! | `get`          | O(1)       |
//! | `update`       | O(log n)   |
//! | `query`        | O(log n)   |

use std::fmt;
use std::ops::{Bound, Range, RangeBounds};

use super::error::{EmptyQueryError, OutOfRangeError, SegmentTreeError};
use super::operation::{Combine, Operation};
use crate::typeclass::{Monoid, Semigroup};

/// A fixed-length sequence supporting point updates and ordered range
/// aggregation under an associative operation `O`.
///
/// The operation defaults to [`Combine`], i.e. the [`Semigroup`] instance
/// of `T`. Any `Fn(&T, &T) -> T` may be used instead through
/// [`SegmentTree::with_fn`] or [`SegmentTree::with_operation`].
///
/// The operation only needs to be associative. Range results are always
/// combined in element order, so non-commutative operations (string
/// concatenation, matrix products, function composition) are supported.
///
/// # Examples
///
/// ```rust
/// use segtree::tree::SegmentTree;
/// use segtree::typeclass::Sum;
///
/// let mut tree = SegmentTree::new([1, 3, 5].map(Sum::new));
/// assert_eq!(tree.query(0, 2), Ok(Sum::new(9)));
///
/// tree.update(1, Sum::new(2)).unwrap();
/// assert_eq!(tree.query(0, 2), Ok(Sum::new(8)));
/// ```
///
/// With a closure:
///
/// ```rust
/// use segtree::tree::SegmentTree;
///
/// let tree = SegmentTree::with_fn(vec![2_i64, 3, 5], |left, right| left * right);
/// assert_eq!(tree.query(0, 2), Ok(30));
/// assert_eq!(tree.query(1, 2), Ok(15));
/// ```
#[derive(Clone)]
pub struct SegmentTree<T, O = Combine> {
    /// Element `k` is node `leaves.len() + k`.
    leaves: Vec<T>,
    /// Node `j` in `[1, n)` is stored at `internal[j - 1]`.
    internal: Vec<T>,
    operation: O,
}

// =============================================================================
// Construction
// =============================================================================

impl<T: Semigroup + Clone> SegmentTree<T, Combine> {
    /// Builds a tree aggregating with the [`Semigroup`] instance of `T`.
    ///
    /// # Complexity
    ///
    /// O(n) combinations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Max;
    ///
    /// let tree = SegmentTree::new([4, 1, 7, 3].map(Max::new));
    /// assert_eq!(tree.query(0, 1), Ok(Max::new(4)));
    /// assert_eq!(tree.total(), Some(Max::new(7)));
    /// ```
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_operation(initial, Combine)
    }
}

impl<T, F> SegmentTree<T, F>
where
    F: Fn(&T, &T) -> T,
{
    /// Builds a tree aggregating with a closure.
    ///
    /// Equivalent to [`with_operation`](Self::with_operation), but lets the
    /// compiler infer the closure's parameter types.
    pub fn with_fn<I>(initial: I, function: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_operation(initial, function)
    }
}

impl<T, O: Operation<T>> SegmentTree<T, O> {
    /// Builds a tree aggregating with `operation`.
    ///
    /// The elements are moved into the tree. Internal nodes are computed
    /// bottom-up, from the last internal node down to the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::{Operation, SegmentTree};
    ///
    /// struct Concatenate;
    ///
    /// impl Operation<String> for Concatenate {
    ///     fn apply(&self, left: &String, right: &String) -> String {
    ///         format!("{left}{right}")
    ///     }
    /// }
    ///
    /// let words = ["seg", "ment", "tree"].map(String::from);
    /// let tree = SegmentTree::with_operation(words, Concatenate);
    /// assert_eq!(tree.query(0, 2).unwrap(), "segmenttree");
    /// ```
    pub fn with_operation<I>(initial: I, operation: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let leaves: Vec<T> = initial.into_iter().collect();
        let length = leaves.len();

        // Node `j` is pushed at position `length - 1 - j`; children are
        // always numbered higher than their parent, so they already exist.
        let mut descending: Vec<T> = Vec::with_capacity(length.saturating_sub(1));
        for node in (1..length).rev() {
            let aggregate = operation.apply(
                built_node(&leaves, &descending, 2 * node),
                built_node(&leaves, &descending, 2 * node + 1),
            );
            descending.push(aggregate);
        }
        descending.reverse();

        Self {
            leaves,
            internal: descending,
            operation,
        }
    }
}

/// Looks up a node while the internal vector is still being built in
/// descending node order.
fn built_node<'a, T>(leaves: &'a [T], descending: &'a [T], node: usize) -> &'a T {
    let length = leaves.len();
    if node >= length {
        &leaves[node - length]
    } else {
        &descending[length - 1 - node]
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<T, O> SegmentTree<T, O> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Returns `true` if the tree holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Sum;
    ///
    /// let tree = SegmentTree::new([10, 20].map(Sum::new));
    /// assert_eq!(tree.get(1), Some(&Sum::new(20)));
    /// assert_eq!(tree.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.leaves.get(index)
    }

    /// Returns the elements in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.leaves
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.leaves.iter()
    }

    /// Returns the operation the tree aggregates with.
    #[inline]
    pub const fn operation(&self) -> &O {
        &self.operation
    }

    /// Consumes the tree and returns its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.leaves
    }

    /// Reads a node of the unified index space.
    #[inline]
    fn node(&self, node: usize) -> &T {
        let length = self.leaves.len();
        if node >= length {
            &self.leaves[node - length]
        } else {
            &self.internal[node - 1]
        }
    }

    /// Writes a node of the unified index space.
    #[inline]
    fn set_node(&mut self, node: usize, value: T) {
        let length = self.leaves.len();
        if node >= length {
            self.leaves[node - length] = value;
        } else {
            self.internal[node - 1] = value;
        }
    }

    fn out_of_range(&self, operation: &'static str, index: usize) -> SegmentTreeError {
        OutOfRangeError {
            operation,
            index,
            length: self.len(),
        }
        .into()
    }

    fn empty_query(&self, start: usize, end: usize) -> SegmentTreeError {
        EmptyQueryError {
            start,
            end,
            length: self.len(),
        }
        .into()
    }

    fn check_index(&self, operation: &'static str, index: usize) -> Result<(), SegmentTreeError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(self.out_of_range(operation, index))
        }
    }

    /// Resolves range syntax into half-open bounds within `[0, len]`.
    fn resolve_range<R>(&self, range: &R) -> Result<Range<usize>, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let length = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start
                .checked_add(1)
                .ok_or_else(|| self.out_of_range("query", start))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end
                .checked_add(1)
                .ok_or_else(|| self.out_of_range("query", end))?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        };

        if start > length {
            return Err(self.out_of_range("query", start));
        }
        if end > length {
            return Err(self.out_of_range("query", end - 1));
        }
        Ok(start..end)
    }
}

// =============================================================================
// Update and Query
// =============================================================================

impl<T, O: Operation<T>> SegmentTree<T, O> {
    /// Replaces the element at `index` and recomputes its ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `index >= len()`. The
    /// tree is left untouched in that case.
    ///
    /// # Complexity
    ///
    /// O(log n) combinations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Sum;
    ///
    /// let mut tree = SegmentTree::new([1, 2, 3].map(Sum::new));
    /// tree.update(0, Sum::new(10)).unwrap();
    /// assert_eq!(tree.query(0, 2), Ok(Sum::new(15)));
    /// assert!(tree.update(3, Sum::new(0)).is_err());
    /// ```
    pub fn update(&mut self, index: usize, value: T) -> Result<(), SegmentTreeError> {
        self.check_index("update", index)?;
        self.set_node(self.len() + index, value);
        self.rebuild_ancestors(index);
        Ok(())
    }

    /// Replaces the element at `index` with `function` applied to it.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `index >= len()`;
    /// `function` is not called in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Sum;
    ///
    /// let mut tree = SegmentTree::new([1, 2, 3].map(Sum::new));
    /// tree.update_with(2, |current| Sum::new(current.into_inner() * 10)).unwrap();
    /// assert_eq!(tree.query(0, 2), Ok(Sum::new(33)));
    /// ```
    pub fn update_with<F>(&mut self, index: usize, function: F) -> Result<(), SegmentTreeError>
    where
        F: FnOnce(&T) -> T,
    {
        self.check_index("update_with", index)?;
        let value = function(&self.leaves[index]);
        self.set_node(self.len() + index, value);
        self.rebuild_ancestors(index);
        Ok(())
    }

    fn rebuild_ancestors(&mut self, index: usize) {
        let mut node = self.len() + index;
        while node > 1 {
            node /= 2;
            let aggregate = self
                .operation
                .apply(self.node(2 * node), self.node(2 * node + 1));
            self.set_node(node, aggregate);
        }
    }
}

impl<T: Clone, O: Operation<T>> SegmentTree<T, O> {
    /// Aggregates the elements `left..=right` in element order.
    ///
    /// # Errors
    ///
    /// - [`SegmentTreeError::EmptyQuery`] if the tree is empty or
    ///   `left > right`.
    /// - [`SegmentTreeError::OutOfRange`] if `left` or `right` is not below
    ///   `len()`.
    ///
    /// # Complexity
    ///
    /// O(log n) combinations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    ///
    /// let tree = SegmentTree::new(["a", "b", "c", "d"].map(String::from));
    /// assert_eq!(tree.query(1, 3).unwrap(), "bcd");
    /// assert!(tree.query(0, 4).is_err());
    /// ```
    pub fn query(&self, left: usize, right: usize) -> Result<T, SegmentTreeError> {
        if self.is_empty() {
            return Err(self.empty_query(left, right.saturating_add(1)));
        }
        self.check_index("query", left)?;
        self.check_index("query", right)?;
        if left > right {
            return Err(self.empty_query(left, right + 1));
        }
        self.fold_nodes(left, right)
            .ok_or_else(|| self.empty_query(left, right + 1))
    }

    /// Aggregates the elements selected by `range`.
    ///
    /// Accepts any range syntax: `2..5`, `2..=4`, `..3`, `..`.
    ///
    /// # Errors
    ///
    /// - [`SegmentTreeError::EmptyQuery`] if the range selects no elements.
    /// - [`SegmentTreeError::OutOfRange`] if the range extends past `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Sum;
    ///
    /// let tree = SegmentTree::new((1..=5).map(Sum::new));
    /// assert_eq!(tree.query_range(1..3), Ok(Sum::new(5)));
    /// assert_eq!(tree.query_range(..), Ok(Sum::new(15)));
    /// assert!(tree.query_range(2..2).is_err());
    /// ```
    pub fn query_range<R>(&self, range: R) -> Result<T, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve_range(&range)?;
        if start >= end {
            return Err(self.empty_query(start, end));
        }
        self.fold_nodes(start, end - 1)
            .ok_or_else(|| self.empty_query(start, end))
    }

    /// Aggregates the elements selected by `range`, answering `identity`
    /// when the range is empty.
    ///
    /// `identity` must be a two-sided identity of the operation for the
    /// result to be meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if the range extends past
    /// `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    ///
    /// let tree = SegmentTree::with_fn(vec![3_u32, 9, 4], |left, right| *left.max(right));
    /// assert_eq!(tree.query_or(0..2, 0), Ok(9));
    /// assert_eq!(tree.query_or(1..1, 0), Ok(0));
    /// ```
    pub fn query_or<R>(&self, range: R, identity: T) -> Result<T, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve_range(&range)?;
        if start >= end {
            return Ok(identity);
        }
        Ok(self.fold_nodes(start, end - 1).unwrap_or(identity))
    }

    /// Aggregates every element, or returns `None` for an empty tree.
    pub fn total(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.fold_nodes(0, self.len() - 1)
        }
    }

    /// Bottom-up decomposition of `left..=right` into disjoint nodes.
    ///
    /// Nodes taken from the left edge are appended to `prefix`; nodes taken
    /// from the right edge are prepended to `suffix`. Keeping the two sides
    /// apart preserves element order for non-commutative operations.
    fn fold_nodes(&self, left: usize, right: usize) -> Option<T> {
        let length = self.len();
        let mut left_node = left + length;
        let mut right_node = right + length;
        let mut prefix: Option<T> = None;
        let mut suffix: Option<T> = None;

        while left_node <= right_node {
            if left_node & 1 == 1 {
                let node = self.node(left_node);
                prefix = Some(match prefix {
                    Some(accumulated) => self.operation.apply(&accumulated, node),
                    None => node.clone(),
                });
                left_node += 1;
            }
            if right_node & 1 == 0 {
                let node = self.node(right_node);
                suffix = Some(match suffix {
                    Some(accumulated) => self.operation.apply(node, &accumulated),
                    None => node.clone(),
                });
                right_node -= 1;
            }
            left_node /= 2;
            right_node /= 2;
        }

        match (prefix, suffix) {
            (Some(prefix), Some(suffix)) => Some(self.operation.apply(&prefix, &suffix)),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }
}

impl<T: Monoid + Clone> SegmentTree<T, Combine> {
    /// Aggregates the elements selected by `range`, answering
    /// [`Monoid::empty`] when the range is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if the range extends past
    /// `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::tree::SegmentTree;
    /// use segtree::typeclass::Sum;
    ///
    /// let tree = SegmentTree::new([4, 5, 6].map(Sum::new));
    /// assert_eq!(tree.query_or_empty(1..), Ok(Sum::new(11)));
    /// assert_eq!(tree.query_or_empty(3..), Ok(Sum::new(0)));
    /// ```
    pub fn query_or_empty<R>(&self, range: R) -> Result<T, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        self.query_or(range, T::empty())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, O> fmt::Debug for SegmentTree<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SegmentTree")
            .field("leaves", &self.leaves)
            .field("internal", &self.internal)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, O> fmt::Display for SegmentTree<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.leaves {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Trees are equal when their elements are; internal nodes are derived.
impl<T: PartialEq, O> PartialEq for SegmentTree<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.leaves == other.leaves
    }
}

impl<T: Eq, O> Eq for SegmentTree<T, O> {}

impl<T: Semigroup + Clone> FromIterator<T> for SegmentTree<T, Combine> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::new(iterator)
    }
}

impl<T: Semigroup + Clone> From<Vec<T>> for SegmentTree<T, Combine> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<'a, T, O> IntoIterator for &'a SegmentTree<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, O> IntoIterator for SegmentTree<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, O> serde::Serialize for SegmentTree<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.leaves {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

/// Only the elements are stored; internal nodes are rebuilt with
/// `O::default()` on load.
#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for SegmentTree<T, O>
where
    T: serde::Deserialize<'de>,
    O: Operation<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let leaves = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::with_operation(leaves, O::default()))
    }
}

// =============================================================================
// Tests
// =============================================================================
