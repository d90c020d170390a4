//! Demonstration runs and the brute-force differential check.

use segtree::tree::{SegmentTree, SegmentTreeError};
use segtree::typeclass::{Product, Semigroup, Sum};

use crate::config::DemoConfig;

/// Errors raised while running the sample.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
    /// The tree rejected an operation the sample expected to succeed.
    #[error(transparent)]
    Tree(#[from] SegmentTreeError),
    /// A tree query disagreed with the brute-force fold.
    #[error("length {length}: query({left}, {right}) returned {actual}, expected {expected}")]
    Mismatch {
        /// Number of elements in the tree.
        length: usize,
        /// Inclusive left bound.
        left: usize,
        /// Inclusive right bound.
        right: usize,
        /// Brute-force answer.
        expected: i64,
        /// Tree answer.
        actual: i64,
    },
}

/// Sums of `[1, 3, 5]` over `0..=2`, before and after `update(1, 2)`.
///
/// # Errors
///
/// Propagates any [`SegmentTreeError`].
pub fn run_sum_demo() -> Result<(i64, i64), DemoError> {
    let mut tree = SegmentTree::new([1, 3, 5].map(Sum::new));

    let before = tree.query(0, 2)?.into_inner();
    tracing::info!("Sum(0,2): {before}");

    tracing::info!("Update(1,2)");
    tree.update(1, Sum::new(2))?;

    let after = tree.query(0, 2)?.into_inner();
    tracing::info!("Sum(0,2): {after}");

    Ok((before, after))
}

/// Products of `[2, 3, 5]` over `0..=2`, `0..=0` and `1..=2`.
///
/// # Errors
///
/// Propagates any [`SegmentTreeError`].
pub fn run_product_demo() -> Result<[i64; 3], DemoError> {
    let tree = SegmentTree::new([2_i64, 3, 5].map(Product::new));
    let mut results = [0; 3];
    for (slot, (left, right)) in results.iter_mut().zip([(0, 2), (0, 0), (1, 2)]) {
        *slot = tree.query(left, right)?.into_inner();
        tracing::info!("Product({left},{right}): {slot}");
    }
    Ok(results)
}

/// Totals of a completed differential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferentialSummary {
    /// Number of tree lengths exercised.
    pub lengths: usize,
    /// Number of range queries compared.
    pub queries: usize,
    /// Number of point updates applied.
    pub updates: usize,
}

/// Compares every range query of every tree of length `1..max_length`
/// against a brute-force fold, before and after each point update.
///
/// # Errors
///
/// Returns [`DemoError::Mismatch`] on the first disagreement.
pub fn run_differential_check(config: &DemoConfig) -> Result<DifferentialSummary, DemoError> {
    let mut summary = DifferentialSummary {
        lengths: 0,
        queries: 0,
        updates: 0,
    };

    for length in 1..config.max_length {
        let mut elements: Vec<i64> = (1..=length as i64).collect();
        let mut tree = SegmentTree::new(elements.iter().copied().map(Sum::new));
        summary.queries += verify_all_ranges(&tree, &elements)?;

        for index in 0..length {
            let value = index as i64 + config.update_offset;
            tree.update(index, Sum::new(value))?;
            elements[index] = value;
            summary.updates += 1;
            summary.queries += verify_all_ranges(&tree, &elements)?;
        }

        summary.lengths += 1;
        tracing::debug!(length, queries = summary.queries, "length verified");
    }

    tracing::info!(
        lengths = summary.lengths,
        queries = summary.queries,
        updates = summary.updates,
        "differential check passed"
    );
    Ok(summary)
}

fn verify_all_ranges(tree: &SegmentTree<Sum<i64>>, elements: &[i64]) -> Result<usize, DemoError> {
    let mut checked = 0;
    for left in 0..elements.len() {
        for right in left..elements.len() {
            let expected = brute_force(&elements[left..=right]);
            let actual = tree.query(left, right)?.into_inner();
            if actual != expected {
                return Err(DemoError::Mismatch {
                    length: elements.len(),
                    left,
                    right,
                    expected,
                    actual,
                });
            }
            checked += 1;
        }
    }
    Ok(checked)
}

fn brute_force(elements: &[i64]) -> i64 {
    Sum::reduce_all(elements.iter().copied().map(Sum::new)).map_or(0, Sum::into_inner)
}
