//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a set together with an associative binary operation.
//! Associativity is exactly what a segment tree needs: the tree regroups a
//! range into `O(log n)` pre-combined blocks, and the result must not depend
//! on that grouping. Commutativity is *not* required, so the order of the
//! operands is always preserved.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use segtree::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use segtree::typeclass::Semigroup;
///
/// let left = vec![1, 2];
/// let right = vec![3];
/// assert_eq!(left.combine(right), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one, `self` on the left.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both operands and calls
    /// [`combine`](Semigroup::combine). Tree nodes are combined through this
    /// method, so types holding buffers should override it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::typeclass::Semigroup;
    ///
    /// let left = String::from("seg");
    /// let right = String::from("tree");
    /// assert_eq!(left.combine_ref(&right), "segtree");
    /// assert_eq!(left, "seg");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements of an iterator from left to right.
    ///
    /// Returns `None` for an empty iterator, since a semigroup has no
    /// identity element to fall back on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::typeclass::{Semigroup, Product};
    ///
    /// let values = [2, 3, 5].map(Product::new);
    /// assert_eq!(Product::reduce_all(values), Some(Product::new(30)));
    ///
    /// let empty: Vec<Product<i32>> = Vec::new();
    /// assert_eq!(Product::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// `None` acts as an adjoined identity: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Pairs combine component-wise, which lets a single tree answer two
/// aggregates at once (for example `(Sum<i64>, Max<i64>)`).
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Ties keep the left operand.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

/// Ties keep the left operand.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_keeps_operand_order() {
        let left = String::from("left-");
        let right = String::from("right");
        assert_eq!(left.combine(right), "left-right");
    }

    #[rstest]
    fn string_combine_ref_preserves_operands() {
        let left = String::from("a");
        let right = String::from("b");
        assert_eq!(left.combine_ref(&right), "ab");
        assert_eq!(left, "a");
        assert_eq!(right, "b");
    }

    #[rstest]
    fn vec_combine_ref_appends() {
        let left = vec![1, 2];
        let right = vec![3];
        assert_eq!(left.combine_ref(&right), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Some(Sum::new(1)), Some(Sum::new(2)), Some(Sum::new(3)))]
    #[case(Some(Sum::new(1)), None, Some(Sum::new(1)))]
    #[case(None, Some(Sum::new(2)), Some(Sum::new(2)))]
    #[case(None, None, None)]
    fn option_combine_treats_none_as_identity(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn unit_combine_is_unit() {
        assert_eq!(().combine(()), ());
    }

    #[rstest]
    fn pair_combines_component_wise() {
        let left = (Sum::new(1), Max::new(7));
        let right = (Sum::new(4), Max::new(3));
        assert_eq!(left.combine(right), (Sum::new(5), Max::new(7)));
    }

    #[rstest]
    fn triple_combines_component_wise() {
        let left = (Sum::new(1), Min::new(2), String::from("x"));
        let right = (Sum::new(1), Min::new(1), String::from("y"));
        assert_eq!(
            left.combine(right),
            (Sum::new(2), Min::new(1), String::from("xy"))
        );
    }

    #[rstest]
    #[case(3, 5, 8)]
    #[case(-4, 4, 0)]
    fn sum_combine_adds(#[case] left: i64, #[case] right: i64, #[case] expected: i64) {
        assert_eq!(Sum::new(left).combine(Sum::new(right)), Sum::new(expected));
    }

    #[rstest]
    fn product_combine_multiplies() {
        assert_eq!(Product::new(6).combine(Product::new(7)), Product::new(42));
    }

    #[rstest]
    fn max_and_min_pick_extremes() {
        assert_eq!(Max::new(3).combine(Max::new(9)), Max::new(9));
        assert_eq!(Min::new(3).combine(Min::new(9)), Min::new(3));
    }

    #[rstest]
    fn reduce_all_folds_left_to_right() {
        let parts = ["a", "b", "c"].map(String::from);
        assert_eq!(String::reduce_all(parts), Some(String::from("abc")));
    }

    #[rstest]
    fn reduce_all_of_empty_is_none() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(String::reduce_all(empty), None);
    }
}
