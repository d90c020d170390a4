//! The binary operation a segment tree aggregates with.

use crate::typeclass::Semigroup;

/// An associative binary operation over `T`.
///
/// Implementations must satisfy
/// `apply(&apply(a, b), c) == apply(a, &apply(b, c))`. The tree never
/// assumes commutativity or an identity element: `left` always covers the
/// elements before `right`.
///
/// Every `Fn(&T, &T) -> T` is an operation, so closures and function items
/// can be passed directly.
///
/// # Examples
///
/// ```rust
/// use segtree::tree::Operation;
///
/// fn gcd(left: &u64, right: &u64) -> u64 {
///     let (mut a, mut b) = (*left, *right);
///     while b != 0 {
///         (a, b) = (b, a % b);
///     }
///     a
/// }
///
/// assert_eq!(Operation::apply(&gcd, &12, &18), 6);
/// ```
pub trait Operation<T> {
    /// Combines `left` and `right`, in that order.
    fn apply(&self, left: &T, right: &T) -> T;
}

impl<T, F> Operation<T> for F
where
    F: Fn(&T, &T) -> T,
{
    #[inline]
    fn apply(&self, left: &T, right: &T) -> T {
        self(left, right)
    }
}

/// The operation given by the element type's [`Semigroup`] instance.
///
/// This is the default operation of [`SegmentTree`](super::SegmentTree).
///
/// # Examples
///
/// ```rust
/// use segtree::tree::{Combine, Operation};
/// use segtree::typeclass::Max;
///
/// assert_eq!(Combine.apply(&Max::new(2), &Max::new(7)), Max::new(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Combine;

impl<T: Semigroup + Clone> Operation<T> for Combine {
    #[inline]
    fn apply(&self, left: &T, right: &T) -> T {
        left.combine_ref(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;

    fn concatenate(left: &String, right: &String) -> String {
        format!("{left}{right}")
    }

    #[rstest]
    fn closure_is_an_operation() {
        let compose_affine = |left: &(i64, i64), right: &(i64, i64)| {
            (left.0 * right.0, left.1 * right.0 + right.1)
        };
        assert_eq!(compose_affine.apply(&(2, 1), &(3, 4)), (6, 7));
    }

    #[rstest]
    fn function_item_keeps_operand_order() {
        let left = String::from("ab");
        let right = String::from("cd");
        assert_eq!(Operation::apply(&concatenate, &left, &right), "abcd");
    }

    #[rstest]
    fn combine_delegates_to_semigroup() {
        assert_eq!(Combine.apply(&Sum::new(2), &Sum::new(3)), Sum::new(5));
        assert_eq!(
            Combine.apply(&Product::new(2), &Product::new(3)),
            Product::new(6)
        );
    }
}
