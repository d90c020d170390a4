//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds an identity element `empty` to a semigroup. The segment
//! tree itself never needs one, but when a caller can supply it, empty
//! ranges gain a well-defined answer (see `SegmentTree::query_or_empty`).
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use segtree::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::<i32>::empty(), Sum::new(0));
//! assert_eq!(Sum::empty().combine(Sum::new(4)), Sum::new(4));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use segtree::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("node");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::typeclass::{Max, Monoid};
    ///
    /// let values = [4, 9, 2].map(Max::new);
    /// assert_eq!(Max::combine_all(values), Max::new(9));
    ///
    /// let none: Vec<Max<i32>> = Vec::new();
    /// assert_eq!(Max::combine_all(none), Max::new(i32::MIN));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self(1)
                }
            }
        )*
    };
}

impl_product_monoid!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn string_empty_is_blank() {
        assert_eq!(String::empty(), "");
    }

    #[rstest]
    fn product_empty_is_one() {
        assert_eq!(Product::<u64>::empty(), Product::new(1));
        assert_eq!(Product::<i8>::empty(), Product::new(1));
    }

    #[rstest]
    fn min_and_max_empty_use_bounds() {
        assert_eq!(Max::<u8>::empty(), Max::new(0));
        assert_eq!(Min::<u8>::empty(), Min::new(u8::MAX));
    }

    #[rstest]
    fn pair_empty_is_pair_of_empties() {
        let empty: (Sum<i32>, String) = Monoid::empty();
        assert_eq!(empty, (Sum::new(0), String::new()));
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        let none: Vec<Sum<i64>> = Vec::new();
        assert_eq!(Sum::combine_all(none), Sum::new(0));
    }

    #[rstest]
    fn combine_all_keeps_order() {
        let parts = ["x", "y", "z"].map(String::from);
        assert_eq!(String::combine_all(parts), "xyz");
    }

    proptest! {
        #[test]
        fn prop_sum_identity(value in any::<i32>()) {
            let wrapped = Sum::new(value);
            prop_assert_eq!(Sum::empty().combine(wrapped), wrapped);
            prop_assert_eq!(wrapped.combine(Sum::empty()), wrapped);
        }

        #[test]
        fn prop_min_identity(value in any::<i64>()) {
            let wrapped = Min::new(value);
            prop_assert_eq!(Min::empty().combine(wrapped), wrapped);
            prop_assert_eq!(wrapped.combine(Min::empty()), wrapped);
        }
    }
}
