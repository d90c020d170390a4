//! Newtype wrappers selecting an operation for a numeric type.
//!
//! The same integer can be aggregated by addition, multiplication, maximum
//! or minimum. Wrapping the element type picks the [`Semigroup`] instance a
//! segment tree will use, so `SegmentTree<Sum<i64>>` answers range sums and
//! `SegmentTree<Max<i64>>` answers range maxima without a custom operation.
//!
//! [`Semigroup`]: super::Semigroup
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: `Default::default()`)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: [`Bounded::MIN_VALUE`])
//! - [`Min`]: minimum (identity: [`Bounded::MAX_VALUE`])

macro_rules! define_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Creates a new `", stringify!($name), "` wrapping the given value.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }

        impl<A: std::fmt::Display> std::fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_wrapper!(
    /// Additive wrapper: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)).into_inner(), 8);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    Sum
);

// `Default` is not derived: the multiplicative identity is 1, not 0.
define_wrapper!(
    /// Multiplicative wrapper: `Product(a).combine(Product(b)) == Product(a * b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segtree::typeclass::{Product, Semigroup};
    ///
    /// assert_eq!(Product::new(3).combine(Product::new(5)).into_inner(), 15);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    Product
);

define_wrapper!(
    /// Maximum wrapper: keeps the larger operand.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    Max
);

define_wrapper!(
    /// Minimum wrapper: keeps the smaller operand.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    Min
);

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a least and a greatest value.
///
/// Gives [`Max`] and [`Min`] their identity elements.
pub trait Bounded {
    /// The smallest value of the type.
    const MIN_VALUE: Self;

    /// The largest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i32>::default(), Sum::new(0));
    }

    #[rstest]
    fn wrappers_convert_from_inner() {
        let sum: Sum<i32> = 4.into();
        let product: Product<i32> = 5.into();
        let max: Max<i32> = 6.into();
        let min: Min<i32> = 7.into();
        assert_eq!(
            (sum.into_inner(), product.into_inner(), max.into_inner(), min.into_inner()),
            (4, 5, 6, 7)
        );
    }

    #[rstest]
    fn as_inner_borrows() {
        let max = Max::new(String::from("z"));
        assert_eq!(max.as_inner(), "z");
    }

    #[rstest]
    #[case(Sum::new(3).to_string(), "Sum(3)")]
    #[case(Product::new(4).to_string(), "Product(4)")]
    #[case(Max::new(5).to_string(), "Max(5)")]
    #[case(Min::new(6).to_string(), "Min(6)")]
    fn display_names_the_wrapper(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn bounded_matches_primitive_limits() {
        assert_eq!(<i16 as Bounded>::MIN_VALUE, i16::MIN);
        assert_eq!(<u32 as Bounded>::MAX_VALUE, u32::MAX);
        assert_eq!(<char as Bounded>::MIN_VALUE, '\0');
        assert!(<bool as Bounded>::MAX_VALUE);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wrappers_serialize_transparently() {
        assert_eq!(serde_json::to_string(&Sum::new(7)).unwrap(), "7");
        let restored: Max<i32> = serde_json::from_str("9").unwrap();
        assert_eq!(restored, Max::new(9));
    }
}
