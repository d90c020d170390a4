//! Algebraic type classes used to describe range aggregates.
//!
//! - [`Semigroup`]: associative binary operation (`combine`). Every
//!   segment tree operation must be one.
//! - [`Monoid`]: semigroup with an identity element (`empty`), which gives
//!   empty ranges a meaning.
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: wrappers selecting an
//!   operation for numeric element types.
//! - [`Bounded`]: least and greatest values, used by [`Max`] and [`Min`].
//!
//! # Examples
//!
//! ```rust
//! use segtree::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! assert_eq!(String::from("a").combine(String::from("b")), "ab");
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
