//! Range query sample.
//!
//! Builds segment trees from small literal sequences, performs point
//! updates and range queries, and cross-checks every query of every small
//! tree against a brute-force fold.

pub mod config;
pub mod demo;
