//! Numeric functions on the exact number types.
//!
//! The simplifier folds numeric subexpressions through the functions in this
//! module; they operate on [`rug::Rational`] values and never approximate.

pub mod power;

pub use power::{pow, pow_integer, DomainError};
