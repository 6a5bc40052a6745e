//! A small computer-algebra core over exact rational numbers.
//!
//! Expressions are trees of sums, products, powers, function applications,
//! symbols, and arbitrary-precision rational constants. Every expression
//! constructed through the [`builder`] layer is immediately rewritten to a
//! canonical form by [`symbolic::simplify()`], which flattens associative
//! operations, sorts operands under a total order, folds numeric
//! subexpressions exactly, and combines like terms and like bases.
//!
//! ```
//! use cas_symbolic::builder::var;
//!
//! let x = var("x");
//! let sum = x.clone() + x.clone() + x;
//! assert_eq!(sum.to_string(), "3*x");
//! ```

pub mod builder;
pub mod funcs;
pub mod primitive;
pub mod symbolic;

pub use builder::{func, num, var, Symbolic};
pub use symbolic::{simplify, Expr};
