//! Automatic simplification of expressions to canonical form.
//!
//! The single entry point is [`simplify()`]. It traverses the expression
//! bottom-up, canonicalizing every child before its parent, and then
//! dispatches on the node's variant to the matching routine: sums to
//! [`simplify_sum`], products to [`simplify_product`], powers to
//! [`simplify_power`], and function applications to the function dispatch
//! below. Numbers and symbols are already canonical, and `Undefined` passes
//! through untouched.
//!
//! The per-variant routines assume their operands are canonical and only
//! re-establish the invariants the new node can break: flattening nested
//! sums or products, sorting children under the total order, merging
//! adjacent children that share a term or a base, and collapsing degenerate
//! results. They call back into each other (combining like terms builds a
//! product, merging like bases builds a power), so the whole set is mutually
//! recursive.

pub mod add;
pub mod multiply;
pub mod power;

pub use add::simplify_sum;
pub use multiply::simplify_product;
pub use power::simplify_power;

use super::derivative;
use super::expr::Expr;

/// Reduces an expression to its canonical form.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => simplify_sum(terms.into_iter().map(simplify).collect()),
        Expr::Product(factors) => simplify_product(factors.into_iter().map(simplify).collect()),
        Expr::Power(base, exponent) => simplify_power(simplify(*base), simplify(*exponent)),
        Expr::Function(name, args) => {
            simplify_function(name, args.into_iter().map(simplify).collect())
        }
        leaf => leaf,
    }
}

/// Simplifies a function application whose arguments are already canonical.
///
/// `diff` is the one name the core recognizes; any other application is
/// returned as-is.
fn simplify_function(name: String, args: Vec<Expr>) -> Expr {
    if name == "diff" {
        derivative::simplify_diff(args)
    } else {
        Expr::Function(name, args)
    }
}
