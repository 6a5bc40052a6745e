//! The total order on expressions used by the canonicalizer.
//!
//! Canonical sums and products keep their children sorted ascending under
//! [`cmp_expr`], which makes the canonical form unique and lets the merge
//! passes detect like terms and like bases in adjacent positions.
//!
//! Lists of children are compared **from the tail**: the last elements are
//! compared first, and the shorter list wins ties. Since a product's highest
//! ranked factor sits at its tail, this groups composite children by their
//! trailing factor: `2*x` and `3*x` land next to each other in a sorted
//! sum, with the coefficient only breaking ties.

use std::cmp::Ordering;
use super::Expr;

/// Compares two expressions under the canonical total order.
///
/// Variants rank by their [`Kind`](super::Kind): numbers first, then
/// products, powers, sums, function applications, symbols, and finally
/// `Undefined`. Mixed-variant pairs compare through the structural rules
/// below, so that for example `x` and `x^2` order by their common base.
pub fn cmp_expr(lhs: &Expr, rhs: &Expr) -> Ordering {
    // normalize so the lower tag is on the left
    if lhs.kind() > rhs.kind() {
        return cmp_expr(rhs, lhs).reverse();
    }

    match (lhs, rhs) {
        (Expr::Number(lhs), Expr::Number(rhs)) => lhs.cmp(rhs),
        (Expr::Number(_), _) => Ordering::Less,
        (Expr::Product(lhs), Expr::Product(rhs)) => cmp_expr_lists(lhs, rhs),
        (Expr::Product(lhs), _) => cmp_expr_lists(lhs, std::slice::from_ref(rhs)),
        (Expr::Power(lhs_base, lhs_exponent), Expr::Power(rhs_base, rhs_exponent)) => {
            cmp_expr(lhs_base, rhs_base).then_with(|| cmp_expr(lhs_exponent, rhs_exponent))
        }
        (Expr::Power(base, exponent), _) => {
            cmp_expr(base, rhs).then_with(|| cmp_exponent_with_one(exponent))
        }
        (Expr::Sum(lhs), Expr::Sum(rhs)) => cmp_expr_lists(lhs, rhs),
        (Expr::Sum(lhs), _) => cmp_expr_lists(lhs, std::slice::from_ref(rhs)),
        (Expr::Function(lhs_name, lhs_args), Expr::Function(rhs_name, rhs_args)) => {
            lhs_name.cmp(rhs_name).then_with(|| cmp_expr_lists(lhs_args, rhs_args))
        }
        (Expr::Function(_, args), _) => cmp_expr_lists(args, std::slice::from_ref(rhs)),
        (Expr::Symbol(lhs), Expr::Symbol(rhs)) => lhs.cmp(rhs),
        (Expr::Symbol(_), _) => Ordering::Less,
        (Expr::Undefined, _) => Ordering::Equal,
    }
}

/// Compares two child lists from the tail: the last elements are compared
/// first, walking backward until a pair differs. Equal prefixes leave the
/// shorter list smaller.
pub fn cmp_expr_lists(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
    for (lhs, rhs) in lhs.iter().rev().zip(rhs.iter().rev()) {
        let ord = cmp_expr(lhs, rhs);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    lhs.len().cmp(&rhs.len())
}

/// Compares the bases of two expressions, treating a non-power as its own
/// base. Used by the product merge pass to detect combinable factors
/// without copying either side.
pub fn cmp_base(lhs: &Expr, rhs: &Expr) -> Ordering {
    match (lhs, rhs) {
        (Expr::Power(lhs_base, _), Expr::Power(rhs_base, _)) => cmp_expr(lhs_base, rhs_base),
        (Expr::Power(lhs_base, _), _) => cmp_expr(lhs_base, rhs),
        (_, Expr::Power(rhs_base, _)) => cmp_expr(lhs, rhs_base),
        _ => cmp_expr(lhs, rhs),
    }
}

/// Compares the terms of two expressions, ignoring any leading numeric
/// coefficient. Used by the sum merge pass to detect combinable terms
/// without copying either side.
pub fn cmp_term(lhs: &Expr, rhs: &Expr) -> Ordering {
    cmp_expr_lists(term_children(lhs), term_children(rhs))
}

/// The children making up an expression's term: a product minus its leading
/// number, or the expression itself as a singleton.
fn term_children(expr: &Expr) -> &[Expr] {
    match expr {
        Expr::Product(factors) => match factors.first() {
            Some(Expr::Number(_)) => &factors[1..],
            _ => factors,
        },
        other => std::slice::from_ref(other),
    }
}

/// Compares a power's exponent against the implicit exponent one of a
/// non-power expression. A non-numeric exponent always ranks above one,
/// since every non-number does.
fn cmp_exponent_with_one(exponent: &Expr) -> Ordering {
    match exponent {
        Expr::Number(num) => {
            if *num == 1 {
                Ordering::Equal
            } else if *num < 1 {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        _ => Ordering::Greater,
    }
}
