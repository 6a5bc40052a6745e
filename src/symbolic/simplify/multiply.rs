//! Canonicalization of products, including combining like bases.

use crate::primitive::rational;
use crate::symbolic::expr::ordering::{cmp_base, cmp_expr};
use crate::symbolic::expr::Expr;
use std::cmp::Ordering;
use super::{simplify_power, simplify_sum};

/// Canonicalizes a product whose factors are themselves already canonical.
///
/// Nested products are flattened into the factor list, and a factor of zero
/// absorbs the whole product. The factors are then sorted under the total
/// order and merged in a single pass: numbers fold exactly, ones vanish, and
/// factors sharing the same [`base`](Expr::base) collapse into one power
/// with their exponents added (`a^b * a^c = a^(b+c)`). A result with no
/// factors is one; a lone factor stands for itself.
pub fn simplify_product(factors: Vec<Expr>) -> Expr {
    let mut flat = Vec::with_capacity(factors.len());
    for factor in factors {
        match factor {
            Expr::Product(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    if flat.iter().any(Expr::is_zero) {
        return Expr::Number(rational(0));
    }

    flat.sort_by(cmp_expr);

    let mut merged: Vec<Expr> = Vec::with_capacity(flat.len());
    for factor in flat {
        match merged.pop() {
            None => merged.push(factor),
            Some(previous) => merge_factors(previous, factor, &mut merged),
        }
    }

    Expr::Product(merged).downgrade()
}

/// Combines the tail of the output with the next factor, pushing zero, one,
/// or two results.
fn merge_factors(lhs: Expr, rhs: Expr, out: &mut Vec<Expr>) {
    match (lhs, rhs) {
        (Expr::Number(lhs), Expr::Number(rhs)) => {
            let product = lhs * rhs;
            if product != 1 {
                out.push(Expr::Number(product));
            }
        }
        (Expr::Number(num), other) | (other, Expr::Number(num)) if num == 1 => {
            out.push(other);
        }
        (lhs, rhs) if cmp_base(&lhs, &rhs) == Ordering::Equal => {
            // like bases: a^b * a^c = a^(b+c)
            let (base, lhs_exponent) = lhs.split_power();
            let (_, rhs_exponent) = rhs.split_power();
            let exponent = simplify_sum(vec![lhs_exponent, rhs_exponent]);
            let combined = simplify_power(base, exponent);
            if !combined.is_one() {
                out.push(combined);
            }
        }
        (lhs, rhs) => {
            out.push(lhs);
            out.push(rhs);
        }
    }
}
