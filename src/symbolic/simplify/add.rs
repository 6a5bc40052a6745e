//! Canonicalization of sums, including combining like terms.

use crate::symbolic::expr::ordering::{cmp_expr, cmp_term};
use crate::symbolic::expr::Expr;
use std::cmp::Ordering;
use super::simplify_product;

/// Canonicalizes a sum whose terms are themselves already canonical.
///
/// Nested sums are flattened into the term list, the terms are sorted under
/// the total order, and a single merge pass walks the sorted list combining
/// each emitted tail with the next term: numbers fold exactly, zeros vanish,
/// and terms sharing the same [`term`](Expr::term) collapse into one term
/// with their coefficients added (`2x + 3x = 5x`). A result with no terms is
/// zero; a lone term stands for itself.
pub fn simplify_sum(terms: Vec<Expr>) -> Expr {
    let mut flat = Vec::with_capacity(terms.len());
    for term in terms {
        match term {
            Expr::Sum(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    flat.sort_by(cmp_expr);

    let mut merged: Vec<Expr> = Vec::with_capacity(flat.len());
    for term in flat {
        match merged.pop() {
            None => merged.push(term),
            Some(previous) => merge_terms(previous, term, &mut merged),
        }
    }

    Expr::Sum(merged).downgrade()
}

/// Combines the tail of the output with the next term, pushing zero, one,
/// or two results.
fn merge_terms(lhs: Expr, rhs: Expr, out: &mut Vec<Expr>) {
    match (lhs, rhs) {
        (Expr::Number(lhs), Expr::Number(rhs)) => {
            let sum = lhs + rhs;
            if sum != 0 {
                out.push(Expr::Number(sum));
            }
        }
        (Expr::Number(num), other) | (other, Expr::Number(num)) if num == 0 => {
            out.push(other);
        }
        (lhs, rhs) if cmp_term(&lhs, &rhs) == Ordering::Equal => {
            // like terms: a*t + b*t = (a+b)*t
            let (lhs_constant, term) = lhs.split_term();
            let (rhs_constant, _) = rhs.split_term();
            let constant = simplify_sum(vec![lhs_constant, rhs_constant]);
            let combined = simplify_product(vec![constant, term]);
            if !combined.is_zero() {
                out.push(combined);
            }
        }
        (lhs, rhs) => {
            out.push(lhs);
            out.push(rhs);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use super::*;

    fn symbol(name: &str) -> Expr {
        Expr::Symbol(name.to_string())
    }

    fn number(n: i32) -> Expr {
        Expr::Number(rational(n))
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(simplify_sum(vec![]), number(0));
    }

    #[test]
    fn single_term_stands_alone() {
        assert_eq!(simplify_sum(vec![symbol("x")]), symbol("x"));
    }

    #[test]
    fn nested_sums_flatten() {
        let sum = simplify_sum(vec![
            symbol("a"),
            Expr::Sum(vec![symbol("b"), symbol("c")]),
        ]);
        assert_eq!(sum, Expr::Sum(vec![symbol("a"), symbol("b"), symbol("c")]));
    }

    #[test]
    fn numbers_fold_and_zero_vanishes() {
        assert_eq!(
            simplify_sum(vec![number(2), symbol("x"), number(3)]),
            Expr::Sum(vec![number(5), symbol("x")]),
        );
        assert_eq!(simplify_sum(vec![number(0), symbol("x")]), symbol("x"));
        assert_eq!(simplify_sum(vec![number(4), number(-4)]), number(0));
    }

    #[test]
    fn rationals_fold_exactly() {
        let sum = simplify_sum(vec![
            Expr::Number(rational((1, 2))),
            Expr::Number(rational((1, 3))),
            Expr::Number(rational((-5, 6))),
        ]);
        assert_eq!(sum, number(0));
    }

    #[test]
    fn like_terms_combine() {
        // x + x = 2x
        assert_eq!(
            simplify_sum(vec![symbol("x"), symbol("x")]),
            Expr::Product(vec![number(2), symbol("x")]),
        );

        // 2x + 3x + x = 6x
        let terms = vec![
            Expr::Product(vec![number(2), symbol("x")]),
            Expr::Product(vec![number(3), symbol("x")]),
            symbol("x"),
        ];
        assert_eq!(
            simplify_sum(terms),
            Expr::Product(vec![number(6), symbol("x")]),
        );
    }

    #[test]
    fn opposite_terms_cancel() {
        // x + (-1 * x) = 0
        let terms = vec![
            symbol("x"),
            Expr::Product(vec![number(-1), symbol("x")]),
        ];
        assert_eq!(simplify_sum(terms), number(0));
    }

    #[test]
    fn unlike_terms_stay_sorted() {
        let sum = simplify_sum(vec![symbol("y"), number(3), symbol("x")]);
        assert_eq!(sum, Expr::Sum(vec![number(3), symbol("x"), symbol("y")]));
    }

    #[test]
    fn coefficient_one_disappears() {
        // 2x + (-1 * x) = x
        let terms = vec![
            Expr::Product(vec![number(2), symbol("x")]),
            Expr::Product(vec![number(-1), symbol("x")]),
        ];
        assert_eq!(simplify_sum(terms), symbol("x"));
    }
}
