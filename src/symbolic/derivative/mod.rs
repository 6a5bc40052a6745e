//! Structural differentiation, exposed through the `diff` function
//! application.
//!
//! `diff(expr, var)` takes exactly two arguments, the second a symbol;
//! anything else is algebraically meaningless and yields
//! [`Expr::Undefined`]. The derivative itself is computed structurally:
//! sums differentiate termwise, products through the Leibniz rule, and
//! powers with an exponent constant in the variable through the power rule.
//! An application of an unrecognized function, or a power whose exponent
//! mentions the variable, stays an unevaluated `diff` application.

use crate::primitive::rational;
use crate::symbolic::expr::Expr;
use super::simplify::{simplify_power, simplify_product, simplify_sum};

/// Simplifies a `diff` application whose arguments are already canonical.
///
/// Validates the argument list and dispatches to [`derivative`].
pub(crate) fn simplify_diff(mut args: Vec<Expr>) -> Expr {
    if args.len() != 2 {
        return Expr::Undefined;
    }
    let (Some(variable), Some(expr)) = (args.pop(), args.pop()) else {
        return Expr::Undefined;
    };
    let Expr::Symbol(variable) = variable else {
        return Expr::Undefined;
    };
    derivative(expr, &variable)
}

/// Computes the derivative of a canonical expression with respect to the
/// named variable, returning a canonical expression.
pub fn derivative(expr: Expr, variable: &str) -> Expr {
    match expr {
        Expr::Symbol(name) => {
            if name == variable {
                Expr::Number(rational(1))
            } else {
                Expr::Number(rational(0))
            }
        }
        Expr::Number(_) => Expr::Number(rational(0)),
        Expr::Sum(terms) => {
            simplify_sum(terms.into_iter().map(|term| derivative(term, variable)).collect())
        }
        Expr::Product(factors) => product_rule(factors, variable),
        Expr::Power(base, exponent) => power_rule(*base, *exponent, variable),
        expr @ Expr::Function(..) => unevaluated(expr, variable),
        Expr::Undefined => Expr::Undefined,
    }
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
///
/// The factors not being differentiated are the one place the simplifier
/// deep-copies subtrees: each summand needs its own copy of them.
fn product_rule(factors: Vec<Expr>, variable: &str) -> Expr {
    let mut summands = Vec::with_capacity(factors.len());
    for index in 0..factors.len() {
        let factors = factors
            .iter()
            .enumerate()
            .map(|(position, factor)| {
                if position == index {
                    derivative(factor.clone(), variable)
                } else {
                    factor.clone()
                }
            })
            .collect();
        summands.push(simplify_product(factors));
    }
    simplify_sum(summands)
}

/// `(b^p)' = p * b^(p-1) * b'` for `p` constant in the variable.
///
/// An exponent that mentions the variable would need the logarithmic
/// derivative; that case stays an unevaluated `diff` application.
fn power_rule(base: Expr, exponent: Expr, variable: &str) -> Expr {
    if !is_constant_in(&exponent, variable) {
        return unevaluated(
            Expr::Power(Box::new(base), Box::new(exponent)),
            variable,
        );
    }

    let reduced = simplify_sum(vec![exponent.clone(), Expr::Number(rational(-1))]);
    let outer = simplify_power(base.clone(), reduced);
    let inner = derivative(base, variable);
    simplify_product(vec![exponent, outer, inner])
}

/// Rebuilds an unevaluated `diff` application around the expression.
fn unevaluated(expr: Expr, variable: &str) -> Expr {
    Expr::Function(
        "diff".to_string(),
        vec![expr, Expr::Symbol(variable.to_string())],
    )
}

/// Returns true if the expression does not mention the named variable:
/// numbers are constant, a symbol is constant iff it is a different name,
/// and a compound is constant iff all of its children are.
pub fn is_constant_in(expr: &Expr, variable: &str) -> bool {
    match expr {
        Expr::Number(_) => true,
        Expr::Symbol(name) => name != variable,
        Expr::Sum(children) | Expr::Product(children) | Expr::Function(_, children) => {
            children.iter().all(|child| is_constant_in(child, variable))
        }
        Expr::Power(base, exponent) => {
            is_constant_in(base, variable) && is_constant_in(exponent, variable)
        }
        Expr::Undefined => false,
    }
}
