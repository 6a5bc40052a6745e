//! Canonicalization of powers.

use crate::funcs::power::pow;
use crate::primitive::rational;
use crate::symbolic::expr::Expr;
use rug::Rational;
use super::simplify_product;

/// Canonicalizes a power whose base and exponent are already canonical.
///
/// A zero base evaluates against a numeric exponent (`0^+n = 0`, `0^0 = 1`,
/// `0^-n` is undefined) and is otherwise left alone; a base of one collapses
/// to one. Integer-valued numeric exponents dispatch to the integer-power
/// rules; anything else stays an unevaluated power.
pub fn simplify_power(base: Expr, exponent: Expr) -> Expr {
    if base.is_zero() {
        return match &exponent {
            Expr::Number(num) => {
                if *num > 0 {
                    Expr::Number(rational(0))
                } else if *num == 0 {
                    Expr::Number(rational(1))
                } else {
                    Expr::Undefined
                }
            }
            _ => Expr::Power(Box::new(base), Box::new(exponent)),
        };
    }

    if base.is_one() {
        return Expr::Number(rational(1));
    }

    match exponent {
        Expr::Number(num) if *num.denom() == 1 => simplify_integer_power(base, num),
        exponent => Expr::Power(Box::new(base), Box::new(exponent)),
    }
}

/// Canonicalizes a power with a non-zero canonical base and an
/// integer-valued exponent.
///
/// Exponents of zero and one collapse, numeric bases evaluate exactly,
/// nested powers merge their exponents (`(a^b)^n = a^(b*n)`), and a product
/// base distributes the exponent over its factors (`(a*b)^n = a^n * b^n`).
fn simplify_integer_power(base: Expr, exponent: Rational) -> Expr {
    if exponent == 0 {
        return Expr::Number(rational(1));
    }
    if exponent == 1 {
        return base;
    }

    match base {
        Expr::Number(num) => match pow(&num, &exponent) {
            Ok(value) => Expr::Number(value),
            Err(_) => Expr::Undefined,
        },
        Expr::Power(inner_base, inner_exponent) => {
            let merged = simplify_product(vec![*inner_exponent, Expr::Number(exponent)]);
            simplify_power(*inner_base, merged)
        }
        Expr::Product(factors) => {
            let distributed = factors
                .into_iter()
                .map(|factor| simplify_power(factor, Expr::Number(exponent.clone())))
                .collect();
            simplify_product(distributed)
        }
        base => Expr::Power(Box::new(base), Box::new(Expr::Number(exponent))),
    }
}
