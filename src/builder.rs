//! The construction surface: build expressions with ordinary operators.
//!
//! [`Symbolic`] wraps an [`Expr`] and keeps it canonical: every constructor
//! and every operator hands the freshly built node to
//! [`simplify`](crate::symbolic::simplify()) before wrapping it. Expressions
//! are never mutated after construction.
//!
//! ```
//! use cas_symbolic::builder::{num, var};
//!
//! let x = var("x");
//! let expr = (x.clone() + x) * num(3);
//! assert_eq!(expr.to_string(), "6*x");
//! ```

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify;
use rug::Rational;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A symbolic expression, kept in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbolic(Expr);

impl Symbolic {
    fn new(expr: Expr) -> Self {
        Self(simplify(expr))
    }

    /// A view of the canonical expression tree.
    pub fn expr(&self) -> &Expr {
        &self.0
    }

    /// Unwraps the canonical expression tree.
    pub fn into_expr(self) -> Expr {
        self.0
    }

    /// Raises this expression to the power of another.
    pub fn pow(self, exponent: Symbolic) -> Symbolic {
        Self::new(Expr::Power(Box::new(self.0), Box::new(exponent.0)))
    }

    /// The derivative of this expression with respect to `variable`;
    /// shorthand for `func("diff", [self, variable])`.
    pub fn diff(self, variable: Symbolic) -> Symbolic {
        func("diff", [self, variable])
    }
}

/// Creates a constant expression from anything [`Rational`] converts from.
pub fn num<T>(value: T) -> Symbolic
where
    Rational: From<T>,
{
    Symbolic::new(Expr::Number(Rational::from(value)))
}

/// Creates a variable expression with the given name.
pub fn var(name: impl Into<String>) -> Symbolic {
    Symbolic::new(Expr::Symbol(name.into()))
}

/// Creates a function application with the given name and arguments.
pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = Symbolic>) -> Symbolic {
    Symbolic::new(Expr::Function(
        name.into(),
        args.into_iter().map(Symbolic::into_expr).collect(),
    ))
}

impl From<Expr> for Symbolic {
    fn from(expr: Expr) -> Self {
        Self::new(expr)
    }
}

impl Add for Symbolic {
    type Output = Symbolic;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(Expr::Sum(vec![self.0, rhs.0]))
    }
}

impl Neg for Symbolic {
    type Output = Symbolic;

    fn neg(self) -> Self::Output {
        Self::new(Expr::Product(vec![
            Expr::Number(Rational::from(-1)),
            self.0,
        ]))
    }
}

impl Sub for Symbolic {
    type Output = Symbolic;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Symbolic {
    type Output = Symbolic;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(Expr::Product(vec![self.0, rhs.0]))
    }
}

impl Div for Symbolic {
    type Output = Symbolic;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(Expr::Product(vec![
            self.0,
            Expr::Power(Box::new(rhs.0), Box::new(Expr::Number(Rational::from(-1)))),
        ]))
    }
}

impl fmt::Display for Symbolic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn product_of_sum_and_square() {
        let x = var("x");
        let y = var("y");
        let z = var("z");

        let a = (x + y) * z;
        assert_eq!(a.to_string(), "(x+y)*z");

        let b = a.pow(num(2)).pow(num(1)) / num(2);
        assert_eq!(b.to_string(), "1/2*(x+y)^2*z^2");
    }

    #[test]
    fn function_powers_stay_symbolic() {
        let x = var("x");
        let a = func("f", [x]).pow(num(101));
        assert_eq!(a.to_string(), "f(x)^101");
    }

    #[test]
    fn derivative_of_function_power() {
        let x = var("x");
        let a = func("f", [x.clone()]).pow(num(101));
        let b = a.diff(x);
        assert_eq!(b.to_string(), "101*diff(f(x), x)*f(x)^100");
    }

    #[test]
    fn like_terms_collapse() {
        let x = var("x");
        assert_eq!((x.clone() + x.clone()).to_string(), "2*x");

        let sum = num(2) * x.clone() + num(3) * x.clone() + x;
        assert_eq!(sum.to_string(), "6*x");
    }

    #[test]
    fn zero_to_negative_power_is_undefined() {
        let expr = num(0).pow(num(-1));
        assert_eq!(expr.to_string(), "<Undefined>");
    }

    #[test]
    fn integer_powers_evaluate_exactly() {
        assert_eq!(num(2).pow(num(10)).to_string(), "1024");
        assert_eq!(num(2).pow(num(100)).to_string(), "1267650600228229401496703205376");
    }

    #[test]
    fn rational_arithmetic_cancels() {
        let expr = (num((1, 2)) + num((1, 3))) - num((5, 6));
        assert_eq!(expr.to_string(), "0");
    }

    #[test]
    fn derivative_via_leibniz() {
        let x = var("x");
        let expr = (x.clone() * x.clone()).diff(x);
        assert_eq!(expr.to_string(), "2*x");
    }

    #[test]
    fn division_builds_reciprocals() {
        let x = var("x");
        let y = var("y");
        assert_eq!((x.clone() / y).to_string(), "x*y^-1");
        assert_eq!((x.clone() / x).to_string(), "1");
    }

    #[test]
    fn negation_and_subtraction() {
        let x = var("x");
        let y = var("y");
        assert_eq!((-x.clone()).to_string(), "-x");
        assert_eq!((x.clone() - y).to_string(), "x-y");
        assert_eq!((x.clone() - x).to_string(), "0");
    }

    #[test]
    fn malformed_diff_is_undefined() {
        let x = var("x");
        let two = num(2);
        // the differentiation variable must be a symbol
        assert_eq!(x.clone().diff(two).to_string(), "<Undefined>");
        // wrong arity
        assert_eq!(func("diff", [x]).to_string(), "<Undefined>");
    }

    #[test]
    fn construction_is_canonical() {
        let x = var("x");
        let y = var("y");
        // commuted constructions meet in the same canonical form
        assert_eq!(x.clone() + y.clone(), y.clone() + x.clone());
        assert_eq!(x.clone() * y.clone(), y * x);
    }
}
