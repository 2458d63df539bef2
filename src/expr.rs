use crate::error::Result;
use crate::lexer::tokenize;
use crate::machine::evaluate;
use crate::shunting::convert;
use crate::token::Token;
use std::fmt::{self, Display, Formatter};

/// A parsed mathematical expression, stored in postfix order.
///
/// Parsing and evaluation are separate steps, so an expression can be
/// checked once and evaluated later.
///
/// # Examples
/// ```
/// # use rpncalc::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.to_string(), "3 5 2 * +");
/// assert_eq!(expr.eval(), Ok(13.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    postfix: Vec<Token>,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use rpncalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 + (5 * 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let postfix = convert(tokenize(expression)?)?;
        Ok(Self { postfix })
    }

    /// Evaluate the expression. A negative zero result is returned as `0.0`.
    pub fn eval(&self) -> Result<f64> {
        let result = evaluate(&self.postfix)?;
        if result == 0.0 {
            return Ok(0.0);
        }
        Ok(result)
    }

    /// The tokens of the expression, in postfix order
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut tokens = self.postfix.iter();
        if let Some(first) = tokens.next() {
            write!(fmt, "{}", first)?;
            for token in tokens {
                write!(fmt, " {}", token)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Expr;
    use crate::error::Error;

    #[test]
    fn parse() {
        let valid_expressions = [
            "3 + -5",
            "(3 + -5)*45",
            "(3. + 5.0)*\t\n45",
            "sin(34.0) ^ sqrt(28.0)",
            "2 * pi",
            "LN(E)",
            "50%",
        ];
        for expr in &valid_expressions {
            assert!(Expr::parse(expr).is_ok(), "{} should parse", expr);
        }

        let invalid_expressions = ["(3 + 5", "3 + 5)", "cbrt(8)", "2 $ 3", "sqrt 4"];
        for expr in &invalid_expressions {
            assert!(Expr::parse(expr).is_err(), "{} should not parse", expr);
        }
    }

    #[test]
    fn eval() {
        let eval_pairs = [
            ("3 + 5", 8.0),
            ("2 - 5", -3.0),
            ("2 * 5", 10.0),
            ("10 / 5", 2.0),
            ("2 ^ 3", 8.0),
            ("-3", -3.0),
            ("25 + -3", 22.0),
            ("25 - -3", 28.0),
            ("3 + 5 * 2", 13.0),
            ("sqrt(9)", 3.0),
            ("sin(18.0) * 3", 3.0 * libm::sin(18.0)),
        ];
        for &(input, expected) in &eval_pairs {
            assert_eq!(Expr::parse(input).and_then(|expr| expr.eval()), Ok(expected));
        }
    }

    #[test]
    fn reuse() {
        let expr = Expr::parse("1 / (3 - 3)").unwrap();
        assert_eq!(expr.eval(), Err(Error::DivisionByZero));
        assert_eq!(expr.eval(), Err(Error::DivisionByZero));

        let expr = Expr::parse("2^10").unwrap();
        assert_eq!(expr.eval(), expr.eval());
    }

    #[test]
    fn negative_zero() {
        let zero = Expr::parse("-0").unwrap().eval().unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());

        let zero = Expr::parse("0 * -1").unwrap().eval().unwrap();
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn display() {
        let expr = Expr::parse("sqrt(4) + 1").unwrap();
        assert_eq!(expr.to_string(), "4 sqrt 1 +");
        assert_eq!(expr.postfix().len(), 4);
    }
}
