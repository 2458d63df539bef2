use crate::error::{Error, Result};
use crate::token::{Func, Op, Token};
use crate::util::Operation;

/// Evaluate a sequence of tokens in postfix order on a value stack.
///
/// # Examples
///
/// ```
/// # use rpncalc::{evaluate, Token, Op};
/// let postfix = [Token::Number(7.0), Token::Number(2.0), Token::Operator(Op::Minus)];
/// assert_eq!(evaluate(&postfix), Ok(5.0));
/// ```
pub fn evaluate(postfix: &[Token]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let value = match *token {
            Token::Number(value) => value,
            Token::Operator(_) | Token::UnaryMinus => {
                let spec = token
                    .operator()
                    .ok_or_else(|| Error::syntax("internal error: missing operator"))?;
                match spec.operation {
                    Operation::Unary(apply) => apply(pop(&mut stack)?),
                    Operation::Binary(apply) => {
                        let right = pop(&mut stack)?;
                        let left = pop(&mut stack)?;
                        binary(*token, apply, left, right)?
                    }
                }
            }
            Token::Function(func) => call(func, pop(&mut stack)?)?,
            Token::LeftParen | Token::RightParen => {
                return Err(Error::syntax("internal error: parenthesis in postfix sequence"));
            }
        };
        if value.is_infinite() {
            return Err(Error::syntax(format!("numeric overflow evaluating '{}'", token)));
        }
        stack.push(value);
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        [] => Err(Error::syntax("empty expression")),
        _ => Err(Error::syntax("invalid expression, missing operator")),
    }
}

fn pop(stack: &mut Vec<f64>) -> Result<f64> {
    stack
        .pop()
        .ok_or_else(|| Error::syntax("invalid expression, missing operand"))
}

fn binary(token: Token, apply: fn(f64, f64) -> f64, left: f64, right: f64) -> Result<f64> {
    if token == Token::Operator(Op::Div) && right == 0.0 {
        return Err(Error::DivisionByZero);
    }
    let value = apply(left, right);
    if value.is_nan() && !left.is_nan() && !right.is_nan() {
        return Err(Error::domain(format!("{} {} {} is undefined", left, token, right)));
    }
    Ok(value)
}

fn call(func: Func, argument: f64) -> Result<f64> {
    let spec = func.spec();
    if !spec.domain.contains(argument) {
        return Err(Error::domain(format!(
            "{} is outside the domain of {}",
            argument, spec.name
        )));
    }
    Ok((spec.operation)(argument))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::shunting::convert;
    use test_case::test_case;

    fn run(input: &str) -> Result<f64> {
        evaluate(&convert(tokenize(input)?)?)
    }

    #[test_case("7-2" => Ok(5.0) ; "left operand is popped second")]
    #[test_case("8/2" => Ok(4.0) ; "division order")]
    #[test_case("2^3" => Ok(8.0) ; "power order")]
    #[test_case("3^2^2" => Ok(81.0) ; "right associative power")]
    #[test_case("-5+3" => Ok(-2.0) ; "negation")]
    #[test_case("--5" => Ok(5.0) ; "double negation")]
    #[test_case("50%" => Ok(0.5) ; "percent")]
    #[test_case("200*10%" => Ok(20.0) ; "percent of a product operand")]
    #[test_case("sqrt(16)" => Ok(4.0) ; "square root")]
    #[test_case("log(1)" => Ok(0.0) ; "decimal logarithm")]
    #[test_case("sqrt(4)+1" => Ok(3.0) ; "function followed by sum")]
    fn values(input: &str) -> Result<f64> {
        run(input)
    }

    #[test_case("1/0" => Err(Error::DivisionByZero) ; "division by zero")]
    #[test_case("1/(2-2)" => Err(Error::DivisionByZero) ; "division by computed zero")]
    #[test_case("1/-0" => Err(Error::DivisionByZero) ; "division by negative zero")]
    fn division_by_zero(input: &str) -> Result<f64> {
        run(input)
    }

    #[test_case("sqrt(-1)" ; "negative square root")]
    #[test_case("ln(0)" ; "natural logarithm of zero")]
    #[test_case("log(-10)" ; "decimal logarithm of negative")]
    #[test_case("(-8)^0.5" ; "fractional power of negative")]
    fn domain_errors(input: &str) {
        match run(input) {
            Err(Error::MathDomain(_)) => {}
            other => panic!("expected a domain error for {:?}, got {:?}", input, other),
        }
    }

    #[test_case("5*+3" ; "operator without left operand")]
    #[test_case("2+" ; "trailing operator")]
    #[test_case("()" ; "empty parenthesis")]
    #[test_case("sqrt()" ; "function without argument")]
    #[test_case("2(3)" ; "two values without operator")]
    #[test_case("10^400" ; "overflow")]
    fn syntax_errors(input: &str) {
        match run(input) {
            Err(Error::Syntax(_)) => {}
            other => panic!("expected a syntax error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn stray_parenthesis() {
        let postfix = [Token::Number(1.0), Token::LeftParen];
        assert!(matches!(evaluate(&postfix), Err(Error::Syntax(_))));
    }
}
