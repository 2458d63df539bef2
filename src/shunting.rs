use crate::error::{Error, Result};
use crate::token::{Associativity, Token};

/// Reorder infix `tokens` into postfix order with the Shunting-Yard
/// algorithm.
///
/// A function stays on the operator stack until the parenthesis closing its
/// argument is found, and is then moved to the output right away.
///
/// # Examples
///
/// ```
/// # use rpncalc::{convert, tokenize, Token, Op};
/// let postfix = convert(tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(
///     postfix,
///     vec![
///         Token::Number(2.0),
///         Token::Number(3.0),
///         Token::Number(4.0),
///         Token::Operator(Op::Mul),
///         Token::Operator(Op::Plus),
///     ]
/// );
/// ```
pub fn convert<I>(tokens: I) -> Result<Vec<Token>>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    'tokens: while let Some(token) = tokens.next() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(func) => {
                if tokens.peek() != Some(&Token::LeftParen) {
                    return Err(Error::syntax(format!(
                        "expected '(' after function {}",
                        func.name()
                    )));
                }
                operators.push(token);
            }
            Token::Operator(_) | Token::UnaryMinus => {
                let o1 = token.operator().ok_or_else(|| internal(&token))?;
                'operators: while let Some(top) = operators.last().copied() {
                    let o2 = match top.operator() {
                        Some(o2) => o2,
                        // parenthesis and functions are barriers
                        None => break 'operators,
                    };
                    let pop_me = o2.precedence > o1.precedence
                        || (o2.precedence == o1.precedence
                            && o1.associativity == Associativity::Left);
                    if pop_me {
                        operators.pop();
                        output.push(top);
                    } else {
                        break 'operators;
                    }
                }
                operators.push(token);
            }
            Token::LeftParen => operators.push(token),
            Token::RightParen => {
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LeftParen => {
                            if let Some(&Token::Function(_)) = operators.last() {
                                output.extend(operators.pop());
                            }
                            continue 'tokens;
                        }
                        Token::Operator(_) | Token::UnaryMinus => output.push(top),
                        other => return Err(internal(&other)),
                    }
                }
                return Err(Error::syntax("mismatched parenthesis"));
            }
        }
    }

    while let Some(token) = operators.pop() {
        match token {
            Token::LeftParen => return Err(Error::syntax("mismatched parenthesis")),
            Token::Operator(_) | Token::UnaryMinus | Token::Function(_) => output.push(token),
            other => return Err(internal(&other)),
        }
    }
    trace!(postfix = ?output, "converted to postfix");
    Ok(output)
}

fn internal(token: &Token) -> Error {
    Error::syntax(format!("internal error: unexpected {:?} on operator stack", token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_case::test_case;

    /// Render the postfix form of `input` as space-separated tokens
    fn postfix(input: &str) -> Result<String> {
        let tokens = convert(tokenize(input)?)?;
        Ok(tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[test_case("2+3*4" => Ok("2 3 4 * +".to_string()) ; "product before sum")]
    #[test_case("10/2*5" => Ok("10 2 / 5 *".to_string()) ; "left associative")]
    #[test_case("3^2^2" => Ok("3 2 2 ^ ^".to_string()) ; "power is right associative")]
    #[test_case("(2+3)*4" => Ok("2 3 + 4 *".to_string()) ; "parenthesis group")]
    #[test_case("-5+3" => Ok("5 neg 3 +".to_string()) ; "unary minus")]
    #[test_case("-2^2" => Ok("2 neg 2 ^".to_string()) ; "unary minus binds tighter than power")]
    #[test_case("2^-1" => Ok("2 1 neg ^".to_string()) ; "unary minus in exponent")]
    #[test_case("50%*2" => Ok("50 % 2 *".to_string()) ; "percent is postfix")]
    #[test_case("sqrt(4)+1" => Ok("4 sqrt 1 +".to_string()) ; "function is resolved at its closing parenthesis")]
    #[test_case("2*sin(0)^2" => Ok("2 0 sin 2 ^ *".to_string()) ; "function result used as an operand")]
    #[test_case("sqrt(sqrt(16))" => Ok("16 sqrt sqrt".to_string()) ; "nested functions")]
    fn order(input: &str) -> Result<String> {
        postfix(input)
    }

    #[test_case("(5+2" ; "missing right parenthesis")]
    #[test_case("5+2)" ; "missing left parenthesis")]
    #[test_case(")(" ; "reversed parenthesis")]
    #[test_case("sqrt 4" ; "function without parenthesis")]
    #[test_case("sqrt" ; "function at end of input")]
    fn errors(input: &str) {
        match postfix(input) {
            Err(Error::Syntax(_)) => {}
            other => panic!("expected a syntax error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn operator_stack_never_holds_numbers() {
        let tokens = vec![Token::LeftParen, Token::Number(1.0), Token::RightParen];
        assert_eq!(convert(tokens), Ok(vec![Token::Number(1.0)]));
    }
}
