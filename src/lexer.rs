use crate::error::{Error, Result};
use crate::token::{Func, Op, Token};
use crate::util::CONSTANTS;
use regex::{Captures, Regex};
use std::iter::Peekable;
use std::str::Chars;

lazy_static! {
    /// Matches a whole constant name, never a piece of a longer word
    static ref CONSTANT_NAME: Regex = {
        let mut names: Vec<&str> = CONSTANTS.keys().copied().collect();
        // longest first, so alternation never stops at a shorter prefix
        names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        Regex::new(&format!(r"\b(?:{})\b", names.join("|")))
            .expect("constant names form a valid pattern")
    };
}

/// Turn `text` into a sequence of tokens.
///
/// The text is normalized first: whitespace is removed, letters are folded
/// to lowercase, and constant names are replaced by their value.
///
/// # Examples
///
/// ```
/// # use rpncalc::{tokenize, Token, Op};
/// assert_eq!(
///     tokenize("-2 * 3").unwrap(),
///     vec![Token::UnaryMinus, Token::Number(2.0), Token::Operator(Op::Mul), Token::Number(3.0)]
/// );
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let normalized = substitute_constants(&normalize(text));
    trace!(input = text, normalized = %normalized, "tokenizing");
    Lexer::new(&normalized).tokenize()
}

/// Remove all whitespace and fold to lowercase
pub(crate) fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Replace every standalone constant name in `text` by its numeric text
pub(crate) fn substitute_constants(text: &str) -> String {
    CONSTANT_NAME
        .replace_all(text, |caps: &Captures| CONSTANTS[&caps[0]].to_string())
        .into_owned()
}

/// An helper struct for lexing normalized input
pub(crate) struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    previous: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
            previous: None,
        }
    }

    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            self.previous = Some(token);
            output.push(token);
        }
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        let c = match self.input.next() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            c if is_number_part(c) => {
                let literal = self.take_while(c, is_number_part);
                let value = literal
                    .parse()
                    .map_err(|_| Error::syntax(format!("invalid number literal '{}'", literal)))?;
                Token::Number(value)
            }
            c if c.is_alphabetic() => {
                let name = self.take_while(c, char::is_alphabetic);
                match Func::from_name(&name) {
                    Some(func) => Token::Function(func),
                    None if CONSTANTS.contains_key(name.as_str()) => {
                        return Err(Error::syntax(format!(
                            "constant '{}' must stand alone",
                            name
                        )))
                    }
                    None => return Err(Error::syntax(format!("unknown function '{}'", name))),
                }
            }
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '-' if self.minus_is_unary() => Token::UnaryMinus,
            '%' if !self.follows_operand() => {
                return Err(Error::syntax("'%' must follow an operand"));
            }
            c => match Op::from_symbol(c) {
                Some(op) => Token::Operator(op),
                None => {
                    return Err(Error::syntax(format!(
                        "unexpected character in input: {}",
                        c
                    )))
                }
            },
        };
        Ok(Some(token))
    }

    /// Collect `first` and all following characters accepted by `accept`
    fn take_while(&mut self, first: char, accept: fn(char) -> bool) -> String {
        let mut text = String::new();
        text.push(first);
        while let Some(&c) = self.input.peek() {
            if !accept(c) {
                break;
            }
            self.input.next();
            text.push(c);
        }
        text
    }

    /// Check if the previous token ends an operand: a number, a closing
    /// parenthesis or a postfix `%`
    fn follows_operand(&self) -> bool {
        match self.previous {
            Some(Token::Number(_)) | Some(Token::RightParen) => true,
            Some(Token::Operator(op)) => op == Op::Percent,
            _ => false,
        }
    }

    /// A `-` negates when no operand precedes it
    fn minus_is_unary(&self) -> bool {
        match self.previous {
            None
            | Some(Token::UnaryMinus)
            | Some(Token::Function(_))
            | Some(Token::LeftParen) => true,
            Some(Token::Operator(op)) => op != Op::Percent,
            Some(Token::Number(_)) | Some(Token::RightParen) => false,
        }
    }
}

/// Check if `c` can appear inside a numeric literal
fn is_number_part(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}
