#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! rpncalc, a crate for evaluating arithmetic expressions.
//!
//! The easiest way to use this crate is with the
//! [`calculate`](fn.calculate.html) function:
//!
//! ```
//! assert_eq!(rpncalc::calculate("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! Callers evaluating many expressions can keep an
//! [`Engine`](struct.Engine.html) around. It also lists the names it knows,
//! which is handy to validate keystrokes before sending them:
//!
//! ```
//! use rpncalc::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.calculate("sqrt(16) + 50%"), Ok(4.5));
//! assert_eq!(engine.constants().len(), 2);
//! ```
//!
//! Failures are reported with [`Error`](enum.Error.html), which has exactly
//! three variants:
//!
//! ```
//! use rpncalc::{calculate, Error};
//!
//! assert_eq!(calculate("1 / 0"), Err(Error::DivisionByZero));
//! assert!(matches!(calculate("sqrt(-1)"), Err(Error::MathDomain(_))));
//! assert!(matches!(calculate("(5 + 2"), Err(Error::Syntax(_))));
//! ```
//!
//! # Language definition
//!
//! The language implemented by rpncalc can contain the following elements:
//!
//! - decimal literals: `12`, `0.5`, `.25`, `3.`;
//! - left and right parenthesis;
//! - binary operators: `+` for addition, `-` for subtraction, `*` for
//!   multiplication, `/` for division and `^` for exponentiation;
//! - prefix `-` for negation, and postfix `%` dividing by 100;
//! - constants `pi` and `e`;
//! - function calls with a parenthesised argument: `sin`, `cos`, `tan`,
//!   `sqrt`, `ln` (natural logarithm) and `log` (decimal logarithm).
//!
//! Whitespace is ignored and names are case insensitive. Any other symbol is
//! forbidden in the input.
//!
//! From loosest to tightest, precedence goes `+ -`, then `* /`, then `^` and
//! `%`, then negation. `^` and negation group right to left, everything else
//! left to right, so `3^2^2` is `81` and `-2^2` is `4`.
//!
//! # Technical details
//!
//! rpncalc tokenizes the input, reorders the tokens into postfix notation
//! with the Shunting-Yard algorithm, and runs the result on a stack machine.
//! It works only with `f64` data.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate tracing;

mod engine;
mod error;
mod expr;
mod format;
mod lexer;
mod machine;
mod shunting;
mod token;
mod util;

pub use engine::{calculate, Engine};
pub use error::{Error, ErrorKind, Result};
pub use expr::Expr;
pub use format::format_result;
pub use lexer::tokenize;
pub use machine::evaluate;
pub use shunting::convert;
pub use token::{Associativity, Func, Op, Token};
pub use util::{Domain, FunctionSpec, Operation, OperatorSpec};
