use crate::error::Result;
use crate::expr::Expr;
use crate::util::{CONSTANTS, FUNCTIONS, OPERATORS};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use rpncalc::calculate;
/// assert_eq!(calculate("45 - 2^3"), Ok(37.0));
/// assert_eq!(calculate("   "), Ok(0.0));
/// ```
pub fn calculate(input: &str) -> Result<f64> {
    Engine::new().calculate(input)
}

/// Entry point for callers that evaluate many expressions.
///
/// The engine holds no state of its own: the operator, function and constant
/// tables it reads are built once per process and never modified, so an
/// `Engine` can be copied freely and shared between threads.
///
/// # Examples
///
/// ```
/// # use rpncalc::{Engine, Error};
/// let engine = Engine::new();
/// assert_eq!(engine.calculate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(engine.calculate("1 / 0"), Err(Error::DivisionByZero));
/// assert!(engine.functions().contains(&"sqrt"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    /// Create a new engine, building the shared tables if needed
    pub fn new() -> Self {
        lazy_static::initialize(&OPERATORS);
        lazy_static::initialize(&FUNCTIONS);
        lazy_static::initialize(&CONSTANTS);
        Self
    }

    /// Calculate the value of `expression`.
    ///
    /// Empty or blank input evaluates to `0.0`. The result is never `-0.0`.
    pub fn calculate(&self, expression: &str) -> Result<f64> {
        if expression.trim().is_empty() {
            return Ok(0.0);
        }
        let result = Expr::parse(expression).and_then(|expr| {
            trace!(postfix = %expr, "parsed");
            expr.eval()
        });
        match result {
            Ok(value) => debug!(expression, value, "calculated"),
            Err(ref err) => debug!(expression, error = %err, "calculation failed"),
        }
        result
    }

    /// Names of the supported functions, sorted
    pub fn functions(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = FUNCTIONS.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Supported constants with their values, sorted by name
    pub fn constants(&self) -> Vec<(&'static str, f64)> {
        let mut constants: Vec<_> = CONSTANTS.iter().map(|(name, value)| (*name, *value)).collect();
        constants.sort_unstable_by(|a, b| a.0.cmp(b.0));
        constants
    }

    /// Symbols of the operators that can be typed, in precedence order.
    /// Unary minus shares the `-` symbol and is not listed separately.
    pub fn operators(&self) -> Vec<char> {
        let mut specs: Vec<_> = OPERATORS.values().filter(|spec| spec.symbol != '_').collect();
        specs.sort_by_key(|spec| (spec.precedence, spec.symbol));
        specs.into_iter().map(|spec| spec.symbol).collect()
    }
}
