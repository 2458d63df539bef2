use thiserror::Error;

/// Error type for the rpncalc crate
///
/// Every failure of the pipeline is reported as exactly one of these three
/// variants. Match on the enum to handle all of them at once, or on a single
/// variant to handle one kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed input: unknown character or name, unbalanced parenthesis,
    /// missing operand, or an unexpected numeric failure
    #[error("SyntaxError: {0}")]
    Syntax(String),
    /// Division with a zero right-hand operand
    #[error("DivisionByZeroError: division by zero")]
    DivisionByZero,
    /// A function or operator received an argument outside its domain
    #[error("MathDomainError: {0}")]
    MathDomain(String),
}

/// The category of an [`Error`](enum.Error.html), without its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Syntax`](enum.Error.html#variant.Syntax)
    Syntax,
    /// See [`Error::DivisionByZero`](enum.Error.html#variant.DivisionByZero)
    DivisionByZero,
    /// See [`Error::MathDomain`](enum.Error.html#variant.MathDomain)
    MathDomain,
}

impl Error {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::MathDomain(message.into())
    }

    /// Get the category of this error
    ///
    /// ```
    /// # use rpncalc::{calculate, ErrorKind};
    /// let err = calculate("1/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::MathDomain(_) => ErrorKind::MathDomain,
        }
    }
}

/// Result type used through the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
