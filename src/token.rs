use crate::util::{FunctionSpec, OperatorSpec, FUNCTIONS, OPERATORS};
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, or a constant after substitution
    Number(f64),
    /// A binary operator, or the postfix `%`
    Operator(Op),
    /// A `-` in prefix position
    UnaryMinus,
    /// A function name, always followed by a parenthesised argument
    Function(Func),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Get the operator descriptor for operator-like tokens: binary
    /// operators, `%` and unary minus.
    pub fn operator(&self) -> Option<&'static OperatorSpec> {
        match *self {
            Self::Operator(op) => Some(op.spec()),
            Self::UnaryMinus => Some(Op::Neg.spec()),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Operator(op) => write!(fmt, "{}", op.symbol()),
            Self::UnaryMinus => write!(fmt, "neg"),
            Self::Function(func) => write!(fmt, "{}", func.name()),
            Self::LeftParen => write!(fmt, "("),
            Self::RightParen => write!(fmt, ")"),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// binary `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
    /// postfix `%`, divides by 100
    Percent,
    /// prefix `-`
    Neg,
}

impl Op {
    /// Get the operator for a single input character
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// Get the textual symbol of the operator. Unary minus has no symbol of
    /// its own in the input, it is written `_` in tables.
    pub fn symbol(self) -> char {
        self.spec().symbol
    }

    /// Get the read-only descriptor of this operator
    pub fn spec(self) -> &'static OperatorSpec {
        &OPERATORS[&self]
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        self.spec().associativity == Associativity::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }
}

/// Grouping direction of operators with the same precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// Functions known to the calculator. All of them take a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Ln,
    Log,
}

impl Func {
    /// Look up a function by its (lowercase) name
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS.get(name).map(|spec| spec.func)
    }

    /// Name of the function in the input
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
            Self::Log => "log",
        }
    }

    /// Get the read-only descriptor of this function
    pub fn spec(self) -> &'static FunctionSpec {
        &FUNCTIONS[self.name()]
    }
}
