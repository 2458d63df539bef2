use crate::token::{Associativity, Func, Op};
use hashbrown::HashMap;

/// The arithmetic behind an operator or function, tagged by arity
#[derive(Clone, Copy)]
pub enum Operation {
    /// Consumes one operand
    Unary(fn(f64) -> f64),
    /// Consumes two operands, left then right
    Binary(fn(f64, f64) -> f64),
}

impl Operation {
    /// Number of operands consumed from the value stack
    pub fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// Inputs a function accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Any finite value
    Finite,
    /// `x >= 0`
    NonNegative,
    /// `x > 0`
    Positive,
}

impl Domain {
    /// Check if `x` belongs to this domain
    pub fn contains(self, x: f64) -> bool {
        match self {
            Self::Finite => x.is_finite(),
            Self::NonNegative => x >= 0.0,
            Self::Positive => x > 0.0,
        }
    }
}

/// Read-only description of an operator
pub struct OperatorSpec {
    /// Symbol in the input; unary minus uses `_`
    pub symbol: char,
    /// Higher binds tighter
    pub precedence: u8,
    /// Grouping of operators with equal precedence
    pub associativity: Associativity,
    /// What the operator computes
    pub operation: Operation,
}

impl OperatorSpec {
    /// Number of operands
    pub fn arity(&self) -> usize {
        self.operation.arity()
    }
}

/// Read-only description of a function
pub struct FunctionSpec {
    /// The function described
    pub func: Func,
    /// Name in the input
    pub name: &'static str,
    /// What the function computes, for arguments in `domain`
    pub operation: fn(f64) -> f64,
    /// Arguments accepted without a domain error
    pub domain: Domain,
}

impl FunctionSpec {
    /// Functions always take a single argument
    pub fn arity(&self) -> usize {
        1
    }
}

fn operator(
    symbol: char,
    precedence: u8,
    associativity: Associativity,
    operation: Operation,
) -> OperatorSpec {
    OperatorSpec {
        symbol,
        precedence,
        associativity,
        operation,
    }
}

fn function(func: Func, operation: fn(f64) -> f64, domain: Domain) -> FunctionSpec {
    FunctionSpec {
        func,
        name: func.name(),
        operation,
        domain,
    }
}

lazy_static! {
    pub static ref OPERATORS: HashMap<Op, OperatorSpec> = {
        use crate::token::Associativity::{Left, Right};
        let mut map = HashMap::new();
        map.insert(Op::Plus, operator('+', 2, Left, Operation::Binary(|a, b| a + b)));
        map.insert(Op::Minus, operator('-', 2, Left, Operation::Binary(|a, b| a - b)));
        map.insert(Op::Mul, operator('*', 3, Left, Operation::Binary(|a, b| a * b)));
        map.insert(Op::Div, operator('/', 3, Left, Operation::Binary(|a, b| a / b)));
        map.insert(Op::Exp, operator('^', 4, Right, Operation::Binary(libm::pow)));
        map.insert(Op::Percent, operator('%', 4, Left, Operation::Unary(|a| a / 100.0)));
        map.insert(Op::Neg, operator('_', 5, Right, Operation::Unary(|a| -a)));
        map.shrink_to_fit();
        map
    };

    pub static ref FUNCTIONS: HashMap<&'static str, FunctionSpec> = {
        let mut map = HashMap::new();
        for spec in vec![
            function(Func::Sin, libm::sin, Domain::Finite),
            function(Func::Cos, libm::cos, Domain::Finite),
            function(Func::Tan, libm::tan, Domain::Finite),
            function(Func::Sqrt, libm::sqrt, Domain::NonNegative),
            function(Func::Ln, libm::log, Domain::Positive),
            function(Func::Log, libm::log10, Domain::Positive),
        ] {
            map.insert(spec.name, spec);
        }
        map.shrink_to_fit();
        map
    };

    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("pi", std::f64::consts::PI);
        map.insert("e", std::f64::consts::E);
        map.shrink_to_fit();
        map
    };
}
