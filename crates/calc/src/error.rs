//! Error types for the calculator
//!
//! Every error here is line-local: the interpreter reports it on the
//! diagnostic stream and carries on with the next line. Only I/O failures on
//! the input or output streams stop a run, and those surface as `io::Error`.

use std::fmt;

/// Which numeric argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Evaluation point of `AT`
    Value,
    /// Variable index of `DEG_BY`
    Variable,
    /// Substitution count of `COMPOSE`
    Count,
}

impl ArgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::Value => "VALUE",
            ArgKind::Variable => "VARIABLE",
            ArgKind::Count => "COUNT",
        }
    }
}

/// Malformed polynomial literal, `column` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralError {
    pub column: usize,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed polynomial at column {}", self.column)
    }
}

impl std::error::Error for LiteralError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed polynomial literal
    WrongPoly { column: usize },
    /// Unknown command, or trailing input after an argument-less command
    WrongCommand,
    /// Missing, malformed or out-of-range command argument
    WrongArgument(ArgKind),
    /// Not enough values on the stack for the command
    StackUnderflow,
}

impl fmt::Display for CalcError {
    /// The text that follows `ERROR <line> ` on the diagnostic stream
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::WrongPoly { column } => write!(f, "{}", column),
            CalcError::WrongCommand => write!(f, "WRONG COMMAND"),
            CalcError::WrongArgument(kind) => write!(f, "WRONG {}", kind.as_str()),
            CalcError::StackUnderflow => write!(f, "STACK UNDERFLOW"),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<LiteralError> for CalcError {
    fn from(e: LiteralError) -> Self {
        CalcError::WrongPoly { column: e.column }
    }
}

/// An error tied to the input line it occurred on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub error: CalcError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR {} {}", self.line, self.error)
    }
}
