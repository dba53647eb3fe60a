use std::fmt;

use thiserror::Error;

use crate::split::SplitError;

/// The position an operand was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandRole {
    Field,
    Value,
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRole::Field => write!(f, "a field"),
            OperandRole::Value => write!(f, "a value"),
        }
    }
}

/// Errors produced when parsing a proposition. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty proposition")]
    Empty,

    #[error(transparent)]
    UnbalancedDelimiters(#[from] SplitError),

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// Every function is variadic past its minimum, so only too few
    /// arguments is an error.
    #[error("function '{name}' takes at least {min} arguments, got {got}")]
    WrongArity { name: String, min: usize, got: usize },

    #[error("operand '{operand}' cannot be used as {role}")]
    InvalidOperandType { operand: String, role: OperandRole },

    #[error("malformed string literal {operand}")]
    MalformedString { operand: String },

    #[error("malformed term '{term}': expected name(arguments)")]
    MalformedTerm { term: String },
}
