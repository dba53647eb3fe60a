use winnow::ascii::{dec_int, float};
use winnow::combinator::{alt, eof, terminated};
use winnow::error::ContextError;
use winnow::prelude::*;

use super::error::{OperandRole, ParseError};
use super::ARGUMENTS;
use crate::Value;

/// What a raw argument looks like, decided from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandType {
    Null,
    Number,
    String,
    /// A nested call such as `f(x)`.
    Function,
    /// A field reference.
    Variable,
}

fn is_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"')
}

fn is_quoted(operand: &str) -> bool {
    let mut chars = operand.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => is_quote(first) && first == last,
        _ => false,
    }
}

fn number(input: &mut &str) -> ModalResult<Value> {
    alt((
        terminated(dec_int::<_, i64, _>, eof).map(Value::Int),
        float::<_, f64, _>.map(Value::Float),
    ))
    .parse_next(input)
}

/// Parse a complete numeric literal. Words `float` would accept, such as
/// `inf` or `nan`, stay field names.
pub(crate) fn parse_number(text: &str) -> Option<Value> {
    let starts_numeric = text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
    if !starts_numeric {
        return None;
    }
    match number.parse(text).ok()? {
        Value::Float(f) if !f.is_finite() => None,
        value => Some(value),
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
/// `"12px"` coerces to `12`.
pub(crate) fn coerce_number(text: &str) -> Option<f64> {
    let mut input = text.trim_start();
    if input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    float::<_, f64, ContextError>
        .parse_next(&mut input)
        .ok()
        .filter(|f| f.is_finite())
}

/// Classify a raw, trimmed argument.
///
/// ```
/// use proposition::{operand_type, OperandType};
///
/// assert_eq!(operand_type("null"), OperandType::Null);
/// assert_eq!(operand_type("'x'"), OperandType::String);
/// assert_eq!(operand_type("-1.5"), OperandType::Number);
/// assert_eq!(operand_type("eq(a,1)"), OperandType::Function);
/// assert_eq!(operand_type("user.age"), OperandType::Variable);
/// ```
#[must_use]
pub fn operand_type(operand: &str) -> OperandType {
    let operand = operand.trim();
    if operand.is_empty() || operand.eq_ignore_ascii_case("null") {
        OperandType::Null
    } else if is_quoted(operand) {
        OperandType::String
    } else if operand.ends_with(')') {
        OperandType::Function
    } else if parse_number(operand).is_some() {
        OperandType::Number
    } else {
        OperandType::Variable
    }
}

/// A classified leaf argument.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand<'a> {
    pub(crate) raw: &'a str,
    pub(crate) kind: OperandType,
}

impl<'a> Operand<'a> {
    /// Classify an argument of a leaf rule. Nested calls and unterminated
    /// strings are rejected here.
    pub(crate) fn classify(raw: &'a str) -> Result<Self, ParseError> {
        let raw = raw.trim();
        let kind = operand_type(raw);
        match kind {
            OperandType::Function => Err(ParseError::InvalidOperandType {
                operand: raw.to_owned(),
                role: OperandRole::Value,
            }),
            OperandType::Variable if raw.starts_with(is_quote) => {
                Err(ParseError::MalformedString {
                    operand: raw.to_owned(),
                })
            }
            _ => Ok(Self { raw, kind }),
        }
    }

    pub(crate) fn is_variable(&self) -> bool {
        self.kind == OperandType::Variable
    }

    /// The operand's value. A variable yields its own name.
    pub(crate) fn literal(&self) -> Result<Value, ParseError> {
        match self.kind {
            OperandType::Null => Ok(Value::Null),
            OperandType::String => unquote(self.raw).map(Value::String),
            OperandType::Number => parse_number(self.raw).ok_or_else(|| {
                ParseError::InvalidOperandType {
                    operand: self.raw.to_owned(),
                    role: OperandRole::Value,
                }
            }),
            OperandType::Variable => Ok(Value::String(self.raw.to_owned())),
            OperandType::Function => Err(ParseError::InvalidOperandType {
                operand: self.raw.to_owned(),
                role: OperandRole::Value,
            }),
        }
    }
}

/// Strip the quotes of a string operand and resolve its escapes.
fn unquote(operand: &str) -> Result<String, ParseError> {
    let mut segments = ARGUMENTS.split(operand, true)?;
    match segments.len() {
        1 => Ok(segments.remove(0)),
        _ => Err(ParseError::MalformedString {
            operand: operand.to_owned(),
        }),
    }
}
