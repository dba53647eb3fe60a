use crate::Combinator;

/// Canonical proposition functions that surface aliases resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Like,
    In,
    Complement,
    Conjunction,
    InclusiveDisjunction,
    ExclusiveDisjunction,
}

impl Function {
    /// The combinator of a pure connector function.
    #[must_use]
    pub fn connective(self) -> Option<Combinator> {
        match self {
            Function::Conjunction => Some(Combinator::And),
            Function::InclusiveDisjunction => Some(Combinator::Or),
            Function::ExclusiveDisjunction => Some(Combinator::Xor),
            _ => None,
        }
    }

    /// The name the formatter emits for this function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Equal => "eq",
            Function::NotEqual => "neq",
            Function::GreaterThan => "gt",
            Function::GreaterThanEqual => "gte",
            Function::LessThan => "lt",
            Function::LessThanEqual => "lte",
            Function::Like => "like",
            Function::In => "in",
            Function::Complement => "not",
            Function::Conjunction => "and",
            Function::InclusiveDisjunction => "or",
            Function::ExclusiveDisjunction => "xor",
        }
    }
}

/// A resolved alias: the canonical function plus the connector that joins its
/// fan-out, if the alias names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo {
    pub function: Function,
    pub connector: Option<Combinator>,
}

fn base_function(name: &str) -> Option<Function> {
    let function = match name {
        "eq" | "equal" | "equals" | "=" | "==" => Function::Equal,
        "neq" | "ne" | "notequal" | "!=" | "<>" => Function::NotEqual,
        "gt" | "greater" | ">" => Function::GreaterThan,
        "gte" | "ge" | "greaterequal" | ">=" => Function::GreaterThanEqual,
        "lt" | "less" | "<" => Function::LessThan,
        "lte" | "le" | "lessequal" | "<=" => Function::LessThanEqual,
        "like" | "~" => Function::Like,
        "in" | "@" => Function::In,
        "not" | "!" => Function::Complement,
        "and" | "&" | "&&" | "all" => Function::Conjunction,
        "or" | "|" | "||" | "any" => Function::InclusiveDisjunction,
        "xor" | "^" | "one" => Function::ExclusiveDisjunction,
        _ => return None,
    };
    Some(function)
}

// `xor` is tried before `or`, which it ends with.
const CONNECTOR_SUFFIXES: [(&str, Combinator); 6] = [
    ("xor", Combinator::Xor),
    ("and", Combinator::And),
    ("or", Combinator::Or),
    ("^", Combinator::Xor),
    ("&", Combinator::And),
    ("|", Combinator::Or),
];

/// Resolve a function name, case-insensitively.
///
/// Besides the plain aliases, any non-connector alias accepts a connector
/// suffix naming how its fan-out is joined: `eqor(a,1,2)` is `a = 1 OR a = 2`.
///
/// ```
/// use proposition::{lookup_function, Combinator, Function};
///
/// let info = lookup_function("GTxor").unwrap();
/// assert_eq!(info.function, Function::GreaterThan);
/// assert_eq!(info.connector, Some(Combinator::Xor));
/// assert!(lookup_function("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<FunctionInfo> {
    let name = name.trim().to_ascii_lowercase();

    if let Some(function) = base_function(&name) {
        return Some(FunctionInfo {
            function,
            connector: function.connective(),
        });
    }

    CONNECTOR_SUFFIXES.iter().find_map(|&(suffix, connector)| {
        let function = base_function(name.strip_suffix(suffix)?)?;
        if function.connective().is_some() {
            return None;
        }
        Some(FunctionInfo {
            function,
            connector: Some(connector),
        })
    })
}
