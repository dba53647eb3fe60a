//! Compile boolean query trees to compact proposition strings and back.
//!
//! ```
//! use proposition::{field, format, parse, NoFieldTypes, RuleGroup};
//!
//! let tree = RuleGroup::or([field("age").gte(18_i64), field("name").begins_with("Jo")]);
//! let text = format(&tree, &NoFieldTypes);
//! assert_eq!(text, "or(gte(age,18),like(name,'Jo%'))");
//! assert_eq!(parse(&text).unwrap(), tree);
//! ```

mod format;
mod parse;
pub mod split;
mod types;

pub use format::{format, format_group, format_rule, format_value};
pub use parse::{
    Function, FunctionInfo, OperandRole, OperandType, ParseError, lookup_function,
    operand_type, parse, parse_group,
};
pub use types::{
    Combinator, FieldRule, FieldTypeMap, FieldTypes, InputType, Node, NoFieldTypes, Operator,
    Rule, RuleGroup, Value, ValueSource, field,
};
