mod field_types;
mod group;
mod operator;
mod rule;
mod value;

pub use field_types::{FieldTypeMap, FieldTypes, InputType, NoFieldTypes};
pub use group::{Node, RuleGroup};
pub use operator::{Combinator, Operator};
pub use rule::{FieldRule, Rule, ValueSource, field};
pub use value::Value;
pub(crate) use value::quote;
