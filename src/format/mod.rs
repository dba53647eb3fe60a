//! [`RuleGroup`] trees to proposition text.

mod value;

use std::fmt;

use log::debug;

pub use value::format_value;
use value::render;

use crate::parse::{Function, OperandType, operand_type};
use crate::types::quote;
use crate::{
    Combinator, FieldTypes, Node, NoFieldTypes, Operator, Rule, RuleGroup, Value, ValueSource,
};

/// Format a rule tree as a proposition.
///
/// `types` is consulted only to decide how values are rendered; fields it has
/// no type for render their values by kind.
///
/// # Example
///
/// ```
/// use proposition::{field, format, NoFieldTypes, RuleGroup};
///
/// let tree = RuleGroup::and([field("a").between(1_i64, 10_i64)]);
/// assert_eq!(format(&tree, &NoFieldTypes), "and(gte(a,1),lte(a,10))");
/// ```
#[must_use]
pub fn format<T: FieldTypes + ?Sized>(tree: &RuleGroup, types: &T) -> String {
    debug!("formatting rule tree with {} top-level children", tree.len());
    format_group(tree, types)
}

/// Format a group as `combinator(children)`. A single child is emitted without
/// the wrapper; `not(...)` is applied last.
#[must_use]
pub fn format_group<T: FieldTypes + ?Sized>(group: &RuleGroup, types: &T) -> String {
    let body = match group.rules.as_slice() {
        [single] => format_node(single, types),
        rules => {
            let children: Vec<String> =
                rules.iter().map(|node| format_node(node, types)).collect();
            format!("{}({})", group.combinator.name(), children.join(","))
        }
    };
    if group.negated {
        negate(&body)
    } else {
        body
    }
}

fn format_node<T: FieldTypes + ?Sized>(node: &Node, types: &T) -> String {
    match node {
        Node::Rule(rule) => format_rule(rule, types),
        Node::Group(group) => format_group(group, types),
    }
}

fn negate(body: &str) -> String {
    format!("{}({body})", Function::Complement.name())
}

fn call(function: Function, left: &str, right: &str) -> String {
    format!("{}({left},{right})", function.name())
}

/// Format one rule as a function call.
#[must_use]
pub fn format_rule<T: FieldTypes + ?Sized>(rule: &Rule, types: &T) -> String {
    match rule.operator {
        Operator::Equal
        | Operator::NotEqual
        | Operator::GreaterThan
        | Operator::GreaterThanEqual
        | Operator::LessThan
        | Operator::LessThanEqual => compare(rule, rule.operator, &format_value(rule, types)),
        Operator::Contains => like(rule, "%", "%"),
        Operator::BeginsWith => like(rule, "", "%"),
        Operator::EndsWith => like(rule, "%", ""),
        Operator::DoesNotContain => negate(&like(rule, "%", "%")),
        Operator::DoesNotBeginWith => negate(&like(rule, "", "%")),
        Operator::DoesNotEndWith => negate(&like(rule, "%", "")),
        Operator::IsNull => compare(rule, Operator::Equal, "null"),
        Operator::IsNotNull => compare(rule, Operator::NotEqual, "null"),
        Operator::In => call(Function::In, &rule.field, &format_value(rule, types)),
        Operator::NotIn => negate(&call(Function::In, &rule.field, &format_value(rule, types))),
        Operator::Between => {
            range(rule, types, Function::GreaterThanEqual, Function::LessThanEqual)
        }
        Operator::NotBetween => range(rule, types, Function::LessThan, Function::GreaterThan),
    }
}

fn comparison_function(operator: Operator) -> Function {
    match operator {
        Operator::NotEqual => Function::NotEqual,
        Operator::GreaterThan => Function::GreaterThan,
        Operator::GreaterThanEqual => Function::GreaterThanEqual,
        Operator::LessThan => Function::LessThan,
        Operator::LessThanEqual => Function::LessThanEqual,
        _ => Function::Equal,
    }
}

/// A field that does not read as a variable is taken from the right-hand
/// operand when parsed, so it is emitted there with the operator mirrored.
fn compare(rule: &Rule, operator: Operator, value: &str) -> String {
    if operand_type(&rule.field) == OperandType::Variable {
        call(comparison_function(operator), &rule.field, value)
    } else {
        call(comparison_function(operator.mirrored()), value, &rule.field)
    }
}

/// `like(field,'<prefix>value<suffix>')`. A field reference cannot carry
/// wildcards and is emitted bare.
fn like(rule: &Rule, prefix: &str, suffix: &str) -> String {
    let pattern = match rule.value_source {
        ValueSource::Field => rule.value.to_text(),
        ValueSource::Value => quote(&format!("{prefix}{}{suffix}", rule.value.to_text())),
    };
    call(Function::Like, &rule.field, &pattern)
}

/// Expand a two-bound range into `and(lower(field,lo),upper(field,hi))`.
/// Missing bounds render as `null`.
fn range<T: FieldTypes + ?Sized>(
    rule: &Rule,
    types: &T,
    lower: Function,
    upper: Function,
) -> String {
    let input_type = types.input_type(&rule.field);
    let (low, high) = match &rule.value {
        Value::Array(items) => (items.first(), items.get(1)),
        single => (Some(single), None),
    };
    let bound = |value: Option<&Value>| match value {
        Some(value) => render(value, rule.value_source, input_type),
        None => Value::Null.to_string(),
    };
    format!(
        "{}({},{})",
        Combinator::And.name(),
        call(lower, &rule.field, &bound(low)),
        call(upper, &rule.field, &bound(high)),
    )
}

impl fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_group(self, &NoFieldTypes))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rule(self, &NoFieldTypes))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_node(self, &NoFieldTypes))
    }
}
