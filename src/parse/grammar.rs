use log::trace;

use super::alias::{Function, lookup_function};
use super::error::{OperandRole, ParseError};
use super::operand::{Operand, OperandType};
use super::{ARGUMENTS, CALL};
use crate::{Combinator, Node, Operator, Rule, RuleGroup, Value, ValueSource};

// -- Entry ------------------------------------------------------------------

pub(super) fn parse_root(text: &str, default: Combinator) -> Result<RuleGroup, ParseError> {
    match parse_node(text, default)? {
        Node::Group(group) => Ok(group),
        Node::Rule(rule) => Ok(RuleGroup::new(default, vec![Node::Rule(rule)])),
    }
}

fn split_arguments(text: &str) -> Result<Vec<String>, ParseError> {
    let mut segments = ARGUMENTS.split(text, false)?;
    for segment in &mut segments {
        let trimmed = segment.trim();
        if trimmed.len() != segment.len() {
            *segment = trimmed.to_owned();
        }
    }
    Ok(segments)
}

/// A single term, or a bare list of terms joined by `default`.
fn parse_node(text: &str, default: Combinator) -> Result<Node, ParseError> {
    let segments = split_arguments(text)?;
    match segments.as_slice() {
        [] => Err(ParseError::Empty),
        [single] => parse_term(single, default),
        many => {
            let rules = parse_all(many, default)?;
            Ok(Node::Group(RuleGroup::new(default, rules)))
        }
    }
}

fn parse_all(args: &[String], default: Combinator) -> Result<Vec<Node>, ParseError> {
    args.iter().map(|arg| parse_node(arg, default)).collect()
}

// -- Calls ------------------------------------------------------------------

fn parse_term(term: &str, default: Combinator) -> Result<Node, ParseError> {
    if term.is_empty() {
        return Err(ParseError::Empty);
    }
    if !term.contains('(') {
        return Err(ParseError::MalformedTerm {
            term: term.to_owned(),
        });
    }

    let [name, args_text, rest] = CALL.split(term);
    if !rest.trim().is_empty() {
        return Err(ParseError::MalformedTerm {
            term: term.to_owned(),
        });
    }

    let name = name.trim();
    let info = lookup_function(name).ok_or_else(|| ParseError::UnknownFunction {
        name: name.to_owned(),
    })?;
    let args = split_arguments(args_text)?;
    trace!("{name} resolves to {:?} with {} arguments", info.function, args.len());

    let connector = info.connector.unwrap_or(default);
    match info.function {
        Function::Conjunction | Function::InclusiveDisjunction | Function::ExclusiveDisjunction => {
            require_some(name, &args)?;
            let rules = parse_all(&args, connector)?;
            Ok(Node::Group(RuleGroup::new(connector, rules)))
        }
        Function::Complement => complement(name, &args, connector),
        Function::In => build_in(name, &args).map(Node::Rule),
        Function::Equal
        | Function::NotEqual
        | Function::GreaterThan
        | Function::GreaterThanEqual
        | Function::LessThan
        | Function::LessThanEqual
        | Function::Like => compare(name, info.function, &args, connector),
    }
}

fn wrong_arity(name: &str, min: usize, got: usize) -> ParseError {
    ParseError::WrongArity {
        name: name.to_owned(),
        min,
        got,
    }
}

fn require_some(name: &str, args: &[String]) -> Result<(), ParseError> {
    if args.is_empty() {
        return Err(wrong_arity(name, 1, 0));
    }
    Ok(())
}

/// `not(x)` negates the group `x` parses to, or wraps a leaf rule in a negated
/// group. Several arguments become children of one negated group.
fn complement(name: &str, args: &[String], connector: Combinator) -> Result<Node, ParseError> {
    require_some(name, args)?;
    let group = match args {
        [single] => match parse_node(single, connector)? {
            Node::Group(group) => group,
            Node::Rule(rule) => RuleGroup::new(connector, vec![Node::Rule(rule)]),
        },
        many => RuleGroup::new(connector, parse_all(many, connector)?),
    };
    Ok(Node::Group(group.negate()))
}

/// Two arguments make one rule. More fan out into one rule per value, all
/// against the first argument, joined by `connector`.
fn compare(
    name: &str,
    function: Function,
    args: &[String],
    connector: Combinator,
) -> Result<Node, ParseError> {
    match args {
        [left, right] => build_rule(function, left, right).map(Node::Rule),
        [left, values @ ..] if !values.is_empty() => {
            let rules = values
                .iter()
                .map(|value| build_rule(function, left, value).map(Node::Rule))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Group(RuleGroup::new(connector, rules)))
        }
        _ => Err(wrong_arity(name, 2, args.len())),
    }
}

fn build_in(name: &str, args: &[String]) -> Result<Rule, ParseError> {
    let [field, values @ ..] = args else {
        return Err(wrong_arity(name, 2, 0));
    };
    if values.is_empty() {
        return Err(wrong_arity(name, 2, 1));
    }

    let field = Operand::classify(field)?;
    if !field.is_variable() {
        return Err(ParseError::InvalidOperandType {
            operand: field.raw.to_owned(),
            role: OperandRole::Field,
        });
    }

    let values = values
        .iter()
        .map(|raw| {
            let operand = Operand::classify(raw)?;
            if operand.is_variable() {
                return Err(ParseError::InvalidOperandType {
                    operand: operand.raw.to_owned(),
                    role: OperandRole::Value,
                });
            }
            operand.literal()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Rule::new(field.raw, Operator::In, Value::Array(values)))
}

// -- Leaves -----------------------------------------------------------------

/// Decide which operand is the field.
///
/// A field reference on the left wins, then one on the right (the comparison
/// is mirrored). With no field reference on either side the right operand's
/// text is taken as the field name, unless it is quoted or `null`. Quoted
/// strings and `null` never name a field.
fn assign_roles<'a>(
    left: Operand<'a>,
    right: Operand<'a>,
) -> Result<(&'a str, Operand<'a>, bool), ParseError> {
    if left.is_variable() {
        return Ok((left.raw, right, false));
    }
    if right.is_variable() {
        return Ok((right.raw, left, true));
    }
    match (left.kind, right.kind) {
        (
            OperandType::String | OperandType::Null,
            OperandType::String | OperandType::Null,
        ) => Err(ParseError::InvalidOperandType {
            operand: right.raw.to_owned(),
            role: OperandRole::Field,
        }),
        (_, OperandType::String | OperandType::Null) => Ok((left.raw, right, false)),
        _ => Ok((right.raw, left, true)),
    }
}

fn comparison(function: Function) -> Operator {
    match function {
        Function::NotEqual => Operator::NotEqual,
        Function::GreaterThan => Operator::GreaterThan,
        Function::GreaterThanEqual => Operator::GreaterThanEqual,
        Function::LessThan => Operator::LessThan,
        Function::LessThanEqual => Operator::LessThanEqual,
        _ => Operator::Equal,
    }
}

fn build_rule(function: Function, left: &str, right: &str) -> Result<Rule, ParseError> {
    let left = Operand::classify(left)?;
    let right = Operand::classify(right)?;
    let (field, other, mirrored) = assign_roles(left, right)?;

    let value = other.literal()?;
    let value_source = if other.is_variable() {
        ValueSource::Field
    } else {
        ValueSource::Value
    };

    let operator = match (function, &value) {
        (Function::Equal, Value::Null) => Operator::IsNull,
        (Function::NotEqual, Value::Null) => Operator::IsNotNull,
        (_, Value::Null) => {
            return Err(ParseError::InvalidOperandType {
                operand: other.raw.to_owned(),
                role: OperandRole::Value,
            });
        }
        (Function::Like, Value::String(pattern)) if value_source == ValueSource::Value => {
            let (operator, stripped) = decompose_like(pattern);
            return Ok(Rule::new(field, operator, stripped));
        }
        (function, _) if mirrored => comparison(function).mirrored(),
        (function, _) => comparison(function),
    };

    Ok(Rule {
        field: field.to_owned(),
        operator,
        value,
        value_source,
    })
}

/// Map `%` wildcards at either end of a `like` pattern to an operator.
fn decompose_like(pattern: &str) -> (Operator, &str) {
    let (leading, rest) = match pattern.strip_prefix('%') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };
    let (trailing, core) = match rest.strip_suffix('%') {
        Some(core) => (true, core),
        None => (false, rest),
    };
    let operator = match (leading, trailing) {
        (true, true) => Operator::Contains,
        (false, true) => Operator::BeginsWith,
        (true, false) => Operator::EndsWith,
        (false, false) => Operator::Equal,
    };
    (operator, core)
}

#[cfg(test)]
mod tests {
    use crate::parse::{parse, parse_group};

    use super::*;

    fn single_rule(text: &str) -> Rule {
        let tree = parse(text).unwrap();
        assert_eq!(tree.len(), 1, "expected one child for {text}");
        tree.rules[0].as_rule().cloned().unwrap()
    }

    #[test]
    fn parse_single_rule() {
        let rule = single_rule("eq(a,1)");
        assert_eq!(rule, Rule::new("a", Operator::Equal, 1_i64));
    }

    #[test]
    fn all_comparison_functions() {
        let ops = [
            ("eq", Operator::Equal),
            ("neq", Operator::NotEqual),
            ("gt", Operator::GreaterThan),
            ("gte", Operator::GreaterThanEqual),
            ("lt", Operator::LessThan),
            ("lte", Operator::LessThanEqual),
        ];
        for (name, expected) in ops {
            let rule = single_rule(&format!("{name}(x,1)"));
            assert_eq!(rule.operator, expected, "failed for {name}");
        }
    }

    #[test]
    fn mirrored_comparison() {
        let rule = single_rule("gt(5,a)");
        assert_eq!(rule, Rule::new("a", Operator::LessThan, 5_i64));
    }

    #[test]
    fn field_against_field() {
        let rule = single_rule("lt(start,end)");
        assert_eq!(rule, Rule::against_field("start", Operator::LessThan, "end"));
    }

    #[test]
    fn both_literals_bias_right() {
        let rule = single_rule("eq(1,2)");
        assert_eq!(rule, Rule::new("2", Operator::Equal, 1_i64));
    }

    #[test]
    fn both_literals_quoted_right() {
        let rule = single_rule("eq(1,'x')");
        assert_eq!(rule, Rule::new("1", Operator::Equal, "x"));
    }

    #[test]
    fn both_strings_fail() {
        let err = parse("eq('a','b')").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidOperandType {
                role: OperandRole::Field,
                ..
            }
        ));
    }

    #[test]
    fn null_becomes_null_operator() {
        assert_eq!(single_rule("eq(a,null)").operator, Operator::IsNull);
        assert_eq!(single_rule("neq(a,null)").operator, Operator::IsNotNull);
        assert_eq!(single_rule("eq(null,a)").operator, Operator::IsNull);
        assert_eq!(single_rule("eq(a,)").operator, Operator::IsNull);
    }

    #[test]
    fn null_operands_never_name_a_field() {
        let cases = [("eq(,)", ""), ("eq(null,null)", "null"), ("eq(null,'x')", "'x'")];
        for (text, operand) in cases {
            assert_eq!(
                parse(text).unwrap_err(),
                ParseError::InvalidOperandType {
                    operand: operand.into(),
                    role: OperandRole::Field,
                },
                "failed for {text}"
            );
        }
    }

    #[test]
    fn null_beside_a_literal_field() {
        assert_eq!(single_rule("eq(2,null)"), Rule::new("2", Operator::IsNull, Value::Null));
        assert_eq!(single_rule("eq(null,2)"), Rule::new("2", Operator::IsNull, Value::Null));
        assert_eq!(single_rule("neq(1.5,)"), Rule::new("1.5", Operator::IsNotNull, Value::Null));
    }

    #[test]
    fn null_with_ordering_fails() {
        let err = parse("gt(a,null)").unwrap_err();
        assert!(matches!(err, ParseError::InvalidOperandType { .. }));
    }

    #[test]
    fn like_wildcards() {
        let cases = [
            ("like(a,'%x%')", Operator::Contains),
            ("like(a,'x%')", Operator::BeginsWith),
            ("like(a,'%x')", Operator::EndsWith),
            ("like(a,'x')", Operator::Equal),
        ];
        for (text, expected) in cases {
            assert_eq!(single_rule(text), Rule::new("a", expected, "x"), "failed for {text}");
        }
    }

    #[test]
    fn like_against_field_is_equality() {
        let rule = single_rule("like(a,b)");
        assert_eq!(rule, Rule::against_field("a", Operator::Equal, "b"));
    }

    #[test]
    fn decompose_edge_cases() {
        assert_eq!(decompose_like("%"), (Operator::EndsWith, ""));
        assert_eq!(decompose_like("%%"), (Operator::Contains, ""));
        assert_eq!(decompose_like("a%b"), (Operator::Equal, "a%b"));
    }

    #[test]
    fn in_collects_values() {
        let rule = single_rule("in(status,'open','closed',3)");
        assert_eq!(rule.operator, Operator::In);
        assert_eq!(
            rule.value,
            Value::Array(vec![Value::from("open"), Value::from("closed"), Value::Int(3)])
        );
    }

    #[test]
    fn in_requires_field_first() {
        let err = parse("in(1,2)").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidOperandType {
                role: OperandRole::Field,
                ..
            }
        ));
    }

    #[test]
    fn in_rejects_field_values() {
        let err = parse("in(a,b)").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidOperandType {
                role: OperandRole::Value,
                ..
            }
        ));
    }

    #[test]
    fn fan_out_inherits_default_combinator() {
        let tree = parse("eq(a,1,2)").unwrap();
        assert_eq!(tree.combinator, Combinator::And);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn fan_out_uses_alias_connector() {
        let tree = parse("eqor(a,1,2)").unwrap();
        assert_eq!(tree.combinator, Combinator::Or);
        assert_eq!(
            tree.rules,
            vec![
                Node::Rule(Rule::new("a", Operator::Equal, 1_i64)),
                Node::Rule(Rule::new("a", Operator::Equal, 2_i64)),
            ]
        );
    }

    #[test]
    fn connectors_build_groups() {
        let tree = parse("or(eq(a,1),and(eq(b,2),eq(c,3)))").unwrap();
        assert_eq!(tree.combinator, Combinator::Or);
        let inner = tree.rules[1].as_group().unwrap();
        assert_eq!(inner.combinator, Combinator::And);
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn nested_fan_out_inherits_connector() {
        let tree = parse("or(eq(a,1,2))").unwrap();
        let inner = tree.rules[0].as_group().unwrap();
        assert_eq!(inner.combinator, Combinator::Or);
    }

    #[test]
    fn not_negates_group() {
        let tree = parse("not(or(eq(a,1),eq(b,2)))").unwrap();
        assert!(tree.negated);
        assert_eq!(tree.combinator, Combinator::Or);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn not_wraps_rule() {
        let tree = parse("not(eq(a,1))").unwrap();
        assert!(tree.negated);
        assert_eq!(tree.len(), 1);
        assert!(tree.rules[0].as_rule().is_some());
    }

    #[test]
    fn double_negation_cancels() {
        let tree = parse("not(not(and(eq(a,1),eq(b,2))))").unwrap();
        assert!(!tree.negated);
    }

    #[test]
    fn not_with_many_arguments() {
        let tree = parse("notor(eq(a,1),eq(b,2))").unwrap();
        assert!(tree.negated);
        assert_eq!(tree.combinator, Combinator::Or);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn bare_list_uses_default() {
        let tree = parse_group("eq(a,1),eq(b,2)", Combinator::Xor).unwrap();
        assert_eq!(tree.combinator, Combinator::Xor);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let rule = single_rule("  eq ( a , 'x y' ) ");
        assert_eq!(rule, Rule::new("a", Operator::Equal, "x y"));
    }

    #[test]
    fn arity_errors() {
        assert_eq!(
            parse("eq(a)").unwrap_err(),
            ParseError::WrongArity {
                name: "eq".into(),
                min: 2,
                got: 1,
            }
        );
        assert_eq!(
            parse("and()").unwrap_err(),
            ParseError::WrongArity {
                name: "and".into(),
                min: 1,
                got: 0,
            }
        );
        assert!(matches!(
            parse("in(a)").unwrap_err(),
            ParseError::WrongArity { got: 1, .. }
        ));
        assert!(matches!(
            parse("not()").unwrap_err(),
            ParseError::WrongArity { got: 0, .. }
        ));
    }

    #[test]
    fn malformed_terms() {
        assert!(matches!(
            parse("eq").unwrap_err(),
            ParseError::MalformedTerm { .. }
        ));
        assert!(matches!(
            parse("eq(a,1)x").unwrap_err(),
            ParseError::MalformedTerm { .. }
        ));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(parse("").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("eq(a,1),").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("and(eq(a,1),)").unwrap_err(), ParseError::Empty);
    }
}
