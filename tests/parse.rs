use proposition::{
    Combinator, Node, OperandRole, Operator, ParseError, Rule, RuleGroup, Value, field,
    parse, parse_group,
};

fn only_rule(tree: &RuleGroup) -> &Rule {
    assert_eq!(tree.len(), 1);
    tree.rules[0].as_rule().unwrap()
}

#[test]
fn aliases_resolve_to_the_same_rule() {
    let expected = field("age").gte(18_i64);
    for text in [
        "gte(age,18)",
        "ge(age,18)",
        "greaterequal(age,18)",
        ">=(age,18)",
        "GTE(age,18)",
    ] {
        let tree = parse(text).unwrap();
        assert_eq!(only_rule(&tree), &expected, "failed for {text}");
    }
}

#[test]
fn symbolic_connectors() {
    let tree = parse("|(=(a,1),&&(<(b,2),>(c,3)))").unwrap();
    assert_eq!(
        tree,
        RuleGroup::or([
            Node::from(field("a").eq(1_i64)),
            Node::from(RuleGroup::and([field("b").lt(2_i64), field("c").gt(3_i64)])),
        ])
    );
}

#[test]
fn word_connectors() {
    let tree = parse("any(eq(a,1),one(eq(b,2),eq(c,3)))").unwrap();
    assert_eq!(tree.combinator, Combinator::Or);
    assert_eq!(tree.rules[1].as_group().unwrap().combinator, Combinator::Xor);
}

#[test]
fn fan_out_with_suffixes() {
    let cases = [
        ("eqand(a,1,2)", Combinator::And),
        ("eqor(a,1,2)", Combinator::Or),
        ("eqxor(a,1,2)", Combinator::Xor),
        ("=&(a,1,2)", Combinator::And),
        ("=|(a,1,2)", Combinator::Or),
        ("=^(a,1,2)", Combinator::Xor),
    ];
    for (text, combinator) in cases {
        let tree = parse(text).unwrap();
        assert_eq!(
            tree,
            RuleGroup::new(
                combinator,
                vec![field("a").eq(1_i64).into(), field("a").eq(2_i64).into()]
            ),
            "failed for {text}"
        );
    }
}

#[test]
fn like_fan_out() {
    let tree = parse("likeor(name,'Jo%','%son')").unwrap();
    assert_eq!(
        tree,
        RuleGroup::or([field("name").begins_with("Jo"), field("name").ends_with("son")])
    );
}

#[test]
fn quoted_arguments_keep_delimiters() {
    let tree = parse(r"eq(a,'x,(y)'),eq(b,'it\'s'),eq(c,')')").unwrap();
    let values: Vec<&Value> = tree.leaves().map(|rule| &rule.value).collect();
    assert_eq!(
        values,
        [&Value::from("x,(y)"), &Value::from("it's"), &Value::from(")")]
    );
}

#[test]
fn double_quoted_strings() {
    let tree = parse(r#"eq(a,"say 'hi'")"#).unwrap();
    assert_eq!(only_rule(&tree), &field("a").eq("say 'hi'"));
}

#[test]
fn numeric_literals() {
    let tree = parse("eq(a,-3),eq(b,2.5),eq(c,1e3)").unwrap();
    let values: Vec<&Value> = tree.leaves().map(|rule| &rule.value).collect();
    assert_eq!(
        values,
        [&Value::Int(-3), &Value::Float(2.5), &Value::Float(1000.0)]
    );
}

#[test]
fn mirrored_operands() {
    let cases = [
        ("gt(1,a)", Operator::LessThan),
        ("gte(1,a)", Operator::LessThanEqual),
        ("lt(1,a)", Operator::GreaterThan),
        ("lte(1,a)", Operator::GreaterThanEqual),
        ("eq(1,a)", Operator::Equal),
        ("neq(1,a)", Operator::NotEqual),
    ];
    for (text, operator) in cases {
        let tree = parse(text).unwrap();
        assert_eq!(only_rule(&tree), &Rule::new("a", operator, 1_i64), "failed for {text}");
    }
}

#[test]
fn dotted_field_names() {
    let tree = parse("eq(user.address.city,'Oslo')").unwrap();
    assert_eq!(only_rule(&tree).field, "user.address.city");
}

#[test]
fn negated_in() {
    let tree = parse("not(in(status,'a','b'))").unwrap();
    assert!(tree.negated);
    assert_eq!(only_rule(&tree), &field("status").is_in(["a", "b"]));
}

#[test]
fn negated_like() {
    let tree = parse("not(like(name,'%x%'))").unwrap();
    assert!(tree.negated);
    assert_eq!(only_rule(&tree), &field("name").contains("x"));
}

#[test]
fn single_rule_wraps_in_default_group() {
    let tree = parse_group("eq(a,1)", Combinator::Or).unwrap();
    assert_eq!(tree, RuleGroup::or([field("a").eq(1_i64)]));
}

#[test]
fn unknown_function() {
    assert_eq!(
        parse("between(a,1,2)").unwrap_err(),
        ParseError::UnknownFunction {
            name: "between".into()
        }
    );
}

#[test]
fn unbalanced_input() {
    assert!(matches!(
        parse("and(eq(a,1)").unwrap_err(),
        ParseError::UnbalancedDelimiters(_)
    ));
    assert!(matches!(
        parse("eq(a,'x)").unwrap_err(),
        ParseError::UnbalancedDelimiters(_)
    ));
    assert!(matches!(
        parse("eq(a,1))").unwrap_err(),
        ParseError::UnbalancedDelimiters(_)
    ));
}

#[test]
fn nested_call_as_operand() {
    assert_eq!(
        parse("eq(a,eq(b,1))").unwrap_err(),
        ParseError::InvalidOperandType {
            operand: "eq(b,1)".into(),
            role: OperandRole::Value,
        }
    );
}

#[test]
fn error_messages() {
    let err = parse("eq(a)").unwrap_err();
    assert_eq!(err.to_string(), "function 'eq' takes at least 2 arguments, got 1");
    assert_eq!(
        parse("not()").unwrap_err(),
        ParseError::WrongArity {
            name: "not".into(),
            min: 1,
            got: 0,
        }
    );
    assert!(parse("eq(a,1,2,3)").is_ok());
}
