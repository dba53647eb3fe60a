#![cfg(feature = "serde")]

use proposition::{Node, RuleGroup, field, parse};

#[test]
fn tree_to_json_and_back() {
    let tree = parse("not(or(eq(a,1),like(b,'x%'),lt(c,d)))").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: RuleGroup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn json_shape() {
    let tree = !RuleGroup::or([
        Node::from(field("age").gte(18_i64)),
        Node::from(field("name").is_null()),
    ]);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "combinator": "or",
            "not": true,
            "rules": [
                {
                    "field": "age",
                    "operator": "greater-than-equal",
                    "value": 18,
                    "valueSource": "value"
                },
                {
                    "field": "name",
                    "operator": "is-null",
                    "value": null,
                    "valueSource": "value"
                }
            ]
        })
    );
}

#[test]
fn rule_from_builder_json() {
    let json = r#"{
        "combinator": "and",
        "rules": [
            { "field": "tags", "operator": "in", "value": ["x", 2] },
            { "field": "start", "operator": "less-than", "value": "end", "valueSource": "field" }
        ]
    }"#;
    let tree: RuleGroup = serde_json::from_str(json).unwrap();
    assert!(!tree.negated);
    assert_eq!(tree.to_string(), "and(in(tags,'x',2),lt(start,end))");
}
