use proposition::{field, parse, Node, NoFieldTypes, RuleGroup};

fn main() {
    // Build a tree the way a rule-builder UI would
    let tree = RuleGroup::and([
        Node::from(field("user.age").gte(18_i64)),
        Node::from(field("user.status").eq("active")),
        Node::from(!RuleGroup::or([
            field("user.region").eq("embargoed"),
            field("user.email").ends_with("@example.invalid"),
        ])),
    ]);

    let text = proposition::format(&tree, &NoFieldTypes);
    println!("proposition: {text}");

    // Ship it as a query parameter, then parse it back on the other side
    let parsed = parse(&text).expect("formatter output always parses");
    assert_eq!(parsed, tree);

    for rule in parsed.leaves() {
        println!("  {} {} {}", rule.field, rule.operator, rule.value);
    }
}
