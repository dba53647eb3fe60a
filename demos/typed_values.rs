use proposition::{field, format, FieldTypeMap, InputType, RuleGroup};

fn main() {
    let types: FieldTypeMap = [
        ("born", "date"),
        ("opens", "time"),
        ("updated", "datetime-local"),
        ("price", "number"),
        ("active", "checkbox"),
    ]
    .into_iter()
    .filter_map(|(name, ty)| Some((name, InputType::from_name(ty)?)))
    .collect();

    let tree = RuleGroup::and([
        field("born").between("1990-01-01", "1999-12-31T23:59:59Z"),
        field("opens").lt("08:30"),
        field("updated").gte("2024-06-01 12:00:00.25"),
        field("price").lte("19.99 EUR"),
        field("active").eq(true),
    ]);

    println!("untyped: {tree}");
    println!("typed:   {}", format(&tree, &types));
}
