use std::env;

use proposition::{parse, NoFieldTypes};

/// Parse each argument and print its canonical form, or the error.
fn main() {
    let inputs: Vec<String> = env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec![
            "=|(status,'open','pending')".to_owned(),
            "&(>=(age,18),~(name,'Jo%'))".to_owned(),
            "not(not(eq(a,1)))".to_owned(),
            "gt(5,score)".to_owned(),
            "eq(a,'unterminated)".to_owned(),
        ]
    } else {
        inputs
    };

    for input in &inputs {
        match parse(input) {
            Ok(tree) => println!("{input}\n  => {}", proposition::format(&tree, &NoFieldTypes)),
            Err(err) => println!("{input}\n  !! {err}"),
        }
    }
}
