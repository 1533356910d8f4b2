// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property tests over whole conversions.
//!
//! Literals and identifiers are copied verbatim, binary expressions keep
//! their operator, and a conversion never depends on the worker pool.

use gocppc::{convert_source, ConvertOptions};
use proptest::prelude::*;

fn returning(ret: &str, expr: &str) -> String {
    format!("package main\n\nfunc f(a int, b int) {ret} {{\n\treturn {expr}\n}}\n")
}

fn expected(ret: &str, expr: &str) -> String {
    format!("{ret} f(long long int a, long long int b) {{\nreturn {expr};\n}}\n")
}

fn int_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<u64>().prop_map(|n| n.to_string()),
        any::<u32>().prop_map(|n| format!("0x{n:X}")),
        any::<u16>().prop_map(|n| format!("0o{n:o}")),
        any::<u8>().prop_map(|n| format!("0b{n:b}")),
    ]
}

fn string_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ,.:;!?%-]{0,24}".prop_map(|s| format!("\"{s}\"")),
        "[a-zA-Z0-9 ]{0,24}".prop_map(|s| format!("`{s}`")),
    ]
}

const BINARY_OPS: [&str; 19] = [
    "+", "-", "*", "/", "%", "&", "|", "^", "<<", ">>", "&^", "&&", "||", "==", "!=", "<", "<=",
    ">", ">=",
];

proptest! {
    #[test]
    fn integer_literals_round_trip(lit in int_literal()) {
        let output = convert_source(&returning("int", &lit), &ConvertOptions::default()).unwrap();
        prop_assert_eq!(output.text, expected("long long int", &lit));
    }

    #[test]
    fn string_literals_round_trip(lit in string_literal()) {
        let output = convert_source(&returning("string", &lit), &ConvertOptions::default()).unwrap();
        prop_assert_eq!(output.text, expected("QString", &lit));
    }

    #[test]
    fn identifiers_round_trip(name in "v_[a-zA-Z0-9_]{0,12}") {
        let source = format!("package main\nfunc f() {{\n\t{name} := 1\n\t{name}++\n}}\n");
        let output = convert_source(&source, &ConvertOptions::default()).unwrap();
        prop_assert_eq!(output.text, format!("void f() {{\nauto {name} = 1;\n{name}++;\n}}\n"));
    }

    #[test]
    fn binary_operators_are_kept(index in 0..BINARY_OPS.len()) {
        let expr = format!("a {} b", BINARY_OPS[index]);
        let output = convert_source(&returning("int", &expr), &ConvertOptions::default()).unwrap();
        prop_assert_eq!(output.text, expected("long long int", &expr));
    }

    #[test]
    fn parallel_conversion_is_order_preserving(count in 1usize..24) {
        let mut source = String::from("package main\n");
        for i in 0..count {
            source.push_str(&format!("func f{i}() int {{\n\treturn {i}\n}}\n"));
        }
        let sequential = convert_source(&source, &ConvertOptions::default()).unwrap();
        let parallel = convert_source(&source, &ConvertOptions::default().with_parallel(true)).unwrap();
        prop_assert_eq!(parallel, sequential);
    }
}
