use super::*;
use gocpp_ir::{Ident, Span};
use pretty_assertions::assert_eq;

fn named(source: &str) -> TypeExpr {
    let end = u32::try_from(source.len()).unwrap();
    TypeExpr::Named(Ident::new(source, Span::new(0, end)))
}

const MAPPINGS: [(&str, &str); 14] = [
    ("int8", "signed char"),
    ("int16", "short int"),
    ("int32", "long int"),
    ("int64", "long long int"),
    ("int", "long long int"),
    ("uint8", "unsigned char"),
    ("byte", "unsigned char"),
    ("uint16", "unsigned short int"),
    ("uint32", "unsigned long int"),
    ("uint64", "unsigned long long int"),
    ("uint", "unsigned long long int"),
    ("bool", "bool"),
    ("string", "QString"),
    ("rune", "QChar"),
];

#[test]
fn every_recognized_name_maps() {
    for (go, cpp) in MAPPINGS {
        let src = SourceText::new(go);
        assert_eq!(map_type(&named(go), &src), Ok(cpp), "{go}");
    }
}

#[test]
fn mapping_is_stable() {
    for (name, _) in MAPPINGS {
        let src = SourceText::new(name);
        let first = map_type(&named(name), &src);
        let second = map_type(&named(name), &src);
        assert!(first.is_ok());
        assert_eq!(first, second);
    }
}

#[test]
fn unknown_identifier_fails() {
    for name in ["float64", "error", "MyType", "Int", "complex128"] {
        let src = SourceText::new(name);
        assert!(
            matches!(
                map_type(&named(name), &src),
                Err(TranslateError::UnknownPrimitiveType { name: ref n, .. }) if n == name
            ),
            "{name}"
        );
    }
}

#[test]
fn non_identifier_shape_reports_original_text() {
    let src = SourceText::new("func f(p *int)");
    let ty = TypeExpr::Unsupported(Span::new(9, 13));
    assert_eq!(
        map_type(&ty, &src),
        Err(TranslateError::UnsupportedTypeShape {
            text: "*int".to_string(),
            span: Span::new(9, 13),
        })
    );
}
