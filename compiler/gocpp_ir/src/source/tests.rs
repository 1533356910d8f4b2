use super::*;
use pretty_assertions::assert_eq;

const SRC: &str = "package main\n\nfunc Add(a int, b int) int {\n\treturn a + b\n}\n";

#[test]
fn slice_returns_exact_text() {
    let src = SourceText::new(SRC);
    let start = u32::try_from(SRC.find("a + b").unwrap()).unwrap();
    assert_eq!(src.slice(Span::new(start, start + 5)), "a + b");
}

#[test]
fn text_of_uses_node_span() {
    let src = SourceText::new(SRC);
    let start = u32::try_from(SRC.find("Add").unwrap()).unwrap();
    let ident = crate::Ident::new("Add", Span::new(start, start + 3));
    assert_eq!(src.text_of(&ident), "Add");
}

#[test]
#[should_panic(expected = "not a valid range")]
fn slice_out_of_range_panics() {
    let src = SourceText::new("abc");
    let _ = src.slice(Span::new(1, 10));
}

#[test]
#[should_panic(expected = "not a valid range")]
fn slice_inside_multibyte_char_panics() {
    let src = SourceText::new("x := \"é\"");
    // `é` occupies bytes 6..8.
    let _ = src.slice(Span::new(6, 7));
}

#[test]
fn line_col_is_one_based() {
    let src = SourceText::new(SRC);
    assert_eq!(src.line_col(0), (1, 1));
    let ret = u32::try_from(SRC.find("return").unwrap()).unwrap();
    assert_eq!(src.line_col(ret), (4, 2));
}

#[test]
fn line_col_counts_characters() {
    let table = LineOffsetTable::build("é = 1\nb");
    assert_eq!(table.offset_to_line_col("é = 1\nb", 3), (1, 3));
    assert_eq!(table.offset_to_line_col("é = 1\nb", 7), (2, 1));
}
