//! Lowering from the tree-sitter concrete syntax tree to `gocpp_ir`.
//!
//! One method per node family, mirroring the grammar: items, statements,
//! expressions and types. Node kinds the translator does not model become
//! `Unsupported` nodes carrying their byte span.

mod expr;
mod item;
mod stmt;

use gocpp_ir::{Ident, SourceFile, Span};
use tree_sitter::Node;

/// Span of a tree-sitter node.
#[expect(
    clippy::cast_possible_truncation,
    reason = "parse() rejects sources longer than u32::MAX bytes"
)]
pub(crate) fn node_span(node: Node<'_>) -> Span {
    Span::new(node.start_byte() as u32, node.end_byte() as u32)
}

/// Named children, skipping comments.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// All children for a (possibly repeated) field.
fn field_children<'tree>(node: Node<'tree>, field: &str) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.children_by_field_name(field, &mut cursor).collect()
}

pub(crate) struct Lowerer<'src> {
    source: &'src str,
}

impl<'src> Lowerer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Lowerer { source }
    }

    /// Source text of a node.
    fn text(&self, node: Node<'_>) -> &'src str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    fn ident(&self, node: Node<'_>) -> Ident {
        Ident::new(self.text(node), node_span(node))
    }

    pub(crate) fn lower_file(&self, root: Node<'_>) -> SourceFile {
        let items = named_children(root)
            .into_iter()
            .map(|node| self.lower_item(node))
            .collect();
        SourceFile {
            items,
            span: node_span(root),
        }
    }
}
