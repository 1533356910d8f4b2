//! Parser collaborator for the Go to C++ translator.
//!
//! Go source is parsed with tree-sitter and the concrete syntax tree is
//! lowered into the closed [`gocpp_ir`] sum types. Lowering never fails on
//! constructs outside the supported subset: they become `Unsupported(Span)`
//! nodes so the translator can report the exact original text. Only genuine
//! syntax errors are reported here.

mod error;
mod lower;

pub use error::ParseError;

use gocpp_ir::SourceFile;
use gocpp_stack::ensure_sufficient_stack;
use tree_sitter::{Node, Parser};

/// Parse Go source text into a [`SourceFile`].
///
/// Every span in the result indexes into `source`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<SourceFile, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::SourceTooLarge { len: source.len() });
    }

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ParseError::Language(e.to_string()))?;
    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let bad = first_error(root).unwrap_or(root);
        let span = lower::node_span(bad);
        if bad.is_missing() {
            return Err(ParseError::Missing {
                span,
                expected: bad.kind().to_string(),
            });
        }
        let text = source.get(span.to_range()).unwrap_or_default().to_string();
        return Err(ParseError::Syntax { span, text });
    }

    let file = lower::Lowerer::new(source).lower_file(root);
    tracing::debug!(items = file.items.len(), "lowered source file");
    Ok(file)
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    ensure_sufficient_stack(|| {
        children
            .into_iter()
            .filter(Node::has_error)
            .find_map(first_error)
    })
}
