//! Top-level declarations, parameter lists and types.

use gocpp_ir::{Field, FieldList, FuncDecl, Item, TypeExpr};
use tree_sitter::Node;

use super::{field_children, named_children, node_span, Lowerer};

impl Lowerer<'_> {
    pub(super) fn lower_item(&self, node: Node<'_>) -> Item {
        match node.kind() {
            "function_declaration" => match self.lower_func(node) {
                Some(func) => Item::Func(func),
                None => Item::Other {
                    kind: node.kind(),
                    span: node_span(node),
                },
            },
            kind => Item::Other {
                kind,
                span: node_span(node),
            },
        }
    }

    fn lower_func(&self, node: Node<'_>) -> Option<FuncDecl> {
        let name = self.ident(node.child_by_field_name("name")?);
        let params = self.lower_field_list(node.child_by_field_name("parameters")?);
        let results = node
            .child_by_field_name("result")
            .map(|result| self.lower_result(result));
        let body = node
            .child_by_field_name("body")
            .map(|body| self.lower_block(body));
        Some(FuncDecl {
            name,
            params,
            results,
            body,
            span: node_span(node),
        })
    }

    /// `(a, b int, c string)`; the list span includes the parentheses.
    pub(super) fn lower_field_list(&self, node: Node<'_>) -> FieldList {
        let fields = named_children(node)
            .into_iter()
            .map(|decl| self.lower_field(decl))
            .collect();
        FieldList {
            fields,
            span: node_span(node),
        }
    }

    /// A result is either a parenthesized list or a bare type.
    fn lower_result(&self, node: Node<'_>) -> FieldList {
        if node.kind() == "parameter_list" {
            return self.lower_field_list(node);
        }
        let span = node_span(node);
        FieldList {
            fields: vec![Field {
                names: Vec::new(),
                ty: self.lower_type(node),
                span,
            }],
            span,
        }
    }

    fn lower_field(&self, node: Node<'_>) -> Field {
        let span = node_span(node);
        let names = field_children(node, "name")
            .into_iter()
            .map(|name| self.ident(name))
            .collect();
        let ty = match node.kind() {
            "parameter_declaration" => node
                .child_by_field_name("type")
                .map_or(TypeExpr::Unsupported(span), |ty| self.lower_type(ty)),
            // `...T` has no C++ counterpart in this translator.
            _ => TypeExpr::Unsupported(span),
        };
        Field { names, ty, span }
    }

    pub(super) fn lower_type(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::Named(self.ident(node)),
            _ => TypeExpr::Unsupported(node_span(node)),
        }
    }
}
