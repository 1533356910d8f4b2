//! Per-declaration translation state.

use gocpp_ir::{SourceText, Spanned};

use crate::{DegradeReason, Degradation, TranslateOptions};

/// State for translating one function declaration.
///
/// Holds a read-only borrow of the source buffer and collects degradations.
/// A new `Translator` is created for every declaration, so nothing is shared
/// between declarations.
pub struct Translator<'a, 'src> {
    pub(crate) src: &'a SourceText<'src>,
    pub(crate) options: TranslateOptions,
    degradations: Vec<Degradation>,
}

impl<'a, 'src> Translator<'a, 'src> {
    pub fn new(src: &'a SourceText<'src>, options: TranslateOptions) -> Self {
        Translator {
            src,
            options,
            degradations: Vec::new(),
        }
    }

    /// Original text of a node, owned for embedding in an error.
    pub(crate) fn text_of<N: Spanned + ?Sized>(&self, node: &N) -> String {
        self.src.text_of(node).to_string()
    }

    pub(crate) fn degrade<N: Spanned + ?Sized>(&mut self, node: &N, reason: DegradeReason) {
        tracing::trace!(?reason, span = %node.span(), "degraded translation");
        self.degradations.push(Degradation {
            reason,
            text: self.text_of(node),
            span: node.span(),
        });
    }

    pub(crate) fn take_degradations(&mut self) -> Vec<Degradation> {
        std::mem::take(&mut self.degradations)
    }
}
