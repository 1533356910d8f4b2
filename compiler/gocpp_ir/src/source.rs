//! Source text reconstruction.
//!
//! The translator never re-prints nodes for diagnostics: it slices the exact
//! buffer the parser was given. Offsets come from the parser collaborator and
//! must lie on UTF-8 boundaries inside that buffer. A span that does not is an
//! internal invariant violation, not a user error, so [`SourceText::slice`]
//! panics instead of returning a `Result`.

use crate::{Span, Spanned};

/// Byte offset of every line start, for `line:column` rendering.
///
/// Built once per file; lookups are a binary search.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0] = 0`, `offsets[n]` = byte after the n-th `\n`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |s| s.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }
}

/// The original source buffer, borrowed for the duration of a translation.
#[derive(Clone, Debug)]
pub struct SourceText<'src> {
    text: &'src str,
    lines: LineOffsetTable,
}

impl<'src> SourceText<'src> {
    pub fn new(text: &'src str) -> Self {
        SourceText {
            text,
            lines: LineOffsetTable::build(text),
        }
    }

    /// The verbatim text covered by `span`.
    ///
    /// # Panics
    ///
    /// Panics if `span` is out of range or does not fall on UTF-8 character
    /// boundaries of this buffer.
    pub fn slice(&self, span: Span) -> &'src str {
        match self.text.get(span.to_range()) {
            Some(text) => text,
            None => panic!(
                "span {span} is not a valid range of the {}-byte source buffer",
                self.text.len()
            ),
        }
    }

    /// The verbatim text of a node.
    pub fn text_of<N: Spanned + ?Sized>(&self, node: &N) -> &'src str {
        self.slice(node.span())
    }

    /// 1-based `(line, column)` of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(self.text, offset)
    }
}

#[cfg(test)]
mod tests;
