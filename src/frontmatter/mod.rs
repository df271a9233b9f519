//! Text-level frontmatter surgery
//!
//! The frontmatter is never parsed into a YAML tree. [`document`] splits a
//! markdown file into frontmatter and body, [`splice`] inserts lexicon entries
//! into the frontmatter text, and everything outside the touched region is
//! kept byte for byte.

pub mod document;
pub mod splice;

pub use document::Document;
pub use splice::{LexiconState, detect_state, inline_value, splice_entries};

/// One line of text with its byte offsets in the source
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    /// Offset of the first byte of the line
    pub start: usize,
    /// Line content without the trailing `\n`
    pub content: &'a str,
    /// Offset of the first byte after the line's newline
    pub next: usize,
}

impl Line<'_> {
    /// Width of the leading spaces and tabs
    pub fn indent(&self) -> usize {
        self.content.len() - self.content.trim_start_matches([' ', '\t']).len()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Iterate over the lines of `text`, keeping byte offsets
pub(crate) fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some(Line {
            start,
            content: raw.strip_suffix('\n').unwrap_or(raw),
            next: *offset,
        })
    })
}
