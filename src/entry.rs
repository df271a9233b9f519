//! Lexicon entries and their frontmatter serialization

use std::fmt;

/// One term/definition/stress record stored under the `lexicon` key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub term: String,
    pub definition: String,
    /// The term with an optional stress marker before the stressed syllable
    pub stressed: String,
}

impl LexiconEntry {
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        stressed: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            stressed: stressed.into(),
        }
    }

    /// Serialize as a list item under `lexicon:`
    ///
    /// The block has no trailing newline. Layout:
    ///
    /// ```text
    ///   - term: "<term>"
    ///     definition: "<definition>"
    ///     stressed: "<stressed>"
    /// ```
    pub fn to_block(&self) -> String {
        format!(
            "  - term: \"{}\"\n    definition: \"{}\"\n    stressed: \"{}\"",
            escape_quotes(&self.term),
            escape_quotes(&self.definition),
            escape_quotes(&self.stressed),
        )
    }
}

impl fmt::Display for LexiconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "term='{}' definition='{}' stressed='{}'",
            self.term, self.definition, self.stressed
        )
    }
}

/// A term as typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermInput {
    /// Contains the stress marker: `term` is the marker-free spelling
    Marked { term: String, stressed: String },
    /// No marker: the stress heuristic decides whether to ask for one
    Plain(String),
}

impl TermInput {
    pub fn parse(raw: &str, marker: char) -> Self {
        if raw.contains(marker) {
            TermInput::Marked {
                term: raw.replace(marker, ""),
                stressed: raw.to_string(),
            }
        } else {
            TermInput::Plain(raw.to_string())
        }
    }
}

/// Escape double quotes for a double-quoted YAML scalar. Nothing else is touched.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}
