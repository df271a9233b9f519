//! Insert serialized entries into the `lexicon` list of a frontmatter text
//!
//! The insertion point depends on what the frontmatter already holds:
//!
//! - [`LexiconState::Absent`]: a new `lexicon:` key and the entries are
//!   appended at the end.
//! - [`LexiconState::EmptyKey`]: the bare key line is replaced by the key
//!   followed by the entries.
//! - [`LexiconState::Populated`]: the entries go after the last line of the
//!   existing list.
//!
//! The state is recomputed from the text on every call.

use super::{Line, lines};

/// The `lexicon` key token, including its colon
pub const LEXICON_KEY: &str = "lexicon:";

/// What the frontmatter holds under the `lexicon` key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconState {
    /// No `lexicon:` key
    Absent,
    /// `lexicon:` key with no list items
    EmptyKey,
    /// `lexicon:` key followed by `-` list items
    Populated,
}

/// Where new entries go, in byte offsets of the frontmatter text
enum InsertionPoint<'a> {
    Append,
    /// Replace `start..end` (the key token and the rest of its line),
    /// keeping a trailing comment on the key line
    ReplaceKey {
        start: usize,
        end: usize,
        comment: Option<&'a str>,
    },
    /// Insert after the trimmed end of the existing list; `resume` is where
    /// the untouched text continues and `column` is where its `-` items sit
    AfterList {
        end: usize,
        resume: usize,
        column: usize,
    },
}

impl<'a> InsertionPoint<'a> {
    fn locate(frontmatter: &'a str) -> Self {
        let key = lines(frontmatter).find_map(|line| key_value(&line).map(|value| (line, value)));
        let Some((key, KeyValue::Empty { comment })) = key else {
            return InsertionPoint::Append;
        };

        match list_end(frontmatter, &key) {
            Some(ListEnd {
                end,
                resume,
                column,
            }) => InsertionPoint::AfterList {
                end,
                resume,
                column,
            },
            None => InsertionPoint::ReplaceKey {
                start: key.start + key.indent(),
                end: key.start + key.content.len(),
                comment,
            },
        }
    }

    fn state(&self) -> LexiconState {
        match self {
            InsertionPoint::Append => LexiconState::Absent,
            InsertionPoint::ReplaceKey { .. } => LexiconState::EmptyKey,
            InsertionPoint::AfterList { .. } => LexiconState::Populated,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyValue<'a> {
    /// Nothing after the colon, or an empty flow list, possibly followed by
    /// a comment
    Empty { comment: Option<&'a str> },
    Inline(&'a str),
}

/// Classify a line starting with the `lexicon:` key
fn key_value<'a>(line: &Line<'a>) -> Option<KeyValue<'a>> {
    let rest = line.content.trim_start().strip_prefix(LEXICON_KEY)?.trim();
    let (value, comment) = split_comment(rest);
    if value.is_empty() || value == "[]" {
        Some(KeyValue::Empty { comment })
    } else {
        Some(KeyValue::Inline(value))
    }
}

/// Split a trimmed value from a trailing `# comment`
///
/// A `#` only starts a comment at the start of the value or after
/// whitespace. Quoted values are left whole.
fn split_comment(value: &str) -> (&str, Option<&str>) {
    if value.starts_with(['"', '\'']) {
        return (value, None);
    }

    let hash = value
        .char_indices()
        .find(|&(i, c)| c == '#' && (i == 0 || value[..i].ends_with([' ', '\t'])))
        .map(|(i, _)| i);

    match hash {
        Some(i) => (value[..i].trim_end(), Some(&value[i..])),
        None => (value, None),
    }
}

fn is_comment(line: &Line<'_>) -> bool {
    line.content.trim_start().starts_with('#')
}

fn is_item(line: &Line<'_>) -> bool {
    let trimmed = line.content.trim();
    trimmed == "-" || trimmed.starts_with("- ") || trimmed.starts_with("-\t")
}

/// Extent of an existing list under the key
struct ListEnd {
    /// End of the last list line without trailing whitespace
    end: usize,
    /// End of the last list line
    resume: usize,
    /// Indentation of the list's `-` items
    column: usize,
}

/// Find the list under `key`, if any
///
/// The list starts with the first `-` item after the key, either indented
/// deeper than the key or at the key's own indentation, and covers every
/// following line indented deeper than the key plus further `-` items at the
/// key's indentation. Blank and comment lines are skipped wherever they
/// appear; any other line at or left of the key's indentation ends the list.
fn list_end(frontmatter: &str, key: &Line<'_>) -> Option<ListEnd> {
    let key_indent = key.indent();
    let mut found: Option<ListEnd> = None;

    for line in lines(&frontmatter[key.next..]) {
        if line.is_blank() || is_comment(&line) {
            continue;
        }

        let indent = line.indent();
        if indent < key_indent || (indent == key_indent && !is_item(&line)) {
            break;
        }

        let column = match &found {
            Some(list) => list.column,
            None if is_item(&line) => indent,
            None => break,
        };

        let start = key.next + line.start;
        found = Some(ListEnd {
            end: start + line.content.trim_end().len(),
            resume: start + line.content.len(),
            column,
        });
    }

    found
}

/// Move a serialized block so its `-` sits at `column`
fn reindent(block: &str, column: usize) -> String {
    let pad = " ".repeat(column);
    block
        .lines()
        .map(|line| format!("{pad}{}", line.strip_prefix("  ").unwrap_or(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Determine the lexicon state of a frontmatter text
pub fn detect_state(frontmatter: &str) -> LexiconState {
    InsertionPoint::locate(frontmatter).state()
}

/// Value of a `lexicon:` key that carries an inline scalar (`lexicon: none`)
///
/// Such a key can be neither extended nor replaced safely, so callers reject
/// the document instead of appending a second key.
pub fn inline_value(frontmatter: &str) -> Option<&str> {
    match lines(frontmatter).find_map(|line| key_value(&line))? {
        KeyValue::Inline(value) => Some(value),
        KeyValue::Empty { .. } => None,
    }
}

/// Insert serialized entry blocks into the lexicon list
///
/// Entries keep their order and land after any existing entries, aligned
/// with the existing items. Text outside the lexicon list is returned
/// unchanged.
pub fn splice_entries(frontmatter: &str, blocks: &[String]) -> String {
    if blocks.is_empty() {
        return frontmatter.to_string();
    }

    match InsertionPoint::locate(frontmatter) {
        InsertionPoint::Append => {
            let separator = if frontmatter.ends_with('\n') { "" } else { "\n" };
            format!("{frontmatter}{separator}{LEXICON_KEY}\n{}", blocks.join("\n"))
        }
        InsertionPoint::ReplaceKey {
            start,
            end,
            comment,
        } => {
            let comment = comment.map(|c| format!(" {c}")).unwrap_or_default();
            format!(
                "{}{LEXICON_KEY}{comment}\n{}{}",
                &frontmatter[..start],
                blocks.join("\n"),
                &frontmatter[end..]
            )
        }
        InsertionPoint::AfterList {
            end,
            resume,
            column,
        } => {
            let entries: Vec<String> = blocks.iter().map(|b| reindent(b, column)).collect();
            format!(
                "{}\n{}{}",
                &frontmatter[..end],
                entries.join("\n"),
                &frontmatter[resume..]
            )
        }
    }
}
