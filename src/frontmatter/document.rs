//! Split a markdown document into frontmatter and body

use super::lines;

/// Frontmatter delimiter line
pub const DELIMITER: &str = "---";

/// A markdown document split at its frontmatter delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Text strictly between the two delimiter lines
    pub frontmatter: String,
    /// Everything after the closing delimiter line, verbatim
    pub body: String,
}

impl Document {
    /// Locate the frontmatter block at the very start of `content`.
    ///
    /// The first line must be a `---` delimiter and the block closes at the
    /// first later `---` line, so delimiters in the body are never matched.
    /// The closing delimiter is only looked for after the first content line.
    /// Returns `None` when there is no such block.
    pub fn parse(content: &str) -> Option<Self> {
        let mut lines = lines(content);

        let opening = lines.next()?;
        if !is_delimiter(opening.content) {
            return None;
        }

        lines.next()?;

        let closing = lines.find(|line| is_delimiter(line.content))?;
        // the newline ending the last frontmatter line belongs to the delimiter
        let frontmatter = &content[opening.next..closing.start - 1];
        let body = &content[closing.next..];

        Some(Self {
            frontmatter: frontmatter.to_string(),
            body: body.to_string(),
        })
    }

    /// Rebuild the full document text
    pub fn assemble(&self) -> String {
        format!(
            "{DELIMITER}\n{}\n{DELIMITER}\n{}",
            self.frontmatter, self.body
        )
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
