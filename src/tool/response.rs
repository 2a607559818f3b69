//! Tagged-response parsing
//!
//! The tool replies on stdout with lightweight tagged lines of the form
//! `TAG:payload`. Exactly one tagged line is expected per call; anything the
//! tool wants to print around it (progress, banners) is ignored.

use regex::Regex;
use std::fmt;

use crate::tool::error::ToolError;

/// The set of tags the tool is known to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `ROOT:<path>` — absolute path of the project root
    Root,
    /// `ALT:<path>` — companion file for a source file, empty when none exists
    Alt,
    /// `YCM_CMD:<flags>` — completion flags joined by `|`
    YcmCmd,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Root => "ROOT",
            Tag::Alt => "ALT",
            Tag::YcmCmd => "YCM_CMD",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract the payload of the first line carrying `tag`.
///
/// Matching is case-sensitive and anchored at line start; leading whitespace
/// before the tag is tolerated. The payload is returned with surrounding
/// whitespace trimmed. Absence of a matching line is a parse failure, not an
/// empty success.
pub fn extract_tag(text: &str, tag: Tag) -> Result<String, ToolError> {
    let pattern = Regex::new(&format!(r"(?m)^\s*{}:(.*)", tag.label()))
        .map_err(|e| ToolError::Protocol {
            reason: format!("invalid tag pattern: {e}"),
        })?;

    let captures = pattern
        .captures(text)
        .ok_or(ToolError::TagNotFound { tag })?;

    Ok(captures[1].trim().to_string())
}
