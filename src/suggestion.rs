//! Suggestion record - the hand-off value for one review suggestion
//!
//! Immutable after construction, equal by value, serialized once into a
//! fixed-tag markup block and then discarded. Unrelated to the parsing
//! side of the crate; it lives here because its serialization contract is
//! simple and fixed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One generated review suggestion.
///
/// The `Display` impl is the canonical serialization: a `<prsuggestion>`
/// block with one tab-indented field per line in the fixed order describe,
/// type, comment, code, filename. Field values pass through verbatim - no
/// escaping is performed, downstream consumers escape if they need to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short description of the suggestion, serialized as `<describe>`
    pub description: String,
    /// Suggestion category (e.g. "bugfix"), serialized as `<type>`
    pub kind: String,
    /// Review comment text
    pub comment: String,
    /// Suggested replacement code
    pub code: String,
    /// File the suggestion applies to
    pub filename: String,
}

impl Suggestion {
    /// Create a new suggestion record
    pub fn new(
        description: impl Into<String>,
        kind: impl Into<String>,
        comment: impl Into<String>,
        code: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            kind: kind.into(),
            comment: comment.into(),
            code: code.into(),
            filename: filename.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<prsuggestion>")?;
        writeln!(f, "\t<describe>{}</describe>", self.description)?;
        writeln!(f, "\t<type>{}</type>", self.kind)?;
        writeln!(f, "\t<comment>{}</comment>", self.comment)?;
        writeln!(f, "\t<code>{}</code>", self.code)?;
        writeln!(f, "\t<filename>{}</filename>", self.filename)?;
        // No trailing newline after the closing tag
        write!(f, "</prsuggestion>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_exact_bytes() {
        let suggestion = Suggestion::new("Fix bug", "bugfix", "off-by-one", "i<=n", "a.py");

        let expected = "<prsuggestion>\n\
            \t<describe>Fix bug</describe>\n\
            \t<type>bugfix</type>\n\
            \t<comment>off-by-one</comment>\n\
            \t<code>i<=n</code>\n\
            \t<filename>a.py</filename>\n\
            </prsuggestion>";
        assert_eq!(suggestion.to_string(), expected);
    }

    #[test]
    fn test_serialization_idempotent() {
        let suggestion = Suggestion::new("a", "b", "c", "d", "e.rs");
        assert_eq!(suggestion.to_string(), suggestion.to_string());
    }

    #[test]
    fn test_no_escaping_of_field_values() {
        // Markup-significant characters pass through verbatim
        let suggestion = Suggestion::new("<tag>", "&amp;", "a</comment>b", "x < y", "f.go");
        let rendered = suggestion.to_string();
        assert!(rendered.contains("\t<describe><tag></describe>\n"));
        assert!(rendered.contains("\t<comment>a</comment>b</comment>\n"));
    }

    #[test]
    fn test_value_equality() {
        let a = Suggestion::new("d", "k", "c", "x", "f");
        let b = Suggestion::new("d", "k", "c", "x", "f");
        assert_eq!(a, b);
    }
}
