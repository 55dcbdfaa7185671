//! Python language adapter
//!
//! Enclosing contexts in Python are function and class definitions.

use super::framework::ContextParser;
use tree_sitter::Language;

const DECLARATION_KINDS: &[&str] = &["function_definition", "class_definition"];

/// Python language adapter
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Create a new Python adapter with its grammar binding
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextParser for PythonParser {
    fn language_name(&self) -> &str {
        "Python"
    }

    fn file_extensions(&self) -> &[&str] {
        &["py", "pyi"]
    }

    fn grammar(&self) -> &Language {
        &self.language
    }

    fn declaration_kinds(&self) -> &[&str] {
        DECLARATION_KINDS
    }
}
