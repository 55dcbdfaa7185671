//! JavaScript language adapter
//!
//! Qualifying declarations are named function, generator, and class
//! declarations plus class methods. Arrow functions and function
//! expressions are expressions, not declarations, and do not qualify.

use super::framework::ContextParser;
use tree_sitter::Language;

const DECLARATION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "class_declaration",
    "method_definition",
];

/// JavaScript language adapter
pub struct JavaScriptParser {
    language: Language,
}

impl JavaScriptParser {
    /// Create a new JavaScript adapter with its grammar binding
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextParser for JavaScriptParser {
    fn language_name(&self) -> &str {
        "JavaScript"
    }

    fn file_extensions(&self) -> &[&str] {
        &["js", "jsx", "mjs", "cjs"]
    }

    fn grammar(&self) -> &Language {
        &self.language
    }

    fn declaration_kinds(&self) -> &[&str] {
        DECLARATION_KINDS
    }
}
