//! Rust language adapter
//!
//! Qualifying declarations are functions, type definitions (struct, enum,
//! trait), and impl blocks.

use super::framework::ContextParser;
use tree_sitter::Language;

const DECLARATION_KINDS: &[&str] = &[
    "function_item",
    "struct_item",
    "enum_item",
    "trait_item",
    "impl_item",
];

/// Rust language adapter
pub struct RustParser {
    language: Language,
}

impl RustParser {
    /// Create a new Rust adapter with its grammar binding
    pub fn new() -> Self {
        Self {
            language: tree_sitter_rust::LANGUAGE.into(),
        }
    }
}

impl Default for RustParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextParser for RustParser {
    fn language_name(&self) -> &str {
        "Rust"
    }

    fn file_extensions(&self) -> &[&str] {
        &["rs"]
    }

    fn grammar(&self) -> &Language {
        &self.language
    }

    fn declaration_kinds(&self) -> &[&str] {
        DECLARATION_KINDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_context() {
        let parser = RustParser::new();
        let source = "\
use std::fmt;

fn add(a: i32, b: i32) -> i32 {
    a + b
}
";

        let ctx = parser.find_enclosing_context(source, 4, 4);
        let decl = ctx.declaration.expect("Should find add");
        assert_eq!(decl.kind, "function_item");
        assert_eq!(decl.start_line, 3);
        assert_eq!(decl.end_line, 5);
    }

    #[test]
    fn test_impl_block_wins_over_nested_fn() {
        let parser = RustParser::new();
        let source = "\
impl Point {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
";

        let ctx = parser.find_enclosing_context(source, 3, 3);
        let decl = ctx.declaration.expect("Should find the impl block");
        assert_eq!(decl.kind, "impl_item");
        assert_eq!(decl.start_line, 1);
        assert_eq!(decl.end_line, 5);
    }

    #[test]
    fn test_use_lines_have_no_context() {
        let parser = RustParser::new();
        let source = "use std::fmt;\nuse std::io;\n\nfn main() {}\n";

        assert!(!parser.find_enclosing_context(source, 1, 2).is_found());
    }

    #[test]
    fn test_dry_run() {
        let parser = RustParser::new();

        assert!(parser.dry_run("fn main() {}\n").valid);

        let bad = parser.dry_run("fn main( {\n");
        assert!(!bad.valid);
        assert!(!bad.error.is_empty());
    }
}
