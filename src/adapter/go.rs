//! Go language adapter
//!
//! Qualifying declarations are functions, methods, and type declarations.

use super::framework::ContextParser;
use tree_sitter::Language;

const DECLARATION_KINDS: &[&str] = &[
    "function_declaration",
    "method_declaration",
    "type_declaration",
];

/// Go language adapter
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Create a new Go adapter with its grammar binding
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextParser for GoParser {
    fn language_name(&self) -> &str {
        "Go"
    }

    fn file_extensions(&self) -> &[&str] {
        &["go"]
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
        let parser = GoParser::new();
        let source = "\
package main

func add(a int, b int) int {
\treturn a + b
}
";

        let ctx = parser.find_enclosing_context(source, 4, 4);
        let decl = ctx.declaration.expect("Should find add");
        assert_eq!(decl.kind, "function_declaration");
        assert_eq!(decl.start_line, 3);
        assert_eq!(decl.end_line, 5);
    }

    #[test]
    fn test_method_context() {
        let parser = GoParser::new();
        let source = "\
package main

func (p Point) Norm() int {
\treturn p.x*p.x + p.y*p.y
}
";

        let ctx = parser.find_enclosing_context(source, 4, 4);
        let decl = ctx.declaration.expect("Should find Norm");
        assert_eq!(decl.kind, "method_declaration");
        assert_eq!(decl.start_line, 3);
        assert_eq!(decl.end_line, 5);
    }

    #[test]
    fn test_package_clause_has_no_context() {
        let parser = GoParser::new();
        let source = "package main\n\nfunc main() {}\n";

        assert!(!parser.find_enclosing_context(source, 1, 1).is_found());
    }

    #[test]
    fn test_dry_run() {
        let parser = GoParser::new();

        assert!(parser.dry_run("package main\n\nfunc main() {}\n").valid);

        let bad = parser.dry_run("package main\n\nfunc main( {\n");
        assert!(!bad.valid);
        assert!(!bad.error.is_empty());
    }
}
