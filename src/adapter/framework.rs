//! Core adapter framework
//!
//! Defines the capability trait that all language adapters implement and
//! the registry that dispatches a language identifier to its adapter.

use crate::resolver::{self, EnclosingContext, ParseOutcome};
use crate::{Error, Result};
use std::path::Path;
use tree_sitter::Language;

/// Trait for language adapters
///
/// Each adapter owns exactly one immutable grammar binding, created once at
/// construction. Every call parses with a fresh parser, so adapters carry
/// no per-call mutable state and concurrent calls are safe without locking.
///
/// The default `find_enclosing_context` and `dry_run` implementations run
/// the shared resolver against the adapter's grammar and kind table; an
/// adapter only supplies data.
///
/// An incomplete [`declaration_kinds`](ContextParser::declaration_kinds)
/// table silently degrades queries to "not found" rather than failing
/// loudly - an accepted trade-off of keeping the tables as plain data.
///
/// No parse-cost bound is enforced here: callers needing bounded latency on
/// pathological inputs must impose their own timeout around these calls.
pub trait ContextParser: Send + Sync {
    /// Get the language name (for display and dispatch)
    fn language_name(&self) -> &str;

    /// Get file extensions this adapter handles
    fn file_extensions(&self) -> &[&str];

    /// Get the immutable grammar binding
    fn grammar(&self) -> &Language;

    /// Node kinds that qualify as enclosing declarations for this language
    fn declaration_kinds(&self) -> &[&str];

    /// Check if this adapter can handle a file
    fn can_handle(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            self.file_extensions().contains(&ext)
        } else {
            false
        }
    }

    /// Find the enclosing declaration for a 1-based inclusive line range.
    ///
    /// `line_start <= line_end` is a caller precondition. A parse failure is
    /// logged and collapsed into "not found"; it never surfaces as an error
    /// here. Callers needing parse diagnostics use [`dry_run`](Self::dry_run).
    fn find_enclosing_context(&self, file: &str, line_start: u32, line_end: u32) -> EnclosingContext {
        match resolver::parse_source(self.grammar(), file) {
            Ok(tree) => resolver::largest_enclosing(
                tree.root_node(),
                line_start,
                line_end,
                self.declaration_kinds(),
            ),
            Err(err) => {
                tracing::warn!("Failed to parse {} source: {}", self.language_name(), err);
                EnclosingContext::none()
            }
        }
    }

    /// Validation-only parse: report whether the text is well-formed.
    fn dry_run(&self, file: &str) -> ParseOutcome {
        match resolver::parse_source(self.grammar(), file) {
            Ok(tree) => resolver::outcome_for(tree.root_node()),
            Err(err) => ParseOutcome::invalid(err),
        }
    }
}

impl std::fmt::Debug for (dyn ContextParser + '_) {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextParser")
            .field("language_name", &self.language_name())
            .finish()
    }
}

/// Registry of language adapters
///
/// The dispatch table: language identifier (or file extension) to adapter.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ContextParser>>,
}

impl ParserRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter
    pub fn register(&mut self, parser: impl ContextParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    /// Resolve a language identifier to its adapter.
    ///
    /// Matches the language name case-insensitively or any registered file
    /// extension (so `"python"` and `"py"` both resolve). Unknown
    /// identifiers are an explicit error, never a fallback to another
    /// grammar.
    pub fn for_language(&self, id: &str) -> Result<&dyn ContextParser> {
        self.parsers
            .iter()
            .find(|p| {
                p.language_name().eq_ignore_ascii_case(id)
                    || p.file_extensions().iter().any(|e| e.eq_ignore_ascii_case(id))
            })
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::UnsupportedLanguage(id.to_string()))
    }

    /// Find an adapter for a file path by extension
    pub fn find_parser(&self, path: &Path) -> Option<&dyn ContextParser> {
        self.parsers
            .iter()
            .find(|p| p.can_handle(path))
            .map(|p| p.as_ref())
    }

    /// Get all registered adapters
    pub fn parsers(&self) -> &[Box<dyn ContextParser>] {
        &self.parsers
    }
}

/// Create a default registry with all built-in adapters
pub fn default_registry() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry.register(super::python::PythonParser::new());
    registry.register(super::javascript::JavaScriptParser::new());
    registry.register(super::rust::RustParser::new());
    registry.register(super::go::GoParser::new());
    registry
}
