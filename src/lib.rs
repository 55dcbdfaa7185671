//! # Review Context - Enclosing-Context Resolver
//!
//! Locates the function or class/type definition that encloses a line range,
//! across multiple programming languages. Built for code-review tooling that
//! needs structurally meaningful context around a commented span.
//!
//! Review Context provides:
//! - A polymorphic parser capability ([`ContextParser`]) with one
//!   Tree-sitter backed adapter per supported language
//! - A language-agnostic tree walk that selects the enclosing declaration
//!   for a 1-based inclusive line range
//! - Validation-only parsing (`dry_run`) that reports whether a file is
//!   syntactically well-formed
//! - An immutable [`Suggestion`] record with a fixed textual serialization
//!   for hand-off to downstream reporting
//!
//! All inputs are in-memory text; this crate performs no file or network
//! I/O and holds no mutable state between calls.

pub mod adapter;
pub mod resolver;
pub mod suggestion;

// Re-exports for convenient access
pub use adapter::{ContextParser, ParserRegistry, default_registry};
pub use resolver::{Declaration, EnclosingContext, ParseOutcome};
pub use suggestion::Suggestion;

/// Result type alias for review-context operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for review-context operations
///
/// Parse failures of user-supplied source are not errors at this level:
/// they surface as [`ParseOutcome`] from `dry_run`, or collapse into
/// "no context found" inside `find_enclosing_context`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Grammar error: {0}")]
    Grammar(String),
}
