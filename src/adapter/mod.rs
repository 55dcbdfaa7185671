//! Language Adapter Framework
//!
//! Each language provides a Tree-sitter grammar binding and a table of
//! declaration node kinds that qualify as enclosing contexts. The resolver
//! core never sees language-specific logic; it only walks whatever tree an
//! adapter hands it, filtered through the adapter's kind table.

pub mod framework;
pub mod go;
pub mod javascript;
pub mod python;
pub mod rust;

pub use framework::{ContextParser, ParserRegistry, default_registry};
pub use go::GoParser;
pub use javascript::JavaScriptParser;
pub use python::PythonParser;
pub use rust::RustParser;
