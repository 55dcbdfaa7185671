//! Enclosing-context resolution - the language-agnostic core
//!
//! Given a parsed tree and a 1-based inclusive line range, select the
//! declaration node (function, class, type) whose span fully contains the
//! range. Among qualifying candidates the *largest* span wins, with ties
//! broken first-visited-wins in pre-order. Because a child's span is always
//! contained in its parent's, this deliberately prefers the outermost
//! enclosing declaration (e.g. a containing class over a nested method),
//! giving a reviewer maximal surrounding context.
//!
//! Tree-sitter rows are 0-based; everything crossing this module's public
//! boundary is 1-based, normalized exactly once here.

use serde::{Deserialize, Serialize};
use tree_sitter::{Language, Node, Parser, Tree};

/// A located declaration: its grammar node kind and 1-based inclusive span.
///
/// This is a snapshot of the enclosing node, detached from the syntax tree.
/// Callers extract the corresponding substring from their own copy of the
/// file text; the resolver never re-slices source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Grammar-specific node kind, e.g. `function_definition`
    pub kind: String,
    /// First line of the declaration (1-based, inclusive)
    pub start_line: u32,
    /// Last line of the declaration (1-based, inclusive)
    pub end_line: u32,
}

impl Declaration {
    fn from_node(node: Node) -> Self {
        Self {
            kind: node.kind().to_string(),
            start_line: node.start_position().row as u32 + 1,
            end_line: node.end_position().row as u32 + 1,
        }
    }

    /// Line count spanned by the declaration, the candidate ordering key
    pub fn size(&self) -> u32 {
        self.end_line - self.start_line
    }
}

/// Result of an enclosing-context query.
///
/// Produced fresh per query and never mutated after construction. A failed
/// parse is indistinguishable from "no qualifying declaration" here; callers
/// needing diagnostics use `dry_run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingContext {
    /// The enclosing declaration, if one contains the queried range
    pub declaration: Option<Declaration>,
}

impl EnclosingContext {
    /// A query that found no enclosing declaration
    pub fn none() -> Self {
        Self { declaration: None }
    }

    /// Whether an enclosing declaration was found
    pub fn is_found(&self) -> bool {
        self.declaration.is_some()
    }
}

/// Result of a validation-only parse.
///
/// `error` is empty exactly when `valid` is true. No partial-tree data is
/// exposed on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub valid: bool,
    pub error: String,
}

impl ParseOutcome {
    /// A clean parse
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    /// A failed parse with a human-readable diagnostic
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: error.into(),
        }
    }
}

/// Parse source text with a fresh parser bound to `language`.
///
/// A new `Parser` per call keeps adapters free of per-call mutable state:
/// the only thing an adapter retains across calls is its immutable grammar
/// binding.
pub(crate) fn parse_source(language: &Language, source: &str) -> std::result::Result<Tree, String> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| format!("failed to bind grammar: {}", e))?;
    parser
        .parse(source, None)
        .ok_or_else(|| "parser produced no tree".to_string())
}

/// Find the largest declaration node containing `[line_start, line_end]`.
///
/// `kinds` is the language's table of qualifying declaration node kinds.
/// The walk is a full pre-order traversal; a node qualifies only if its
/// kind is in the table and its 1-based span fully contains the target
/// range. `line_start <= line_end` is a caller precondition.
pub(crate) fn largest_enclosing(
    root: Node,
    line_start: u32,
    line_end: u32,
    kinds: &[&str],
) -> EnclosingContext {
    let mut best: Option<Declaration> = None;
    visit(root, line_start, line_end, kinds, &mut best);
    EnclosingContext { declaration: best }
}

fn visit(node: Node, line_start: u32, line_end: u32, kinds: &[&str], best: &mut Option<Declaration>) {
    if kinds.contains(&node.kind()) {
        let candidate = Declaration::from_node(node);
        if candidate.start_line <= line_start && line_end <= candidate.end_line {
            // Strictly-greater keeps the first-visited candidate on ties
            let larger = match best {
                Some(current) => candidate.size() > current.size(),
                None => true,
            };
            if larger {
                *best = Some(candidate);
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, line_start, line_end, kinds, best);
    }
}

/// Build a [`ParseOutcome`] from a parsed tree's root node.
pub(crate) fn outcome_for(root: Node) -> ParseOutcome {
    if root.has_error() {
        let diagnostic = first_syntax_error(root)
            .unwrap_or_else(|| "syntax error".to_string());
        ParseOutcome::invalid(diagnostic)
    } else {
        ParseOutcome::valid()
    }
}

/// Locate the first ERROR or MISSING node in pre-order and describe it.
fn first_syntax_error(node: Node) -> Option<String> {
    if node.is_error() {
        return Some(format!(
            "syntax error at line {}",
            node.start_position().row + 1
        ));
    }
    if node.is_missing() {
        return Some(format!(
            "missing {} at line {}",
            node.kind(),
            node.start_position().row + 1
        ));
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(diagnostic) = first_syntax_error(child) {
            return Some(diagnostic);
        }
    }
    // has_error() with no ERROR/MISSING descendant should not happen
    Some(format!(
        "syntax error at line {}",
        node.start_position().row + 1
    ))
}
