//! Syntactic model provider: source text in, parsed tree out.

use crate::error::{ExtractionError, Result};
use crate::language::Language;
use std::fmt;
use tree_sitter::{Node, Parser, Tree};

use super::nodes::node_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem the parser reported, with 1-based positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.message)
    }
}

/// One parsed source file. Owns its text so nodes can always be read back.
pub struct SyntaxTree {
    language: Language,
    source: String,
    tree: Tree,
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("language", &self.language)
            .field("bytes", &self.source.len())
            .finish()
    }
}

impl SyntaxTree {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self, node: &Node) -> &str {
        node_text(node, &self.source)
    }

    /// Error diagnostics for every `ERROR` and missing node, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if self.root().has_error() {
            self.collect_diagnostics(self.root(), &mut diagnostics);
        }
        diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics()
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn collect_diagnostics(&self, node: Node, diagnostics: &mut Vec<Diagnostic>) {
        let position = node.start_position();
        if node.is_error() {
            let snippet: String = self.text(&node).chars().take(40).collect();
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                line: position.row + 1,
                column: position.column + 1,
                message: format!("unexpected `{}`", snippet.trim()),
            });
            return;
        }
        if node.is_missing() {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                line: position.row + 1,
                column: position.column + 1,
                message: format!("missing `{}`", node.kind()),
            });
            return;
        }
        if !node.has_error() {
            return;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_diagnostics(child, diagnostics);
        }
    }
}

/// Parse `content` as `language`.
pub fn create_syntactic_model(content: &str, language: Language) -> Result<SyntaxTree> {
    let mut parser = Parser::new();
    parse_with(&mut parser, content, language)
}

/// Parse with a caller-owned parser, so worker threads can reuse theirs.
pub fn parse_with(parser: &mut Parser, content: &str, language: Language) -> Result<SyntaxTree> {
    if content.trim().is_empty() {
        return Err(ExtractionError::EmptyContent);
    }
    let grammar = language.grammar()?;
    parser
        .set_language(&grammar)
        .map_err(|e| ExtractionError::Grammar(e.to_string()))?;
    let tree = parser
        .parse(content, None)
        .ok_or(ExtractionError::ParseFailed)?;
    Ok(SyntaxTree {
        language,
        source: content.to_string(),
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_rejected() {
        assert!(matches!(
            create_syntactic_model("", Language::CSharp),
            Err(ExtractionError::EmptyContent)
        ));
        assert!(matches!(
            create_syntactic_model("  \n\t ", Language::CSharp),
            Err(ExtractionError::EmptyContent)
        ));
    }

    #[test]
    fn test_visual_basic_is_unsupported() {
        assert!(matches!(
            create_syntactic_model("Module M\nEnd Module", Language::VisualBasic),
            Err(ExtractionError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_valid_source_has_no_diagnostics() {
        let tree = create_syntactic_model("class A { void M() { } }", Language::CSharp).unwrap();
        assert!(tree.diagnostics().is_empty());
        assert_eq!(tree.root().kind(), "compilation_unit");
    }

    #[test]
    fn test_broken_source_reports_errors_with_positions() {
        let tree = create_syntactic_model("class A {\n  void M( { }\n", Language::CSharp).unwrap();
        let diagnostics = tree.diagnostics();
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.iter().all(|d| d.line >= 1 && d.column >= 1));
        assert!(tree.has_errors());
    }
}
