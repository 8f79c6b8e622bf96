//! The visitor composition engine.
//!
//! A [`Visitor`] fills one slice of a model from one syntax node. A
//! [`CompositeVisitor`] folds an ordered list of visitors over a model it
//! exclusively owns, absorbing individual failures. A [`SetterVisitor`]
//! finds child nodes, builds a fresh child model through its own composite,
//! and attaches the result to the parent. Setters nest to any depth.

mod composite;
mod setter;

pub use composite::CompositeVisitor;
pub use setter::{Selector, SetterVisitor};

use tree_sitter::Node;

use crate::error::VisitResult;
use crate::logging::FactLogger;
use crate::semantic::{SemanticModel, SyntaxTree};

/// Everything a visitor may consult besides the node and the model.
#[derive(Clone, Copy)]
pub struct VisitContext<'a> {
    pub tree: &'a SyntaxTree,
    pub semantic: &'a SemanticModel,
    pub logger: &'a dyn FactLogger,
}

impl<'a> VisitContext<'a> {
    pub fn new(tree: &'a SyntaxTree, semantic: &'a SemanticModel, logger: &'a dyn FactLogger) -> Self {
        Self {
            tree,
            semantic,
            logger,
        }
    }

    pub fn source(&self) -> &'a str {
        self.tree.source()
    }

    pub fn text(&self, node: &Node) -> &'a str {
        crate::semantic::nodes::node_text(node, self.tree.source())
    }
}

/// Populates one slice of `M` from one syntax node.
///
/// Visitors are stateless apart from their child visitors, so one composed
/// visitor tree serves every compilation unit.
pub trait Visitor<M>: Send + Sync {
    /// Name used when reporting an absorbed failure.
    fn name(&self) -> &'static str;

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult;
}
