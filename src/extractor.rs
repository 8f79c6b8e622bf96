//! Drives the compilation-unit visitor over one syntax tree.

use std::sync::Arc;

use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::frontend::frontend_for;
use crate::language::Language;
use crate::logging::{FactLogger, TracingLogger};
use crate::models::CompilationUnitType;
use crate::semantic::{SemanticModel, Severity, SyntaxTree};
use crate::visitors::{CompositeVisitor, VisitContext};

/// Extracts a [`CompilationUnitType`] from a syntax tree and its semantic
/// model. Build it once and reuse it for every unit of a project.
pub struct FactExtractor {
    visitor: CompositeVisitor<CompilationUnitType>,
    logger: Arc<dyn FactLogger>,
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FactExtractor {
    /// C# extractor logging through `tracing`.
    pub fn new() -> Self {
        Self::with_visitors(crate::csharp::visitors::compilation_unit_visitor())
    }

    pub fn for_language(language: Language) -> Result<Self> {
        let frontend = frontend_for(language)?;
        Ok(Self::with_visitors(frontend.compilation_unit_visitor()))
    }

    /// Extractor over a caller-composed visitor tree.
    pub fn with_visitors(visitor: CompositeVisitor<CompilationUnitType>) -> Self {
        Self {
            visitor,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn FactLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn visitor(&self) -> &CompositeVisitor<CompilationUnitType> {
        &self.visitor
    }

    /// Fails with [`ExtractionError::SyntaxErrors`] when the tree has any
    /// error diagnostic; every other problem is logged and absorbed.
    pub fn extract(&self, tree: &SyntaxTree, semantic: &SemanticModel) -> Result<CompilationUnitType> {
        let errors: Vec<String> = tree
            .diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.to_string())
            .collect();
        if !errors.is_empty() {
            return Err(ExtractionError::SyntaxErrors(errors.join("; ")));
        }

        let cx = VisitContext::new(tree, semantic, self.logger.as_ref());
        let unit = self
            .visitor
            .fold(tree.root(), &cx, CompilationUnitType::default());
        debug!(
            "extracted {} class types from {} compilation unit",
            unit.class_types.len(),
            tree.language()
        );
        Ok(unit)
    }
}
