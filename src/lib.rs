// netfacts - fact extraction for C# sources
//!
//! Walks tree-sitter syntax trees with a composable visitor engine, consults a
//! crate-owned semantic model for type resolution, and produces a
//! language-agnostic fact model (classes, members, calls, field accesses,
//! complexity) that serializes to JSON.

pub mod config;
pub mod csharp;
pub mod error;
pub mod extractor;
pub mod frontend;
pub mod language;
pub mod logging;
pub mod models;
pub mod project;
pub mod semantic;
pub mod visitors;

#[cfg(test)]
pub mod tests;

pub use error::{ExtractionError, Result, VisitError, VisitResult};
pub use extractor::FactExtractor;
pub use language::Language;
pub use logging::{FactLogger, RecordingLogger, TracingLogger};
pub use models::{ClassType, CompilationUnitType, ProjectModel};
pub use semantic::{CompilationMaker, SemanticModel, SyntaxTree, create_syntactic_model};
