//! Language-specific entry points into the extraction engine.

use crate::csharp::CSharpFrontend;
use crate::error::{ExtractionError, Result};
use crate::language::Language;
use crate::models::CompilationUnitType;
use crate::visitors::CompositeVisitor;

/// Supplies the visitor tree for one source language.
pub trait LanguageFrontend: Send + Sync {
    fn language(&self) -> Language;

    /// Top-level composite run over a syntax root.
    fn compilation_unit_visitor(&self) -> CompositeVisitor<CompilationUnitType>;
}

/// Frontend for `language`, if this build can parse it.
pub fn frontend_for(language: Language) -> Result<Box<dyn LanguageFrontend>> {
    match language {
        Language::CSharp => Ok(Box::new(CSharpFrontend)),
        Language::VisualBasic => Err(ExtractionError::UnsupportedLanguage(
            language.tag().to_string(),
        )),
    }
}
