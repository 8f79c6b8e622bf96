//! C# extraction: helpers over tree-sitter-c-sharp syntax and the visitor
//! tree that turns a compilation unit into facts.

pub mod helpers;
pub mod visitors;

use crate::frontend::LanguageFrontend;
use crate::language::Language;
use crate::models::CompilationUnitType;
use crate::visitors::CompositeVisitor;

#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpFrontend;

impl LanguageFrontend for CSharpFrontend {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn compilation_unit_visitor(&self) -> CompositeVisitor<CompilationUnitType> {
        visitors::compilation_unit_visitor()
    }
}
