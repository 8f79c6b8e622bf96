use std::sync::Arc;

use crate::error::Result;
use crate::extractor::FactExtractor;
use crate::language::Language;
use crate::models::{ClassModel, ClassType, CompilationUnitType, DelegateModel, EnumModel};
use crate::semantic::{CompilationMaker, create_syntactic_model};

/// Compile `code` alone against the trusted references and extract it.
pub fn try_extract_with(code: &str, extractor: &FactExtractor) -> Result<CompilationUnitType> {
    let tree = Arc::new(create_syntactic_model(code, Language::CSharp)?);
    let semantic = CompilationMaker::default().create_semantic_model(&tree);
    extractor.extract(&tree, &semantic)
}

pub fn extract(code: &str) -> CompilationUnitType {
    try_extract_with(code, &FactExtractor::new()).expect("extraction failed")
}

pub fn class<'a>(unit: &'a CompilationUnitType, name: &str) -> &'a ClassModel {
    unit.find_class(name)
        .and_then(ClassType::as_class)
        .unwrap_or_else(|| panic!("no class named {}", name))
}

pub fn enumeration<'a>(unit: &'a CompilationUnitType, name: &str) -> &'a EnumModel {
    unit.find_class(name)
        .and_then(ClassType::as_enum)
        .unwrap_or_else(|| panic!("no enum named {}", name))
}

pub fn delegate<'a>(unit: &'a CompilationUnitType, name: &str) -> &'a DelegateModel {
    unit.find_class(name)
        .and_then(ClassType::as_delegate)
        .unwrap_or_else(|| panic!("no delegate named {}", name))
}

pub fn names(unit: &CompilationUnitType) -> Vec<&str> {
    unit.class_types.iter().map(ClassType::name).collect()
}
