//! Discriminator-based dispatch between persisted `ClassType` tags and the
//! concrete model variants, one converter list per source language.

use super::class_types::{ClassModel, ClassType, DelegateModel, EnumModel};
use crate::language::Language;
use serde_json::Value;

pub trait ConverterList: Send + Sync {
    fn language(&self) -> Language;

    /// Fresh, empty model for a persisted discriminator.
    fn create_class_type(&self, discriminator: &str) -> ClassType;

    /// Already-typed instances pass through unchanged.
    fn convert(&self, class_type: ClassType) -> ClassType {
        class_type
    }

    /// Rebuild a class node from its JSON form, picking the variant from the
    /// `ClassType` field.
    fn read_class_type(&self, value: Value) -> serde_json::Result<ClassType> {
        let discriminator = value
            .get("ClassType")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(match self.create_class_type(&discriminator) {
            ClassType::Enum(_) => ClassType::Enum(serde_json::from_value(value)?),
            ClassType::Delegate(_) => ClassType::Delegate(serde_json::from_value(value)?),
            ClassType::Class(created) => {
                let mut model: ClassModel = serde_json::from_value(value)?;
                model.class_type = created.class_type;
                ClassType::Class(model)
            }
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpConverterList;

impl ConverterList for CSharpConverterList {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn create_class_type(&self, discriminator: &str) -> ClassType {
        match discriminator {
            "enum" => ClassType::Enum(EnumModel::new(Language::CSharp)),
            "delegate" => ClassType::Delegate(DelegateModel::new(Language::CSharp)),
            "" => ClassType::Class(ClassModel::new("class", Language::CSharp)),
            other => ClassType::Class(ClassModel::new(other, Language::CSharp)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VisualBasicConverterList;

impl ConverterList for VisualBasicConverterList {
    fn language(&self) -> Language {
        Language::VisualBasic
    }

    fn create_class_type(&self, discriminator: &str) -> ClassType {
        match discriminator {
            "enum" => ClassType::Enum(EnumModel::new(Language::VisualBasic)),
            "delegate" => ClassType::Delegate(DelegateModel::new(Language::VisualBasic)),
            "" => ClassType::Class(ClassModel::new("class", Language::VisualBasic)),
            other => ClassType::Class(ClassModel::new(other, Language::VisualBasic)),
        }
    }
}

pub fn converter_for(language: Language) -> &'static dyn ConverterList {
    match language {
        Language::CSharp => &CSharpConverterList,
        Language::VisualBasic => &VisualBasicConverterList,
    }
}

/// Deserialize one class node through the converter of its `Language`.
pub fn read_class_type(value: Value) -> serde_json::Result<ClassType> {
    let language = value
        .get("Language")
        .and_then(Value::as_str)
        .map(Language::from_tag)
        .unwrap_or_default();
    converter_for(language).read_class_type(value)
}
