//! Type-declaration facts and the polymorphic [`ClassType`] wrapper.

use super::members::{
    ConstructorModel, DestructorModel, EnumLabelModel, FieldModel, MethodModel, PropertyModel,
};
use super::types::{
    AttributeModel, BaseTypeModel, GenericParameterModel, ImportModel, LinesOfCode,
    ParameterModel, ReturnValueModel,
};
use crate::language::Language;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub type Metrics = BTreeMap<String, serde_json::Value>;

/// Class, interface, struct, record or (VB.NET) module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClassModel {
    pub class_type: String,
    pub name: String,
    pub file_path: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_namespace_name: String,
    pub containing_class_name: String,
    pub containing_module_name: String,
    pub base_types: Vec<BaseTypeModel>,
    pub generic_parameters: Vec<GenericParameterModel>,
    pub imports: Vec<ImportModel>,
    pub attributes: Vec<AttributeModel>,
    pub fields: Vec<FieldModel>,
    pub properties: Vec<PropertyModel>,
    pub methods: Vec<MethodModel>,
    pub constructors: Vec<ConstructorModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructor: Option<DestructorModel>,
    pub loc: LinesOfCode,
    pub metrics: Metrics,
    pub language: Language,
}

impl ClassModel {
    pub fn new(class_type: &str, language: Language) -> Self {
        Self {
            class_type: class_type.to_string(),
            language,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnumModel {
    pub class_type: String,
    pub name: String,
    pub file_path: String,
    /// Underlying integral type.
    #[serde(rename = "Type")]
    pub underlying_type: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_namespace_name: String,
    pub containing_class_name: String,
    pub containing_module_name: String,
    pub base_types: Vec<BaseTypeModel>,
    pub imports: Vec<ImportModel>,
    pub attributes: Vec<AttributeModel>,
    pub labels: Vec<EnumLabelModel>,
    pub loc: LinesOfCode,
    pub metrics: Metrics,
    pub language: Language,
}

impl EnumModel {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

impl Default for EnumModel {
    fn default() -> Self {
        Self {
            class_type: "enum".to_string(),
            name: String::new(),
            file_path: String::new(),
            underlying_type: "int".to_string(),
            access_modifier: String::new(),
            modifier: String::new(),
            containing_namespace_name: String::new(),
            containing_class_name: String::new(),
            containing_module_name: String::new(),
            base_types: Vec::new(),
            imports: Vec::new(),
            attributes: Vec::new(),
            labels: Vec::new(),
            loc: LinesOfCode::default(),
            metrics: Metrics::new(),
            language: Language::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DelegateModel {
    pub class_type: String,
    pub name: String,
    pub file_path: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_namespace_name: String,
    pub containing_class_name: String,
    pub containing_module_name: String,
    pub base_types: Vec<BaseTypeModel>,
    pub generic_parameters: Vec<GenericParameterModel>,
    pub parameters: Vec<ParameterModel>,
    pub return_value: ReturnValueModel,
    pub imports: Vec<ImportModel>,
    pub attributes: Vec<AttributeModel>,
    pub loc: LinesOfCode,
    pub metrics: Metrics,
    pub language: Language,
}

impl DelegateModel {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }
}

impl Default for DelegateModel {
    fn default() -> Self {
        Self {
            class_type: "delegate".to_string(),
            name: String::new(),
            file_path: String::new(),
            access_modifier: String::new(),
            modifier: String::new(),
            containing_namespace_name: String::new(),
            containing_class_name: String::new(),
            containing_module_name: String::new(),
            base_types: Vec::new(),
            generic_parameters: Vec::new(),
            parameters: Vec::new(),
            return_value: ReturnValueModel::default(),
            imports: Vec::new(),
            attributes: Vec::new(),
            loc: LinesOfCode::default(),
            metrics: Metrics::new(),
            language: Language::default(),
        }
    }
}

/// One type declaration of a compilation unit.
///
/// Serializes as the inner model (which carries its own `ClassType`
/// discriminator); deserialization goes through the converter list of the
/// model's `Language`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassType {
    Class(ClassModel),
    Delegate(DelegateModel),
    Enum(EnumModel),
}

impl ClassType {
    pub fn name(&self) -> &str {
        match self {
            ClassType::Class(model) => &model.name,
            ClassType::Delegate(model) => &model.name,
            ClassType::Enum(model) => &model.name,
        }
    }

    /// The persisted discriminator (`class`, `interface`, `enum`, ...).
    pub fn class_type(&self) -> &str {
        match self {
            ClassType::Class(model) => &model.class_type,
            ClassType::Delegate(model) => &model.class_type,
            ClassType::Enum(model) => &model.class_type,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            ClassType::Class(model) => model.language,
            ClassType::Delegate(model) => model.language,
            ClassType::Enum(model) => model.language,
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            ClassType::Class(model) => &model.file_path,
            ClassType::Delegate(model) => &model.file_path,
            ClassType::Enum(model) => &model.file_path,
        }
    }

    pub fn set_file_path(&mut self, path: &str) {
        let slot = match self {
            ClassType::Class(model) => &mut model.file_path,
            ClassType::Delegate(model) => &mut model.file_path,
            ClassType::Enum(model) => &mut model.file_path,
        };
        *slot = path.to_string();
    }

    pub fn containing_namespace_name(&self) -> &str {
        match self {
            ClassType::Class(model) => &model.containing_namespace_name,
            ClassType::Delegate(model) => &model.containing_namespace_name,
            ClassType::Enum(model) => &model.containing_namespace_name,
        }
    }

    pub fn as_class(&self) -> Option<&ClassModel> {
        match self {
            ClassType::Class(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumModel> {
        match self {
            ClassType::Enum(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_delegate(&self) -> Option<&DelegateModel> {
        match self {
            ClassType::Delegate(model) => Some(model),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ClassType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        super::converter::read_class_type(value).map_err(serde::de::Error::custom)
    }
}
