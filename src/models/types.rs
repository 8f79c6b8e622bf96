//! Small value records shared by every fact model.

use serde::{Deserialize, Serialize};

/// A resolved type reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityType {
    /// Display name, nullable suffix kept (`string?`).
    pub name: String,
    pub full_type: GenericType,
}

impl EntityType {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_type: GenericType::named(name.trim_end_matches('?')),
            name,
        }
    }
}

/// Structural view of a type: nullability plus nested generic arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenericType {
    pub name: String,
    pub is_nullable: bool,
    pub contained_types: Vec<GenericType>,
}

impl GenericType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttributeArgument {
    pub value: String,
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttributeModel {
    pub name: String,
    pub target: String,
    pub arguments: Vec<AttributeArgument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenericParameterModel {
    pub name: String,
    pub modifier: String,
    pub constraints: Vec<EntityType>,
    pub attributes: Vec<AttributeModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParameterModel {
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    pub modifier: String,
    pub default_value: String,
    pub attributes: Vec<AttributeModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReturnValueModel {
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    pub modifier: String,
    pub attributes: Vec<AttributeModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalVariableModel {
    pub name: String,
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    pub modifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BaseTypeModel {
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    /// `class` or `interface`.
    pub kind: String,
}

impl BaseTypeModel {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::named(name),
            kind: "class".to_string(),
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::named(name),
            kind: "interface".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.entity_type.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImportModel {
    pub name: String,
    pub alias: String,
    pub is_static: bool,
    pub is_global: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LinesOfCode {
    pub source_lines: u32,
    pub commented_lines: u32,
    pub empty_lines: u32,
}
