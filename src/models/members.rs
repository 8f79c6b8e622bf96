//! Member facts: fields, properties, accessors, methods and friends.

use super::references::{AccessedField, MethodCallModel};
use super::types::{
    AttributeModel, EntityType, GenericParameterModel, LinesOfCode, LocalVariableModel,
    ParameterModel, ReturnValueModel,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub is_event: bool,
    pub attributes: Vec<AttributeModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PropertyModel {
    pub name: String,
    #[serde(rename = "Type")]
    pub entity_type: EntityType,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub is_event: bool,
    pub cyclomatic_complexity: u32,
    pub accessors: Vec<AccessorModel>,
    pub attributes: Vec<AttributeModel>,
    pub loc: LinesOfCode,
}

/// `get`, `set`, `init`, `add` or `remove` body of a property or event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessorModel {
    pub name: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub return_value: ReturnValueModel,
    pub cyclomatic_complexity: u32,
    pub called_methods: Vec<MethodCallModel>,
    pub accessed_fields: Vec<AccessedField>,
    pub local_variables: Vec<LocalVariableModel>,
    pub local_functions: Vec<LocalFunctionModel>,
    pub attributes: Vec<AttributeModel>,
    pub loc: LinesOfCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MethodModel {
    pub name: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub cyclomatic_complexity: u32,
    pub parameters: Vec<ParameterModel>,
    pub return_value: ReturnValueModel,
    pub generic_parameters: Vec<GenericParameterModel>,
    pub attributes: Vec<AttributeModel>,
    pub called_methods: Vec<MethodCallModel>,
    pub accessed_fields: Vec<AccessedField>,
    pub local_variables: Vec<LocalVariableModel>,
    pub local_functions: Vec<LocalFunctionModel>,
    pub loc: LinesOfCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConstructorModel {
    pub name: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub cyclomatic_complexity: u32,
    pub parameters: Vec<ParameterModel>,
    pub attributes: Vec<AttributeModel>,
    pub called_methods: Vec<MethodCallModel>,
    pub accessed_fields: Vec<AccessedField>,
    pub local_variables: Vec<LocalVariableModel>,
    pub local_functions: Vec<LocalFunctionModel>,
    pub loc: LinesOfCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DestructorModel {
    pub name: String,
    pub access_modifier: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub cyclomatic_complexity: u32,
    pub attributes: Vec<AttributeModel>,
    pub called_methods: Vec<MethodCallModel>,
    pub accessed_fields: Vec<AccessedField>,
    pub local_variables: Vec<LocalVariableModel>,
    pub local_functions: Vec<LocalFunctionModel>,
    pub loc: LinesOfCode,
}

/// A function declared inside another body. Self-similar to [`MethodModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalFunctionModel {
    pub name: String,
    pub modifier: String,
    pub containing_type_name: String,
    pub cyclomatic_complexity: u32,
    pub parameters: Vec<ParameterModel>,
    pub return_value: ReturnValueModel,
    pub generic_parameters: Vec<GenericParameterModel>,
    pub attributes: Vec<AttributeModel>,
    pub called_methods: Vec<MethodCallModel>,
    pub accessed_fields: Vec<AccessedField>,
    pub local_variables: Vec<LocalVariableModel>,
    pub local_functions: Vec<LocalFunctionModel>,
    pub loc: LinesOfCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnumLabelModel {
    pub name: String,
    pub attributes: Vec<AttributeModel>,
}
