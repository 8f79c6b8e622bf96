//! Relationship facts recorded inside member bodies.

use super::types::ParameterModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    #[default]
    Getter,
    Setter,
}

/// One read or write of a field or property.
///
/// `definition_class_name` is the type that declares the member, which differs
/// from `location_class_name` (the type whose code performs the access) under
/// inheritance or when touching another object's members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessedField {
    pub name: String,
    pub kind: AccessKind,
    pub definition_class_name: String,
    pub location_class_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MethodCallModel {
    pub name: String,
    pub definition_class_name: String,
    pub location_class_name: String,
    pub parameter_types: Vec<ParameterModel>,
}
