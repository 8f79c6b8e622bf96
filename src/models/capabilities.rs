//! Capability traits over the fact models.
//!
//! A leaf visitor that fills one slice (attributes, parameters, ...) is written
//! once against the capability and then registered for every model that has
//! it. The set of capabilities of a model is fixed at composition time, so no
//! visitor ever has to probe a model's concrete type.

use super::class_types::{ClassModel, DelegateModel, EnumModel};
use super::members::{
    AccessorModel, ConstructorModel, DestructorModel, EnumLabelModel, FieldModel,
    LocalFunctionModel, MethodModel, PropertyModel,
};
use super::references::{AccessedField, MethodCallModel};
use super::types::{
    AttributeModel, BaseTypeModel, GenericParameterModel, ImportModel, LinesOfCode,
    LocalVariableModel, ParameterModel, ReturnValueModel,
};
use super::unit::CompilationUnitType;

/// Identity shared by classes, enums and delegates.
pub trait TypeHeader {
    fn name(&self) -> &str;
    fn name_mut(&mut self) -> &mut String;
    fn access_modifier_mut(&mut self) -> &mut String;
    fn modifier_mut(&mut self) -> &mut String;
    fn containing_namespace_name_mut(&mut self) -> &mut String;
    fn containing_class_name_mut(&mut self) -> &mut String;
}

macro_rules! impl_type_header {
    ($($model:ty),+ $(,)?) => {
        $(impl TypeHeader for $model {
            fn name(&self) -> &str {
                &self.name
            }
            fn name_mut(&mut self) -> &mut String {
                &mut self.name
            }
            fn access_modifier_mut(&mut self) -> &mut String {
                &mut self.access_modifier
            }
            fn modifier_mut(&mut self) -> &mut String {
                &mut self.modifier
            }
            fn containing_namespace_name_mut(&mut self) -> &mut String {
                &mut self.containing_namespace_name
            }
            fn containing_class_name_mut(&mut self) -> &mut String {
                &mut self.containing_class_name
            }
        })+
    };
}

impl_type_header!(ClassModel, EnumModel, DelegateModel);

macro_rules! field_capability {
    ($capability:ident, $method:ident, $field:ident, $ty:ty, [$($model:ty),+ $(,)?]) => {
        $(impl $capability for $model {
            fn $method(&mut self) -> &mut $ty {
                &mut self.$field
            }
        })+
    };
}

pub trait HasAttributes {
    fn attributes_mut(&mut self) -> &mut Vec<AttributeModel>;
}

field_capability!(
    HasAttributes,
    attributes_mut,
    attributes,
    Vec<AttributeModel>,
    [
        ClassModel,
        EnumModel,
        DelegateModel,
        FieldModel,
        PropertyModel,
        AccessorModel,
        MethodModel,
        ConstructorModel,
        DestructorModel,
        LocalFunctionModel,
        EnumLabelModel,
    ]
);

pub trait HasGenericParameters {
    fn generic_parameters_mut(&mut self) -> &mut Vec<GenericParameterModel>;
}

field_capability!(
    HasGenericParameters,
    generic_parameters_mut,
    generic_parameters,
    Vec<GenericParameterModel>,
    [ClassModel, DelegateModel, MethodModel, LocalFunctionModel]
);

pub trait HasParameters {
    fn parameters_mut(&mut self) -> &mut Vec<ParameterModel>;
}

field_capability!(
    HasParameters,
    parameters_mut,
    parameters,
    Vec<ParameterModel>,
    [DelegateModel, MethodModel, ConstructorModel, LocalFunctionModel]
);

pub trait HasReturnValue {
    fn return_value_mut(&mut self) -> &mut ReturnValueModel;
}

field_capability!(
    HasReturnValue,
    return_value_mut,
    return_value,
    ReturnValueModel,
    [DelegateModel, MethodModel, LocalFunctionModel, AccessorModel]
);

pub trait HasBaseTypes {
    fn base_types_mut(&mut self) -> &mut Vec<BaseTypeModel>;
}

field_capability!(
    HasBaseTypes,
    base_types_mut,
    base_types,
    Vec<BaseTypeModel>,
    [ClassModel, EnumModel, DelegateModel]
);

pub trait HasImports {
    fn imports_mut(&mut self) -> &mut Vec<ImportModel>;
}

field_capability!(
    HasImports,
    imports_mut,
    imports,
    Vec<ImportModel>,
    [CompilationUnitType, ClassModel, EnumModel, DelegateModel]
);

pub trait HasLinesOfCode {
    fn loc_mut(&mut self) -> &mut LinesOfCode;
}

field_capability!(
    HasLinesOfCode,
    loc_mut,
    loc,
    LinesOfCode,
    [
        CompilationUnitType,
        ClassModel,
        EnumModel,
        DelegateModel,
        PropertyModel,
        AccessorModel,
        MethodModel,
        ConstructorModel,
        DestructorModel,
        LocalFunctionModel,
    ]
);

/// Models with an executable body.
pub trait HasBehavior {
    fn cyclomatic_complexity_mut(&mut self) -> &mut u32;
    fn called_methods_mut(&mut self) -> &mut Vec<MethodCallModel>;
    fn accessed_fields_mut(&mut self) -> &mut Vec<AccessedField>;
    fn local_variables_mut(&mut self) -> &mut Vec<LocalVariableModel>;
    fn local_functions_mut(&mut self) -> &mut Vec<LocalFunctionModel>;
}

macro_rules! impl_behavior {
    ($($model:ty),+ $(,)?) => {
        $(impl HasBehavior for $model {
            fn cyclomatic_complexity_mut(&mut self) -> &mut u32 {
                &mut self.cyclomatic_complexity
            }
            fn called_methods_mut(&mut self) -> &mut Vec<MethodCallModel> {
                &mut self.called_methods
            }
            fn accessed_fields_mut(&mut self) -> &mut Vec<AccessedField> {
                &mut self.accessed_fields
            }
            fn local_variables_mut(&mut self) -> &mut Vec<LocalVariableModel> {
                &mut self.local_variables
            }
            fn local_functions_mut(&mut self) -> &mut Vec<LocalFunctionModel> {
                &mut self.local_functions
            }
        })+
    };
}

impl_behavior!(
    MethodModel,
    ConstructorModel,
    DestructorModel,
    AccessorModel,
    LocalFunctionModel,
);
