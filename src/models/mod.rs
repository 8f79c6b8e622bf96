//! The language-agnostic fact model.
//!
//! Every model exclusively owns its children; cross references (base classes,
//! definition classes) are plain qualified-name strings.

pub mod capabilities;
pub mod class_types;
pub mod containers;
pub mod converter;
pub mod members;
pub mod references;
pub mod types;
pub mod unit;

pub use class_types::{ClassModel, ClassType, DelegateModel, EnumModel, Metrics};
pub use containers::{NamespaceModel, ProjectModel, RepositoryModel, SolutionModel};
pub use converter::{CSharpConverterList, ConverterList, VisualBasicConverterList, converter_for};
pub use members::{
    AccessorModel, ConstructorModel, DestructorModel, EnumLabelModel, FieldModel,
    LocalFunctionModel, MethodModel, PropertyModel,
};
pub use references::{AccessKind, AccessedField, MethodCallModel};
pub use types::{
    AttributeArgument, AttributeModel, BaseTypeModel, EntityType, GenericParameterModel,
    GenericType, ImportModel, LinesOfCode, LocalVariableModel, ParameterModel, ReturnValueModel,
};
pub use unit::CompilationUnitType;
