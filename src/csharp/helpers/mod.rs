//! Pure extraction helpers over C# syntax and the semantic model.
//!
//! Every helper degrades to the source spelling when the semantic model
//! cannot resolve a name; none of them fail.

pub mod access;
pub mod attributes;
pub mod base_types;
pub mod calls;
pub mod complexity;
pub mod generics;
pub mod loc;
pub mod locals;
pub mod modifiers;
pub mod names;
pub mod parameters;
pub mod types;

pub use access::{access_field, access_kind, field_access_candidates};
pub use attributes::{attribute_target, attributes, return_attributes};
pub use base_types::base_types;
pub use calls::{call_sites, method_call_model};
pub use complexity::cyclomatic_complexity;
pub use generics::generic_parameters;
pub use loc::lines_of_code;
pub use locals::local_variables;
pub use modifiers::modifiers;
pub use names::{containing_class_name, containing_namespace_name, fully_qualified_name};
pub use parameters::{parameter_info, parameters};
pub use types::{entity_type, entity_type_of, is_nullable};
