//! C# visitor tree.

pub mod behavior;
pub mod info;
pub mod leaves;
pub mod setters;

pub use setters::compilation_unit_visitor;
