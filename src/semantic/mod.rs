//! Syntactic and semantic model providers.
//!
//! Source text becomes a [`SyntaxTree`]; trees are gathered into a
//! compilation by [`CompilationMaker`], which resolves every declared type
//! against the shared [`ReferenceSet`] and hands out per-tree
//! [`SemanticModel`]s.

pub mod compilation;
pub mod declarations;
pub mod model;
pub mod nodes;
pub mod references;
pub mod scope;
pub mod symbols;
pub mod syntax_tree;
pub mod type_ref;

pub use compilation::{Compilation, CompilationMaker};
pub use model::{BindingKind, LocalBinding, SemanticModel};
pub use references::ReferenceSet;
pub use scope::Scope;
pub use symbols::{MemberKind, MemberLookup, MemberSymbol, SymbolTable, TypeSymbol};
pub use syntax_tree::{Diagnostic, Severity, SyntaxTree, create_syntactic_model, parse_with};
pub use type_ref::{TypeRef, TypeRefKind};
