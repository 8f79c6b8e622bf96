//! Type references as fact-model entity types.

use tree_sitter::Node;

use crate::models::EntityType;
use crate::semantic::{SemanticModel, TypeRef};

/// Entity type of a type syntax node: the resolved type when the semantic
/// model knows it, the source spelling otherwise.
pub fn entity_type(type_node: Option<Node>, semantic: &SemanticModel) -> EntityType {
    let Some(type_node) = type_node else {
        return EntityType::default();
    };
    match semantic.resolve_type(&type_node) {
        Some(resolved) => resolved.to_entity_type(),
        None => EntityType::named(semantic.tree().text(&type_node)),
    }
}

/// Entity type of a resolved reference, `""` when unknown.
pub fn entity_type_of(ty: Option<&TypeRef>) -> EntityType {
    ty.map(TypeRef::to_entity_type).unwrap_or_default()
}

/// Whether a type node spells a nullable type (`int?`, `string?`).
pub fn is_nullable(type_node: &Node) -> bool {
    type_node.kind() == "nullable_type"
}
