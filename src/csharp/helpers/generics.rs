//! Generic type parameters with their variance and constraints.

use tree_sitter::Node;

use super::attributes::attributes;
use super::types::entity_type;
use crate::models::{EntityType, GenericParameterModel};
use crate::semantic::SemanticModel;
use crate::semantic::declarations::{TYPE_NODES, declared_name_text, type_parameters};
use crate::semantic::nodes::{find_child_by_type, find_children_by_type, has_token, named_children, node_text};

pub fn generic_parameters(declaration: &Node, semantic: &SemanticModel) -> Vec<GenericParameterModel> {
    let source = semantic.tree().source();
    type_parameters(declaration)
        .iter()
        .map(|parameter| {
            let name = declared_name_text(parameter, source).to_string();
            let modifier = ["in", "out"]
                .into_iter()
                .find(|variance| has_token(parameter, variance))
                .unwrap_or("")
                .to_string();
            GenericParameterModel {
                constraints: constraints(declaration, &name, semantic),
                attributes: attributes(parameter, semantic),
                name,
                modifier,
            }
        })
        .collect()
}

/// Constraints named for `parameter` in the `where` clauses of `declaration`.
fn constraints(declaration: &Node, parameter: &str, semantic: &SemanticModel) -> Vec<EntityType> {
    let source = semantic.tree().source();
    find_children_by_type(declaration, "type_parameter_constraints_clause")
        .iter()
        .filter(|clause| {
            clause
                .child_by_field_name("target")
                .or_else(|| find_child_by_type(clause, "identifier"))
                .is_some_and(|target| node_text(&target, source) == parameter)
        })
        .flat_map(|clause| find_children_by_type(clause, "type_parameter_constraint"))
        .map(|constraint| {
            let type_node = constraint.child_by_field_name("type").or_else(|| {
                named_children(&constraint)
                    .into_iter()
                    .find(|c| TYPE_NODES.contains(&c.kind()))
            });
            match type_node {
                Some(type_node) => entity_type(Some(type_node), semantic),
                None => EntityType::named(node_text(&constraint, source)),
            }
        })
        .collect()
}
