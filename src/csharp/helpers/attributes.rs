//! Attribute facts.

use tree_sitter::Node;

use super::types::entity_type_of;
use crate::models::{AttributeArgument, AttributeModel};
use crate::semantic::SemanticModel;
use crate::semantic::declarations::{is_params_name, params_prefix};
use crate::semantic::nodes::{
    find_child_by_type, find_children_by_type, find_parent_of_types, named_children, node_text,
};

/// Target an attribute applies to when the list names none.
pub fn attribute_target(node: &Node) -> &'static str {
    match node.kind() {
        "class_declaration"
        | "interface_declaration"
        | "struct_declaration"
        | "record_declaration"
        | "record_struct_declaration"
        | "enum_declaration"
        | "delegate_declaration" => "type",
        "method_declaration"
        | "constructor_declaration"
        | "destructor_declaration"
        | "operator_declaration"
        | "conversion_operator_declaration"
        | "local_function_statement"
        | "accessor_declaration" => "method",
        "field_declaration" | "variable_declarator" | "enum_member_declaration" => "field",
        "event_field_declaration" | "event_declaration" => "event",
        "property_declaration" | "indexer_declaration" => "property",
        "parameter" => "param",
        "identifier" if is_params_name(node) => "param",
        "type_parameter" => "typevar",
        "compilation_unit" => "assembly",
        _ => "",
    }
}

/// Node whose attribute lists describe `node`. Declarators share the lists
/// of their field declaration.
pub fn attribute_owner<'t>(node: &Node<'t>) -> Node<'t> {
    if node.kind() == "variable_declarator" {
        if let Some(declaration) =
            find_parent_of_types(node, &["field_declaration", "event_field_declaration"])
        {
            return declaration;
        }
    }
    *node
}

/// Attributes of a declaration, excluding those aimed at its return value.
pub fn attributes(node: &Node, semantic: &SemanticModel) -> Vec<AttributeModel> {
    let owner = attribute_owner(node);
    let default_target = attribute_target(node);
    collect(&owner, semantic, default_target, |target| target != "return")
}

/// Attributes written with an explicit `return:` target.
pub fn return_attributes(node: &Node, semantic: &SemanticModel) -> Vec<AttributeModel> {
    collect(node, semantic, attribute_target(node), |target| target == "return")
}

/// Attribute lists written on `owner`. An unwrapped `params` parameter
/// carries them as siblings before its `params` keyword.
fn attribute_lists<'t>(owner: &Node<'t>) -> Vec<Node<'t>> {
    if is_params_name(owner) {
        return params_prefix(owner)
            .into_iter()
            .filter(|node| node.kind() == "attribute_list")
            .collect();
    }
    find_children_by_type(owner, "attribute_list")
}

fn collect<F>(owner: &Node, semantic: &SemanticModel, default_target: &str, keep: F) -> Vec<AttributeModel>
where
    F: Fn(&str) -> bool,
{
    let source = semantic.tree().source();
    let mut models = Vec::new();
    for list in attribute_lists(owner) {
        let target = find_child_by_type(&list, "attribute_target_specifier")
            .map(|t| node_text(&t, source).trim_end_matches(':').trim().to_string())
            .unwrap_or_else(|| default_target.to_string());
        if !keep(&target) {
            continue;
        }
        for attribute in find_children_by_type(&list, "attribute") {
            models.push(attribute_model(&attribute, &target, semantic));
        }
    }
    models
}

fn attribute_model(attribute: &Node, target: &str, semantic: &SemanticModel) -> AttributeModel {
    let source = semantic.tree().source();
    let name_node = attribute
        .child_by_field_name("name")
        .or_else(|| attribute.named_child(0));
    let name = name_node
        .map(|n| {
            semantic
                .resolve_attribute(&n)
                .unwrap_or_else(|| node_text(&n, source).to_string())
        })
        .unwrap_or_default();

    let arguments = find_child_by_type(attribute, "attribute_argument_list")
        .map(|list| {
            find_children_by_type(&list, "attribute_argument")
                .iter()
                .map(|argument| attribute_argument(argument, semantic))
                .collect()
        })
        .unwrap_or_default();

    AttributeModel {
        name,
        target: target.to_string(),
        arguments,
    }
}

fn attribute_argument(argument: &Node, semantic: &SemanticModel) -> AttributeArgument {
    let expression = named_children(argument)
        .into_iter()
        .rfind(|c| c.kind() != "name_equals" && c.kind() != "name_colon");
    let value = expression
        .map(|e| semantic.tree().text(&e).to_string())
        .unwrap_or_default();
    let ty = expression.and_then(|e| semantic.type_of_expression(&e));
    AttributeArgument {
        value,
        entity_type: entity_type_of(ty.as_ref()),
    }
}
