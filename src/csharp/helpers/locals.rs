//! Local variables declared in a member body.

use tree_sitter::Node;

use crate::models::{EntityType, LocalVariableModel};
use crate::semantic::SemanticModel;
use crate::semantic::declarations::{declared_name_text, declared_type, modifiers, variable_declaration};
use crate::semantic::nodes::{find_nodes_by_types, has_token, node_text};

const LOCAL_SITES: &[&str] = &["variable_declarator", "foreach_statement", "for_each_statement"];

/// Statements whose declarators are locals, as opposed to fields.
const LOCAL_STATEMENTS: &[&str] = &["local_declaration_statement", "using_statement", "for_statement"];

/// Locals of `body` in declaration order, excluding nested local functions.
pub fn local_variables(body: &Node, semantic: &SemanticModel) -> Vec<LocalVariableModel> {
    find_nodes_by_types(body, LOCAL_SITES, &["local_function_statement"])
        .iter()
        .filter_map(|site| match site.kind() {
            "variable_declarator" => declarator_local(site, semantic),
            _ => iteration_local(site, semantic),
        })
        .collect()
}

fn declarator_local(declarator: &Node, semantic: &SemanticModel) -> Option<LocalVariableModel> {
    let source = semantic.tree().source();
    let declaration = declarator.parent().filter(|p| p.kind() == "variable_declaration")?;
    let statement = declaration.parent().filter(|s| LOCAL_STATEMENTS.contains(&s.kind()))?;

    let mut modifier = modifiers(&statement, source);
    if statement.kind() == "using_statement" || has_token(&statement, "using") {
        modifier.push("using".to_string());
    }

    let entity_type = match semantic.local_declaration_type(declarator) {
        Some(ty) => ty.to_entity_type(),
        None => variable_declaration(&declaration)
            .and_then(|d| declared_type(&d))
            .map(|t| EntityType::named(node_text(&t, source)))
            .unwrap_or_default(),
    };
    Some(LocalVariableModel {
        name: declared_name_text(declarator, source).to_string(),
        entity_type,
        modifier: modifier.join(" "),
    })
}

fn iteration_local(statement: &Node, semantic: &SemanticModel) -> Option<LocalVariableModel> {
    let source = semantic.tree().source();
    let left = statement
        .child_by_field_name("left")
        .filter(|left| left.kind() == "identifier")?;
    let entity_type = match semantic.local_declaration_type(statement) {
        Some(ty) => ty.to_entity_type(),
        None => statement
            .child_by_field_name("type")
            .map(|t| EntityType::named(node_text(&t, source)))
            .unwrap_or_default(),
    };
    Some(LocalVariableModel {
        name: node_text(&left, source).to_string(),
        entity_type,
        modifier: String::new(),
    })
}
