//! Field and property accesses inside bodies.

use tree_sitter::Node;

use crate::models::{AccessKind, AccessedField};
use crate::semantic::SemanticModel;
use crate::semantic::model::member_name;
use crate::semantic::nodes::{has_token, node_text};

/// Parents under which an identifier names a type or a declaration rather
/// than a value.
const NON_VALUE_PARENTS: &[&str] = &[
    "generic_name",
    "qualified_name",
    "alias_qualified_name",
    "type_argument_list",
    "attribute",
    "name_colon",
    "name_equals",
    "base_list",
    "nullable_type",
    "array_type",
    "pointer_type",
    "ref_type",
    "type_parameter",
    "type_parameter_constraints_clause",
    "type_parameter_constraint",
    "parameter",
    "parameter_list",
    "bracketed_parameter_list",
    "tuple_element",
    "declaration_pattern",
    "declaration_expression",
    "catch_declaration",
    "labeled_statement",
    "goto_statement",
    "using_directive",
    "explicit_interface_specifier",
];

/// Whether the access at `node` reads or writes.
///
/// Assignment targets (simple or compound), `++`/`--` operands and `ref` or
/// `out` arguments are writes.
pub fn access_kind(node: &Node, source: &str) -> AccessKind {
    let mut current = *node;
    while let Some(parent) = current.parent() {
        if parent.kind() != "parenthesized_expression" {
            break;
        }
        current = parent;
    }
    let Some(parent) = current.parent() else {
        return AccessKind::Getter;
    };
    match parent.kind() {
        "assignment_expression" if parent.child_by_field_name("left") == Some(current) => {
            AccessKind::Setter
        }
        "prefix_unary_expression" | "postfix_unary_expression" => {
            let text = node_text(&parent, source).trim();
            if text.starts_with("++")
                || text.starts_with("--")
                || text.ends_with("++")
                || text.ends_with("--")
            {
                AccessKind::Setter
            } else {
                AccessKind::Getter
            }
        }
        "argument" if has_token(&parent, "ref") || has_token(&parent, "out") => AccessKind::Setter,
        _ => AccessKind::Getter,
    }
}

/// Identifiers and member accesses in `body` that may name a field or
/// property, in source order. Nested local functions are skipped.
pub fn field_access_candidates<'t>(body: &Node<'t>) -> Vec<Node<'t>> {
    let mut candidates = Vec::new();
    collect_candidates(body, true, &mut candidates);
    candidates
}

fn collect_candidates<'t>(node: &Node<'t>, is_root: bool, candidates: &mut Vec<Node<'t>>) {
    if !is_root && node.kind() == "local_function_statement" {
        return;
    }
    match node.kind() {
        "member_access_expression" if !is_invoked(node) => candidates.push(*node),
        "identifier" if is_value_identifier(node) => candidates.push(*node),
        _ => {}
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_candidates(&child, false, candidates);
    }
}

/// `node` is the function part of an invocation.
fn is_invoked(node: &Node) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == "invocation_expression"
            && parent
                .child_by_field_name("function")
                .or_else(|| parent.named_child(0))
                == Some(*node)
    })
}

fn is_value_identifier(node: &Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if NON_VALUE_PARENTS.contains(&parent.kind()) || is_invoked(node) {
        return false;
    }
    if parent.kind() == "member_access_expression" {
        return parent.child_by_field_name("expression") == Some(*node);
    }
    if parent.child_by_field_name("type") == Some(*node) {
        return false;
    }
    if parent.child_by_field_name("name") == Some(*node) {
        return false;
    }
    if parent.kind() == "lambda_expression" && parent.child_by_field_name("parameters") == Some(*node) {
        return false;
    }
    true
}

/// Accessed-field record for one candidate, or `None` when it does not
/// refer to a field, property or event.
///
/// `this.X` falls back to the enclosing class when the member cannot be
/// resolved.
pub fn access_field(node: &Node, semantic: &SemanticModel, location_class: &str) -> Option<AccessedField> {
    let source = semantic.tree().source();
    let kind = access_kind(node, source);
    if let Some(lookup) = semantic.field_target(node) {
        return Some(AccessedField {
            name: lookup.member.name,
            kind,
            definition_class_name: semantic.definition_name(&lookup.owner),
            location_class_name: location_class.to_string(),
        });
    }
    if node.kind() != "member_access_expression" {
        return None;
    }
    let receiver = node.child_by_field_name("expression")?;
    if !matches!(receiver.kind(), "this_expression" | "this") {
        return None;
    }
    let name = node.child_by_field_name("name")?;
    Some(AccessedField {
        name: member_name(&name, source).to_string(),
        kind,
        definition_class_name: location_class.to_string(),
        location_class_name: location_class.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::declarations::{body, declared_name_text};
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;
    use std::sync::Arc;

    fn accesses(source: &str) -> Vec<AccessedField> {
        let tree = create_syntactic_model(source, Language::CSharp).unwrap();
        let semantic = SemanticModel::standalone(Arc::new(tree));
        let method = find_nodes_by_types(&semantic.tree().root(), &["method_declaration"], &[])
            .into_iter()
            .find(|m| declared_name_text(m, semantic.tree().source()) == "M")
            .unwrap();
        let body = body(&method).unwrap();
        field_access_candidates(&body)
            .iter()
            .filter_map(|c| access_field(c, &semantic, "N.C"))
            .collect()
    }

    #[test]
    fn test_read_and_write_kinds() {
        let found = accesses(
            "namespace N { class C {
                int a; int b; int c; int d;
                void Swap(ref int x) { }
                void M() { a = b; c += 1; d++; Swap(ref a); }
            } }",
        );
        let summary: Vec<(&str, AccessKind)> =
            found.iter().map(|f| (f.name.as_str(), f.kind)).collect();
        assert_eq!(
            summary,
            vec![
                ("a", AccessKind::Setter),
                ("b", AccessKind::Getter),
                ("c", AccessKind::Setter),
                ("d", AccessKind::Setter),
                ("a", AccessKind::Setter),
            ]
        );
        assert!(found.iter().all(|f| f.definition_class_name == "N.C"));
        assert!(found.iter().all(|f| f.location_class_name == "N.C"));
    }

    #[test]
    fn test_this_access_and_locals() {
        let found = accesses(
            "namespace N { class C {
                int total;
                void M(int count) { int local = count; this.total = local; }
            } }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "total");
        assert_eq!(found[0].kind, AccessKind::Setter);
    }

    #[test]
    fn test_unresolved_this_member_falls_back_to_location() {
        let found = accesses("namespace N { class C { void M() { var x = this.missing; } } }");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].definition_class_name, "N.C");
        assert_eq!(found[0].kind, AccessKind::Getter);
    }

    #[test]
    fn test_parenthesized_target_is_a_write() {
        let found = accesses("class C { int v; void M() { (v) = 3; } }");
        assert_eq!(found[0].kind, AccessKind::Setter);
    }
}
