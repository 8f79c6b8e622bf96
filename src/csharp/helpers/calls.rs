//! Method call facts: invocations, object creations and constructor
//! initializers.

use tree_sitter::Node;

use super::names::{containing_class, simple_type_name};
use super::types::entity_type_of;
use crate::models::{MethodCallModel, ParameterModel};
use crate::semantic::model::member_name;
use crate::semantic::nodes::{find_child_by_type, has_token, named_children, node_text};
use crate::semantic::{MemberLookup, SemanticModel, TypeRef};

const CALL_SITES: &[&str] = &[
    "invocation_expression",
    "object_creation_expression",
    "constructor_initializer",
];

/// Call sites in `node`, in source order. Nested local functions are skipped.
pub fn call_sites<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut sites = Vec::new();
    collect_sites(node, true, &mut sites);
    sites
}

fn collect_sites<'t>(node: &Node<'t>, is_root: bool, sites: &mut Vec<Node<'t>>) {
    if !is_root && node.kind() == "local_function_statement" {
        return;
    }
    if CALL_SITES.contains(&node.kind()) {
        sites.push(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_sites(&child, false, sites);
    }
}

/// Call record for one call site.
pub fn method_call_model(
    site: &Node,
    semantic: &SemanticModel,
    location_class: &str,
) -> Option<MethodCallModel> {
    match site.kind() {
        "invocation_expression" => Some(invocation_call(site, semantic, location_class)),
        "object_creation_expression" => creation_call(site, semantic),
        "constructor_initializer" => Some(initializer_call(site, semantic, location_class)),
        _ => None,
    }
}

fn invocation_call(invocation: &Node, semantic: &SemanticModel, location_class: &str) -> MethodCallModel {
    let source = semantic.tree().source();
    let function = invocation
        .child_by_field_name("function")
        .or_else(|| invocation.named_child(0));
    let (name, receiver) = match function {
        Some(f) if f.kind() == "member_access_expression" => (
            f.child_by_field_name("name")
                .map(|n| member_name(&n, source).to_string())
                .unwrap_or_default(),
            f.child_by_field_name("expression"),
        ),
        Some(f) if f.kind() == "member_binding_expression" => (
            f.child_by_field_name("name")
                .map(|n| member_name(&n, source).to_string())
                .unwrap_or_default(),
            None,
        ),
        Some(f) => (member_name(&f, source).to_string(), None),
        None => (String::new(), None),
    };

    if let Some(lookup) = semantic.invocation_target(invocation) {
        return resolved_call(name, lookup, semantic, location_class);
    }

    let definition_class_name = match receiver {
        Some(receiver) => match semantic.type_of_expression(&receiver) {
            Some(ty) => semantic.definition_name(&ty),
            None => node_text(&receiver, source).to_string(),
        },
        None => location_class.to_string(),
    };
    MethodCallModel {
        name,
        definition_class_name,
        location_class_name: location_class.to_string(),
        parameter_types: argument_parameters(invocation, semantic),
    }
}

fn creation_call(creation: &Node, semantic: &SemanticModel) -> Option<MethodCallModel> {
    let source = semantic.tree().source();
    let type_node = creation.child_by_field_name("type")?;
    let created = semantic.resolve_type(&type_node);
    let name = simple_type_name(node_text(&type_node, source));
    let location_class_name = containing_class(creation)
        .map(|class| super::names::fully_qualified_name(&class, source))
        .unwrap_or_default();

    if let Some(lookup) = semantic.constructor_target(creation) {
        return Some(resolved_call(name, lookup, semantic, &location_class_name));
    }
    let definition_class_name = match &created {
        Some(ty) if ty.is_resolved() => semantic.definition_name(ty),
        _ => crate::semantic::symbols::strip_type_arguments(node_text(&type_node, source)),
    };
    Some(MethodCallModel {
        name,
        definition_class_name,
        location_class_name,
        parameter_types: argument_parameters(creation, semantic),
    })
}

/// `: base(...)` or `: this(...)` of a constructor.
fn initializer_call(initializer: &Node, semantic: &SemanticModel, location_class: &str) -> MethodCallModel {
    let calls_base = has_token(initializer, "base");
    let own = containing_class(initializer)
        .and_then(|class| semantic.declared_symbol(&class).cloned());

    let target: Option<TypeRef> = own.as_ref().and_then(|symbol| {
        if calls_base {
            semantic.symbols().base_class(symbol)
        } else {
            Some(symbol.self_reference())
        }
    });

    let Some(target) = target else {
        return MethodCallModel {
            name: if calls_base { "base" } else { "this" }.to_string(),
            definition_class_name: location_class.to_string(),
            location_class_name: location_class.to_string(),
            parameter_types: argument_parameters(initializer, semantic),
        };
    };

    let name = simple_type_name(&target.name);
    let argument_count = crate::semantic::model::argument_count(initializer);
    match semantic.symbols().find_constructor(&target, argument_count) {
        Some(lookup) => resolved_call(name, lookup, semantic, location_class),
        None => MethodCallModel {
            name,
            definition_class_name: semantic.definition_name(&target),
            location_class_name: location_class.to_string(),
            parameter_types: argument_parameters(initializer, semantic),
        },
    }
}

fn resolved_call(
    name: String,
    lookup: MemberLookup,
    semantic: &SemanticModel,
    location_class: &str,
) -> MethodCallModel {
    MethodCallModel {
        name,
        definition_class_name: semantic.definition_name(&lookup.owner),
        location_class_name: location_class.to_string(),
        parameter_types: lookup
            .member
            .parameters
            .iter()
            .map(|p| ParameterModel {
                entity_type: p.ty.to_entity_type(),
                modifier: p.modifier.clone(),
                default_value: p.default_value.clone(),
                attributes: Vec::new(),
            })
            .collect(),
    }
}

/// Parameter types inferred from the arguments of an unresolved call.
fn argument_parameters(site: &Node, semantic: &SemanticModel) -> Vec<ParameterModel> {
    let Some(list) = site
        .child_by_field_name("arguments")
        .or_else(|| find_child_by_type(site, "argument_list"))
    else {
        return Vec::new();
    };
    named_children(&list)
        .iter()
        .filter(|a| a.kind() == "argument")
        .map(|argument| {
            let expression = named_children(argument)
                .into_iter()
                .rfind(|c| c.kind() != "name_colon");
            let modifier = ["ref", "out", "in"]
                .iter()
                .find(|m| has_token(argument, m))
                .map(|m| m.to_string())
                .unwrap_or_default();
            ParameterModel {
                entity_type: entity_type_of(
                    expression
                        .and_then(|e| semantic.type_of_expression(&e))
                        .as_ref(),
                ),
                modifier,
                ..Default::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;
    use std::sync::Arc;

    fn calls(source: &str, kind: &str) -> Vec<MethodCallModel> {
        let tree = create_syntactic_model(source, Language::CSharp).unwrap();
        let semantic = SemanticModel::standalone(Arc::new(tree));
        let member = find_nodes_by_types(&semantic.tree().root(), &[kind], &[])[0];
        call_sites(&member)
            .iter()
            .filter_map(|site| method_call_model(site, &semantic, "N.Shop"))
            .collect()
    }

    #[test]
    fn test_resolved_invocations_and_creations() {
        let found = calls(
            "using System.Collections.Generic;
             namespace N { class Shop {
                 List<string> items = new List<string>();
                 void Add(string item) { items.Add(item); Log(item, 2); var other = new Shop(); }
                 void Log(string message, int level) { }
             } }",
            "method_declaration",
        );
        assert_eq!(found.len(), 3);

        assert_eq!(found[0].name, "Add");
        assert_eq!(found[0].definition_class_name, "System.Collections.Generic.List<T>");
        assert_eq!(found[0].parameter_types[0].entity_type.name, "string");

        assert_eq!(found[1].name, "Log");
        assert_eq!(found[1].definition_class_name, "N.Shop");
        assert_eq!(found[1].parameter_types.len(), 2);

        assert_eq!(found[2].name, "Shop");
        assert_eq!(found[2].definition_class_name, "N.Shop");
        assert_eq!(found[2].location_class_name, "N.Shop");
    }

    #[test]
    fn test_unresolved_receiver_keeps_its_text() {
        let found = calls(
            "namespace N { class Shop { void M() { gateway.Send(42, \"x\"); } } }",
            "method_declaration",
        );
        assert_eq!(found[0].name, "Send");
        assert_eq!(found[0].definition_class_name, "gateway");
        let types: Vec<&str> = found[0]
            .parameter_types
            .iter()
            .map(|p| p.entity_type.name.as_str())
            .collect();
        assert_eq!(types, vec!["int", "string"]);
    }

    #[test]
    fn test_constructor_initializer_calls_base() {
        let tree = create_syntactic_model(
            "namespace N { class Base { public Base(int x) { } }
             class Shop : Base { public Shop() : base(1) { } } }",
            Language::CSharp,
        )
        .unwrap();
        let semantic = SemanticModel::standalone(Arc::new(tree));
        let constructor =
            find_nodes_by_types(&semantic.tree().root(), &["constructor_declaration"], &[])[1];
        let call = call_sites(&constructor)
            .iter()
            .find_map(|site| method_call_model(site, &semantic, "N.Shop"))
            .unwrap();
        assert_eq!(call.name, "Base");
        assert_eq!(call.definition_class_name, "N.Base");
        assert_eq!(call.location_class_name, "N.Shop");
        assert_eq!(call.parameter_types[0].entity_type.name, "int");
    }
}
