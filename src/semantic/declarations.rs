//! Syntactic accessors for C# declarations.
//!
//! The grammar does not expose every interesting child through a field, so
//! each accessor tries the field first and falls back to a positional search.

use tree_sitter::Node;

use super::nodes::{find_child_by_type, find_child_by_types, find_children_by_type, node_text};

pub const CLASS_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "struct_declaration",
    "record_declaration",
    "record_struct_declaration",
];

pub const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "struct_declaration",
    "record_declaration",
    "record_struct_declaration",
    "enum_declaration",
    "delegate_declaration",
];

pub const NAMESPACE_DECLARATIONS: &[&str] =
    &["namespace_declaration", "file_scoped_namespace_declaration"];

/// Node kinds that spell a type.
pub const TYPE_NODES: &[&str] = &[
    "identifier",
    "generic_name",
    "qualified_name",
    "alias_qualified_name",
    "predefined_type",
    "nullable_type",
    "array_type",
    "tuple_type",
    "pointer_type",
    "implicit_type",
    "ref_type",
    "scoped_type",
    "function_pointer_type",
];

pub const PARAMETER_MODIFIERS: &[&str] = &["ref", "out", "in", "params", "this", "scoped", "readonly"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Record,
    Enum,
    Delegate,
}

impl TypeKind {
    pub fn of(node: &Node) -> Option<Self> {
        match node.kind() {
            "class_declaration" => Some(TypeKind::Class),
            "interface_declaration" => Some(TypeKind::Interface),
            "struct_declaration" | "record_struct_declaration" => Some(TypeKind::Struct),
            "record_declaration" => Some(TypeKind::Record),
            "enum_declaration" => Some(TypeKind::Enum),
            "delegate_declaration" => Some(TypeKind::Delegate),
            _ => None,
        }
    }

    /// Discriminator persisted in `ClassType`.
    pub fn discriminator(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Record => "record",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }

    /// Implicit base type when the declaration names no base class.
    pub fn implicit_base(&self) -> Option<&'static str> {
        match self {
            TypeKind::Class | TypeKind::Record => Some("System.Object"),
            TypeKind::Struct => Some("System.ValueType"),
            TypeKind::Enum => Some("System.Enum"),
            TypeKind::Delegate => Some("System.Delegate"),
            TypeKind::Interface => None,
        }
    }
}

/// Declared name of a type, member, parameter or local function.
///
/// Falls back to the identifier right before the parameter list, then to
/// the first identifier child.
pub fn declared_name<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if is_params_name(node) {
        return Some(*node);
    }
    if let Some(name) = node.child_by_field_name("name") {
        return Some(name);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    if let Some(params) = children.iter().position(|c| c.kind() == "parameter_list") {
        if let Some(name) = children[..params].iter().rev().find(|c| c.kind() == "identifier") {
            return Some(*name);
        }
    }
    children.into_iter().find(|c| c.kind() == "identifier")
}

pub fn declared_name_text<'s>(node: &Node, source: &'s str) -> &'s str {
    declared_name(node)
        .map(|name| node_text(&name, source))
        .unwrap_or("")
}

/// Modifier keywords (`public`, `static`, `async`, ...) in source order.
pub fn modifiers(node: &Node, source: &str) -> Vec<String> {
    find_children_by_type(node, "modifier")
        .iter()
        .map(|m| node_text(m, source).to_string())
        .collect()
}

pub fn type_parameter_list<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("type_parameters")
        .or_else(|| find_child_by_type(node, "type_parameter_list"))
}

pub fn type_parameters<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    type_parameter_list(node)
        .map(|list| find_children_by_type(&list, "type_parameter"))
        .unwrap_or_default()
}

pub fn type_parameter_names(node: &Node, source: &str) -> Vec<String> {
    type_parameters(node)
        .iter()
        .map(|p| declared_name_text(p, source).to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

pub fn parameter_list<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("parameters")
        .or_else(|| find_child_by_type(node, "parameter_list"))
}

/// Parameter nodes of a declaration, in source order. See [`list_parameters`].
pub fn parameters<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    parameter_list(node)
        .map(|list| list_parameters(&list))
        .unwrap_or_default()
}

/// Parameters of an indexer's `[...]` list.
pub fn bracketed_parameters<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    find_child_by_type(node, "bracketed_parameter_list")
        .map(|list| list_parameters(&list))
        .unwrap_or_default()
}

/// Entries of a (bracketed) parameter list. A `params T[] name` entry has no
/// node of its own; its name identifier stands for it.
pub fn list_parameters<'t>(list: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = list.walk();
    let params: Vec<Node<'t>> = list
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "parameter" || is_params_name(c))
        .collect();
    params
}

/// Whether `node` is the name of an unwrapped `params` parameter: an
/// identifier directly in a parameter list, after `params` and a type.
pub fn is_params_name(node: &Node) -> bool {
    node.kind() == "identifier"
        && node
            .parent()
            .is_some_and(|p| matches!(p.kind(), "parameter_list" | "bracketed_parameter_list"))
        && node
            .prev_sibling()
            .and_then(|ty| ty.prev_sibling())
            .is_some_and(|keyword| keyword.kind() == "params")
}

/// Nodes of an unwrapped `params` parameter before its name, back to the
/// preceding separator: attribute lists, `params` and the type.
pub fn params_prefix<'t>(name: &Node<'t>) -> Vec<Node<'t>> {
    let mut prefix = Vec::new();
    let mut current = name.prev_sibling();
    while let Some(node) = current {
        if matches!(node.kind(), "," | "(" | "[") {
            break;
        }
        prefix.push(node);
        current = node.prev_sibling();
    }
    prefix.reverse();
    prefix
}

/// Type child of a parameter, property, field declaration or local.
pub fn declared_type<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if is_params_name(node) {
        return node.prev_sibling();
    }
    if let Some(ty) = node.child_by_field_name("type") {
        return Some(ty);
    }
    let name = declared_name(node);
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .take_while(|c| Some(*c) != name)
        .filter(|c| TYPE_NODES.contains(&c.kind()))
        .last();
    found
}

/// Return type of a method, local function, delegate or operator.
pub fn return_type<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("returns")
        .or_else(|| node.child_by_field_name("type"))
        .or_else(|| declared_type(node))
}

/// Keyword modifier of a parameter (`ref`, `out`, `params`, ...), or `""`.
pub fn parameter_modifier(node: &Node, source: &str) -> String {
    if is_params_name(node) {
        return "params".to_string();
    }
    let mut cursor = node.walk();
    let found: Vec<String> = node
        .children(&mut cursor)
        .filter(|c| {
            c.kind() == "modifier"
                || c.kind() == "parameter_modifier"
                || (!c.is_named() && PARAMETER_MODIFIERS.contains(&c.kind()))
        })
        .map(|c| node_text(&c, source).to_string())
        .filter(|text| PARAMETER_MODIFIERS.contains(&text.as_str()))
        .collect();
    found.join(" ")
}

/// Body block or arrow expression of a member.
pub fn body<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("body")
        .or_else(|| find_child_by_types(node, &["block", "arrow_expression_clause"]))
}

pub fn accessor_list<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    node.child_by_field_name("accessors")
        .or_else(|| find_child_by_type(node, "accessor_list"))
}

/// `variable_declaration` child of a field, event field or local declaration.
pub fn variable_declaration<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if node.kind() == "variable_declaration" {
        return Some(*node);
    }
    find_child_by_type(node, "variable_declaration")
}

pub fn variable_declarators<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    variable_declaration(node)
        .map(|declaration| find_children_by_type(&declaration, "variable_declarator"))
        .unwrap_or_default()
}

/// Types named in a `base_list`, in source order.
pub fn base_type_nodes<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let Some(base_list) = find_child_by_type(node, "base_list") else {
        return Vec::new();
    };
    let mut cursor = base_list.walk();
    let types: Vec<Node<'t>> = base_list
        .named_children(&mut cursor)
        .filter_map(|child| {
            if child.kind() == "primary_constructor_base_type" {
                child
                    .child_by_field_name("type")
                    .or_else(|| child.named_child(0))
            } else if TYPE_NODES.contains(&child.kind()) {
                Some(child)
            } else {
                None
            }
        })
        .collect();
    types
}

/// Name spelled by a namespace declaration.
pub fn namespace_name<'s>(node: &Node, source: &'s str) -> &'s str {
    node.child_by_field_name("name")
        .or_else(|| find_child_by_types(node, &["qualified_name", "identifier"]))
        .map(|name| node_text(&name, source))
        .unwrap_or("")
}

/// A `using` directive, syntactically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Using {
    pub name: String,
    pub alias: String,
    pub is_static: bool,
    pub is_global: bool,
}

pub fn parse_using(node: &Node, source: &str) -> Option<Using> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    let is_static = children.iter().any(|c| c.kind() == "static");
    let is_global = children.iter().any(|c| c.kind() == "global");
    let names: Vec<&Node> = children
        .iter()
        .filter(|c| c.is_named() && TYPE_NODES.contains(&c.kind()))
        .collect();

    let mut alias = String::new();
    if let Some(name_equals) = children.iter().find(|c| c.kind() == "name_equals") {
        alias = find_child_by_type(name_equals, "identifier")
            .map(|id| node_text(&id, source).to_string())
            .unwrap_or_default();
    } else if let Some(equals) = children.iter().position(|c| c.kind() == "=") {
        alias = children[..equals]
            .iter()
            .rev()
            .find(|c| c.kind() == "identifier")
            .map(|id| node_text(id, source).to_string())
            .unwrap_or_default();
    }

    let target = names.last()?;
    let name = node_text(target, source).trim_start_matches("global::").to_string();
    if name.is_empty() || name == alias {
        return None;
    }
    Some(Using {
        name,
        alias,
        is_static,
        is_global,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;

    #[test]
    fn test_using_variants() {
        let source = "global using System;\nusing static System.Math;\nusing Io = System.IO;\nclass A {}";
        let tree = create_syntactic_model(source, Language::CSharp).unwrap();
        let usings: Vec<Using> = find_nodes_by_types(&tree.root(), &["using_directive"], &[])
            .iter()
            .filter_map(|node| parse_using(node, tree.source()))
            .collect();

        assert_eq!(usings.len(), 3);
        assert_eq!(usings[0].name, "System");
        assert!(usings[0].is_global);
        assert_eq!(usings[1].name, "System.Math");
        assert!(usings[1].is_static);
        assert_eq!(usings[2].name, "System.IO");
        assert_eq!(usings[2].alias, "Io");
    }

    #[test]
    fn test_method_parts() {
        let source = "class A { public static List<int> Make<T>(ref int count, string[] rest = null) => null; }";
        let tree = create_syntactic_model(source, Language::CSharp).unwrap();
        let method = find_nodes_by_types(&tree.root(), &["method_declaration"], &[])[0];
        let text = |n: Node| tree.text(&n).to_string();

        assert_eq!(declared_name_text(&method, tree.source()), "Make");
        assert_eq!(return_type(&method).map(text).unwrap(), "List<int>");
        assert_eq!(modifiers(&method, tree.source()), vec!["public", "static"]);
        assert_eq!(type_parameter_names(&method, tree.source()), vec!["T"]);

        let params = parameters(&method);
        assert_eq!(params.len(), 2);
        assert_eq!(parameter_modifier(&params[0], tree.source()), "ref");
        assert_eq!(declared_type(&params[0]).map(text).unwrap(), "int");
        assert_eq!(parameter_modifier(&params[1], tree.source()), "");
        assert_eq!(declared_type(&params[1]).map(text).unwrap(), "string[]");
    }
}
