//! Lexical scope of a syntax node: namespaces, containing types, type
//! parameters and using directives visible at that point.

use tree_sitter::Node;

use super::declarations::{
    TYPE_DECLARATIONS, Using, declared_name_text, namespace_name, parse_using,
    type_parameter_names,
};
use super::nodes::{find_child_by_type, find_children_by_type};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Dotted namespace, `""` for the global namespace.
    pub namespace: String,
    /// Qualified names of enclosing types, outermost first.
    pub containing_types: Vec<String>,
    pub type_parameters: Vec<String>,
    pub usings: Vec<Using>,
}

impl Scope {
    /// Scope at `node`. A type declaration is part of its own scope.
    pub fn of(node: &Node, source: &str) -> Scope {
        let mut namespaces: Vec<String> = Vec::new();
        let mut type_names: Vec<String> = Vec::new();
        let mut type_parameters: Vec<String> = Vec::new();
        let mut usings: Vec<Using> = Vec::new();
        let mut in_file_scoped_namespace = false;

        let mut current = Some(*node);
        while let Some(n) = current {
            match n.kind() {
                kind if TYPE_DECLARATIONS.contains(&kind) => {
                    type_names.push(declared_name_text(&n, source).to_string());
                    type_parameters.extend(type_parameter_names(&n, source));
                }
                "method_declaration" | "local_function_statement" => {
                    type_parameters.extend(type_parameter_names(&n, source));
                }
                "namespace_declaration" => {
                    namespaces.push(namespace_name(&n, source).to_string());
                    let body = n
                        .child_by_field_name("body")
                        .or_else(|| find_child_by_type(&n, "declaration_list"));
                    if let Some(body) = body {
                        usings.extend(usings_in(&body, source));
                    }
                }
                "file_scoped_namespace_declaration" => {
                    in_file_scoped_namespace = true;
                    namespaces.push(namespace_name(&n, source).to_string());
                    usings.extend(usings_in(&n, source));
                }
                "compilation_unit" => {
                    usings.extend(usings_in(&n, source));
                    if !in_file_scoped_namespace {
                        if let Some(file_scoped) = preceding_file_scoped_namespace(&n, node) {
                            namespaces.push(namespace_name(&file_scoped, source).to_string());
                            usings.extend(usings_in(&file_scoped, source));
                        }
                    }
                }
                _ => {}
            }
            current = n.parent();
        }

        namespaces.reverse();
        let namespace = namespaces
            .into_iter()
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        type_names.reverse();
        let mut containing_types = Vec::with_capacity(type_names.len());
        let mut prefix = namespace.clone();
        for name in type_names {
            prefix = qualify(&prefix, &name);
            containing_types.push(prefix.clone());
        }

        Scope {
            namespace,
            containing_types,
            type_parameters,
            usings,
        }
    }

    /// Innermost enclosing type.
    pub fn containing_type(&self) -> Option<&str> {
        self.containing_types.last().map(String::as_str)
    }

    /// `A.B.C` yields `A.B.C`, `A.B`, `A` and then the global namespace.
    pub fn namespace_candidates(&self) -> Vec<String> {
        let mut candidates = Vec::new();
        let mut current = self.namespace.as_str();
        while !current.is_empty() {
            candidates.push(current.to_string());
            current = current.rfind('.').map(|i| &current[..i]).unwrap_or("");
        }
        candidates.push(String::new());
        candidates
    }

    pub fn alias(&self, name: &str) -> Option<&Using> {
        self.usings.iter().find(|u| u.alias == name)
    }
}

/// `prefix.name`, or `name` when `prefix` is empty.
pub fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn usings_in(node: &Node, source: &str) -> Vec<Using> {
    find_children_by_type(node, "using_directive")
        .iter()
        .filter_map(|u| parse_using(u, source))
        .collect()
}

/// A `namespace X;` declaration that is a sibling of (not an ancestor of)
/// the declarations it governs.
fn preceding_file_scoped_namespace<'t>(unit: &Node<'t>, node: &Node) -> Option<Node<'t>> {
    let declaration = find_child_by_type(unit, "file_scoped_namespace_declaration")?;
    (declaration.start_byte() <= node.start_byte() && *node != *unit).then_some(declaration)
}

/// Fully qualified name of a type declaration, without generic parameters.
pub fn declared_type_key(node: &Node, source: &str) -> String {
    Scope::of(node, source)
        .containing_types
        .pop()
        .unwrap_or_else(|| declared_name_text(node, source).to_string())
}
