//! Qualified naming of declarations.

use tree_sitter::Node;

use crate::semantic::declarations::{CLASS_DECLARATIONS, TYPE_DECLARATIONS, type_parameter_names};
use crate::semantic::nodes::find_parent_of_types;
use crate::semantic::scope::{Scope, declared_type_key};

/// `Ns.Outer.Box<T>` for a type declaration node.
pub fn fully_qualified_name(declaration: &Node, source: &str) -> String {
    let key = declared_type_key(declaration, source);
    let parameters = type_parameter_names(declaration, source);
    if parameters.is_empty() {
        key
    } else {
        format!("{}<{}>", key, parameters.join(", "))
    }
}

/// Dotted namespace enclosing `node`, `""` at global scope.
pub fn containing_namespace_name(node: &Node, source: &str) -> String {
    Scope::of(node, source).namespace
}

/// Qualified name of the type declaration enclosing `node`, excluding
/// `node` itself.
pub fn containing_class_name(node: &Node, source: &str) -> String {
    find_parent_of_types(node, TYPE_DECLARATIONS)
        .map(|parent| fully_qualified_name(&parent, source))
        .unwrap_or_default()
}

/// Class-like declaration enclosing `node`, excluding enums and delegates.
pub fn containing_class<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    find_parent_of_types(node, CLASS_DECLARATIONS)
}

/// Last dotted segment with generic arguments removed (`List` for
/// `System.Collections.Generic.List<int>`).
pub fn simple_type_name(text: &str) -> String {
    let stripped = crate::semantic::symbols::strip_type_arguments(text);
    let stripped = stripped.trim_end_matches(['?', '[', ']']);
    stripped
        .rsplit(['.', ':'])
        .next()
        .unwrap_or(stripped)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;

    #[test]
    fn test_qualified_names_under_nesting() {
        let source = "namespace A.B { class C { class T { } } }";
        let tree = create_syntactic_model(source, Language::CSharp).unwrap();
        let classes = find_nodes_by_types(&tree.root(), &["class_declaration"], &[]);

        assert_eq!(fully_qualified_name(&classes[1], tree.source()), "A.B.C.T");
        assert_eq!(containing_namespace_name(&classes[1], tree.source()), "A.B");
        assert_eq!(containing_class_name(&classes[1], tree.source()), "A.B.C");
        assert_eq!(containing_class_name(&classes[0], tree.source()), "");
    }

    #[test]
    fn test_generic_parameters_are_part_of_the_name() {
        let tree = create_syntactic_model("namespace Ns { class Box<T, U> { } }", Language::CSharp).unwrap();
        let class = find_nodes_by_types(&tree.root(), &["class_declaration"], &[])[0];
        assert_eq!(fully_qualified_name(&class, tree.source()), "Ns.Box<T, U>");
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("System.Collections.Generic.List<int>"), "List");
        assert_eq!(simple_type_name("global::Foo.Bar"), "Bar");
        assert_eq!(simple_type_name("Widget"), "Widget");
    }
}
