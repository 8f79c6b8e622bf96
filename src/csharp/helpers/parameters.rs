//! Parameter facts.

use tree_sitter::Node;

use super::attributes::attributes;
use super::types::entity_type;
use crate::models::ParameterModel;
use crate::semantic::SemanticModel;
use crate::semantic::declarations::{declared_type, parameter_modifier, parameters as parameter_nodes};
use crate::semantic::nodes::{node_text, value_after_equals};

/// Parameters of a method, constructor, delegate or local function.
pub fn parameters(declaration: &Node, semantic: &SemanticModel) -> Vec<ParameterModel> {
    parameter_nodes(declaration)
        .iter()
        .map(|parameter| parameter_info(parameter, semantic))
        .collect()
}

pub fn parameter_info(parameter: &Node, semantic: &SemanticModel) -> ParameterModel {
    let source = semantic.tree().source();
    ParameterModel {
        entity_type: entity_type(declared_type(parameter), semantic),
        modifier: parameter_modifier(parameter, source),
        default_value: value_after_equals(parameter)
            .map(|value| node_text(&value, source).to_string())
            .unwrap_or_default(),
        attributes: attributes(parameter, semantic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;
    use std::sync::Arc;

    #[test]
    fn test_parameter_details() {
        let tree = create_syntactic_model(
            "class A { void M(ref int count, out string text, double scale = 1.5) { text = null; } }",
            Language::CSharp,
        )
        .unwrap();
        let semantic = SemanticModel::standalone(Arc::new(tree));
        let method = find_nodes_by_types(&semantic.tree().root(), &["method_declaration"], &[])[0];
        let params = parameters(&method, &semantic);

        assert_eq!(params.len(), 3);
        assert_eq!(params[0].entity_type.name, "int");
        assert_eq!(params[0].modifier, "ref");
        assert_eq!(params[1].modifier, "out");
        assert_eq!(params[1].entity_type.name, "string");
        assert_eq!(params[2].default_value, "1.5");
        assert_eq!(params[2].modifier, "");
    }

    #[test]
    fn test_params_array_is_kept_last() {
        let tree = create_syntactic_model(
            "using System; class A { void Log(string format, [NotNull] params object[] args) { } }",
            Language::CSharp,
        )
        .unwrap();
        let semantic = SemanticModel::standalone(Arc::new(tree));
        let method = find_nodes_by_types(&semantic.tree().root(), &["method_declaration"], &[])[0];
        let params = parameters(&method, &semantic);

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].entity_type.name, "string");
        assert_eq!(params[0].modifier, "");
        assert_eq!(params[1].entity_type.name, "object[]");
        assert_eq!(params[1].modifier, "params");
        assert_eq!(params[1].attributes.len(), 1);
        assert_eq!(params[1].attributes[0].name, "NotNull");
        assert_eq!(params[1].attributes[0].target, "param");
    }
}
