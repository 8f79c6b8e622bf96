//! Cyclomatic complexity.

use tree_sitter::Node;

use crate::semantic::nodes::node_text;

const BRANCHES: &[&str] = &[
    "if_statement",
    "while_statement",
    "do_statement",
    "for_statement",
    "foreach_statement",
    "for_each_statement",
    "catch_clause",
    "conditional_expression",
    "case_switch_label",
    "case_pattern_switch_label",
];

const SHORT_CIRCUIT_OPERATORS: &[&str] = &["&&", "||", "??"];

/// Decision points in `body` plus one; `0` when there is no body.
///
/// Local functions declared inside `body` are not counted, they are
/// measured on their own.
pub fn cyclomatic_complexity(body: Option<Node>, source: &str) -> u32 {
    match body {
        Some(body) => decision_points(&body, source, true) + 1,
        None => 0,
    }
}

fn decision_points(node: &Node, source: &str, is_root: bool) -> u32 {
    if !is_root && node.kind() == "local_function_statement" {
        return 0;
    }
    let mut count = match node.kind() {
        kind if BRANCHES.contains(&kind) => 1,
        "switch_section" => case_tokens(node),
        "switch_expression_arm" => u32::from(!is_discard_arm(node, source)),
        "binary_expression" => {
            let operator = node
                .child_by_field_name("operator")
                .map(|o| node_text(&o, source))
                .unwrap_or("");
            u32::from(SHORT_CIRCUIT_OPERATORS.contains(&operator))
        }
        _ => 0,
    };
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += decision_points(&child, source, false);
    }
    count
}

/// `case` keywords spelled directly in a switch section. Sections whose
/// labels are separate nodes are counted through those nodes instead.
fn case_tokens(section: &Node) -> u32 {
    let mut cursor = section.walk();
    let count = section
        .children(&mut cursor)
        .filter(|c| !c.is_named() && c.kind() == "case")
        .count();
    count as u32
}

fn is_discard_arm(arm: &Node, source: &str) -> bool {
    arm.child_by_field_name("pattern")
        .or_else(|| arm.named_child(0))
        .is_some_and(|pattern| pattern.kind() == "discard" || node_text(&pattern, source).trim() == "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::semantic::declarations::body;
    use crate::semantic::nodes::find_nodes_by_types;
    use crate::semantic::syntax_tree::create_syntactic_model;

    fn complexity_of(method_source: &str) -> u32 {
        let source = format!("class A {{ {} }}", method_source);
        let tree = create_syntactic_model(&source, Language::CSharp).unwrap();
        let method = find_nodes_by_types(&tree.root(), &["method_declaration"], &[])[0];
        cyclomatic_complexity(body(&method), tree.source())
    }

    #[test]
    fn test_empty_body_is_one() {
        assert_eq!(complexity_of("void M() { }"), 1);
    }

    #[test]
    fn test_abstract_method_is_zero() {
        assert_eq!(complexity_of("abstract void M();"), 0);
    }

    #[test]
    fn test_else_if_chain() {
        assert_eq!(complexity_of("void M(bool a, bool b) { if (a) { } else if (b) { } }"), 3);
    }

    #[test]
    fn test_loops_catch_and_operators() {
        let method = "int M(int[] xs, string s) {
            int total = 0;
            for (int i = 0; i < 3; i++) { total++; }
            foreach (var x in xs) { while (x > 0 && total < 10) { total--; } }
            try { total = s.Length; } catch (System.Exception) { total = s == null ? 0 : 1; }
            return total;
        }";
        // for, foreach, while, &&, catch, ?: plus one
        assert_eq!(complexity_of(method), 7);
    }

    #[test]
    fn test_switch_cases_counted_once_each() {
        let method = "int M(int x) {
            switch (x) { case 1: return 1; case 2: case 3: return 2; default: return 0; }
        }";
        assert_eq!(complexity_of(method), 4);
    }

    #[test]
    fn test_switch_expression_ignores_discard_arm() {
        let method = "string M(int x) => x switch { 1 => \"one\", 2 => \"two\", _ => \"many\" };";
        assert_eq!(complexity_of(method), 3);
    }

    #[test]
    fn test_local_functions_are_excluded() {
        let method = "void M(bool a) {
            if (a) { }
            void Inner(bool b) { if (b) { } if (!b) { } }
        }";
        assert_eq!(complexity_of(method), 2);
    }

    #[test]
    fn test_lambdas_are_included() {
        let method = "void M() { System.Func<int, int> f = x => x > 0 ? x : -x; }";
        assert_eq!(complexity_of(method), 2);
    }
}
