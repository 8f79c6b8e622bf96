//! Small tree-sitter node utilities shared by the symbol builder and the
//! extraction helpers.

use tree_sitter::Node;

/// Source text of `node`. Out-of-range or non UTF-8 spans yield `""`.
pub fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

pub fn find_child_by_type<'t>(node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == child_type);
    found
}

pub fn find_child_by_types<'t>(node: &Node<'t>, types: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| types.contains(&c.kind()));
    found
}

pub fn find_children_by_type<'t>(node: &Node<'t>, child_type: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .children(&mut cursor)
        .filter(|c| c.kind() == child_type)
        .collect();
    children
}

pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

/// Whether `node` has a direct anonymous token child spelled `token`.
pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == token);
    found
}

pub fn find_parent_of_types<'t>(node: &Node<'t>, types: &[&str]) -> Option<Node<'t>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if types.contains(&parent.kind()) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

/// Depth-first pre-order collection of every descendant (and `node` itself)
/// whose kind is in `types`. `prune` stops descent below matching kinds.
pub fn find_nodes_by_types<'t>(node: &Node<'t>, types: &[&str], prune: &[&str]) -> Vec<Node<'t>> {
    let mut nodes = Vec::new();
    collect_nodes(node, types, prune, true, &mut nodes);
    nodes
}

fn collect_nodes<'t>(
    node: &Node<'t>,
    types: &[&str],
    prune: &[&str],
    is_root: bool,
    nodes: &mut Vec<Node<'t>>,
) {
    if types.contains(&node.kind()) {
        nodes.push(*node);
    }
    if !is_root && prune.contains(&node.kind()) {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_nodes(&child, types, prune, false, nodes);
    }
}

/// Named child following an `=` token, used by declarators, parameters and
/// using aliases whose value is not exposed through a field.
pub fn value_after_equals<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if let Some(value) = node.child_by_field_name("value") {
        return Some(value);
    }
    if let Some(clause) = find_child_by_type(node, "equals_value_clause") {
        return clause.named_child(0);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    let equals = children.iter().position(|c| c.kind() == "=")?;
    children[equals + 1..].iter().find(|c| c.is_named()).copied()
}
