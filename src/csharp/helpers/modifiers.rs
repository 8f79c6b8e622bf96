//! Access modifiers and modifier flags.

use tree_sitter::Node;

use crate::semantic::declarations::{TYPE_DECLARATIONS, modifiers as modifier_keywords};
use crate::semantic::nodes::find_parent_of_types;

const ACCESS_KEYWORDS: &[&str] = &["public", "private", "protected", "internal", "file"];

/// `(access_modifier, modifier)` of a declaration. The access modifier falls
/// back to the language default for the declaration's position; the other
/// keywords are joined with spaces in source order.
pub fn modifiers(node: &Node, source: &str) -> (String, String) {
    let keywords = modifier_keywords(node, source);
    let (access, other): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|k| ACCESS_KEYWORDS.contains(&k.as_str()));
    let access = if access.is_empty() {
        default_access(node).to_string()
    } else {
        access.join(" ")
    };
    (access, other.join(" "))
}

/// Implicit accessibility: top-level types are `internal`, interface and
/// enum members `public`, everything else `private`.
pub fn default_access(node: &Node) -> &'static str {
    let container = find_parent_of_types(node, TYPE_DECLARATIONS);
    if TYPE_DECLARATIONS.contains(&node.kind()) {
        return match container {
            Some(parent) if parent.kind() == "interface_declaration" => "public",
            Some(_) => "private",
            None => "internal",
        };
    }
    match container.map(|c| c.kind()) {
        Some("interface_declaration") | Some("enum_declaration") => "public",
        _ => "private",
    }
}
