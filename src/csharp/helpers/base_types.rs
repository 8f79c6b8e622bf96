//! Base class and implemented interfaces of a type declaration.

use tree_sitter::Node;

use crate::models::{BaseTypeModel, EntityType};
use crate::semantic::declarations::{TypeKind, base_type_nodes};
use crate::semantic::{SemanticModel, TypeRef};

/// Base types of `declaration`, the implicit base class first when the
/// declaration names none. Enums and delegates report their fixed base.
pub fn base_types(declaration: &Node, semantic: &SemanticModel) -> Vec<BaseTypeModel> {
    let Some(kind) = TypeKind::of(declaration) else {
        return Vec::new();
    };
    if matches!(kind, TypeKind::Enum | TypeKind::Delegate) {
        return kind
            .implicit_base()
            .map(|base| vec![implicit(base)])
            .unwrap_or_default();
    }

    let mut bases: Vec<BaseTypeModel> = base_type_nodes(declaration)
        .iter()
        .map(|node| {
            let resolved = semantic.resolve_type(node);
            let is_interface = kind == TypeKind::Interface
                || match &resolved {
                    Some(ty) if ty.is_resolved() => {
                        semantic.symbols().kind_of(ty) == Some(TypeKind::Interface)
                    }
                    _ => looks_like_interface(semantic.tree().text(node)),
                };
            let entity_type = match resolved {
                Some(ty) => ty.to_entity_type(),
                None => EntityType::named(semantic.tree().text(node)),
            };
            BaseTypeModel {
                entity_type,
                kind: if is_interface { "interface" } else { "class" }.to_string(),
            }
        })
        .collect();

    if !bases.iter().any(|b| b.kind == "class") {
        if let Some(base) = kind.implicit_base() {
            bases.insert(0, implicit(base));
        }
    }
    bases
}

fn implicit(name: &str) -> BaseTypeModel {
    BaseTypeModel {
        entity_type: TypeRef::named(name).to_entity_type(),
        kind: "class".to_string(),
    }
}

/// `IFoo`-style spelling, used only for names the model cannot resolve.
fn looks_like_interface(text: &str) -> bool {
    let simple = super::names::simple_type_name(text);
    let mut chars = simple.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('I'), Some(second)) if second.is_ascii_uppercase()
    )
}
