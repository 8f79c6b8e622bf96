//! Identity of declarations: names, modifiers and containing scopes.

use tree_sitter::Node;

use crate::csharp::helpers::{
    containing_class_name, containing_namespace_name, entity_type, fully_qualified_name, modifiers,
};
use crate::csharp::helpers::attributes::attributes;
use crate::error::{VisitError, VisitResult};
use crate::models::capabilities::TypeHeader;
use crate::models::{
    AccessorModel, ConstructorModel, DestructorModel, EnumLabelModel, EnumModel, FieldModel,
    LocalFunctionModel, MethodModel, PropertyModel,
};
use crate::semantic::declarations::{
    base_type_nodes, declared_name, declared_type, is_params_name, variable_declaration,
};
use crate::semantic::nodes::{find_child_by_types, find_parent_of_types};
use crate::visitors::{VisitContext, Visitor};

pub const ACCESSOR_KEYWORDS: &[&str] = &["get", "set", "init", "add", "remove"];

fn name_of(node: &Node, cx: &VisitContext) -> Result<String, VisitError> {
    declared_name(node)
        .map(|name| cx.text(&name).to_string())
        .ok_or_else(|| VisitError::missing(node.kind(), "name"))
}

/// Name, modifiers and containing namespace/class of a type declaration.
pub struct TypeInfoVisitor;

impl<M: TypeHeader> Visitor<M> for TypeInfoVisitor {
    fn name(&self) -> &'static str {
        "TypeInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        if declared_name(&node).is_none() {
            return Err(VisitError::missing(node.kind(), "name"));
        }
        let source = cx.source();
        let (access, modifier) = modifiers(&node, source);
        *model.name_mut() = fully_qualified_name(&node, source);
        *model.access_modifier_mut() = access;
        *model.modifier_mut() = modifier;
        *model.containing_namespace_name_mut() = containing_namespace_name(&node, source);
        *model.containing_class_name_mut() = containing_class_name(&node, source);
        Ok(())
    }
}

/// Underlying integral type of an enum, `int` unless spelled out.
pub struct EnumTypeVisitor;

impl Visitor<EnumModel> for EnumTypeVisitor {
    fn name(&self) -> &'static str {
        "EnumTypeVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut EnumModel) -> VisitResult {
        if let Some(underlying) = base_type_nodes(&node).first() {
            model.underlying_type = entity_type(Some(*underlying), cx.semantic).name;
        }
        Ok(())
    }
}

pub struct EnumLabelInfoVisitor;

impl Visitor<EnumLabelModel> for EnumLabelInfoVisitor {
    fn name(&self) -> &'static str {
        "EnumLabelInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut EnumLabelModel) -> VisitResult {
        model.name = name_of(&node, cx)?;
        Ok(())
    }
}

/// One variable declarator of a field or event field declaration.
pub struct FieldInfoVisitor;

impl Visitor<FieldModel> for FieldInfoVisitor {
    fn name(&self) -> &'static str {
        "FieldInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut FieldModel) -> VisitResult {
        let declaration = find_parent_of_types(&node, &["field_declaration", "event_field_declaration"])
            .ok_or_else(|| VisitError::unexpected("field declarator", node.kind()))?;
        let (access, modifier) = modifiers(&declaration, cx.source());
        model.name = name_of(&node, cx)?;
        model.entity_type = entity_type(
            variable_declaration(&declaration).and_then(|d| declared_type(&d)),
            cx.semantic,
        );
        model.access_modifier = access;
        model.modifier = modifier;
        model.is_event = declaration.kind() == "event_field_declaration";
        Ok(())
    }
}

/// Properties, events with accessors, indexers and positional record
/// parameters.
pub struct PropertyInfoVisitor;

impl Visitor<PropertyModel> for PropertyInfoVisitor {
    fn name(&self) -> &'static str {
        "PropertyInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut PropertyModel) -> VisitResult {
        model.name = match node.kind() {
            "indexer_declaration" => "this[]".to_string(),
            _ => name_of(&node, cx)?,
        };
        model.entity_type = entity_type(declared_type(&node), cx.semantic);
        if node.kind() == "parameter" || is_params_name(&node) {
            model.access_modifier = "public".to_string();
        } else {
            let (access, modifier) = modifiers(&node, cx.source());
            model.access_modifier = access;
            model.modifier = modifier;
        }
        model.is_event = node.kind() == "event_declaration";
        Ok(())
    }
}

/// Sum of the accessors' complexities. Runs after the accessor setter.
pub struct PropertyComplexityVisitor;

impl Visitor<PropertyModel> for PropertyComplexityVisitor {
    fn name(&self) -> &'static str {
        "PropertyComplexityVisitor"
    }

    fn visit(&self, _node: Node<'_>, _cx: &VisitContext<'_>, model: &mut PropertyModel) -> VisitResult {
        model.cyclomatic_complexity = model
            .accessors
            .iter()
            .map(|accessor| accessor.cyclomatic_complexity)
            .sum();
        Ok(())
    }
}

/// Accessor keyword, modifiers and attributes. A property with an
/// expression body stands in for its implicit `get`.
pub struct AccessorInfoVisitor;

impl Visitor<AccessorModel> for AccessorInfoVisitor {
    fn name(&self) -> &'static str {
        "AccessorInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut AccessorModel) -> VisitResult {
        if node.kind() != "accessor_declaration" {
            model.name = "get".to_string();
            return Ok(());
        }
        let keyword = node
            .child_by_field_name("name")
            .or_else(|| find_child_by_types(&node, ACCESSOR_KEYWORDS))
            .ok_or_else(|| VisitError::missing(node.kind(), "accessor keyword"))?;
        model.name = cx.text(&keyword).to_string();

        let explicit = crate::semantic::declarations::modifiers(&node, cx.source());
        if !explicit.is_empty() {
            let (access, modifier) = modifiers(&node, cx.source());
            model.access_modifier = access;
            model.modifier = modifier;
        }
        model.attributes = attributes(&node, cx.semantic);
        Ok(())
    }
}

pub struct MethodInfoVisitor;

impl Visitor<MethodModel> for MethodInfoVisitor {
    fn name(&self) -> &'static str {
        "MethodInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut MethodModel) -> VisitResult {
        let (access, modifier) = modifiers(&node, cx.source());
        model.name = name_of(&node, cx)?;
        model.access_modifier = access;
        model.modifier = modifier;
        Ok(())
    }
}

pub struct ConstructorInfoVisitor;

impl Visitor<ConstructorModel> for ConstructorInfoVisitor {
    fn name(&self) -> &'static str {
        "ConstructorInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut ConstructorModel) -> VisitResult {
        let (access, modifier) = modifiers(&node, cx.source());
        model.name = name_of(&node, cx)?;
        model.access_modifier = access;
        model.modifier = modifier;
        Ok(())
    }
}

pub struct DestructorInfoVisitor;

impl Visitor<DestructorModel> for DestructorInfoVisitor {
    fn name(&self) -> &'static str {
        "DestructorInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut DestructorModel) -> VisitResult {
        let (access, modifier) = modifiers(&node, cx.source());
        model.name = name_of(&node, cx)?;
        model.access_modifier = access;
        model.modifier = modifier;
        Ok(())
    }
}

pub struct LocalFunctionInfoVisitor;

impl Visitor<LocalFunctionModel> for LocalFunctionInfoVisitor {
    fn name(&self) -> &'static str {
        "LocalFunctionInfoVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut LocalFunctionModel) -> VisitResult {
        model.name = name_of(&node, cx)?;
        model.modifier = crate::semantic::declarations::modifiers(&node, cx.source()).join(" ");
        Ok(())
    }
}
