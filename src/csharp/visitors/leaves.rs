//! Single-purpose visitors shared by every model with the matching
//! capability.

use tree_sitter::Node;

use crate::csharp::helpers::{
    attributes, base_types, entity_type, generic_parameters, lines_of_code, parameters,
    return_attributes,
};
use crate::error::VisitResult;
use crate::models::ImportModel;
use crate::models::capabilities::{
    HasAttributes, HasBaseTypes, HasGenericParameters, HasImports, HasLinesOfCode, HasParameters,
    HasReturnValue,
};
use crate::semantic::declarations::{Using, parse_using, return_type};
use crate::semantic::nodes::{find_nodes_by_types, has_token};
use crate::visitors::{VisitContext, Visitor};

pub struct BaseTypesVisitor;

impl<M: HasBaseTypes> Visitor<M> for BaseTypesVisitor {
    fn name(&self) -> &'static str {
        "BaseTypesVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.base_types_mut() = base_types(&node, cx.semantic);
        Ok(())
    }
}

pub struct GenericParametersVisitor;

impl<M: HasGenericParameters> Visitor<M> for GenericParametersVisitor {
    fn name(&self) -> &'static str {
        "GenericParametersVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.generic_parameters_mut() = generic_parameters(&node, cx.semantic);
        Ok(())
    }
}

/// Using directives: every directive of the file for a compilation unit,
/// the ones in scope for a type declaration.
pub struct ImportsVisitor;

impl<M: HasImports> Visitor<M> for ImportsVisitor {
    fn name(&self) -> &'static str {
        "ImportsVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        let source = cx.source();
        let all: Vec<Using> = find_nodes_by_types(&cx.tree.root(), &["using_directive"], &[])
            .iter()
            .filter_map(|directive| parse_using(directive, source))
            .collect();
        let visible = if node.kind() == "compilation_unit" {
            all
        } else {
            let scope = cx.semantic.scope(&node);
            all.into_iter().filter(|u| scope.usings.contains(u)).collect()
        };
        *model.imports_mut() = visible
            .into_iter()
            .map(|u| ImportModel {
                name: u.name,
                alias: u.alias,
                is_static: u.is_static,
                is_global: u.is_global,
            })
            .collect();
        Ok(())
    }
}

pub struct AttributesVisitor;

impl<M: HasAttributes> Visitor<M> for AttributesVisitor {
    fn name(&self) -> &'static str {
        "AttributesVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.attributes_mut() = attributes(&node, cx.semantic);
        Ok(())
    }
}

pub struct ParametersVisitor;

impl<M: HasParameters> Visitor<M> for ParametersVisitor {
    fn name(&self) -> &'static str {
        "ParametersVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.parameters_mut() = parameters(&node, cx.semantic);
        Ok(())
    }
}

/// Return type, `ref`/`ref readonly` modifier and `return:` attributes.
pub struct ReturnValueVisitor;

impl<M: HasReturnValue> Visitor<M> for ReturnValueVisitor {
    fn name(&self) -> &'static str {
        "ReturnValueVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        let returns = return_type(&node);
        let return_value = model.return_value_mut();
        return_value.entity_type = entity_type(returns, cx.semantic);
        return_value.modifier = match returns {
            Some(ty) if ty.kind() == "ref_type" => {
                if has_token(&ty, "readonly") {
                    "ref readonly".to_string()
                } else {
                    "ref".to_string()
                }
            }
            _ => String::new(),
        };
        return_value.attributes = return_attributes(&node, cx.semantic);
        Ok(())
    }
}

pub struct LocVisitor;

impl<M: HasLinesOfCode> Visitor<M> for LocVisitor {
    fn name(&self) -> &'static str {
        "LocVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.loc_mut() = lines_of_code(cx.text(&node));
        Ok(())
    }
}
