//! Visitors over executable bodies: complexity, calls, field accesses,
//! locals and nested local functions.

use std::sync::OnceLock;

use tree_sitter::Node;

use super::info::LocalFunctionInfoVisitor;
use super::leaves::{
    AttributesVisitor, GenericParametersVisitor, LocVisitor, ParametersVisitor, ReturnValueVisitor,
};
use crate::csharp::helpers::{
    access_field, call_sites, containing_class_name, cyclomatic_complexity,
    field_access_candidates, local_variables, method_call_model,
};
use crate::error::VisitResult;
use crate::models::LocalFunctionModel;
use crate::models::capabilities::HasBehavior;
use crate::semantic::declarations::body;
use crate::semantic::nodes::{find_child_by_type, find_nodes_by_types};
use crate::visitors::{CompositeVisitor, VisitContext, Visitor};

/// Executable body of a member. An expression-bodied property or indexer
/// contributes its arrow clause.
pub fn behavior_body<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    match node.kind() {
        "property_declaration" | "indexer_declaration" => {
            find_child_by_type(node, "arrow_expression_clause")
        }
        _ => body(node),
    }
}

/// Roots scanned for calls: a constructor's `: base(...)` initializer
/// comes before its body.
fn call_roots<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut roots = Vec::new();
    if node.kind() == "constructor_declaration" {
        roots.extend(find_child_by_type(node, "constructor_initializer"));
    }
    roots.extend(behavior_body(node));
    roots
}

pub struct CyclomaticComplexityVisitor;

impl<M: HasBehavior> Visitor<M> for CyclomaticComplexityVisitor {
    fn name(&self) -> &'static str {
        "CyclomaticComplexityVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.cyclomatic_complexity_mut() = cyclomatic_complexity(behavior_body(&node), cx.source());
        Ok(())
    }
}

pub struct CalledMethodsVisitor;

impl<M: HasBehavior> Visitor<M> for CalledMethodsVisitor {
    fn name(&self) -> &'static str {
        "CalledMethodsVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        let location = containing_class_name(&node, cx.source());
        let calls = call_roots(&node)
            .iter()
            .flat_map(|root| call_sites(root))
            .filter_map(|site| method_call_model(&site, cx.semantic, &location))
            .collect();
        *model.called_methods_mut() = calls;
        Ok(())
    }
}

pub struct AccessedFieldsVisitor;

impl<M: HasBehavior> Visitor<M> for AccessedFieldsVisitor {
    fn name(&self) -> &'static str {
        "AccessedFieldsVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        let location = containing_class_name(&node, cx.source());
        let accesses = call_roots(&node)
            .iter()
            .flat_map(|root| field_access_candidates(root))
            .filter_map(|candidate| access_field(&candidate, cx.semantic, &location))
            .collect();
        *model.accessed_fields_mut() = accesses;
        Ok(())
    }
}

pub struct LocalVariablesVisitor;

impl<M: HasBehavior> Visitor<M> for LocalVariablesVisitor {
    fn name(&self) -> &'static str {
        "LocalVariablesVisitor"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        *model.local_variables_mut() = behavior_body(&node)
            .map(|body| local_variables(&body, cx.semantic))
            .unwrap_or_default();
        Ok(())
    }
}

/// Builds one [`LocalFunctionModel`] per local function declared directly
/// in the body, recursing into the local function's own body.
pub struct LocalFunctionSetter;

impl<M: HasBehavior> Visitor<M> for LocalFunctionSetter {
    fn name(&self) -> &'static str {
        "LocalFunctionSetter"
    }

    fn visit(&self, node: Node<'_>, cx: &VisitContext<'_>, model: &mut M) -> VisitResult {
        let Some(body) = behavior_body(&node) else {
            return Ok(());
        };
        let containing_type_name = containing_class_name(&node, cx.source());
        for function in find_nodes_by_types(&body, &["local_function_statement"], &["local_function_statement"]) {
            let local = LocalFunctionModel {
                containing_type_name: containing_type_name.clone(),
                ..Default::default()
            };
            let local = local_function_visitor().fold(function, cx, local);
            model.local_functions_mut().push(local);
        }
        Ok(())
    }
}

/// The composite for local functions. It contains [`LocalFunctionSetter`],
/// so nesting is unbounded.
pub fn local_function_visitor() -> &'static CompositeVisitor<LocalFunctionModel> {
    static VISITOR: OnceLock<CompositeVisitor<LocalFunctionModel>> = OnceLock::new();
    VISITOR.get_or_init(|| {
        with_behavior(
            CompositeVisitor::new("LocalFunctionVisitor")
                .with(LocalFunctionInfoVisitor)
                .with(GenericParametersVisitor)
                .with(ParametersVisitor)
                .with(ReturnValueVisitor)
                .with(AttributesVisitor),
        )
        .with(LocVisitor)
    })
}

/// Register the body visitors, local functions last.
pub fn with_behavior<M: HasBehavior + 'static>(composite: CompositeVisitor<M>) -> CompositeVisitor<M> {
    composite
        .with(CyclomaticComplexityVisitor)
        .with(CalledMethodsVisitor)
        .with(AccessedFieldsVisitor)
        .with(LocalVariablesVisitor)
        .with(LocalFunctionSetter)
}
