//! Setter visitors wiring the C# visitor tree together, from the
//! compilation unit down to accessors.

use tree_sitter::Node;

use super::behavior::with_behavior;
use super::info::{
    ACCESSOR_KEYWORDS, AccessorInfoVisitor, ConstructorInfoVisitor, DestructorInfoVisitor, EnumLabelInfoVisitor,
    EnumTypeVisitor, FieldInfoVisitor, MethodInfoVisitor, PropertyComplexityVisitor,
    PropertyInfoVisitor, TypeInfoVisitor,
};
use super::leaves::{
    AttributesVisitor, BaseTypesVisitor, GenericParametersVisitor, ImportsVisitor, LocVisitor,
    ParametersVisitor, ReturnValueVisitor,
};
use crate::language::Language;
use crate::models::{
    AccessorModel, ClassModel, ClassType, CompilationUnitType, ConstructorModel, DelegateModel,
    DestructorModel, EnumLabelModel, EnumModel, EntityType, FieldModel, MethodModel,
    PropertyModel, ReturnValueModel,
};
use crate::semantic::declarations::{
    CLASS_DECLARATIONS, TypeKind, accessor_list, parameters, variable_declarators,
};
use crate::semantic::nodes::{
    find_child_by_type, find_child_by_types, find_children_by_type, find_nodes_by_types,
    named_children,
};
use crate::visitors::{CompositeVisitor, SetterVisitor};

/// Member declarations directly inside a type body, in source order.
fn members<'t>(declaration: Node<'t>, kinds: &[&str]) -> Vec<Node<'t>> {
    declaration
        .child_by_field_name("body")
        .or_else(|| find_child_by_type(&declaration, "declaration_list"))
        .map(|body| {
            named_children(&body)
                .into_iter()
                .filter(|member| kinds.contains(&member.kind()))
                .collect()
        })
        .unwrap_or_default()
}

fn select_classes(root: Node<'_>) -> Vec<Node<'_>> {
    find_nodes_by_types(&root, CLASS_DECLARATIONS, &[])
}

fn select_delegates(root: Node<'_>) -> Vec<Node<'_>> {
    find_nodes_by_types(&root, &["delegate_declaration"], &[])
}

fn select_enums(root: Node<'_>) -> Vec<Node<'_>> {
    find_nodes_by_types(&root, &["enum_declaration"], &[])
}

fn select_fields(declaration: Node<'_>) -> Vec<Node<'_>> {
    members(declaration, &["field_declaration", "event_field_declaration"])
        .iter()
        .flat_map(|field| variable_declarators(field))
        .collect()
}

/// Properties, events and indexers, preceded by the positional parameters
/// of a record.
fn select_properties(declaration: Node<'_>) -> Vec<Node<'_>> {
    let mut selected = Vec::new();
    if matches!(declaration.kind(), "record_declaration" | "record_struct_declaration") {
        selected.extend(parameters(&declaration));
    }
    selected.extend(members(
        declaration,
        &["property_declaration", "event_declaration", "indexer_declaration"],
    ));
    selected
}

/// Accessors of a property. An expression-bodied property is its own
/// implicit getter.
fn select_accessors(property: Node<'_>) -> Vec<Node<'_>> {
    match accessor_list(&property) {
        Some(list) => find_children_by_type(&list, "accessor_declaration"),
        None if find_child_by_type(&property, "arrow_expression_clause").is_some() => vec![property],
        None => Vec::new(),
    }
}

fn select_methods(declaration: Node<'_>) -> Vec<Node<'_>> {
    members(declaration, &["method_declaration"])
}

fn select_constructors(declaration: Node<'_>) -> Vec<Node<'_>> {
    members(declaration, &["constructor_declaration"])
}

fn select_destructor(declaration: Node<'_>) -> Vec<Node<'_>> {
    members(declaration, &["destructor_declaration"])
        .into_iter()
        .take(1)
        .collect()
}

fn select_labels(declaration: Node<'_>) -> Vec<Node<'_>> {
    declaration
        .child_by_field_name("body")
        .or_else(|| find_child_by_type(&declaration, "enum_member_declaration_list"))
        .map(|list| find_children_by_type(&list, "enum_member_declaration"))
        .unwrap_or_default()
}

fn field_setter() -> SetterVisitor<ClassModel, FieldModel> {
    SetterVisitor::new(
        "FieldSetter",
        select_fields,
        |_, _, class: &ClassModel| FieldModel {
            containing_type_name: class.name.clone(),
            ..Default::default()
        },
        |class, field| class.fields.push(field),
        CompositeVisitor::new("FieldVisitor")
            .with(FieldInfoVisitor)
            .with(AttributesVisitor),
    )
}

fn accessor_setter() -> SetterVisitor<PropertyModel, AccessorModel> {
    SetterVisitor::new(
        "AccessorSetter",
        select_accessors,
        |node, _, property: &PropertyModel| {
            let is_getter = node.kind() != "accessor_declaration"
                || node
                    .child_by_field_name("name")
                    .or_else(|| find_child_by_types(&node, ACCESSOR_KEYWORDS))
                    .is_some_and(|keyword| keyword.kind() == "get");
            AccessorModel {
                access_modifier: property.access_modifier.clone(),
                modifier: property.modifier.clone(),
                containing_type_name: property.containing_type_name.clone(),
                return_value: ReturnValueModel {
                    entity_type: if is_getter {
                        property.entity_type.clone()
                    } else {
                        EntityType::named("void")
                    },
                    ..Default::default()
                },
                ..Default::default()
            }
        },
        |property, accessor| property.accessors.push(accessor),
        with_behavior(CompositeVisitor::new("AccessorVisitor").with(AccessorInfoVisitor))
            .with(LocVisitor),
    )
}

fn property_setter() -> SetterVisitor<ClassModel, PropertyModel> {
    SetterVisitor::new(
        "PropertySetter",
        select_properties,
        |_, _, class: &ClassModel| PropertyModel {
            containing_type_name: class.name.clone(),
            ..Default::default()
        },
        |class, property| class.properties.push(property),
        CompositeVisitor::new("PropertyVisitor")
            .with(PropertyInfoVisitor)
            .with(AttributesVisitor)
            .with(accessor_setter())
            .with(PropertyComplexityVisitor)
            .with(LocVisitor),
    )
}

fn method_setter() -> SetterVisitor<ClassModel, MethodModel> {
    SetterVisitor::new(
        "MethodSetter",
        select_methods,
        |_, _, class: &ClassModel| MethodModel {
            containing_type_name: class.name.clone(),
            ..Default::default()
        },
        |class, method| class.methods.push(method),
        with_behavior(
            CompositeVisitor::new("MethodVisitor")
                .with(MethodInfoVisitor)
                .with(GenericParametersVisitor)
                .with(ParametersVisitor)
                .with(ReturnValueVisitor)
                .with(AttributesVisitor),
        )
        .with(LocVisitor),
    )
}

fn constructor_setter() -> SetterVisitor<ClassModel, ConstructorModel> {
    SetterVisitor::new(
        "ConstructorSetter",
        select_constructors,
        |_, _, class: &ClassModel| ConstructorModel {
            containing_type_name: class.name.clone(),
            ..Default::default()
        },
        |class, constructor| class.constructors.push(constructor),
        with_behavior(
            CompositeVisitor::new("ConstructorVisitor")
                .with(ConstructorInfoVisitor)
                .with(ParametersVisitor)
                .with(AttributesVisitor),
        )
        .with(LocVisitor),
    )
}

fn destructor_setter() -> SetterVisitor<ClassModel, DestructorModel> {
    SetterVisitor::new(
        "DestructorSetter",
        select_destructor,
        |_, _, class: &ClassModel| DestructorModel {
            containing_type_name: class.name.clone(),
            ..Default::default()
        },
        |class, destructor| class.destructor = Some(destructor),
        with_behavior(
            CompositeVisitor::new("DestructorVisitor")
                .with(DestructorInfoVisitor)
                .with(AttributesVisitor),
        )
        .with(LocVisitor),
    )
}

fn class_setter() -> SetterVisitor<CompilationUnitType, ClassModel> {
    SetterVisitor::new(
        "ClassSetter",
        select_classes,
        |node, _, _| {
            let class_type = TypeKind::of(&node)
                .map(|kind| kind.discriminator())
                .unwrap_or("class");
            ClassModel::new(class_type, Language::CSharp)
        },
        |unit, class| unit.class_types.push(ClassType::Class(class)),
        CompositeVisitor::new("ClassVisitor")
            .with(TypeInfoVisitor)
            .with(BaseTypesVisitor)
            .with(GenericParametersVisitor)
            .with(ImportsVisitor)
            .with(AttributesVisitor)
            .with(field_setter())
            .with(property_setter())
            .with(method_setter())
            .with(constructor_setter())
            .with(destructor_setter())
            .with(LocVisitor),
    )
}

fn delegate_setter() -> SetterVisitor<CompilationUnitType, DelegateModel> {
    SetterVisitor::new(
        "DelegateSetter",
        select_delegates,
        |_, _, _| DelegateModel::new(Language::CSharp),
        |unit, delegate| unit.class_types.push(ClassType::Delegate(delegate)),
        CompositeVisitor::new("DelegateVisitor")
            .with(TypeInfoVisitor)
            .with(BaseTypesVisitor)
            .with(GenericParametersVisitor)
            .with(ParametersVisitor)
            .with(ReturnValueVisitor)
            .with(ImportsVisitor)
            .with(AttributesVisitor)
            .with(LocVisitor),
    )
}

fn enum_label_setter() -> SetterVisitor<EnumModel, EnumLabelModel> {
    SetterVisitor::new(
        "EnumLabelSetter",
        select_labels,
        |_, _, _| EnumLabelModel::default(),
        |model, label| model.labels.push(label),
        CompositeVisitor::new("EnumLabelVisitor")
            .with(EnumLabelInfoVisitor)
            .with(AttributesVisitor),
    )
}

fn enum_setter() -> SetterVisitor<CompilationUnitType, EnumModel> {
    SetterVisitor::new(
        "EnumSetter",
        select_enums,
        |_, _, _| EnumModel::new(Language::CSharp),
        |unit, model| unit.class_types.push(ClassType::Enum(model)),
        CompositeVisitor::new("EnumVisitor")
            .with(TypeInfoVisitor)
            .with(EnumTypeVisitor)
            .with(BaseTypesVisitor)
            .with(ImportsVisitor)
            .with(AttributesVisitor)
            .with(enum_label_setter())
            .with(LocVisitor),
    )
}

/// The top-level visitor for a C# syntax root.
pub fn compilation_unit_visitor() -> CompositeVisitor<CompilationUnitType> {
    CompositeVisitor::new("CompilationUnitVisitor")
        .with(ImportsVisitor)
        .with(class_setter())
        .with(delegate_setter())
        .with(enum_setter())
        .with(LocVisitor)
}
