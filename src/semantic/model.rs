//! Per-tree semantic queries over a compilation's symbol table.

use std::sync::Arc;

use tree_sitter::Node;

use super::declarations::{
    TYPE_DECLARATIONS, bracketed_parameters, declared_name, declared_name_text, declared_type,
    parameters, variable_declaration,
};
use super::nodes::{find_nodes_by_types, named_children, node_text, value_after_equals};
use super::references::ReferenceSet;
use super::scope::{Scope, declared_type_key};
use super::symbols::{MemberLookup, SymbolTable, TypeSymbol};
use super::syntax_tree::SyntaxTree;
use super::type_ref::{TypeRef, TypeRefKind};

/// Declarations that introduce parameters and a body.
pub const FUNCTION_LIKE: &[&str] = &[
    "method_declaration",
    "constructor_declaration",
    "destructor_declaration",
    "operator_declaration",
    "conversion_operator_declaration",
    "local_function_statement",
    "lambda_expression",
    "anonymous_method_expression",
    "accessor_declaration",
    "property_declaration",
    "indexer_declaration",
];

/// Function-like declarations whose locals are not visible further out.
const MEMBER_BODIES: &[&str] = &[
    "method_declaration",
    "constructor_declaration",
    "destructor_declaration",
    "operator_declaration",
    "conversion_operator_declaration",
    "property_declaration",
    "indexer_declaration",
];

const LOCAL_DECLARATIONS: &[&str] = &[
    "variable_declarator",
    "foreach_statement",
    "for_each_statement",
    "catch_declaration",
    "declaration_expression",
    "declaration_pattern",
];

const MAX_TYPING_DEPTH: usize = 24;

/// Where a name visible inside a body was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Local,
    Parameter,
    /// A `foreach` iteration variable; the payload is the collection.
    Iteration,
}

#[derive(Debug, Clone, Copy)]
pub struct LocalBinding<'t> {
    pub kind: BindingKind,
    pub declaration: Node<'t>,
    pub type_node: Option<Node<'t>>,
    /// Initializer, or the iterated collection for [`BindingKind::Iteration`].
    pub value: Option<Node<'t>>,
}

/// Semantic view of one syntax tree.
#[derive(Debug, Clone)]
pub struct SemanticModel {
    tree: Arc<SyntaxTree>,
    symbols: Arc<SymbolTable>,
}

impl SemanticModel {
    pub fn new(tree: Arc<SyntaxTree>, symbols: Arc<SymbolTable>) -> Self {
        Self { tree, symbols }
    }

    /// Model over `tree` alone plus the trusted references.
    pub fn standalone(tree: Arc<SyntaxTree>) -> Self {
        let symbols = SymbolTable::build(
            Some(ReferenceSet::trusted().table()),
            std::iter::once(tree.as_ref()),
        );
        Self::new(tree, Arc::new(symbols))
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn source(&self) -> &str {
        self.tree.source()
    }

    pub fn scope(&self, node: &Node) -> Scope {
        Scope::of(node, self.source())
    }

    /// Qualified names of the types declared in this tree, in source order.
    pub fn declared_type_names(&self) -> Vec<String> {
        find_nodes_by_types(&self.tree.root(), TYPE_DECLARATIONS, &[])
            .iter()
            .map(|node| declared_type_key(node, self.source()))
            .collect()
    }

    /// Symbol of a type declaration node.
    pub fn declared_symbol(&self, declaration: &Node) -> Option<&TypeSymbol> {
        self.symbols
            .get(&declared_type_key(declaration, self.source()))
    }

    /// Resolve a type syntax node. `None` when the node is `var`.
    pub fn resolve_type(&self, type_node: &Node) -> Option<TypeRef> {
        self.symbols
            .resolve_type(type_node, self.source(), &self.scope(type_node))
    }

    /// Qualified attribute class name, trying the `Attribute` suffix first.
    pub fn resolve_attribute(&self, name_node: &Node) -> Option<String> {
        let text = super::symbols::strip_type_arguments(node_text(name_node, self.source()));
        let scope = self.scope(name_node);
        if !text.ends_with("Attribute") {
            if let Some(found) = self
                .symbols
                .resolve_name(&format!("{}Attribute", text), &scope)
            {
                return Some(found);
            }
        }
        self.symbols.resolve_name(&text, &scope)
    }

    /// Innermost type enclosing `node`, as seen from inside it.
    pub fn containing_type(&self, node: &Node) -> Option<TypeRef> {
        let scope = self.scope(node);
        let name = scope.containing_type()?;
        Some(
            self.symbols
                .get(name)
                .map(TypeSymbol::self_reference)
                .unwrap_or_else(|| TypeRef::named(name)),
        )
    }

    /// Display name of the declaration behind `ty` (`Ns.Box<T>`), or the
    /// reference's own display when it is not declared anywhere.
    pub fn definition_name(&self, ty: &TypeRef) -> String {
        match self.symbols.get(&ty.name) {
            Some(symbol) if ty.kind == TypeRefKind::Named => symbol.display_name(),
            _ => ty.display(),
        }
    }

    /// Local variable or parameter named `name` visible at `at`.
    pub fn local_binding<'t>(&self, name: &str, at: &Node<'t>) -> Option<LocalBinding<'t>> {
        let source = self.source();
        let mut current = at.parent();
        while let Some(ancestor) = current {
            if TYPE_DECLARATIONS.contains(&ancestor.kind()) {
                return None;
            }
            if FUNCTION_LIKE.contains(&ancestor.kind()) {
                if let Some(binding) = self.parameter_binding(&ancestor, name) {
                    return Some(binding);
                }
                let declarations = find_nodes_by_types(&ancestor, LOCAL_DECLARATIONS, &[]);
                for declaration in declarations {
                    if local_name(&declaration, source) == Some(name) {
                        return Some(local_binding_of(declaration));
                    }
                }
                if MEMBER_BODIES.contains(&ancestor.kind()) {
                    return None;
                }
            }
            current = ancestor.parent();
        }
        None
    }

    fn parameter_binding<'t>(&self, function: &Node<'t>, name: &str) -> Option<LocalBinding<'t>> {
        let source = self.source();
        // `x => ...` declares its single parameter without a list.
        if let Some(single) = function.child_by_field_name("parameters") {
            if single.kind() == "identifier" && node_text(&single, source) == name {
                return Some(LocalBinding {
                    kind: BindingKind::Parameter,
                    declaration: single,
                    type_node: None,
                    value: None,
                });
            }
        }
        let mut candidates = parameters(function);
        candidates.extend(bracketed_parameters(function));
        candidates
            .into_iter()
            .find(|p| declared_name_text(p, source) == name)
            .map(|parameter| LocalBinding {
                kind: BindingKind::Parameter,
                declaration: parameter,
                type_node: declared_type(&parameter),
                value: None,
            })
    }

    /// Type of the local declared by `declaration` (a variable declarator,
    /// `foreach`, catch or pattern declaration).
    pub fn local_declaration_type(&self, declaration: &Node) -> Option<TypeRef> {
        self.binding_type(&local_binding_of(*declaration))
    }

    /// Type of a local binding, inferring `var` from its initializer.
    pub fn binding_type(&self, binding: &LocalBinding) -> Option<TypeRef> {
        self.binding_type_at(binding, 0)
    }

    fn binding_type_at(&self, binding: &LocalBinding, depth: usize) -> Option<TypeRef> {
        if let Some(declared) = binding.type_node.and_then(|t| self.resolve_type(&t)) {
            return Some(declared);
        }
        let value = binding.value?;
        let value_type = self.type_at(&value, depth + 1)?;
        match binding.kind {
            BindingKind::Iteration => value_type.element_type(),
            _ => Some(value_type),
        }
    }

    /// Static type of an expression, best effort.
    pub fn type_of_expression(&self, expression: &Node) -> Option<TypeRef> {
        self.type_at(expression, 0)
    }

    fn type_at(&self, expression: &Node, depth: usize) -> Option<TypeRef> {
        if depth > MAX_TYPING_DEPTH {
            return None;
        }
        let source = self.source();
        let text = node_text(expression, source);
        let next = depth + 1;
        match expression.kind() {
            "identifier" => self.identifier_type(expression, text, next),
            "this_expression" | "this" => self.containing_type(expression),
            "base_expression" | "base" => {
                let own = self.containing_type(expression)?;
                let symbol = self.symbols.get(&own.name)?;
                self.symbols.base_class(symbol)
            }
            "member_access_expression" => {
                let receiver = expression.child_by_field_name("expression")?;
                let name = expression.child_by_field_name("name")?;
                let name_text = member_name(&name, source);
                if let Some(receiver_type) = self.type_at(&receiver, next) {
                    if let Some(lookup) = self.symbols.find_field(&receiver_type, name_text) {
                        return Some(lookup.member.ty);
                    }
                }
                let scope = self.scope(expression);
                self.symbols
                    .resolve_name(&super::symbols::strip_type_arguments(text), &scope)
                    .map(TypeRef::named)
            }
            "invocation_expression" => {
                let function = expression
                    .child_by_field_name("function")
                    .or_else(|| expression.named_child(0))?;
                if node_text(&function, source) == "nameof" {
                    return Some(TypeRef::keyword("string"));
                }
                self.invocation_target_at(expression, next)
                    .map(|lookup| lookup.member.ty)
            }
            "object_creation_expression" | "array_creation_expression" => expression
                .child_by_field_name("type")
                .and_then(|t| self.resolve_type(&t)),
            "cast_expression" | "default_expression" | "typeof_expression" => {
                if expression.kind() == "typeof_expression" {
                    return Some(TypeRef::named("System.Type"));
                }
                expression
                    .child_by_field_name("type")
                    .and_then(|t| self.resolve_type(&t))
            }
            "as_expression" => expression
                .child_by_field_name("right")
                .and_then(|t| self.resolve_type(&t)),
            "parenthesized_expression" => {
                let inner = expression.named_child(0)?;
                self.type_at(&inner, next)
            }
            "conditional_expression" => {
                let consequence = expression.child_by_field_name("consequence")?;
                self.type_at(&consequence, next)
            }
            "await_expression" => {
                let inner = expression.named_child(0)?;
                let awaited = self.type_at(&inner, next)?;
                match (awaited.name.as_str(), awaited.arguments.as_slice()) {
                    ("System.Threading.Tasks.Task", [result]) => Some(result.clone()),
                    ("System.Threading.Tasks.Task", []) => Some(TypeRef::keyword("void")),
                    _ => Some(awaited),
                }
            }
            "element_access_expression" => {
                let receiver = expression.child_by_field_name("expression")?;
                let receiver_type = self.type_at(&receiver, next)?;
                if receiver_type.is_array() {
                    return receiver_type.element_type();
                }
                self.symbols
                    .find_field(&receiver_type, "this[]")
                    .map(|lookup| lookup.member.ty)
            }
            "assignment_expression" => {
                let left = expression.child_by_field_name("left")?;
                self.type_at(&left, next)
            }
            "binary_expression" => self.binary_type(expression, next),
            "prefix_unary_expression" | "postfix_unary_expression" => {
                if text.starts_with('!') {
                    return Some(TypeRef::keyword("bool"));
                }
                let operand = expression
                    .child_by_field_name("operand")
                    .or_else(|| expression.named_child(0))?;
                self.type_at(&operand, next)
            }
            "is_expression" | "is_pattern_expression" => Some(TypeRef::keyword("bool")),
            "integer_literal" => Some(integer_literal_type(text)),
            "real_literal" => Some(real_literal_type(text)),
            "string_literal"
            | "verbatim_string_literal"
            | "raw_string_literal"
            | "interpolated_string_expression" => Some(TypeRef::keyword("string")),
            "character_literal" => Some(TypeRef::keyword("char")),
            "boolean_literal" => Some(TypeRef::keyword("bool")),
            "generic_name" | "predefined_type" | "qualified_name" => self.resolve_type(expression),
            _ => None,
        }
    }

    fn identifier_type(&self, node: &Node, name: &str, depth: usize) -> Option<TypeRef> {
        if let Some(binding) = self.local_binding(name, node) {
            return self.binding_type_at(&binding, depth);
        }
        if name == "value" {
            if let Some(property_type) = self.setter_value_type(node) {
                return Some(property_type);
            }
        }
        if let Some(lookup) = self.field_of_containing_types(node, name) {
            return Some(lookup.member.ty);
        }
        let scope = self.scope(node);
        if scope.type_parameters.iter().any(|p| p == name) {
            return Some(TypeRef::type_parameter(name));
        }
        self.symbols.resolve_name(name, &scope).map(TypeRef::named)
    }

    /// Type of the implicit `value` parameter inside a `set` or `init` body.
    fn setter_value_type(&self, node: &Node) -> Option<TypeRef> {
        let accessor = super::nodes::find_parent_of_types(node, &["accessor_declaration"])?;
        let keyword = super::nodes::find_child_by_types(&accessor, &["set", "init", "add", "remove"]);
        let is_setter = keyword.is_some()
            || ["set", "init", "add", "remove"]
                .iter()
                .any(|k| node_text(&accessor, self.source()).trim_start().starts_with(k));
        if !is_setter {
            return None;
        }
        let property = super::nodes::find_parent_of_types(
            &accessor,
            &["property_declaration", "indexer_declaration", "event_declaration"],
        )?;
        declared_type(&property).and_then(|t| self.resolve_type(&t))
    }

    fn binary_type(&self, expression: &Node, depth: usize) -> Option<TypeRef> {
        let operator = expression
            .child_by_field_name("operator")
            .map(|o| node_text(&o, self.source()))
            .unwrap_or("");
        match operator {
            "==" | "!=" | "<" | ">" | "<=" | ">=" | "&&" | "||" => Some(TypeRef::keyword("bool")),
            "??" => {
                let left = expression.child_by_field_name("left")?;
                let mut left_type = self.type_at(&left, depth)?;
                left_type.nullable = false;
                Some(left_type)
            }
            _ => {
                let left = expression
                    .child_by_field_name("left")
                    .and_then(|l| self.type_at(&l, depth));
                let right = expression
                    .child_by_field_name("right")
                    .and_then(|r| self.type_at(&r, depth));
                let is_string = |t: &Option<TypeRef>| {
                    t.as_ref().is_some_and(|t| t.name == "System.String")
                };
                if operator == "+" && (is_string(&left) || is_string(&right)) {
                    return Some(TypeRef::keyword("string"));
                }
                left.or(right)
            }
        }
    }

    /// Field-like member named `name` on the enclosing types, innermost
    /// first, including inherited members.
    pub fn field_of_containing_types(&self, node: &Node, name: &str) -> Option<MemberLookup> {
        let scope = self.scope(node);
        scope.containing_types.iter().rev().find_map(|container| {
            let receiver = self
                .symbols
                .get(container)
                .map(TypeSymbol::self_reference)
                .unwrap_or_else(|| TypeRef::named(container.as_str()));
            self.symbols.find_field(&receiver, name)
        })
    }

    /// The field, property or event a name or member access refers to.
    pub fn field_target(&self, node: &Node) -> Option<MemberLookup> {
        let source = self.source();
        match node.kind() {
            "identifier" => {
                let name = node_text(node, source);
                if self.local_binding(name, node).is_some() {
                    return None;
                }
                self.field_of_containing_types(node, name)
            }
            "member_access_expression" => {
                let receiver = node.child_by_field_name("expression")?;
                let name = node.child_by_field_name("name")?;
                let receiver_type = self.type_of_expression(&receiver)?;
                self.symbols
                    .find_field(&receiver_type, member_name(&name, source))
            }
            _ => None,
        }
    }

    /// The method an invocation binds to.
    pub fn invocation_target(&self, invocation: &Node) -> Option<MemberLookup> {
        self.invocation_target_at(invocation, 0)
    }

    fn invocation_target_at(&self, invocation: &Node, depth: usize) -> Option<MemberLookup> {
        let source = self.source();
        let function = invocation
            .child_by_field_name("function")
            .or_else(|| invocation.named_child(0))?;
        let argument_count = argument_count(invocation);
        match function.kind() {
            "identifier" | "generic_name" => {
                let name = member_name(&function, source);
                let scope = self.scope(invocation);
                scope.containing_types.iter().rev().find_map(|container| {
                    let receiver = self
                        .symbols
                        .get(container)
                        .map(TypeSymbol::self_reference)
                        .unwrap_or_else(|| TypeRef::named(container.as_str()));
                    self.symbols.find_method(&receiver, name, argument_count)
                })
            }
            "member_access_expression" => {
                let receiver = function.child_by_field_name("expression")?;
                let name = function.child_by_field_name("name")?;
                let receiver_type = self.type_at(&receiver, depth + 1)?;
                self.symbols
                    .find_method(&receiver_type, member_name(&name, source), argument_count)
            }
            _ => None,
        }
    }

    /// Constructor an object creation binds to.
    pub fn constructor_target(&self, creation: &Node) -> Option<MemberLookup> {
        let created = creation
            .child_by_field_name("type")
            .and_then(|t| self.resolve_type(&t))?;
        self.symbols
            .find_constructor(&created, argument_count(creation))
    }
}

/// Simple name of an identifier or generic name (`Get` for `Get<int>`).
pub fn member_name<'s>(node: &Node, source: &'s str) -> &'s str {
    if node.kind() == "generic_name" {
        declared_name_text(node, source)
    } else {
        node_text(node, source)
    }
}

/// Number of arguments of an invocation, creation or constructor initializer.
pub fn argument_count(node: &Node) -> usize {
    node.child_by_field_name("arguments")
        .or_else(|| super::nodes::find_child_by_type(node, "argument_list"))
        .map(|list| {
            named_children(&list)
                .iter()
                .filter(|a| a.kind() == "argument")
                .count()
        })
        .unwrap_or(0)
}

fn local_name<'s>(declaration: &Node, source: &'s str) -> Option<&'s str> {
    let name = match declaration.kind() {
        "foreach_statement" | "for_each_statement" => declaration
            .child_by_field_name("left")
            .filter(|left| left.kind() == "identifier"),
        "declaration_pattern" => {
            let mut cursor = declaration.walk();
            let last = declaration
                .named_children(&mut cursor)
                .filter(|c| c.kind() == "identifier")
                .last();
            last
        }
        _ => declared_name(declaration),
    }?;
    Some(node_text(&name, source))
}

fn local_binding_of<'t>(declaration: Node<'t>) -> LocalBinding<'t> {
    match declaration.kind() {
        "variable_declarator" => LocalBinding {
            kind: BindingKind::Local,
            declaration,
            type_node: declaration
                .parent()
                .and_then(|parent| variable_declaration(&parent))
                .and_then(|d| declared_type(&d)),
            value: value_after_equals(&declaration),
        },
        "foreach_statement" | "for_each_statement" => LocalBinding {
            kind: BindingKind::Iteration,
            declaration,
            type_node: declaration.child_by_field_name("type"),
            value: declaration.child_by_field_name("right"),
        },
        _ => LocalBinding {
            kind: BindingKind::Local,
            declaration,
            type_node: declared_type(&declaration),
            value: None,
        },
    }
}

fn integer_literal_type(text: &str) -> TypeRef {
    let lower = text.to_ascii_lowercase();
    if lower.ends_with("ul") || lower.ends_with("lu") {
        TypeRef::keyword("ulong")
    } else if lower.ends_with('l') {
        TypeRef::keyword("long")
    } else if lower.ends_with('u') && !lower.starts_with("0x") {
        TypeRef::keyword("uint")
    } else {
        TypeRef::keyword("int")
    }
}

fn real_literal_type(text: &str) -> TypeRef {
    match text.chars().last().map(|c| c.to_ascii_lowercase()) {
        Some('f') => TypeRef::keyword("float"),
        Some('m') => TypeRef::keyword("decimal"),
        _ => TypeRef::keyword("double"),
    }
}
