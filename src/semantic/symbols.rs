//! Declared types and their members, resolved against lexical scopes.
//!
//! A table is built in two passes over every tree of a compilation: the
//! first declares each type by its qualified name, the second resolves base
//! types and member signatures now that every name is known.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tree_sitter::Node;

use super::declarations::{
    TYPE_DECLARATIONS, TypeKind, base_type_nodes, bracketed_parameters, declared_name_text,
    declared_type, modifiers, parameter_modifier, parameters, return_type, type_parameter_names,
    variable_declaration, variable_declarators,
};
use super::nodes::{
    find_child_by_type, find_children_by_type, find_nodes_by_types, named_children, node_text,
    value_after_equals,
};
use super::scope::{Scope, declared_type_key, qualify};
use super::syntax_tree::SyntaxTree;
use super::type_ref::{TypeRef, TypeRefKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
    Event,
    Method,
    Constructor,
    EnumLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSymbol {
    pub name: String,
    pub ty: TypeRef,
    pub modifier: String,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberSymbol {
    pub name: String,
    pub kind: MemberKind,
    /// Field, property or event type; return type of methods.
    pub ty: TypeRef,
    pub parameters: Vec<ParameterSymbol>,
    pub type_parameters: Vec<String>,
    pub is_static: bool,
}

impl MemberSymbol {
    pub fn is_field_like(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Field | MemberKind::Property | MemberKind::Event | MemberKind::EnumLabel
        )
    }

    /// Whether a call with `argument_count` arguments can bind to this member.
    pub fn accepts(&self, argument_count: usize) -> bool {
        let is_params = |p: &ParameterSymbol| p.modifier.split(' ').any(|m| m == "params");
        let required = self
            .parameters
            .iter()
            .filter(|p| p.default_value.is_empty() && !is_params(p))
            .count();
        let open_ended = self.parameters.iter().any(is_params);
        argument_count >= required && (open_ended || argument_count <= self.parameters.len())
    }

    fn substitute(&self, bindings: &HashMap<String, TypeRef>) -> MemberSymbol {
        if bindings.is_empty() {
            return self.clone();
        }
        let mut member = self.clone();
        member.ty = self.ty.substitute(bindings);
        for parameter in &mut member.parameters {
            parameter.ty = parameter.ty.substitute(bindings);
        }
        member
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSymbol {
    /// Qualified name without generic parameters (`Ns.Outer.Box`).
    pub name: String,
    pub simple_name: String,
    pub kind: TypeKind,
    pub type_parameters: Vec<String>,
    pub base_types: Vec<TypeRef>,
    pub members: Vec<MemberSymbol>,
}

impl TypeSymbol {
    /// Qualified name with generic parameters (`Ns.Outer.Box<T>`).
    pub fn display_name(&self) -> String {
        if self.type_parameters.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.type_parameters.join(", "))
        }
    }

    /// Reference to this type as seen from inside its own declaration.
    pub fn self_reference(&self) -> TypeRef {
        TypeRef::named(&self.name).with_arguments(
            self.type_parameters
                .iter()
                .map(TypeRef::type_parameter)
                .collect(),
        )
    }

    fn bindings(&self, receiver: &TypeRef) -> HashMap<String, TypeRef> {
        self.type_parameters
            .iter()
            .cloned()
            .zip(receiver.arguments.iter().cloned())
            .collect()
    }
}

/// Result of a member lookup through the inheritance chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberLookup {
    /// The type that declares the member, with bound arguments.
    pub owner: TypeRef,
    pub member: MemberSymbol,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: Vec<TypeSymbol>,
    index: HashMap<String, usize>,
    fallback: Option<Arc<SymbolTable>>,
}

impl SymbolTable {
    pub fn new(fallback: Option<Arc<SymbolTable>>) -> Self {
        Self {
            fallback,
            ..Default::default()
        }
    }

    pub fn build<'a, I>(fallback: Option<Arc<SymbolTable>>, trees: I) -> Self
    where
        I: IntoIterator<Item = &'a SyntaxTree>,
    {
        let trees: Vec<&SyntaxTree> = trees.into_iter().collect();
        let mut table = Self::new(fallback);
        for tree in &trees {
            table.declare_types(tree);
        }
        for tree in &trees {
            table.define_members(tree);
        }
        table
    }

    /// Types declared in this table, excluding the fallback.
    pub fn types(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.types.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TypeSymbol> {
        match self.index.get(name) {
            Some(&i) => self.types.get(i),
            None => self.fallback.as_ref().and_then(|f| f.get(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn kind_of(&self, ty: &TypeRef) -> Option<TypeKind> {
        (ty.kind == TypeRefKind::Named)
            .then(|| self.get(&ty.name).map(|t| t.kind))
            .flatten()
    }

    fn declare_types(&mut self, tree: &SyntaxTree) {
        let source = tree.source();
        for node in find_nodes_by_types(&tree.root(), TYPE_DECLARATIONS, &[]) {
            let Some(kind) = TypeKind::of(&node) else {
                continue;
            };
            let name = declared_type_key(&node, source);
            if name.is_empty() || self.index.contains_key(&name) {
                continue;
            }
            self.index.insert(name.clone(), self.types.len());
            self.types.push(TypeSymbol {
                simple_name: declared_name_text(&node, source).to_string(),
                name,
                kind,
                type_parameters: type_parameter_names(&node, source),
                base_types: Vec::new(),
                members: Vec::new(),
            });
        }
    }

    fn define_members(&mut self, tree: &SyntaxTree) {
        let source = tree.source();
        for node in find_nodes_by_types(&tree.root(), TYPE_DECLARATIONS, &[]) {
            let Some(kind) = TypeKind::of(&node) else {
                continue;
            };
            let scope = Scope::of(&node, source);
            let Some(name) = scope.containing_type().map(str::to_string) else {
                continue;
            };
            let base_types = self.declared_base_types(&node, kind, source, &scope);
            let members = self.declared_members(&node, kind, &name, source);

            if let Some(&i) = self.index.get(&name) {
                let symbol = &mut self.types[i];
                for base in base_types {
                    if !symbol.base_types.contains(&base) {
                        symbol.base_types.push(base);
                    }
                }
                symbol.members.extend(members);
            }
        }
    }

    fn declared_base_types(
        &self,
        node: &Node,
        kind: TypeKind,
        source: &str,
        scope: &Scope,
    ) -> Vec<TypeRef> {
        match kind {
            TypeKind::Enum | TypeKind::Delegate => kind
                .implicit_base()
                .map(|base| vec![TypeRef::named(base)])
                .unwrap_or_default(),
            _ => base_type_nodes(node)
                .iter()
                .filter_map(|base| self.resolve_type(base, source, scope))
                .collect(),
        }
    }

    fn declared_members(
        &self,
        node: &Node,
        kind: TypeKind,
        type_name: &str,
        source: &str,
    ) -> Vec<MemberSymbol> {
        let own_type = self
            .get(type_name)
            .map(TypeSymbol::self_reference)
            .unwrap_or_else(|| TypeRef::named(type_name));

        match kind {
            TypeKind::Delegate => {
                let scope = Scope::of(node, source);
                return vec![MemberSymbol {
                    name: "Invoke".to_string(),
                    kind: MemberKind::Method,
                    ty: self.resolve_optional(return_type(node), source, &scope),
                    parameters: self.parameter_symbols(node, source, &scope),
                    type_parameters: Vec::new(),
                    is_static: false,
                }];
            }
            TypeKind::Enum => {
                let Some(body) = node
                    .child_by_field_name("body")
                    .or_else(|| find_child_by_type(node, "enum_member_declaration_list"))
                else {
                    return Vec::new();
                };
                return find_children_by_type(&body, "enum_member_declaration")
                    .iter()
                    .map(|label| MemberSymbol {
                        name: declared_name_text(label, source).to_string(),
                        kind: MemberKind::EnumLabel,
                        ty: own_type.clone(),
                        parameters: Vec::new(),
                        type_parameters: Vec::new(),
                        is_static: true,
                    })
                    .collect();
            }
            _ => {}
        }

        let mut members = Vec::new();

        // Positional record parameters become properties.
        if kind == TypeKind::Record || node.kind() == "record_struct_declaration" {
            let scope = Scope::of(node, source);
            for parameter in self.parameter_symbols(node, source, &scope) {
                members.push(MemberSymbol {
                    name: parameter.name,
                    kind: MemberKind::Property,
                    ty: parameter.ty,
                    parameters: Vec::new(),
                    type_parameters: Vec::new(),
                    is_static: false,
                });
            }
        }

        let Some(body) = node
            .child_by_field_name("body")
            .or_else(|| find_child_by_type(node, "declaration_list"))
        else {
            return members;
        };

        for member in named_children(&body) {
            let scope = Scope::of(&member, source);
            let member_modifiers = modifiers(&member, source);
            let is_static = member_modifiers
                .iter()
                .any(|m| m == "static" || m == "const");
            match member.kind() {
                "field_declaration" | "event_field_declaration" => {
                    let member_kind = if member.kind() == "event_field_declaration" {
                        MemberKind::Event
                    } else {
                        MemberKind::Field
                    };
                    let ty = self.resolve_optional(
                        variable_declaration(&member).and_then(|d| declared_type(&d)),
                        source,
                        &scope,
                    );
                    for declarator in variable_declarators(&member) {
                        members.push(MemberSymbol {
                            name: declared_name_text(&declarator, source).to_string(),
                            kind: member_kind,
                            ty: ty.clone(),
                            parameters: Vec::new(),
                            type_parameters: Vec::new(),
                            is_static,
                        });
                    }
                }
                "property_declaration" | "event_declaration" => {
                    members.push(MemberSymbol {
                        name: declared_name_text(&member, source).to_string(),
                        kind: if member.kind() == "event_declaration" {
                            MemberKind::Event
                        } else {
                            MemberKind::Property
                        },
                        ty: self.resolve_optional(declared_type(&member), source, &scope),
                        parameters: Vec::new(),
                        type_parameters: Vec::new(),
                        is_static,
                    });
                }
                "indexer_declaration" => {
                    members.push(MemberSymbol {
                        name: "this[]".to_string(),
                        kind: MemberKind::Property,
                        ty: self.resolve_optional(declared_type(&member), source, &scope),
                        parameters: self.bracketed_parameter_symbols(&member, source, &scope),
                        type_parameters: Vec::new(),
                        is_static: false,
                    });
                }
                "method_declaration" => {
                    members.push(MemberSymbol {
                        name: declared_name_text(&member, source).to_string(),
                        kind: MemberKind::Method,
                        ty: self.resolve_optional(return_type(&member), source, &scope),
                        parameters: self.parameter_symbols(&member, source, &scope),
                        type_parameters: type_parameter_names(&member, source),
                        is_static,
                    });
                }
                "constructor_declaration" => {
                    members.push(MemberSymbol {
                        name: declared_name_text(&member, source).to_string(),
                        kind: MemberKind::Constructor,
                        ty: own_type.clone(),
                        parameters: self.parameter_symbols(&member, source, &scope),
                        type_parameters: Vec::new(),
                        is_static,
                    });
                }
                _ => {}
            }
        }
        members
    }

    fn parameter_symbols(&self, node: &Node, source: &str, scope: &Scope) -> Vec<ParameterSymbol> {
        parameters(node)
            .iter()
            .map(|p| self.parameter_symbol(p, source, scope))
            .collect()
    }

    fn bracketed_parameter_symbols(
        &self,
        node: &Node,
        source: &str,
        scope: &Scope,
    ) -> Vec<ParameterSymbol> {
        bracketed_parameters(node)
            .iter()
            .map(|p| self.parameter_symbol(p, source, scope))
            .collect()
    }

    pub fn parameter_symbol(&self, node: &Node, source: &str, scope: &Scope) -> ParameterSymbol {
        ParameterSymbol {
            name: declared_name_text(node, source).to_string(),
            ty: self.resolve_optional(declared_type(node), source, scope),
            modifier: parameter_modifier(node, source),
            default_value: value_after_equals(node)
                .map(|v| node_text(&v, source).to_string())
                .unwrap_or_default(),
        }
    }

    fn resolve_optional(&self, node: Option<Node>, source: &str, scope: &Scope) -> TypeRef {
        node.and_then(|n| {
            self.resolve_type(&n, source, scope)
                .or_else(|| Some(TypeRef::unresolved(node_text(&n, source))))
        })
        .unwrap_or_else(|| TypeRef::unresolved(""))
    }

    /// Qualified name a (possibly dotted) type name refers to in `scope`.
    pub fn resolve_name(&self, name: &str, scope: &Scope) -> Option<String> {
        let name = name.trim_start_matches("global::");
        if name.is_empty() {
            return None;
        }
        let (head, rest) = match name.split_once('.') {
            Some((head, rest)) => (head, rest),
            None => (name, ""),
        };

        if let Some(alias) = scope.alias(head) {
            let target = if rest.is_empty() {
                alias.name.clone()
            } else {
                qualify(&alias.name, rest)
            };
            if self.contains(&target) {
                return Some(target);
            }
        }

        for containing in scope.containing_types.iter().rev() {
            if let Some(found) = self.resolve_nested(containing, name) {
                return Some(found);
            }
        }

        for namespace in scope.namespace_candidates() {
            let candidate = qualify(&namespace, name);
            if self.contains(&candidate) {
                return Some(candidate);
            }
        }

        scope
            .usings
            .iter()
            .filter(|u| u.alias.is_empty())
            .map(|u| qualify(&u.name, name))
            .find(|candidate| self.contains(candidate))
    }

    /// `name` nested in `container` or in one of its base classes.
    fn resolve_nested(&self, container: &str, name: &str) -> Option<String> {
        let mut visited = HashSet::new();
        let mut pending = vec![container.to_string()];
        while let Some(current) = pending.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            let candidate = qualify(&current, name);
            if self.contains(&candidate) {
                return Some(candidate);
            }
            if let Some(symbol) = self.get(&current) {
                pending.extend(symbol.base_types.iter().map(|b| b.name.clone()));
            }
        }
        None
    }

    /// Resolve a type syntax node. `None` for `var`, which needs inference.
    pub fn resolve_type(&self, node: &Node, source: &str, scope: &Scope) -> Option<TypeRef> {
        let text = node_text(node, source);
        match node.kind() {
            "implicit_type" => None,
            "predefined_type" => Some(TypeRef::keyword(text)),
            "identifier" => {
                if text == "var" && self.resolve_name(text, scope).is_none() {
                    return None;
                }
                if scope.type_parameters.iter().any(|p| p == text) {
                    return Some(TypeRef::type_parameter(text));
                }
                Some(self.resolve_named(text, Vec::new(), scope))
            }
            "generic_name" => {
                let name = declared_name_text(node, source);
                let arguments = self.type_arguments(node, source, scope);
                Some(self.resolve_named(name, arguments, scope))
            }
            "qualified_name" => {
                let right = node.child_by_field_name("name");
                let arguments = match right {
                    Some(r) if r.kind() == "generic_name" => self.type_arguments(&r, source, scope),
                    _ => Vec::new(),
                };
                Some(self.resolve_named(&strip_type_arguments(text), arguments, scope))
            }
            "alias_qualified_name" => {
                let name = text.rsplit("::").next().unwrap_or(text);
                Some(self.resolve_named(&strip_type_arguments(name), Vec::new(), scope))
            }
            "nullable_type" => {
                let inner = node
                    .child_by_field_name("type")
                    .or_else(|| node.named_child(0))?;
                let mut resolved = self.resolve_type(&inner, source, scope)?;
                resolved.nullable = true;
                Some(resolved)
            }
            "array_type" => {
                let inner = node
                    .child_by_field_name("type")
                    .or_else(|| node.named_child(0))?;
                let mut resolved = self.resolve_type(&inner, source, scope)?;
                resolved.array_rank += 1;
                Some(resolved)
            }
            "tuple_type" => {
                let elements = find_children_by_type(node, "tuple_element")
                    .iter()
                    .map(|element| self.resolve_optional(declared_type(element), source, scope))
                    .collect();
                Some(TypeRef::tuple(elements))
            }
            "ref_type" | "scoped_type" => {
                let inner = node
                    .child_by_field_name("type")
                    .or_else(|| node.named_child(0))?;
                self.resolve_type(&inner, source, scope)
            }
            _ => Some(TypeRef::unresolved(text)),
        }
    }

    fn type_arguments(&self, node: &Node, source: &str, scope: &Scope) -> Vec<TypeRef> {
        let Some(list) = find_child_by_type(node, "type_argument_list") else {
            return Vec::new();
        };
        named_children(&list)
            .iter()
            .map(|argument| {
                self.resolve_type(argument, source, scope)
                    .unwrap_or_else(|| TypeRef::unresolved(node_text(argument, source)))
            })
            .collect()
    }

    fn resolve_named(&self, name: &str, arguments: Vec<TypeRef>, scope: &Scope) -> TypeRef {
        match self.resolve_name(name, scope) {
            Some(resolved) => TypeRef::named(resolved),
            None => TypeRef::unresolved(name),
        }
        .with_arguments(arguments)
    }

    /// First non-interface base type, or the implicit one.
    pub fn base_class(&self, symbol: &TypeSymbol) -> Option<TypeRef> {
        symbol
            .base_types
            .iter()
            .find(|b| self.kind_of(b) != Some(TypeKind::Interface))
            .cloned()
            .or_else(|| symbol.kind.implicit_base().map(TypeRef::named))
    }

    /// Find a member by name on `receiver` or any of its base types.
    pub fn find_member<F>(&self, receiver: &TypeRef, name: &str, accept: F) -> Option<MemberLookup>
    where
        F: Fn(&MemberSymbol) -> bool,
    {
        let mut visited = HashSet::new();
        let mut pending = vec![receiver.clone()];
        while let Some(current) = pending.pop() {
            let current = if current.is_array() {
                TypeRef::named("System.Array")
            } else {
                current
            };
            if current.kind != TypeRefKind::Named || !visited.insert(current.name.clone()) {
                continue;
            }
            let Some(symbol) = self.get(&current.name) else {
                continue;
            };
            let bindings = symbol.bindings(&current);
            if let Some(member) = symbol
                .members
                .iter()
                .find(|m| m.name == name && accept(m))
            {
                return Some(MemberLookup {
                    owner: current.clone(),
                    member: member.substitute(&bindings),
                });
            }
            // Depth-first, base class before interfaces.
            let mut bases: Vec<TypeRef> = symbol
                .base_types
                .iter()
                .map(|b| b.substitute(&bindings))
                .collect();
            if let Some(implicit) = symbol.kind.implicit_base() {
                if !bases.iter().any(|b| self.kind_of(b) != Some(TypeKind::Interface)) {
                    bases.insert(0, TypeRef::named(implicit));
                }
            }
            pending.extend(bases.into_iter().rev());
        }
        if receiver.name != "System.Object" && !visited.contains("System.Object") {
            return self.find_member(&TypeRef::named("System.Object"), name, accept);
        }
        None
    }

    /// Field, property, event or enum label named `name`.
    pub fn find_field(&self, receiver: &TypeRef, name: &str) -> Option<MemberLookup> {
        self.find_member(receiver, name, MemberSymbol::is_field_like)
    }

    /// Method named `name`, preferring an overload that accepts
    /// `argument_count` arguments.
    pub fn find_method(
        &self,
        receiver: &TypeRef,
        name: &str,
        argument_count: usize,
    ) -> Option<MemberLookup> {
        self.find_member(receiver, name, |m| {
            m.kind == MemberKind::Method && m.accepts(argument_count)
        })
        .or_else(|| self.find_member(receiver, name, |m| m.kind == MemberKind::Method))
    }

    pub fn find_constructor(&self, ty: &TypeRef, argument_count: usize) -> Option<MemberLookup> {
        let symbol = self.get(&ty.name)?;
        let bindings = symbol.bindings(ty);
        let constructors: Vec<&MemberSymbol> = symbol
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::Constructor)
            .collect();
        let chosen = constructors
            .iter()
            .find(|m| m.accepts(argument_count))
            .or_else(|| constructors.first())?;
        Some(MemberLookup {
            owner: ty.clone(),
            member: chosen.substitute(&bindings),
        })
    }
}

/// `Outer<int>.Inner<string>` becomes `Outer.Inner`.
pub fn strip_type_arguments(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => stripped.push(c),
            _ => {}
        }
    }
    stripped
}
