//! Resolved type references.

use crate::models::{EntityType, GenericType};
use std::collections::HashMap;

/// C# keyword types and the `System` types they alias.
pub const KEYWORD_TYPES: &[(&str, &str)] = &[
    ("bool", "System.Boolean"),
    ("byte", "System.Byte"),
    ("sbyte", "System.SByte"),
    ("char", "System.Char"),
    ("decimal", "System.Decimal"),
    ("double", "System.Double"),
    ("float", "System.Single"),
    ("int", "System.Int32"),
    ("uint", "System.UInt32"),
    ("long", "System.Int64"),
    ("ulong", "System.UInt64"),
    ("short", "System.Int16"),
    ("ushort", "System.UInt16"),
    ("nint", "System.IntPtr"),
    ("nuint", "System.UIntPtr"),
    ("object", "System.Object"),
    ("string", "System.String"),
    ("void", "System.Void"),
];

pub fn keyword_to_type(keyword: &str) -> Option<&'static str> {
    KEYWORD_TYPES
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, t)| *t)
}

pub fn type_to_keyword(name: &str) -> Option<&'static str> {
    KEYWORD_TYPES
        .iter()
        .find(|(_, t)| *t == name)
        .map(|(k, _)| *k)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRefKind {
    /// A declared type found in the compilation or the reference set.
    Named,
    TypeParameter,
    Tuple,
    /// Best-effort reconstruction from source text.
    Unresolved,
}

/// A type as the semantic model sees it: qualified name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Qualified name without generic arguments, or source text when
    /// unresolved. Empty for tuples.
    pub name: String,
    pub arguments: Vec<TypeRef>,
    pub nullable: bool,
    pub array_rank: usize,
    pub kind: TypeRefKind,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeRefKind::Named)
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeRefKind::TypeParameter)
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeRefKind::Unresolved)
    }

    pub fn tuple(elements: Vec<TypeRef>) -> Self {
        Self {
            name: String::new(),
            arguments: elements,
            nullable: false,
            array_rank: 0,
            kind: TypeRefKind::Tuple,
        }
    }

    /// `int`, `string`, ... mapped onto their `System` types.
    pub fn keyword(keyword: &str) -> Self {
        match keyword_to_type(keyword) {
            Some(name) => Self::named(name),
            None => Self::unresolved(keyword),
        }
    }

    fn with_kind(name: impl Into<String>, kind: TypeRefKind) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            nullable: false,
            array_rank: 0,
            kind,
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.kind != TypeRefKind::Unresolved
    }

    pub fn is_array(&self) -> bool {
        self.array_rank > 0
    }

    /// Element type of an array, or the single argument of a generic
    /// collection.
    pub fn element_type(&self) -> Option<TypeRef> {
        if self.array_rank > 0 {
            let mut element = self.clone();
            element.array_rank -= 1;
            element.nullable = false;
            return Some(element);
        }
        match self.arguments.as_slice() {
            [single] if self.kind != TypeRefKind::Tuple => Some(single.clone()),
            _ => None,
        }
    }

    /// Base display name: keyword aliases applied, no arguments, no suffixes.
    pub fn base_display(&self) -> String {
        match self.kind {
            TypeRefKind::Tuple => self.tuple_display(),
            _ => type_to_keyword(&self.name)
                .map(str::to_string)
                .unwrap_or_else(|| self.name.clone()),
        }
    }

    fn tuple_display(&self) -> String {
        let elements: Vec<String> = self.arguments.iter().map(TypeRef::display).collect();
        format!("({})", elements.join(", "))
    }

    /// Display string in C# notation (`System.Collections.Generic.List<int>?`).
    pub fn display(&self) -> String {
        let mut display = self.base_display();
        if self.kind != TypeRefKind::Tuple && !self.arguments.is_empty() {
            let arguments: Vec<String> = self.arguments.iter().map(TypeRef::display).collect();
            display.push('<');
            display.push_str(&arguments.join(", "));
            display.push('>');
        }
        for _ in 0..self.array_rank {
            display.push_str("[]");
        }
        if self.nullable {
            display.push('?');
        }
        display
    }

    /// Replace type parameters by their bound arguments.
    pub fn substitute(&self, bindings: &HashMap<String, TypeRef>) -> TypeRef {
        if self.kind == TypeRefKind::TypeParameter {
            if let Some(bound) = bindings.get(&self.name) {
                let mut bound = bound.clone();
                bound.array_rank += self.array_rank;
                bound.nullable |= self.nullable;
                return bound;
            }
        }
        let mut substituted = self.clone();
        substituted.arguments = self
            .arguments
            .iter()
            .map(|argument| argument.substitute(bindings))
            .collect();
        substituted
    }

    pub fn to_generic_type(&self) -> GenericType {
        let mut name = self.base_display();
        for _ in 0..self.array_rank {
            name.push_str("[]");
        }
        let contained_types = if self.kind == TypeRefKind::Tuple {
            Vec::new()
        } else {
            self.arguments.iter().map(TypeRef::to_generic_type).collect()
        };
        GenericType {
            name,
            is_nullable: self.nullable,
            contained_types,
        }
    }

    pub fn to_entity_type(&self) -> EntityType {
        EntityType {
            name: self.display(),
            full_type: self.to_generic_type(),
        }
    }
}
