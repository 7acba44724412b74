// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Type descriptors
//!
//! This module defines [`TypeDescriptor`], the tagged [`TypeKind`] union, and
//! the name-based [`TypeRef`] used for all cross-type references in the graph.

use serde::{Deserialize, Serialize};

use crate::Documented;
use crate::method::MethodDescriptor;
use crate::property::PropertyDescriptor;

/// The reserved namespace holding the built-in primitive types.
///
/// Namespace filtering excludes it (case-insensitively) from every semantic
/// query, so primitive wrappers never leak into domain type result sets.
pub const EDM_NAMESPACE: &str = "Edm";

/// Kind of a schema type.
///
/// Closed union: classification matches exhaustively on it, so adding a kind
/// is a compile-time-checked change everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    /// An addressable domain entity.
    Entity,
    /// A structured value type without independent identity.
    Complex,
    /// An entity carrying a media stream.
    MediaEntity,
    /// An enumeration.
    Enum,
    /// The service root (entity container).
    Service,
}

/// Name-based reference to a type in the same graph.
///
/// References are non-owning: they are resolved through
/// [`SchemaModel::resolve`](crate::SchemaModel::resolve). Primitive types are
/// references into the reserved [`EDM_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Namespace the referenced type is declared in.
    pub namespace: String,
    /// Simple name of the referenced type.
    pub name: String,
}

impl TypeRef {
    /// Create a reference to a type in the given namespace.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a reference to a built-in primitive type (e.g. `String`, `Stream`).
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(EDM_NAMESPACE, name)
    }

    /// The fully-qualified name, e.g. `microsoft.graph.Event`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Whether this reference points into the reserved primitive namespace.
    pub fn is_primitive(&self) -> bool {
        self.namespace.eq_ignore_ascii_case(EDM_NAMESPACE)
    }
}

/// A type declared in a namespace.
///
/// The `derived` set is computed by [`SchemaModel::new`](crate::SchemaModel::new)
/// from the declared `base` links; nothing downstream writes to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Simple type name.
    pub name: String,
    /// Name of the declaring namespace.
    pub namespace: String,
    /// Kind discriminator.
    pub kind: TypeKind,
    /// Declared base type, if any.
    #[serde(default)]
    pub base: Option<TypeRef>,
    /// Whether the type is abstract (cannot be instantiated by clients).
    #[serde(default)]
    pub is_abstract: bool,
    /// Properties declared directly on this type.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    /// Methods declared directly on this type.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Free-text documentation (semicolon-delimited annotation channel).
    #[serde(default)]
    pub documentation: Option<String>,
    /// Types declaring this type as their base. Filled by the graph builder.
    #[serde(default)]
    pub derived: Vec<TypeRef>,
}

impl TypeDescriptor {
    fn new(kind: TypeKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            base: None,
            is_abstract: false,
            properties: Vec::new(),
            methods: Vec::new(),
            documentation: None,
            derived: Vec::new(),
        }
    }

    /// Create an entity type.
    pub fn entity(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Entity, namespace, name)
    }

    /// Create a complex type.
    pub fn complex(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Complex, namespace, name)
    }

    /// Create a media entity type.
    pub fn media_entity(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::MediaEntity, namespace, name)
    }

    /// Create an enumeration type.
    pub fn enumeration(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, namespace, name)
    }

    /// Create a service root (entity container) type.
    pub fn service(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Service, namespace, name)
    }

    /// Builder method: set the base type.
    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    /// Builder method: mark the type abstract.
    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Builder method: set the declared properties.
    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties;
        self
    }

    /// Builder method: set the declared methods.
    pub fn with_methods(mut self, methods: Vec<MethodDescriptor>) -> Self {
        self.methods = methods;
        self
    }

    /// Builder method: set the documentation string.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// The fully-qualified name, e.g. `microsoft.graph.Event`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// A reference to this type.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    /// Find a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Find a declared method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

impl Documented for TypeDescriptor {
    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let ty = TypeDescriptor::entity("microsoft.graph", "Event");
        assert_eq!(ty.qualified_name(), "microsoft.graph.Event");
        assert_eq!(ty.type_ref().qualified_name(), "microsoft.graph.Event");
    }

    #[test]
    fn test_primitive_ref() {
        let stream = TypeRef::primitive("Stream");
        assert!(stream.is_primitive());
        assert_eq!(stream.qualified_name(), "Edm.Stream");

        let event = TypeRef::new("microsoft.graph", "Event");
        assert!(!event.is_primitive());
    }

    #[test]
    fn test_builder_flags() {
        let base = TypeRef::new("microsoft.graph", "Attachment");
        let ty = TypeDescriptor::entity("microsoft.graph", "FileAttachment")
            .with_base(base.clone())
            .with_abstract();
        assert_eq!(ty.base, Some(base));
        assert!(ty.is_abstract);
        assert_eq!(ty.kind, TypeKind::Entity);
    }

    #[test]
    fn test_property_and_method_lookup() {
        let ty = TypeDescriptor::entity("microsoft.graph", "Event")
            .with_properties(vec![PropertyDescriptor::new(
                "subject",
                TypeRef::primitive("String"),
            )])
            .with_methods(vec![MethodDescriptor::action("forward")]);
        assert!(ty.property("subject").is_some());
        assert!(ty.property("body").is_none());
        assert!(ty.method("forward").is_some());
        assert!(ty.method("reply").is_none());
    }
}
