// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Schema model
//!
//! [`SchemaModel`] owns the namespaces and wires the derived-set links at
//! construction time. After [`SchemaModel::new`] returns, the graph is
//! immutable; every downstream component only reads it.

use serde::{Deserialize, Serialize};

use crate::types::{EDM_NAMESPACE, TypeDescriptor, TypeKind, TypeRef};

/// A named grouping of types, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace name.
    pub name: String,
    /// Types declared in this namespace, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Builder method: set the declared types.
    pub fn with_types(mut self, types: Vec<TypeDescriptor>) -> Self {
        self.types = types;
        self
    }

    /// Find a type by simple name.
    pub fn type_named(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Whether this is the reserved built-in namespace.
    pub fn is_reserved(&self) -> bool {
        self.name.eq_ignore_ascii_case(EDM_NAMESPACE)
    }
}

/// The immutable schema graph.
///
/// Construct with [`SchemaModel::new`], which computes each type's derived
/// set from the declared base links. To load a model from serialized data,
/// deserialize a `Vec<Namespace>` and pass it to `new` so the derived links
/// are wired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaModel {
    namespaces: Vec<Namespace>,
}

impl SchemaModel {
    /// Build the graph and wire the derived-set links.
    ///
    /// Derived sets are recomputed from the declared base links, so feeding a
    /// previously serialized graph back in is safe.
    pub fn new(mut namespaces: Vec<Namespace>) -> Self {
        for ns in &mut namespaces {
            for ty in &mut ns.types {
                ty.derived.clear();
            }
        }

        let links: Vec<(TypeRef, TypeRef)> = namespaces
            .iter()
            .flat_map(|ns| ns.types.iter())
            .filter_map(|ty| ty.base.clone().map(|base| (base, ty.type_ref())))
            .collect();

        for (base, child) in links {
            if let Some(base_type) = namespaces
                .iter_mut()
                .find(|ns| ns.name == base.namespace)
                .and_then(|ns| ns.types.iter_mut().find(|t| t.name == base.name))
            {
                base_type.derived.push(child);
            }
        }

        Self { namespaces }
    }

    /// All namespaces, in declaration order.
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Find a namespace by exact name.
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    /// Resolve a type reference to its descriptor.
    ///
    /// Returns `None` for primitives and for dangling references.
    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&TypeDescriptor> {
        self.namespace(&type_ref.namespace)
            .and_then(|ns| ns.type_named(&type_ref.name))
    }

    /// The entity container: the first Service-kind type in declaration order.
    pub fn entity_container(&self) -> Option<&TypeDescriptor> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.types.iter())
            .find(|ty| ty.kind == TypeKind::Service)
    }
}
