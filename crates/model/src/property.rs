// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Property descriptors
//!
//! This module defines [`PropertyDescriptor`] together with the singleton
//! binding table used by the service navigation resolver.

use serde::{Deserialize, Serialize};

use crate::Documented;
use crate::types::TypeRef;

/// A property declared on a type.
///
/// The `projection` is the effective target type after model-level aliasing;
/// every classification in the reflection layer compares projections, never
/// the raw declared type. It defaults to the declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: String,
    /// Raw declared target type.
    pub declared_type: TypeRef,
    /// Effective target type after aliasing.
    pub projection: TypeRef,
    /// Whether the property is collection-valued.
    #[serde(default)]
    pub is_collection: bool,
    /// Whether the property is a navigational link.
    #[serde(default)]
    pub is_link: bool,
    /// Whether target instances are contained (no independent reachability).
    #[serde(default)]
    pub contains_target: bool,
    /// Free-text documentation (semicolon-delimited annotation channel).
    #[serde(default)]
    pub documentation: Option<String>,
    /// Present when this property is a named service-root singleton.
    #[serde(default)]
    pub singleton: Option<SingletonBinding>,
}

impl PropertyDescriptor {
    /// Create a structural property; the projection defaults to the declared type.
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            projection: declared_type.clone(),
            declared_type,
            is_collection: false,
            is_link: false,
            contains_target: false,
            documentation: None,
            singleton: None,
        }
    }

    /// Builder method: override the projection type.
    pub fn with_projection(mut self, projection: TypeRef) -> Self {
        self.projection = projection;
        self
    }

    /// Builder method: mark collection-valued.
    pub fn collection(mut self) -> Self {
        self.is_collection = true;
        self
    }

    /// Builder method: mark as a navigational link.
    pub fn link(mut self) -> Self {
        self.is_link = true;
        self
    }

    /// Builder method: mark as containment.
    pub fn containment(mut self) -> Self {
        self.contains_target = true;
        self
    }

    /// Builder method: set the documentation string.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Builder method: mark as a singleton with an empty binding table.
    pub fn singleton(mut self) -> Self {
        self.singleton.get_or_insert_with(SingletonBinding::default);
        self
    }

    /// Builder method: mark as a singleton and append a navigation binding.
    pub fn with_binding(mut self, path: impl Into<String>, target: impl Into<String>) -> Self {
        self.singleton
            .get_or_insert_with(SingletonBinding::default)
            .bindings
            .push(NavigationBinding {
                path: path.into(),
                target: target.into(),
            });
        self
    }

    /// Whether this property is a named service-root singleton.
    pub fn is_singleton(&self) -> bool {
        self.singleton.is_some()
    }
}

impl Documented for PropertyDescriptor {
    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

/// Binding table of a singleton property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingletonBinding {
    /// Declared navigation-property bindings, in declaration order.
    #[serde(default)]
    pub bindings: Vec<NavigationBinding>,
}

/// One navigation-property binding on a singleton.
///
/// Maps an external navigation-path name (possibly qualified, e.g.
/// `Container.PropertyName`) to the locally-exposed property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBinding {
    /// External navigation-path key.
    pub path: String,
    /// Locally-exposed property name.
    pub target: String,
}
