// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Property filter
//!
//! Predicate composition over property sets. The same filter core serves
//! single-type and whole-model queries.

use odata_typegen_model::PropertyDescriptor;

use crate::annotation::Annotations;

/// Conjunctive filter over properties.
///
/// Both predicates are optional; an absent predicate is "no constraint",
/// not "match nothing". The type-name predicate is an exact match on the
/// projection type's simple name; the annotation predicate is an exact
/// segment match over the property's documentation tags.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    type_name: Option<String>,
    annotation: Option<String>,
}

impl PropertyFilter {
    /// Create a filter with no constraints (matches every property).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: require the projection type's simple name to equal `type_name`.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Builder method: require the documentation tags to contain `tag`.
    pub fn with_annotation(mut self, tag: impl Into<String>) -> Self {
        self.annotation = Some(tag.into());
        self
    }

    /// Whether the property satisfies every present predicate.
    pub fn matches(&self, property: &PropertyDescriptor) -> bool {
        if let Some(type_name) = &self.type_name {
            if property.projection.name != *type_name {
                return false;
            }
        }
        if let Some(tag) = &self.annotation {
            if !Annotations::of(property).contains(tag) {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a property sequence, preserving its order.
    pub fn apply<'a>(
        &self,
        properties: impl IntoIterator<Item = &'a PropertyDescriptor>,
    ) -> Vec<&'a PropertyDescriptor> {
        properties.into_iter().filter(|p| self.matches(p)).collect()
    }
}
