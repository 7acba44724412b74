// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Namespace filter and type classifier
//!
//! Partition queries over the schema graph. Every multi-namespace query
//! first narrows through [`ModelReflection::domain_namespaces`], which
//! excludes the reserved built-in namespace — primitive wrapper types never
//! appear in domain result sets.
//!
//! All sequences are in declaration order; the graph is immutable, so
//! re-querying is idempotent.

use odata_typegen_model::{
    MethodDescriptor, Namespace, PropertyDescriptor, SchemaModel, TypeDescriptor, TypeKind,
};

use crate::error::{ReflectionError, ReflectionResult};
use crate::filter::PropertyFilter;
use crate::relationship;

/// Qualified name of the one well-known non-domain complex type, excluded
/// from complex-type classification (case-insensitive match).
pub const JSON_WRAPPER_TYPE: &str = "microsoft.graph.json";

/// Classification queries over a schema model.
pub struct ModelReflection<'a> {
    model: &'a SchemaModel,
}

impl<'a> ModelReflection<'a> {
    /// Create a reflection view over the model.
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// The namespaces remaining after excluding the reserved built-in
    /// namespace. Errors when nothing remains — never an empty set a caller
    /// could iterate obliviously.
    pub fn domain_namespaces(&self) -> ReflectionResult<Vec<&'a Namespace>> {
        let filtered: Vec<&Namespace> = self
            .model
            .namespaces()
            .iter()
            .filter(|ns| !ns.is_reserved())
            .collect();

        if filtered.is_empty() {
            Err(ReflectionError::EmptyNamespaceSet)
        } else {
            Ok(filtered)
        }
    }

    fn domain_types(
        &self,
        keep: impl Fn(&TypeDescriptor) -> bool,
    ) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        Ok(self
            .domain_namespaces()?
            .into_iter()
            .flat_map(|ns| ns.types.iter())
            .filter(|ty| keep(ty))
            .collect())
    }

    /// All domain complex types, excluding the JSON wrapper type.
    pub fn complex_types(&self) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        self.domain_types(|ty| {
            ty.kind == TypeKind::Complex
                && !ty.qualified_name().eq_ignore_ascii_case(JSON_WRAPPER_TYPE)
        })
    }

    /// All entity types, media entities included.
    pub fn entity_types(&self) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        self.domain_types(|ty| matches!(ty.kind, TypeKind::Entity | TypeKind::MediaEntity))
    }

    /// Media entity types only.
    pub fn media_entity_types(&self) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        self.domain_types(|ty| ty.kind == TypeKind::MediaEntity)
    }

    /// All enumeration types.
    pub fn enum_types(&self) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        self.domain_types(|ty| ty.kind == TypeKind::Enum)
    }

    /// Methods of all entity types, flattened in declaration order.
    pub fn methods(&self) -> ReflectionResult<Vec<&'a MethodDescriptor>> {
        Ok(self
            .entity_types()?
            .into_iter()
            .flat_map(|ty| ty.methods.iter())
            .collect())
    }

    /// Every property with its owning type: entity types' own properties,
    /// then the entity container's, then complex types'. Duplicates are not
    /// eliminated.
    pub fn properties_with_owners(
        &self,
    ) -> ReflectionResult<Vec<(&'a TypeDescriptor, &'a PropertyDescriptor)>> {
        let mut owners: Vec<&TypeDescriptor> = self.entity_types()?;
        owners.extend(self.model.entity_container());
        owners.extend(self.complex_types()?);

        Ok(owners
            .into_iter()
            .flat_map(|ty| ty.properties.iter().map(move |p| (ty, p)))
            .collect())
    }

    /// Every property of the model (see [`properties_with_owners`] for the
    /// aggregation rule).
    ///
    /// [`properties_with_owners`]: ModelReflection::properties_with_owners
    pub fn properties(&self) -> ReflectionResult<Vec<&'a PropertyDescriptor>> {
        Ok(self
            .properties_with_owners()?
            .into_iter()
            .map(|(_, property)| property)
            .collect())
    }

    /// Every property matching the filter.
    pub fn properties_matching(
        &self,
        filter: &PropertyFilter,
    ) -> ReflectionResult<Vec<&'a PropertyDescriptor>> {
        Ok(filter.apply(self.properties()?))
    }

    /// Every property whose projection type is the primitive `Stream`.
    pub fn stream_properties(&self) -> ReflectionResult<Vec<&'a PropertyDescriptor>> {
        self.properties_matching(&PropertyFilter::new().with_type_name("Stream"))
    }

    /// Entity types that are the projection type of at least one reference
    /// property anywhere in the model. Each distinct projection type name
    /// contributes at most one entity, in first-reference order.
    pub fn entity_reference_types(&self) -> ReflectionResult<Vec<&'a TypeDescriptor>> {
        let entity_types = self.entity_types()?;
        let mut seen: Vec<&str> = Vec::new();
        let mut referenced = Vec::new();

        for (owner, property) in self.properties_with_owners()? {
            if !relationship::is_reference(owner, property) {
                continue;
            }
            let target = property.projection.name.as_str();
            if seen.contains(&target) {
                continue;
            }
            seen.push(target);
            if let Some(entity) = entity_types.iter().find(|ty| ty.name == target) {
                referenced.push(*entity);
            }
        }

        Ok(referenced)
    }
}
