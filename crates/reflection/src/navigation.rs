// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Service navigation resolver
//!
//! Given a navigable property whose projection type is an entity, finds the
//! service-root property a client must traverse to reach instances of that
//! type. Resolution order encodes precedence, because the cases are not
//! mutually exclusive in the schema:
//!
//! 1. An explicitly declared top-level collection of the target type.
//! 2. An implicit collection reachable through a singleton whose target
//!    contains the type.
//! 3. Neither: the metadata itself is defective for this property, reported
//!    as [`ReflectionError::MalformedReference`].
//!
//! Tie-breaks are "first declared": the schema's declaration order is the
//! deterministic iteration order throughout.

use odata_typegen_model::{PropertyDescriptor, SchemaModel, TypeDescriptor, TypeKind};

use crate::error::{ReflectionError, ReflectionResult};
use crate::relationship;

/// A resolved path from the service root to a target entity type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceNavigation<'a> {
    /// An explicitly declared top-level collection of the target type.
    Collection(&'a PropertyDescriptor),
    /// A singleton whose target type contains a collection of the target
    /// type; the entity set is implicit behind it.
    SingletonPath(&'a PropertyDescriptor),
}

impl<'a> ServiceNavigation<'a> {
    /// The service-root property representing the traversable path.
    pub fn property(&self) -> &'a PropertyDescriptor {
        match self {
            ServiceNavigation::Collection(property) => property,
            ServiceNavigation::SingletonPath(property) => property,
        }
    }
}

/// Resolver for service-root reachability of navigation targets.
pub struct ServiceNavigationResolver<'a> {
    model: &'a SchemaModel,
}

impl<'a> ServiceNavigationResolver<'a> {
    /// Create a resolver over the model.
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// Resolve the service-root collection for `property`, declared on
    /// `owner`, whose projection type is an entity.
    ///
    /// Failures are local to the property: the model is untouched and other
    /// properties resolve independently. One diagnostic is emitted per
    /// failure before the error is returned.
    pub fn resolve(
        &self,
        owner: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> ReflectionResult<ServiceNavigation<'a>> {
        if let Some(found) = self.explicit_collection(owner, property) {
            return Ok(found);
        }
        if let Some(found) = self.singleton_path(owner, property) {
            return Ok(found);
        }

        tracing::error!(
            property = %property.name,
            owning_type = %owner.qualified_name(),
            "navigation property is not self-contained and no explicit or implicit entity set exposes its target type"
        );
        Err(ReflectionError::MalformedReference {
            property: property.name.clone(),
            owning_type: owner.qualified_name(),
        })
    }

    /// Service-kind types in the owner's namespace, in declaration order.
    fn service_types(&self, namespace: &str) -> Vec<&'a TypeDescriptor> {
        self.model
            .namespace(namespace)
            .map(|ns| {
                ns.types
                    .iter()
                    .filter(|ty| ty.kind == TypeKind::Service)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Case 1: a collection-valued navigation property on any service type
    /// whose projection's qualified name equals the target's.
    fn explicit_collection(
        &self,
        owner: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> Option<ServiceNavigation<'a>> {
        let target = property.projection.qualified_name();
        self.service_types(&owner.namespace)
            .into_iter()
            .flat_map(|service| relationship::navigation_properties(service))
            .find(|candidate| {
                candidate.is_collection && candidate.projection.qualified_name() == target
            })
            .map(ServiceNavigation::Collection)
    }

    /// Case 2: a singleton on the first service type whose target declares a
    /// containment property of the target's type name.
    ///
    /// With more than one service type in a namespace only the first is
    /// scanned; which one that is depends on declaration order.
    fn singleton_path(
        &self,
        owner: &TypeDescriptor,
        property: &PropertyDescriptor,
    ) -> Option<ServiceNavigation<'a>> {
        let service = self.service_types(&owner.namespace).into_iter().next()?;
        service
            .properties
            .iter()
            .filter(|candidate| candidate.is_singleton())
            .find(|singleton| {
                self.model.resolve(&singleton.projection).is_some_and(|target| {
                    target.properties.iter().any(|contained| {
                        contained.contains_target
                            && contained.projection.name == property.projection.name
                    })
                })
            })
            .map(ServiceNavigation::SingletonPath)
    }
}

/// The generation-facing name of a navigation property reached through a
/// singleton.
///
/// When the singleton's binding table is non-empty, the first binding whose
/// external path ends with the property's name rewrites the name to the
/// bound target (the suffix match tolerates qualified keys like
/// `Container.PropertyName`). Otherwise — including an empty binding table —
/// the property's own name is used unchanged.
pub fn implicit_property_name<'a>(
    property: &'a PropertyDescriptor,
    singleton: &'a PropertyDescriptor,
) -> &'a str {
    match &singleton.singleton {
        Some(table) if !table.bindings.is_empty() => table
            .bindings
            .iter()
            .find(|binding| binding.path.ends_with(&property.name))
            .map(|binding| binding.target.as_str())
            .unwrap_or(&property.name),
        _ => &property.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_typegen_model::{Namespace, TypeRef};

    fn graph(ns: &str) -> TypeRef {
        TypeRef::new("microsoft.graph", ns)
    }

    /// Both an explicit `events` collection and a singleton containing
    /// events exist; an unroutable `Orphan` entity exists alongside.
    fn sample_model() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
            TypeDescriptor::entity("microsoft.graph", "Event"),
            TypeDescriptor::entity("microsoft.graph", "MailFolder"),
            TypeDescriptor::entity("microsoft.graph", "Orphan"),
            TypeDescriptor::entity("microsoft.graph", "User").with_properties(vec![
                PropertyDescriptor::new("events", graph("Event"))
                    .collection()
                    .link()
                    .containment(),
                PropertyDescriptor::new("mailFolders", graph("MailFolder"))
                    .collection()
                    .link()
                    .containment(),
            ]),
            TypeDescriptor::service("microsoft.graph", "GraphService").with_properties(vec![
                PropertyDescriptor::new("events", graph("Event")).collection().link(),
                PropertyDescriptor::new("me", graph("User"))
                    .link()
                    .with_binding("Container.mailFolders", "myMailFolders"),
            ]),
        ])])
    }

    fn reference(name: &str, target: TypeRef) -> PropertyDescriptor {
        PropertyDescriptor::new(name, target).collection().link()
    }

    #[test]
    fn test_explicit_collection_wins_over_singleton_path() {
        let model = sample_model();
        let calendar = TypeDescriptor::entity("microsoft.graph", "Calendar");
        let events = reference("attachments", graph("Event"));

        let resolved = ServiceNavigationResolver::new(&model)
            .resolve(&calendar, &events)
            .unwrap();
        match resolved {
            ServiceNavigation::Collection(property) => assert_eq!(property.name, "events"),
            other => panic!("expected explicit collection, got {:?}", other),
        }
    }

    #[test]
    fn test_singleton_path_fallback() {
        let model = sample_model();
        let message = TypeDescriptor::entity("microsoft.graph", "Message");
        let parent_folder = reference("parentFolder", graph("MailFolder"));

        let resolved = ServiceNavigationResolver::new(&model)
            .resolve(&message, &parent_folder)
            .unwrap();
        match resolved {
            ServiceNavigation::SingletonPath(property) => assert_eq!(property.name, "me"),
            other => panic!("expected singleton path, got {:?}", other),
        }
    }

    #[test]
    fn test_unroutable_property_is_malformed_reference() {
        let model = sample_model();
        let holder = TypeDescriptor::entity("microsoft.graph", "Holder");
        let orphan = reference("orphan", graph("Orphan"));

        let err = ServiceNavigationResolver::new(&model)
            .resolve(&holder, &orphan)
            .unwrap_err();
        assert_eq!(
            err,
            ReflectionError::MalformedReference {
                property: "orphan".to_string(),
                owning_type: "microsoft.graph.Holder".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_does_not_affect_sibling_resolution() {
        let model = sample_model();
        let resolver = ServiceNavigationResolver::new(&model);
        let holder = TypeDescriptor::entity("microsoft.graph", "Holder");

        assert!(resolver.resolve(&holder, &reference("orphan", graph("Orphan"))).is_err());
        assert!(resolver.resolve(&holder, &reference("events", graph("Event"))).is_ok());
    }

    #[test]
    fn test_comparison_uses_qualified_projection_names() {
        let model = sample_model();
        let other = TypeDescriptor::entity("other.namespace", "Calendar");
        // Same simple name, different namespace: no explicit match, and the
        // owner's namespace has no service types at all.
        let events = reference("events", TypeRef::new("other.namespace", "Event"));
        assert!(ServiceNavigationResolver::new(&model).resolve(&other, &events).is_err());
    }

    #[test]
    fn test_implicit_name_rewritten_by_suffix_match() {
        let model = sample_model();
        let container = model.entity_container().unwrap();
        let me = container.property("me").unwrap();
        let mail_folders = PropertyDescriptor::new("mailFolders", graph("MailFolder"))
            .collection()
            .link();
        assert_eq!(implicit_property_name(&mail_folders, me), "myMailFolders");
    }

    #[test]
    fn test_implicit_name_unchanged_without_matching_binding() {
        let model = sample_model();
        let container = model.entity_container().unwrap();
        let me = container.property("me").unwrap();
        let events = PropertyDescriptor::new("events", graph("Event")).collection().link();
        assert_eq!(implicit_property_name(&events, me), "events");
    }

    #[test]
    fn test_implicit_name_unchanged_with_empty_binding_table() {
        let bare = PropertyDescriptor::new("me", graph("User")).link().singleton();
        let events = PropertyDescriptor::new("events", graph("Event")).collection().link();
        assert_eq!(implicit_property_name(&events, &bare), "events");
    }
}
