// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Relationship classifier
//!
//! Labels a property as navigational, and further as a reference (a
//! navigational, non-containing link on a non-service type) versus
//! containment.

use odata_typegen_model::{PropertyDescriptor, TypeDescriptor, TypeKind};

/// Whether the property is a navigational link, regardless of
/// collection-valuedness or containment.
pub fn is_navigation(property: &PropertyDescriptor) -> bool {
    property.is_link
}

/// Whether the property is a reference: a navigational, non-containing link
/// declared on a non-service type. Collection-valued references qualify;
/// multiplicity does not affect reference classification.
pub fn is_reference(owner: &TypeDescriptor, property: &PropertyDescriptor) -> bool {
    owner.kind != TypeKind::Service && property.is_link && !property.contains_target
}

/// Whether the property is collection-valued.
pub fn is_collection(property: &PropertyDescriptor) -> bool {
    property.is_collection
}

/// The type's own properties for which [`is_navigation`] holds, in
/// declaration order.
pub fn navigation_properties(ty: &TypeDescriptor) -> Vec<&PropertyDescriptor> {
    ty.properties.iter().filter(|p| is_navigation(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_typegen_model::TypeRef;

    fn event_ref() -> TypeRef {
        TypeRef::new("microsoft.graph", "Event")
    }

    #[test]
    fn test_navigation_ignores_containment_and_multiplicity() {
        let contained = PropertyDescriptor::new("events", event_ref())
            .collection()
            .link()
            .containment();
        let reference = PropertyDescriptor::new("event", event_ref()).link();
        let structural = PropertyDescriptor::new("subject", TypeRef::primitive("String"));

        assert!(is_navigation(&contained));
        assert!(is_navigation(&reference));
        assert!(!is_navigation(&structural));
    }

    #[test]
    fn test_reference_excludes_containment() {
        let owner = TypeDescriptor::entity("microsoft.graph", "Calendar");
        let reference = PropertyDescriptor::new("events", event_ref()).collection().link();
        let contained = PropertyDescriptor::new("events", event_ref())
            .collection()
            .link()
            .containment();

        assert!(is_reference(&owner, &reference));
        assert!(!is_reference(&owner, &contained));
    }

    #[test]
    fn test_reference_excludes_service_owner() {
        let service = TypeDescriptor::service("microsoft.graph", "GraphService");
        let prop = PropertyDescriptor::new("events", event_ref()).collection().link();
        assert!(!is_reference(&service, &prop));
    }

    #[test]
    fn test_navigation_properties_preserve_declaration_order() {
        let ty = TypeDescriptor::entity("microsoft.graph", "User").with_properties(vec![
            PropertyDescriptor::new("displayName", TypeRef::primitive("String")),
            PropertyDescriptor::new("mailFolders", TypeRef::new("microsoft.graph", "MailFolder"))
                .collection()
                .link()
                .containment(),
            PropertyDescriptor::new("manager", TypeRef::new("microsoft.graph", "User")).link(),
        ]);
        let names: Vec<_> = navigation_properties(&ty).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["mailFolders", "manager"]);
    }
}
