// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Sample schema graphs for testing

use odata_typegen_model::{
    MethodDescriptor, Namespace, ParameterDescriptor, PropertyDescriptor, SchemaModel,
    TypeDescriptor, TypeRef,
};

fn graph(name: &str) -> TypeRef {
    TypeRef::new("microsoft.graph", name)
}

/// Sample schema graphs for testing
pub struct GraphFixtures;

impl GraphFixtures {
    /// A calendar-flavored graph where the service root declares an explicit
    /// `events` collection *and* a `me` singleton whose target contains
    /// events — explicit routing must win.
    ///
    /// Also carries a media entity with a stream property, a complex type,
    /// the JSON wrapper type, an enumeration, and an overloaded action, so
    /// one graph exercises the whole classifier surface.
    pub fn event_graph() -> SchemaModel {
        SchemaModel::new(vec![
            Namespace::new("Edm"),
            Namespace::new("microsoft.graph").with_types(vec![
                TypeDescriptor::entity("microsoft.graph", "Event")
                    .with_properties(vec![
                        PropertyDescriptor::new("subject", TypeRef::primitive("String")),
                        PropertyDescriptor::new("importance", graph("Importance")),
                    ])
                    .with_methods(vec![
                        MethodDescriptor::action("forward").with_overloads(vec![
                            MethodDescriptor::action("forward").with_parameters(vec![
                                ParameterDescriptor::new("comment", TypeRef::primitive("String")),
                            ]),
                        ]),
                        MethodDescriptor::function("delta").returning(graph("Event")),
                    ]),
                TypeDescriptor::entity("microsoft.graph", "Calendar").with_properties(vec![
                    PropertyDescriptor::new("events", graph("Event")).collection().link(),
                ]),
                TypeDescriptor::entity("microsoft.graph", "User").with_properties(vec![
                    PropertyDescriptor::new("events", graph("Event"))
                        .collection()
                        .link()
                        .containment(),
                ]),
                TypeDescriptor::media_entity("microsoft.graph", "Photo").with_properties(vec![
                    PropertyDescriptor::new("content", TypeRef::primitive("Stream"))
                        .with_documentation("navigable;readonly"),
                ]),
                TypeDescriptor::complex("microsoft.graph", "EmailAddress").with_properties(vec![
                    PropertyDescriptor::new("address", TypeRef::primitive("String")),
                ]),
                TypeDescriptor::complex("microsoft.graph", "Json"),
                TypeDescriptor::enumeration("microsoft.graph", "Importance"),
                TypeDescriptor::service("microsoft.graph", "GraphService").with_properties(vec![
                    PropertyDescriptor::new("events", graph("Event")).collection().link(),
                    PropertyDescriptor::new("me", graph("User")).link().singleton(),
                ]),
            ]),
        ])
    }

    /// The mail-folder graph: no top-level `mailFolders` collection exists;
    /// the only route to `MailFolder` is the `me` singleton, whose `User`
    /// target contains a `mailFolders` set. The singleton carries a
    /// qualified navigation binding for name rewriting.
    pub fn mail_graph() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
            TypeDescriptor::entity("microsoft.graph", "MailFolder").with_properties(vec![
                PropertyDescriptor::new("displayName", TypeRef::primitive("String")),
            ]),
            TypeDescriptor::entity("microsoft.graph", "User").with_properties(vec![
                PropertyDescriptor::new("mailFolders", graph("MailFolder"))
                    .collection()
                    .link()
                    .containment(),
            ]),
            TypeDescriptor::entity("microsoft.graph", "Message").with_properties(vec![
                PropertyDescriptor::new("parentFolder", graph("MailFolder")).link(),
            ]),
            TypeDescriptor::service("microsoft.graph", "GraphService").with_properties(vec![
                PropertyDescriptor::new("users", graph("User")).collection().link(),
                PropertyDescriptor::new("me", graph("User"))
                    .link()
                    .with_binding("Container.mailFolders", "myMailFolders"),
            ]),
        ])])
    }

    /// An abstract `Attachment` base with two concrete descendants, and a
    /// `Message` entity referencing the abstract base as a property type;
    /// plus a concrete `Shape` hierarchy that must never be flagged.
    pub fn attachment_hierarchy_graph() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
            TypeDescriptor::entity("microsoft.graph", "Attachment").with_abstract(),
            TypeDescriptor::entity("microsoft.graph", "FileAttachment")
                .with_base(graph("Attachment")),
            TypeDescriptor::entity("microsoft.graph", "ItemAttachment")
                .with_base(graph("Attachment")),
            TypeDescriptor::entity("microsoft.graph", "Message").with_properties(vec![
                PropertyDescriptor::new("attachments", graph("Attachment")).collection().link(),
            ]),
            TypeDescriptor::entity("microsoft.graph", "Shape"),
            TypeDescriptor::entity("microsoft.graph", "Circle").with_base(graph("Shape")),
            TypeDescriptor::entity("microsoft.graph", "Drawing").with_properties(vec![
                PropertyDescriptor::new("shape", graph("Shape")).link(),
            ]),
        ])])
    }

    /// A graph whose service root can route `Event` references but not
    /// `Orphan` references: no explicit collection, and the one singleton's
    /// target contains nothing of that type.
    pub fn unroutable_graph() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
            TypeDescriptor::entity("microsoft.graph", "Event"),
            TypeDescriptor::entity("microsoft.graph", "Orphan"),
            TypeDescriptor::entity("microsoft.graph", "Holder").with_properties(vec![
                PropertyDescriptor::new("orphan", graph("Orphan")).link(),
                PropertyDescriptor::new("event", graph("Event")).link(),
            ]),
            TypeDescriptor::entity("microsoft.graph", "User"),
            TypeDescriptor::service("microsoft.graph", "GraphService").with_properties(vec![
                PropertyDescriptor::new("events", graph("Event")).collection().link(),
                PropertyDescriptor::new("me", graph("User")).link().singleton(),
            ]),
        ])])
    }

    /// A graph containing only the reserved built-in namespace.
    pub fn reserved_only_graph() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("Edm").with_types(vec![
            TypeDescriptor::complex("Edm", "String"),
            TypeDescriptor::complex("Edm", "Stream"),
        ])])
    }
}
