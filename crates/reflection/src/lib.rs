// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # odata-typegen - Schema Reflection Layer
//!
//! This crate answers the semantic questions a code-generation template
//! engine cannot answer by structural lookup alone: which types are domain
//! types versus built-in primitives, how a reference from one type to
//! another is materialized as an access path, which abstract bases force
//! runtime type discrimination, and how overload sets flatten for
//! enumeration.
//!
//! ## Overview
//!
//! Everything here is a pure query over an immutable
//! [`SchemaModel`](odata_typegen_model::SchemaModel):
//!
//! - **Classification**: [`ModelReflection`] partitions types by kind and
//!   aggregates properties and methods across the model, always excluding
//!   the reserved built-in namespace.
//! - **Relationships**: [`relationship`] labels properties as navigation,
//!   reference, or containment.
//! - **Resolution**: [`ServiceNavigationResolver`] routes a navigable
//!   property to the service-root collection (explicit, or implicit behind
//!   a singleton) a client must traverse — or reports a typed
//!   [`ReflectionError::MalformedReference`] the caller must handle.
//! - **Hierarchy**: [`HierarchyAnalyzer`] answers base/derived queries and
//!   flags abstract bases referenced as property types.
//! - **Annotations**: [`Annotations`] reads the semicolon-delimited tag
//!   channel hidden in documentation fields.
//!
//! ## Usage
//!
//! ```rust
//! use odata_typegen_model::{Namespace, PropertyDescriptor, SchemaModel, TypeDescriptor, TypeRef};
//! use odata_typegen_reflection::{ServiceNavigation, ServiceNavigationResolver};
//!
//! let event = TypeRef::new("microsoft.graph", "Event");
//! let model = SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
//!     TypeDescriptor::entity("microsoft.graph", "Event"),
//!     TypeDescriptor::service("microsoft.graph", "GraphService").with_properties(vec![
//!         PropertyDescriptor::new("events", event.clone()).collection().link(),
//!     ]),
//! ])]);
//!
//! let calendar = TypeDescriptor::entity("microsoft.graph", "Calendar");
//! let attachments = PropertyDescriptor::new("attachments", event).collection().link();
//!
//! let resolved = ServiceNavigationResolver::new(&model)
//!     .resolve(&calendar, &attachments)
//!     .unwrap();
//! assert!(matches!(resolved, ServiceNavigation::Collection(p) if p.name == "events"));
//! ```

pub mod annotation;
pub mod classify;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod naming;
pub mod navigation;
pub mod overloads;
pub mod relationship;
pub mod settings;

// Re-export commonly used types
pub use annotation::Annotations;
pub use classify::{JSON_WRAPPER_TYPE, ModelReflection};
pub use error::{ReflectionError, ReflectionResult};
pub use filter::PropertyFilter;
pub use hierarchy::{HierarchyAnalyzer, TypeContext};
pub use navigation::{ServiceNavigation, ServiceNavigationResolver, implicit_property_name};
pub use settings::GeneratorSettings;
