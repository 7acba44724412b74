// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # odata-typegen - Schema Graph Model
//!
//! This crate provides the immutable schema graph consumed by the reflection
//! layer. It defines the descriptor types produced by the metadata parser:
//!
//! - [`SchemaModel`]: the whole graph (namespaces, derived-set links)
//! - [`TypeDescriptor`]: entity, complex, media, enum, and service types
//! - [`PropertyDescriptor`]: structural and navigation properties, singletons
//! - [`MethodDescriptor`]: actions and functions with their overload lists
//!
//! ## Architecture
//!
//! The graph is built once by [`SchemaModel::new`] and never mutated
//! afterwards. Cross-type references are name-based [`TypeRef`]s resolved
//! through the model, so descriptors stay plain owned data. Declaration order
//! is preserved everywhere (`Vec`, never a map), because downstream
//! resolution tie-breaks on "first declared".
//!
//! ## Usage
//!
//! ```rust
//! use odata_typegen_model::{Namespace, PropertyDescriptor, SchemaModel, TypeDescriptor, TypeRef};
//!
//! let model = SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
//!     TypeDescriptor::entity("microsoft.graph", "Event")
//!         .with_properties(vec![PropertyDescriptor::new(
//!             "subject",
//!             TypeRef::primitive("String"),
//!         )]),
//! ])]);
//!
//! let event = model.resolve(&TypeRef::new("microsoft.graph", "Event")).unwrap();
//! assert_eq!(event.qualified_name(), "microsoft.graph.Event");
//! ```

pub mod method;
pub mod property;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use method::{MethodDescriptor, ParameterDescriptor};
pub use property::{NavigationBinding, PropertyDescriptor, SingletonBinding};
pub use schema::{Namespace, SchemaModel};
pub use types::{EDM_NAMESPACE, TypeDescriptor, TypeKind, TypeRef};

/// Access to the free-text documentation field of a descriptor.
///
/// The reflection layer treats documentation as a semicolon-delimited tag
/// channel; this trait is the only seam it reads it through.
pub trait Documented {
    /// The raw documentation string, if any was declared.
    fn documentation(&self) -> Option<&str>;
}
