// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for reflection queries
//!
//! This module defines the error types used throughout the reflection layer.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for reflection queries
pub type ReflectionResult<T> = Result<T, ReflectionError>;

/// Errors that can occur during reflection queries
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum ReflectionError {
    /// A navigable property cannot be routed to any service-root collection.
    ///
    /// The schema declares a reference the generator cannot reach: the
    /// property is not self-contained and no explicit or implicit entity set
    /// exposes its target type. This is a defect in the metadata, not in the
    /// resolver; the caller decides whether to abort generation or skip the
    /// property.
    #[error(
        "Navigation property '{property}' on type '{owning_type}' is not self-contained and no explicit or implicit entity set exposes its target type"
    )]
    MalformedReference {
        /// Name of the offending property.
        property: String,
        /// Qualified name of the property's owning type.
        owning_type: String,
    },

    /// Filtering out the built-in namespace left no domain namespace.
    #[error("Schema model declares no namespace outside the reserved built-in namespace")]
    EmptyNamespaceSet,
}
