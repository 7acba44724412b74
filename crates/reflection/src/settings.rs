// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Generator settings
//!
//! The small read-only configuration surface consumed by the naming queries.
//! Settings are passed into each query explicitly; there is no process-wide
//! configuration state in this layer.

use serde::{Deserialize, Serialize};

/// Naming configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Name of the primary namespace (matched case-insensitively).
    pub primary_namespace: String,
    /// When present, replaces the formatted namespace name verbatim.
    #[serde(default)]
    pub namespace_override: Option<String>,
    /// Prefix prepended when formatting namespace names.
    #[serde(default)]
    pub namespace_prefix: String,
}

impl GeneratorSettings {
    /// Create settings for the given primary namespace.
    pub fn new(primary_namespace: impl Into<String>) -> Self {
        Self {
            primary_namespace: primary_namespace.into(),
            namespace_override: None,
            namespace_prefix: String::new(),
        }
    }

    /// Builder method: set the namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = prefix.into();
        self
    }

    /// Builder method: set the namespace override.
    pub fn with_override(mut self, namespace_override: impl Into<String>) -> Self {
        self.namespace_override = Some(namespace_override.into());
        self
    }
}
