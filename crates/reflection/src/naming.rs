// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Naming queries
//!
//! Namespace and package name formatting driven by [`GeneratorSettings`].
//! These feed template output only; the resolution algorithm never consults
//! them.

use odata_typegen_model::{Namespace, SchemaModel};

use crate::classify::ModelReflection;
use crate::error::{ReflectionError, ReflectionResult};
use crate::settings::GeneratorSettings;

/// The primary namespace: the one named by the settings (case-insensitive),
/// falling back to the first domain namespace.
pub fn primary_namespace<'a>(
    model: &'a SchemaModel,
    settings: &GeneratorSettings,
) -> ReflectionResult<&'a Namespace> {
    if let Some(ns) = model
        .namespaces()
        .iter()
        .find(|ns| ns.name.eq_ignore_ascii_case(&settings.primary_namespace))
    {
        return Ok(ns);
    }

    ModelReflection::new(model)
        .domain_namespaces()?
        .first()
        .copied()
        .ok_or(ReflectionError::EmptyNamespaceSet)
}

/// The generation-facing name of a namespace: the configured override
/// verbatim when present, otherwise `"{prefix}.{namespace}"` lowercased.
pub fn namespace_name(namespace: &Namespace, settings: &GeneratorSettings) -> String {
    match settings.namespace_override.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => format!("{}.{}", settings.namespace_prefix, namespace.name).to_lowercase(),
    }
}

/// The package holding generated fetcher types for the primary namespace.
pub fn package_namespace(
    model: &SchemaModel,
    settings: &GeneratorSettings,
) -> ReflectionResult<String> {
    let namespace = primary_namespace(model, settings)?;
    Ok(format!("{}.fetchers", namespace.name).to_lowercase())
}

/// Name of the entity container, when the model declares a service type.
pub fn entity_container_name(model: &SchemaModel) -> Option<&str> {
    model.entity_container().map(|ty| ty.name.as_str())
}
