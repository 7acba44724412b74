// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # odata-typegen - Testing Utilities
//!
//! Canonical schema graph fixtures shared by the reflection crate's unit
//! and integration tests.

pub mod fixtures;

pub use fixtures::GraphFixtures;
