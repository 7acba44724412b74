// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Annotation parser
//!
//! Free-text documentation fields double as a semicolon-delimited list of
//! opaque generation tags. [`Annotations`] is the one type through which
//! that convention is read, so the channel can be replaced by a structured
//! mechanism without touching callers.
//!
//! Literal semicolons inside a tag are not escapable. Known limitation of
//! the convention, not silently worked around.

use odata_typegen_model::Documented;

/// View over the documentation string of a descriptor, split into tags.
#[derive(Debug, Clone, Copy)]
pub struct Annotations<'a> {
    documentation: Option<&'a str>,
}

impl<'a> Annotations<'a> {
    /// Read the annotations of any documented descriptor.
    pub fn of<D: Documented + ?Sized>(subject: &'a D) -> Self {
        Self {
            documentation: subject.documentation(),
        }
    }

    /// Wrap a raw documentation string.
    pub fn new(documentation: Option<&'a str>) -> Self {
        Self { documentation }
    }

    /// The semicolon-delimited segments, or `None` when no documentation is
    /// present. An empty documentation string yields one empty segment, not
    /// `None`.
    pub fn segments(&self) -> Option<Vec<&'a str>> {
        self.documentation.map(|doc| doc.split(';').collect())
    }

    /// Whether some segment equals the tag exactly.
    pub fn contains(&self, tag: &str) -> bool {
        self.segments()
            .is_some_and(|segments| segments.iter().any(|segment| *segment == tag))
    }

    /// Whether some segment starts with the prefix.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.segments()
            .is_some_and(|segments| segments.iter().any(|segment| segment.starts_with(prefix)))
    }
}
