// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Method descriptors
//!
//! Actions and functions declared on a type. A method owns its overload
//! list; overloads do not own each other.

use serde::{Deserialize, Serialize};

use crate::Documented;
use crate::types::TypeRef;

/// A parameter of an action or function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub parameter_type: TypeRef,
}

impl ParameterDescriptor {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, parameter_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}

/// A method declared on a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// True for functions (side-effect free); false for actions.
    pub is_function: bool,
    /// Return type, if the method returns a value.
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Free-text documentation (semicolon-delimited annotation channel).
    #[serde(default)]
    pub documentation: Option<String>,
    /// Overloads owned by this method, in declaration order.
    #[serde(default)]
    pub overloads: Vec<MethodDescriptor>,
}

impl MethodDescriptor {
    /// Create an action (a method with side effects).
    pub fn action(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_function: false,
            return_type: None,
            parameters: Vec::new(),
            documentation: None,
            overloads: Vec::new(),
        }
    }

    /// Create a function (a side-effect-free method).
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            is_function: true,
            ..Self::action(name)
        }
    }

    /// Builder method: set the return type.
    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Builder method: set the parameters.
    pub fn with_parameters(mut self, parameters: Vec<ParameterDescriptor>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Builder method: set the documentation string.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Builder method: set the overload list.
    pub fn with_overloads(mut self, overloads: Vec<MethodDescriptor>) -> Self {
        self.overloads = overloads;
        self
    }
}

impl Documented for MethodDescriptor {
    fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}
