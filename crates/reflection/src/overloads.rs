// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Overload expander
//!
//! Flattens a method with its overload set, or a type's full
//! method-plus-overloads set, into one ordered sequence for enumeration by
//! templates.

use odata_typegen_model::{MethodDescriptor, TypeDescriptor};

/// The method followed by its overloads, in declared order.
pub fn with_overloads(method: &MethodDescriptor) -> Vec<&MethodDescriptor> {
    let mut methods = Vec::with_capacity(1 + method.overloads.len());
    methods.push(method);
    methods.extend(method.overloads.iter());
    methods
}

/// Every method declared directly on the type (not inherited) with its
/// overloads, preserving per-method insertion order.
pub fn methods_and_overloads(ty: &TypeDescriptor) -> Vec<&MethodDescriptor> {
    ty.methods.iter().flat_map(with_overloads).collect()
}

/// Whether the method is an action (has side effects).
pub fn is_action(method: &MethodDescriptor) -> bool {
    !method.is_function
}

/// Whether the type declares any methods.
pub fn has_actions(ty: &TypeDescriptor) -> bool {
    !ty.methods.is_empty()
}

/// The methods declared directly on the type.
pub fn actions(ty: &TypeDescriptor) -> &[MethodDescriptor] {
    &ty.methods
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_typegen_model::{ParameterDescriptor, TypeRef};

    fn forward() -> MethodDescriptor {
        MethodDescriptor::action("forward").with_overloads(vec![
            MethodDescriptor::action("forward").with_parameters(vec![ParameterDescriptor::new(
                "comment",
                TypeRef::primitive("String"),
            )]),
            MethodDescriptor::action("forward").with_parameters(vec![
                ParameterDescriptor::new("comment", TypeRef::primitive("String")),
                ParameterDescriptor::new("toRecipients", TypeRef::primitive("String")),
            ]),
        ])
    }

    #[test]
    fn test_with_overloads_order() {
        let method = forward();
        let expanded = with_overloads(&method);
        assert_eq!(expanded.len(), 3);
        assert!(expanded[0].parameters.is_empty());
        assert_eq!(expanded[1].parameters.len(), 1);
        assert_eq!(expanded[2].parameters.len(), 2);
    }

    #[test]
    fn test_methods_and_overloads_length_law() {
        let ty = TypeDescriptor::entity("microsoft.graph", "Event")
            .with_methods(vec![forward(), MethodDescriptor::function("delta")]);

        let expanded = methods_and_overloads(&ty);
        let expected: usize = ty.methods.iter().map(|m| 1 + m.overloads.len()).sum();
        assert_eq!(expanded.len(), expected);

        // Declaration order: forward and its overloads, then delta.
        let names: Vec<_> = expanded.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["forward", "forward", "forward", "delta"]);
    }

    #[test]
    fn test_action_classification() {
        assert!(is_action(&MethodDescriptor::action("forward")));
        assert!(!is_action(&MethodDescriptor::function("delta")));
    }

    #[test]
    fn test_has_actions() {
        let with_methods = TypeDescriptor::entity("microsoft.graph", "Event")
            .with_methods(vec![MethodDescriptor::action("forward")]);
        let without = TypeDescriptor::entity("microsoft.graph", "Calendar");
        assert!(has_actions(&with_methods));
        assert!(!has_actions(&without));
        assert_eq!(actions(&with_methods).len(), 1);
    }
}
