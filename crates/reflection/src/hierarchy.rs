// Copyright (c) 2025 odata-typegen contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Hierarchy analyzer
//!
//! Base/derived queries over the three polymorphic contexts (a class, a
//! property's projection type, a method's return type), and detection of
//! abstract bases referenced as property types — the case where generated
//! client code must consult a runtime type discriminator because the
//! statically declared type can never be instantiated.

use odata_typegen_model::{
    MethodDescriptor, PropertyDescriptor, SchemaModel, TypeDescriptor, TypeKind,
};

/// One of the three contexts a base/derived query can start from.
#[derive(Debug, Clone, Copy)]
pub enum TypeContext<'a> {
    /// The class itself.
    Class(&'a TypeDescriptor),
    /// A property; queries apply to its projection type.
    Property(&'a PropertyDescriptor),
    /// A method; queries apply to its return type.
    Method(&'a MethodDescriptor),
}

/// Base/derived queries over the schema graph.
pub struct HierarchyAnalyzer<'a> {
    model: &'a SchemaModel,
}

impl<'a> HierarchyAnalyzer<'a> {
    /// Create an analyzer over the model.
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// Whether the type's base is abstract and referenced as a property type
    /// by some entity type in the same namespace.
    ///
    /// False with no base, an unresolvable base, or a concrete base —
    /// absent evidence is answered permissively, since this only drives a
    /// generation hint.
    pub fn is_base_abstract_and_referenced_as_property_type(&self, ty: &TypeDescriptor) -> bool {
        let Some(base_ref) = &ty.base else {
            return false;
        };
        let Some(base) = self.model.resolve(base_ref) else {
            return false;
        };
        if !base.is_abstract {
            return false;
        }

        self.model
            .namespace(&ty.namespace)
            .is_some_and(|ns| {
                ns.types
                    .iter()
                    .filter(|t| matches!(t.kind, TypeKind::Entity | TypeKind::MediaEntity))
                    .any(|entity| {
                        entity
                            .properties
                            .iter()
                            .any(|p| p.projection.name == base.name)
                    })
            })
    }

    /// The resolved base class of the context's class, or `None` when there
    /// is no base or the base is abstract. Abstract bases are hidden here
    /// because clients can never instantiate them.
    pub fn base_class(&self, context: TypeContext<'a>) -> Option<&'a TypeDescriptor> {
        let class = self.context_class(context)?;
        let base = self.model.resolve(class.base.as_ref()?)?;
        (!base.is_abstract).then_some(base)
    }

    /// Whether the context's class has at least one derived type.
    pub fn has_derived(&self, context: TypeContext<'a>) -> bool {
        self.context_class(context)
            .is_some_and(|class| !class.derived.is_empty())
    }

    /// The class a context denotes: the class itself, a property's
    /// projection type, or a method's return type.
    fn context_class(&self, context: TypeContext<'a>) -> Option<&'a TypeDescriptor> {
        match context {
            TypeContext::Class(ty) => Some(ty),
            TypeContext::Property(property) => self.model.resolve(&property.projection),
            TypeContext::Method(method) => self.model.resolve(method.return_type.as_ref()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_typegen_model::{Namespace, TypeRef};

    fn graph(name: &str) -> TypeRef {
        TypeRef::new("microsoft.graph", name)
    }

    fn sample_model() -> SchemaModel {
        SchemaModel::new(vec![Namespace::new("microsoft.graph").with_types(vec![
            TypeDescriptor::entity("microsoft.graph", "Attachment").with_abstract(),
            TypeDescriptor::entity("microsoft.graph", "FileAttachment")
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

    #[test]
    fn test_abstract_base_referenced_as_property_type() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);
        let file_attachment = model.resolve(&graph("FileAttachment")).unwrap();
        assert!(analyzer.is_base_abstract_and_referenced_as_property_type(file_attachment));
    }

    #[test]
    fn test_concrete_base_is_never_flagged() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);
        // Shape is referenced as a property type, but it is not abstract.
        let circle = model.resolve(&graph("Circle")).unwrap();
        assert!(!analyzer.is_base_abstract_and_referenced_as_property_type(circle));
    }

    #[test]
    fn test_no_base_answers_false() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);
        let attachment = model.resolve(&graph("Attachment")).unwrap();
        assert!(!analyzer.is_base_abstract_and_referenced_as_property_type(attachment));
    }

    #[test]
    fn test_base_class_hides_abstract_bases() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);

        let file_attachment = model.resolve(&graph("FileAttachment")).unwrap();
        assert!(analyzer.base_class(TypeContext::Class(file_attachment)).is_none());

        let circle = model.resolve(&graph("Circle")).unwrap();
        let base = analyzer.base_class(TypeContext::Class(circle)).unwrap();
        assert_eq!(base.name, "Shape");
    }

    #[test]
    fn test_base_class_through_property_projection() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);
        let drawing = model.resolve(&graph("Drawing")).unwrap();
        let shape_prop = drawing.property("shape").unwrap();
        // Shape has no base at all.
        assert!(analyzer.base_class(TypeContext::Property(shape_prop)).is_none());
        assert!(analyzer.has_derived(TypeContext::Property(shape_prop)));
    }

    #[test]
    fn test_has_derived_across_contexts() {
        let model = sample_model();
        let analyzer = HierarchyAnalyzer::new(&model);

        let shape = model.resolve(&graph("Shape")).unwrap();
        assert!(analyzer.has_derived(TypeContext::Class(shape)));

        let circle = model.resolve(&graph("Circle")).unwrap();
        assert!(!analyzer.has_derived(TypeContext::Class(circle)));

        let delta = odata_typegen_model::MethodDescriptor::function("delta")
            .returning(graph("Attachment"));
        assert!(analyzer.has_derived(TypeContext::Method(&delta)));

        let noop = odata_typegen_model::MethodDescriptor::action("noop");
        assert!(!analyzer.has_derived(TypeContext::Method(&noop)));
    }
}
