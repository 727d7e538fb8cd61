//! Where the parser puts what it reads.
//!
//! The grammar only talks to a store through the traits of this module: [`Declarations`] to look
//! up entities referenced by axioms, [`DeclarationStore`] for `Declaration(...)` statements and
//! [`AxiomStore`] for everything else. [`MemoryStore`] is the default implementation.

mod memory;

pub use self::memory::{DeclarationPolicy, MemoryStore, PropertyCharacteristics};
use crate::axiom::{Annotation, AnnotationSubject, AnnotationValue, Axiom};
use crate::entity::{
    AnnotationProperty, DataProperty, Datatype, Declaration, DeclarationKind, Individual,
    NamedIndividual, ObjectProperty, OwlClass,
};
use crate::expression::{
    ClassExpression, DataPropertyExpression, DataRange, ObjectPropertyExpression,
};
use crate::literal::OwlLiteral;
use oxrdf::NamedNode;

/// Lookup of the entities declared so far.
///
/// A lookup takes `&mut self`: a store may create the declaration on first use.
/// `None` means the identifier must be reported as unknown.
pub trait Declarations {
    fn declaration(&mut self, kind: DeclarationKind, iri: &NamedNode) -> Option<Declaration>;

    fn annotation_property(&mut self, iri: &NamedNode) -> Option<AnnotationProperty> {
        match self.declaration(DeclarationKind::AnnotationProperty, iri)? {
            Declaration::AnnotationProperty(e) => Some(e),
            _ => None,
        }
    }

    fn class(&mut self, iri: &NamedNode) -> Option<OwlClass> {
        match self.declaration(DeclarationKind::Class, iri)? {
            Declaration::Class(e) => Some(e),
            _ => None,
        }
    }

    fn data_property(&mut self, iri: &NamedNode) -> Option<DataProperty> {
        match self.declaration(DeclarationKind::DataProperty, iri)? {
            Declaration::DataProperty(e) => Some(e),
            _ => None,
        }
    }

    fn datatype(&mut self, iri: &NamedNode) -> Option<Datatype> {
        match self.declaration(DeclarationKind::Datatype, iri)? {
            Declaration::Datatype(e) => Some(e),
            _ => None,
        }
    }

    fn named_individual(&mut self, iri: &NamedNode) -> Option<NamedIndividual> {
        match self.declaration(DeclarationKind::NamedIndividual, iri)? {
            Declaration::NamedIndividual(e) => Some(e),
            _ => None,
        }
    }

    fn object_property(&mut self, iri: &NamedNode) -> Option<ObjectProperty> {
        match self.declaration(DeclarationKind::ObjectProperty, iri)? {
            Declaration::ObjectProperty(e) => Some(e),
            _ => None,
        }
    }
}

/// Receives `Declaration(...)` statements.
pub trait DeclarationStore {
    /// Records an explicit declaration.
    ///
    /// Returns `false` if the entity has already been explicitly declared with the same kind.
    fn store_declaration(&mut self, declaration: Declaration, annotations: Vec<Annotation>) -> bool;
}

/// Receives axioms, one method per axiom kind.
///
/// Only [`AxiomStore::store_axiom`] is required: the other methods build the matching [`Axiom`]
/// and hand it over to it. Backends with their own layout override the methods they care about.
pub trait AxiomStore {
    fn store_axiom(&mut self, axiom: Axiom, annotations: Vec<Annotation>);

    fn store_sub_class_of(
        &mut self,
        sub_class: ClassExpression,
        super_class: ClassExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::SubClassOf {
                sub_class,
                super_class,
            },
            annotations,
        );
    }

    fn store_equivalent_classes(
        &mut self,
        classes: Vec<ClassExpression>,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::EquivalentClasses(classes), annotations);
    }

    fn store_disjoint_classes(
        &mut self,
        classes: Vec<ClassExpression>,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::DisjointClasses(classes), annotations);
    }

    fn store_sub_object_property_of(
        &mut self,
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            },
            annotations,
        );
    }

    fn store_inverse_object_properties(
        &mut self,
        first: ObjectPropertyExpression,
        second: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::InverseObjectProperties(first, second), annotations);
    }

    fn store_object_property_domain(
        &mut self,
        property: ObjectPropertyExpression,
        domain: ClassExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::ObjectPropertyDomain { property, domain }, annotations);
    }

    fn store_object_property_range(
        &mut self,
        property: ObjectPropertyExpression,
        range: ClassExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::ObjectPropertyRange { property, range }, annotations);
    }

    fn store_functional_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::FunctionalObjectProperty(property), annotations);
    }

    fn store_inverse_functional_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::InverseFunctionalObjectProperty(property), annotations);
    }

    fn store_reflexive_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::ReflexiveObjectProperty(property), annotations);
    }

    fn store_irreflexive_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::IrreflexiveObjectProperty(property), annotations);
    }

    fn store_symmetric_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::SymmetricObjectProperty(property), annotations);
    }

    fn store_asymmetric_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::AsymmetricObjectProperty(property), annotations);
    }

    fn store_transitive_object_property(
        &mut self,
        property: ObjectPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::TransitiveObjectProperty(property), annotations);
    }

    fn store_sub_data_property_of(
        &mut self,
        sub_property: DataPropertyExpression,
        super_property: DataPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::SubDataPropertyOf {
                sub_property,
                super_property,
            },
            annotations,
        );
    }

    fn store_data_property_domain(
        &mut self,
        property: DataPropertyExpression,
        domain: ClassExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::DataPropertyDomain { property, domain }, annotations);
    }

    fn store_data_property_range(
        &mut self,
        property: DataPropertyExpression,
        range: DataRange,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::DataPropertyRange { property, range }, annotations);
    }

    fn store_functional_data_property(
        &mut self,
        property: DataPropertyExpression,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::FunctionalDataProperty(property), annotations);
    }

    fn store_class_assertion(
        &mut self,
        class: ClassExpression,
        individual: Individual,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::ClassAssertion { class, individual }, annotations);
    }

    fn store_object_property_assertion(
        &mut self,
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            },
            annotations,
        );
    }

    fn store_negative_object_property_assertion(
        &mut self,
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::NegativeObjectPropertyAssertion {
                property,
                source,
                target,
            },
            annotations,
        );
    }

    fn store_data_property_assertion(
        &mut self,
        property: DataPropertyExpression,
        source: Individual,
        target: OwlLiteral,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::DataPropertyAssertion {
                property,
                source,
                target,
            },
            annotations,
        );
    }

    fn store_different_individuals(
        &mut self,
        individuals: Vec<Individual>,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::DifferentIndividuals(individuals), annotations);
    }

    fn store_annotation_assertion(
        &mut self,
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            },
            annotations,
        );
    }

    fn store_annotation_property_domain(
        &mut self,
        property: AnnotationProperty,
        domain: NamedNode,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(
            Axiom::AnnotationPropertyDomain { property, domain },
            annotations,
        );
    }

    fn store_annotation_property_range(
        &mut self,
        property: AnnotationProperty,
        range: NamedNode,
        annotations: Vec<Annotation>,
    ) {
        self.store_axiom(Axiom::AnnotationPropertyRange { property, range }, annotations);
    }
}

/// Everything the parser needs from a store.
pub trait OntologyStore: Declarations + DeclarationStore + AxiomStore {}

impl<S: Declarations + DeclarationStore + AxiomStore + ?Sized> OntologyStore for S {}
