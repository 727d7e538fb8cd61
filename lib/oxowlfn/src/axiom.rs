//! OWL 2 axioms and annotations.

use crate::entity::{AnnotationProperty, Individual};
use crate::expression::{
    ClassExpression, DataPropertyExpression, DataRange, ObjectPropertyExpression, Spaced,
};
use crate::literal::OwlLiteral;
use oxrdf::{BlankNode, NamedNode};
use std::fmt;

/// What an annotation assertion is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSubject {
    Iri(NamedNode),
    Anonymous(BlankNode),
}

impl fmt::Display for AnnotationSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "{iri}"),
            Self::Anonymous(node) => write!(f, "{node}"),
        }
    }
}

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(NamedNode),
    Anonymous(BlankNode),
    Literal(OwlLiteral),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "{iri}"),
            Self::Anonymous(node) => write!(f, "{node}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// `Annotation(A t)`, attached to an axiom or a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}

/// An OWL 2 axiom, with its operands resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axiom {
    // Class expression axioms
    /// SubClassOf(C1 C2): C1 is a subclass of C2
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },
    EquivalentClasses(Vec<ClassExpression>),
    DisjointClasses(Vec<ClassExpression>),

    // Object property axioms
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),

    // Data property axioms
    SubDataPropertyOf {
        sub_property: DataPropertyExpression,
        super_property: DataPropertyExpression,
    },
    DataPropertyDomain {
        property: DataPropertyExpression,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataPropertyExpression,
        range: DataRange,
    },
    FunctionalDataProperty(DataPropertyExpression),

    // Assertions
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },
    DataPropertyAssertion {
        property: DataPropertyExpression,
        source: Individual,
        target: OwlLiteral,
    },
    DifferentIndividuals(Vec<Individual>),

    // Annotation axioms
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: NamedNode,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: NamedNode,
    },
}

impl Axiom {
    /// The keyword introducing this axiom in the syntax.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubClassOf { .. } => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::SubObjectPropertyOf { .. } => "SubObjectPropertyOf",
            Self::InverseObjectProperties(..) => "InverseObjectProperties",
            Self::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Self::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty(_) => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty(_) => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            Self::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            Self::DataPropertyDomain { .. } => "DataPropertyDomain",
            Self::DataPropertyRange { .. } => "DataPropertyRange",
            Self::FunctionalDataProperty(_) => "FunctionalDataProperty",
            Self::ClassAssertion { .. } => "ClassAssertion",
            Self::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Self::DifferentIndividuals(_) => "DifferentIndividuals",
            Self::AnnotationAssertion { .. } => "AnnotationAssertion",
            Self::AnnotationPropertyDomain { .. } => "AnnotationPropertyDomain",
            Self::AnnotationPropertyRange { .. } => "AnnotationPropertyRange",
        }
    }

    fn fmt_operands(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "{sub_class} {super_class}"),
            Self::EquivalentClasses(classes) | Self::DisjointClasses(classes) => {
                write!(f, "{}", Spaced(classes))
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "{sub_property} {super_property}"),
            Self::InverseObjectProperties(first, second) => write!(f, "{first} {second}"),
            Self::ObjectPropertyDomain { property, domain } => write!(f, "{property} {domain}"),
            Self::ObjectPropertyRange { property, range } => write!(f, "{property} {range}"),
            Self::FunctionalObjectProperty(property)
            | Self::InverseFunctionalObjectProperty(property)
            | Self::ReflexiveObjectProperty(property)
            | Self::IrreflexiveObjectProperty(property)
            | Self::SymmetricObjectProperty(property)
            | Self::AsymmetricObjectProperty(property)
            | Self::TransitiveObjectProperty(property) => write!(f, "{property}"),
            Self::SubDataPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "{sub_property} {super_property}"),
            Self::DataPropertyDomain { property, domain } => write!(f, "{property} {domain}"),
            Self::DataPropertyRange { property, range } => write!(f, "{property} {range}"),
            Self::FunctionalDataProperty(property) => write!(f, "{property}"),
            Self::ClassAssertion { class, individual } => write!(f, "{class} {individual}"),
            Self::ObjectPropertyAssertion {
                property,
                source,
                target,
            }
            | Self::NegativeObjectPropertyAssertion {
                property,
                source,
                target,
            } => write!(f, "{property} {source} {target}"),
            Self::DataPropertyAssertion {
                property,
                source,
                target,
            } => write!(f, "{property} {source} {target}"),
            Self::DifferentIndividuals(individuals) => write!(f, "{}", Spaced(individuals)),
            Self::AnnotationAssertion {
                property,
                subject,
                value,
            } => write!(f, "{property} {subject} {value}"),
            Self::AnnotationPropertyDomain { property, domain } => write!(f, "{property} {domain}"),
            Self::AnnotationPropertyRange { property, range } => write!(f, "{property} {range}"),
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        self.fmt_operands(f)?;
        f.write_str(")")
    }
}

/// An axiom together with the annotations written before its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedAxiom {
    pub axiom: Axiom,
    pub annotations: Vec<Annotation>,
}

impl fmt::Display for AnnotatedAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.axiom.name())?;
        for annotation in &self.annotations {
            write!(f, "{annotation} ")?;
        }
        self.axiom.fmt_operands(f)?;
        f.write_str(")")
    }
}

