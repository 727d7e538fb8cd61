//! OWL 2 entities: the six declarable kinds and individuals.

use oxrdf::{BlankNode, NamedNode, NamedNodeRef};
use std::fmt;

macro_rules! entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NamedNode);

        impl $name {
            #[inline]
            pub fn new(iri: impl Into<NamedNode>) -> Self {
                Self(iri.into())
            }

            /// Returns the IRI of this entity.
            #[inline]
            pub fn iri(&self) -> &NamedNode {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<NamedNode> for $name {
            #[inline]
            fn from(iri: NamedNode) -> Self {
                Self(iri)
            }
        }

        impl From<NamedNodeRef<'_>> for $name {
            #[inline]
            fn from(iri: NamedNodeRef<'_>) -> Self {
                Self(iri.into_owned())
            }
        }

        impl From<$name> for NamedNode {
            #[inline]
            fn from(entity: $name) -> Self {
                entity.0
            }
        }

        impl AsRef<NamedNode> for $name {
            #[inline]
            fn as_ref(&self) -> &NamedNode {
                &self.0
            }
        }
    };
}

entity!(
    /// An OWL class (`owl:Class`).
    ///
    /// `owl:Thing` and `owl:Nothing` are not represented with this type but with dedicated
    /// [`ClassExpression`](crate::ClassExpression) variants.
    OwlClass
);
entity!(
    /// An OWL object property, relating individuals to individuals.
    ObjectProperty
);
entity!(
    /// An OWL data property, relating individuals to literals.
    DataProperty
);
entity!(
    /// An OWL annotation property, e.g. `rdfs:label`.
    AnnotationProperty
);
entity!(
    /// A datatype declared by the ontology.
    ///
    /// The datatypes built into OWL (`xsd:integer`...) do not need a declaration.
    Datatype
);
entity!(
    /// An individual with a global name.
    NamedIndividual
);

/// An individual: either named or anonymous (`_:label` in the syntax).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(BlankNode),
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(i) => write!(f, "{i}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedIndividual> for Individual {
    #[inline]
    fn from(individual: NamedIndividual) -> Self {
        Self::Named(individual)
    }
}

impl From<BlankNode> for Individual {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

/// The kinds of entities a `Declaration(...)` may introduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    AnnotationProperty,
    Class,
    DataProperty,
    Datatype,
    NamedIndividual,
    ObjectProperty,
}

impl DeclarationKind {
    pub const ALL: [Self; 6] = [
        Self::AnnotationProperty,
        Self::Class,
        Self::DataProperty,
        Self::Datatype,
        Self::NamedIndividual,
        Self::ObjectProperty,
    ];

    /// The keyword used for this kind in the syntax.
    pub fn name(self) -> &'static str {
        match self {
            Self::AnnotationProperty => "AnnotationProperty",
            Self::Class => "Class",
            Self::DataProperty => "DataProperty",
            Self::Datatype => "Datatype",
            Self::NamedIndividual => "NamedIndividual",
            Self::ObjectProperty => "ObjectProperty",
        }
    }
}

impl fmt::Display for DeclarationKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    AnnotationProperty(AnnotationProperty),
    Class(OwlClass),
    DataProperty(DataProperty),
    Datatype(Datatype),
    NamedIndividual(NamedIndividual),
    ObjectProperty(ObjectProperty),
}

impl Declaration {
    pub fn new(kind: DeclarationKind, iri: NamedNode) -> Self {
        match kind {
            DeclarationKind::AnnotationProperty => Self::AnnotationProperty(iri.into()),
            DeclarationKind::Class => Self::Class(iri.into()),
            DeclarationKind::DataProperty => Self::DataProperty(iri.into()),
            DeclarationKind::Datatype => Self::Datatype(iri.into()),
            DeclarationKind::NamedIndividual => Self::NamedIndividual(iri.into()),
            DeclarationKind::ObjectProperty => Self::ObjectProperty(iri.into()),
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::AnnotationProperty(_) => DeclarationKind::AnnotationProperty,
            Self::Class(_) => DeclarationKind::Class,
            Self::DataProperty(_) => DeclarationKind::DataProperty,
            Self::Datatype(_) => DeclarationKind::Datatype,
            Self::NamedIndividual(_) => DeclarationKind::NamedIndividual,
            Self::ObjectProperty(_) => DeclarationKind::ObjectProperty,
        }
    }

    pub fn iri(&self) -> &NamedNode {
        match self {
            Self::AnnotationProperty(e) => e.iri(),
            Self::Class(e) => e.iri(),
            Self::DataProperty(e) => e.iri(),
            Self::Datatype(e) => e.iri(),
            Self::NamedIndividual(e) => e.iri(),
            Self::ObjectProperty(e) => e.iri(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Declaration({}({}))", self.kind(), self.iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_display() {
        let class = OwlClass::new(NamedNode::new_unchecked("http://example.com/pizza#Pizza"));
        assert_eq!(class.to_string(), "<http://example.com/pizza#Pizza>");
        assert_eq!(class.iri().as_str(), "http://example.com/pizza#Pizza");
    }

    #[test]
    fn test_declaration() {
        let declaration = Declaration::new(
            DeclarationKind::ObjectProperty,
            NamedNode::new_unchecked("http://example.com/pizza#hasTopping"),
        );
        assert_eq!(declaration.kind(), DeclarationKind::ObjectProperty);
        assert!(matches!(declaration, Declaration::ObjectProperty(_)));
        assert_eq!(
            declaration.to_string(),
            "Declaration(ObjectProperty(<http://example.com/pizza#hasTopping>))"
        );
    }

    #[test]
    fn test_individual_display() {
        let individual = Individual::from(BlankNode::new_unchecked("b1"));
        assert_eq!(individual.to_string(), "_:b1");
    }
}
