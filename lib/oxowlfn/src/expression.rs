//! OWL 2 class expressions, property expressions and data ranges.

use crate::entity::{DataProperty, Datatype, Individual, ObjectProperty, OwlClass};
use crate::literal::OwlLiteral;
use crate::vocab::{facets, owl};
use oxrdf::{NamedNode, NamedNodeRef};
use std::fmt;

/// An OWL 2 class expression.
///
/// Every cardinality restriction comes in two variants: the plain one `(n P)` and the qualified one
/// `(n P C)` restricting the related values to a class expression or a data range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// `owl:Thing`
    Thing,
    /// `owl:Nothing`
    Nothing,
    /// A declared class
    Class(OwlClass),

    /// ObjectIntersectionOf(C1 ... Cn) with n >= 2
    ObjectIntersectionOf(Vec<ClassExpression>),
    /// ObjectUnionOf(C1 ... Cn) with n >= 2
    ObjectUnionOf(Vec<ClassExpression>),
    /// ObjectComplementOf(C)
    ObjectComplementOf(Box<ClassExpression>),
    /// ObjectOneOf(a1 ... an)
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P C)
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    /// ObjectAllValuesFrom(P C)
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    /// ObjectHasValue(P a)
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },
    /// ObjectHasSelf(P)
    ObjectHasSelf(ObjectPropertyExpression),

    /// ObjectMinCardinality(n P)
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
    },
    /// ObjectMinCardinality(n P C)
    ObjectMinQualifiedCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    /// ObjectMaxCardinality(n P)
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
    },
    /// ObjectMaxCardinality(n P C)
    ObjectMaxQualifiedCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    /// ObjectExactCardinality(n P)
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
    },
    /// ObjectExactCardinality(n P C)
    ObjectExactQualifiedCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// DataSomeValuesFrom(R D)
    DataSomeValuesFrom {
        property: DataPropertyExpression,
        range: DataRange,
    },
    /// DataAllValuesFrom(R D)
    DataAllValuesFrom {
        property: DataPropertyExpression,
        range: DataRange,
    },
    /// DataHasValue(R v)
    DataHasValue {
        property: DataPropertyExpression,
        value: OwlLiteral,
    },
    /// DataMinCardinality(n R)
    DataMinCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
    },
    /// DataMinCardinality(n R D)
    DataMinQualifiedCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
        range: DataRange,
    },
    /// DataMaxCardinality(n R)
    DataMaxCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
    },
    /// DataMaxCardinality(n R D)
    DataMaxQualifiedCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
        range: DataRange,
    },
    /// DataExactCardinality(n R)
    DataExactCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
    },
    /// DataExactCardinality(n R D)
    DataExactQualifiedCardinality {
        cardinality: u32,
        property: DataPropertyExpression,
        range: DataRange,
    },
}

impl ClassExpression {
    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true for `owl:Thing`, `owl:Nothing` and declared classes.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Thing | Self::Nothing | Self::Class(_))
    }
}

impl From<OwlClass> for ClassExpression {
    #[inline]
    fn from(class: OwlClass) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thing => write!(f, "{}", owl::THING),
            Self::Nothing => write!(f, "{}", owl::NOTHING),
            Self::Class(class) => write!(f, "{class}"),
            Self::ObjectIntersectionOf(operands) => {
                write!(f, "ObjectIntersectionOf({})", Spaced(operands))
            }
            Self::ObjectUnionOf(operands) => write!(f, "ObjectUnionOf({})", Spaced(operands)),
            Self::ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::ObjectOneOf(individuals) => write!(f, "ObjectOneOf({})", Spaced(individuals)),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
            } => write!(f, "ObjectMinCardinality({cardinality} {property})"),
            Self::ObjectMinQualifiedCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMinCardinality({cardinality} {property} {filler})"),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
            } => write!(f, "ObjectMaxCardinality({cardinality} {property})"),
            Self::ObjectMaxQualifiedCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectMaxCardinality({cardinality} {property} {filler})"),
            Self::ObjectExactCardinality {
                cardinality,
                property,
            } => write!(f, "ObjectExactCardinality({cardinality} {property})"),
            Self::ObjectExactQualifiedCardinality {
                cardinality,
                property,
                filler,
            } => write!(f, "ObjectExactCardinality({cardinality} {property} {filler})"),
            Self::DataSomeValuesFrom { property, range } => {
                write!(f, "DataSomeValuesFrom({property} {range})")
            }
            Self::DataAllValuesFrom { property, range } => {
                write!(f, "DataAllValuesFrom({property} {range})")
            }
            Self::DataHasValue { property, value } => write!(f, "DataHasValue({property} {value})"),
            Self::DataMinCardinality {
                cardinality,
                property,
            } => write!(f, "DataMinCardinality({cardinality} {property})"),
            Self::DataMinQualifiedCardinality {
                cardinality,
                property,
                range,
            } => write!(f, "DataMinCardinality({cardinality} {property} {range})"),
            Self::DataMaxCardinality {
                cardinality,
                property,
            } => write!(f, "DataMaxCardinality({cardinality} {property})"),
            Self::DataMaxQualifiedCardinality {
                cardinality,
                property,
                range,
            } => write!(f, "DataMaxCardinality({cardinality} {property} {range})"),
            Self::DataExactCardinality {
                cardinality,
                property,
            } => write!(f, "DataExactCardinality({cardinality} {property})"),
            Self::DataExactQualifiedCardinality {
                cardinality,
                property,
                range,
            } => write!(f, "DataExactCardinality({cardinality} {property} {range})"),
        }
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// `owl:topObjectProperty`
    TopObjectProperty,
    /// `owl:bottomObjectProperty`
    BottomObjectProperty,
    ObjectProperty(ObjectProperty),
    /// ObjectInverseOf(P)
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Returns the named property, also for an inverse.
    pub fn named_property(&self) -> Option<&ObjectProperty> {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => Some(p),
            Self::TopObjectProperty | Self::BottomObjectProperty => None,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    #[inline]
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopObjectProperty => write!(f, "{}", owl::TOP_OBJECT_PROPERTY),
            Self::BottomObjectProperty => write!(f, "{}", owl::BOTTOM_OBJECT_PROPERTY),
            Self::ObjectProperty(property) => write!(f, "{property}"),
            Self::ObjectInverseOf(property) => write!(f, "ObjectInverseOf({property})"),
        }
    }
}

/// An OWL 2 data property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataPropertyExpression {
    /// `owl:topDataProperty`
    TopDataProperty,
    /// `owl:bottomDataProperty`
    BottomDataProperty,
    DataProperty(DataProperty),
}

impl DataPropertyExpression {
    pub fn named_property(&self) -> Option<&DataProperty> {
        match self {
            Self::DataProperty(p) => Some(p),
            Self::TopDataProperty | Self::BottomDataProperty => None,
        }
    }
}

impl From<DataProperty> for DataPropertyExpression {
    #[inline]
    fn from(property: DataProperty) -> Self {
        Self::DataProperty(property)
    }
}

impl fmt::Display for DataPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopDataProperty => write!(f, "{}", owl::TOP_DATA_PROPERTY),
            Self::BottomDataProperty => write!(f, "{}", owl::BOTTOM_DATA_PROPERTY),
            Self::DataProperty(property) => write!(f, "{property}"),
        }
    }
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRange {
    /// A datatype built into OWL, e.g. `xsd:integer`
    BuiltinDatatype(NamedNode),
    /// A declared datatype
    Datatype(Datatype),
    /// DatatypeRestriction(DN f1 v1 ... fn vn)
    DatatypeRestriction {
        datatype: NamedNode,
        restrictions: Vec<FacetRestriction>,
    },
    /// DataIntersectionOf(D1 ... Dn) with n >= 2
    DataIntersectionOf(Vec<DataRange>),
    /// DataUnionOf(D1 ... Dn) with n >= 2
    DataUnionOf(Vec<DataRange>),
    /// DataComplementOf(D)
    DataComplementOf(Box<DataRange>),
    /// DataOneOf(v1 ... vn)
    DataOneOf(Vec<OwlLiteral>),
}

impl DataRange {
    /// Returns the IRI of the datatype if this is a named one.
    pub fn datatype_iri(&self) -> Option<NamedNodeRef<'_>> {
        match self {
            Self::BuiltinDatatype(iri) => Some(iri.as_ref()),
            Self::Datatype(datatype) => Some(datatype.iri().as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltinDatatype(iri) => write!(f, "{iri}"),
            Self::Datatype(datatype) => write!(f, "{datatype}"),
            Self::DatatypeRestriction {
                datatype,
                restrictions,
            } => write!(f, "DatatypeRestriction({datatype} {})", Spaced(restrictions)),
            Self::DataIntersectionOf(operands) => {
                write!(f, "DataIntersectionOf({})", Spaced(operands))
            }
            Self::DataUnionOf(operands) => write!(f, "DataUnionOf({})", Spaced(operands)),
            Self::DataComplementOf(operand) => write!(f, "DataComplementOf({operand})"),
            Self::DataOneOf(values) => write!(f, "DataOneOf({})", Spaced(values)),
        }
    }
}

/// A constraining facet usable in a datatype restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
}

impl Facet {
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::MinInclusive => facets::MIN_INCLUSIVE,
            Self::MaxInclusive => facets::MAX_INCLUSIVE,
            Self::MinExclusive => facets::MIN_EXCLUSIVE,
            Self::MaxExclusive => facets::MAX_EXCLUSIVE,
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        [
            Self::MinInclusive,
            Self::MaxInclusive,
            Self::MinExclusive,
            Self::MaxExclusive,
        ]
        .into_iter()
        .find(|facet| facet.iri().as_str() == iri)
    }
}

impl fmt::Display for Facet {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iri())
    }
}

/// A `(facet, literal)` pair of a datatype restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: OwlLiteral,
}

impl fmt::Display for FacetRestriction {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.facet, self.value)
    }
}

/// Writes the items separated by a single space.
pub(crate) struct Spaced<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_iri() {
        assert_eq!(
            Facet::from_iri("http://www.w3.org/2001/XMLSchema#maxExclusive"),
            Some(Facet::MaxExclusive)
        );
        assert_eq!(
            Facet::from_iri("http://www.w3.org/2001/XMLSchema#length"),
            None
        );
        assert_eq!(
            Facet::MinInclusive.to_string(),
            "<http://www.w3.org/2001/XMLSchema#minInclusive>"
        );
    }

    #[test]
    fn test_named_property() {
        let property =
            ObjectProperty::new(NamedNode::new_unchecked("http://test.de/pizza#hasBase"));
        let inverse = ObjectPropertyExpression::ObjectInverseOf(property.clone());
        assert_eq!(inverse.named_property(), Some(&property));
        assert_eq!(
            ObjectPropertyExpression::TopObjectProperty.named_property(),
            None
        );
    }
}
