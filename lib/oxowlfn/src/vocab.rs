//! Provides ready to use [`NamedNodeRef`]s for the OWL 2 built-in vocabulary and the table of
//! datatypes known without declaration.

use crate::literal::LiteralKind;
use oxrdf::NamedNodeRef;
use oxrdf::vocab::{rdf, rdfs, xsd};

pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-syntax/) built-in entities.
    use oxrdf::NamedNodeRef;

    /// The class of all individuals.
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    /// The empty class.
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
    pub const TOP_OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topObjectProperty");
    pub const BOTTOM_OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#bottomObjectProperty");
    pub const TOP_DATA_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topDataProperty");
    pub const BOTTOM_DATA_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#bottomDataProperty");
    pub const REAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#real");
    pub const RATIONAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#rational");
    pub const DEPRECATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#deprecated");
    pub const VERSION_INFO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionInfo");
    pub const PRIOR_VERSION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#priorVersion");
    pub const BACKWARD_COMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#backwardCompatibleWith");
    pub const INCOMPATIBLE_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#incompatibleWith");
}

pub mod rdf_extra {
    //! Datatypes of the RDF namespace not provided by [`oxrdf::vocab::rdf`].
    use oxrdf::NamedNodeRef;

    pub const PLAIN_LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral");
}

pub mod facets {
    //! The XSD constraining facets allowed in `DatatypeRestriction`.
    use oxrdf::NamedNodeRef;

    pub const MIN_INCLUSIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#minInclusive");
    pub const MAX_INCLUSIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#maxInclusive");
    pub const MIN_EXCLUSIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#minExclusive");
    pub const MAX_EXCLUSIVE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#maxExclusive");
}

/// The datatypes usable without declaration, with the lexical kind their values must have.
pub const BUILTIN_DATATYPES: [(NamedNodeRef<'static>, LiteralKind); 33] = [
    (owl::RATIONAL, LiteralKind::Float),
    (owl::REAL, LiteralKind::Float),
    (rdf_extra::PLAIN_LITERAL, LiteralKind::String),
    (rdf::XML_LITERAL, LiteralKind::String),
    (rdfs::LITERAL, LiteralKind::String),
    (xsd::ANY_URI, LiteralKind::String),
    (xsd::BASE_64_BINARY, LiteralKind::String),
    (xsd::BOOLEAN, LiteralKind::String),
    (xsd::BYTE, LiteralKind::Integer),
    (xsd::DATE_TIME, LiteralKind::String),
    (xsd::DATE_TIME_STAMP, LiteralKind::String),
    (xsd::DECIMAL, LiteralKind::Float),
    (xsd::DOUBLE, LiteralKind::Float),
    (xsd::FLOAT, LiteralKind::Float),
    (xsd::HEX_BINARY, LiteralKind::String),
    (xsd::INT, LiteralKind::Integer),
    (xsd::INTEGER, LiteralKind::Integer),
    (xsd::LONG, LiteralKind::Integer),
    (xsd::NAME, LiteralKind::String),
    (xsd::NEGATIVE_INTEGER, LiteralKind::Integer),
    (xsd::NMTOKEN, LiteralKind::String),
    (xsd::NON_NEGATIVE_INTEGER, LiteralKind::Integer),
    (xsd::NON_POSITIVE_INTEGER, LiteralKind::Integer),
    (xsd::NORMALIZED_STRING, LiteralKind::String),
    (xsd::POSITIVE_INTEGER, LiteralKind::Integer),
    (xsd::SHORT, LiteralKind::Integer),
    (xsd::STRING, LiteralKind::String),
    (xsd::TOKEN, LiteralKind::String),
    (xsd::UNSIGNED_BYTE, LiteralKind::Integer),
    (xsd::UNSIGNED_INT, LiteralKind::Integer),
    (xsd::UNSIGNED_LONG, LiteralKind::Integer),
    (xsd::UNSIGNED_SHORT, LiteralKind::Integer),
    (xsd::LANGUAGE, LiteralKind::String),
];

/// Annotation properties usable without declaration.
pub const BUILTIN_ANNOTATION_PROPERTIES: [NamedNodeRef<'static>; 9] = [
    rdfs::LABEL,
    rdfs::COMMENT,
    rdfs::SEE_ALSO,
    rdfs::IS_DEFINED_BY,
    owl::DEPRECATED,
    owl::VERSION_INFO,
    owl::PRIOR_VERSION,
    owl::BACKWARD_COMPATIBLE_WITH,
    owl::INCOMPATIBLE_WITH,
];

/// Returns the lexical kind expected by a built-in datatype, `None` if `iri` is not built in.
pub fn builtin_datatype_kind(iri: &str) -> Option<LiteralKind> {
    BUILTIN_DATATYPES
        .iter()
        .find(|(datatype, _)| datatype.as_str() == iri)
        .map(|(_, kind)| *kind)
}

#[inline]
pub fn is_builtin_datatype(iri: &str) -> bool {
    builtin_datatype_kind(iri).is_some()
}

pub fn is_builtin_annotation_property(iri: &str) -> bool {
    BUILTIN_ANNOTATION_PROPERTIES
        .iter()
        .any(|property| property.as_str() == iri)
}

/// Splits an IRI after its last `#`.
///
/// The whole IRI is the namespace if it has no `#`.
pub fn split_iri(iri: &str) -> (&str, &str) {
    match iri.rfind('#') {
        Some(i) => iri.split_at(i + 1),
        None => (iri, ""),
    }
}

/// Returns the local name of `iri` if it is directly in the OWL namespace.
pub fn owl_local_name(iri: &str) -> Option<&str> {
    let (namespace, local_name) = split_iri(iri);
    (namespace == OWL_NAMESPACE).then_some(local_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_datatypes() {
        assert_eq!(
            builtin_datatype_kind("http://www.w3.org/2001/XMLSchema#positiveInteger"),
            Some(LiteralKind::Integer)
        );
        assert_eq!(
            builtin_datatype_kind("http://www.w3.org/2002/07/owl#real"),
            Some(LiteralKind::Float)
        );
        assert_eq!(
            builtin_datatype_kind("http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral"),
            Some(LiteralKind::String)
        );
        assert!(!is_builtin_datatype("http://example.com/blacksun"));
    }

    #[test]
    fn test_namespaces_are_consistent() {
        assert_eq!(split_iri(owl::THING.as_str()).0, OWL_NAMESPACE);
        assert_eq!(split_iri(xsd::STRING.as_str()).0, XSD_NAMESPACE);
        assert_eq!(split_iri(rdfs::LABEL.as_str()).0, RDFS_NAMESPACE);
        assert_eq!(split_iri(rdf::XML_LITERAL.as_str()).0, RDF_NAMESPACE);
    }

    #[test]
    fn test_split_iri() {
        assert_eq!(
            split_iri("http://test.de/pizza#Pizza"),
            ("http://test.de/pizza#", "Pizza")
        );
        assert_eq!(split_iri("urn:absolute:test.de"), ("urn:absolute:test.de", ""));
        assert_eq!(split_iri("urn:a#b#c"), ("urn:a#b#", "c"));
    }

    #[test]
    fn test_owl_local_name() {
        assert_eq!(owl_local_name(owl::THING.as_str()), Some("Thing"));
        assert_eq!(owl_local_name("http://www.w3.org/2002/07/owl#a#b"), None);
        assert_eq!(owl_local_name("http://test.de/pizza#Thing"), None);
    }

    #[test]
    fn test_builtin_annotation_properties() {
        assert!(is_builtin_annotation_property(
            "http://www.w3.org/2000/01/rdf-schema#comment"
        ));
        assert!(!is_builtin_annotation_property(
            "http://www.w3.org/2000/01/rdf-schema#subClassOf"
        ));
    }
}
