use crate::prefixes::Prefixes;
use oxrdf::NamedNode;
use std::fmt;

/// The header of a parsed document: the ontology IRI, its optional version IRI and the prefixes
/// the document declared.
///
/// Declarations and axioms are in the store the document has been parsed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ontology {
    iri: NamedNode,
    version_iri: Option<NamedNode>,
    prefixes: Prefixes,
}

impl Ontology {
    pub fn new(iri: NamedNode, version_iri: Option<NamedNode>, prefixes: Prefixes) -> Self {
        Self {
            iri,
            version_iri,
            prefixes,
        }
    }

    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.iri
    }

    #[inline]
    pub fn version_iri(&self) -> Option<&NamedNode> {
        self.version_iri.as_ref()
    }

    #[inline]
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    /// A one line description: the ontology IRI followed by what the store reports about itself.
    ///
    /// With a [`MemoryStore`](crate::MemoryStore), it lists the declaration counts.
    pub fn summary(&self, store: &impl fmt::Display) -> String {
        format!("{} with {store}", self.iri.as_str())
    }
}
