#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod axiom;
mod entity;
mod expression;
mod grammar;
mod literal;
mod ontology;
mod parser;
mod prefixes;
pub mod store;
mod toolkit;
pub mod vocab;

pub use crate::axiom::{AnnotatedAxiom, Annotation, AnnotationSubject, AnnotationValue, Axiom};
pub use crate::entity::{
    AnnotationProperty, DataProperty, Datatype, Declaration, DeclarationKind, Individual,
    NamedIndividual, ObjectProperty, OwlClass,
};
pub use crate::expression::{
    ClassExpression, DataPropertyExpression, DataRange, Facet, FacetRestriction,
    ObjectPropertyExpression,
};
pub use crate::literal::{LiteralKind, OwlLiteral};
pub use crate::ontology::Ontology;
pub use crate::parser::{FunctionalSyntaxParser, ParsedOntology, PartialOntology};
pub use crate::prefixes::Prefixes;
pub use crate::store::{
    AxiomStore, DeclarationPolicy, DeclarationStore, Declarations, MemoryStore, OntologyStore,
    PropertyCharacteristics,
};
pub use crate::toolkit::{
    OwlParseError, OwlSyntaxError, PartialParseError, Scanner, TextPosition, Token, TokenParser,
};
