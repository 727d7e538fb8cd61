use crate::axiom::Annotation;
use crate::grammar::{Grammar, GrammarResult};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, TextPosition, Token};
use std::io::Read;

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    /// Reads the axiom starting with `keyword` and hands it to the store.
    pub(super) fn parse_axiom(
        &mut self,
        keyword: Token,
        literal: &str,
        position: TextPosition,
    ) -> GrammarResult<()> {
        match keyword {
            Token::SubClassOf => {
                let annotations = self.open(keyword)?;
                let operands = self.parse_until_close(Self::parse_class_expression)?;
                self.close()?;
                let [sub_class, super_class] = <[_; 2]>::try_from(operands).map_err(|operands| {
                    OwlSyntaxError::new(
                        position,
                        format!(
                            "wrong param count ({}) in SubClassOf, expected 2",
                            operands.len()
                        ),
                    )
                })?;
                self.store
                    .store_sub_class_of(sub_class, super_class, annotations);
            }
            Token::EquivalentClasses | Token::DisjointClasses => {
                let annotations = self.open(keyword)?;
                let classes = self.parse_until_close(Self::parse_class_expression)?;
                self.close()?;
                if classes.len() < 2 {
                    return Err(not_enough_params(position, classes.len(), keyword));
                }
                if keyword == Token::EquivalentClasses {
                    self.store.store_equivalent_classes(classes, annotations);
                } else {
                    self.store.store_disjoint_classes(classes, annotations);
                }
            }
            Token::SubObjectPropertyOf => {
                let annotations = self.open(keyword)?;
                let sub_property = self.parse_object_property_expression()?;
                let super_property = self.parse_object_property_expression()?;
                self.close()?;
                self.store
                    .store_sub_object_property_of(sub_property, super_property, annotations);
            }
            Token::InverseObjectProperties => {
                let annotations = self.open(keyword)?;
                let first = self.parse_object_property_expression()?;
                let second = self.parse_object_property_expression()?;
                self.close()?;
                self.store
                    .store_inverse_object_properties(first, second, annotations);
            }
            Token::ObjectPropertyDomain => {
                let annotations = self.open(keyword)?;
                let property = self.parse_object_property_expression()?;
                let domain = self.parse_class_expression()?;
                self.close()?;
                self.store
                    .store_object_property_domain(property, domain, annotations);
            }
            Token::ObjectPropertyRange => {
                let annotations = self.open(keyword)?;
                let property = self.parse_object_property_expression()?;
                let range = self.parse_class_expression()?;
                self.close()?;
                self.store
                    .store_object_property_range(property, range, annotations);
            }
            Token::FunctionalObjectProperty
            | Token::InverseFunctionalObjectProperty
            | Token::ReflexiveObjectProperty
            | Token::IrreflexiveObjectProperty
            | Token::SymmetricObjectProperty
            | Token::AsymmetricObjectProperty
            | Token::TransitiveObjectProperty => {
                let annotations = self.open(keyword)?;
                let property = self.parse_object_property_expression()?;
                self.close()?;
                match keyword {
                    Token::FunctionalObjectProperty => self
                        .store
                        .store_functional_object_property(property, annotations),
                    Token::InverseFunctionalObjectProperty => self
                        .store
                        .store_inverse_functional_object_property(property, annotations),
                    Token::ReflexiveObjectProperty => self
                        .store
                        .store_reflexive_object_property(property, annotations),
                    Token::IrreflexiveObjectProperty => self
                        .store
                        .store_irreflexive_object_property(property, annotations),
                    Token::SymmetricObjectProperty => self
                        .store
                        .store_symmetric_object_property(property, annotations),
                    Token::AsymmetricObjectProperty => self
                        .store
                        .store_asymmetric_object_property(property, annotations),
                    _ => self
                        .store
                        .store_transitive_object_property(property, annotations),
                }
            }
            Token::SubDataPropertyOf => {
                let annotations = self.open(keyword)?;
                let sub_property = self.parse_data_property_expression()?;
                let super_property = self.parse_data_property_expression()?;
                self.close()?;
                self.store
                    .store_sub_data_property_of(sub_property, super_property, annotations);
            }
            Token::DataPropertyDomain => {
                let annotations = self.open(keyword)?;
                let property = self.parse_data_property_expression()?;
                let domain = self.parse_class_expression()?;
                self.close()?;
                self.store
                    .store_data_property_domain(property, domain, annotations);
            }
            Token::DataPropertyRange => {
                let annotations = self.open(keyword)?;
                let property = self.parse_data_property_expression()?;
                let range = self.parse_data_range()?;
                self.close()?;
                self.store
                    .store_data_property_range(property, range, annotations);
            }
            Token::FunctionalDataProperty => {
                let annotations = self.open(keyword)?;
                let property = self.parse_data_property_expression()?;
                self.close()?;
                self.store
                    .store_functional_data_property(property, annotations);
            }
            Token::ClassAssertion => {
                let annotations = self.open(keyword)?;
                let class = self.parse_class_expression()?;
                let individual = self.parse_individual()?;
                self.close()?;
                self.store
                    .store_class_assertion(class, individual, annotations);
            }
            Token::ObjectPropertyAssertion | Token::NegativeObjectPropertyAssertion => {
                let annotations = self.open(keyword)?;
                let property = self
                    .parse_object_property_expression()
                    .map_err(|e| e.enrich(format!("1st param in {keyword}")))?;
                let source = self
                    .parse_individual()
                    .map_err(|e| e.enrich(format!("2nd param in {keyword}")))?;
                let target = self
                    .parse_individual()
                    .map_err(|e| e.enrich(format!("3rd param in {keyword}")))?;
                self.close()?;
                if keyword == Token::ObjectPropertyAssertion {
                    self.store
                        .store_object_property_assertion(property, source, target, annotations);
                } else {
                    self.store.store_negative_object_property_assertion(
                        property,
                        source,
                        target,
                        annotations,
                    );
                }
            }
            Token::DataPropertyAssertion => {
                let annotations = self.open(keyword)?;
                let property = self
                    .parse_data_property_expression()
                    .map_err(|e| e.enrich("1st param in DataPropertyAssertion"))?;
                let source = self
                    .parse_individual()
                    .map_err(|e| e.enrich("2nd param in DataPropertyAssertion"))?;
                let target = self
                    .parse_literal()
                    .map_err(|e| e.enrich("3rd param in DataPropertyAssertion"))?;
                self.close()?;
                self.store
                    .store_data_property_assertion(property, source, target, annotations);
            }
            Token::DifferentIndividuals => {
                let annotations = self.open(keyword)?;
                let individuals = self.parse_until_close(Self::parse_individual)?;
                self.close()?;
                if individuals.len() < 2 {
                    return Err(not_enough_params(position, individuals.len(), keyword));
                }
                self.store
                    .store_different_individuals(individuals, annotations);
            }
            Token::AnnotationAssertion => {
                let annotations = self.open(keyword)?;
                let property = self
                    .parse_annotation_property()
                    .map_err(|e| e.enrich("reading 1st param in AnnotationAssertion"))?;
                let subject = self
                    .parse_annotation_subject()
                    .map_err(|e| e.enrich("reading 2nd param in AnnotationAssertion"))?;
                let value = self
                    .parse_annotation_value()
                    .map_err(|e| e.enrich("reading 3rd param in AnnotationAssertion"))?;
                self.close()?;
                self.store
                    .store_annotation_assertion(property, subject, value, annotations);
            }
            Token::AnnotationPropertyDomain | Token::AnnotationPropertyRange => {
                let annotations = self.open(keyword)?;
                let property = self.parse_annotation_property()?;
                let (iri, _) = self.parse_iri()?;
                self.close()?;
                if keyword == Token::AnnotationPropertyDomain {
                    self.store
                        .store_annotation_property_domain(property, iri, annotations);
                } else {
                    self.store
                        .store_annotation_property_range(property, iri, annotations);
                }
            }
            _ => {
                return Err(OwlSyntaxError::new(
                    position,
                    format!("unexpected ontology token {} (\"{literal}\")", keyword.name()),
                ));
            }
        }
        Ok(())
    }

    /// Reads `Keyword(` and the axiom annotations.
    fn open(&mut self, keyword: Token) -> GrammarResult<Vec<Annotation>> {
        self.parser.consume_tokens(&[keyword, Token::OpenParen])?;
        self.parse_annotations()
    }

    fn close(&mut self) -> GrammarResult<()> {
        self.parser.consume_tokens(&[Token::CloseParen])
    }
}

fn not_enough_params(position: TextPosition, count: usize, keyword: Token) -> OwlSyntaxError {
    OwlSyntaxError::new(
        position,
        format!("not enough params ({count}) in {keyword}"),
    )
}
