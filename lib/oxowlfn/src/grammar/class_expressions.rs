use crate::expression::{
    ClassExpression, DataPropertyExpression, DataRange, ObjectPropertyExpression,
};
use crate::grammar::{Grammar, GrammarResult, unexpected_token};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, Token};
use crate::vocab::{owl, owl_local_name};
use std::io::Read;

/// `(n P)` or `(n P C)`, before it is turned into a [`ClassExpression`].
struct Cardinality<P, F> {
    cardinality: u32,
    property: P,
    filler: Option<F>,
}

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    pub(super) fn parse_class_expression(&mut self) -> GrammarResult<ClassExpression> {
        let (token, literal, position) = self.parser.peek();
        Ok(match token {
            Token::Iri | Token::Identifier | Token::Colon => self.parse_named_class()?,
            Token::ObjectIntersectionOf => {
                ClassExpression::ObjectIntersectionOf(self.parse_class_expression_list(token, 2)?)
            }
            Token::ObjectUnionOf => {
                ClassExpression::ObjectUnionOf(self.parse_class_expression_list(token, 2)?)
            }
            Token::ObjectComplementOf => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let operands = self.parse_until_close(Self::parse_class_expression)?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                let [operand] = <[ClassExpression; 1]>::try_from(operands).map_err(|operands| {
                    OwlSyntaxError::new(
                        position,
                        format!(
                            "wrong param count ({}) in ObjectComplementOf, expected 1",
                            operands.len()
                        ),
                    )
                })?;
                ClassExpression::ObjectComplementOf(Box::new(operand))
            }
            Token::ObjectOneOf => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let individuals = self.parse_until_close(Self::parse_individual)?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                if individuals.is_empty() {
                    return Err(OwlSyntaxError::new(
                        position,
                        "not enough params (0) in ObjectOneOf",
                    ));
                }
                ClassExpression::ObjectOneOf(individuals)
            }
            Token::ObjectSomeValuesFrom | Token::ObjectAllValuesFrom => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let property = self.parse_object_property_expression()?;
                let filler = Box::new(self.parse_class_expression()?);
                self.parser.consume_tokens(&[Token::CloseParen])?;
                if token == Token::ObjectSomeValuesFrom {
                    ClassExpression::ObjectSomeValuesFrom { property, filler }
                } else {
                    ClassExpression::ObjectAllValuesFrom { property, filler }
                }
            }
            Token::ObjectHasValue => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let property = self.parse_object_property_expression()?;
                let individual = self.parse_individual()?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                ClassExpression::ObjectHasValue {
                    property,
                    individual,
                }
            }
            Token::ObjectHasSelf => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let property = self.parse_object_property_expression()?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                ClassExpression::ObjectHasSelf(property)
            }
            Token::ObjectMinCardinality
            | Token::ObjectMaxCardinality
            | Token::ObjectExactCardinality => self.parse_object_cardinality(token)?,
            Token::DataSomeValuesFrom | Token::DataAllValuesFrom => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let property = self.parse_data_property_expression()?;
                let range = self.parse_data_range()?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                if token == Token::DataSomeValuesFrom {
                    ClassExpression::DataSomeValuesFrom { property, range }
                } else {
                    ClassExpression::DataAllValuesFrom { property, range }
                }
            }
            Token::DataHasValue => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let property = self
                    .parse_data_property_expression()
                    .map_err(|e| e.enrich("parsing R in DataHasValue"))?;
                let value = self
                    .parse_literal()
                    .map_err(|e| e.enrich("parsing v in DataHasValue"))?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                ClassExpression::DataHasValue { property, value }
            }
            Token::DataMinCardinality | Token::DataMaxCardinality | Token::DataExactCardinality => {
                self.parse_data_cardinality(token)?
            }
            _ => {
                return Err(unexpected_token(
                    position,
                    token,
                    &literal,
                    "class expression",
                ));
            }
        })
    }

    /// `Keyword(C1 ... Cn)` with at least `min` operands.
    fn parse_class_expression_list(
        &mut self,
        keyword: Token,
        min: usize,
    ) -> GrammarResult<Vec<ClassExpression>> {
        let position = self.parser.position();
        self.parser.consume_tokens(&[keyword, Token::OpenParen])?;
        let operands = self.parse_until_close(Self::parse_class_expression)?;
        self.parser.consume_tokens(&[Token::CloseParen])?;
        if operands.len() < min {
            return Err(OwlSyntaxError::new(
                position,
                format!("not enough params ({}) in {keyword}", operands.len()),
            ));
        }
        Ok(operands)
    }

    /// `owl:Thing`, `owl:Nothing` or a declared class.
    fn parse_named_class(&mut self) -> GrammarResult<ClassExpression> {
        let (iri, position) = self.parse_iri()?;
        if iri.as_ref() == owl::THING {
            return Ok(ClassExpression::Thing);
        }
        if iri.as_ref() == owl::NOTHING {
            return Ok(ClassExpression::Nothing);
        }
        if let Some(name) = owl_local_name(iri.as_str()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("unexpected OWL name \"{name}\""),
            ));
        }
        match self.store.class(&iri) {
            Some(class) => Ok(class.into()),
            None => Err(OwlSyntaxError::new(
                position,
                format!("Unknown ref to {iri}. Expected class expression."),
            )),
        }
    }

    /// The `n` of a cardinality restriction.
    fn parse_cardinality(&mut self) -> GrammarResult<u32> {
        let (token, literal, position) = self.parser.scan_ignoring_trivia();
        if token != Token::IntegerLiteral {
            return Err(OwlSyntaxError::new(
                position,
                format!("int literal needed, found {literal}"),
            ));
        }
        literal.parse().map_err(|_| {
            OwlSyntaxError::new(
                position,
                format!("nonnegative integer needed, found {literal}"),
            )
        })
    }

    fn parse_object_cardinality(&mut self, keyword: Token) -> GrammarResult<ClassExpression> {
        self.parser.consume_tokens(&[keyword, Token::OpenParen])?;
        let cardinality = self.parse_cardinality()?;
        let property = self.parse_object_property_expression()?;
        let filler = if self.parser.peek().0 == Token::CloseParen {
            None
        } else {
            Some(Box::new(self.parse_class_expression()?))
        };
        self.parser.consume_tokens(&[Token::CloseParen])?;
        Ok(object_cardinality(
            keyword,
            Cardinality {
                cardinality,
                property,
                filler,
            },
        ))
    }

    fn parse_data_cardinality(&mut self, keyword: Token) -> GrammarResult<ClassExpression> {
        self.parser.consume_tokens(&[keyword, Token::OpenParen])?;
        let cardinality = self.parse_cardinality()?;
        let property = self.parse_data_property_expression()?;
        let filler = if self.parser.peek().0 == Token::CloseParen {
            None
        } else {
            Some(
                self.parse_data_range()
                    .map_err(|e| e.enrich(format!("parsing D in {keyword}")))?,
            )
        };
        self.parser.consume_tokens(&[Token::CloseParen])?;
        Ok(data_cardinality(
            keyword,
            Cardinality {
                cardinality,
                property,
                filler,
            },
        ))
    }
}

fn object_cardinality(
    keyword: Token,
    restriction: Cardinality<ObjectPropertyExpression, Box<ClassExpression>>,
) -> ClassExpression {
    let Cardinality {
        cardinality,
        property,
        filler,
    } = restriction;
    match (keyword, filler) {
        (Token::ObjectMinCardinality, None) => ClassExpression::ObjectMinCardinality {
            cardinality,
            property,
        },
        (Token::ObjectMinCardinality, Some(filler)) => {
            ClassExpression::ObjectMinQualifiedCardinality {
                cardinality,
                property,
                filler,
            }
        }
        (Token::ObjectMaxCardinality, None) => ClassExpression::ObjectMaxCardinality {
            cardinality,
            property,
        },
        (Token::ObjectMaxCardinality, Some(filler)) => {
            ClassExpression::ObjectMaxQualifiedCardinality {
                cardinality,
                property,
                filler,
            }
        }
        (_, None) => ClassExpression::ObjectExactCardinality {
            cardinality,
            property,
        },
        (_, Some(filler)) => ClassExpression::ObjectExactQualifiedCardinality {
            cardinality,
            property,
            filler,
        },
    }
}

fn data_cardinality(
    keyword: Token,
    restriction: Cardinality<DataPropertyExpression, DataRange>,
) -> ClassExpression {
    let Cardinality {
        cardinality,
        property,
        filler,
    } = restriction;
    match (keyword, filler) {
        (Token::DataMinCardinality, None) => ClassExpression::DataMinCardinality {
            cardinality,
            property,
        },
        (Token::DataMinCardinality, Some(range)) => ClassExpression::DataMinQualifiedCardinality {
            cardinality,
            property,
            range,
        },
        (Token::DataMaxCardinality, None) => ClassExpression::DataMaxCardinality {
            cardinality,
            property,
        },
        (Token::DataMaxCardinality, Some(range)) => ClassExpression::DataMaxQualifiedCardinality {
            cardinality,
            property,
            range,
        },
        (_, None) => ClassExpression::DataExactCardinality {
            cardinality,
            property,
        },
        (_, Some(range)) => ClassExpression::DataExactQualifiedCardinality {
            cardinality,
            property,
            range,
        },
    }
}
