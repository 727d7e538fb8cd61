use crate::entity::Datatype;
use crate::expression::{DataRange, Facet, FacetRestriction};
use crate::grammar::{Grammar, GrammarResult, ordinal, unexpected_token};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, Token};
use crate::vocab::is_builtin_datatype;
use oxrdf::NamedNode;
use std::io::Read;

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    pub(super) fn parse_data_range(&mut self) -> GrammarResult<DataRange> {
        let (token, literal, position) = self.parser.peek();
        Ok(match token {
            Token::Iri | Token::Identifier | Token::Colon => self
                .parse_named_datatype()
                .map_err(|e| e.enrich("parsing named datatype"))?,
            Token::DatatypeRestriction => self.parse_datatype_restriction()?,
            Token::DataIntersectionOf => {
                DataRange::DataIntersectionOf(self.parse_data_range_list(token, 2)?)
            }
            Token::DataUnionOf => DataRange::DataUnionOf(self.parse_data_range_list(token, 2)?),
            Token::DataComplementOf => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let operands = self.parse_until_close(Self::parse_data_range)?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                let [operand] = <[DataRange; 1]>::try_from(operands).map_err(|operands| {
                    OwlSyntaxError::new(
                        position,
                        format!(
                            "wrong param count ({}) in DataComplementOf, expected 1",
                            operands.len()
                        ),
                    )
                })?;
                DataRange::DataComplementOf(Box::new(operand))
            }
            Token::DataOneOf => {
                self.parser.consume_tokens(&[token, Token::OpenParen])?;
                let values = self.parse_until_close(Self::parse_literal)?;
                self.parser.consume_tokens(&[Token::CloseParen])?;
                if values.is_empty() {
                    return Err(OwlSyntaxError::new(
                        position,
                        "not enough params (0) in DataOneOf",
                    ));
                }
                DataRange::DataOneOf(values)
            }
            _ => return Err(unexpected_token(position, token, &literal, "data range")),
        })
    }

    fn parse_data_range_list(
        &mut self,
        keyword: Token,
        min: usize,
    ) -> GrammarResult<Vec<DataRange>> {
        let position = self.parser.position();
        self.parser.consume_tokens(&[keyword, Token::OpenParen])?;
        let operands = self.parse_until_close(Self::parse_data_range)?;
        self.parser.consume_tokens(&[Token::CloseParen])?;
        if operands.len() < min {
            return Err(OwlSyntaxError::new(
                position,
                format!("not enough params ({}) in {keyword}", operands.len()),
            ));
        }
        Ok(operands)
    }

    /// A built-in datatype or a declared one.
    fn parse_named_datatype(&mut self) -> GrammarResult<DataRange> {
        let iri = self.parse_datatype_iri()?;
        Ok(if is_builtin_datatype(iri.as_str()) {
            DataRange::BuiltinDatatype(iri)
        } else {
            DataRange::Datatype(Datatype::new(iri))
        })
    }

    fn parse_datatype_iri(&mut self) -> GrammarResult<NamedNode> {
        let (iri, position) = self.parse_iri()?;
        if is_builtin_datatype(iri.as_str()) || self.store.datatype(&iri).is_some() {
            return Ok(iri);
        }
        Err(OwlSyntaxError::new(
            position,
            format!("unknown datatype literal ({})", iri.as_str()),
        ))
    }

    /// `DatatypeRestriction(DN f1 v1 ... fn vn)` with n >= 1.
    fn parse_datatype_restriction(&mut self) -> GrammarResult<DataRange> {
        let position = self.parser.position();
        self.parser
            .consume_tokens(&[Token::DatatypeRestriction, Token::OpenParen])?;
        let datatype = self
            .parse_datatype_iri()
            .map_err(|e| e.enrich("parsing named datatype"))?;
        let mut restrictions = Vec::new();
        while self.parser.peek().0 != Token::CloseParen {
            let restriction = self.parse_facet_restriction().map_err(|e| {
                e.enrich(format!(
                    "parsing {} (facet,literal) pair",
                    ordinal(restrictions.len())
                ))
            })?;
            restrictions.push(restriction);
        }
        self.parser.consume_tokens(&[Token::CloseParen])?;
        if restrictions.is_empty() {
            return Err(OwlSyntaxError::new(
                position,
                "not enough params (0) in DatatypeRestriction",
            ));
        }
        Ok(DataRange::DatatypeRestriction {
            datatype,
            restrictions,
        })
    }

    fn parse_facet_restriction(&mut self) -> GrammarResult<FacetRestriction> {
        let (token, literal, position) = self.parser.peek();
        if !token.may_start_identifier() {
            return Err(OwlSyntaxError::new(
                position,
                format!("expected known facet, found {literal}."),
            ));
        }
        let (iri, position) = self.parse_iri()?;
        let facet = Facet::from_iri(iri.as_str()).ok_or_else(|| {
            OwlSyntaxError::new(
                position,
                format!("expected known facet, found {}.", iri.as_str()),
            )
        })?;
        let value = self.parse_literal()?;
        Ok(FacetRestriction { facet, value })
    }
}
