use crate::entity::{Declaration, DeclarationKind};
use crate::grammar::{Grammar, GrammarResult, unexpected_token};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, Token, describe};
use oxrdf::NamedNode;
use std::io::Read;
use tracing::{debug, trace};

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    /// Reads `Prefix(...)* Ontology(...)` up to the end of the input.
    pub fn parse_document(&mut self) -> GrammarResult<()> {
        loop {
            let (token, literal, position) = self.parser.scan_ignoring_trivia();
            if self.header.is_some() {
                return if token == Token::Eof {
                    Ok(())
                } else {
                    Err(unexpected_token(position, token, &literal, "end of document"))
                };
            }
            match token {
                Token::Prefix => {
                    self.parser.unscan();
                    self.parse_prefix()
                        .map_err(|e| e.enrich("parsing Prefix"))?;
                }
                Token::Ontology => {
                    self.parser.unscan();
                    self.parse_ontology()?;
                }
                Token::Eof => return Err(OwlSyntaxError::new(position, "missing Ontology")),
                _ => {
                    return Err(unexpected_token(
                        position,
                        token,
                        &literal,
                        "Prefix or Ontology",
                    ));
                }
            }
        }
    }

    /// `Prefix(name:=<namespace>)` or `Prefix(:=<namespace>)`.
    fn parse_prefix(&mut self) -> GrammarResult<()> {
        self.parser
            .consume_tokens(&[Token::Prefix, Token::OpenParen])?;
        let (token, name, position) = self.parser.scan_ignoring_trivia();
        let name = match token {
            Token::Colon => {
                self.parser.unscan();
                String::new()
            }
            Token::Identifier => name,
            _ => {
                return Err(OwlSyntaxError::new(
                    position,
                    format!(
                        "unexpected {} when parsing prefix, need IDENT",
                        describe(token, &name).trim_end()
                    ),
                ));
            }
        };
        self.parser.consume_tokens(&[Token::Colon, Token::Equals])?;
        let (token, literal, iri_position) = self.parser.scan_ignoring_trivia();
        if token != Token::Iri {
            return Err(OwlSyntaxError::new(
                iri_position,
                format!(
                    "unexpected {} when parsing prefix, need IRI",
                    describe(token, &literal).trim_end()
                ),
            ));
        }
        let namespace = self.unbracketed_iri(&literal, &iri_position)?;
        self.parser.consume_tokens(&[Token::CloseParen])?;
        if !self.document_prefixes.insert(name.clone()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("second occurrence of prefix \"{name}\""),
            ));
        }
        trace!("prefix {name}: bound to <{namespace}>");
        self.prefixes.insert(name, namespace);
        Ok(())
    }

    /// `Ontology(<iri> [<version iri>] statement* )`
    fn parse_ontology(&mut self) -> GrammarResult<()> {
        let level = self.parser.balance();
        self.parser
            .consume_tokens(&[Token::Ontology, Token::OpenParen])
            .map_err(|e| e.enrich("parsing Ontology element"))?;
        let (token, literal, position) = self.parser.scan_ignoring_trivia();
        if token != Token::Iri {
            return Err(OwlSyntaxError::new(
                position,
                format!("IRI as name after Ontology declaration expected, found:{literal}"),
            ));
        }
        let iri = self.unbracketed_iri(&literal, &position)?;
        let (token, literal, position) = self.parser.peek();
        let version_iri = if token == Token::Iri {
            self.parser.scan_ignoring_trivia();
            Some(self.unbracketed_iri(&literal, &position)?)
        } else {
            None
        };
        debug!("parsing ontology <{iri}>");
        self.header = Some((
            NamedNode::new_unchecked(iri),
            version_iri.map(NamedNode::new_unchecked),
        ));

        loop {
            let (token, literal, position) = self.parser.scan_ignoring_trivia();
            if token == Token::CloseParen {
                assert_eq!(
                    self.parser.balance(),
                    level,
                    "parenthesis balance left the Ontology block at {position}"
                );
                return Ok(());
            }
            self.parser.unscan();
            if token == Token::Declaration {
                self.parse_declaration()?;
            } else {
                self.parse_axiom(token, &literal, position)?;
            }
        }
    }

    /// `Declaration( Annotation(...)* Kind(iri) )`
    fn parse_declaration(&mut self) -> GrammarResult<()> {
        self.parser
            .consume_tokens(&[Token::Declaration, Token::OpenParen])?;
        let annotations = self.parse_annotations()?;
        let (token, literal, position) = self.parser.scan_ignoring_trivia();
        let kind = match token {
            Token::AnnotationProperty => DeclarationKind::AnnotationProperty,
            Token::Class => DeclarationKind::Class,
            Token::DataProperty => DeclarationKind::DataProperty,
            Token::Datatype => DeclarationKind::Datatype,
            Token::NamedIndividual => DeclarationKind::NamedIndividual,
            Token::ObjectProperty => DeclarationKind::ObjectProperty,
            _ => {
                return Err(unexpected_token(
                    position,
                    token,
                    &literal,
                    "entity kind in Declaration",
                ));
            }
        };
        self.parser.consume_tokens(&[Token::OpenParen])?;
        let (iri, position) = self.parse_iri()?;
        self.parser
            .consume_tokens(&[Token::CloseParen, Token::CloseParen])?;
        if !self
            .store
            .store_declaration(Declaration::new(kind, iri.clone()), annotations)
        {
            return Err(OwlSyntaxError::new(
                position,
                format!("second declaration of {kind} {iri}"),
            ));
        }
        Ok(())
    }
}
