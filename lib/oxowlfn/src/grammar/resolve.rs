use crate::axiom::{Annotation, AnnotationSubject, AnnotationValue};
use crate::entity::{AnnotationProperty, Individual};
use crate::grammar::{Grammar, GrammarResult, unexpected};
use crate::literal::{LiteralKind, OwlLiteral};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, TextPosition, Token, describe};
use crate::vocab::{builtin_datatype_kind, is_builtin_annotation_property, owl_local_name};
use oxilangtag::LanguageTag;
use oxiri::Iri;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, NamedNode};
use std::io::Read;
use tracing::trace;

/// The prefix name reserved for anonymous individuals: `_:label`.
const ANONYMOUS_PREFIX: &str = "_";

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    /// Reads `<iri>`, `prefix:name` or `:name` and returns the absolute IRI with the position
    /// just before it.
    pub(super) fn parse_iri(&mut self) -> GrammarResult<(NamedNode, TextPosition)> {
        let (token, literal, position) = self.parser.peek();
        match token {
            Token::Iri => {
                self.parser.scan_ignoring_trivia();
                let iri = self.unbracketed_iri(&literal, &position)?;
                Ok((NamedNode::new_unchecked(iri), position))
            }
            Token::Identifier | Token::Colon => {
                let (prefix, name) = self.parse_prefixed_name()?;
                let iri = self.resolve_prefixed_name(&prefix, &name, &position)?;
                Ok((iri, position))
            }
            _ => Err(unexpected(
                position,
                token,
                &literal,
                "need IRI, or prefixed name",
            )),
        }
    }

    /// Reads `prefix:name` or `:name`, with `prefix` unresolved.
    pub(super) fn parse_prefixed_name(&mut self) -> GrammarResult<(String, String)> {
        let (token, literal, position) = self.parser.scan_ignoring_trivia();
        let prefix = match token {
            Token::Identifier => {
                self.parser.consume_tokens(&[Token::Colon])?;
                literal
            }
            Token::Colon => String::new(),
            _ => {
                return Err(unexpected(position, token, &literal, "need prefixed name"));
            }
        };
        let (token, name, position) = self.parser.scan_ignoring_trivia();
        if !token.is_word() {
            return Err(unexpected(
                position,
                token,
                &name,
                "need identifier in prefixed name",
            ));
        }
        Ok((prefix, name))
    }

    pub(super) fn resolve_prefixed_name(
        &self,
        prefix: &str,
        name: &str,
        position: &TextPosition,
    ) -> GrammarResult<NamedNode> {
        let iri = self
            .prefixes
            .resolve(prefix, name)
            .ok_or_else(|| OwlSyntaxError::new(position.clone(), format!("unknown prefix {prefix}")))?;
        trace!("resolved {prefix}:{name} to {iri}");
        Ok(iri)
    }

    /// Strips the brackets of an IRI token, validating the IRI in strict mode.
    pub(super) fn unbracketed_iri(
        &self,
        literal: &str,
        position: &TextPosition,
    ) -> GrammarResult<String> {
        let Some(iri) = literal
            .strip_prefix('<')
            .and_then(|iri| iri.strip_suffix('>'))
        else {
            return Err(OwlSyntaxError::new(
                position.clone(),
                format!("expected IRI, but missing < and > on the ends (found:{literal})"),
            ));
        };
        if self.options.strict {
            Iri::parse(iri).map_err(|e| {
                OwlSyntaxError::new(position.clone(), format!("invalid IRI {literal}: {e}"))
            })?;
        }
        Ok(iri.to_owned())
    }

    /// Returns true if the next token starts an anonymous individual.
    fn at_anonymous_individual(&mut self) -> bool {
        let (token, literal, _) = self.parser.peek();
        token == Token::Identifier && literal == ANONYMOUS_PREFIX
    }

    fn parse_anonymous_individual(&mut self) -> GrammarResult<BlankNode> {
        let (prefix, label) = self.parse_prefixed_name()?;
        debug_assert_eq!(prefix, ANONYMOUS_PREFIX, "not an anonymous individual");
        BlankNode::new(label.as_str()).map_err(|e| {
            OwlSyntaxError::new(
                self.parser.position(),
                format!("invalid anonymous individual _:{label}: {e}"),
            )
        })
    }

    /// Reads a named individual, checked against the declarations, or an anonymous one.
    pub(super) fn parse_individual(&mut self) -> GrammarResult<Individual> {
        if self.at_anonymous_individual() {
            return Ok(Individual::Anonymous(self.parse_anonymous_individual()?));
        }
        let (iri, position) = self
            .parse_iri()
            .map_err(|e| e.enrich("parsing individual"))?;
        if let Some(name) = owl_local_name(iri.as_str()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("unexpected OWL name \"{name}\""),
            ));
        }
        match self.store.named_individual(&iri) {
            Some(individual) => Ok(Individual::Named(individual)),
            None => Err(OwlSyntaxError::new(
                position,
                format!("Unknown ref to {iri}. Expected named individual."),
            )),
        }
    }

    /// Reads a literal: `"..."` with an optional `@tag` then an optional `^^datatype`,
    /// an integer or a float with an optional `^^datatype`, or `true`/`false`.
    pub(super) fn parse_literal(&mut self) -> GrammarResult<OwlLiteral> {
        let (token, value, position) = self.parser.scan_ignoring_trivia();
        let kind = match token {
            Token::True | Token::False => {
                return Ok(OwlLiteral::new(value, xsd::BOOLEAN, None));
            }
            Token::StringLiteral => LiteralKind::String,
            Token::IntegerLiteral => LiteralKind::Integer,
            Token::FloatLiteral => LiteralKind::Float,
            _ => {
                return Err(OwlSyntaxError::new(
                    position,
                    format!(
                        "unexpected {} when parsing literal",
                        describe(token, &value).trim_end()
                    ),
                )
                .enrich("parsing literal"));
            }
        };
        let value = if kind == LiteralKind::String {
            unescape_string(&value)
        } else {
            value
        };
        let language = if kind == LiteralKind::String {
            self.parse_language_tag()
                .map_err(|e| e.enrich("parsing literal"))?
        } else {
            None
        };
        let Some(datatype) = self
            .parse_datatype_suffix()
            .map_err(|e| e.enrich("parsing literal"))?
        else {
            let datatype = match kind {
                LiteralKind::Integer => xsd::INTEGER,
                LiteralKind::Float => xsd::DECIMAL,
                LiteralKind::String if language.is_some() => rdf::LANG_STRING,
                LiteralKind::String => xsd::STRING,
            };
            return Ok(OwlLiteral::new(value, datatype, language));
        };
        if let Some(expected) = builtin_datatype_kind(datatype.as_str()) {
            // quoted numbers are numbers if the datatype says so
            let actual = match (kind, expected, &language) {
                (LiteralKind::String, LiteralKind::Integer, None) if is_integer(&value) => {
                    LiteralKind::Integer
                }
                (LiteralKind::String, LiteralKind::Float, None) if value.parse::<f64>().is_ok() => {
                    LiteralKind::Float
                }
                _ => kind,
            };
            if actual != expected {
                return Err(OwlSyntaxError::new(
                    position,
                    format!("literal type mismatch with value ({datatype})"),
                )
                .enrich("parsing literal"));
            }
        }
        Ok(OwlLiteral::new(value, datatype, language))
    }

    /// Reads `@tag` if present. Subtags are joined: `@en-GB`.
    fn parse_language_tag(&mut self) -> GrammarResult<Option<String>> {
        let (token, _, _) = self.parser.scan_ignoring_trivia();
        if token != Token::At {
            self.parser.unscan();
            return Ok(None);
        }
        let (token, mut tag, position) = self.parser.scan_ignoring_trivia();
        if !token.is_word() {
            return Err(OwlSyntaxError::new(
                position,
                format!("expected langtag, not {}", describe(token, &tag).trim_end()),
            ));
        }
        loop {
            let (token, literal, position) = self.parser.scan();
            match token {
                Token::Illegal if literal == "-" => {
                    let (token, subtag, position) = self.parser.scan();
                    if !token.is_word() && token != Token::IntegerLiteral {
                        return Err(OwlSyntaxError::new(
                            position,
                            format!("expected langtag, not {}", describe(token, &subtag).trim_end()),
                        ));
                    }
                    tag.push('-');
                    tag.push_str(&subtag);
                }
                Token::IntegerLiteral if literal.starts_with('-') => tag.push_str(&literal),
                _ => {
                    self.parser.unscan();
                    if self.options.strict {
                        LanguageTag::parse(tag.as_str()).map_err(|e| {
                            OwlSyntaxError::new(position, format!("invalid langtag {tag}: {e}"))
                        })?;
                    }
                    return Ok(Some(tag));
                }
            }
        }
    }

    /// Reads `^^datatype` if present.
    fn parse_datatype_suffix(&mut self) -> GrammarResult<Option<NamedNode>> {
        let (token, _, _) = self.parser.scan_ignoring_trivia();
        if token != Token::DoubleCircumflex {
            self.parser.unscan();
            return Ok(None);
        }
        let (datatype, _) = self.parse_iri()?;
        Ok(Some(datatype))
    }

    /// Reads zero or more `Annotation(A t)` found before the operands of an axiom.
    pub(super) fn parse_annotations(&mut self) -> GrammarResult<Vec<Annotation>> {
        let mut annotations = Vec::new();
        while self.parser.peek().0 == Token::Annotation {
            let annotation = self
                .parse_annotation()
                .map_err(|e| e.enrich(format!("parsing {}. Annotation", annotations.len() + 1)))?;
            annotations.push(annotation);
        }
        Ok(annotations)
    }

    fn parse_annotation(&mut self) -> GrammarResult<Annotation> {
        self.parser
            .consume_tokens(&[Token::Annotation, Token::OpenParen])?;
        let property = self
            .parse_annotation_property()
            .map_err(|e| e.enrich("reading 1st param in Annotation"))?;
        let value = self
            .parse_annotation_value()
            .map_err(|e| e.enrich("reading 2nd param in Annotation"))?;
        self.parser.consume_tokens(&[Token::CloseParen])?;
        Ok(Annotation { property, value })
    }

    /// Reads an annotation property: one built into OWL or a declared one.
    pub(super) fn parse_annotation_property(&mut self) -> GrammarResult<AnnotationProperty> {
        let (iri, position) = self.parse_iri()?;
        if is_builtin_annotation_property(iri.as_str()) {
            return Ok(AnnotationProperty::new(iri));
        }
        if let Some(name) = owl_local_name(iri.as_str()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("unexpected OWL property \"{name}\""),
            ));
        }
        self.store.annotation_property(&iri).ok_or_else(|| {
            OwlSyntaxError::new(
                position,
                format!("Unknown ref to {iri}. Expected annotation property."),
            )
        })
    }

    /// Reads an IRI or an anonymous individual.
    pub(super) fn parse_annotation_subject(&mut self) -> GrammarResult<AnnotationSubject> {
        if self.at_anonymous_individual() {
            return Ok(AnnotationSubject::Anonymous(
                self.parse_anonymous_individual()?,
            ));
        }
        let (iri, _) = self
            .parse_iri()
            .map_err(|e| e.enrich("expected IRI or anonymous individual"))?;
        Ok(AnnotationSubject::Iri(iri))
    }

    /// Reads an IRI, an anonymous individual or a literal.
    pub(super) fn parse_annotation_value(&mut self) -> GrammarResult<AnnotationValue> {
        if self.parser.peek().0.may_start_literal() {
            return Ok(AnnotationValue::Literal(self.parse_literal()?));
        }
        if self.at_anonymous_individual() {
            return Ok(AnnotationValue::Anonymous(
                self.parse_anonymous_individual()?,
            ));
        }
        let (iri, _) = self
            .parse_iri()
            .map_err(|e| e.enrich("expected IRI, anonymous individual or literal"))?;
        Ok(AnnotationValue::Iri(iri))
    }
}

/// `\"` and `\\` stand for `"` and `\`. Any other backslash is kept as written.
fn unescape_string(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('"' | '\\')) => unescaped.push(escaped),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

/// An optional sign followed by at least one ASCII digit.
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
