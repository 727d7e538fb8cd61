//! Entry points: [`FunctionalSyntaxParser`] and what it returns.

use crate::grammar::{Grammar, GrammarOptions};
use crate::ontology::Ontology;
use crate::prefixes::Prefixes;
use crate::store::{DeclarationPolicy, MemoryStore, OntologyStore};
use crate::toolkit::{OwlParseError, OwlSyntaxError, PartialParseError, TokenParser};
use oxiri::{Iri, IriParseError};
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

/// A parser for the [OWL 2 Functional-Style Syntax](https://www.w3.org/TR/owl2-syntax/).
///
/// Every entity must be declared before it is used unless
/// [`with_implicit_declarations`](Self::with_implicit_declarations) is set.
///
/// ```
/// use oxowlfn::{DeclarationKind, FunctionalSyntaxParser};
///
/// let file = "Prefix(:=<http://example.com/pizza#>)
/// Ontology(<http://example.com/pizza>
///     Declaration(Class(:Pizza))
///     Declaration(Class(:Food))
///     SubClassOf(:Pizza :Food)
/// )";
///
/// let parsed = FunctionalSyntaxParser::new().parse_str(file, "pizza.owl")?;
/// assert_eq!(parsed.ontology.iri().as_str(), "http://example.com/pizza");
/// assert_eq!(parsed.store.declaration_count(DeclarationKind::Class), 2);
/// assert_eq!(parsed.store.axioms().len(), 1);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Default, Clone)]
#[must_use]
pub struct FunctionalSyntaxParser {
    policy: DeclarationPolicy,
    token_log: bool,
    strict: bool,
    prefixes: Prefixes,
}

impl FunctionalSyntaxParser {
    /// Builds a new [`FunctionalSyntaxParser`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares entities on their first use instead of failing on them.
    #[inline]
    pub fn with_implicit_declarations(mut self) -> Self {
        self.policy = DeclarationPolicy::Implicit;
        self
    }

    /// Logs every token read with [`tracing`] at the trace level, target `oxowlfn::tokens`.
    #[inline]
    pub fn with_token_log(mut self) -> Self {
        self.token_log = true;
        self
    }

    /// Binds a prefix before the document is read.
    ///
    /// A `Prefix(...)` statement of the document may bind it again.
    #[inline]
    pub fn with_prefix(
        mut self,
        prefix_name: impl Into<String>,
        prefix_iri: impl Into<String>,
    ) -> Result<Self, IriParseError> {
        let prefix_iri = Iri::parse(prefix_iri.into())?;
        self.prefixes.insert(prefix_name, prefix_iri.into_inner());
        Ok(self)
    }

    /// Checks that IRIs written with `<...>` are valid absolute IRIs and that language tags are
    /// valid BCP47 tags.
    #[inline]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Parses a whole document from a [`Read`] implementation into a [`MemoryStore`].
    ///
    /// `source_name` is only used in error messages.
    ///
    /// On error, the ontology header and the store filled up to the error are returned with it.
    pub fn parse_read(
        &self,
        read: impl Read,
        source_name: impl Into<Arc<str>>,
    ) -> Result<ParsedOntology, PartialParseError<Box<PartialOntology>>> {
        let mut parser = TokenParser::new(read, source_name);
        let mut store = MemoryStore::new(self.policy);
        match self.parse_into(&mut parser, &mut store) {
            Ok(ontology) => {
                debug!("{}", ontology.summary(&store));
                Ok(ParsedOntology { ontology, store })
            }
            Err(error) => {
                let (ontology, error) = error.into_parts();
                Err(PartialParseError::new(
                    Box::new(PartialOntology { ontology, store }),
                    error,
                ))
            }
        }
    }

    /// Parses a whole document from a string into a [`MemoryStore`].
    ///
    /// ```
    /// use oxowlfn::FunctionalSyntaxParser;
    ///
    /// let error = FunctionalSyntaxParser::new()
    ///     .parse_str("X", "broken.owl")
    ///     .unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "unexpected IDENT(literal=X), need Prefix or Ontology in: broken.owl 1:1 at start of line"
    /// );
    /// assert!(error.partial().ontology.is_none());
    /// ```
    pub fn parse_str(
        &self,
        text: &str,
        source_name: impl Into<Arc<str>>,
    ) -> Result<ParsedOntology, PartialParseError<Box<PartialOntology>>> {
        self.parse_read(text.as_bytes(), source_name)
    }

    /// Parses a whole document with a given token stream into a given store.
    ///
    /// The declaration policy of this parser is not used: it is up to `store` to decide what
    /// an undeclared entity is.
    ///
    /// ```
    /// use oxowlfn::{
    ///     DeclarationKind, DeclarationPolicy, FunctionalSyntaxParser, MemoryStore, TokenParser,
    /// };
    ///
    /// let file = "Prefix(:=<http://example.com/pizza#>)
    /// Ontology(<http://example.com/pizza> SubClassOf(:Pizza :Food))";
    ///
    /// let mut parser = TokenParser::new(file.as_bytes(), "pizza.owl");
    /// let mut store = MemoryStore::new(DeclarationPolicy::Implicit);
    /// let ontology = FunctionalSyntaxParser::new().parse_into(&mut parser, &mut store)?;
    /// assert_eq!(ontology.iri().as_str(), "http://example.com/pizza");
    /// assert_eq!(store.implicit_declaration_count(DeclarationKind::Class), 2);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn parse_into<R: Read, S: OntologyStore + ?Sized>(
        &self,
        parser: &mut TokenParser<R>,
        store: &mut S,
    ) -> Result<Ontology, PartialParseError<Option<Ontology>>> {
        if self.token_log {
            parser.set_token_log(true);
        }
        let mut grammar = Grammar::new(
            parser,
            store,
            self.prefixes.clone(),
            GrammarOptions {
                strict: self.strict,
            },
        );
        let result = grammar.parse_document();
        let ontology = grammar.into_ontology();
        if let Some(error) = parser.take_io_error() {
            return Err(PartialParseError::new(ontology, error.into()));
        }
        match (result, ontology) {
            (Ok(()), Some(ontology)) => {
                debug!(
                    "parsed ontology {} from {} ({} lines)",
                    ontology.iri(),
                    parser.source_name(),
                    parser.line() + 1
                );
                Ok(ontology)
            }
            (Err(error), ontology) => Err(PartialParseError::new(
                ontology,
                OwlParseError::Syntax(error),
            )),
            (Ok(()), None) => Err(PartialParseError::new(
                None,
                OwlParseError::Syntax(OwlSyntaxError::new(
                    parser.position(),
                    "missing Ontology",
                )),
            )),
        }
    }
}

/// A successfully parsed document.
#[derive(Debug)]
pub struct ParsedOntology {
    pub ontology: Ontology,
    pub store: MemoryStore,
}

/// What has been read from a document before an error.
#[derive(Debug)]
pub struct PartialOntology {
    /// `None` if the error happened before the `Ontology(<iri>` header.
    pub ontology: Option<Ontology>,
    pub store: MemoryStore,
}
