//! Recursive descent over the token stream.
//!
//! Each nonterminal is a method of [`Grammar`]. The methods look at the next token with
//! [`TokenParser::peek`], consume exactly the tokens of their construct, closing parenthesis
//! included, and leave the following token unread.

mod axioms;
mod class_expressions;
mod data_ranges;
mod document;
mod properties;
mod resolve;

use crate::ontology::Ontology;
use crate::prefixes::Prefixes;
use crate::toolkit::{OwlSyntaxError, TextPosition, Token, TokenParser, describe};
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;
use std::io::Read;

type GrammarResult<T> = Result<T, OwlSyntaxError>;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GrammarOptions {
    /// Validates bracketed IRIs and language tags.
    pub strict: bool,
}

pub(crate) struct Grammar<'a, R: Read, S: ?Sized> {
    parser: &'a mut TokenParser<R>,
    store: &'a mut S,
    prefixes: Prefixes,
    document_prefixes: FxHashSet<String>,
    header: Option<(NamedNode, Option<NamedNode>)>,
    options: GrammarOptions,
}

impl<'a, R: Read, S: ?Sized> Grammar<'a, R, S> {
    pub fn new(
        parser: &'a mut TokenParser<R>,
        store: &'a mut S,
        prefixes: Prefixes,
        options: GrammarOptions,
    ) -> Self {
        Self {
            parser,
            store,
            prefixes,
            document_prefixes: FxHashSet::default(),
            header: None,
            options,
        }
    }

    /// Runs `parse` until the next token is a closing parenthesis, which is not consumed.
    fn parse_until_close<T>(
        &mut self,
        mut parse: impl FnMut(&mut Self) -> GrammarResult<T>,
    ) -> GrammarResult<Vec<T>> {
        let mut items = Vec::new();
        loop {
            match self.parser.peek().0 {
                Token::CloseParen => return Ok(items),
                Token::Eof => {
                    let (token, literal, position) = self.parser.peek();
                    return Err(unexpected_token(position, token, &literal, "B2"));
                }
                _ => items.push(parse(self)?),
            }
        }
    }

    /// The ontology header if it has been read, even if the body has not been fully read.
    pub fn into_ontology(self) -> Option<Ontology> {
        let (iri, version_iri) = self.header?;
        Some(Ontology::new(iri, version_iri, self.prefixes))
    }
}

fn unexpected_token(
    position: TextPosition,
    token: Token,
    literal: &str,
    need: &str,
) -> OwlSyntaxError {
    OwlSyntaxError::new(
        position,
        format!("unexpected {}(literal={literal}), need {need}", token.name()),
    )
}

/// `unexpected {token}, {need}`
fn unexpected(position: TextPosition, token: Token, literal: &str, need: &str) -> OwlSyntaxError {
    OwlSyntaxError::new(
        position,
        format!("unexpected {}, {need}", describe(token, literal).trim_end()),
    )
}

/// `first`, `second`, `third` then `4th`, `5th`...
fn ordinal(index: usize) -> String {
    match index {
        0 => "first".into(),
        1 => "second".into(),
        2 => "third".into(),
        _ => format!("{}th", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(0), "first");
        assert_eq!(ordinal(2), "third");
        assert_eq!(ordinal(3), "4th");
    }
}
