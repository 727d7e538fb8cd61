use crate::toolkit::error::OwlSyntaxError;
use crate::toolkit::lexer::Scanner;
use crate::toolkit::position::TextPosition;
use crate::toolkit::token::{Token, describe};
use std::io::{self, Read};
use std::sync::Arc;
use tracing::trace;

struct ScannedToken {
    token: Token,
    literal: String,
    position: TextPosition,
}

/// A token stream over a [`Scanner`] with a single token of lookahead.
///
/// It keeps track of the current line, of the text read since the start of that line and of the
/// parenthesis balance, the count of unmatched `(` minus `)` read so far.
///
/// ```
/// use oxowlfn::{Token, TokenParser};
///
/// let mut parser = TokenParser::new(b"Class( :Pizza )".as_slice(), "example");
/// parser.consume_tokens(&[Token::Class, Token::OpenParen])?;
/// assert_eq!(parser.balance(), 1);
/// let (token, _, _) = parser.peek();
/// assert_eq!(token, Token::Colon);
/// # Result::<_, oxowlfn::OwlSyntaxError>::Ok(())
/// ```
pub struct TokenParser<R: Read> {
    scanner: Scanner<R>,
    source_name: Arc<str>,
    line: usize,
    line_head: String,
    balance: isize,
    last: Option<ScannedToken>,
    pushed_back: bool,
    token_log: bool,
}

impl<R: Read> TokenParser<R> {
    /// Builds a token stream reading `read`.
    ///
    /// `source_name` is used in positions, e.g. a file name.
    pub fn new(read: R, source_name: impl Into<Arc<str>>) -> Self {
        Self {
            scanner: Scanner::new(read),
            source_name: source_name.into(),
            line: 0,
            line_head: String::new(),
            balance: 0,
            last: None,
            pushed_back: false,
            token_log: false,
        }
    }

    /// Emits every scanned, re-read and pushed back token as a `trace` event
    /// with the `oxowlfn::tokens` target.
    #[must_use]
    pub fn with_token_log(mut self) -> Self {
        self.token_log = true;
        self
    }

    #[inline]
    pub(crate) fn set_token_log(&mut self, token_log: bool) {
        self.token_log = token_log;
    }

    /// Reads the next token, including whitespace and comments.
    ///
    /// The returned position is the one just before the token.
    pub fn scan(&mut self) -> (Token, String, TextPosition) {
        if self.pushed_back {
            if let Some(last) = &self.last {
                let (token, literal, position) =
                    (last.token, last.literal.clone(), last.position.clone());
                self.pushed_back = false;
                self.forward(token, &literal);
                if self.token_log {
                    trace!(
                        target: "oxowlfn::tokens",
                        "re-read {} after {position} {{{}}}",
                        describe(token, &literal),
                        self.balance
                    );
                }
                return (token, literal, position);
            }
        }
        let position = self.position();
        let (token, literal) = self.scanner.scan();
        self.forward(token, &literal);
        self.last = Some(ScannedToken {
            token,
            literal: literal.clone(),
            position: position.clone(),
        });
        if self.token_log {
            let reached = self.position();
            trace!(
                target: "oxowlfn::tokens",
                "scanned {} reached {reached} {} {{{}}}",
                describe(token, &literal),
                reached.shortened_line_head(),
                self.balance
            );
        }
        (token, literal, position)
    }

    /// Pushes back the last read token.
    ///
    /// The position and the parenthesis balance go back to what they were before the token
    /// was read. At most one token is kept: calling it twice in a row has no more effect than
    /// calling it once.
    pub fn unscan(&mut self) {
        if self.pushed_back {
            return;
        }
        let Some(last) = &self.last else {
            return;
        };
        self.pushed_back = true;
        match last.token {
            Token::OpenParen => self.balance -= 1,
            Token::CloseParen => self.balance += 1,
            _ => (),
        }
        self.line = last.position.line();
        self.line_head.clear();
        self.line_head.push_str(last.position.line_head());
        if self.token_log {
            trace!(
                target: "oxowlfn::tokens",
                "unscanned -> {}",
                last.position.shortened_line_head()
            );
        }
    }

    /// Reads the next token that is not whitespace, a line end or a comment.
    pub fn scan_ignoring_trivia(&mut self) -> (Token, String, TextPosition) {
        loop {
            let scanned = self.scan();
            if !scanned.0.is_trivia() {
                return scanned;
            }
        }
    }

    /// Looks at the next token that is not whitespace, a line end or a comment,
    /// without consuming it.
    pub fn peek(&mut self) -> (Token, String, TextPosition) {
        let scanned = self.scan_ignoring_trivia();
        self.unscan();
        scanned
    }

    /// Reads the expected tokens in order, skipping whitespace and comments.
    ///
    /// Fails on the first token that does not match, at the position just before it.
    pub fn consume_tokens(&mut self, expected: &[Token]) -> Result<(), OwlSyntaxError> {
        for expected in expected {
            let (token, literal, position) = self.scan_ignoring_trivia();
            if token != *expected {
                let found = if literal.is_empty() {
                    token.name()
                } else {
                    literal.as_str()
                };
                return Err(OwlSyntaxError::new(
                    position,
                    format!("expected token \"{}\", found {found}", expected.name()),
                ));
            }
        }
        Ok(())
    }

    /// A snapshot of the current read head.
    pub fn position(&self) -> TextPosition {
        TextPosition::new(
            self.line,
            self.line_head.as_str(),
            Arc::clone(&self.source_name),
        )
    }

    /// The count of unmatched `(` minus `)` read so far.
    #[inline]
    pub fn balance(&self) -> isize {
        self.balance
    }

    /// The current line, starting from 0.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the I/O error that ended the input early, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.scanner.take_error()
    }

    fn forward(&mut self, token: Token, literal: &str) {
        match token {
            Token::Eol => {
                self.line += 1;
                self.line_head.clear();
                return;
            }
            Token::OpenParen => self.balance += 1,
            Token::CloseParen => self.balance -= 1,
            _ => (),
        }
        self.line_head.push_str(literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(input: &str) -> TokenParser<&[u8]> {
        TokenParser::new(input.as_bytes(), "test")
    }

    #[test]
    fn test_balance() {
        let mut p = parser("( ( ) )");
        assert_eq!(p.scan_ignoring_trivia().0, Token::OpenParen);
        assert_eq!(p.scan_ignoring_trivia().0, Token::OpenParen);
        assert_eq!(p.balance(), 2);
        assert_eq!(p.scan_ignoring_trivia().0, Token::CloseParen);
        assert_eq!(p.balance(), 1);
        assert_eq!(p.scan_ignoring_trivia().0, Token::CloseParen);
        assert_eq!(p.balance(), 0);
        assert_eq!(p.scan_ignoring_trivia().0, Token::Eof);
    }

    #[test]
    fn test_unscan_restores_and_rescan_reapplies_balance() {
        let mut p = parser("Class(:A)");
        p.consume_tokens(&[Token::Class]).unwrap();
        let (token, _, _) = p.scan();
        assert_eq!(token, Token::OpenParen);
        assert_eq!(p.balance(), 1);
        p.unscan();
        assert_eq!(p.balance(), 0);
        assert_eq!(p.position().line_head(), "Class");
        let (token, literal, position) = p.scan();
        assert_eq!((token, literal.as_str()), (Token::OpenParen, "("));
        assert_eq!(position.line_head(), "Class");
        assert_eq!(p.balance(), 1);
        assert_eq!(p.position().line_head(), "Class(");
    }

    #[test]
    fn test_double_unscan_is_single() {
        let mut p = parser("(x");
        p.scan();
        p.unscan();
        p.unscan();
        assert_eq!(p.balance(), 0);
        assert_eq!(p.scan().0, Token::OpenParen);
        assert_eq!(p.scan().0, Token::Identifier);
    }

    #[test]
    fn test_unscan_across_line_end() {
        let mut p = parser("A\nB");
        p.scan();
        p.scan();
        assert_eq!(p.line(), 1);
        p.unscan();
        assert_eq!(p.line(), 0);
        assert_eq!(p.position().line_head(), "A");
        assert_eq!(p.scan_ignoring_trivia().1, "B");
        assert_eq!(p.line(), 1);
    }

    #[test]
    fn test_peek() {
        let mut p = parser("  # comment\n  SubClassOf");
        let (token, _, position) = p.peek();
        assert_eq!(token, Token::SubClassOf);
        assert_eq!(position.line(), 1);
        assert_eq!(position.line_head(), "  ");
        assert_eq!(p.scan_ignoring_trivia().0, Token::SubClassOf);
    }

    #[test]
    fn test_consume_tokens_error_position() {
        let mut p = parser("Declaration( Klass");
        let error = p
            .consume_tokens(&[Token::Declaration, Token::OpenParen, Token::Class])
            .unwrap_err();
        assert_eq!(error.message(), "expected token \"Class\", found Klass");
        assert_eq!(error.position().column(), 14);
        assert_eq!(error.position().line_head(), "Declaration( ");
    }

    #[test]
    fn test_consume_tokens_at_end() {
        let mut p = parser("");
        let error = p.consume_tokens(&[Token::CloseParen]).unwrap_err();
        assert_eq!(error.message(), "expected token \"B2\", found EOF");
    }

    #[test]
    fn test_token_log_does_not_change_tokens() {
        let mut p = parser("(a)").with_token_log();
        assert_eq!(p.scan().0, Token::OpenParen);
        p.unscan();
        assert_eq!(p.scan().0, Token::OpenParen);
        assert_eq!(p.scan().0, Token::Identifier);
    }
}
