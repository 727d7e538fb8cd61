use crate::toolkit::position::TextPosition;
use std::error::Error;
use std::{fmt, io};

/// An error in the syntax of the parsed document, or a reference it makes that can not be resolved.
///
/// It is composed of a message and the position after which the problem has been found.
/// It is displayed as `<message> in: <source> <line>:<column> <context>`.
/// Cloning it copies the message and the line head and shares the source name.
#[derive(Debug, Clone, thiserror::Error)]
pub struct OwlSyntaxError {
    message: String,
    position: TextPosition,
}

impl OwlSyntaxError {
    pub(crate) fn new(position: TextPosition, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// The error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The position of the error inside of the document.
    #[inline]
    pub fn position(&self) -> &TextPosition {
        &self.position
    }

    /// Prefixes the message with the name of an enclosing construct.
    ///
    /// The position is kept: it still points to where parsing actually failed.
    #[must_use]
    pub fn enrich(mut self, context: impl fmt::Display) -> Self {
        self.message = format!("{context}:{}", self.message);
        self
    }
}

impl fmt::Display for OwlSyntaxError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in: {} {}:{} {}",
            self.message,
            self.position.source_name(),
            self.position.line() + 1,
            self.position.column(),
            self.position.shortened_line_head()
        )
    }
}

impl From<OwlSyntaxError> for io::Error {
    #[inline]
    fn from(error: OwlSyntaxError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

/// A parsing error.
///
/// It is the union of [`OwlSyntaxError`] and [`io::Error`].
#[derive(Debug, thiserror::Error)]
pub enum OwlParseError {
    /// I/O error during parsing (file not found, invalid UTF-8...).
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error in the document syntax or in the references it makes.
    #[error(transparent)]
    Syntax(#[from] OwlSyntaxError),
}

impl OwlParseError {
    /// Prefixes the message of a syntax error with the name of an enclosing construct.
    #[must_use]
    pub fn enrich(self, context: impl fmt::Display) -> Self {
        match self {
            Self::Syntax(e) => Self::Syntax(e.enrich(context)),
            Self::Io(e) => Self::Io(e),
        }
    }
}

impl From<OwlParseError> for io::Error {
    #[inline]
    fn from(error: OwlParseError) -> Self {
        match error {
            OwlParseError::Syntax(e) => e.into(),
            OwlParseError::Io(e) => e,
        }
    }
}

/// A parsing error returned together with what has been built before the error occurred.
///
/// Declarations and axioms read before the failure stay available, e.g. for diagnostics.
#[derive(Debug)]
pub struct PartialParseError<T> {
    partial: T,
    error: OwlParseError,
}

impl<T> PartialParseError<T> {
    pub(crate) fn new(partial: T, error: OwlParseError) -> Self {
        Self { partial, error }
    }

    /// What has been parsed before the error.
    #[inline]
    pub fn partial(&self) -> &T {
        &self.partial
    }

    #[inline]
    pub fn into_partial(self) -> T {
        self.partial
    }

    /// The error that stopped the parsing.
    #[inline]
    pub fn error(&self) -> &OwlParseError {
        &self.error
    }

    #[inline]
    pub fn into_error(self) -> OwlParseError {
        self.error
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (T, OwlParseError) {
        (self.partial, self.error)
    }
}

impl<T> fmt::Display for PartialParseError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<T: fmt::Debug> Error for PartialParseError<T> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PartialParseError<T>> for io::Error {
    #[inline]
    fn from(error: PartialParseError<T>) -> Self {
        error.error.into()
    }
}
