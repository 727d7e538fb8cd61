//! Reading of the Functional-Style Syntax at the token level: scanner, positions, errors and a
//! token stream with one token of lookahead.

mod error;
mod lexer;
mod parser;
mod position;
mod token;

pub use self::error::{OwlParseError, OwlSyntaxError, PartialParseError};
pub use self::lexer::Scanner;
pub use self::parser::TokenParser;
pub use self::position::TextPosition;
pub use self::token::Token;
pub(crate) use self::token::describe;
