use crate::toolkit::token::Token;
use std::io::{self, BufReader, Bytes, Read};
use std::str;

/// Converts a character stream into `(token, literal)` pairs.
///
/// The scanner has no grammar knowledge and never fails: input it does not recognize is returned
/// as [`Token::Illegal`]. I/O errors and invalid UTF-8 end the token stream with [`Token::Eof`]
/// and are kept until [`Scanner::take_error`] is called.
pub struct Scanner<R: Read> {
    input: Bytes<BufReader<R>>,
    last: Option<char>,
    pushed_back: Option<Option<char>>,
    error: Option<io::Error>,
    done: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(read: R) -> Self {
        Self {
            input: BufReader::new(read).bytes(),
            last: None,
            pushed_back: None,
            error: None,
            done: false,
        }
    }

    /// Returns the I/O error that stopped the input, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn scan(&mut self) -> (Token, String) {
        let Some(c) = self.read() else {
            return (Token::Eof, String::new());
        };
        match c {
            ' ' | '\t' => {
                self.unread();
                self.scan_whitespace()
            }
            '\n' | '\r' => {
                self.unread();
                self.scan_eol()
            }
            '"' => self.scan_string_literal(),
            '#' => {
                self.unread();
                self.scan_line_comment()
            }
            '^' => self.scan_double_circumflex(),
            '<' => {
                self.unread();
                self.scan_iri()
            }
            '+' | '-' | '0'..='9' => {
                self.unread();
                self.scan_number()
            }
            c if c.is_alphabetic() || c == '_' => {
                self.unread();
                self.scan_identifier()
            }
            ':' => (Token::Colon, c.into()),
            '=' => (Token::Equals, c.into()),
            ',' => (Token::Comma, c.into()),
            '(' => (Token::OpenParen, c.into()),
            ')' => (Token::CloseParen, c.into()),
            '@' => (Token::At, c.into()),
            c => (Token::Illegal, c.into()),
        }
    }

    fn scan_whitespace(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        while let Some(c) = self.read() {
            if c != ' ' && c != '\t' {
                self.unread();
                break;
            }
            buffer.push(c);
        }
        (Token::Whitespace, buffer)
    }

    /// `\n`, `\r` and `\r\n` are a single line end.
    fn scan_eol(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        match self.read() {
            Some('\n') => buffer.push('\n'),
            Some('\r') => {
                buffer.push('\r');
                if self.read() == Some('\n') {
                    buffer.push('\n');
                } else {
                    self.unread();
                }
            }
            _ => self.unread(),
        }
        (Token::Eol, buffer)
    }

    /// The literal excludes the delimiting quotes and keeps escape sequences as written.
    /// A backslash escapes the character after it, so `\"` does not end the string.
    fn scan_string_literal(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        let mut escaped = false;
        loop {
            let Some(c) = self.read() else {
                self.unread();
                break;
            };
            if c == '"' && !escaped {
                break;
            }
            escaped = c == '\\' && !escaped;
            buffer.push(c);
        }
        (Token::StringLiteral, buffer)
    }

    /// From `#` up to the line end, which is not consumed.
    fn scan_line_comment(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        while let Some(c) = self.read() {
            if c == '\n' || c == '\r' {
                self.unread();
                break;
            }
            buffer.push(c);
        }
        (Token::LineComment, buffer)
    }

    fn scan_double_circumflex(&mut self) -> (Token, String) {
        if self.read() == Some('^') {
            (Token::DoubleCircumflex, "^^".into())
        } else {
            self.unread();
            (Token::Illegal, "^".into())
        }
    }

    /// The literal keeps the angle brackets. A line or file end stops an unterminated IRI.
    fn scan_iri(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        while let Some(c) = self.read() {
            if c == '\n' || c == '\r' {
                self.unread();
                break;
            }
            buffer.push(c);
            if c == '>' {
                break;
            }
        }
        (Token::Iri, buffer)
    }

    fn scan_identifier(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        while let Some(c) = self.read() {
            if !c.is_alphanumeric() && c != '_' {
                self.unread();
                break;
            }
            buffer.push(c);
        }
        let token = Token::keyword(&buffer).unwrap_or(Token::Identifier);
        (token, buffer)
    }

    /// An optional sign then digits and dots, classified by trying an integer then a float parse.
    fn scan_number(&mut self) -> (Token, String) {
        let mut buffer = String::new();
        if let Some(c) = self.read() {
            buffer.push(c);
        }
        while let Some(c) = self.read() {
            if !c.is_ascii_digit() && c != '.' {
                self.unread();
                break;
            }
            buffer.push(c);
        }
        let token = if buffer.parse::<i64>().is_ok() {
            Token::IntegerLiteral
        } else if buffer.parse::<f64>().is_ok() {
            Token::FloatLiteral
        } else {
            Token::Illegal
        };
        (token, buffer)
    }

    fn read(&mut self) -> Option<char> {
        let c = match self.pushed_back.take() {
            Some(c) => c,
            None => self.decode_char(),
        };
        self.last = c;
        c
    }

    /// Pushes back the last read character, including the end of input.
    fn unread(&mut self) {
        self.pushed_back = Some(self.last);
    }

    fn decode_char(&mut self) -> Option<char> {
        let first = self.next_byte()?;
        let width = match first {
            0x00..=0x7F => return Some(char::from(first)),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return self.invalid_utf8(),
        };
        let mut bytes = [first, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            let Some(byte) = self.next_byte() else {
                return self.invalid_utf8();
            };
            *slot = byte;
        }
        match str::from_utf8(&bytes[..width]) {
            Ok(decoded) => decoded.chars().next(),
            Err(_) => self.invalid_utf8(),
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        match self.input.next() {
            Some(Ok(byte)) => Some(byte),
            Some(Err(e)) => {
                self.error = Some(e);
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn invalid_utf8(&mut self) -> Option<char> {
        if self.error.is_none() {
            self.error = Some(io::Error::new(
                io::ErrorKind::InvalidData,
                "the input is not valid UTF-8",
            ));
        }
        self.done = true;
        None
    }
}
