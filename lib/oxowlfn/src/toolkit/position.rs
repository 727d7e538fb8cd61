use std::fmt;
use std::sync::Arc;

const LINE_HEAD_CONTEXT: usize = 20;

/// A snapshot of the read head inside of a document.
///
/// It is composed of a `line` number starting from 0, the text read since the start of that line
/// (the "line head") and the name of the parsed source.
/// Positions are plain values: a position taken while parsing keeps reporting the same place
/// whatever the parser does afterwards.
/// The source name is a shared `Arc<str>`: clones of a position point to the same name.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TextPosition {
    line: usize,
    line_head: String,
    source_name: Arc<str>,
}

impl TextPosition {
    pub(crate) fn new(line: usize, line_head: impl Into<String>, source_name: Arc<str>) -> Self {
        Self {
            line,
            line_head: line_head.into(),
            source_name,
        }
    }

    /// The line number, starting from 0.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The column number, starting from 1, in code points.
    #[inline]
    pub fn column(&self) -> usize {
        self.line_head.chars().count() + 1
    }

    /// The column number, starting from 1, counting each tab as `tab_size` columns.
    pub fn column_with_tab_size(&self, tab_size: usize) -> usize {
        let tabs = self.line_head.matches('\t').count();
        (self.column() + tabs * tab_size).saturating_sub(tabs)
    }

    /// All the text read on this line before the position.
    #[inline]
    pub fn line_head(&self) -> &str {
        &self.line_head
    }

    /// The name of the parsed source, e.g. a file name.
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Describes the end of the line head for error messages: `after '...<last characters>'`.
    pub fn shortened_line_head(&self) -> String {
        if self.line_head.is_empty() {
            return "at start of line".into();
        }
        let length = self.line_head.chars().count();
        if length > LINE_HEAD_CONTEXT {
            let tail = self
                .line_head
                .chars()
                .skip(length - LINE_HEAD_CONTEXT)
                .collect::<String>();
            format!("after '...{tail}'")
        } else {
            format!("after '{}'", self.line_head)
        }
    }
}

impl fmt::Display for TextPosition {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}",
            self.source_name,
            self.line + 1,
            self.column()
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::non_ascii_literal)]

    use super::*;

    fn position(line_head: &str) -> TextPosition {
        TextPosition::new(0, line_head, "test".into())
    }

    #[test]
    fn test_column() {
        assert_eq!(position("").column(), 1);
        assert_eq!(position("xäö").column(), 4);
    }

    #[test]
    fn test_column_with_tab_size() {
        assert_eq!(position("").column_with_tab_size(4), 1);
        assert_eq!(position("xäö").column_with_tab_size(0), 4);
        assert_eq!(position("\tx\täö\t").column_with_tab_size(1), 7);
        assert_eq!(position("\tx\täö\t").column_with_tab_size(4), 16);
    }

    #[test]
    fn test_shortened_line_head() {
        assert_eq!(position("").shortened_line_head(), "at start of line");
        assert_eq!(
            position("Prefix(:=<urn:x#>)").shortened_line_head(),
            "after 'Prefix(:=<urn:x#>)'"
        );
        assert_eq!(
            position("SubClassOf(:AmericanHotPizza :CheesyPizza").shortened_line_head(),
            "after '...otPizza :CheesyPizza'"
        );
        assert_eq!(
            position("ääääääääääääääääääääääää").shortened_line_head(),
            "after '...ääääääääääääääääääää'"
        );
    }

    #[test]
    fn test_display() {
        let position = TextPosition::new(1, "Class(", "pizza.ofn".into());
        assert_eq!(position.to_string(), "pizza.ofn 2:7");
    }
}
