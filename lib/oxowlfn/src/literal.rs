use oxrdf::vocab::rdf;
use oxrdf::{NamedNode, NamedNodeRef};
use std::fmt::{self, Write};

/// The lexical shape of a literal value: what the datatypes built into OWL expect
/// and what the scanner read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Float,
    String,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        })
    }
}

/// A literal with its resolved datatype IRI and an optional language tag.
///
/// The value is kept as written, e.g. `"099"^^xsd:positiveInteger` keeps the value `099`.
/// Language tags are only found on string literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwlLiteral {
    value: String,
    datatype: NamedNode,
    language: Option<String>,
}

impl OwlLiteral {
    pub fn new(
        value: impl Into<String>,
        datatype: impl Into<NamedNode>,
        language: Option<String>,
    ) -> Self {
        Self {
            value: value.into(),
            datatype: datatype.into(),
            language,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn datatype(&self) -> NamedNodeRef<'_> {
        self.datatype.as_ref()
    }

    #[inline]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for OwlLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.value.chars() {
            if matches!(c, '"' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
            if self.datatype.as_ref() == rdf::LANG_STRING {
                return Ok(());
            }
        }
        write!(f, "^^{}", self.datatype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;

    #[test]
    fn test_display() {
        assert_eq!(
            OwlLiteral::new("099", xsd::POSITIVE_INTEGER, None).to_string(),
            "\"099\"^^<http://www.w3.org/2001/XMLSchema#positiveInteger>"
        );
        assert_eq!(
            OwlLiteral::new("Pizza", xsd::STRING, Some("en".into())).to_string(),
            "\"Pizza\"@en^^<http://www.w3.org/2001/XMLSchema#string>"
        );
        assert_eq!(
            OwlLiteral::new("Pizza", rdf::LANG_STRING, Some("en".into())).to_string(),
            "\"Pizza\"@en"
        );
    }

    #[test]
    fn test_display_escapes_quotes_and_backslashes() {
        assert_eq!(
            OwlLiteral::new(r#"C:\ "x""#, xsd::STRING, None).to_string(),
            r#""C:\\ \"x\""^^<http://www.w3.org/2001/XMLSchema#string>"#
        );
    }
}
