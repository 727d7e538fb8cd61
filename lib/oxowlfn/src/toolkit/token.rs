use std::fmt;

macro_rules! tokens {
    (
        symbols { $($symbol:ident => $symbol_name:literal,)* }
        keywords { $($keyword:ident,)* }
    ) => {
        /// A token of the OWL 2 Functional-Style Syntax.
        ///
        /// Keywords are recognized by an exact match of an identifier against the keyword table.
        /// Identifiers that are not keywords become [`Token::Identifier`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Token {
            $($symbol,)*
            $($keyword,)*
        }

        impl Token {
            /// The name of the token, as used in error messages and in the token log.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$symbol => $symbol_name,)*
                    $(Self::$keyword => stringify!($keyword),)*
                }
            }

            /// Identifiers, keywords and booleans: tokens made of letters, digits and underscores.
            ///
            /// Any of them can be the local part of a prefixed name, e.g. `:Class`.
            pub fn is_word(self) -> bool {
                matches!(self, Self::Identifier | Self::True | Self::False $(| Self::$keyword)*)
            }

            /// Looks up a keyword by its exact spelling.
            pub fn keyword(identifier: &str) -> Option<Self> {
                match identifier {
                    "true" => Some(Self::True),
                    "false" => Some(Self::False),
                    $(stringify!($keyword) => Some(Self::$keyword),)*
                    _ => None,
                }
            }
        }
    };
}

tokens! {
    symbols {
        Illegal => "ILLEGAL",
        Eof => "EOF",
        Eol => "EOL",
        Whitespace => "WS",
        DoubleCircumflex => "DOUBLECIRCUM",
        True => "true",
        False => "false",
        StringLiteral => "STRINGLIT",
        IntegerLiteral => "INTLIT",
        FloatLiteral => "FLOATLIT",
        LineComment => "LINECOMMENT",
        Iri => "IRI",
        Identifier => "IDENT",
        At => "AT",
        Colon => "COLON",
        Equals => "EQUALS",
        Comma => "COMMA",
        OpenParen => "B1",
        CloseParen => "B2",
    }
    keywords {
        Annotation,
        AnnotationAssertion,
        AnnotationProperty,
        AnnotationPropertyDomain,
        AnnotationPropertyRange,
        AsymmetricObjectProperty,
        Class,
        ClassAssertion,
        DataAllValuesFrom,
        DataComplementOf,
        DataExactCardinality,
        DataHasValue,
        DataIntersectionOf,
        DataMaxCardinality,
        DataMinCardinality,
        DataOneOf,
        DataProperty,
        DataPropertyAssertion,
        DataPropertyDomain,
        DataPropertyRange,
        DataSomeValuesFrom,
        Datatype,
        DatatypeRestriction,
        DataUnionOf,
        Declaration,
        DifferentIndividuals,
        DisjointClasses,
        EquivalentClasses,
        FunctionalDataProperty,
        FunctionalObjectProperty,
        InverseFunctionalObjectProperty,
        InverseObjectProperties,
        IrreflexiveObjectProperty,
        NamedIndividual,
        NegativeObjectPropertyAssertion,
        ObjectAllValuesFrom,
        ObjectComplementOf,
        ObjectExactCardinality,
        ObjectHasSelf,
        ObjectHasValue,
        ObjectIntersectionOf,
        ObjectInverseOf,
        ObjectMaxCardinality,
        ObjectMinCardinality,
        ObjectOneOf,
        ObjectProperty,
        ObjectPropertyAssertion,
        ObjectPropertyDomain,
        ObjectPropertyRange,
        ObjectSomeValuesFrom,
        ObjectUnionOf,
        Ontology,
        Prefix,
        ReflexiveObjectProperty,
        SubClassOf,
        SubDataPropertyOf,
        SubObjectPropertyOf,
        SymmetricObjectProperty,
        TransitiveObjectProperty,
    }
}

impl Token {
    /// Whitespace, line ends and comments carry no grammar meaning.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Eol | Self::LineComment)
    }

    /// Tokens that may start a literal.
    #[inline]
    pub fn may_start_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral
                | Self::IntegerLiteral
                | Self::FloatLiteral
                | Self::True
                | Self::False
        )
    }

    /// Tokens that may start an identifier: `<iri>`, `prefix:name` or `:name`.
    #[inline]
    pub fn may_start_identifier(self) -> bool {
        matches!(self, Self::Iri | Self::Identifier | Self::Colon)
    }
}

impl fmt::Display for Token {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats a token and its literal for messages, hiding literals that add nothing.
pub fn describe(token: Token, literal: &str) -> String {
    match token {
        Token::Eof
        | Token::Eol
        | Token::Whitespace
        | Token::Colon
        | Token::Comma
        | Token::Equals
        | Token::OpenParen
        | Token::CloseParen => token.name().to_owned(),
        _ => format!("{} {literal}", token.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Token::keyword("SubClassOf"), Some(Token::SubClassOf));
        assert_eq!(Token::keyword("true"), Some(Token::True));
        assert_eq!(Token::keyword("subClassOf"), None);
        assert_eq!(Token::keyword("Pizza"), None);
    }

    #[test]
    fn test_is_word() {
        assert!(Token::Identifier.is_word());
        assert!(Token::Class.is_word());
        assert!(Token::False.is_word());
        assert!(!Token::Colon.is_word());
        assert!(!Token::IntegerLiteral.is_word());
    }

    #[test]
    fn test_names() {
        assert_eq!(Token::OpenParen.name(), "B1");
        assert_eq!(Token::ObjectInverseOf.to_string(), "ObjectInverseOf");
        assert_eq!(describe(Token::CloseParen, ")"), "B2");
        assert_eq!(describe(Token::Identifier, "Pizza"), "IDENT Pizza");
    }
}
