use crate::expression::{DataPropertyExpression, ObjectPropertyExpression};
use crate::grammar::{Grammar, GrammarResult};
use crate::store::OntologyStore;
use crate::toolkit::{OwlSyntaxError, Token};
use crate::vocab::{owl, owl_local_name};
use std::io::Read;

impl<R: Read, S: OntologyStore + ?Sized> Grammar<'_, R, S> {
    /// `owl:topObjectProperty`, `owl:bottomObjectProperty`, `ObjectInverseOf(P)` or a declared
    /// object property.
    pub(super) fn parse_object_property_expression(
        &mut self,
    ) -> GrammarResult<ObjectPropertyExpression> {
        if self.parser.peek().0 == Token::ObjectInverseOf {
            self.parser
                .consume_tokens(&[Token::ObjectInverseOf, Token::OpenParen])?;
            let property = match self.parse_object_property_expression()? {
                ObjectPropertyExpression::ObjectProperty(property) => property,
                _ => {
                    return Err(OwlSyntaxError::new(
                        self.parser.position(),
                        "ObjectInverseOf needs a named object property",
                    ));
                }
            };
            self.parser.consume_tokens(&[Token::CloseParen])?;
            return Ok(ObjectPropertyExpression::ObjectInverseOf(property));
        }
        let (iri, position) = self.parse_iri()?;
        if iri.as_ref() == owl::TOP_OBJECT_PROPERTY {
            return Ok(ObjectPropertyExpression::TopObjectProperty);
        }
        if iri.as_ref() == owl::BOTTOM_OBJECT_PROPERTY {
            return Ok(ObjectPropertyExpression::BottomObjectProperty);
        }
        if let Some(name) = owl_local_name(iri.as_str()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("unexpected OWL property \"{name}\""),
            ));
        }
        match self.store.object_property(&iri) {
            Some(property) => Ok(property.into()),
            None => Err(OwlSyntaxError::new(
                position,
                format!("Unknown ref to {iri}. Expected object property name."),
            )),
        }
    }

    /// `owl:topDataProperty`, `owl:bottomDataProperty` or a declared data property.
    pub(super) fn parse_data_property_expression(
        &mut self,
    ) -> GrammarResult<DataPropertyExpression> {
        let (iri, position) = self.parse_iri()?;
        if iri.as_ref() == owl::TOP_DATA_PROPERTY {
            return Ok(DataPropertyExpression::TopDataProperty);
        }
        if iri.as_ref() == owl::BOTTOM_DATA_PROPERTY {
            return Ok(DataPropertyExpression::BottomDataProperty);
        }
        if let Some(name) = owl_local_name(iri.as_str()) {
            return Err(OwlSyntaxError::new(
                position,
                format!("unexpected OWL property \"{name}\""),
            ));
        }
        match self.store.data_property(&iri) {
            Some(property) => Ok(property.into()),
            None => Err(OwlSyntaxError::new(
                position,
                format!("Unknown ref to {iri}. Expected datatype property."),
            )),
        }
    }
}
