use crate::axiom::{AnnotatedAxiom, Annotation, Axiom};
use crate::entity::{Declaration, DeclarationKind};
use crate::expression::{DataPropertyExpression, ObjectPropertyExpression};
use crate::store::{AxiomStore, DeclarationStore, Declarations};
use oxrdf::NamedNode;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use tracing::debug;

/// What happens when an axiom references an entity that has not been declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeclarationPolicy {
    /// The reference is an error.
    #[default]
    Explicit,
    /// A declaration of the expected kind is created on first use.
    Implicit,
}

/// Characteristics set on a property by axioms such as `FunctionalObjectProperty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertyCharacteristics(u8);

impl PropertyCharacteristics {
    pub const FUNCTIONAL: Self = Self(1);
    pub const INVERSE_FUNCTIONAL: Self = Self(1 << 1);
    pub const REFLEXIVE: Self = Self(1 << 2);
    pub const IRREFLEXIVE: Self = Self(1 << 3);
    pub const SYMMETRIC: Self = Self(1 << 4);
    pub const ASYMMETRIC: Self = Self(1 << 5);
    pub const TRANSITIVE: Self = Self(1 << 6);
    /// The property is one side of an `InverseObjectProperties` axiom.
    pub const HAS_INVERSE: Self = Self(1 << 7);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The characteristics of `P` implied by the same characteristics on `ObjectInverseOf(P)`.
    ///
    /// Functional and inverse functional are swapped. The others are kept.
    #[must_use]
    pub fn inverse(self) -> Self {
        let mut inverse = Self(self.0 & !(Self::FUNCTIONAL.0 | Self::INVERSE_FUNCTIONAL.0));
        if self.contains(Self::FUNCTIONAL) {
            inverse.insert(Self::INVERSE_FUNCTIONAL);
        }
        if self.contains(Self::INVERSE_FUNCTIONAL) {
            inverse.insert(Self::FUNCTIONAL);
        }
        inverse
    }
}

#[derive(Debug, Default, Clone)]
struct DeclarationBuckets {
    explicit: FxHashSet<NamedNode>,
    implicit: FxHashSet<NamedNode>,
}

impl DeclarationBuckets {
    fn contains(&self, iri: &NamedNode) -> bool {
        self.explicit.contains(iri) || self.implicit.contains(iri)
    }

    fn len(&self) -> usize {
        self.explicit.len() + self.implicit.len()
    }
}

/// An in-memory store of declarations and axioms.
///
/// Declarations are kept in two buckets per kind: the explicit one for `Declaration(...)`
/// statements and the implicit one for entities created on first use with
/// [`DeclarationPolicy::Implicit`]. An explicit declaration of an implicitly declared entity
/// moves it to the explicit bucket, so that each entity is listed once.
///
/// ```
/// use oxowlfn::{DeclarationKind, DeclarationPolicy, Declarations, MemoryStore};
/// use oxrdf::NamedNode;
///
/// let mut store = MemoryStore::new(DeclarationPolicy::Implicit);
/// let pizza = NamedNode::new_unchecked("http://test.de/pizza#Pizza");
/// assert!(store.class(&pizza).is_some());
/// assert!(store.is_implicitly_declared(DeclarationKind::Class, &pizza));
/// assert_eq!(store.declaration_count(DeclarationKind::Class), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    policy: DeclarationPolicy,
    declarations: FxHashMap<DeclarationKind, DeclarationBuckets>,
    declaration_annotations: Vec<(Declaration, Vec<Annotation>)>,
    characteristics: FxHashMap<NamedNode, PropertyCharacteristics>,
    axioms: Vec<AnnotatedAxiom>,
}

impl MemoryStore {
    pub fn new(policy: DeclarationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    pub fn policy(&self) -> DeclarationPolicy {
        self.policy
    }

    /// All the entities of a kind, explicitly or implicitly declared, sorted by IRI.
    pub fn declarations(&self, kind: DeclarationKind) -> Vec<Declaration> {
        let Some(buckets) = self.declarations.get(&kind) else {
            return Vec::new();
        };
        let mut iris = buckets
            .explicit
            .iter()
            .chain(&buckets.implicit)
            .collect::<Vec<_>>();
        iris.sort_unstable();
        iris.into_iter()
            .map(|iri| Declaration::new(kind, iri.clone()))
            .collect()
    }

    pub fn declaration_count(&self, kind: DeclarationKind) -> usize {
        self.declarations.get(&kind).map_or(0, DeclarationBuckets::len)
    }

    pub fn explicit_declaration_count(&self, kind: DeclarationKind) -> usize {
        self.declarations.get(&kind).map_or(0, |b| b.explicit.len())
    }

    pub fn implicit_declaration_count(&self, kind: DeclarationKind) -> usize {
        self.declarations.get(&kind).map_or(0, |b| b.implicit.len())
    }

    pub fn is_explicitly_declared(&self, kind: DeclarationKind, iri: &NamedNode) -> bool {
        self.declarations
            .get(&kind)
            .is_some_and(|b| b.explicit.contains(iri))
    }

    pub fn is_implicitly_declared(&self, kind: DeclarationKind, iri: &NamedNode) -> bool {
        self.declarations
            .get(&kind)
            .is_some_and(|b| b.implicit.contains(iri))
    }

    /// Annotations written inside of `Declaration(...)` statements.
    #[inline]
    pub fn declaration_annotations(&self) -> &[(Declaration, Vec<Annotation>)] {
        &self.declaration_annotations
    }

    /// The characteristics set on an object or data property by the axioms read so far.
    pub fn characteristics(&self, property: &NamedNode) -> PropertyCharacteristics {
        self.characteristics
            .get(property)
            .copied()
            .unwrap_or_default()
    }

    /// The axioms in reading order.
    #[inline]
    pub fn axioms(&self) -> &[AnnotatedAxiom] {
        &self.axioms
    }

    fn set_object_characteristic(
        &mut self,
        property: &ObjectPropertyExpression,
        characteristic: PropertyCharacteristics,
    ) {
        let (property, characteristic) = match property {
            ObjectPropertyExpression::ObjectProperty(p) => (p, characteristic),
            ObjectPropertyExpression::ObjectInverseOf(p) => (p, characteristic.inverse()),
            ObjectPropertyExpression::TopObjectProperty
            | ObjectPropertyExpression::BottomObjectProperty => return,
        };
        self.characteristics
            .entry(property.iri().clone())
            .or_default()
            .insert(characteristic);
    }

    fn set_data_characteristic(
        &mut self,
        property: &DataPropertyExpression,
        characteristic: PropertyCharacteristics,
    ) {
        if let Some(property) = property.named_property() {
            self.characteristics
                .entry(property.iri().clone())
                .or_default()
                .insert(characteristic);
        }
    }
}

impl Declarations for MemoryStore {
    fn declaration(&mut self, kind: DeclarationKind, iri: &NamedNode) -> Option<Declaration> {
        let buckets = self.declarations.entry(kind).or_default();
        if buckets.contains(iri) {
            return Some(Declaration::new(kind, iri.clone()));
        }
        match self.policy {
            DeclarationPolicy::Explicit => None,
            DeclarationPolicy::Implicit => {
                debug!("implicit declaration of {kind} {iri}");
                buckets.implicit.insert(iri.clone());
                Some(Declaration::new(kind, iri.clone()))
            }
        }
    }
}

impl DeclarationStore for MemoryStore {
    fn store_declaration(
        &mut self,
        declaration: Declaration,
        annotations: Vec<Annotation>,
    ) -> bool {
        let buckets = self.declarations.entry(declaration.kind()).or_default();
        if buckets.explicit.contains(declaration.iri()) {
            return false;
        }
        if buckets.implicit.remove(declaration.iri()) {
            debug!(
                "{} {} was used before its declaration",
                declaration.kind(),
                declaration.iri()
            );
        }
        buckets.explicit.insert(declaration.iri().clone());
        if !annotations.is_empty() {
            self.declaration_annotations.push((declaration, annotations));
        }
        true
    }
}

impl AxiomStore for MemoryStore {
    fn store_axiom(&mut self, axiom: Axiom, annotations: Vec<Annotation>) {
        match &axiom {
            Axiom::FunctionalObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::FUNCTIONAL);
            }
            Axiom::InverseFunctionalObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::INVERSE_FUNCTIONAL);
            }
            Axiom::ReflexiveObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::REFLEXIVE);
            }
            Axiom::IrreflexiveObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::IRREFLEXIVE);
            }
            Axiom::SymmetricObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::SYMMETRIC);
            }
            Axiom::AsymmetricObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::ASYMMETRIC);
            }
            Axiom::TransitiveObjectProperty(p) => {
                self.set_object_characteristic(p, PropertyCharacteristics::TRANSITIVE);
            }
            Axiom::InverseObjectProperties(first, second) => {
                self.set_object_characteristic(first, PropertyCharacteristics::HAS_INVERSE);
                self.set_object_characteristic(second, PropertyCharacteristics::HAS_INVERSE);
            }
            Axiom::FunctionalDataProperty(p) => {
                self.set_data_characteristic(p, PropertyCharacteristics::FUNCTIONAL);
            }
            _ => (),
        }
        self.axioms.push(AnnotatedAxiom { axiom, annotations });
    }
}

impl fmt::Display for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} annotation properties, {} classes, {} object properties, {} data properties, {} named individuals, {} datatypes",
            self.declaration_count(DeclarationKind::AnnotationProperty),
            self.declaration_count(DeclarationKind::Class),
            self.declaration_count(DeclarationKind::ObjectProperty),
            self.declaration_count(DeclarationKind::DataProperty),
            self.declaration_count(DeclarationKind::NamedIndividual),
            self.declaration_count(DeclarationKind::Datatype),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ObjectProperty;

    fn iri(local_name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://test.de/pizza#{local_name}"))
    }

    #[test]
    fn test_explicit_policy_rejects_unknown() {
        let mut store = MemoryStore::new(DeclarationPolicy::Explicit);
        assert_eq!(store.class(&iri("Pizza")), None);
        assert_eq!(store.declaration_count(DeclarationKind::Class), 0);
        assert!(store.store_declaration(
            Declaration::new(DeclarationKind::Class, iri("Pizza")),
            Vec::new(),
        ));
        assert!(store.class(&iri("Pizza")).is_some());
        assert_eq!(store.object_property(&iri("Pizza")), None);
    }

    #[test]
    fn test_second_explicit_declaration() {
        let mut store = MemoryStore::default();
        let declaration = Declaration::new(DeclarationKind::Datatype, iri("blacksun"));
        assert!(store.store_declaration(declaration.clone(), Vec::new()));
        assert!(!store.store_declaration(declaration, Vec::new()));
        assert!(store.store_declaration(
            Declaration::new(DeclarationKind::Class, iri("blacksun")),
            Vec::new(),
        ));
    }

    #[test]
    fn test_implicit_declaration_is_promoted() {
        let mut store = MemoryStore::new(DeclarationPolicy::Implicit);
        assert!(store.object_property(&iri("hasBase")).is_some());
        assert_eq!(store.implicit_declaration_count(DeclarationKind::ObjectProperty), 1);
        assert!(store.store_declaration(
            Declaration::new(DeclarationKind::ObjectProperty, iri("hasBase")),
            Vec::new(),
        ));
        assert_eq!(store.implicit_declaration_count(DeclarationKind::ObjectProperty), 0);
        assert_eq!(store.explicit_declaration_count(DeclarationKind::ObjectProperty), 1);
        assert_eq!(
            store.declarations(DeclarationKind::ObjectProperty),
            vec![Declaration::new(DeclarationKind::ObjectProperty, iri("hasBase"))]
        );
        // a later use does not declare it again
        assert!(store.object_property(&iri("hasBase")).is_some());
        assert_eq!(store.declaration_count(DeclarationKind::ObjectProperty), 1);
    }

    #[test]
    fn test_characteristics() {
        let mut store = MemoryStore::default();
        let has_base =
            ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(iri("hasBase")));
        let is_base_of =
            ObjectPropertyExpression::ObjectInverseOf(ObjectProperty::new(iri("isBaseOf")));
        store.store_functional_object_property(has_base.clone(), Vec::new());
        store.store_inverse_object_properties(has_base, is_base_of, Vec::new());
        let characteristics = store.characteristics(&iri("hasBase"));
        assert!(characteristics.contains(PropertyCharacteristics::FUNCTIONAL));
        assert!(characteristics.contains(PropertyCharacteristics::HAS_INVERSE));
        assert!(!characteristics.contains(PropertyCharacteristics::TRANSITIVE));
        let inverse_side = store.characteristics(&iri("isBaseOf"));
        assert!(inverse_side.contains(PropertyCharacteristics::HAS_INVERSE));
        assert!(store.characteristics(&iri("Pizza")).is_empty());
        assert_eq!(store.axioms().len(), 2);
    }

    #[test]
    fn test_characteristics_of_inverse_expressions() {
        let mut store = MemoryStore::default();
        let inverse_of = |local_name| {
            ObjectPropertyExpression::ObjectInverseOf(ObjectProperty::new(iri(local_name)))
        };
        store.store_functional_object_property(inverse_of("hasBase"), Vec::new());
        store.store_inverse_functional_object_property(inverse_of("isBaseOf"), Vec::new());
        store.store_transitive_object_property(inverse_of("hasIngredient"), Vec::new());

        let has_base = store.characteristics(&iri("hasBase"));
        assert!(has_base.contains(PropertyCharacteristics::INVERSE_FUNCTIONAL));
        assert!(!has_base.contains(PropertyCharacteristics::FUNCTIONAL));
        let is_base_of = store.characteristics(&iri("isBaseOf"));
        assert!(is_base_of.contains(PropertyCharacteristics::FUNCTIONAL));
        assert!(!is_base_of.contains(PropertyCharacteristics::INVERSE_FUNCTIONAL));
        let has_ingredient = store.characteristics(&iri("hasIngredient"));
        assert_eq!(has_ingredient, PropertyCharacteristics::TRANSITIVE);
    }

    #[test]
    fn test_inverse_characteristics() {
        let mut both = PropertyCharacteristics::FUNCTIONAL;
        both.insert(PropertyCharacteristics::INVERSE_FUNCTIONAL);
        assert_eq!(both.inverse(), both);
        assert_eq!(
            PropertyCharacteristics::FUNCTIONAL.inverse(),
            PropertyCharacteristics::INVERSE_FUNCTIONAL
        );
        assert_eq!(
            PropertyCharacteristics::SYMMETRIC.inverse(),
            PropertyCharacteristics::SYMMETRIC
        );
    }

    #[test]
    fn test_summary() {
        let mut store = MemoryStore::new(DeclarationPolicy::Implicit);
        store.class(&iri("Pizza"));
        store.class(&iri("PizzaBase"));
        store.data_property(&iri("hasCaloricContentValue"));
        assert_eq!(
            store.to_string(),
            "0 annotation properties, 2 classes, 0 object properties, 1 data properties, 0 named individuals, 0 datatypes"
        );
    }
}
