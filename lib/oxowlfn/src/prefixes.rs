use oxrdf::NamedNode;
use rustc_hash::FxHashMap;
use std::fmt;

/// The mapping from prefix names to namespaces used to resolve `prefix:name` identifiers.
///
/// The empty prefix name is the default prefix, used by `:name`.
/// Namespaces are stored without the `<>` brackets.
///
/// ```
/// use oxowlfn::Prefixes;
///
/// let mut prefixes = Prefixes::new();
/// prefixes.insert("pizza", "http://test.de/pizza#");
/// assert_eq!(
///     prefixes.resolve("pizza", "Margherita").unwrap().as_str(),
///     "http://test.de/pizza#Margherita"
/// );
/// assert!(prefixes.resolve("unknown", "Margherita").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefixes {
    namespaces: FxHashMap<String, String>,
}

impl Prefixes {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a prefix name, returning the namespace it was previously bound to.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        self.namespaces.insert(name.into(), namespace.into())
    }

    /// The namespace bound to `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.namespaces.get(name).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    /// Concatenates the namespace of `prefix` with `local_name`.
    pub fn resolve(&self, prefix: &str, local_name: &str) -> Option<NamedNode> {
        let namespace = self.get(prefix)?;
        Some(NamedNode::new_unchecked(format!("{namespace}{local_name}")))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// The `(name, namespace)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs = self
            .namespaces
            .iter()
            .map(|(name, namespace)| (name.as_str(), namespace.as_str()))
            .collect::<Vec<_>>();
        pairs.sort_unstable();
        pairs.into_iter()
    }
}

impl fmt::Display for Prefixes {
    /// Formats the mapping as `Prefix(...)` statements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, namespace) in self.iter() {
            writeln!(f, "Prefix({name}:=<{namespace}>)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let mut prefixes = Prefixes::new();
        assert_eq!(prefixes.insert("", "localprefix#"), None);
        assert_eq!(
            prefixes.resolve("", "Pizza"),
            Some(NamedNode::new_unchecked("localprefix#Pizza"))
        );
    }

    #[test]
    fn test_rebinding_returns_previous() {
        let mut prefixes = Prefixes::new();
        prefixes.insert("hello", "hello.de#");
        assert_eq!(
            prefixes.insert("hello", "hallo.de#").as_deref(),
            Some("hello.de#")
        );
        assert_eq!(prefixes.get("hello"), Some("hallo.de#"));
        assert_eq!(prefixes.len(), 1);
    }

    #[test]
    fn test_display_is_sorted() {
        let mut prefixes = Prefixes::new();
        prefixes.insert("xsd", "http://www.w3.org/2001/XMLSchema#");
        prefixes.insert("", "localprefix#");
        assert_eq!(
            prefixes.to_string(),
            "Prefix(:=<localprefix#>)\nPrefix(xsd:=<http://www.w3.org/2001/XMLSchema#>)\n"
        );
    }
}
