//! Insertion-ordered, string-keyed case tables.

/// An ordered mapping from case labels to entries.
///
/// Lookup is by exact label; iteration follows insertion order.  Inserting
/// an existing label replaces its entry in place, keeping its original
/// position.
///
/// # Example
///
/// ```
/// use casewise_core::CaseMap;
///
/// let map = CaseMap::new()
///     .with("200", "OK")
///     .with("404", "Not Found")
///     .with("200", "Fine");
/// assert_eq!(map.get("200"), Some(&"Fine"));
/// let labels: Vec<&str> = map.labels().collect();
/// assert_eq!(labels, ["200", "404"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for CaseMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> CaseMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `label`, returning the previous
    /// entry if one existed.
    pub fn insert(&mut self, label: impl Into<String>, entry: V) -> Option<V> {
        let owned: String = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == owned) {
            Some((_, slot)) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push((owned, entry));
                None
            }
        }
    }

    /// Chainable form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, entry: V) -> Self {
        self.insert(label, entry);
        self
    }

    /// Returns the entry stored under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, entry)| entry)
    }

    /// Iterates over `(label, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(label, entry)| (label.as_str(), entry))
    }

    /// Iterates over labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaseMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, entry) in iter {
            map.insert(label, entry);
        }
        map
    }
}
