/// A link reference definition: `[label]: url "title"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDef {
    pub url: String,
    pub title: Option<String>,
}

impl ReferenceDef {
    pub fn new(url: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            title,
        }
    }
}

/// Label-keyed table that remembers discovery order.
///
/// Re-inserting an existing label replaces its value but keeps the position
/// where the label was first seen, so iteration order is discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTable<V> {
    entries: Vec<(String, V)>,
}

impl<V> DefinitionTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `label`.
    ///
    /// Returns the previous value if the label was already defined.
    pub fn insert(&mut self, label: impl Into<String>, value: V) -> Option<V> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Entries in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for DefinitionTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Into<String>, V> FromIterator<(L, V)> for DefinitionTable<V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, value) in iter {
            table.insert(label, value);
        }
        table
    }
}
