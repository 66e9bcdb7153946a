use std::collections::HashMap;

/// Flat lookup from a digit-only OKVED code to its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OkvedIndex {
    entries: HashMap<String, String>,
}

impl OkvedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the label for `digits`.
    pub fn insert(&mut self, digits: String, name: String) -> Option<String> {
        self.entries.insert(digits, name)
    }

    pub fn get(&self, digits: &str) -> Option<&str> {
        self.entries.get(digits).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OkvedIndex
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (digits, name) in iter {
            index.insert(digits.into(), name.into());
        }
        index
    }
}
