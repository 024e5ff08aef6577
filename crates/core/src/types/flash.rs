//! Flash messages: one-shot notifications keyed by category.

/// Flash messages in insertion order.
///
/// Categories are unique; inserting an existing category replaces its text
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashMessages {
    entries: Vec<(String, String)>,
}

impl FlashMessages {
    /// Create an empty set of messages.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the message for `category`.
    pub fn insert(&mut self, category: impl Into<String>, text: impl Into<String>) {
        let category = category.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((category, text)),
        }
    }

    /// Returns the message for `category`, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, text)| text.as_str())
    }

    /// Iterate over `(category, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, t)| (c.as_str(), t.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlashMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut messages = Self::new();
        for (category, text) in iter {
            messages.insert(category, text);
        }
        messages
    }
}
