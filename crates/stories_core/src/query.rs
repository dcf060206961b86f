/// Store key holding the last search term.
pub const SEARCH_KEY: &str = "search";
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// The search box contents, mirrored into the key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    key: String,
    value: String,
}

impl QueryState {
    /// Starts from the stored value when it is present and non-empty.
    ///
    /// Creation never asks for a write: the value just read is already stored.
    pub fn from_stored(key: impl Into<String>, stored: Option<String>, default: &str) -> Self {
        let value = stored
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string());
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` when the value changed and must be persisted.
    pub fn set(&mut self, value: String) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}
