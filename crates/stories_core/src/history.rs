/// Maximum number of remembered searches.
pub const HISTORY_LIMIT: usize = 5;

const QUERY_MARKER: &str = "?query=";

/// Recently submitted search URLs, most recent first, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHistory {
    urls: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `url` to the front, dropping the oldest entries past the limit.
    pub fn submit(&mut self, url: String) {
        self.urls.retain(|existing| *existing != url);
        self.urls.insert(0, url);
        self.urls.truncate(HISTORY_LIMIT);
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Button text for a history entry: everything after the query marker.
///
/// URLs without the marker are shown as-is.
pub fn history_label(url: &str) -> &str {
    match url.split_once(QUERY_MARKER) {
        Some((_, term)) => term,
        None => url,
    }
}
