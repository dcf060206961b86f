use crate::RequestId;

/// IO the core asks the app to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of search results. The completion must echo `request_id`.
    FetchStories { request_id: RequestId, url: String },
    /// Write the search term to the key-value store.
    PersistSearchTerm { key: String, value: String },
}
