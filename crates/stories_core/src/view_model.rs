use crate::{SortColumn, SortOrder, Story};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub can_submit: bool,
    pub active_url: String,
    pub page: u32,
    /// Stories in display order (sorted when a sort column is active).
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
    pub history: Vec<HistoryEntryView>,
    pub sort: Option<(SortColumn, SortOrder)>,
    pub last_fetched_utc: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntryView {
    pub url: String,
    pub label: String,
}
