use stories_logging::stories_debug;

use crate::view_model::{AppViewModel, HistoryEntryView};
use crate::{
    history_label, sort_stories, stories_reducer, Effect, Pagination, QueryState, SearchHistory,
    SortColumn, SortState, StoriesAction, StoriesState, Story, DEFAULT_SEARCH_TERM, SEARCH_KEY,
};

pub const API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

pub type RequestId = u64;

/// Where search URLs point and what to search for when nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub api_base: String,
    pub default_term: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base: API_ENDPOINT.to_string(),
            default_term: DEFAULT_SEARCH_TERM.to_string(),
        }
    }
}

/// The (url, page) pair a fetch is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub url: String,
    pub page: u32,
}

impl RequestTarget {
    pub fn request_url(&self) -> String {
        format!("{}&page={}", self.url, self.page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: SearchSettings,
    query: QueryState,
    stories: StoriesState,
    pagination: Pagination,
    history: SearchHistory,
    sort: SortState,
    active_url: String,
    last_target: Option<RequestTarget>,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    last_fetched_utc: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppState {
    /// Fresh state with the default endpoint, restoring `stored_term` if any.
    pub fn new(stored_term: Option<String>) -> Self {
        Self::with_settings(SearchSettings::default(), stored_term)
    }

    pub fn with_settings(settings: SearchSettings, stored_term: Option<String>) -> Self {
        let query = QueryState::from_stored(SEARCH_KEY, stored_term, &settings.default_term);
        let active_url = format!("{}{}", settings.api_base, query.value());
        Self {
            settings,
            query,
            stories: StoriesState::default(),
            pagination: Pagination::default(),
            history: SearchHistory::new(),
            sort: SortState::default(),
            active_url,
            last_target: None,
            next_request_id: 1,
            pending_request: None,
            last_fetched_utc: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.query.value().to_string(),
            can_submit: self.can_submit(),
            active_url: self.active_url.clone(),
            page: self.pagination.page(),
            stories: sort_stories(&self.stories.data, &self.sort),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            history: self
                .history
                .urls()
                .iter()
                .map(|url| HistoryEntryView {
                    url: url.clone(),
                    label: history_label(url).to_string(),
                })
                .collect(),
            sort: self.sort.active(),
            last_fetched_utc: self.last_fetched_utc.clone(),
            dirty: self.dirty,
        }
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn search_term(&self) -> &str {
        self.query.value()
    }

    pub fn active_url(&self) -> &str {
        &self.active_url
    }

    pub fn page(&self) -> u32 {
        self.pagination.page()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    /// Returns whether a render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.query.value().is_empty()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn apply(&mut self, action: StoriesAction) {
        self.stories = stories_reducer(&self.stories, action);
        self.dirty = true;
    }

    /// Returns the persist effect when the term actually changed.
    pub(crate) fn set_search_term(&mut self, value: String) -> Option<Effect> {
        if !self.query.set(value) {
            return None;
        }
        self.dirty = true;
        Some(Effect::PersistSearchTerm {
            key: self.query.key().to_string(),
            value: self.query.value().to_string(),
        })
    }

    /// Records the submitted term as the active search and resets paging.
    pub(crate) fn submit_search(&mut self) {
        let url = format!("{}{}", self.settings.api_base, self.query.value());
        self.history.submit(url.clone());
        self.active_url = url;
        self.pagination.reset();
        self.dirty = true;
    }

    /// History selection keeps the current page.
    pub(crate) fn select_history(&mut self, url: String) {
        self.active_url = url;
        self.dirty = true;
    }

    pub(crate) fn load_more(&mut self) {
        self.pagination.load_more();
        self.dirty = true;
    }

    pub(crate) fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.dirty = true;
    }

    /// Issues a fetch when the (url, page) target differs from the last one.
    pub(crate) fn refresh_request(&mut self) -> Vec<Effect> {
        let target = RequestTarget {
            url: self.active_url.clone(),
            page: self.pagination.page(),
        };
        if self.last_target.as_ref() == Some(&target) {
            return Vec::new();
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let url = target.request_url();
        self.last_target = Some(target);
        self.pending_request = Some(request_id);
        self.apply(StoriesAction::FetchInit);
        vec![Effect::FetchStories { request_id, url }]
    }

    /// Appends hits from the latest request; stale completions are dropped.
    pub(crate) fn complete_fetch(
        &mut self,
        request_id: RequestId,
        hits: Vec<Story>,
        fetched_utc: Option<String>,
    ) {
        if !self.settle(request_id) {
            return;
        }
        let mut payload = self.stories.data.clone();
        payload.extend(hits);
        self.last_fetched_utc = fetched_utc;
        self.apply(StoriesAction::FetchSuccess(payload));
    }

    pub(crate) fn fail_fetch(&mut self, request_id: RequestId) {
        if !self.settle(request_id) {
            return;
        }
        self.apply(StoriesAction::FetchFailure);
    }

    fn settle(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            stories_debug!(
                "Discarding stale completion request_id={} pending={:?}",
                request_id,
                self.pending_request
            );
            return false;
        }
        self.pending_request = None;
        true
    }
}
