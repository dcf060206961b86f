#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial render; issues the first fetch for the restored search term.
    Mounted,
    /// User edited the search input.
    InputChanged(String),
    /// User submitted the current search term.
    SearchSubmitted,
    /// User asked for the next page of results.
    LoadMoreClicked,
    /// User dismissed a story from the list.
    RemoveStory(crate::Story),
    /// User picked an entry from the search history.
    HistorySelected(String),
    /// User clicked a column header.
    SortClicked(crate::SortColumn),
    /// Engine returned a page of hits.
    FetchSucceeded {
        request_id: crate::RequestId,
        hits: Vec<crate::Story>,
        fetched_utc: Option<String>,
    },
    /// Engine failed for any reason (transport, status, body).
    FetchFailed { request_id: crate::RequestId },
}
