use crate::{AppState, Effect, Msg, StoriesAction};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.mark_dirty();
            state.refresh_request()
        }
        Msg::InputChanged(text) => state.set_search_term(text).into_iter().collect(),
        Msg::SearchSubmitted => {
            if !state.can_submit() {
                return (state, Vec::new());
            }
            state.submit_search();
            state.refresh_request()
        }
        Msg::LoadMoreClicked => {
            state.load_more();
            state.refresh_request()
        }
        Msg::HistorySelected(url) => {
            state.select_history(url);
            state.refresh_request()
        }
        Msg::RemoveStory(story) => {
            state.apply(StoriesAction::RemoveStory(story));
            Vec::new()
        }
        Msg::SortClicked(column) => {
            state.toggle_sort(column);
            Vec::new()
        }
        Msg::FetchSucceeded {
            request_id,
            hits,
            fetched_utc,
        } => {
            state.complete_fetch(request_id, hits, fetched_utc);
            Vec::new()
        }
        Msg::FetchFailed { request_id } => {
            state.fail_fetch(request_id);
            Vec::new()
        }
    };

    (state, effects)
}
