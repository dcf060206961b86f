//! Hacker stories core: pure search state machine and view-model helpers.
//!
//! Nothing in this crate performs IO. The app feeds [`Msg`] values into
//! [`update`] and executes the returned [`Effect`]s.
mod effect;
mod history;
mod msg;
mod pagination;
mod query;
mod reducer;
mod sort;
mod state;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use history::{history_label, SearchHistory, HISTORY_LIMIT};
pub use msg::Msg;
pub use pagination::Pagination;
pub use query::{QueryState, DEFAULT_SEARCH_TERM, SEARCH_KEY};
pub use reducer::{stories_reducer, StoriesAction, StoriesState};
pub use sort::{sort_stories, SortColumn, SortOrder, SortState};
pub use state::{AppState, RequestId, RequestTarget, SearchSettings, API_ENDPOINT};
pub use story::Story;
pub use update::update;
pub use view_model::{AppViewModel, HistoryEntryView};
