use crate::Story;

/// Result list plus the flags of the fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchInit,
    /// Replaces the list. Callers concatenate previous pages themselves.
    FetchSuccess(Vec<Story>),
    FetchFailure,
    RemoveStory(Story),
}

/// Pure transition function for the result list.
///
/// The input state is never modified; the same inputs always produce an equal
/// output. `is_loading` and `is_error` are never both set after a terminal
/// action.
pub fn stories_reducer(state: &StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state.clone()
        },
        StoriesAction::FetchSuccess(payload) => StoriesState {
            data: payload,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state.clone()
        },
        StoriesAction::RemoveStory(story) => {
            let mut data = state.data.clone();
            if let Some(index) = data.iter().position(|s| s.object_id == story.object_id) {
                data.remove(index);
            }
            StoriesState {
                data,
                ..state.clone()
            }
        }
    }
}
