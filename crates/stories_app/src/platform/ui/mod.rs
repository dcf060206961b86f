pub mod keys;
pub mod layout;
pub mod render;

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Stories,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Stories,
            Focus::Stories => Focus::History,
            Focus::History => Focus::Search,
        }
    }
}

/// Screen-local state the core does not care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub selected_story: usize,
    pub selected_history: usize,
}

impl UiState {
    /// Keeps selections inside the lists after they shrink.
    pub fn clamp(&mut self, story_count: usize, history_count: usize) {
        self.selected_story = self.selected_story.min(story_count.saturating_sub(1));
        self.selected_history = self.selected_history.min(history_count.saturating_sub(1));
    }
}
