use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stories_core::{AppViewModel, Msg, SortColumn};

use super::{Focus, UiState};

/// What a keystroke asks the event loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Dispatch(Msg),
    /// Only screen-local state changed.
    Redraw,
    Quit,
    Ignored,
}

pub fn handle_key(key: KeyEvent, ui: &mut UiState, view: &AppViewModel) -> KeyOutcome {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit;
        }
        KeyCode::Tab => {
            ui.focus = ui.focus.next();
            return KeyOutcome::Redraw;
        }
        KeyCode::Esc => {
            if ui.focus == Focus::Search {
                ui.focus = Focus::Stories;
                return KeyOutcome::Redraw;
            }
            return KeyOutcome::Quit;
        }
        _ => {}
    }

    match ui.focus {
        Focus::Search => handle_search_key(key, view),
        Focus::Stories => handle_stories_key(key, ui, view),
        Focus::History => handle_history_key(key, ui, view),
    }
}

fn handle_search_key(key: KeyEvent, view: &AppViewModel) -> KeyOutcome {
    match key.code {
        KeyCode::Char(c) => {
            let mut term = view.search_term.clone();
            term.push(c);
            KeyOutcome::Dispatch(Msg::InputChanged(term))
        }
        KeyCode::Backspace => {
            let mut term = view.search_term.clone();
            if term.pop().is_none() {
                return KeyOutcome::Ignored;
            }
            KeyOutcome::Dispatch(Msg::InputChanged(term))
        }
        KeyCode::Enter if view.can_submit => KeyOutcome::Dispatch(Msg::SearchSubmitted),
        _ => KeyOutcome::Ignored,
    }
}

fn handle_stories_key(key: KeyEvent, ui: &mut UiState, view: &AppViewModel) -> KeyOutcome {
    let count = view.stories.len();
    match key.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('/') => {
            ui.focus = Focus::Search;
            KeyOutcome::Redraw
        }
        KeyCode::Down | KeyCode::Char('j') if count > 0 => {
            ui.selected_story = (ui.selected_story + 1).min(count - 1);
            KeyOutcome::Redraw
        }
        KeyCode::Up | KeyCode::Char('k') => {
            ui.selected_story = ui.selected_story.saturating_sub(1);
            KeyOutcome::Redraw
        }
        KeyCode::Char('d') | KeyCode::Delete => match view.stories.get(ui.selected_story) {
            Some(story) => KeyOutcome::Dispatch(Msg::RemoveStory(story.clone())),
            None => KeyOutcome::Ignored,
        },
        // Load more is hidden while a fetch is running.
        KeyCode::Char('m') if !view.is_loading => KeyOutcome::Dispatch(Msg::LoadMoreClicked),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            KeyOutcome::Dispatch(Msg::SortClicked(SortColumn::ALL[index]))
        }
        _ => KeyOutcome::Ignored,
    }
}

fn handle_history_key(key: KeyEvent, ui: &mut UiState, view: &AppViewModel) -> KeyOutcome {
    let count = view.history.len();
    match key.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Right | KeyCode::Char('l') if count > 0 => {
            ui.selected_history = (ui.selected_history + 1).min(count - 1);
            KeyOutcome::Redraw
        }
        KeyCode::Left | KeyCode::Char('h') => {
            ui.selected_history = ui.selected_history.saturating_sub(1);
            KeyOutcome::Redraw
        }
        KeyCode::Enter => match view.history.get(ui.selected_history) {
            Some(entry) => KeyOutcome::Dispatch(Msg::HistorySelected(entry.url.clone())),
            None => KeyOutcome::Ignored,
        },
        _ => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_core::{HistoryEntryView, Story};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_with_stories() -> AppViewModel {
        AppViewModel {
            search_term: "Rust".to_string(),
            can_submit: true,
            stories: vec![
                Story {
                    object_id: "0".to_string(),
                    ..Story::default()
                },
                Story {
                    object_id: "1".to_string(),
                    ..Story::default()
                },
            ],
            history: vec![HistoryEntryView {
                url: "https://hn.algolia.com/api/v1/search?query=go".to_string(),
                label: "go".to_string(),
            }],
            ..AppViewModel::default()
        }
    }

    #[test]
    fn typing_edits_the_search_term() {
        let view = view_with_stories();
        let mut ui = UiState::default();

        assert_eq!(
            handle_key(press(KeyCode::Char('y')), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::InputChanged("Rusty".to_string()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Backspace), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::InputChanged("Rus".to_string()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::SearchSubmitted)
        );
    }

    #[test]
    fn enter_is_ignored_for_empty_term() {
        let view = AppViewModel::default();
        let mut ui = UiState::default();

        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut ui, &view),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn dismiss_removes_selected_story() {
        let view = view_with_stories();
        let mut ui = UiState {
            focus: Focus::Stories,
            ..UiState::default()
        };

        assert_eq!(
            handle_key(press(KeyCode::Down), &mut ui, &view),
            KeyOutcome::Redraw
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('d')), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::RemoveStory(view.stories[1].clone()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('3')), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::SortClicked(SortColumn::Comments))
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('m')), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::LoadMoreClicked)
        );
    }

    #[test]
    fn history_enter_selects_entry() {
        let view = view_with_stories();
        let mut ui = UiState::default();
        handle_key(press(KeyCode::Tab), &mut ui, &view);
        handle_key(press(KeyCode::Tab), &mut ui, &view);
        assert_eq!(ui.focus, Focus::History);

        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut ui, &view),
            KeyOutcome::Dispatch(Msg::HistorySelected(view.history[0].url.clone()))
        );
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let view = view_with_stories();
        let mut ui = UiState::default();

        assert_eq!(
            handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut ui,
                &view
            ),
            KeyOutcome::Quit
        );
    }
}
