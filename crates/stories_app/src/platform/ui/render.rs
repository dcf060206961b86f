use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use stories_core::{AppViewModel, SortColumn};

use super::layout::{self, STORY_COLUMNS};
use super::{Focus, UiState};

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let screen = layout::split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from("My Hacker Stories").bold()),
        screen.header,
    );
    draw_search(frame, view, ui, screen.search);
    draw_history(frame, view, ui, screen.history);
    draw_stories(frame, view, ui, screen.stories);
    frame.render_widget(Paragraph::new(status_text(view)), screen.status);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_search(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let focused = ui.focus == Focus::Search;
    let hint = if view.can_submit { "" } else { "  (type to search)" };
    let input = Paragraph::new(Line::from(vec![
        Span::raw(view.search_term.as_str()),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]))
    .block(focus_block("Search", focused));
    frame.render_widget(input, area);

    if focused {
        let cursor_x = cursor_column(area, &view.search_term);
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

/// Cursor column after `term`, kept inside the input box border.
fn cursor_column(area: Rect, term: &str) -> u16 {
    let typed = u16::try_from(term.chars().count()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

fn draw_history(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let focused = ui.focus == Focus::History;
    let mut spans = Vec::new();
    for (index, entry) in view.history.iter().enumerate() {
        let selected = focused && index == ui.selected_history;
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::White)
        } else if entry.url == view.active_url {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[{}]", entry.label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(focus_block("Recent", focused)),
        area,
    );
}

fn draw_stories(frame: &mut Frame, view: &AppViewModel, ui: &UiState, area: Rect) {
    let focused = ui.focus == Focus::Stories;
    let block = focus_block("Stories", focused);

    if view.is_loading {
        frame.render_widget(Paragraph::new("Loading ...").block(block), area);
        return;
    }

    let header = Row::new(SortColumn::ALL.iter().enumerate().map(|(index, column)| {
        Cell::from(header_label(view, index, *column))
    }))
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.stories.iter().map(|story| {
        Row::new(vec![
            Cell::from(story.title.clone()),
            Cell::from(story.author.clone()),
            Cell::from(story.num_comments.to_string()),
            Cell::from(story.points.to_string()),
        ])
    });

    let table = Table::new(rows, STORY_COLUMNS)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if focused && !view.stories.is_empty() {
        state.select(Some(ui.selected_story));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_label(view: &AppViewModel, index: usize, column: SortColumn) -> String {
    let indicator = match view.sort {
        Some((active, order)) if active == column => order.indicator(),
        _ => "",
    };
    format!("{} {}{}", index + 1, column.label(), indicator)
}

pub(crate) fn status_text(view: &AppViewModel) -> String {
    let mut parts = Vec::new();
    if view.is_error {
        parts.push("Something went wrong ...".to_string());
    }
    parts.push(format!("{} stories", view.stories.len()));
    parts.push(format!("page {}", view.page));
    if let Some(stamp) = &view.last_fetched_utc {
        parts.push(format!("updated {stamp}"));
    }
    parts.push("Tab focus | Enter submit | m more | d dismiss | 1-4 sort | Esc quit".to_string());
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use stories_core::{SortOrder, Story};

    fn view() -> AppViewModel {
        AppViewModel {
            search_term: "React".to_string(),
            can_submit: true,
            stories: vec![Story {
                object_id: "0".to_string(),
                title: "React".to_string(),
                url: "https://reactjs.org/".to_string(),
                author: "Jordan Walke".to_string(),
                num_comments: 3,
                points: 4,
            }],
            ..AppViewModel::default()
        }
    }

    fn rendered(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, view, &UiState::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn loading_hides_the_list() {
        let mut loading = view();
        loading.is_loading = true;

        let text = rendered(&loading);
        assert!(text.contains("Loading ..."));
        assert!(!text.contains("Jordan Walke"));
    }

    #[test]
    fn loaded_list_shows_story_columns() {
        let text = rendered(&view());
        assert!(text.contains("Jordan Walke"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn status_reports_errors() {
        let mut failed = view();
        failed.is_error = true;
        failed.page = 2;

        let status = status_text(&failed);
        assert!(status.starts_with("Something went wrong ..."));
        assert!(status.contains("page 2"));
    }

    #[test]
    fn cursor_stays_inside_search_box() {
        let area = Rect::new(2, 0, 40, 3);
        assert_eq!(cursor_column(area, "React"), 8);

        let huge = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(cursor_column(area, &huge), 40);

        let mut long = view();
        long.search_term = huge;
        assert!(rendered(&long).contains("My Hacker Stories"));
    }

    #[test]
    fn active_sort_column_shows_indicator() {
        let mut sorted = view();
        sorted.sort = Some((SortColumn::Points, SortOrder::Descending));

        assert_eq!(header_label(&sorted, 3, SortColumn::Points), "4 Points \u{25BC}");
        assert_eq!(header_label(&sorted, 0, SortColumn::Title), "1 Title");
    }
}
