use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search: Rect,
    pub history: Rect,
    pub stories: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Headline
            Constraint::Length(3), // Search input
            Constraint::Length(3), // History buttons
            Constraint::Min(5),    // Story table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        search: chunks[1],
        history: chunks[2],
        stories: chunks[3],
        status: chunks[4],
    }
}

/// Column widths of the story table: title, author, comments, points.
pub const STORY_COLUMNS: [Constraint; 4] = [
    Constraint::Percentage(50),
    Constraint::Percentage(30),
    Constraint::Percentage(10),
    Constraint::Percentage(10),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_overlap() {
        let layout = split(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.search.y, 1);
        assert_eq!(layout.history.y, 4);
        assert_eq!(layout.stories.y, 7);
        assert_eq!(layout.stories.height, 16);
        assert_eq!(layout.status.y, 23);
    }
}
