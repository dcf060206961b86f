use std::cmp::Ordering;

use crate::Story;

/// Sortable columns of the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Author,
    Comments,
    Points,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Title,
        SortColumn::Author,
        SortColumn::Comments,
        SortColumn::Points,
    ];

    fn index(self) -> usize {
        match self {
            SortColumn::Title => 0,
            SortColumn::Author => 1,
            SortColumn::Comments => 2,
            SortColumn::Points => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Author => "Author",
            SortColumn::Comments => "Comments",
            SortColumn::Points => "Points",
        }
    }

    fn compare(self, a: &Story, b: &Story) -> Ordering {
        match self {
            SortColumn::Title => a.title.cmp(&b.title),
            SortColumn::Author => a.author.cmp(&b.author),
            SortColumn::Comments => a.num_comments.cmp(&b.num_comments),
            SortColumn::Points => a.points.cmp(&b.points),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Ascending => " \u{25B2}",
            SortOrder::Descending => " \u{25BC}",
        }
    }
}

/// Per-column sort order plus the column the list is currently sorted by.
///
/// Every column remembers its own order, so switching columns and coming back
/// continues the toggle where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<SortColumn>,
    orders: [SortOrder; 4],
}

impl SortState {
    /// Flips the column's order and makes it the active sort.
    pub fn toggle(&mut self, column: SortColumn) {
        let slot = &mut self.orders[column.index()];
        *slot = slot.flipped();
        self.active = Some(column);
    }

    pub fn active(&self) -> Option<(SortColumn, SortOrder)> {
        self.active.map(|column| (column, self.order(column)))
    }

    pub fn order(&self, column: SortColumn) -> SortOrder {
        self.orders[column.index()]
    }
}

/// Returns the stories in display order. Ties keep arrival order.
pub fn sort_stories(stories: &[Story], sort: &SortState) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    if let Some((column, order)) = sort.active() {
        sorted.sort_by(|a, b| match order {
            SortOrder::Ascending => column.compare(a, b),
            SortOrder::Descending => column.compare(b, a),
        });
    }
    sorted
}
