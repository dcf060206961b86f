/// Zero-based page index of the active search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page: u32,
}

impl Pagination {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }
}
