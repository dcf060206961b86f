/// A single search hit as the core sees it.
///
/// `object_id` is only unique within the currently accumulated result list;
/// nothing enforces it globally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    pub object_id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
}
