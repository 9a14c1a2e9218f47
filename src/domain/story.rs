use serde::Deserialize;

/// A story as returned by `/item/{id}.json`.
///
/// The endpoint serves comments and jobs through the same schema; only the
/// fields the front page displays are kept. Deleted items arrive as JSON
/// `null` and never reach this type.
#[derive(Debug, Clone, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub time: i64,
    pub descendants: Option<u32>,
}

impl Story {
    /// Comment count; upstream omits the field entirely for zero.
    pub fn comment_count(&self) -> u32 {
        self.descendants.unwrap_or(0)
    }

    /// Title with HTML entities decoded (upstream encodes `&`, quotes, etc).
    pub fn display_title(&self) -> String {
        html_escape::decode_html_entities(&self.title).to_string()
    }

    /// Where activating the story leads: its external URL, or the
    /// discussion page for self posts.
    pub fn target_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => self.item_url(),
        }
    }

    /// The upstream discussion page for this story.
    pub fn item_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// The submitter's profile page.
    pub fn user_url(&self) -> String {
        format!("https://news.ycombinator.com/user?id={}", self.by)
    }
}
