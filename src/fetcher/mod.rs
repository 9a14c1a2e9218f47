pub mod front;
pub mod http;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Story;

pub use front::{load_page, FrontPage, RankedStory};
pub use http::HttpApiClient;

/// Read-only view of the upstream item API.
#[async_trait]
pub trait ApiClient {
    /// The full top-story ranking, most promoted first.
    async fn top_story_ids(&self) -> Result<Vec<u64>>;

    /// One item record; `None` means upstream reports it gone.
    async fn item(&self, id: u64) -> Result<Option<Story>>;
}
