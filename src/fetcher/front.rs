use futures::future::try_join_all;
use tracing::debug;

use crate::app::Result;
use crate::domain::{Page, Story};
use crate::fetcher::ApiClient;

/// One fully loaded front page.
#[derive(Debug, Clone)]
pub struct FrontPage {
    pub page: Page,
    pub stories: Vec<RankedStory>,
}

/// A story paired with its global rank label.
///
/// Ranks come from the story's position in the upstream ranking, so a page
/// with deleted items keeps its gaps instead of renumbering.
#[derive(Debug, Clone)]
pub struct RankedStory {
    pub rank: usize,
    pub story: Story,
}

/// Run one load cycle: fetch the ranking, slice out `page`, and resolve
/// every id in the slice concurrently. The first failed fetch aborts the
/// whole page; items upstream reports gone are dropped from the result.
pub async fn load_page<C: ApiClient + ?Sized>(client: &C, page: Page) -> Result<FrontPage> {
    let ids = client.top_story_ids().await?;
    let page_ids = page.slice(&ids);
    debug!(
        "Resolving {} stories for page {}",
        page_ids.len(),
        page.number()
    );

    let details = try_join_all(page_ids.iter().map(|&id| client.item(id))).await?;

    let stories = details
        .into_iter()
        .enumerate()
        .filter_map(|(i, story)| {
            story.map(|story| RankedStory {
                rank: page.rank(i),
                story,
            })
        })
        .collect();

    Ok(FrontPage { page, stories })
}
