use chrono::Utc;

use crate::app::{AppContext, Result};
use crate::domain::Page;
use crate::fetcher::load_page;
use crate::render;

pub async fn front(ctx: &AppContext, page: Page) -> Result<()> {
    let front = load_page(ctx.client.as_ref(), page).await?;

    if front.stories.is_empty() {
        println!("No stories on page {}", front.page);
        return Ok(());
    }

    for line in render::front_page_lines(&front, Utc::now()) {
        println!("{}", line);
    }

    Ok(())
}
