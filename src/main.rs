use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gazette::app::AppContext;
use gazette::cli::{commands, Cli, Commands};
use gazette::config::Config;
use gazette::domain::Page;

fn parse_page(arg: Option<&str>) -> Page {
    arg.map(Page::parse).unwrap_or(Page::FIRST)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config);

    match cli.command {
        Commands::Front { page } => {
            commands::front(&ctx, parse_page(page.as_deref())).await?;
        }
        Commands::Tui { page } => {
            gazette::tui::run(Arc::new(ctx), parse_page(page.as_deref())).await?;
        }
    }

    Ok(())
}
