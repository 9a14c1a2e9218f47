pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::error;

use crate::app::{AppContext, Result};
use crate::domain::Page;
use crate::fetcher::{load_page, FrontPage};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A finished load cycle, tagged with the generation that started it.
struct LoadOutcome {
    generation: u64,
    result: Result<FrontPage>,
}

pub async fn run(ctx: Arc<AppContext>, start_page: Page) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, start_page).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, start_page: Page) -> Result<()> {
    let mut app = TuiApp::new(start_page);
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadOutcome>();

    // Recurring reload, independent of manual triggers.
    let refresh_interval = ctx.config.refresh_interval();
    let mut next_refresh = Instant::now() + refresh_interval;

    start_load(&mut app, &ctx, &tx, start_page);

    loop {
        terminal.draw(|frame| layout::render(frame, &app))?;

        // Land finished cycles; apply_load drops anything stale.
        while let Ok(outcome) = rx.try_recv() {
            if let Err(e) = &outcome.result {
                error!("Load cycle failed: {}", e);
            }
            app.apply_load(outcome.generation, outcome.result);
        }

        match event_handler.next()? {
            AppEvent::Key(key) => match Action::from(key) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::MoveUp => {
                    app.move_up();
                }
                Action::MoveDown => {
                    app.move_down();
                }
                Action::NextPage => {
                    let page = app.page.next();
                    start_load(&mut app, &ctx, &tx, page);
                }
                Action::PrevPage => {
                    if let Some(page) = app.page.prev() {
                        start_load(&mut app, &ctx, &tx, page);
                    }
                }
                Action::Refresh => {
                    let page = app.page;
                    start_load(&mut app, &ctx, &tx, page);
                }
                Action::OpenStory => {
                    let url = app.selected_story().map(|entry| entry.story.target_url());
                    open_in_browser(&mut app, url);
                }
                Action::OpenComments => {
                    let url = app.selected_story().map(|entry| entry.story.item_url());
                    open_in_browser(&mut app, url);
                }
                Action::OpenUser => {
                    let url = app.selected_story().map(|entry| entry.story.user_url());
                    open_in_browser(&mut app, url);
                }
                Action::None => {}
            },
            AppEvent::Tick => {
                if Instant::now() >= next_refresh {
                    let page = app.page;
                    start_load(&mut app, &ctx, &tx, page);
                    next_refresh = Instant::now() + refresh_interval;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn one load cycle for `page`. The result comes back over the channel
/// tagged with its generation so superseded cycles cannot clobber newer
/// ones.
fn start_load(
    app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<LoadOutcome>,
    page: Page,
) {
    let generation = app.begin_load();
    let client = ctx.client.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = load_page(client.as_ref(), page).await;
        let _ = tx.send(LoadOutcome { generation, result });
    });
}

fn open_in_browser(app: &mut TuiApp, url: Option<String>) {
    let Some(url) = url else {
        return;
    };
    if let Err(e) = open::that(&url) {
        app.set_status(format!("Failed to open browser: {}", e));
    } else {
        app.clear_status();
    }
}
