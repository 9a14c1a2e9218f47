//! # Gazette
//!
//! A terminal Hacker News front-page reader.
//!
//! ## Architecture
//!
//! Gazette is a thin pipeline over the public item API:
//!
//! ```text
//! Fetcher → Front-page assembly → Renderer → UI
//! ```
//!
//! - [`fetcher`]: HTTP client for the ranking and item endpoints, plus the
//!   per-page concurrent fan-out
//! - [`render`]: pure formatting of stories and pagination controls
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print the front page
//! gazette front
//!
//! # Print page 3
//! gazette front --page 3
//!
//! # Launch the TUI
//! gazette tui
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`config`]: configuration file handling
//! - [`domain`]: core domain models (Story, Page)
//! - [`fetcher`]: API access and page loading
//! - [`render`]: display formatting
//! - [`tui`]: terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configured API
/// client to the commands and the TUI.
pub mod app;

/// Command-line interface using clap.
///
/// - `front [--page N]` - print one front page
/// - `tui [--page N]` - launch the TUI
pub mod cli;

/// Configuration management.
///
/// Reads `~/.config/gazette/config.toml`: API base URL, refresh interval,
/// HTTP timeout.
pub mod config;

/// Core domain models.
///
/// - [`Story`](domain::Story): one upstream story record
/// - [`Page`](domain::Page): the one-based front-page number, the only
///   state that outlives a render cycle
pub mod domain;

/// API access.
///
/// - [`ApiClient`](fetcher::ApiClient): async trait over the two endpoints
/// - [`HttpApiClient`](fetcher::http::HttpApiClient): reqwest-based
///   implementation
/// - [`load_page`](fetcher::load_page): one full load cycle with a
///   concurrent detail fan-out
pub mod fetcher;

/// Pure display formatting: relative ages, hostnames, story and
/// pagination lines. Shared by the CLI printer and the TUI layout.
pub mod render;

/// Terminal user interface.
///
/// Story list with rank, title, domain and metadata; `Previous`/`More`
/// pagination; automatic reload on a timer.
///
/// Keybindings: j/k select, n/p paginate, r refreshes, o opens the story,
/// c opens comments, u opens the submitter's profile, q quits.
pub mod tui;
