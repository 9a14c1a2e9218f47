pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gazette")]
#[command(about = "A terminal Hacker News front-page reader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one front page and exit
    Front {
        /// Page to show, as a number or a `#page=N` fragment
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Launch the TUI
    Tui {
        /// Page to open on, as a number or a `#page=N` fragment
        #[arg(short, long)]
        page: Option<String>,
    },
}
