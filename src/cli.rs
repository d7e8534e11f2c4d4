//! CLI definitions for Pagewise.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pagewise CLI.
#[derive(Parser)]
#[command(name = "pagewise")]
#[command(about = "Text-only page digests and stable selectors for browser-driving agents")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.config/pagewise/config.toml when present)
    #[arg(short, long, global = true, env = "PAGEWISE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Summarize the fields, actions and navigation of a page
    Summarize {
        /// HTML file
        file: PathBuf,
    },

    /// Print the page without scripts, styles and stylesheet links
    Html {
        /// HTML file
        file: PathBuf,
    },

    /// Find elements containing a text and suggest selectors for them
    Find {
        /// HTML file
        file: PathBuf,

        /// Text to search for (case-insensitive)
        #[arg(short, long)]
        text: String,

        /// Only keep matches inside elements matching this CSS selector
        #[arg(short, long)]
        selector: Option<String>,
    },

    /// Show elements matching a CSS selector with their parents
    Inspect {
        /// HTML file
        file: PathBuf,

        /// CSS selector
        #[arg(short, long)]
        selector: String,

        /// Parent levels to show (default from config)
        #[arg(long)]
        context: Option<usize>,
    },

    /// List stable selectors for elements matching a CSS selector
    Selectors {
        /// HTML file
        file: PathBuf,

        /// CSS selector
        #[arg(short, long)]
        selector: String,
    },

    /// Run one `browser` tool action against a page
    Call {
        /// HTML file loaded before the action runs
        file: PathBuf,

        /// Action parameters as JSON, e.g. '{"action": "button_click", "selector": "Save"}'
        params: String,
    },

    /// List the browser tool definitions
    Tools {
        /// Print LLM tool-use JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
