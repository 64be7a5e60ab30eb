use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quicknav")]
#[command(about = "Quick-navigation search over a documentation site's menu", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/quicknav/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Navigation metadata file (.json or .toml); overrides the config file
    #[arg(short, long, global = true)]
    pub nav: Option<PathBuf>,

    /// Open-trigger shortcut, e.g. "mod+k"; overrides the config file
    #[arg(long, global = true)]
    pub shortcut: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match a query against the navigation index
    Search {
        query: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the flattened search index as JSON
    Index,
    /// Drive the overlay from a script of input events and print a transcript
    Replay {
        /// Script file; reads stdin when omitted
        script: Option<PathBuf>,
    },
    /// Serve quick_search and list_navigation over MCP stdio
    Serve,
}
