use anyhow::{Context, bail};
use clap::Parser;
use quicknav::cli::{Cli, Commands};
use quicknav::server::NavServer;
use quicknav::tools::{QuickSearchRequest, handle_quick_search, run_replay};
use quicknav::{Config, ConfigError, NavState, NavigationData, Shortcut};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    quicknav::tracing::init(cli.verbose);

    let state = load_state(&cli)?;

    match cli.command {
        Commands::Search { query, json } => {
            if json {
                let results = state.index().search(&query);
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", handle_quick_search(&state, QuickSearchRequest { query }));
            }
        }
        Commands::Index => {
            println!("{}", serde_json::to_string_pretty(state.index().records())?);
        }
        Commands::Replay { script } => {
            let script = match script {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin")?,
            };
            print!("{}", run_replay(&state, &script)?);
        }
        Commands::Serve => {
            tracing::info!(
                "Starting quicknav MCP server ({} pages indexed)",
                state.index().len()
            );

            let server = NavServer::new(Arc::new(state));
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
    }

    Ok(())
}

/// Resolve config, apply command-line overrides, and build the index.
fn load_state(cli: &Cli) -> anyhow::Result<NavState> {
    let config = Config::discover(cli.config.as_deref())?;

    let shortcut = match &cli.shortcut {
        Some(raw) => raw.parse::<Shortcut>().map_err(ConfigError::from)?,
        None => config.shortcut,
    };

    let Some(nav_path) = cli.nav.clone().or(config.navigation) else {
        bail!("No navigation file given. Pass --nav <FILE> or set `navigation` in the config file");
    };

    let navigation = NavigationData::load(&nav_path)?;
    tracing::debug!(
        "Loaded {} pages in {} sections from {}",
        navigation.entry_count(),
        navigation.groups.len(),
        nav_path.display()
    );

    Ok(NavState::new(navigation, shortcut))
}
