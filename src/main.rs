//! pong-tag CLI.
//!
//! Players come from `--player` flags or, if none are given, from an
//! interactive prompt. The serving player comes from `--server` or a prompt.

use std::io;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pong_tag::console::Console;
use pong_tag::core::{GameConfig, Roster, MIN_PLAYERS};
use pong_tag::game::{ConsoleObserver, Game};

#[derive(Parser)]
#[command(name = "pong-tag")]
#[command(version)]
#[command(about = "Multi-player pong tag: miss a shot, gain a point, reach the limit and lose")]
struct Cli {
    /// Player name (repeat for each player; prompts when omitted)
    #[arg(short, long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Player who serves first (prompts when omitted)
    #[arg(short, long, value_name = "NAME")]
    server: Option<String>,

    /// Print the final result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::default();
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let names = if cli.players.is_empty() {
        console
            .read_player_names(config.min_players)
            .context("failed to read player names")?
    } else {
        ensure!(
            cli.players.len() >= MIN_PLAYERS,
            "need at least {MIN_PLAYERS} players, got {}",
            cli.players.len()
        );
        cli.players
    };

    let roster = Roster::new(names, config.min_players).context("invalid roster")?;

    let server = match &cli.server {
        Some(name) => roster.require(name)?,
        None => console
            .read_server(&roster)
            .context("failed to read serving player")?,
    };

    let outcome = Game::new(config, roster)?
        .with_observer(Arc::new(ConsoleObserver))
        .play(server)
        .context("game failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("\n{outcome}");
    }

    Ok(())
}
