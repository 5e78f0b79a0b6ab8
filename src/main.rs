use std::io;

use anyhow::{Context, Result};
use hangman::{Config, Resources, Session};
use tracing::Level;

const LOG_ENV: &str = "HANGMAN_LOG";

fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    // Game text owns stdout.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::default();
    let resources = Resources::load(&config).context("failed to load game resources")?;

    let stdin = io::stdin();
    let mut session = Session::new(&resources, &config, stdin.lock(), io::stdout());
    session.run(&mut rand::rng())?;

    Ok(())
}
