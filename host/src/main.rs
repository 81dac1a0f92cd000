use std::io::Read;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::info;

use ringside_core::{run_replay, ReplayInput, ReplayOutput};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the result JSON, so logs go to stderr
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

/// Read the script from the path given as the first argument, or stdin.
fn load_input() -> Result<ReplayInput> {
    let args: Vec<String> = std::env::args().collect();

    let json_str = match args.get(1) {
        Some(path) if path.starts_with("--") => bail!("unknown flag: {path}"),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json_str).context("failed to parse script JSON")
}

fn log_result(output: &ReplayOutput) {
    info!(
        winner = ?output.winner,
        rounds_won = output.rounds_won,
        rounds_lost = output.rounds_lost,
        rounds_played = output.rounds_played,
        ticks = output.ticks,
        transcript_hash = %hex::encode(output.transcript_hash),
        seed_commit = %hex::encode(output.seed_commit),
        "match result"
    );
}

fn main() -> Result<()> {
    init_tracing();

    let input = load_input()?;
    info!(
        frames = input.transcript.len(),
        seed = input.config.seed,
        difficulty = input.config.difficulty.label(),
        "script loaded"
    );

    let start = Instant::now();
    let output = run_replay(&input).context("invalid match config")?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "replay done");
    log_result(&output);

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
