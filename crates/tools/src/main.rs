use std::fs;
use std::path::PathBuf;

use abyss_core::{InputJournal, ReplayResult, replay_to_end};
use anyhow::{Context, Result};
use clap::Parser;
use tools::{init_tracing, load_rules};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Optional TOML file overriding the standard rules
    #[arg(short, long)]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let rules = load_rules(args.rules.as_deref())?;
    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(&rules, &journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Intents: {}", result.intents_applied);
    println!("Final Turn: {}", result.final_turn);
    println!("Final Floor: {}", result.final_floor);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
