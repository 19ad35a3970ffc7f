//! Find a route (or flood the reachable area) on an ASCII map.
//!
//! Run: cargo run --bin cellpath-demo -- [MAP] [--movement hex] [--flood]

use std::fs;
use std::path::PathBuf;

use cellpath::Movement;
use cellpath_demos::{AsciiMap, DemoConfig, DemoError, Mode, SAMPLE_MAP, run_query};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ASCII map file (`#` wall, `S` start, `G` goal). Uses a built-in map
    /// when omitted.
    map: Option<PathBuf>,

    /// Neighbor rule: rectangular, diagonal or hexagonal
    #[arg(short, long)]
    movement: Option<Movement>,

    /// TOML file with `movement` and `[cost]` settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Flood-fill from `S` instead of searching a route to `G`
    #[arg(short, long)]
    flood: bool,

    /// Log search details
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<String, DemoError> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(movement) = args.movement {
        config.movement = movement;
    }
    log::debug!("config: {config:?}");

    let text = match &args.map {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_MAP.to_string(),
    };
    let map: AsciiMap = text.parse()?;
    let mode = if args.flood { Mode::Flood } else { Mode::Path };
    run_query(&map, &config, mode)
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
