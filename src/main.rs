//! Skirmish -- a two-player grid battle engine driven over stdin/stdout.
//!
//! Reads one command per line and writes responses to stdout. Logs go to
//! stderr; set `RUST_LOG` to adjust verbosity.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skirmish::config::GameConfig;
use skirmish::engine::{Engine, Flow};
use skirmish::protocol::parse_command;

#[derive(Parser, Debug)]
#[command(name = "skirmish", version, about = "Two-player grid battle engine")]
struct Args {
    /// TOML file with board size, budgets and resolution policy.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skirmish=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("i/o error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the protocol loop until `quit` or end of input.
fn run(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if engine.handle(cmd, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
