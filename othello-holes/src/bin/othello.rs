//! Interactive Othello shell.
//!
//! Usage:
//!   othello
//!   othello --timing false --prompt "> "
//!   RUST_LOG=othello_holes=debug othello

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use othello_holes::session::Session;

#[derive(Parser)]
#[command(name = "othello", about = "Play Othello on irregular boards with holes")]
struct Cli {
    /// Prompt printed before each command
    #[arg(long, default_value = "othello> ", env = "OTHELLO_PROMPT")]
    prompt: String,

    /// Print how long each command took
    #[arg(long, env = "OTHELLO_TIMING", default_value_t = true, action = ArgAction::Set)]
    timing: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while session.is_running() {
        write!(stdout, "{}", cli.prompt)?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let start = Instant::now();
        let output = session.execute(&line);
        for reply in &output {
            writeln!(stdout, "{}", reply)?;
        }
        if cli.timing && !line.trim().is_empty() {
            writeln!(stdout, "time: {}ms", start.elapsed().as_secs_f64() * 1e3)?;
        }
    }

    tracing::debug!("session closed");
    Ok(())
}
