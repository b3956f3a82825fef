//! Interactive scorer (default binary).
//!
//! Reads one command per line from stdin; see `help` for the list.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tenpin::core::GameConfig;
use tenpin::repl::{parse_repl_args, Outcome, Repl};
use tenpin::term::ScorecardPrinter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_repl_args(&args, GameConfig::from_env())?;
    info!(
        players = ?config.game.players,
        overflow = config.game.overflow.as_str(),
        "session started"
    );
    let mut printer = ScorecardPrinter::new(config.color);
    let mut repl = Repl::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "tenpin scorer. type help for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;
        match repl.handle_line(&line) {
            Ok(Some(Outcome::Quit)) => break,
            Ok(Some(Outcome::Continue(text))) => writeln!(stdout, "{}", text)?,
            Ok(Some(Outcome::Card(lines))) => printer.print(&lines)?,
            Ok(None) => {}
            // Bad input is reported and the loop carries on.
            Err(e) => writeln!(stdout, "error: {}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
