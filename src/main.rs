//! Levelgauge - Entry Point
//!
//! Resolves the XP total given on the command line and prints the level
//! report to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;

use levelgauge::progression::{resolve_level, try_resolve_level};
use levelgauge::ui::{render_report, ReportStyle, DEFAULT_BAR_WIDTH};

#[derive(Parser)]
#[command(name = "levelgauge")]
#[command(about = "Show the level and progress reached with a total XP value", long_about = None)]
#[command(version)]
struct Cli {
    /// Total accumulated XP
    #[arg(allow_negative_numbers = true)]
    total_xp: f64,

    /// Progress bar width in characters
    #[arg(short, long, default_value_t = DEFAULT_BAR_WIDTH as u16,
          value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Never color the progress bar
    #[arg(long)]
    plain: bool,

    /// Fail on negative or unresolvable XP instead of reporting level 0
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the report
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .target(env_logger::Target::Stderr)
    .init();

    log::info!("Starting Levelgauge v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let state = if cli.strict {
        try_resolve_level(cli.total_xp)
            .with_context(|| format!("cannot resolve a level for {} XP", cli.total_xp))?
    } else {
        resolve_level(cli.total_xp)
    };
    log::debug!(
        "Level {}: {} XP remaining to level {}",
        state.level,
        state.xp_remaining(),
        state.level + 1
    );

    let mut stdout = io::stdout();
    let style = ReportStyle {
        bar_width: usize::from(cli.width),
        colored: !cli.plain && stdout.is_tty(),
    };

    writeln!(stdout, "{}", render_report(cli.total_xp, &state, style))
        .context("failed to write level report")?;
    Ok(())
}
