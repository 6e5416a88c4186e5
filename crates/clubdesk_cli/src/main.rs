//! ClubDesk inspection CLI.
//!
//! # Responsibility
//! - Verify `clubdesk_core` wiring against a configured database.
//! - Print read-only summaries (stats, upcoming events, clubs, integrity).

use clap::{Parser, Subcommand};
use clubdesk_core::{
    core_version, default_log_level, init_logging, ClubService, ConnectionProvider, CoreResult,
    CrudService, Displayable, EventService, IntegrityService, StatsService,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "clubdesk", version, about = "Inspect a ClubDesk database")]
struct Cli {
    /// TOML file with a `[database]` table.
    #[arg(long, global = true, default_value = "config/db.toml")]
    config: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level (`trace|debug|info|warn|error`); needs `--log-dir`.
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the core library version.
    Version,
    /// Print dashboard counters.
    Stats,
    /// List events dated today or later.
    Upcoming,
    /// List all clubs.
    Clubs,
    /// Report members/events pointing at missing clubs or venues.
    Integrity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[{}] {err}", err.kind());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    if let Command::Version = cli.command {
        println!("clubdesk_core version={}", core_version());
        return Ok(());
    }

    let mut provider = ConnectionProvider::from_config_file(&cli.config)?;
    let result = print_report(&cli.command, &mut provider);
    let released = provider.release();
    report_outcome(result, released)
}

/// The report's own failure takes precedence over a failed release.
fn report_outcome(report: CoreResult<()>, released: CoreResult<()>) -> CoreResult<()> {
    report.and(released)
}

fn print_report(command: &Command, provider: &mut ConnectionProvider) -> CoreResult<()> {
    let conn = provider.acquire()?;
    match command {
        Command::Version => {}
        Command::Stats => {
            let stats = StatsService::new(conn).dashboard_stats()?;
            println!("Clubs: {}", stats.clubs);
            println!("Members: {}", stats.members);
            println!("Events: {}", stats.events);
            println!("Venues: {}", stats.venues);
            println!("Upcoming events: {}", stats.upcoming_events);
        }
        Command::Upcoming => {
            for event in EventService::new(conn).find_upcoming_events()? {
                println!("{event}");
            }
        }
        Command::Clubs => {
            for club in ClubService::new(conn).find_all()? {
                println!("{club} | {}", club.display_description());
            }
        }
        Command::Integrity => {
            let report = IntegrityService::new(conn).find_dangling_references()?;
            if report.is_clean() {
                println!("No dangling references.");
            } else {
                println!("Members without club: {:?}", report.members_without_club);
                println!("Events without club: {:?}", report.events_without_club);
                println!("Events without venue: {:?}", report.events_without_venue);
            }
        }
    }
    Ok(())
}
