//! habit-tracker - weekly habit checklist in the terminal

mod app;
mod dialogs;
mod error;
mod keymap;
mod print;
mod ui;

use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use libhabit_core::{
    load_config, FileWeekStore, SystemClock, Tracker, WeekKey, WeekPolicy, WeekStore,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use error::{Result, TrackerError};

/// Environment variable overriding the data directory
const DATA_DIR_ENV: &str = "HABIT_TRACKER_DIR";

/// Log file inside the data directory, used while the TUI owns the terminal
const LOG_FILE: &str = "habit-tracker.log";

#[derive(Parser)]
#[command(name = "habit-tracker")]
#[command(about = "Weekly habit checklist in the terminal")]
#[command(version)]
struct Cli {
    /// Data directory (default: $HABIT_TRACKER_DIR or ~/.habit-tracker)
    #[arg(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// Open a specific ISO week instead of the current one, e.g. 2024-W10
    #[arg(short = 'w', long)]
    week: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the week as a table and exit (no TUI)
    #[arg(long)]
    print: bool,

    /// List recorded weeks and exit
    #[arg(long)]
    list_weeks: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error[{}]: {}", e.error_code(), e);
        for suggestion in e.suggestions() {
            eprintln!("  hint: {}", suggestion);
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.clone());
    let headless = cli.print || cli.list_weeks;
    init_logging(&cli.log_level, &data_dir, headless)?;

    let config = load_config(&data_dir)?.unwrap_or_default();
    let store = FileWeekStore::open(&data_dir)?.with_defaults(config.seed_habits()?);
    info!(data_dir = %data_dir.display(), "habit-tracker starting");

    if cli.list_weeks {
        print::print_weeks(&store.weeks()?);
        return Ok(());
    }

    let tracker = match cli.week.as_deref() {
        // A pinned week never follows the clock
        Some(week) => {
            let week: WeekKey = week.parse()?;
            Tracker::open_week(store, Box::new(SystemClock), WeekPolicy::Session, week)?
        }
        None => Tracker::open(store, Box::new(SystemClock), config.week_policy())?,
    };

    if cli.print {
        print::print_week(&tracker.view());
        return Ok(());
    }

    let mut app = App::new(tracker);
    app.run()?;
    Ok(())
}

/// `--data-dir`, then `$HABIT_TRACKER_DIR`, then `~/.habit-tracker`
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".habit-tracker")
        })
}

/// Logs go to stderr in headless modes and to a file while the TUI runs
fn init_logging(level: &str, data_dir: &std::path::Path, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| TrackerError::Config(format!("invalid log level '{}': {}", level, e)))?;

    if headless {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        std::fs::create_dir_all(data_dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(data_dir.join(LOG_FILE))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
    Ok(())
}
