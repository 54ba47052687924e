mod commands;
mod events_file;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calview_core::config::CalViewConfig;
use calview_core::view::{ViewMode, ViewState, WeekStart};
use calview_core::{EventId, Session};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::{parse_date, parse_datetime};
use events_file::SaveStatus;

#[derive(Parser)]
#[command(name = "calview")]
#[command(about = "Browse and edit your calendar by day, week, month or year")]
struct Cli {
    /// Events file to use instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the events of a day, week, month or year
    Show {
        /// day, week, month or year (defaults to the configured view)
        #[arg(short, long)]
        mode: Option<ViewMode>,

        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Move forward (positive) or back (negative) this many views
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// Jump from an empty month to the month of the next event
    Next {
        /// Month to start from (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    New {
        title: String,

        /// Start date/time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End date/time (defaults to one hour after start)
        #[arg(short, long)]
        end: Option<String>,
    },
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        /// New start; keeps the duration unless --end is given
        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,
    },
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show the configuration, or change it
    Config {
        /// monday or sunday
        #[arg(long)]
        week_start: Option<WeekStart>,

        /// day, week, month or year
        #[arg(long)]
        default_view: Option<ViewMode>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = CalViewConfig::load()?;
    let events_path = cli.events.unwrap_or_else(|| config.events_path());
    let today = chrono::Local::now().date_naive();

    let open = |mode: ViewMode, anchor: NaiveDate| -> Result<(Session, SaveStatus)> {
        tracing::info!(path = %events_path.display(), "loading events");
        let events = events_file::load(&events_path)?;
        let (sink, saved) = events_file::sink(events_path.clone());
        let view = ViewState::new(mode, anchor).with_week_start(config.week_start);
        let session = Session::new(events, sink, view)
            .with_context(|| format!("Invalid events file {}", events_path.display()))?;
        Ok((session, saved))
    };

    match cli.command {
        Commands::Show { mode, date, offset } => {
            let anchor = date.as_deref().map(parse_date).transpose()?.unwrap_or(today);
            let (mut session, _) = open(mode.unwrap_or(config.default_view), anchor)?;
            step(&mut session, offset)?;
            commands::show::run(&session, today)
        }
        Commands::Next { date } => {
            let anchor = date.as_deref().map(parse_date).transpose()?.unwrap_or(today);
            let (mut session, _) = open(ViewMode::Month, anchor)?;
            commands::next::run(&mut session, today)
        }
        Commands::New { title, start, end } => {
            let start = parse_datetime(&start)?;
            let end = end.as_deref().map(parse_datetime).transpose()?;
            let (mut session, saved) = open(config.default_view, start.date())?;
            commands::new::run(&mut session, &saved, title, start, end)
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
        } => {
            let start = start.as_deref().map(parse_datetime).transpose()?;
            let end = end.as_deref().map(parse_datetime).transpose()?;
            let (mut session, saved) = open(config.default_view, today)?;
            commands::edit::run(&mut session, &saved, EventId::new(id), title, start, end)
        }
        Commands::Delete { id, force } => {
            let (mut session, saved) = open(config.default_view, today)?;
            commands::delete::run(&mut session, &saved, EventId::new(id), force)
        }
        Commands::Config {
            week_start,
            default_view,
        } => {
            let config_path = CalViewConfig::config_path()?;
            commands::config::run(&config_path, config.clone(), week_start, default_view)
        }
    }
}

fn step(session: &mut Session, offset: i32) -> Result<()> {
    let action = if offset >= 0 {
        calview_core::Action::Next
    } else {
        calview_core::Action::Previous
    };
    for _ in 0..offset.unsigned_abs() {
        session.dispatch(action.clone())?;
    }
    Ok(())
}
