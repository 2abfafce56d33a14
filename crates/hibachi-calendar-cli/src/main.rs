//! `hibachi-cal` CLI — lay out reservation calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Week layout for the week containing 2024-06-12 (events from stdin)
//! cat events.json | hibachi-cal layout --date 2024-06-12
//!
//! # Day layout from file to file, with a fixed "now"
//! hibachi-cal layout -i events.json -o layout.json --view day \
//!   --date 2024-06-12 --now 2024-06-12T18:30:00
//!
//! # Custom grid (rows, hour height, week start)
//! hibachi-cal layout -i events.json --config grid.json
//!
//! # The seven dates of a week
//! hibachi-cal week --date 2024-06-12 --week-start monday
//!
//! # Where the "now" line sits right now in Los Angeles
//! hibachi-cal now --timezone America/Los_Angeles
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for more.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use hibachi_calendar::{
    current_time_offset, layout_calendar, parse_date, parse_events_json, parse_local_datetime,
    week_dates_starting, CalendarError, GridConfig, ViewMode, ViewState, WeekStart,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hibachi-cal",
    version,
    about = "Week/day reservation calendar layout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out events for a week or a single day and print the result as JSON
    Layout {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Anchor date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// View mode: week or day
        #[arg(long, default_value = "week")]
        view: String,
        /// Current local time for the indicator (defaults to the system clock)
        #[arg(long)]
        now: Option<String>,
        /// Grid config JSON file
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the dates of the week containing a date, one per line
    Week {
        /// Any date in the week, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// First day of the week: sunday or monday
        #[arg(long, default_value = "sunday")]
        week_start: String,
    },
    /// Print the current-time indicator offset in pixels, or "hidden"
    Now {
        /// IANA timezone used to read the clock (defaults to the local zone)
        #[arg(long)]
        timezone: Option<String>,
        /// Use this local time instead of the clock
        #[arg(long, conflicts_with = "timezone")]
        at: Option<String>,
        /// Grid config JSON file
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Layout {
            input,
            output,
            date,
            view,
            now,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let view_mode: ViewMode = view.parse()?;
            let now = match now {
                Some(s) => parse_local_datetime(&s).context("Invalid --now")?,
                None => Local::now().naive_local(),
            };
            let anchor = anchor_date(date.as_deref(), now)?;

            let json = read_input(input.as_deref())?;
            let events = parse_events_json(&json).context("Failed to parse events JSON")?;
            info!(events = events.len(), %anchor, mode = %view_mode, "laying out calendar");

            let layout = layout_calendar(&events, ViewState::new(anchor, view_mode), now, &config);
            let pretty = serde_json::to_string_pretty(&layout)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Week { date, week_start } => {
            let week_start: WeekStart = week_start.parse()?;
            let anchor = anchor_date(date.as_deref(), Local::now().naive_local())?;
            for day in week_dates_starting(anchor, week_start) {
                println!("{}", day.format("%Y-%m-%d %a"));
            }
        }
        Commands::Now {
            timezone,
            at,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let now = match (at, timezone) {
                (Some(s), _) => parse_local_datetime(&s).context("Invalid --at")?,
                (None, Some(tz)) => clock_in(&tz)?,
                (None, None) => Local::now().naive_local(),
            };
            debug!(%now, "reading indicator");
            match current_time_offset(now, &config) {
                Some(offset) => println!("{:.2}", offset),
                None => println!("hidden"),
            }
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid RUST_LOG filter")?;

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<GridConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            GridConfig::from_json(&json).with_context(|| format!("Invalid config: {}", path))
        }
        None => Ok(GridConfig::default()),
    }
}

fn anchor_date(date: Option<&str>, now: NaiveDateTime) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s).context("Invalid --date")?),
        None => Ok(now.date()),
    }
}

/// Wall-clock time in the given IANA timezone.
fn clock_in(timezone: &str) -> Result<NaiveDateTime> {
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| CalendarError::InvalidTimezone(timezone.to_string()))?;
    Ok(Utc::now().with_timezone(&tz).naive_local())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
