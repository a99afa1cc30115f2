// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only diagnostics over a roster snapshot.
//!
//! Loads a snapshot produced by `shift_roster::serialize` and prints the
//! resolved grid, rule violations, hour summaries or daily coverage for a
//! date range.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

#[cfg(test)]
mod tests;

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use shift_roster_domain::{Operator, OperatorId, Roster};
use std::path::{Path, PathBuf};
use time::{Date, macros::format_description};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    args.run()
}

/// Shift roster inspector
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a roster snapshot (JSON)
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

/// The date range shared by every report.
#[derive(Clone, Debug, ClapArgs)]
struct Range {
    /// First day (YYYY-MM-DD). Defaults to the snapshot's focus date.
    #[arg(short, long, value_parser = parse_date)]
    from: Option<Date>,

    /// Number of days to cover
    #[arg(short, long, default_value_t = 7)]
    days: u16,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the resolved shift of each day, with rule violations
    #[command(visible_alias = "g")]
    Grid {
        /// Only this operator. Defaults to every active operator.
        #[arg(short, long)]
        operator: Option<String>,

        #[command(flatten)]
        range: Range,
    },

    /// Print hour totals per operator
    #[command(visible_alias = "s")]
    Summary {
        /// Only this operator. Defaults to every active operator.
        #[arg(short, long)]
        operator: Option<String>,

        #[command(flatten)]
        range: Range,
    },

    /// Print how many operators work each shift code per day
    #[command(visible_alias = "c")]
    Coverage {
        #[command(flatten)]
        range: Range,
    },
}

impl Args {
    fn run(self) -> Result<()> {
        let roster: Roster = load_snapshot(&self.snapshot)?;

        match self.command {
            Command::Grid { operator, range } => {
                let (from, to) = range.bounds(&roster)?;
                for selected in select_operators(&roster, operator.as_deref())? {
                    print!("{}", render::grid(&roster, selected, from, to));
                }
            }
            Command::Summary { operator, range } => {
                let (from, to) = range.bounds(&roster)?;
                for selected in select_operators(&roster, operator.as_deref())? {
                    println!("{}", render::summary(&roster, selected, from, to));
                }
            }
            Command::Coverage { range } => {
                let (from, to) = range.bounds(&roster)?;
                print!("{}", render::coverage_report(&roster, from, to));
            }
        }

        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

impl Range {
    fn bounds(&self, roster: &Roster) -> Result<(Date, Date)> {
        let from: Date = self
            .from
            .or(roster.view.focus_date)
            .ok_or_else(|| eyre!("No --from date given and the snapshot has no focus date"))?;
        let span: i64 = i64::from(self.days.max(1)) - 1;
        let to: Date = from
            .checked_add(time::Duration::days(span))
            .ok_or_else(|| eyre!("Date range starting {from} overflows"))?;

        debug!(%from, %to, "Report range");
        Ok((from, to))
    }
}

fn load_snapshot(path: &Path) -> Result<Roster> {
    let contents: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;
    let roster: Roster = shift_roster::deserialize(&contents)
        .wrap_err_with(|| format!("Failed to load snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        operators = roster.operators.len(),
        entries = roster.entries.len(),
        "Loaded snapshot"
    );
    Ok(roster)
}

fn select_operators<'a>(roster: &'a Roster, operator: Option<&str>) -> Result<Vec<&'a Operator>> {
    match operator {
        Some(id) => roster
            .operator(&OperatorId::new(id))
            .map(|found| vec![found])
            .ok_or_else(|| eyre!("Operator '{id}' not found in snapshot")),
        None => Ok(roster
            .operators
            .iter()
            .filter(|operator| operator.is_active)
            .collect()),
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("invalid date '{value}': {err}"))
}
