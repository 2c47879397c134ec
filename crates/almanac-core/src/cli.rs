use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{
  ArgAction,
  Parser,
  Subcommand
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::month::DisplayedMonth;
use crate::selection::{
  DateSelection,
  SelectionMode,
  parse_date
};
use crate::time::TimeValue;

#[derive(Parser, Debug, Clone)]
#[command(
  name = "almanac",
  version,
  about = "Preview and validate date/time picker configurations"
)]
pub struct GlobalCli {
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true
  )]
  pub verbose: u8,

  #[arg(
    short = 'q',
    long = "quiet",
    action = ArgAction::Count,
    global = true
  )]
  pub quiet: u8,

  /// Picker config file. Falls back to `$ALMANAC_CONFIG`, then the user
  /// config directory.
  #[arg(long = "config", global = true)]
  pub config: Option<PathBuf>,

  #[arg(long = "json", global = true)]
  pub json: bool,

  #[command(subcommand)]
  pub command: Command
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
  /// Validate the picker config and print a summary.
  Check,

  /// Print the day grid of a month.
  Month {
    /// `YYYY-MM`; defaults to the selection's month, else today.
    #[arg(long)]
    month: Option<DisplayedMonth>,

    /// `DATE`, `DATE..` or `DATE..DATE`.
    #[arg(long)]
    select: Option<DateSelection>,

    /// Day clicks applied in order.
    #[arg(
      long = "click",
      value_parser = clap::builder::ValueParser::new(parse_date),
      action = ArgAction::Append
    )]
    clicks: Vec<NaiveDate>,

    /// Overrides `[calendar] mode`.
    #[arg(long)]
    mode: Option<SelectionMode>,

    #[arg(
      long,
      value_parser = clap::builder::ValueParser::new(parse_date)
    )]
    today: Option<NaiveDate>
  },

  /// Print the hour and minute columns.
  Times {
    /// Defaults to `[time] initial`.
    #[arg(long)]
    value: Option<TimeValue>,

    /// Hour label to click.
    #[arg(long)]
    hour: Option<u8>,

    #[arg(long)]
    minute: Option<u8>
  }
}

/// Level used when `RUST_LOG` is unset. Any `-q` beats any `-v`.
fn default_level(
  verbose: u8,
  quiet: u8
) -> LevelFilter {
  match (quiet, verbose) {
    | (2.., _) => LevelFilter::ERROR,
    | (1, _) | (0, 0) => LevelFilter::WARN,
    | (0, 1) => LevelFilter::INFO,
    | (0, 2) => LevelFilter::DEBUG,
    | (0, _) => LevelFilter::TRACE
  }
}

/// Installs a stderr-only subscriber so `--json` output on stdout stays
/// parseable. The previews are one-shot and single threaded, so events
/// carry neither timestamps nor thread ids.
pub fn init_tracing(
  verbose: u8,
  quiet: u8
) -> anyhow::Result<()> {
  let level = default_level(verbose, quiet);
  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env()
    .map_err(|e| {
      anyhow!("invalid RUST_LOG filter: {e}")
    })?;

  let installed =
    tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_target(true)
      .without_time()
      .with_writer(std::io::stderr)
      .with_ansi(
        std::io::stderr().is_terminal()
      )
      .try_init();

  if let Err(err) = installed {
    debug!(error = %err, %level, "keeping the subscriber already installed");
  }

  Ok(())
}
