pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod grid;
pub mod month;
pub mod render;
pub mod scroll;
pub mod selection;
pub mod shell;
pub mod time;

use std::ffi::OsString;
use std::io::{
  self,
  Write
};

use clap::Parser;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = cli::GlobalCli::parse_from(
    raw_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting almanac CLI"
  );

  let loaded = config::load_config(
    cli.config.as_deref()
  )?;
  debug!(source = ?loaded.source, "picker config resolved");

  let renderer =
    render::Renderer::for_stdout(cli.json);
  let stdout = io::stdout();
  let mut out = stdout.lock();
  commands::dispatch(
    cli.command,
    &loaded,
    &renderer,
    &mut out
  )?;
  out.flush()?;

  Ok(())
}
