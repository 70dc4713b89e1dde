//! `stazh`: command-line work-experience calculator.
//!
//! # Usage
//!
//! ```
//! stazh new --name "Иванов Иван Иванович" --rank капитан
//! stazh add-period Иванов_Иван_Иванович_стаж.txt --start 2020-01-01 --end 2021-01-01 --coefficient 1.5
//! stazh show Иванов_Иван_Иванович_стаж.txt
//! ```

mod cli;
mod commands;
mod config;
mod render;

use clap::Parser;
use cli::Cli;
use config::CliConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  // Diagnostics go to stderr so stdout stays clean for results.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let cfg = CliConfig::load(&cli.config)?;
  tracing::debug!(?cfg, "configuration loaded");

  commands::run(cli.command, &cfg)
}
