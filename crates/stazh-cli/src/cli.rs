//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
  name = "stazh",
  version,
  about = "Калькулятор стажа работы с коэффициентами"
)]
pub struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "stazh.toml", global = true)]
  pub config: PathBuf,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Create a new record with one empty period and save it.
  New {
    #[command(flatten)]
    name: NameArgs,
    #[arg(long)]
    rank: Option<String>,
    /// Directory to save into (defaults to `output_dir` from the config).
    #[arg(long)]
    dir:  Option<PathBuf>,
  },

  /// Print the record, its periods and the computed experience.
  Show { file: PathBuf },

  /// Print only the computed experience.
  Calc {
    file: PathBuf,
    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Edit the employee name or rank.
  Set {
    file:       PathBuf,
    #[command(flatten)]
    name:       NameArgs,
    #[arg(long, conflicts_with = "clear_rank")]
    rank:       Option<String>,
    #[arg(long)]
    clear_rank: bool,
  },

  /// Append a period.
  AddPeriod {
    file:   PathBuf,
    #[command(flatten)]
    fields: PeriodArgs,
  },

  /// Edit the period with the given id.
  UpdatePeriod {
    file:        PathBuf,
    id:          String,
    #[command(flatten)]
    fields:      PeriodArgs,
    /// Remove the start date.
    #[arg(long, conflicts_with = "start")]
    clear_start: bool,
    /// Remove the end date.
    #[arg(long, conflicts_with = "end")]
    clear_end:   bool,
  },

  /// Remove the period with the given id. The last period cannot be removed.
  RemovePeriod { file: PathBuf, id: String },

  /// Save a copy under the name derived from the employee's full name.
  Export {
    file: PathBuf,
    /// Directory to save into (defaults to `output_dir` from the config).
    #[arg(long)]
    dir:  Option<PathBuf>,
  },

  /// List the suggested ranks.
  Ranks,

  /// List the suggested coefficients.
  Coefficients,
}

/// Either a full name or its individual parts.
#[derive(Args, Debug, Default)]
pub struct NameArgs {
  /// Full name, "Фамилия Имя Отчество".
  #[arg(long, conflicts_with_all = ["surname", "given", "patronymic"])]
  pub name:       Option<String>,
  #[arg(long)]
  pub surname:    Option<String>,
  #[arg(long)]
  pub given:      Option<String>,
  #[arg(long)]
  pub patronymic: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
  /// Period label.
  #[arg(long = "label")]
  pub label:       Option<String>,
  /// Start date, YYYY-MM-DD.
  #[arg(long, value_parser = parse_date)]
  pub start:       Option<NaiveDate>,
  /// End date, YYYY-MM-DD.
  #[arg(long, value_parser = parse_date)]
  pub end:         Option<NaiveDate>,
  #[arg(long, value_parser = parse_coefficient)]
  pub coefficient: Option<f64>,
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
  NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
    .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

pub fn parse_coefficient(s: &str) -> Result<f64, String> {
  let value: f64 = s
    .trim()
    .replace(',', ".")
    .parse()
    .map_err(|e| format!("not a number: {e}"))?;
  if value.is_finite() && value > 0.0 {
    Ok(value)
  } else {
    Err(format!("coefficient must be positive, got {value}"))
  }
}
