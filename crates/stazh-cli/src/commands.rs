//! Subcommand implementations.
//!
//! Each mutating command loads the record, edits it in memory and writes it
//! back to the same file. Interactive rules (a record keeps at least one
//! period, a record needs a name before it is saved under a derived file
//! name) live here rather than in `stazh-core`.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail, ensure};
use stazh_core::{
  Employee, WorkPeriod,
  name::NameParts,
  period::{COEFFICIENT_PRESETS, coefficient_label},
  rank::Rank,
};

use crate::{
  cli::{Command, NameArgs, PeriodArgs},
  config::CliConfig,
  render,
};

// ─── Loading and saving ──────────────────────────────────────────────────────

fn load(path: &Path) -> anyhow::Result<Employee> {
  if !stazh_file::has_accepted_extension(path) {
    tracing::warn!(path = %path.display(), "unexpected extension; expected .txt or .json");
  }
  stazh_file::load(path).context("Ошибка при загрузке файла")
}

fn store(path: &Path, employee: &Employee) -> anyhow::Result<()> {
  stazh_file::save(path, employee).context("Ошибка при сохранении файла")
}

/// A record may only be saved under a derived file name once it has a name.
pub fn ensure_exportable(employee: &Employee) -> anyhow::Result<()> {
  ensure!(
    !employee.name.trim().is_empty(),
    "Пожалуйста, введите ФИО работника"
  );
  Ok(())
}

// ─── Field edits ─────────────────────────────────────────────────────────────

pub fn apply_name(employee: &mut Employee, args: &NameArgs) {
  if let Some(full) = &args.name {
    employee.name = NameParts::split(full).join();
    return;
  }
  if args.surname.is_none() && args.given.is_none() && args.patronymic.is_none() {
    return;
  }
  let mut parts = employee.name_parts();
  if let Some(surname) = &args.surname {
    parts.surname = surname.clone();
  }
  if let Some(given) = &args.given {
    parts.given = given.clone();
  }
  if let Some(patronymic) = &args.patronymic {
    parts.patronymic = patronymic.clone();
  }
  employee.set_name_parts(&parts);
}

pub fn apply_rank(employee: &mut Employee, rank: Option<&str>, clear: bool) {
  if clear {
    employee.rank = None;
    return;
  }
  let Some(rank) = rank else { return };
  if let Err(e) = Rank::parse(rank) {
    tracing::warn!("{e}; storing it as free text");
  }
  employee.rank = Some(rank.trim().to_string());
}

pub fn apply_period(period: &mut WorkPeriod, args: &PeriodArgs) {
  if let Some(label) = &args.label {
    period.name = Some(label.clone());
  }
  if let Some(start) = args.start {
    period.start_date = Some(start);
  }
  if let Some(end) = args.end {
    period.end_date = Some(end);
  }
  if let Some(coefficient) = args.coefficient {
    period.coefficient = coefficient;
  }
}

fn warn_if_reversed(period: &WorkPeriod) {
  if let Some(span) = period.span_days()
    && span < 0
  {
    tracing::warn!(
      id = %period.id,
      span,
      "period ends before it starts; it will reduce the total"
    );
  }
}

/// Remove a period, refusing to leave the record without any.
pub fn remove_period(employee: &mut Employee, id: &str) -> anyhow::Result<WorkPeriod> {
  if employee.period(id).is_some() && employee.periods.len() == 1 {
    bail!("Необходим минимум один период");
  }
  Ok(employee.remove_period(id)?)
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

fn target_dir(dir: Option<PathBuf>, cfg: &CliConfig) -> PathBuf {
  dir.unwrap_or_else(|| cfg.output_dir.clone())
}

pub fn run(command: Command, cfg: &CliConfig) -> anyhow::Result<()> {
  match command {
    Command::New { name, rank, dir } => {
      let mut employee = Employee::new();
      employee.periods[0].coefficient = cfg.default_coefficient;
      apply_name(&mut employee, &name);
      apply_rank(&mut employee, rank.as_deref(), false);
      ensure_exportable(&employee)?;

      let dir = target_dir(dir, cfg);
      let path = stazh_file::save_in(&dir, &employee)
        .with_context(|| format!("failed to save into {}", dir.display()))?;
      tracing::info!(path = %path.display(), "created record");
      println!("{}", path.display());
    }

    Command::Show { file } => {
      println!("{}", render::details(&load(&file)?));
    }

    Command::Calc { file, json } => {
      let experience = load(&file)?.experience();
      if json {
        let out = serde_json::to_string_pretty(&render::ResultJson::from(experience))?;
        println!("{out}");
      } else {
        println!("{}", render::result_line(&experience));
      }
    }

    Command::Set { file, name, rank, clear_rank } => {
      let mut employee = load(&file)?;
      apply_name(&mut employee, &name);
      apply_rank(&mut employee, rank.as_deref(), clear_rank);
      store(&file, &employee)?;
    }

    Command::AddPeriod { file, fields } => {
      let mut employee = load(&file)?;
      let period = employee.add_period();
      period.coefficient = cfg.default_coefficient;
      apply_period(period, &fields);
      warn_if_reversed(period);
      let id = period.id.clone();
      store(&file, &employee)?;
      println!("{id}");
    }

    Command::UpdatePeriod { file, id, fields, clear_start, clear_end } => {
      let mut employee = load(&file)?;
      let period = employee.update_period(&id, |p| {
        apply_period(p, &fields);
        if clear_start {
          p.start_date = None;
        }
        if clear_end {
          p.end_date = None;
        }
      })?;
      warn_if_reversed(period);
      store(&file, &employee)?;
    }

    Command::RemovePeriod { file, id } => {
      let mut employee = load(&file)?;
      let removed = remove_period(&mut employee, &id)?;
      tracing::info!(id = %removed.id, "removed period");
      store(&file, &employee)?;
    }

    Command::Export { file, dir } => {
      let employee = load(&file)?;
      ensure_exportable(&employee)?;
      let dir = target_dir(dir, cfg);
      let path = stazh_file::save_in(&dir, &employee)
        .with_context(|| format!("failed to save into {}", dir.display()))?;
      println!("{}", path.display());
    }

    Command::Ranks => {
      for rank in Rank::all() {
        println!("{rank}");
      }
    }

    Command::Coefficients => {
      for coefficient in COEFFICIENT_PRESETS {
        println!("{}", coefficient_label(coefficient));
      }
    }
  }
  Ok(())
}
