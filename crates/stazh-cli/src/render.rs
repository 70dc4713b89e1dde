//! Plain-text rendering of a record for the terminal.

use chrono::NaiveDate;
use serde::Serialize;
use stazh_core::{
  Employee, Experience, WorkPeriod, format::Breakdown, period::coefficient_label,
};

const RESULT_LABEL: &str = "Общий трудовой стаж с учетом коэффициентов";

fn date_or_blank(date: Option<NaiveDate>) -> String {
  date.map_or_else(|| "не указана".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn period_lines(lines: &mut Vec<String>, period: &WorkPeriod) {
  let name = period.name.as_deref().unwrap_or("");
  lines.push(format!("  [{}] {name}", period.id));
  lines.push(format!(
    "      {} – {}, коэффициент {}",
    date_or_blank(period.start_date),
    date_or_blank(period.end_date),
    coefficient_label(period.coefficient),
  ));
  if period.is_complete() {
    lines.push(format!("      учтено дней: {}", period.weighted_days()));
  }
}

/// The one-line result.
pub fn result_line(experience: &Experience) -> String {
  format!("{RESULT_LABEL}: {}", experience.summary())
}

/// Everything known about the record.
pub fn details(employee: &Employee) -> String {
  let name = if employee.name.is_empty() { "(не указано)" } else { employee.name.as_str() };
  let mut lines = vec![format!("ФИО: {name}")];
  if let Some(rank) = employee.rank.as_deref().filter(|r| !r.is_empty()) {
    lines.push(format!("Звание: {rank}"));
  }
  lines.push("Периоды работы:".to_string());
  for period in &employee.periods {
    period_lines(&mut lines, period);
  }
  lines.push(result_line(&employee.experience()));
  lines.join("\n")
}

/// Machine-readable form of the result for `calc --json`.
#[derive(Debug, Serialize)]
pub struct ResultJson {
  pub total_days: i64,
  #[serde(flatten)]
  pub breakdown:  Breakdown,
  pub text:       String,
}

impl From<Experience> for ResultJson {
  fn from(experience: Experience) -> Self {
    Self {
      total_days: experience.total_days,
      breakdown:  experience.breakdown(),
      text:       experience.to_string(),
    }
  }
}
