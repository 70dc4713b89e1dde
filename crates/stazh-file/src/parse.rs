//! JSON text → Employee.
//!
//! Pipeline:
//!   raw &str
//!     └─ serde_json        → EmployeeRecord
//!          └─ fill_period() → WorkPeriod (defaults + date decoding)
//!               └─ Employee

use chrono::{DateTime, NaiveDate, Utc};
use stazh_core::{
  Employee, WorkPeriod, employee::default_period_name,
  period::DEFAULT_COEFFICIENT,
};
use uuid::Uuid;

use crate::{
  error::{Error, Result},
  record::{EmployeeRecord, PeriodRecord},
};

/// Decode a stored date.
///
/// Accepts any RFC 3339 instant (normalised to UTC, then truncated to the
/// calendar date) or a bare `YYYY-MM-DD`.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
    return Some(instant.with_timezone(&Utc).date_naive());
  }
  NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn decode_date(
  field: &'static str,
  position: usize,
  value: Option<String>,
) -> Result<Option<NaiveDate>> {
  match value {
    None => Ok(None),
    Some(raw) if raw.trim().is_empty() => Ok(None),
    Some(raw) => parse_date(&raw)
      .map(Some)
      .ok_or(Error::InvalidDate { field, position, value: raw }),
  }
}

/// Turn one stored period into a domain period, filling every default.
fn fill_period(position: usize, record: PeriodRecord) -> Result<WorkPeriod> {
  let name = match record.name {
    Some(name) if !name.is_empty() => name,
    _ => {
      tracing::debug!(position, "period has no name; using placeholder");
      default_period_name(position)
    }
  };
  let id = record.id.unwrap_or_else(|| {
    tracing::debug!(position, "period has no id; generating one");
    Uuid::new_v4().to_string()
  });

  Ok(WorkPeriod {
    id,
    name: Some(name),
    start_date: decode_date("startDate", position, record.start_date)?,
    end_date: decode_date("endDate", position, record.end_date)?,
    coefficient: record.coefficient.unwrap_or(DEFAULT_COEFFICIENT),
  })
}

pub(crate) fn parse(input: &str) -> Result<Employee> {
  let record: EmployeeRecord = serde_json::from_str(input)?;

  let periods = record
    .periods
    .unwrap_or_default()
    .into_iter()
    .enumerate()
    .map(|(index, period)| fill_period(index + 1, period))
    .collect::<Result<Vec<_>>>()?;

  tracing::trace!(periods = periods.len(), "parsed save file");

  Ok(Employee {
    name: record.name.unwrap_or_default(),
    rank: record.rank,
    periods,
  })
}
