//! Employee → JSON text.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use stazh_core::{Employee, WorkPeriod};

use crate::{
  error::{Error, Result},
  record::{EmployeeRecord, PeriodRecord},
};

/// A calendar date as the UTC-midnight instant, e.g.
/// `2020-01-01T00:00:00.000Z`.
pub(crate) fn format_date(date: NaiveDate) -> String {
  date
    .and_time(NaiveTime::MIN)
    .and_utc()
    .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// JSON has no representation for NaN or infinity, so such a coefficient
/// is refused instead of being written as `null`.
fn period_record(position: usize, period: &WorkPeriod) -> Result<PeriodRecord> {
  if !period.coefficient.is_finite() {
    return Err(Error::NonFiniteCoefficient { position, value: period.coefficient });
  }
  Ok(PeriodRecord {
    id:          Some(period.id.clone()),
    name:        period.name.clone(),
    start_date:  period.start_date.map(format_date),
    end_date:    period.end_date.map(format_date),
    coefficient: Some(period.coefficient),
  })
}

pub(crate) fn serialize(employee: &Employee) -> Result<String> {
  let periods = employee
    .periods
    .iter()
    .enumerate()
    .map(|(index, period)| period_record(index + 1, period))
    .collect::<Result<Vec<_>>>()?;

  let record = EmployeeRecord {
    name:    Some(employee.name.clone()),
    rank:    employee.rank.clone(),
    periods: Some(periods),
  };
  Ok(serde_json::to_string_pretty(&record)?)
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn dates_are_utc_midnight_with_millis() {
    assert_eq!(format_date(date(2020, 1, 1)), "2020-01-01T00:00:00.000Z");
    assert_eq!(format_date(date(1999, 12, 31)), "1999-12-31T00:00:00.000Z");
  }

  #[test]
  fn emits_camel_case_keys_and_nulls() {
    let mut employee = Employee::new();
    employee.name = "Иванов Иван".into();
    let id = employee.periods[0].id.clone();
    employee.periods[0].start_date = Some(date(2020, 1, 1));

    let text = serialize(&employee).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
      value,
      json!({
        "name": "Иванов Иван",
        "periods": [{
          "id": id,
          "name": "Основной период",
          "startDate": "2020-01-01T00:00:00.000Z",
          "endDate": null,
          "coefficient": 1.0,
        }],
      })
    );
  }

  #[test]
  fn rank_is_written_when_present() {
    let mut employee = Employee::new();
    employee.rank = Some("капитан".into());
    let value: Value = serde_json::from_str(&serialize(&employee).unwrap()).unwrap();
    assert_eq!(value["rank"], "капитан");
  }

  #[test]
  fn non_finite_coefficient_is_refused() {
    let mut employee = Employee::new();
    employee.add_period().coefficient = f64::INFINITY;

    let err = serialize(&employee).unwrap_err();
    let Error::NonFiniteCoefficient { position, value } = err else {
      panic!("expected NonFiniteCoefficient")
    };
    assert_eq!(position, 2);
    assert_eq!(value, f64::INFINITY);

    employee.periods[1].coefficient = f64::NAN;
    assert!(matches!(serialize(&employee), Err(Error::NonFiniteCoefficient { .. })));
  }

  #[test]
  fn output_is_indented_with_two_spaces() {
    let text = serialize(&Employee::new()).unwrap();
    assert!(text.starts_with("{\n  \"name\": \"\""));
  }
}
