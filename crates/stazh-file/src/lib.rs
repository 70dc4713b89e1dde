//! Save-file codec for Stazh.
//!
//! Converts between [`stazh_core::Employee`] and the JSON text stored in
//! `<name>_стаж.txt` files. Dates are written as UTC-midnight ISO-8601
//! instants so they read back as the same calendar day in any timezone.
//!
//! # Quick start
//!
//! ```no_run
//! use stazh_core::Employee;
//!
//! let mut employee = Employee::new();
//! employee.name = "Иванов Иван Иванович".into();
//!
//! let text = stazh_file::serialize(&employee).unwrap();
//! let restored = stazh_file::parse(&text).unwrap();
//! assert_eq!(restored, employee);
//! println!("save as {}", stazh_file::file_name(&employee));
//! ```

pub mod error;
mod fs;
mod parse;
mod record;
mod serialize;

pub use error::{Error, Result};
pub use fs::{
  ACCEPTED_EXTENSIONS, FILE_SUFFIX, file_name, has_accepted_extension, load,
  save, save_in,
};
use stazh_core::Employee;

// ─── Public API ──────────────────────────────────────────────────────────────

/// Serialize `employee` as pretty-printed JSON.
///
/// Fails with [`Error::NonFiniteCoefficient`] if a period's coefficient is
/// NaN or infinite.
pub fn serialize(employee: &Employee) -> Result<String> {
  serialize::serialize(employee)
}

/// Parse a save file.
///
/// Files from older versions lacking period names get `"Период N"`
/// placeholders. Malformed input yields `Err(…)`; nothing is returned
/// partially.
pub fn parse(input: &str) -> Result<Employee> { parse::parse(input) }

// ─── Round-trip test ─────────────────────────────────────────────────────────

#[cfg(test)]
mod roundtrip_tests {
  use chrono::NaiveDate;
  use stazh_core::WorkPeriod;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn full_round_trip() {
    let mut employee = Employee::new();
    employee.name = "Иванов Иван Иванович".into();
    employee.rank = Some("старший лейтенант".into());
    employee.periods[0].start_date = Some(date(2020, 1, 1));
    employee.periods[0].end_date = Some(date(2020, 1, 11));

    let second = employee.add_period();
    second.start_date = Some(date(2021, 1, 1));
    second.end_date = Some(date(2021, 2, 1));
    second.coefficient = 2.0;

    let third = employee.add_period();
    third.start_date = Some(date(2022, 6, 30));
    third.coefficient = 1.5;

    let text = serialize(&employee).expect("serialization failed");
    let parsed = parse(&text).expect("parse failed");

    assert_eq!(parsed, employee);
    assert_eq!(parsed.total_days(), 72);
    assert_eq!(parsed.experience().to_string(), "2 месяца, 12 дней");
  }

  #[test]
  fn dates_do_not_shift_at_year_boundaries() {
    let mut employee = Employee::new();
    employee.periods[0].start_date = Some(date(1999, 12, 31));
    employee.periods[0].end_date = Some(date(2000, 1, 1));

    let parsed = parse(&serialize(&employee).unwrap()).unwrap();
    assert_eq!(parsed.periods[0].start_date, Some(date(1999, 12, 31)));
    assert_eq!(parsed.periods[0].end_date, Some(date(2000, 1, 1)));
  }

  #[test]
  fn record_without_rank_or_periods_round_trips() {
    let employee = Employee {
      name:    "Сидоров".into(),
      rank:    None,
      periods: Vec::new(),
    };
    assert_eq!(parse(&serialize(&employee).unwrap()).unwrap(), employee);
  }

  #[test]
  fn unnamed_period_gains_a_placeholder() {
    let mut employee = Employee::new();
    employee.periods.push(WorkPeriod { name: None, ..WorkPeriod::new("") });

    let parsed = parse(&serialize(&employee).unwrap()).unwrap();
    assert_eq!(parsed.periods[1].name.as_deref(), Some("Период 2"));
    assert_eq!(parsed.periods[1].id, employee.periods[1].id);
  }

  #[test]
  fn legacy_file_without_period_names_loads() {
    // Integer coefficients, no period names, no rank.
    let input = r#"{
  "name": "Петров Пётр Петрович",
  "periods": [
    {
      "id": "0b5e3c1e-8f7a-4c1d-9a53-2f1f0f6c1a10",
      "startDate": "2020-01-01T00:00:00.000Z",
      "endDate": "2020-01-11T00:00:00.000Z",
      "coefficient": 1
    },
    {
      "id": "7d2c8f4b-3a6e-4b9f-8c21-5e0d7a9b4c32",
      "startDate": "2021-01-01T00:00:00.000Z",
      "endDate": "2021-02-01T00:00:00.000Z",
      "coefficient": 2
    }
  ]
}"#;
    let employee = parse(input).unwrap();
    assert_eq!(employee.periods[0].name.as_deref(), Some("Период 1"));
    assert_eq!(employee.periods[1].name.as_deref(), Some("Период 2"));
    assert_eq!(employee.experience().summary(), "2 месяца, 12 дней (72 дня)");
    assert_eq!(file_name(&employee), "Петров_Пётр_Петрович_стаж.txt");
  }
}
