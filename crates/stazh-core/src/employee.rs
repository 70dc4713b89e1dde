//! The employee record: a name, an optional rank and an ordered list of
//! work periods addressed by id.

use crate::{
  Error, Result,
  experience::{Experience, total_days},
  name::NameParts,
  period::WorkPeriod,
};

/// Label given to the single period of a brand-new record.
pub const FIRST_PERIOD_NAME: &str = "Основной период";

/// Default label for the period at 1-based `position`.
pub fn default_period_name(position: usize) -> String {
  format!("Период {position}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
  /// Full name; also the stem of the save-file name.
  pub name:    String,
  /// Free-text rank, see [`crate::rank::Rank`] for the suggested values.
  pub rank:    Option<String>,
  /// Display order only; the total does not depend on it.
  pub periods: Vec<WorkPeriod>,
}

impl Default for Employee {
  fn default() -> Self { Self::new() }
}

impl Employee {
  /// A blank record holding one empty period.
  pub fn new() -> Self {
    Self {
      name:    String::new(),
      rank:    None,
      periods: vec![WorkPeriod::new(FIRST_PERIOD_NAME)],
    }
  }

  pub fn name_parts(&self) -> NameParts { NameParts::split(&self.name) }

  pub fn set_name_parts(&mut self, parts: &NameParts) { self.name = parts.join(); }

  // ── Periods ───────────────────────────────────────────────────────────

  /// Append an empty period named after its position and return it.
  pub fn add_period(&mut self) -> &mut WorkPeriod {
    let period = WorkPeriod::new(default_period_name(self.periods.len() + 1));
    self.periods.push(period);
    let last = self.periods.len() - 1;
    &mut self.periods[last]
  }

  pub fn period(&self, id: &str) -> Option<&WorkPeriod> {
    self.periods.iter().find(|p| p.id == id)
  }

  pub fn period_mut(&mut self, id: &str) -> Option<&mut WorkPeriod> {
    self.periods.iter_mut().find(|p| p.id == id)
  }

  /// Apply `edit` to the period with `id`.
  ///
  /// The closure may change any field except the id, which is restored
  /// afterwards so the period stays addressable.
  pub fn update_period<F>(&mut self, id: &str, edit: F) -> Result<&WorkPeriod>
  where
    F: FnOnce(&mut WorkPeriod),
  {
    let period = self
      .period_mut(id)
      .ok_or_else(|| Error::PeriodNotFound(id.to_string()))?;
    let original_id = period.id.clone();
    edit(period);
    period.id = original_id;
    Ok(period)
  }

  /// Remove and return the period with `id`.
  pub fn remove_period(&mut self, id: &str) -> Result<WorkPeriod> {
    let index = self
      .periods
      .iter()
      .position(|p| p.id == id)
      .ok_or_else(|| Error::PeriodNotFound(id.to_string()))?;
    Ok(self.periods.remove(index))
  }

  // ── Totals ────────────────────────────────────────────────────────────

  pub fn total_days(&self) -> i64 { total_days(&self.periods) }

  pub fn experience(&self) -> Experience { Experience::from_periods(&self.periods) }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn new_record_has_one_main_period() {
    let e = Employee::new();
    assert!(e.name.is_empty());
    assert!(e.rank.is_none());
    assert_eq!(e.periods.len(), 1);
    assert_eq!(e.periods[0].name.as_deref(), Some(FIRST_PERIOD_NAME));
    assert_eq!(e.total_days(), 0);
  }

  #[test]
  fn added_periods_are_numbered_by_position() {
    let mut e = Employee::new();
    let second = e.add_period().id.clone();
    e.add_period();

    assert_eq!(e.periods.len(), 3);
    assert_eq!(e.period(&second).unwrap().name.as_deref(), Some("Период 2"));
    assert_eq!(e.periods[2].name.as_deref(), Some("Период 3"));
    assert_eq!(e.periods[2].coefficient, 1.0);
  }

  #[test]
  fn update_changes_only_the_addressed_period() {
    let mut e = Employee::new();
    let first = e.periods[0].id.clone();
    let second = e.add_period().id.clone();

    e.update_period(&second, |p| {
      p.start_date = Some(date(2020, 1, 1));
      p.end_date = Some(date(2020, 1, 11));
      p.coefficient = 2.0;
    })
    .unwrap();

    assert_eq!(e.period(&second).unwrap().coefficient, 2.0);
    assert!(e.period(&first).unwrap().start_date.is_none());
    assert_eq!(e.total_days(), 20);
  }

  #[test]
  fn update_keeps_the_id() {
    let mut e = Employee::new();
    let id = e.periods[0].id.clone();
    let updated = e
      .update_period(&id, |p| p.id = "hijacked".into())
      .unwrap();
    assert_eq!(updated.id, id);
  }

  #[test]
  fn update_missing_period_is_an_error() {
    let mut e = Employee::new();
    let err = e.update_period("nope", |p| p.coefficient = 3.0).unwrap_err();
    assert_eq!(err, Error::PeriodNotFound("nope".into()));
  }

  #[test]
  fn remove_preserves_order_of_the_rest() {
    let mut e = Employee::new();
    let first = e.periods[0].id.clone();
    let second = e.add_period().id.clone();
    let third = e.add_period().id.clone();

    let removed = e.remove_period(&second).unwrap();
    assert_eq!(removed.id, second);
    let ids: Vec<_> = e.periods.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![first, third]);
  }

  #[test]
  fn core_allows_removing_the_last_period() {
    let mut e = Employee::new();
    let id = e.periods[0].id.clone();
    e.remove_period(&id).unwrap();
    assert!(e.periods.is_empty());
    assert!(matches!(e.remove_period(&id), Err(Error::PeriodNotFound(_))));
  }

  #[test]
  fn name_parts_edit_the_full_name() {
    let mut e = Employee::new();
    e.name = "Иванов Иван".into();
    let mut parts = e.name_parts();
    parts.patronymic = "Петрович".into();
    e.set_name_parts(&parts);
    assert_eq!(e.name, "Иванов Иван Петрович");
  }
}
