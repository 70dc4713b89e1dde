//! Aggregation of weighted period spans into a single day count.

use std::fmt;

use crate::{
  format::{Breakdown, format_experience, pluralize},
  period::WorkPeriod,
};

/// Sum the weighted spans of `periods` and floor the result.
///
/// Periods missing either date are skipped. The running total is kept in
/// floating point so fractional coefficients accumulate before truncation;
/// negative totals are passed through unclamped.
pub fn total_days<'a, I>(periods: I) -> i64
where
  I: IntoIterator<Item = &'a WorkPeriod>,
{
  let total: f64 = periods
    .into_iter()
    .filter(|p| p.is_complete())
    .map(WorkPeriod::weighted_days)
    .sum();
  total.floor() as i64
}

// ─── Experience ──────────────────────────────────────────────────────────────

/// A computed total, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
  pub total_days: i64,
}

impl Experience {
  pub fn from_periods<'a, I>(periods: I) -> Self
  where
    I: IntoIterator<Item = &'a WorkPeriod>,
  {
    Self { total_days: total_days(periods) }
  }

  pub fn breakdown(&self) -> Breakdown { Breakdown::of(self.total_days) }

  /// The formatted duration followed by the raw total, e.g.
  /// `"2 месяца, 12 дней (72 дня)"`.
  pub fn summary(&self) -> String {
    let unit = pluralize(self.total_days, "день", "дня", "дней");
    format!("{self} ({} {unit})", self.total_days)
  }
}

impl fmt::Display for Experience {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&format_experience(self.total_days))
  }
}
