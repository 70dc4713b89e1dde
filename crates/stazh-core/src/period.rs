//! Work periods: a single contiguous date range with one coefficient.

use chrono::NaiveDate;
use uuid::Uuid;

// ─── Coefficients ────────────────────────────────────────────────────────────

/// Coefficient applied to a freshly created period.
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// The coefficients offered for selection. Any positive value is
/// structurally valid; these are only the common ones.
pub const COEFFICIENT_PRESETS: [f64; 4] = [1.0, 1.5, 2.0, 3.0];

/// Human-readable label for a coefficient, as shown in a selection list.
pub fn coefficient_label(coefficient: f64) -> String {
  if coefficient == DEFAULT_COEFFICIENT {
    format!("{coefficient} (обычный стаж)")
  } else {
    coefficient.to_string()
  }
}

// ─── WorkPeriod ──────────────────────────────────────────────────────────────

/// A date range weighted by a coefficient.
///
/// Either date may be absent while the period is being filled in; such a
/// period contributes nothing to the total. No ordering between the dates is
/// enforced, so a period that ends before it starts yields a negative span.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPeriod {
  /// Opaque identifier, stable across edits. Only used for addressing.
  pub id:          String,
  pub name:        Option<String>,
  pub start_date:  Option<NaiveDate>,
  pub end_date:    Option<NaiveDate>,
  pub coefficient: f64,
}

impl WorkPeriod {
  /// A new, empty period with a fresh id and the default coefficient.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      id:          Uuid::new_v4().to_string(),
      name:        Some(name.into()),
      start_date:  None,
      end_date:    None,
      coefficient: DEFAULT_COEFFICIENT,
    }
  }

  /// Whether both dates are present.
  pub fn is_complete(&self) -> bool {
    self.start_date.is_some() && self.end_date.is_some()
  }

  /// Raw span in calendar days, or `None` when a date is missing.
  pub fn span_days(&self) -> Option<i64> {
    match (self.start_date, self.end_date) {
      (Some(start), Some(end)) => Some(end.signed_duration_since(start).num_days()),
      _ => None,
    }
  }

  /// The span multiplied by the coefficient; `0.0` for incomplete periods.
  pub fn weighted_days(&self) -> f64 {
    self
      .span_days()
      .map_or(0.0, |span| span as f64 * self.coefficient)
  }
}
