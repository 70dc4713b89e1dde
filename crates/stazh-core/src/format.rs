//! Russian rendering of a day count as years, months and days.
//!
//! The calendar is simplified: a year is 365 days and a month
//! is 30 days. Leftover days are taken as `days mod 30` of the whole total,
//! not of the remainder after removing years and months.

use serde::Serialize;

const DAYS_PER_YEAR: u64 = 365;
const DAYS_PER_MONTH: u64 = 30;

// ─── Pluralization ───────────────────────────────────────────────────────────

/// The three grammatical number forms a Russian noun takes after a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
  /// 1, 21, 101 …: "день".
  One,
  /// 2–4, 22–24 …: "дня".
  Few,
  /// 0, 5–20, 25–30 …: "дней".
  Many,
}

impl PluralCategory {
  pub fn of(count: i64) -> Self {
    let n = count.unsigned_abs() % 100;
    if (10..=20).contains(&n) {
      return Self::Many;
    }
    match n % 10 {
      1 => Self::One,
      2..=4 => Self::Few,
      _ => Self::Many,
    }
  }

  pub fn select<'a>(self, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match self {
      Self::One => one,
      Self::Few => few,
      Self::Many => many,
    }
  }
}

/// Pick the word form agreeing with `count`.
pub fn pluralize<'a>(count: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
  PluralCategory::of(count).select(one, few, many)
}

// ─── Breakdown ───────────────────────────────────────────────────────────────

/// A day count split into the fixed-length units used for display.
///
/// Computed from the magnitude of the total; the sign is the caller's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
  pub years:  u64,
  pub months: u64,
  pub days:   u64,
}

impl Breakdown {
  pub fn of(total_days: i64) -> Self {
    let total = total_days.unsigned_abs();
    Self {
      years:  total / DAYS_PER_YEAR,
      months: (total % DAYS_PER_YEAR) / DAYS_PER_MONTH,
      days:   total % DAYS_PER_MONTH,
    }
  }
}

// ─── Formatting ──────────────────────────────────────────────────────────────

fn segment(count: u64, one: &str, few: &str, many: &str) -> String {
  let word = pluralize(count as i64, one, few, many);
  format!("{count} {word}")
}

/// Render `days` as e.g. `"1 год, 2 месяца, 5 дней"`.
///
/// Zero-valued years and months are omitted; days are omitted when zero
/// unless nothing else was rendered, so the result is never empty.
pub fn format_experience(days: i64) -> String {
  let Breakdown { years, months, days: remaining } = Breakdown::of(days);

  let mut segments = Vec::with_capacity(3);
  if years > 0 {
    segments.push(segment(years, "год", "года", "лет"));
  }
  if months > 0 {
    segments.push(segment(months, "месяц", "месяца", "месяцев"));
  }
  if remaining > 0 || (years == 0 && months == 0) {
    segments.push(segment(remaining, "день", "дня", "дней"));
  }

  let text = segments.join(", ");
  if days < 0 { format!("-{text}") } else { text }
}
