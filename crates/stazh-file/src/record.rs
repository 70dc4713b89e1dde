//! The on-disk shape of a save file.
//!
//! Every field is optional so files written by older versions (no period
//! `name`, no `rank`) still deserialize; defaults are filled in explicitly by
//! the parser rather than by serde.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeRecord {
  #[serde(default)]
  pub name:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rank:    Option<String>,
  #[serde(default)]
  pub periods: Option<Vec<PeriodRecord>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PeriodRecord {
  #[serde(default)]
  pub id:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:        Option<String>,
  /// ISO-8601 instant, or `null`.
  #[serde(default)]
  pub start_date:  Option<String>,
  #[serde(default)]
  pub end_date:    Option<String>,
  #[serde(default)]
  pub coefficient: Option<f64>,
}
