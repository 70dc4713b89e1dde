//! Error types for the stazh-file codec.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed save file: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid {field} in period {position}: {value:?}")]
  InvalidDate {
    field:    &'static str,
    /// 1-based position of the period in the file.
    position: usize,
    value:    String,
  },

  #[error("coefficient of period {position} is not a finite number: {value}")]
  NonFiniteCoefficient {
    /// 1-based position of the period in the record.
    position: usize,
    value:    f64,
  },

  #[error("cannot access {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
