//! Error types for `stazh-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("period not found: {0}")]
  PeriodNotFound(String),

  #[error("unknown rank: {0:?}")]
  UnknownRank(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
