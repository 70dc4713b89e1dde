//! Core types and calculations for the Stazh experience calculator.
//!
//! This crate is pure and synchronous. It knows nothing about files, the
//! command line, or the on-disk JSON shape; `stazh-file` and `stazh-cli`
//! build on top of it.

pub mod employee;
pub mod error;
pub mod experience;
pub mod format;
pub mod name;
pub mod period;
pub mod rank;

pub use employee::Employee;
pub use error::{Error, Result};
pub use experience::{Experience, total_days};
pub use format::{PluralCategory, format_experience, pluralize};
pub use period::WorkPeriod;
