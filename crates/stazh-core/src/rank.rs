//! Military ranks offered for selection.
//!
//! [`crate::Employee::rank`] is free text so saved files may carry any
//! value; this list only drives suggestions and validation warnings.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum Rank {
  #[strum(serialize = "рядовой")]
  Private,
  #[strum(serialize = "сержант")]
  Sergeant,
  #[strum(serialize = "старший сержант")]
  SeniorSergeant,
  #[strum(serialize = "старшина")]
  SergeantMajor,
  #[strum(serialize = "прапорщик")]
  WarrantOfficer,
  #[strum(serialize = "старший прапорщик")]
  SeniorWarrantOfficer,
  #[strum(serialize = "лейтенант")]
  Lieutenant,
  #[strum(serialize = "старший лейтенант")]
  SeniorLieutenant,
  #[strum(serialize = "капитан")]
  Captain,
  #[strum(serialize = "майор")]
  Major,
  #[strum(serialize = "подполковник")]
  LieutenantColonel,
  #[strum(serialize = "полковник")]
  Colonel,
  #[strum(serialize = "генерал-майор")]
  MajorGeneral,
}

impl Rank {
  /// Look up a rank by its Russian title, ignoring surrounding whitespace.
  pub fn parse(title: &str) -> Result<Self> {
    title
      .trim()
      .parse()
      .map_err(|_| Error::UnknownRank(title.to_string()))
  }

  /// All ranks in ascending order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }
}
