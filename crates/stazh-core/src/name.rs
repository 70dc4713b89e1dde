//! Splitting a full name into surname, given name and patronymic.

/// The three parts a full name is edited as.
///
/// The first word is the surname, the second the given name, and every
/// remaining word belongs to the patronymic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
  pub surname:    String,
  pub given:      String,
  pub patronymic: String,
}

impl NameParts {
  pub fn split(full: &str) -> Self {
    let mut words = full.split_whitespace();
    let surname = words.next().unwrap_or_default().to_string();
    let given = words.next().unwrap_or_default().to_string();
    let patronymic = words.collect::<Vec<_>>().join(" ");
    Self { surname, given, patronymic }
  }

  /// Join the non-blank parts with single spaces.
  pub fn join(&self) -> String {
    [&self.surname, &self.given, &self.patronymic]
      .into_iter()
      .map(|part| part.trim())
      .filter(|part| !part.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
  }
}
