//! Reading and writing save files on disk.

use std::path::{Path, PathBuf};

use stazh_core::Employee;

use crate::error::{Error, Result};

/// Appended to the employee name to form the save-file name.
pub const FILE_SUFFIX: &str = "_стаж.txt";

/// Extensions a save file is expected to carry when loading.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Suggested file name for `employee`: every run of whitespace in the name
/// becomes a single `_`, followed by [`FILE_SUFFIX`].
///
/// No validation happens here; an empty name yields `_стаж.txt`.
pub fn file_name(employee: &Employee) -> String {
  let mut stem = String::with_capacity(employee.name.len());
  let mut in_space = false;
  for c in employee.name.chars() {
    if c.is_whitespace() {
      if !in_space {
        stem.push('_');
      }
      in_space = true;
    } else {
      stem.push(c);
      in_space = false;
    }
  }
  stem + FILE_SUFFIX
}

/// Whether `path` carries one of the [`ACCEPTED_EXTENSIONS`].
pub fn has_accepted_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| {
      ACCEPTED_EXTENSIONS
        .iter()
        .any(|accepted| ext.eq_ignore_ascii_case(accepted))
    })
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
  move |source| Error::Io { path: path.to_path_buf(), source }
}

/// Write `employee` to `path`, replacing any existing file.
pub fn save(path: &Path, employee: &Employee) -> Result<()> {
  let text = crate::serialize(employee)?;
  std::fs::write(path, text).map_err(io_error(path))?;
  tracing::debug!(path = %path.display(), "saved employee record");
  Ok(())
}

/// Write `employee` into `dir` under its [`file_name`] and return the path.
pub fn save_in(dir: &Path, employee: &Employee) -> Result<PathBuf> {
  let path = dir.join(file_name(employee));
  save(&path, employee)?;
  Ok(path)
}

/// Read and parse the save file at `path`.
pub fn load(path: &Path) -> Result<Employee> {
  let text = std::fs::read_to_string(path).map_err(io_error(path))?;
  let employee = crate::parse(&text)?;
  tracing::debug!(
    path = %path.display(),
    periods = employee.periods.len(),
    "loaded employee record"
  );
  Ok(employee)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn named(name: &str) -> Employee {
    Employee { name: name.to_string(), ..Employee::new() }
  }

  #[test]
  fn spaces_become_underscores() {
    assert_eq!(file_name(&named("Иванов Иван Иванович")), "Иванов_Иван_Иванович_стаж.txt");
  }

  #[test]
  fn whitespace_runs_collapse() {
    assert_eq!(file_name(&named("Иванов  \t Иван")), "Иванов_Иван_стаж.txt");
    assert_eq!(file_name(&named(" Иванов ")), "_Иванов__стаж.txt");
  }

  #[test]
  fn empty_name_is_degenerate_but_allowed() {
    assert_eq!(file_name(&named("")), "_стаж.txt");
  }

  #[test]
  fn accepted_extensions() {
    assert!(has_accepted_extension(Path::new("a_стаж.txt")));
    assert!(has_accepted_extension(Path::new("backup.JSON")));
    assert!(!has_accepted_extension(Path::new("notes.md")));
    assert!(!has_accepted_extension(Path::new("no_extension")));
  }

  #[test]
  fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut employee = named("Петров Пётр");
    employee.rank = Some("сержант".into());

    let path = save_in(dir.path(), &employee).unwrap();
    assert_eq!(path.file_name().unwrap(), "Петров_Пётр_стаж.txt");
    assert_eq!(load(&path).unwrap(), employee);
  }

  #[test]
  fn non_finite_coefficient_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut employee = named("Петров Пётр");
    employee.periods[0].coefficient = f64::INFINITY;

    let err = save_in(dir.path(), &employee).unwrap_err();
    assert!(matches!(err, Error::NonFiniteCoefficient { position: 1, .. }));
    assert!(!dir.path().join(file_name(&employee)).exists());
  }

  #[test]
  fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = load(&path).unwrap_err();
    let Error::Io { path: reported, .. } = err else {
      panic!("expected Io error")
    };
    assert_eq!(reported, path);
  }
}
