//! Layered configuration: built-in defaults, then the optional TOML file,
//! then `STAZH_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  /// Where `new` and `export` write save files.
  pub output_dir:          PathBuf,
  /// Coefficient for periods created without `--coefficient`.
  pub default_coefficient: f64,
}

impl CliConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("output_dir", ".")?
      .set_default("default_coefficient", 1.0)?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("STAZH"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    let cfg: CliConfig = settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")?;

    ensure!(
      cfg.default_coefficient.is_finite() && cfg.default_coefficient > 0.0,
      "default_coefficient must be positive, got {}",
      cfg.default_coefficient
    );
    Ok(cfg)
  }
}
