use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use super::schema::{Config, DisplayConfig};
use crate::scoring::{ScoringConfig, DEFAULT_MAX_ALERTS};

const HEADER: &str = "\
# intake-scores configuration
#
# scoring.adjustments lists every scored question and the signed change
# each answer applies to its domain score (domains start at 10 and are
# clamped to 1..10). Edit a value to retune it; delete entries to fall
# back to the built-in weight.
";

/// Config with the whole built-in weight table spelled out.
pub fn default_config() -> Config {
    Config {
        scoring: Some(ScoringConfig::with_all_defaults()),
        display: Some(DisplayConfig {
            max_alerts: Some(DEFAULT_MAX_ALERTS),
        }),
    }
}

/// Write [`default_config`] to `path`.
///
/// Refuses to replace an existing file unless `force` is set. The write
/// is atomic, so an interrupted run never leaves a half-written config.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&default_config())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .and_then(|_| file.write_all(yaml.as_bytes()))
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}
