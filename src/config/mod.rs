pub mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, DisplayConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/intake-scores/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("intake-scores"))
}

/// Get the default config file path (~/.config/intake-scores/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from `path`, or from the default location.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    load_config_or_default(path, get_config_path().ok())
}

/// With an explicit `path` the file must exist. Otherwise `default` is
/// tried, and a missing default file (or no default at all) means
/// built-in defaults.
pub fn load_config_or_default(path: Option<PathBuf>, default: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!("Config file not found at {}", path.display());
        }
        return read_config(&path);
    }

    match default {
        Some(default_path) if default_path.exists() => read_config(&default_path),
        _ => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = env::temp_dir().join("intake_scores_test_no_config.yaml");
        let _ = fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = env::temp_dir().join("intake_scores_test_config.yaml");
        fs::write(&path, "display:\n  max_alerts: 2\n").unwrap();
        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.max_alerts(), 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_default_file_means_defaults() {
        let default = env::temp_dir().join("intake_scores_test_no_default_config.yaml");
        let _ = fs::remove_file(&default);
        let config = load_config_or_default(None, Some(default)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_alerts(), 5);

        assert_eq!(load_config_or_default(None, None).unwrap(), Config::default());
    }

    #[test]
    fn test_existing_default_file_is_read() {
        let default = env::temp_dir().join("intake_scores_test_default_config.yaml");
        fs::write(&default, "display:\n  max_alerts: 7\n").unwrap();
        let config = load_config_or_default(None, Some(default.clone())).unwrap();
        assert_eq!(config.max_alerts(), 7);
        let _ = fs::remove_file(&default);
    }

    #[test]
    fn test_explicit_path_wins_over_default() {
        let explicit = env::temp_dir().join("intake_scores_test_explicit_over_default.yaml");
        let default = env::temp_dir().join("intake_scores_test_default_shadowed.yaml");
        fs::write(&explicit, "display:\n  max_alerts: 1\n").unwrap();
        fs::write(&default, "display:\n  max_alerts: 9\n").unwrap();

        let config = load_config_or_default(Some(explicit.clone()), Some(default.clone())).unwrap();
        assert_eq!(config.max_alerts(), 1);

        let _ = fs::remove_file(&explicit);
        let _ = fs::remove_file(&default);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let path = env::temp_dir().join("intake_scores_test_bad_config.yaml");
        fs::write(&path, "scoring: [unterminated\n").unwrap();
        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        let _ = fs::remove_file(&path);
    }
}
