use serde::{Deserialize, Serialize};

use crate::scoring::{ScoringConfig, DEFAULT_MAX_ALERTS};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Alerts listed before the rest are collapsed (default: 5)
    #[serde(default)]
    pub max_alerts: Option<usize>,
}

impl Config {
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn max_alerts(&self) -> usize {
        self.display
            .as_ref()
            .and_then(|d| d.max_alerts)
            .unwrap_or(DEFAULT_MAX_ALERTS)
    }
}
