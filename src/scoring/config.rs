use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::questionnaire::{catalog, Question};

/// Per-option weight overrides, keyed by question key then option label.
pub type AdjustmentOverrides = BTreeMap<String, BTreeMap<String, f64>>;

/// Scoring configuration.
///
/// Every option already has a built-in adjustment. This section only
/// lists the ones a clinic wants to tune. Adjustments are signed: negative
/// values lower the domain score, positive values raise it.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   adjustments:
///     sono_horas:
///       "Menos de 6h": -3.5
///     alimentacao_consome:
///       "Álcool": -0.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub adjustments: Option<AdjustmentOverrides>,
}

impl ScoringConfig {
    /// A config that spells out every built-in adjustment.
    /// Used as the starting point for `init`.
    pub fn with_all_defaults() -> Self {
        let mut adjustments = AdjustmentOverrides::new();
        for question in Question::ALL {
            let options = catalog(*question);
            if options.is_empty() {
                continue;
            }
            let table = options
                .into_iter()
                .map(|(label, adjustment)| (label.to_string(), adjustment))
                .collect();
            adjustments.insert(question.key().to_string(), table);
        }
        Self {
            adjustments: Some(adjustments),
        }
    }
}
