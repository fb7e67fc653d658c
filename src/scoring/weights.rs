use std::collections::HashMap;

use crate::questionnaire::{catalog, AnswerOption, Question};

use super::config::ScoringConfig;

/// Resolved, read-only adjustment table.
///
/// Built once from the config and then shared by reference across every
/// evaluation. Options without an override use their built-in adjustment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    overrides: HashMap<(Question, &'static str), f64>,
}

impl WeightTable {
    /// Table with only the built-in adjustments.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Resolve overrides from config. Entries naming an unknown question or
    /// option, or holding a non-finite number, are skipped; run
    /// `validate_scoring` first to surface them.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let mut overrides = HashMap::new();
        let Some(ref adjustments) = config.adjustments else {
            return Self { overrides };
        };

        for (key, table) in adjustments {
            let Some(question) = Question::from_key(key) else {
                continue;
            };
            let options = catalog(question);
            for (label, adjustment) in table {
                if !adjustment.is_finite() {
                    continue;
                }
                let Some((known, default)) = options.iter().find(|(l, _)| *l == label.as_str()) else {
                    continue;
                };
                if adjustment != default {
                    overrides.insert((question, *known), *adjustment);
                }
            }
        }

        Self { overrides }
    }

    pub fn adjustment<O: AnswerOption>(&self, option: O) -> f64 {
        self.overrides
            .get(&(O::QUESTION, option.label()))
            .copied()
            .unwrap_or_else(|| option.default_adjustment())
    }

    /// Number of options whose adjustment differs from the built-in one.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
