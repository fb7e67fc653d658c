use super::config::ScoringConfig;
use crate::questionnaire::{catalog, Question};

/// Largest magnitude an adjustment may have. A single answer can never
/// move a score further than the whole scale.
pub const MAX_ADJUSTMENT: f64 = 10.0;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let Some(ref adjustments) = config.adjustments else {
        return Ok(());
    };

    for (key, table) in adjustments {
        let Some(question) = Question::from_key(key) else {
            errors.push(format!("scoring.adjustments.{}: unknown question", key));
            continue;
        };
        let Some(domain) = question.domain() else {
            errors.push(format!(
                "scoring.adjustments.{}: free-text question cannot be weighted",
                key
            ));
            continue;
        };

        let options = catalog(question);
        for (label, adjustment) in table {
            let path = format!("scoring.adjustments.{}[\"{}\"]", key, label);
            if !options.iter().any(|(known, _)| *known == label.as_str()) {
                errors.push(format!(
                    "{}: unknown option for this {} question",
                    path,
                    domain.label()
                ));
            }
            if !adjustment.is_finite() {
                errors.push(format!("{}: must be a finite number", path));
            } else if adjustment.abs() > MAX_ADJUSTMENT {
                errors.push(format!(
                    "{}: {} is outside [-{}, {}]",
                    path, adjustment, MAX_ADJUSTMENT, MAX_ADJUSTMENT
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
