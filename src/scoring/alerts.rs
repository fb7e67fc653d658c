use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Domain, ScoreVector};
use crate::questionnaire::options::{
    DigestiveSymptom, NightWakings, SleepHours, SleepMedication, StoolForm, StressLevel,
};
use crate::questionnaire::AnswerSet;

/// Sleep at or below this is critical.
pub const SLEEP_CRITICAL_AT: f64 = 3.0;
/// Stress at or below this is critical.
pub const STRESS_CRITICAL_AT: f64 = 3.0;
/// Digestion at or below this is moderate.
pub const DIGESTION_MODERATE_AT: f64 = 4.0;
/// Energy at or below this is moderate.
pub const ENERGY_MODERATE_AT: f64 = 4.0;

/// Alert severity. Orders critical before moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Moderate,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRÍTICO",
            Severity::Moderate => "MODERADO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A domain flagged for clinical attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub domain: Domain,
    pub severity: Severity,
    pub score: f64,
    pub reason: String,
}

/// Derive alerts from a scored answer set.
///
/// Only sleep, stress, digestion and energy have trigger rules; other
/// domains never alert. The result is ordered critical first, then by
/// ascending score, and otherwise keeps rule order.
pub fn compute_alerts(answers: &AnswerSet, scores: &ScoreVector) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if scores.sleep <= SLEEP_CRITICAL_AT {
        let mut reasons = Vec::new();
        if answers.sleep_hours == Some(SleepHours::UnderSix) {
            reasons.push("dorme <6h");
        }
        if matches!(
            answers.night_wakings,
            Some(NightWakings::ThreeToFour | NightWakings::MoreThanFour)
        ) {
            reasons.push("acorda 3-4x/noite");
        }
        if answers.sleep_medication == Some(SleepMedication::Regularly) {
            reasons.push("usa medicação");
        }
        alerts.push(Alert {
            domain: Domain::Sleep,
            severity: Severity::Critical,
            score: scores.sleep,
            reason: with_details(format!("Sono crítico ({}/10)", scores.sleep), &reasons),
        });
    }

    // The top stress level is critical on its own, whatever the score.
    if scores.stress <= STRESS_CRITICAL_AT || answers.stress_level == Some(StressLevel::VeryHigh) {
        let factors = answers
            .stress_factors()
            .unwrap_or("múltiplos fatores identificados");
        alerts.push(Alert {
            domain: Domain::Stress,
            severity: Severity::Critical,
            score: scores.stress,
            reason: format!("Estresse muito alto ({}/10): {}", scores.stress, factors),
        });
    }

    if scores.digestion <= DIGESTION_MODERATE_AT {
        let mut reasons = Vec::new();
        if answers.stool_form == Some(StoolForm::Hard) {
            reasons.push("fezes ressecadas (Bristol 1-2)");
        }
        if answers
            .digestive_symptoms
            .contains(&DigestiveSymptom::AbdominalPain)
        {
            reasons.push("dor abdominal");
        }
        alerts.push(Alert {
            domain: Domain::Digestion,
            severity: Severity::Moderate,
            score: scores.digestion,
            reason: with_details("Intestino irregular".to_string(), &reasons),
        });
    }

    if scores.energy <= ENERGY_MODERATE_AT {
        alerts.push(Alert {
            domain: Domain::Energy,
            severity: Severity::Moderate,
            score: scores.energy,
            reason: format!(
                "Fadiga persistente ({}/10): energia celular comprometida",
                scores.energy
            ),
        });
    }

    sort_alerts(&mut alerts);
    alerts
}

/// Stable sort: severity first, then lowest score first.
pub fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.score.total_cmp(&b.score))
    });
}

fn with_details(header: String, details: &[&str]) -> String {
    if details.is_empty() {
        header
    } else {
        format!("{}: {}", header, details.join(" + "))
    }
}
