use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest possible domain score; every domain starts here.
pub const SCORE_CEILING: f64 = 10.0;
/// Lowest possible domain score.
pub const SCORE_FLOOR: f64 = 1.0;

/// One of the seven wellness domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "sono")]
    Sleep,
    #[serde(rename = "estresse")]
    Stress,
    #[serde(rename = "atividadeFisica")]
    PhysicalActivity,
    #[serde(rename = "alimentacao")]
    Nutrition,
    #[serde(rename = "intestino")]
    Digestion,
    #[serde(rename = "energia")]
    Energy,
    #[serde(rename = "hormonios")]
    Hormones,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Sleep,
        Domain::Stress,
        Domain::PhysicalActivity,
        Domain::Nutrition,
        Domain::Digestion,
        Domain::Energy,
        Domain::Hormones,
    ];

    /// Key used in stored score records.
    pub fn key(self) -> &'static str {
        match self {
            Domain::Sleep => "sono",
            Domain::Stress => "estresse",
            Domain::PhysicalActivity => "atividadeFisica",
            Domain::Nutrition => "alimentacao",
            Domain::Digestion => "intestino",
            Domain::Energy => "energia",
            Domain::Hormones => "hormonios",
        }
    }

    /// Name shown to clinicians.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Sleep => "Sono",
            Domain::Stress => "Estresse",
            Domain::PhysicalActivity => "Atividade Física",
            Domain::Nutrition => "Alimentação",
            Domain::Digestion => "Intestino",
            Domain::Energy => "Energia",
            Domain::Hormones => "Hormônios",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores for all seven domains, each in [1, 10] with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "sono")]
    pub sleep: f64,
    #[serde(rename = "estresse")]
    pub stress: f64,
    #[serde(rename = "atividadeFisica")]
    pub physical_activity: f64,
    #[serde(rename = "alimentacao")]
    pub nutrition: f64,
    #[serde(rename = "intestino")]
    pub digestion: f64,
    #[serde(rename = "energia")]
    pub energy: f64,
    #[serde(rename = "hormonios")]
    pub hormones: f64,
}

impl ScoreVector {
    pub fn uniform(score: f64) -> Self {
        Self {
            sleep: score,
            stress: score,
            physical_activity: score,
            nutrition: score,
            digestion: score,
            energy: score,
            hormones: score,
        }
    }

    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Sleep => self.sleep,
            Domain::Stress => self.stress,
            Domain::PhysicalActivity => self.physical_activity,
            Domain::Nutrition => self.nutrition,
            Domain::Digestion => self.digestion,
            Domain::Energy => self.energy,
            Domain::Hormones => self.hormones,
        }
    }

    pub fn set(&mut self, domain: Domain, score: f64) {
        let slot = match domain {
            Domain::Sleep => &mut self.sleep,
            Domain::Stress => &mut self.stress,
            Domain::PhysicalActivity => &mut self.physical_activity,
            Domain::Nutrition => &mut self.nutrition,
            Domain::Digestion => &mut self.digestion,
            Domain::Energy => &mut self.energy,
            Domain::Hormones => &mut self.hormones,
        };
        *slot = score;
    }

    /// Domains paired with their scores, in the fixed domain order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, f64)> + '_ {
        Domain::ALL.into_iter().map(move |domain| (domain, self.get(domain)))
    }
}

/// Traffic-light reading of a score, as the clinic dashboard colours it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Attention,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            ScoreBand::Good
        } else if score >= 5.0 {
            ScoreBand::Attention
        } else {
            ScoreBand::Poor
        }
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round, then clamp into [`SCORE_FLOOR`, `SCORE_CEILING`].
pub fn finalize_score(raw: f64) -> f64 {
    round_tenth(raw).clamp(SCORE_FLOOR, SCORE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_tenth_half_away_from_zero() {
        assert_eq!(round_tenth(3.25), 3.3);
        assert_eq!(round_tenth(3.04), 3.0);
        assert_eq!(round_tenth(-0.25), -0.3);
    }

    #[test]
    fn test_finalize_clamps() {
        assert_eq!(finalize_score(-7.5), 1.0);
        assert_eq!(finalize_score(0.96), 1.0);
        assert_eq!(finalize_score(10.5), 10.0);
        assert_eq!(finalize_score(3.5), 3.5);
    }

    #[test]
    fn test_score_vector_serializes_with_stored_keys() {
        let scores = ScoreVector::uniform(10.0);
        let json = serde_json::to_value(scores).unwrap();
        for domain in Domain::ALL {
            assert_eq!(json[domain.key()], 10.0);
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut scores = ScoreVector::uniform(10.0);
        scores.set(Domain::Digestion, 4.2);
        assert_eq!(scores.get(Domain::Digestion), 4.2);
        assert_eq!(scores.iter().filter(|(_, s)| *s == 10.0).count(), 6);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::from_score(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(6.9), ScoreBand::Attention);
        assert_eq!(ScoreBand::from_score(5.0), ScoreBand::Attention);
        assert_eq!(ScoreBand::from_score(4.9), ScoreBand::Poor);
    }
}
