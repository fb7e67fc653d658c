use serde::Serialize;
use serde_json::{Map, Value};

use super::alerts::{compute_alerts, Alert};
use super::domain::{finalize_score, Domain, ScoreVector, SCORE_CEILING};
use super::weights::WeightTable;
use crate::questionnaire::{AnswerIssue, AnswerOption, AnswerSet, Question};

/// One answer's effect on a domain score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub question: Question,
    pub option: &'static str,
    pub delta: f64,  // Signed; negative is a penalty
    pub before: f64, // Running score before this answer
    pub after: f64,  // Running score after this answer
}

/// Final score for one domain with the answers that shaped it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: f64,
    /// Sum of adjustments before rounding and clamping.
    pub raw: f64,
    pub adjustments: Vec<Adjustment>,
}

/// Everything derived from one answer map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub scores: ScoreVector,
    pub alerts: Vec<Alert>,
    pub issues: Vec<AnswerIssue>,
}

/// Parse a raw answer map, then score it and derive its alerts.
pub fn evaluate(raw: &Map<String, Value>, weights: &WeightTable) -> Evaluation {
    let (answers, issues) = AnswerSet::from_json(raw);
    let scores = compute_scores(&answers, weights);
    let alerts = compute_alerts(&answers, &scores);
    Evaluation {
        scores,
        alerts,
        issues,
    }
}

pub fn compute_scores(answers: &AnswerSet, weights: &WeightTable) -> ScoreVector {
    let mut scores = ScoreVector::uniform(SCORE_CEILING);
    for domain_score in score_domains(answers, weights) {
        scores.set(domain_score.domain, domain_score.score);
    }
    scores
}

/// Score every domain, keeping the per-answer breakdown.
pub fn score_domains(answers: &AnswerSet, weights: &WeightTable) -> Vec<DomainScore> {
    Domain::ALL
        .into_iter()
        .map(|domain| score_domain(domain, answers, weights))
        .collect()
}

pub fn score_domain(domain: Domain, a: &AnswerSet, weights: &WeightTable) -> DomainScore {
    let mut tally = Tally::new(weights);

    match domain {
        Domain::Sleep => {
            tally.single(a.sleep_quality);
            tally.single(a.sleep_hours);
            tally.single(a.night_wakings);
            tally.single(a.sleep_medication);
            tally.single(a.waking_state);
            tally.single(a.screen_use);
        }
        Domain::Stress => {
            tally.single(a.stress_level);
            tally.single(a.irritability);
            tally.single(a.mood_changes);
            tally.single(a.unexplained_sadness);
            tally.single(a.decision_impairment);
            tally.single(a.psychiatric_medication);
        }
        Domain::PhysicalActivity => {
            tally.single(a.exercise_frequency);
            tally.single(a.exercise_energy);
            tally.single(a.performance_trend);
            tally.single(a.effort_intolerance);
        }
        Domain::Nutrition => {
            tally.single(a.diet_rating);
            tally.multi(&a.harmful_foods);
            tally.single(a.carb_frequency);
            tally.single(a.cravings);
        }
        Domain::Digestion => {
            tally.single(a.bowel_pattern);
            tally.single(a.stool_form);
            tally.multi(&a.digestive_symptoms);
            tally.multi(&a.gut_medications);
        }
        Domain::Energy => {
            tally.single(a.fatigue);
            tally.single(a.muscle_weakness);
            tally.single(a.daytime_tiredness);
            tally.single(a.muscle_pain);
            tally.single(a.cold_tolerance);
        }
        Domain::Hormones => {
            tally.single(a.morning_disposition);
            tally.single(a.mood_swings);
            tally.single(a.decision_capacity);
            tally.single(a.libido);
            tally.single(a.menstrual_cycle);
            tally.single(a.hair_loss);
            tally.single(a.weight_gain);
        }
    }

    DomainScore {
        domain,
        score: finalize_score(tally.score),
        raw: tally.score,
        adjustments: tally.adjustments,
    }
}

struct Tally<'w> {
    weights: &'w WeightTable,
    score: f64,
    adjustments: Vec<Adjustment>,
}

impl<'w> Tally<'w> {
    fn new(weights: &'w WeightTable) -> Self {
        Self {
            weights,
            score: SCORE_CEILING,
            adjustments: Vec::new(),
        }
    }

    fn single<O: AnswerOption>(&mut self, answer: Option<O>) {
        if let Some(option) = answer {
            self.apply(option);
        }
    }

    fn multi<O: AnswerOption>(&mut self, answers: &[O]) {
        for option in answers {
            self.apply(*option);
        }
    }

    fn apply<O: AnswerOption>(&mut self, option: O) {
        let delta = self.weights.adjustment(option);
        if delta == 0.0 {
            return;
        }
        let before = self.score;
        self.score += delta;
        self.adjustments.push(Adjustment {
            question: O::QUESTION,
            option: option.label(),
            delta,
            before,
            after: self.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::options::*;
    use crate::questionnaire::{catalog, QuestionKind};
    use crate::scoring::{AdjustmentOverrides, ScoringConfig};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn builtin_scores(answers: &AnswerSet) -> ScoreVector {
        compute_scores(answers, &WeightTable::builtin())
    }

    #[test]
    fn test_empty_answers_score_ceiling() {
        let scores = builtin_scores(&AnswerSet::default());
        assert_eq!(scores, ScoreVector::uniform(10.0));
    }

    #[test]
    fn test_sleep_scenario() {
        let answers = AnswerSet {
            sleep_hours: Some(SleepHours::UnderSix),
            night_wakings: Some(NightWakings::MoreThanFour),
            sleep_medication: Some(SleepMedication::Regularly),
            ..Default::default()
        };
        let scores = builtin_scores(&answers);
        // 10 - 3 - 2 - 1.5
        assert_eq!(scores.sleep, 3.5);
        assert_eq!(scores.stress, 10.0);
    }

    #[test]
    fn test_long_sleep_is_penalized() {
        let answers = AnswerSet {
            sleep_hours: Some(SleepHours::OverEight),
            ..Default::default()
        };
        assert_eq!(builtin_scores(&answers).sleep, 9.5);
    }

    #[test]
    fn test_all_sleep_penalties_clamp_to_floor() {
        let answers = AnswerSet {
            sleep_quality: Some(SleepQuality::AlwaysPoor),
            sleep_hours: Some(SleepHours::UnderSix),
            night_wakings: Some(NightWakings::MoreThanFour),
            sleep_medication: Some(SleepMedication::Regularly),
            waking_state: Some(WakingState::Exhausted),
            screen_use: Some(ScreenUse::FallsAsleepWithScreen),
            ..Default::default()
        };
        let breakdown = score_domain(Domain::Sleep, &answers, &WeightTable::builtin());
        // 10 - 4 - 3 - 2 - 1.5 - 1 - 1 = -2.5
        assert_eq!(breakdown.raw, -2.5);
        assert_eq!(breakdown.score, 1.0);
        assert_eq!(breakdown.adjustments.len(), 6);
    }

    #[test]
    fn test_stress_level_alone() {
        let answers = AnswerSet {
            stress_level: Some(StressLevel::VeryHigh),
            ..Default::default()
        };
        assert_eq!(builtin_scores(&answers).stress, 5.0);
    }

    #[test]
    fn test_stress_combined() {
        let answers = AnswerSet {
            stress_level: Some(StressLevel::High),
            irritability: Some(Irritability::Daily),
            mood_changes: Some(MoodChanges::Often),
            unexplained_sadness: Some(UnexplainedSadness::Often),
            decision_impairment: Some(DecisionImpairment::Partial),
            psychiatric_medication: Some(PsychiatricMedication::Yes),
            ..Default::default()
        };
        // 10 - 3 - 1.5 - 1 - 1 - 0.5 - 0.5
        assert_eq!(builtin_scores(&answers).stress, 2.5);
    }

    #[test]
    fn test_activity_improvement_bonus_caps_at_ceiling() {
        let answers = AnswerSet {
            exercise_frequency: Some(ExerciseFrequency::Daily),
            performance_trend: Some(PerformanceTrend::Improved),
            ..Default::default()
        };
        assert_eq!(builtin_scores(&answers).physical_activity, 10.0);

        let answers = AnswerSet {
            exercise_frequency: Some(ExerciseFrequency::OneToTwo),
            exercise_energy: Some(ExerciseEnergy::LowEnergy),
            performance_trend: Some(PerformanceTrend::Improved),
            ..Default::default()
        };
        // 10 - 2 - 1 + 0.5
        assert_eq!(builtin_scores(&answers).physical_activity, 7.5);
    }

    #[test]
    fn test_harmful_foods_sum_per_item() {
        let answers = AnswerSet {
            harmful_foods: vec![
                HarmfulFood::RefinedSugar,
                HarmfulFood::Processed,
                HarmfulFood::Soda,
            ],
            ..Default::default()
        };
        assert_eq!(builtin_scores(&answers).nutrition, 8.5);

        let answers = AnswerSet {
            diet_rating: Some(DietRating::Fair),
            harmful_foods: vec![
                HarmfulFood::RefinedSugar,
                HarmfulFood::Processed,
                HarmfulFood::Soda,
                HarmfulFood::Alcohol,
            ],
            carb_frequency: Some(CarbFrequency::EveryMeal),
            cravings: Some(Cravings::Sweets),
            ..Default::default()
        };
        // 10 - 2 - 1.5 - 0.3 - 1 - 0.5
        assert_eq!(builtin_scores(&answers).nutrition, 4.7);
    }

    #[test]
    fn test_digestion_multi_selects() {
        let answers = AnswerSet {
            bowel_pattern: Some(BowelPattern::Constipated),
            stool_form: Some(StoolForm::Hard),
            digestive_symptoms: vec![DigestiveSymptom::AbdominalPain, DigestiveSymptom::Reflux],
            gut_medications: vec![GutMedication::Antibiotics, GutMedication::AntiInflammatories],
            ..Default::default()
        };
        // 10 - 2 - 2 - 1 - 0.8 - 1 - 0.3
        assert_eq!(builtin_scores(&answers).digestion, 2.9);
    }

    #[test]
    fn test_energy_and_hormones() {
        let answers = AnswerSet {
            fatigue: Some(ChronicFatigue::Often),
            muscle_weakness: Some(MuscleWeakness::Sometimes),
            daytime_tiredness: Some(DaytimeTiredness::Slight),
            muscle_pain: Some(MusclePain::Occasionally),
            cold_tolerance: Some(ColdTolerance::ColderThanOthers),
            morning_disposition: Some(MorningDisposition::LowDisposition),
            mood_swings: Some(MoodSwings::Small),
            decision_capacity: Some(DecisionCapacity::Reduced),
            libido: Some(Libido::Reduced),
            menstrual_cycle: Some(MenstrualCycle::Irregular),
            hair_loss: Some(HairLoss::Mild),
            weight_gain: Some(WeightGain::Moderate),
            ..Default::default()
        };
        let scores = builtin_scores(&answers);
        // 10 - 2 - 0.5 - 0.3 - 0.3 - 0.5
        assert_eq!(scores.energy, 6.4);
        // 10 - 1 - 0.3 - 0.8 - 0.8 - 1 - 0.3 - 1
        assert_eq!(scores.hormones, 4.8);
    }

    #[test]
    fn test_neutral_options_leave_no_trace() {
        let answers = AnswerSet {
            sleep_hours: Some(SleepHours::SevenToEight),
            exercise_frequency: Some(ExerciseFrequency::ThreeToFour),
            ..Default::default()
        };
        let domains = score_domains(&answers, &WeightTable::builtin());
        assert!(domains.iter().all(|d| d.adjustments.is_empty()));
        assert!(domains.iter().all(|d| d.score == 10.0));
    }

    #[test]
    fn test_breakdown_tracks_running_score() {
        let answers = AnswerSet {
            sleep_hours: Some(SleepHours::UnderSix),
            sleep_medication: Some(SleepMedication::Sometimes),
            ..Default::default()
        };
        let breakdown = score_domain(Domain::Sleep, &answers, &WeightTable::builtin());
        assert_eq!(breakdown.adjustments.len(), 2);
        assert_eq!(breakdown.adjustments[0].option, "Menos de 6h");
        assert_eq!(breakdown.adjustments[0].before, 10.0);
        assert_eq!(breakdown.adjustments[0].after, 7.0);
        assert_eq!(breakdown.adjustments[1].question, Question::SonoRemedio);
        assert_eq!(breakdown.adjustments[1].after, 6.5);
        assert_eq!(breakdown.score, 6.5);
    }

    #[test]
    fn test_override_changes_score() {
        let mut table = BTreeMap::new();
        table.insert("Menos de 6h".to_string(), -5.0);
        let mut adjustments = AdjustmentOverrides::new();
        adjustments.insert("sono_horas".to_string(), table);
        let weights = WeightTable::from_config(&ScoringConfig {
            adjustments: Some(adjustments),
        });

        let answers = AnswerSet {
            sleep_hours: Some(SleepHours::UnderSix),
            ..Default::default()
        };
        assert_eq!(compute_scores(&answers, &weights).sleep, 5.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let worst = AnswerSet {
            stress_level: Some(StressLevel::VeryHigh),
            irritability: Some(Irritability::Daily),
            mood_changes: Some(MoodChanges::Often),
            unexplained_sadness: Some(UnexplainedSadness::Often),
            decision_impairment: Some(DecisionImpairment::Significant),
            psychiatric_medication: Some(PsychiatricMedication::Yes),
            exercise_frequency: Some(ExerciseFrequency::Never),
            exercise_energy: Some(ExerciseEnergy::NoEnergy),
            performance_trend: Some(PerformanceTrend::MuchWorse),
            effort_intolerance: Some(EffortIntolerance::Often),
            diet_rating: Some(DietRating::VeryPoor),
            fatigue: Some(ChronicFatigue::Always),
            daytime_tiredness: Some(DaytimeTiredness::Exhausted),
            ..Default::default()
        };
        for (domain, score) in builtin_scores(&worst).iter() {
            assert!((1.0..=10.0).contains(&score), "{} out of range: {}", domain, score);
        }
    }

    fn assert_in_range(scores: &ScoreVector, context: &str) {
        for (domain, score) in scores.iter() {
            assert!(
                (1.0..=10.0).contains(&score),
                "{} out of range ({}): {}",
                domain,
                context,
                score
            );
        }
    }

    #[test]
    fn test_every_option_keeps_scores_in_range() {
        let weights = WeightTable::builtin();
        let mut worst = Map::new();
        let mut best = Map::new();

        for question in Question::ALL {
            if question.domain().is_none() {
                continue;
            }
            let options = catalog(*question);

            for (label, _) in &options {
                let mut single = Map::new();
                single.insert(question.key().to_string(), json!(label));
                let evaluation = evaluate(&single, &weights);
                assert!(evaluation.issues.is_empty(), "{} {:?}", question, label);
                assert_in_range(&evaluation.scores, label);
            }

            let lowest = options.iter().min_by(|a, b| a.1.total_cmp(&b.1));
            let highest = options.iter().max_by(|a, b| a.1.total_cmp(&b.1));
            match question.kind() {
                QuestionKind::MultiChoice => {
                    let penalties: Vec<&str> = options
                        .iter()
                        .filter(|(_, weight)| *weight < 0.0)
                        .map(|(label, _)| *label)
                        .collect();
                    worst.insert(question.key().to_string(), json!(penalties));
                }
                _ => {
                    if let Some((label, _)) = lowest {
                        worst.insert(question.key().to_string(), json!(label));
                    }
                    if let Some((label, _)) = highest {
                        best.insert(question.key().to_string(), json!(label));
                    }
                }
            }
        }

        let worst = evaluate(&worst, &weights);
        assert!(worst.issues.is_empty());
        assert_in_range(&worst.scores, "every worst answer");
        assert_eq!(worst.scores.sleep, 1.0);
        assert_eq!(worst.scores.stress, 1.0);

        // The improvement bonus cannot lift a domain past the ceiling.
        // Sleep quality has no neutral option, so its best is -0.5.
        let best = evaluate(&best, &weights);
        assert!(best.issues.is_empty());
        let mut expected = ScoreVector::uniform(10.0);
        expected.sleep = 9.5;
        assert_eq!(best.scores, expected);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let raw = json!({
            "sono_horas": "Menos de 6h",
            "sono_acorda": "3-4 vezes",
            "estresse_nivel": "9-10 (muito alto)",
            "intestino_bristol": "Tipo 7 (líquidas)",
            "energia_fadiga": "Sempre",
            "pergunta_extra": "?",
        });
        let Value::Object(map) = raw else { unreachable!() };
        let weights = WeightTable::builtin();
        let first = evaluate(&map, &weights);
        let second = evaluate(&map, &weights);
        assert_eq!(first, second);
        assert_eq!(first.issues.len(), 1);
    }

    #[test]
    fn test_evaluate_nutrition_from_json() {
        let raw = json!({
            "alimentacao_consome": ["Açúcar refinado", "Alimentos processados", "Refrigerantes"],
            "alimentacao_desejos": "Gordurosos",
        });
        let Value::Object(map) = raw else { unreachable!() };
        let evaluation = evaluate(&map, &WeightTable::builtin());
        // 10 - 1.5 - 0.3
        assert_eq!(evaluation.scores.nutrition, 8.2);
        assert!(evaluation.issues.is_empty());
    }
}
