use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::options::*;
use super::question::{Question, QuestionKind};

/// Something in a submitted answer map that could not be used.
///
/// Issues never stop an evaluation: the offending answer is treated as
/// unanswered and contributes nothing to any score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerIssue {
    #[error("unknown question key '{key}'")]
    UnknownKey { key: String },

    #[error("{question}: unrecognized option '{value}'")]
    UnknownOption { question: Question, value: String },

    #[error("{question}: expected {expected}")]
    WrongShape {
        question: Question,
        expected: &'static str,
    },
}

/// One patient's questionnaire answers in typed form.
///
/// `None` (or an empty list) means the question was not answered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSet {
    pub sleep_quality: Option<SleepQuality>,
    pub sleep_hours: Option<SleepHours>,
    pub night_wakings: Option<NightWakings>,
    pub sleep_medication: Option<SleepMedication>,
    pub waking_state: Option<WakingState>,
    pub screen_use: Option<ScreenUse>,

    pub stress_level: Option<StressLevel>,
    pub irritability: Option<Irritability>,
    pub mood_changes: Option<MoodChanges>,
    pub unexplained_sadness: Option<UnexplainedSadness>,
    pub decision_impairment: Option<DecisionImpairment>,
    pub psychiatric_medication: Option<PsychiatricMedication>,

    pub exercise_frequency: Option<ExerciseFrequency>,
    pub exercise_energy: Option<ExerciseEnergy>,
    pub performance_trend: Option<PerformanceTrend>,
    pub effort_intolerance: Option<EffortIntolerance>,

    pub diet_rating: Option<DietRating>,
    pub harmful_foods: Vec<HarmfulFood>,
    pub carb_frequency: Option<CarbFrequency>,
    pub cravings: Option<Cravings>,

    pub bowel_pattern: Option<BowelPattern>,
    pub stool_form: Option<StoolForm>,
    pub digestive_symptoms: Vec<DigestiveSymptom>,
    pub gut_medications: Vec<GutMedication>,

    pub fatigue: Option<ChronicFatigue>,
    pub muscle_weakness: Option<MuscleWeakness>,
    pub daytime_tiredness: Option<DaytimeTiredness>,
    pub muscle_pain: Option<MusclePain>,
    pub cold_tolerance: Option<ColdTolerance>,

    pub morning_disposition: Option<MorningDisposition>,
    pub mood_swings: Option<MoodSwings>,
    pub decision_capacity: Option<DecisionCapacity>,
    pub libido: Option<Libido>,
    pub menstrual_cycle: Option<MenstrualCycle>,
    pub hair_loss: Option<HairLoss>,
    pub weight_gain: Option<WeightGain>,

    /// Free-text answers, kept verbatim for the clinician.
    pub notes: BTreeMap<Question, String>,
}

impl AnswerSet {
    /// Build a typed answer set from a raw answer map.
    ///
    /// `null` and empty strings count as unanswered. A multi-choice answer
    /// may be a list of labels or a single label; repeated labels count once.
    pub fn from_json(raw: &Map<String, Value>) -> (Self, Vec<AnswerIssue>) {
        let mut answers = AnswerSet::default();
        let mut issues = Vec::new();

        for (key, value) in raw {
            let Some(question) = Question::from_key(key) else {
                issues.push(AnswerIssue::UnknownKey { key: key.clone() });
                continue;
            };
            if is_unanswered(value) {
                continue;
            }
            if question.kind() == QuestionKind::FreeText {
                match free_text(value) {
                    Some(text) => {
                        answers.notes.insert(question, text);
                    }
                    None => issues.push(AnswerIssue::WrongShape {
                        question,
                        expected: "free text",
                    }),
                }
                continue;
            }
            answers.assign(question, value, &mut issues);
        }

        (answers, issues)
    }

    /// The free-text stress factors answer, if it holds anything besides whitespace.
    pub fn stress_factors(&self) -> Option<&str> {
        self.notes
            .get(&Question::EstresseFatores)
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
    }

    fn assign(&mut self, question: Question, value: &Value, issues: &mut Vec<AnswerIssue>) {
        match question {
            Question::SonoQualidade => single(&mut self.sleep_quality, value, issues),
            Question::SonoHoras => single(&mut self.sleep_hours, value, issues),
            Question::SonoAcorda => single(&mut self.night_wakings, value, issues),
            Question::SonoRemedio => single(&mut self.sleep_medication, value, issues),
            Question::SonoDespertar => single(&mut self.waking_state, value, issues),
            Question::SonoTelas => single(&mut self.screen_use, value, issues),

            Question::EstresseNivel => single(&mut self.stress_level, value, issues),
            Question::EstresseIrritabilidade => single(&mut self.irritability, value, issues),
            Question::EstresseHumor => single(&mut self.mood_changes, value, issues),
            Question::EstresseTristeza => single(&mut self.unexplained_sadness, value, issues),
            Question::EstresseDecisao => single(&mut self.decision_impairment, value, issues),
            Question::EstresseMedicacao => single(&mut self.psychiatric_medication, value, issues),

            Question::AtividadeFrequencia => single(&mut self.exercise_frequency, value, issues),
            Question::AtividadeEnergia => single(&mut self.exercise_energy, value, issues),
            Question::AtividadePerformance => single(&mut self.performance_trend, value, issues),
            Question::AtividadeIntolerancia => single(&mut self.effort_intolerance, value, issues),

            Question::AlimentacaoAvaliacao => single(&mut self.diet_rating, value, issues),
            Question::AlimentacaoConsome => multi(&mut self.harmful_foods, value, issues),
            Question::AlimentacaoCarboidratos => single(&mut self.carb_frequency, value, issues),
            Question::AlimentacaoDesejos => single(&mut self.cravings, value, issues),

            Question::IntestinoFuncionamento => single(&mut self.bowel_pattern, value, issues),
            Question::IntestinoBristol => single(&mut self.stool_form, value, issues),
            Question::IntestinoSintomas => multi(&mut self.digestive_symptoms, value, issues),
            Question::IntestinoMedicamentos => multi(&mut self.gut_medications, value, issues),

            Question::EnergiaFadiga => single(&mut self.fatigue, value, issues),
            Question::EnergiaFraqueza => single(&mut self.muscle_weakness, value, issues),
            Question::EnergiaCansaco => single(&mut self.daytime_tiredness, value, issues),
            Question::EnergiaDores => single(&mut self.muscle_pain, value, issues),
            Question::EnergiaFrio => single(&mut self.cold_tolerance, value, issues),

            Question::HormoniosDisposicao => single(&mut self.morning_disposition, value, issues),
            Question::HormoniosHumor => single(&mut self.mood_swings, value, issues),
            Question::HormoniosDecisao => single(&mut self.decision_capacity, value, issues),
            Question::HormoniosLibido => single(&mut self.libido, value, issues),
            Question::HormoniosCiclo => single(&mut self.menstrual_cycle, value, issues),
            Question::HormoniosCabelo => single(&mut self.hair_loss, value, issues),
            Question::HormoniosPeso => single(&mut self.weight_gain, value, issues),

            Question::Motivo
            | Question::SonoHorario
            | Question::SonoAtrapalha
            | Question::EstresseRuidos
            | Question::EstressePsicoterapia
            | Question::EstresseTrabalho
            | Question::EstresseFatores => {}
        }
    }
}

fn is_unanswered(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn free_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn single<O: AnswerOption>(slot: &mut Option<O>, value: &Value, issues: &mut Vec<AnswerIssue>) {
    let Value::String(label) = value else {
        issues.push(AnswerIssue::WrongShape {
            question: O::QUESTION,
            expected: "an option label",
        });
        return;
    };
    match O::from_label(label) {
        Some(option) => *slot = Some(option),
        None => issues.push(AnswerIssue::UnknownOption {
            question: O::QUESTION,
            value: label.clone(),
        }),
    }
}

fn multi<O: AnswerOption>(slot: &mut Vec<O>, value: &Value, issues: &mut Vec<AnswerIssue>) {
    let labels: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::String(_) => vec![value],
        _ => {
            issues.push(AnswerIssue::WrongShape {
                question: O::QUESTION,
                expected: "a list of option labels",
            });
            return;
        }
    };

    for item in labels {
        let Value::String(label) = item else {
            issues.push(AnswerIssue::WrongShape {
                question: O::QUESTION,
                expected: "a list of option labels",
            });
            continue;
        };
        match O::from_label(label) {
            Some(option) if !slot.contains(&option) => slot.push(option),
            Some(_) => {}
            None => issues.push(AnswerIssue::UnknownOption {
                question: O::QUESTION,
                value: label.clone(),
            }),
        }
    }
}
