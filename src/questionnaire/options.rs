use super::question::Question;

/// A closed set of answer labels for one scored question.
///
/// `default_adjustment` is the signed change applied to the domain score
/// when this option is chosen. Negative values are penalties.
pub trait AnswerOption: Copy + Eq + Sized + 'static {
    const QUESTION: Question;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn default_adjustment(self) -> f64;

    /// Exact match against the label the intake form submits.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

macro_rules! answer_options {
    ($(
        $(#[$meta:meta])*
        $name:ident for $question:ident {
            $($variant:ident => $label:literal, $adjustment:expr;)+
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $name {
                $($variant,)+
            }

            impl AnswerOption for $name {
                const QUESTION: Question = Question::$question;
                const ALL: &'static [Self] = &[$($name::$variant,)+];

                fn label(self) -> &'static str {
                    match self {
                        $($name::$variant => $label,)+
                    }
                }

                fn default_adjustment(self) -> f64 {
                    match self {
                        $($name::$variant => $adjustment,)+
                    }
                }
            }
        )+

        /// Every `(label, default adjustment)` pair a scored question accepts.
        /// Free-text questions have none.
        pub fn catalog(question: Question) -> Vec<(&'static str, f64)> {
            fn entries<O: AnswerOption>() -> Vec<(&'static str, f64)> {
                O::ALL.iter().map(|o| (o.label(), o.default_adjustment())).collect()
            }

            match question {
                $(Question::$question => entries::<$name>(),)+
                _ => Vec::new(),
            }
        }
    };
}

answer_options! {
    // Sleep

    SleepQuality for SonoQualidade {
        AlwaysPoor => "Durmo muito mal sempre", -4.0;
        MostlyPoor => "Na maioria das vezes durmo mal", -2.0;
        MostlyGood => "Na maioria das vezes durmo bem", -0.5;
    }

    /// Both short and long sleep are penalized.
    SleepHours for SonoHoras {
        UnderSix => "Menos de 6h", -3.0;
        SixToSeven => "6-7h", -1.0;
        SevenToEight => "7-8h", 0.0;
        OverEight => "Mais de 8h", -0.5;
    }

    NightWakings for SonoAcorda {
        MoreThanFour => "Mais de 4 vezes", -2.0;
        ThreeToFour => "3-4 vezes", -1.5;
        OneToTwo => "1-2 vezes", -0.5;
        None => "Não acordo", 0.0;
    }

    SleepMedication for SonoRemedio {
        Regularly => "Sim, regularmente", -1.5;
        Sometimes => "Às vezes", -0.5;
        No => "Não", 0.0;
    }

    WakingState for SonoDespertar {
        Exhausted => "Exausto, como se não tivesse dormido", -1.0;
        Tired => "Cansado, sinto que precisava de mais horas", -0.5;
        Rested => "Descansado e disposto", 0.0;
    }

    ScreenUse for SonoTelas {
        FallsAsleepWithScreen => "Durmo com TV/celular ligado", -1.0;
        UntilBedtime => "Uso até a hora de dormir", -0.5;
        StopsHourBefore => "Paro 1h antes de dormir", 0.0;
    }

    // Stress

    /// Self-reported stress level; the dominant stress weight.
    StressLevel for EstresseNivel {
        VeryHigh => "9-10 (muito alto)", -5.0;
        High => "7-8 (alto)", -3.0;
        Moderate => "5-6 (moderado)", -1.5;
        Low => "3-4 (baixo)", -0.5;
        VeryLow => "0-2 (muito baixo)", 0.0;
    }

    Irritability for EstresseIrritabilidade {
        Daily => "Diariamente", -1.5;
        Often => "Frequentemente", -1.0;
        Rarely => "Raramente", 0.0;
    }

    MoodChanges for EstresseHumor {
        Often => "Frequentemente", -1.0;
        Sometimes => "Às vezes", 0.0;
        Rarely => "Raramente", 0.0;
    }

    UnexplainedSadness for EstresseTristeza {
        Often => "Frequentemente", -1.0;
        Sometimes => "Às vezes", 0.0;
        Rarely => "Raramente", 0.0;
    }

    DecisionImpairment for EstresseDecisao {
        Significant => "Sim, significativamente", -1.5;
        Partial => "Parcialmente", -0.5;
        No => "Não", 0.0;
    }

    PsychiatricMedication for EstresseMedicacao {
        Yes => "Sim", -0.5;
        No => "Não", 0.0;
    }

    // Physical activity

    /// No bonus above three sessions a week.
    ExerciseFrequency for AtividadeFrequencia {
        Never => "Não me exercito", -5.0;
        OneToTwo => "1-2x por semana", -2.0;
        ThreeToFour => "3-4x por semana", 0.0;
        FiveToSix => "5-6x por semana", 0.0;
        Daily => "Diariamente", 0.0;
    }

    ExerciseEnergy for AtividadeEnergia {
        NoEnergy => "Sem energia", -2.0;
        LowEnergy => "Pouca energia", -1.0;
        Normal => "Energia normal", 0.0;
    }

    PerformanceTrend for AtividadePerformance {
        MuchWorse => "Piorou significativamente", -2.0;
        Worse => "Piorou", -1.0;
        Stable => "Estável", 0.0;
        Improved => "Melhorou", 0.5;
    }

    EffortIntolerance for AtividadeIntolerancia {
        Often => "Frequentemente", -1.5;
        Sometimes => "Às vezes", -0.5;
        Never => "Nunca", 0.0;
    }

    // Nutrition

    DietRating for AlimentacaoAvaliacao {
        VeryPoor => "0-3 (muito ruim)", -4.0;
        Fair => "4-6 (regular)", -2.0;
        Good => "7-8 (boa)", 0.0;
        Excellent => "9-10 (excelente)", 0.0;
    }

    HarmfulFood for AlimentacaoConsome {
        RefinedSugar => "Açúcar refinado", -0.5;
        Processed => "Alimentos processados", -0.5;
        Soda => "Refrigerantes", -0.5;
        Alcohol => "Álcool", -0.3;
    }

    CarbFrequency for AlimentacaoCarboidratos {
        EveryMeal => "Em todas as refeições", -1.0;
        TwoToThreeMeals => "2-3 refeições por dia", -0.3;
        OneMeal => "1 refeição por dia", 0.0;
    }

    Cravings for AlimentacaoDesejos {
        Sweets => "Doces", -0.5;
        Fatty => "Gordurosos", -0.3;
        Salty => "Salgados", 0.0;
        None => "Não tenho", 0.0;
    }

    // Digestion

    BowelPattern for IntestinoFuncionamento {
        Diarrhea => "Tenho diarreia frequente", -3.0;
        Constipated => "Sou obstipado na maioria das vezes", -2.0;
        AlternateDays => "Vou em dias alternados", -0.5;
        Daily => "Todos os dias", 0.0;
    }

    /// Bristol stool scale, grouped the way the form groups it.
    StoolForm for IntestinoBristol {
        Hard => "Tipo 1-2 (ressecadas/duras)", -2.0;
        Normal => "Tipo 3-4 (normais)", 0.0;
        Loose => "Tipo 5-6 (amolecidas)", -1.0;
        Liquid => "Tipo 7 (líquidas)", -2.0;
    }

    DigestiveSymptom for IntestinoSintomas {
        Bloating => "Distensão abdominal", -0.5;
        Gas => "Gases excessivos", -0.5;
        AbdominalPain => "Dor abdominal", -1.0;
        Heartburn => "Azia/queimação", -0.5;
        Reflux => "Refluxo", -0.8;
    }

    GutMedication for IntestinoMedicamentos {
        Antibiotics => "Antibióticos", -1.0;
        ProtonPumpInhibitors => "Inibidores de bomba de prótons", -0.5;
        AntiInflammatories => "Anti-inflamatórios", -0.3;
    }

    // Energy

    ChronicFatigue for EnergiaFadiga {
        Always => "Sempre", -4.0;
        Often => "Frequentemente", -2.0;
        Rarely => "Raramente", -0.5;
        Never => "Nunca", 0.0;
    }

    MuscleWeakness for EnergiaFraqueza {
        Often => "Frequentemente", -1.5;
        Sometimes => "Às vezes", -0.5;
        Never => "Nunca", 0.0;
    }

    DaytimeTiredness for EnergiaCansaco {
        Exhausted => "Fico exausto", -2.0;
        Significant => "Significativamente", -1.0;
        Slight => "Levemente", -0.3;
        No => "Não", 0.0;
    }

    MusclePain for EnergiaDores {
        Often => "Frequentemente", -1.0;
        Occasionally => "Ocasionalmente", -0.3;
        Never => "Nunca", 0.0;
    }

    ColdTolerance for EnergiaFrio {
        AlwaysColdExtremities => "Mãos e pés sempre frios", -1.0;
        ColderThanOthers => "Sinto mais frio que outros", -0.5;
        Normal => "Normal", 0.0;
    }

    // Hormones

    MorningDisposition for HormoniosDisposicao {
        WakesTired => "Acordo cansado", -2.0;
        LowDisposition => "Pouca disposição", -1.0;
        WakesRested => "Acordo disposto", 0.0;
    }

    MoodSwings for HormoniosHumor {
        Intense => "Oscilações intensas", -2.0;
        Frequent => "Oscilações frequentes", -1.0;
        Small => "Pequenas oscilações", -0.3;
        Stable => "Estável", 0.0;
    }

    DecisionCapacity for HormoniosDecisao {
        SeverelyImpaired => "Muito prejudicado", -1.5;
        Reduced => "Reduzido", -0.8;
        Normal => "Normal", 0.0;
    }

    Libido for HormoniosLibido {
        Absent => "Ausente", -2.0;
        VeryLow => "Muito baixa", -1.5;
        Reduced => "Reduzida", -0.8;
        Normal => "Normal", 0.0;
    }

    MenstrualCycle for HormoniosCiclo {
        Irregular => "Irregular", -1.0;
        Regular => "Regular", 0.0;
        NotApplicable => "Não se aplica", 0.0;
    }

    HairLoss for HormoniosCabelo {
        Intense => "Intensa", -1.5;
        Moderate => "Moderada", -1.0;
        Mild => "Leve", -0.3;
        None => "Não", 0.0;
    }

    WeightGain for HormoniosPeso {
        Significant => "Significativo (+5kg)", -1.5;
        Moderate => "Moderado (3-5kg)", -1.0;
        Mild => "Leve (1-3kg)", -0.3;
        None => "Não", 0.0;
    }
}
