use std::fmt;

use serde::{Serialize, Serializer};

use crate::scoring::Domain;

/// How a question is answered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// One option label from a fixed list.
    SingleChoice,
    /// Any number of option labels from a fixed list.
    MultiChoice,
    /// Free text kept for the clinician, never scored.
    FreeText,
}

/// Every question key the intake form submits.
///
/// Keys outside this list are reported as unknown rather than ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Question {
    Motivo,

    SonoQualidade,
    SonoHorario,
    SonoHoras,
    SonoAcorda,
    SonoRemedio,
    SonoDespertar,
    SonoTelas,
    SonoAtrapalha,

    EstresseNivel,
    EstresseIrritabilidade,
    EstresseHumor,
    EstresseRuidos,
    EstresseTristeza,
    EstresseDecisao,
    EstresseMedicacao,
    EstressePsicoterapia,
    EstresseTrabalho,
    EstresseFatores,

    AtividadeFrequencia,
    AtividadeEnergia,
    AtividadePerformance,
    AtividadeIntolerancia,

    AlimentacaoAvaliacao,
    AlimentacaoConsome,
    AlimentacaoCarboidratos,
    AlimentacaoDesejos,

    IntestinoFuncionamento,
    IntestinoBristol,
    IntestinoSintomas,
    IntestinoMedicamentos,

    EnergiaFadiga,
    EnergiaFraqueza,
    EnergiaCansaco,
    EnergiaDores,
    EnergiaFrio,

    HormoniosDisposicao,
    HormoniosHumor,
    HormoniosDecisao,
    HormoniosLibido,
    HormoniosCiclo,
    HormoniosCabelo,
    HormoniosPeso,
}

impl Question {
    pub const ALL: &'static [Question] = &[
        Question::Motivo,
        Question::SonoQualidade,
        Question::SonoHorario,
        Question::SonoHoras,
        Question::SonoAcorda,
        Question::SonoRemedio,
        Question::SonoDespertar,
        Question::SonoTelas,
        Question::SonoAtrapalha,
        Question::EstresseNivel,
        Question::EstresseIrritabilidade,
        Question::EstresseHumor,
        Question::EstresseRuidos,
        Question::EstresseTristeza,
        Question::EstresseDecisao,
        Question::EstresseMedicacao,
        Question::EstressePsicoterapia,
        Question::EstresseTrabalho,
        Question::EstresseFatores,
        Question::AtividadeFrequencia,
        Question::AtividadeEnergia,
        Question::AtividadePerformance,
        Question::AtividadeIntolerancia,
        Question::AlimentacaoAvaliacao,
        Question::AlimentacaoConsome,
        Question::AlimentacaoCarboidratos,
        Question::AlimentacaoDesejos,
        Question::IntestinoFuncionamento,
        Question::IntestinoBristol,
        Question::IntestinoSintomas,
        Question::IntestinoMedicamentos,
        Question::EnergiaFadiga,
        Question::EnergiaFraqueza,
        Question::EnergiaCansaco,
        Question::EnergiaDores,
        Question::EnergiaFrio,
        Question::HormoniosDisposicao,
        Question::HormoniosHumor,
        Question::HormoniosDecisao,
        Question::HormoniosLibido,
        Question::HormoniosCiclo,
        Question::HormoniosCabelo,
        Question::HormoniosPeso,
    ];

    /// The key used in submitted answer maps (e.g. `sono_horas`).
    pub fn key(self) -> &'static str {
        match self {
            Question::Motivo => "motivo",
            Question::SonoQualidade => "sono_qualidade",
            Question::SonoHorario => "sono_horario",
            Question::SonoHoras => "sono_horas",
            Question::SonoAcorda => "sono_acorda",
            Question::SonoRemedio => "sono_remedio",
            Question::SonoDespertar => "sono_despertar",
            Question::SonoTelas => "sono_telas",
            Question::SonoAtrapalha => "sono_atrapalha",
            Question::EstresseNivel => "estresse_nivel",
            Question::EstresseIrritabilidade => "estresse_irritabilidade",
            Question::EstresseHumor => "estresse_humor",
            Question::EstresseRuidos => "estresse_ruidos",
            Question::EstresseTristeza => "estresse_tristeza",
            Question::EstresseDecisao => "estresse_decisao",
            Question::EstresseMedicacao => "estresse_medicacao",
            Question::EstressePsicoterapia => "estresse_psicoterapia",
            Question::EstresseTrabalho => "estresse_trabalho",
            Question::EstresseFatores => "estresse_fatores",
            Question::AtividadeFrequencia => "atividade_frequencia",
            Question::AtividadeEnergia => "atividade_energia",
            Question::AtividadePerformance => "atividade_performance",
            Question::AtividadeIntolerancia => "atividade_intolerancia",
            Question::AlimentacaoAvaliacao => "alimentacao_avaliacao",
            Question::AlimentacaoConsome => "alimentacao_consome",
            Question::AlimentacaoCarboidratos => "alimentacao_carboidratos",
            Question::AlimentacaoDesejos => "alimentacao_desejos",
            Question::IntestinoFuncionamento => "intestino_funcionamento",
            Question::IntestinoBristol => "intestino_bristol",
            Question::IntestinoSintomas => "intestino_sintomas",
            Question::IntestinoMedicamentos => "intestino_medicamentos",
            Question::EnergiaFadiga => "energia_fadiga",
            Question::EnergiaFraqueza => "energia_fraqueza",
            Question::EnergiaCansaco => "energia_cansaco",
            Question::EnergiaDores => "energia_dores",
            Question::EnergiaFrio => "energia_frio",
            Question::HormoniosDisposicao => "hormonios_disposicao",
            Question::HormoniosHumor => "hormonios_humor",
            Question::HormoniosDecisao => "hormonios_decisao",
            Question::HormoniosLibido => "hormonios_libido",
            Question::HormoniosCiclo => "hormonios_ciclo",
            Question::HormoniosCabelo => "hormonios_cabelo",
            Question::HormoniosPeso => "hormonios_peso",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.key() == key)
    }

    pub fn kind(self) -> QuestionKind {
        match self {
            Question::Motivo
            | Question::SonoHorario
            | Question::SonoAtrapalha
            | Question::EstresseRuidos
            | Question::EstressePsicoterapia
            | Question::EstresseTrabalho
            | Question::EstresseFatores => QuestionKind::FreeText,
            Question::AlimentacaoConsome
            | Question::IntestinoSintomas
            | Question::IntestinoMedicamentos => QuestionKind::MultiChoice,
            _ => QuestionKind::SingleChoice,
        }
    }

    /// Domain whose score this question feeds. `None` for free text.
    pub fn domain(self) -> Option<Domain> {
        let domain = match self {
            Question::Motivo
            | Question::SonoHorario
            | Question::SonoAtrapalha
            | Question::EstresseRuidos
            | Question::EstressePsicoterapia
            | Question::EstresseTrabalho
            | Question::EstresseFatores => return None,

            Question::SonoQualidade
            | Question::SonoHoras
            | Question::SonoAcorda
            | Question::SonoRemedio
            | Question::SonoDespertar
            | Question::SonoTelas => Domain::Sleep,

            Question::EstresseNivel
            | Question::EstresseIrritabilidade
            | Question::EstresseHumor
            | Question::EstresseTristeza
            | Question::EstresseDecisao
            | Question::EstresseMedicacao => Domain::Stress,

            Question::AtividadeFrequencia
            | Question::AtividadeEnergia
            | Question::AtividadePerformance
            | Question::AtividadeIntolerancia => Domain::PhysicalActivity,

            Question::AlimentacaoAvaliacao
            | Question::AlimentacaoConsome
            | Question::AlimentacaoCarboidratos
            | Question::AlimentacaoDesejos => Domain::Nutrition,

            Question::IntestinoFuncionamento
            | Question::IntestinoBristol
            | Question::IntestinoSintomas
            | Question::IntestinoMedicamentos => Domain::Digestion,

            Question::EnergiaFadiga
            | Question::EnergiaFraqueza
            | Question::EnergiaCansaco
            | Question::EnergiaDores
            | Question::EnergiaFrio => Domain::Energy,

            Question::HormoniosDisposicao
            | Question::HormoniosHumor
            | Question::HormoniosDecisao
            | Question::HormoniosLibido
            | Question::HormoniosCiclo
            | Question::HormoniosCabelo
            | Question::HormoniosPeso => Domain::Hormones,
        };
        Some(domain)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_lookup() {
        for question in Question::ALL {
            assert_eq!(Question::from_key(question.key()), Some(*question));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Question::from_key("sono_sonhos"), None);
        assert_eq!(Question::from_key(""), None);
    }

    #[test]
    fn test_free_text_questions_have_no_domain() {
        assert_eq!(Question::EstresseFatores.domain(), None);
        assert_eq!(Question::Motivo.domain(), None);
        assert_eq!(Question::SonoAtrapalha.domain(), None);
    }

    #[test]
    fn test_every_scored_question_has_a_domain() {
        for question in Question::ALL {
            assert_eq!(
                question.domain().is_some(),
                question.kind() != QuestionKind::FreeText,
                "{} kind and domain disagree",
                question
            );
        }
    }

    #[test]
    fn test_scored_question_domains() {
        assert_eq!(Question::SonoHoras.domain(), Some(Domain::Sleep));
        assert_eq!(Question::EstresseNivel.domain(), Some(Domain::Stress));
        assert_eq!(Question::AtividadeFrequencia.domain(), Some(Domain::PhysicalActivity));
        assert_eq!(Question::AlimentacaoConsome.domain(), Some(Domain::Nutrition));
        assert_eq!(Question::IntestinoBristol.domain(), Some(Domain::Digestion));
        assert_eq!(Question::EnergiaFrio.domain(), Some(Domain::Energy));
        assert_eq!(Question::HormoniosPeso.domain(), Some(Domain::Hormones));
    }

    #[test]
    fn test_multi_choice_questions() {
        let multi: Vec<_> = Question::ALL
            .iter()
            .filter(|q| q.kind() == QuestionKind::MultiChoice)
            .map(|q| q.key())
            .collect();
        assert_eq!(
            multi,
            vec!["alimentacao_consome", "intestino_sintomas", "intestino_medicamentos"]
        );
    }
}
