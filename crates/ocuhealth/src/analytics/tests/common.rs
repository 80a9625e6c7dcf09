use chrono::{NaiveDate, NaiveDateTime};

use crate::analytics::CrossSectionalAnalytics;
use crate::assessments::ergonomic::{AepVariant, RawChecklist};
use crate::assessments::psychosocial::{PsychosocialResponses, QuestionId};
use crate::assessments::{AssessmentEngine, Evaluation, Respondent, Submission, SubmittedAnswers};
use crate::config::ScoringConfig;

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard(ScoringConfig::default()).expect("standard catalogs")
}

pub(super) fn analytics() -> CrossSectionalAnalytics {
    CrossSectionalAnalytics::for_engine(&engine())
}

pub(super) fn on(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid timestamp")
}

pub(super) fn respondent(
    name: &str,
    sector: Option<&str>,
    role: &str,
    gender: &str,
    tenure_years: Option<f64>,
    submitted_at: NaiveDateTime,
) -> Respondent {
    Respondent {
        name: name.to_string(),
        sector: sector.map(str::to_string),
        role: Some(role.to_string()),
        gender: Some(gender.to_string()),
        age: None,
        tenure_years,
        submitted_at,
    }
}

pub(super) fn copsoq(id: &str, respondent: Respondent, answers: &[(QuestionId, i64)]) -> Evaluation {
    engine().score(Submission {
        id: id.to_string(),
        respondent,
        answers: SubmittedAnswers::Psychosocial(
            answers.iter().copied().collect::<PsychosocialResponses>(),
        ),
    })
}

pub(super) fn aep(
    id: &str,
    respondent: Respondent,
    variant: AepVariant,
    categories: &[(&str, &[&str])],
) -> Evaluation {
    let checklist: RawChecklist = categories
        .iter()
        .map(|(category, answers)| {
            (
                category.to_string(),
                answers.iter().map(|answer| answer.to_string()).collect(),
            )
        })
        .collect();

    engine().score(Submission {
        id: id.to_string(),
        respondent,
        answers: SubmittedAnswers::Ergonomic { variant, checklist },
    })
}

/// Two psychosocial and two ergonomic evaluations across two sectors and two months.
pub(super) fn sample() -> Vec<Evaluation> {
    vec![
        copsoq(
            "c-1",
            respondent(
                "Ana",
                Some("Logística"),
                "Operadora de Empilhadeira",
                "F",
                Some(4.0),
                on(2025, 3, 3, 9),
            ),
            &[(14, 5), (15, 5), (16, 5), (56, 4), (57, 5), (58, 3)],
        ),
        copsoq(
            "c-2",
            respondent(
                "Bruno",
                Some("Financeiro"),
                "Analista",
                "M",
                Some(1.5),
                on(2025, 4, 10, 14),
            ),
            &[(14, 3), (15, 3), (16, 3)],
        ),
        aep(
            "a-1",
            respondent(
                "Carla",
                Some("Logística"),
                "Conferente",
                "F",
                Some(2.0),
                on(2025, 3, 31, 23),
            ),
            AepVariant::Operational,
            &[
                ("organizacao_trabalho", &["Sim", "Não", "Sim", "Sim"]),
                ("ambiente_fisico", &["Sim", "Sim", "NA", "Não"]),
            ],
        ),
        aep(
            "a-2",
            respondent("Davi", None, "Assistente", "M", None, on(2025, 4, 1, 8)),
            AepVariant::Administrative,
            &[("mesa", &["Sim", "Sim", "Sim", "Sim", "Não"]), ("monitor", &["NA"])],
        ),
    ]
}
