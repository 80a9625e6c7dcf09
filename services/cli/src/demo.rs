use crate::commands::{dashboard, DashboardOutput, FilterArgs};
use crate::infra::print_json;
use crate::render::{render_dashboard, render_report};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use ocuhealth::alerts::{Alert, AlertRuleEngine};
use ocuhealth::analytics::EvaluationFilter;
use ocuhealth::assessments::ergonomic::{AepVariant, RawChecklist};
use ocuhealth::assessments::psychosocial::{ProartResponses, ProartScaleId, PsychosocialResponses};
use ocuhealth::assessments::{AssessmentEngine, Evaluation, Respondent, Submission, SubmittedAnswers};
use ocuhealth::error::AppError;
use ocuhealth::report::evaluation_report;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Print the scored sample and dashboard as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct DemoOutput {
    evaluations: Vec<Evaluation>,
    alerts: Vec<Alert>,
    dashboard: DashboardOutput,
}

pub(crate) fn run_demo(engine: &AssessmentEngine, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { filter, json } = args;
    let rules = AlertRuleEngine::for_engine(engine);

    let submissions = demo_submissions();
    let evaluations: Vec<Evaluation> = submissions
        .iter()
        .cloned()
        .map(|submission| engine.score(submission))
        .collect();
    let alerts = demo_alerts(&rules, &submissions, &evaluations);
    let filter: EvaluationFilter = filter.into();
    let dashboard = dashboard(engine, &evaluations, &filter);

    if json {
        return print_json(&DemoOutput {
            evaluations,
            alerts,
            dashboard,
        });
    }

    println!("Occupational health demo");
    for evaluation in &evaluations {
        println!();
        let mut report = evaluation_report(evaluation, engine.aep_catalog(), &rules);
        if evaluation.proart().is_some() {
            report.alerts = alerts.clone();
        }
        render_report(&report);
    }

    println!();
    render_dashboard(&dashboard);
    Ok(())
}

/// Mental-suffering alerts need the raw PROART answers; the correlation check pairs
/// the first PROART result with the first checklist result.
fn demo_alerts(
    rules: &AlertRuleEngine,
    submissions: &[Submission],
    evaluations: &[Evaluation],
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = submissions
        .iter()
        .filter_map(|submission| match &submission.answers {
            SubmittedAnswers::Proart(responses) => Some(rules.mental_suffering(responses)),
            _ => None,
        })
        .flatten()
        .collect();

    let proart = evaluations.iter().find_map(Evaluation::proart);
    let compliance = evaluations.iter().find_map(Evaluation::compliance);
    if let (Some(proart), Some(compliance)) = (proart, compliance) {
        alerts.extend(rules.correlation(proart, compliance));
    }
    alerts
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

fn respondent(
    name: &str,
    sector: &str,
    role: &str,
    gender: &str,
    tenure_years: f64,
    submitted_at: NaiveDateTime,
) -> Respondent {
    Respondent {
        name: name.to_string(),
        sector: Some(sector.to_string()),
        role: Some(role.to_string()),
        gender: Some(gender.to_string()),
        age: None,
        tenure_years: Some(tenure_years),
        submitted_at,
    }
}

fn checklist(categories: &[(&str, &[&str])]) -> RawChecklist {
    categories
        .iter()
        .map(|(id, answers)| {
            (
                id.to_string(),
                answers.iter().map(|answer| answer.to_string()).collect(),
            )
        })
        .collect()
}

pub(crate) fn demo_submissions() -> Vec<Submission> {
    let organization: BTreeMap<String, i64> = (1..=19).map(|n| (format!("s1_q{n}"), 4)).collect();
    let suffering: BTreeMap<String, i64> = (1..=28)
        .map(|n| (format!("s3_q{n}"), if n == 7 { 5 } else { 2 }))
        .collect();

    vec![
        Submission {
            id: "demo-copsoq-1".into(),
            respondent: respondent("Ana", "Logística", "Operadora", "F", 4.0, at(2025, 3, 3)),
            answers: SubmittedAnswers::Psychosocial(PsychosocialResponses::from([
                (3, 4),
                (4, 5),
                (14, 2),
                (15, 3),
                (20, 5),
                (35, 2),
                (56, 4),
            ])),
        },
        Submission {
            id: "demo-copsoq-2".into(),
            respondent: respondent("Bruno", "Financeiro", "Analista", "M", 1.5, at(2025, 4, 10)),
            answers: SubmittedAnswers::Psychosocial(PsychosocialResponses::from([
                (3, 2),
                (14, 4),
                (20, 4),
                (35, 4),
            ])),
        },
        Submission {
            id: "demo-proart-1".into(),
            respondent: respondent("Carla", "Logística", "Conferente", "F", 2.0, at(2025, 3, 12)),
            answers: SubmittedAnswers::Proart(ProartResponses::from([
                (ProartScaleId::OrganizationOfWork, organization),
                (ProartScaleId::MentalSuffering, suffering),
            ])),
        },
        Submission {
            id: "demo-aep-1".into(),
            respondent: respondent("Davi", "Logística", "Operador", "M", 6.0, at(2025, 3, 20)),
            answers: SubmittedAnswers::Ergonomic {
                variant: AepVariant::Operational,
                checklist: checklist(&[
                    ("organizacao_trabalho", &["Sim", "Não", "Não", "Sim", "Não", "Sim"]),
                    ("ambiente_fisico", &["Sim", "Sim", "NA", "Não"]),
                ]),
            },
        },
        Submission {
            id: "demo-aep-2".into(),
            respondent: respondent("Elisa", "Financeiro", "Assistente", "F", 3.0, at(2025, 4, 2)),
            answers: SubmittedAnswers::Ergonomic {
                variant: AepVariant::Administrative,
                checklist: checklist(&[
                    ("mesa", &["Sim", "Sim", "Sim", "Sim", "Não"]),
                    ("cadeira", &["Sim", "Sim", "Sim", "Sim", "Sim", "Sim"]),
                ]),
            },
        },
    ]
}
