use crate::infra::{parse_date, parse_variant, print_json, read_json};
use crate::render::{render_dashboard, render_report};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use ocuhealth::alerts::{Alert, AlertRuleEngine};
use ocuhealth::analytics::{CrossSectionalAnalytics, DashboardSnapshot, DomainAverage, EvaluationFilter};
use ocuhealth::assessments::ergonomic::{AepVariant, AnswerSheetImporter, RawChecklist};
use ocuhealth::assessments::psychosocial::{ProartResponses, PsychosocialResponses};
use ocuhealth::assessments::{
    AssessmentEngine, Evaluation, EvaluationScores, Respondent, Submission, SubmittedAnswers,
};
use ocuhealth::error::AppError;
use ocuhealth::report::{evaluation_report, priority_domains, views::EvaluationReport};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand, Debug)]
pub(crate) enum ScoreCommand {
    /// Score a COPSOQ II questionnaire (JSON object of question id to answer 1-5)
    Copsoq(ScoreArgs),
    /// Score a PROART questionnaire (JSON object of scale to item answers)
    Proart(ScoreArgs),
    /// Score an AEP checklist from a JSON checklist or a CSV answer sheet
    Aep(AepArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the answers JSON file
    #[arg(long)]
    pub(crate) answers: PathBuf,
    #[command(flatten)]
    pub(crate) submission: SubmissionArgs,
}

#[derive(Args, Debug)]
pub(crate) struct AepArgs {
    /// Checklist variant (operacional | administrativo)
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: AepVariant,
    /// JSON object of category id to ordered answers
    #[arg(long, conflicts_with = "sheet", required_unless_present = "sheet")]
    pub(crate) answers: Option<PathBuf>,
    /// CSV answer sheet with Category,Item,Answer columns
    #[arg(long)]
    pub(crate) sheet: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) submission: SubmissionArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SubmissionArgs {
    /// Identifier stored on the evaluation
    #[arg(long, default_value = "submission")]
    pub(crate) id: String,
    /// Respondent name shown in reports
    #[arg(long, default_value = "Anônimo")]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) sector: Option<String>,
    #[arg(long)]
    pub(crate) role: Option<String>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
    #[arg(long)]
    pub(crate) age: Option<u8>,
    #[arg(long)]
    pub(crate) tenure_years: Option<f64>,
    /// Submission date (YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = parse_date)]
    pub(crate) submitted_on: Option<NaiveDate>,
    /// Print the evaluation and its report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SubmissionArgs {
    fn respondent(&self) -> Respondent {
        let submitted_at = self
            .submitted_on
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_else(|| Local::now().naive_local());

        Respondent {
            name: self.name.clone(),
            sector: self.sector.clone(),
            role: self.role.clone(),
            gender: self.gender.clone(),
            age: self.age,
            tenure_years: self.tenure_years,
            submitted_at,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// JSON array of scored evaluations
    #[arg(long)]
    pub(crate) evaluations: PathBuf,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Print the snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive sector substring
    #[arg(long)]
    pub(crate) sector: Option<String>,
    /// Case-insensitive role substring
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Exact gender value
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Minimum tenure in years
    #[arg(long)]
    pub(crate) min_tenure_years: Option<f64>,
    /// First submission date included (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Last submission date included (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) end_date: Option<NaiveDate>,
}

impl From<FilterArgs> for EvaluationFilter {
    fn from(args: FilterArgs) -> Self {
        EvaluationFilter {
            sector: args.sector,
            role: args.role,
            gender: args.gender,
            min_tenure_years: args.min_tenure_years,
            start_date: args.start_date,
            end_date: args.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreOutput {
    pub(crate) evaluation: Evaluation,
    pub(crate) report: EvaluationReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardOutput {
    #[serde(flatten)]
    pub(crate) snapshot: DashboardSnapshot,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) priorities: Vec<DomainAverage>,
}

pub(crate) fn run_score(engine: &AssessmentEngine, command: ScoreCommand) -> Result<(), AppError> {
    let rules = AlertRuleEngine::for_engine(engine);

    let (output, json) = match command {
        ScoreCommand::Copsoq(args) => {
            let answers: PsychosocialResponses = read_json(&args.answers)?;
            let output = score_submission(
                engine,
                &rules,
                &args.submission,
                SubmittedAnswers::Psychosocial(answers),
            );
            (output, args.submission.json)
        }
        ScoreCommand::Proart(args) => {
            let answers: ProartResponses = read_json(&args.answers)?;
            let output = score_submission(
                engine,
                &rules,
                &args.submission,
                SubmittedAnswers::Proart(answers),
            );
            (output, args.submission.json)
        }
        ScoreCommand::Aep(args) => {
            let output = match (&args.answers, &args.sheet) {
                (_, Some(sheet)) => {
                    let responses = AnswerSheetImporter::from_path(sheet)?;
                    let compliance = engine.score_checklist(&responses);
                    let evaluation = Evaluation {
                        id: args.submission.id.clone(),
                        respondent: args.submission.respondent(),
                        scores: EvaluationScores::Ergonomic {
                            variant: Some(args.variant),
                            responses,
                            compliance,
                        },
                    };
                    finish(engine, &rules, evaluation, Vec::new())
                }
                (Some(path), None) => {
                    let checklist: RawChecklist = read_json(path)?;
                    score_submission(
                        engine,
                        &rules,
                        &args.submission,
                        SubmittedAnswers::Ergonomic {
                            variant: args.variant,
                            checklist,
                        },
                    )
                }
                (None, None) => {
                    return Err(AppError::Io(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "either --answers or --sheet is required",
                    )))
                }
            };
            (output, args.submission.json)
        }
    };

    info!(
        evaluation = %output.evaluation.id,
        instrument = output.report.instrument,
        alerts = output.report.alerts.len(),
        "evaluation scored"
    );

    if json {
        print_json(&output)
    } else {
        render_report(&output.report);
        Ok(())
    }
}

pub(crate) fn score_submission(
    engine: &AssessmentEngine,
    rules: &AlertRuleEngine,
    args: &SubmissionArgs,
    answers: SubmittedAnswers,
) -> ScoreOutput {
    let raw_alerts = match &answers {
        SubmittedAnswers::Proart(responses) => rules.mental_suffering(responses),
        _ => Vec::new(),
    };
    let evaluation = engine.score(Submission {
        id: args.id.clone(),
        respondent: args.respondent(),
        answers,
    });
    finish(engine, rules, evaluation, raw_alerts)
}

fn finish(
    engine: &AssessmentEngine,
    rules: &AlertRuleEngine,
    evaluation: Evaluation,
    raw_alerts: Vec<Alert>,
) -> ScoreOutput {
    let mut report = evaluation_report(&evaluation, engine.aep_catalog(), rules);
    if !raw_alerts.is_empty() {
        let mut alerts = raw_alerts;
        alerts.append(&mut report.alerts);
        report.alerts = alerts;
    }
    ScoreOutput { evaluation, report }
}

pub(crate) fn run_dashboard(engine: &AssessmentEngine, args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        evaluations,
        filter,
        json,
    } = args;

    let evaluations: Vec<Evaluation> = read_json(&evaluations)?;
    let output = dashboard(engine, &evaluations, &filter.into());
    info!(
        total = output.snapshot.total,
        matched = output.snapshot.matched,
        actions = output.snapshot.action_plan.len(),
        "dashboard computed"
    );

    if json {
        print_json(&output)
    } else {
        render_dashboard(&output);
        Ok(())
    }
}

pub(crate) fn dashboard(
    engine: &AssessmentEngine,
    evaluations: &[Evaluation],
    filter: &EvaluationFilter,
) -> DashboardOutput {
    let snapshot = CrossSectionalAnalytics::for_engine(engine).snapshot(evaluations, filter);
    let priorities = snapshot
        .copsoq
        .as_deref()
        .map(priority_domains)
        .unwrap_or_default();
    DashboardOutput {
        snapshot,
        priorities,
    }
}
