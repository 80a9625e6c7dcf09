use super::insights::{ergonomic_insights, psychosocial_insights};
use super::views::EvaluationReport;
use crate::alerts::AlertRuleEngine;
use crate::assessments::ergonomic::AepCatalog;
use crate::assessments::{Evaluation, EvaluationScores};

/// Builds the report block for one scored evaluation.
///
/// Safety alerts are rebuilt from the stored checklist answers when the checklist
/// variant is known. PROART alerts need the raw answers and are left to the caller
/// through [`EvaluationReport::alerts`].
pub fn evaluation_report(
    evaluation: &Evaluation,
    catalog: &AepCatalog,
    rules: &AlertRuleEngine,
) -> EvaluationReport {
    let mut report = EvaluationReport {
        evaluation_id: evaluation.id.clone(),
        person_name: evaluation.respondent.name.clone(),
        instrument: evaluation.kind().label(),
        psychosocial: None,
        proart: None,
        ergonomic: None,
        alerts: Vec::new(),
    };

    match &evaluation.scores {
        EvaluationScores::Psychosocial(result) => {
            report.psychosocial = Some(psychosocial_insights(result));
        }
        EvaluationScores::Proart(result) => report.proart = Some(result.clone()),
        EvaluationScores::Ergonomic {
            variant,
            responses,
            compliance,
        } => {
            report.ergonomic = Some(ergonomic_insights(compliance, catalog));
            if let Some(variant) = variant {
                report.alerts = rules.safety(*variant, responses);
            }
        }
    }

    report
}
