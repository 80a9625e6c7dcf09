use super::domain::CatalogError;
use super::ergonomic::{
    AepCatalog, AepVariant, ChecklistResponses, ComplianceResult, ComplianceScorer, RawChecklist,
};
use super::psychosocial::{
    CopsoqCatalog, ProartCatalog, ProartResponses, ProartResult, ProartScorer,
    PsychosocialResponses, PsychosocialResult, PsychosocialScorer,
};
use crate::config::ScoringConfig;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Demographic snapshot captured alongside a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub tenure_years: Option<f64>,
    pub submitted_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    Psychosocial,
    Proart,
    Ergonomic,
}

impl EvaluationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychosocial => "COPSOQ II",
            Self::Proart => "PROART",
            Self::Ergonomic => "AEP",
        }
    }
}

/// Raw answers as submitted, before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmittedAnswers {
    Psychosocial(PsychosocialResponses),
    Proart(ProartResponses),
    Ergonomic {
        variant: AepVariant,
        checklist: RawChecklist,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub respondent: Respondent,
    pub answers: SubmittedAnswers,
}

/// Scores attached to an evaluation. Ergonomic evaluations keep their resolved answers
/// so action plans can be rebuilt later; older exports may lack the checklist variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EvaluationScores {
    Psychosocial(PsychosocialResult),
    Proart(ProartResult),
    Ergonomic {
        #[serde(default)]
        variant: Option<AepVariant>,
        responses: ChecklistResponses,
        compliance: ComplianceResult,
    },
}

/// One scored questionnaire. Produced by [`AssessmentEngine::score`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: String,
    pub respondent: Respondent,
    pub scores: EvaluationScores,
}

impl Evaluation {
    pub fn kind(&self) -> EvaluationKind {
        match self.scores {
            EvaluationScores::Psychosocial(_) => EvaluationKind::Psychosocial,
            EvaluationScores::Proart(_) => EvaluationKind::Proart,
            EvaluationScores::Ergonomic { .. } => EvaluationKind::Ergonomic,
        }
    }

    pub fn psychosocial(&self) -> Option<&PsychosocialResult> {
        match &self.scores {
            EvaluationScores::Psychosocial(result) => Some(result),
            _ => None,
        }
    }

    pub fn proart(&self) -> Option<&ProartResult> {
        match &self.scores {
            EvaluationScores::Proart(result) => Some(result),
            _ => None,
        }
    }

    pub fn compliance(&self) -> Option<&ComplianceResult> {
        match &self.scores {
            EvaluationScores::Ergonomic { compliance, .. } => Some(compliance),
            _ => None,
        }
    }

    pub fn checklist(&self) -> Option<(Option<AepVariant>, &ChecklistResponses)> {
        match &self.scores {
            EvaluationScores::Ergonomic {
                variant, responses, ..
            } => Some((*variant, responses)),
            _ => None,
        }
    }
}

/// Entry point for submissions: owns the catalogs and scoring policy, performs no I/O.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    psychosocial: PsychosocialScorer,
    proart: ProartScorer,
    aep: AepCatalog,
    compliance: ComplianceScorer,
    config: ScoringConfig,
}

impl AssessmentEngine {
    pub fn new(
        copsoq: CopsoqCatalog,
        proart: ProartCatalog,
        aep: AepCatalog,
        config: ScoringConfig,
    ) -> Self {
        Self {
            psychosocial: PsychosocialScorer::new(copsoq),
            proart: ProartScorer::new(proart),
            aep,
            compliance: ComplianceScorer::new(config.not_applicable),
            config,
        }
    }

    /// Engine over the bundled catalogs.
    pub fn standard(config: ScoringConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(
            CopsoqCatalog::standard()?,
            ProartCatalog::standard()?,
            AepCatalog::standard()?,
            config,
        ))
    }

    pub fn copsoq_catalog(&self) -> &CopsoqCatalog {
        self.psychosocial.catalog()
    }

    pub fn proart_catalog(&self) -> &ProartCatalog {
        self.proart.catalog()
    }

    pub fn aep_catalog(&self) -> &AepCatalog {
        &self.aep
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score_psychosocial(&self, answers: &PsychosocialResponses) -> PsychosocialResult {
        self.psychosocial.score(answers)
    }

    pub fn score_proart(&self, answers: &ProartResponses) -> ProartResult {
        self.proart.score(answers)
    }

    pub fn score_checklist(&self, responses: &ChecklistResponses) -> ComplianceResult {
        self.compliance.score(responses)
    }

    pub fn score(&self, submission: Submission) -> Evaluation {
        let Submission {
            id,
            respondent,
            answers,
        } = submission;

        let scores = match answers {
            SubmittedAnswers::Psychosocial(answers) => {
                EvaluationScores::Psychosocial(self.score_psychosocial(&answers))
            }
            SubmittedAnswers::Proart(answers) => {
                EvaluationScores::Proart(self.score_proart(&answers))
            }
            SubmittedAnswers::Ergonomic { variant, checklist } => {
                let responses = ChecklistResponses::from_raw(&checklist);
                let compliance = self.score_checklist(&responses);
                EvaluationScores::Ergonomic {
                    variant: Some(variant),
                    responses,
                    compliance,
                }
            }
        };

        let evaluation = Evaluation {
            id,
            respondent,
            scores,
        };
        info!(
            evaluation = %evaluation.id,
            kind = evaluation.kind().label(),
            "scored submission"
        );
        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::ergonomic::{ComplianceRisk, NotApplicablePolicy};
    use chrono::NaiveDate;

    fn respondent() -> Respondent {
        Respondent {
            name: "Ana".to_string(),
            sector: Some("Logística".to_string()),
            role: Some("Operadora".to_string()),
            gender: Some("F".to_string()),
            age: Some(34),
            tenure_years: Some(3.0),
            submitted_at: NaiveDate::from_ymd_opt(2025, 3, 10)
                .and_then(|date| date.and_hms_opt(9, 30, 0))
                .expect("valid timestamp"),
        }
    }

    fn engine(policy: NotApplicablePolicy) -> AssessmentEngine {
        AssessmentEngine::standard(ScoringConfig {
            not_applicable: policy,
            ..ScoringConfig::default()
        })
        .expect("standard catalogs")
    }

    #[test]
    fn ergonomic_submission_keeps_resolved_answers() {
        let mut checklist = RawChecklist::new();
        checklist.insert(
            "organizacao_trabalho".to_string(),
            vec!["sim".into(), "NÃO".into(), "na".into()],
        );

        let evaluation = engine(NotApplicablePolicy::Excluded).score(Submission {
            id: "aep-1".to_string(),
            respondent: respondent(),
            answers: SubmittedAnswers::Ergonomic {
                variant: AepVariant::Operational,
                checklist,
            },
        });

        assert_eq!(evaluation.kind(), EvaluationKind::Ergonomic);
        let compliance = evaluation.compliance().expect("compliance scored");
        assert_eq!(compliance.global, 50.0);
        assert_eq!(compliance.risk, ComplianceRisk::High);

        let (variant, responses) = evaluation.checklist().expect("checklist kept");
        assert_eq!(variant, Some(AepVariant::Operational));
        assert_eq!(responses.non_conformities().count(), 1);
    }

    #[test]
    fn configured_policy_reaches_compliance_scorer() {
        let mut checklist = RawChecklist::new();
        checklist.insert("mesa".to_string(), vec!["Sim".into(), "NA".into(), "Não".into()]);
        let submission = Submission {
            id: "aep-2".to_string(),
            respondent: respondent(),
            answers: SubmittedAnswers::Ergonomic {
                variant: AepVariant::Administrative,
                checklist,
            },
        };

        let legacy = engine(NotApplicablePolicy::CountedAsCompliant).score(submission);
        assert_eq!(legacy.compliance().map(|c| c.global), Some(66.7));
    }

    #[test]
    fn psychosocial_submission_round_trips_through_json() {
        let evaluation = engine(NotApplicablePolicy::Excluded).score(Submission {
            id: "copsoq-1".to_string(),
            respondent: respondent(),
            answers: SubmittedAnswers::Psychosocial(PsychosocialResponses::from([(14, 5), (56, 2)])),
        });

        let json = serde_json::to_string(&evaluation).expect("serialize");
        let restored: Evaluation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, evaluation);
        assert!(restored.psychosocial().is_some());
        assert!(restored.compliance().is_none());
    }

    #[test]
    fn submission_json_names_questionnaire_in_answers() {
        let json = r#"{
            "id": "p-1",
            "respondent": {"name": "Rui", "submitted_at": "2025-02-01T08:00:00"},
            "answers": {"proart": {"scale1": {"s1_q1": 3}}}
        }"#;
        let submission: Submission = serde_json::from_str(json).expect("submission parses");

        let evaluation = engine(NotApplicablePolicy::Excluded).score(submission);
        let proart = evaluation.proart().expect("proart scored");
        assert_eq!(proart.scales[0].answered, 1);
        assert_eq!(evaluation.respondent.sector, None);

        let json = r#"{
            "id": "c-1",
            "respondent": {"name": "Rui", "submitted_at": "2025-02-01T08:00:00"},
            "answers": {"psychosocial": {"14": 5, "15": 4}}
        }"#;
        let submission: Submission = serde_json::from_str(json).expect("submission parses");
        let evaluation = engine(NotApplicablePolicy::Excluded).score(submission);
        let influence = evaluation
            .psychosocial()
            .and_then(|result| result.domain("influencia_trabalho"))
            .expect("influence scored");
        assert_eq!(influence.answered, 2);
    }
}
