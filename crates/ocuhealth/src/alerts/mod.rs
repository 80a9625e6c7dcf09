//! Keyword and threshold rules that turn raw answers into qualitative alerts.
//!
//! Matching is plain case-insensitive substring containment. Each answer produces at
//! most one alert even when several keywords match its text.

use crate::assessments::ergonomic::{
    AepCatalog, AepVariant, CategoryAnswer, ChecklistResponses, ComplianceResult,
};
use crate::assessments::psychosocial::{ProartCatalog, ProartResponses, ProartResult, ProartScaleId};
use crate::assessments::AssessmentEngine;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Checklist item texts containing any of these flag a safety alert on `No`.
pub const SAFETY_KEYWORDS: [&str; 6] = [
    "treinamento",
    "proteções",
    "ritmo",
    "choque",
    "perigo",
    "risco",
];

/// "Sempre" on the five-point frequency scale.
pub const ALWAYS_ANSWER: i64 = 5;

pub const CORRELATION_PROART_ABOVE: f64 = 3.0;
pub const CORRELATION_COMPLIANCE_BELOW: f64 = 70.0;

/// Checklist categories that describe work organization, one per variant.
const WORK_ORGANIZATION_CATEGORIES: [&str; 2] = ["organizacao_trabalho", "organizacao_pausas"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSource {
    Proart,
    Aep,
    Correlation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Critical,
    Safety,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub source: AlertSource,
    pub level: AlertLevel,
    pub message: String,
    /// Question or item text the alert refers to; empty for correlation alerts.
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct AlertRuleEngine {
    proart: ProartCatalog,
    aep: AepCatalog,
}

impl AlertRuleEngine {
    pub fn new(proart: ProartCatalog, aep: AepCatalog) -> Self {
        Self { proart, aep }
    }

    pub fn for_engine(engine: &AssessmentEngine) -> Self {
        Self::new(engine.proart_catalog().clone(), engine.aep_catalog().clone())
    }

    /// One CRITICAL alert per Mental Suffering item answered "always", in catalog order.
    pub fn mental_suffering(&self, responses: &ProartResponses) -> Vec<Alert> {
        let (Some(scale), Some(answers)) = (
            self.proart.scale(ProartScaleId::MentalSuffering),
            responses.get(&ProartScaleId::MentalSuffering),
        ) else {
            return Vec::new();
        };

        scale
            .items
            .iter()
            .filter(|item| answers.get(&item.id) == Some(&ALWAYS_ANSWER))
            .map(|item| Alert {
                source: AlertSource::Proart,
                level: AlertLevel::Critical,
                message: format!("Sofrimento Mental Crítico: \"{}\" (Sempre)", item.text),
                subject: item.text.to_string(),
            })
            .collect()
    }

    /// One SAFETY alert per `No` answer whose item text mentions a safety keyword.
    pub fn safety(&self, variant: AepVariant, responses: &ChecklistResponses) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for category in &self.aep.checklist(variant).categories {
            let Some(answers) = responses.category(category.id) else {
                continue;
            };

            for (text, answer) in category.items.iter().zip(answers) {
                if *answer != Some(CategoryAnswer::No) || !mentions_safety_keyword(text) {
                    continue;
                }
                alerts.push(Alert {
                    source: AlertSource::Aep,
                    level: AlertLevel::Safety,
                    message: format!("Risco Ergonômico/Segurança: \"{text}\" (Não Conforme)"),
                    subject: (*text).to_string(),
                });
            }
        }

        alerts
    }

    /// HIGH alert when poor work organization shows up on both instruments.
    pub fn correlation(&self, proart: &ProartResult, compliance: &ComplianceResult) -> Vec<Alert> {
        let organization_risk = proart
            .scale(ProartScaleId::OrganizationOfWork)
            .filter(|scale| scale.answered > 0)
            .map(|scale| scale.score);
        let organization_compliance = WORK_ORGANIZATION_CATEGORIES
            .iter()
            .filter_map(|id| compliance.category(id))
            .find(|category| category.is_applicable())
            .map(|category| category.percentage);

        match (organization_risk, organization_compliance) {
            (Some(risk), Some(compliance))
                if risk > CORRELATION_PROART_ABOVE && compliance < CORRELATION_COMPLIANCE_BELOW =>
            {
                debug!(risk, compliance, "work organization correlation triggered");
                vec![Alert {
                    source: AlertSource::Correlation,
                    level: AlertLevel::High,
                    message: "Correlação Crítica: a má organização do trabalho (ergonômica) provavelmente contribui para o alto risco psicossocial (Escala 1).".to_string(),
                    subject: String::new(),
                }]
            }
            _ => Vec::new(),
        }
    }

    /// Psychosocial alerts followed by ergonomic ones.
    pub fn scan(
        &self,
        proart: Option<&ProartResponses>,
        checklist: Option<(AepVariant, &ChecklistResponses)>,
    ) -> Vec<Alert> {
        let mut alerts = proart
            .map(|responses| self.mental_suffering(responses))
            .unwrap_or_default();
        if let Some((variant, responses)) = checklist {
            alerts.extend(self.safety(variant, responses));
        }
        alerts
    }
}

fn mentions_safety_keyword(text: &str) -> bool {
    let folded = text.to_lowercase();
    SAFETY_KEYWORDS
        .iter()
        .any(|keyword| folded.contains(keyword))
}
