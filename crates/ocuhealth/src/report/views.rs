use crate::alerts::Alert;
use crate::assessments::ergonomic::ComplianceRisk;
use crate::assessments::psychosocial::{ProartResult, RiskLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainInsightEntry {
    pub key: String,
    pub name: String,
    pub mean: f64,
    pub risk: RiskLevel,
    pub classification: &'static str,
    pub color: &'static str,
    pub observation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsychosocialInsights {
    pub overall: f64,
    pub overall_risk: RiskLevel,
    /// Answered domains, lowest mean first.
    pub ranked: Vec<DomainInsightEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<DomainInsightEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub critical: Vec<DomainInsightEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

/// Report band for a single checklist category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Critical,
    Attention,
    Adequate,
}

impl CategoryStatus {
    pub const ATTENTION_FLOOR: f64 = 60.0;
    pub const ADEQUATE_FLOOR: f64 = 80.0;

    pub fn classify(percentage: f64) -> Self {
        if percentage < Self::ATTENTION_FLOOR {
            Self::Critical
        } else if percentage < Self::ADEQUATE_FLOOR {
            Self::Attention
        } else {
            Self::Adequate
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRÍTICO",
            Self::Attention => "ATENÇÃO",
            Self::Adequate => "ADEQUADO",
        }
    }

    /// Hex without `#`, as document renderers expect it.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "E74C3C",
            Self::Attention => "F39C12",
            Self::Adequate => "27AE60",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsightEntry {
    pub category_id: String,
    pub title: String,
    pub percentage: f64,
    pub status: CategoryStatus,
    pub status_label: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErgonomicInsights {
    pub global: f64,
    pub risk: ComplianceRisk,
    pub risk_label: &'static str,
    pub categories: Vec<CategoryInsightEntry>,
    /// Mean of the applicable category percentages, one decimal.
    pub mean_percentage: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub needs_adjustment: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Per-evaluation report block handed to document renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: String,
    pub person_name: String,
    pub instrument: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychosocial: Option<PsychosocialInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proart: Option<ProartResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ergonomic: Option<ErgonomicInsights>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<Alert>,
}
