use super::answer::{CategoryAnswer, ChecklistResponses};
use crate::assessments::domain::round_to;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a `NotApplicable` answer enters the compliance ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotApplicablePolicy {
    /// Dropped from both points and total.
    #[default]
    Excluded,
    /// Counted as a compliant item (one point, one total).
    CountedAsCompliant,
}

impl NotApplicablePolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excluded => "strict",
            Self::CountedAsCompliant => "legacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_id: String,
    pub points: u32,
    pub total: u32,
    pub not_applicable: u32,
    pub unrecognized: u32,
    /// `points / total * 100`, one decimal; 0 when nothing was applicable.
    pub percentage: f64,
}

impl CategoryScore {
    pub fn is_applicable(&self) -> bool {
        self.total > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceRisk {
    High,
    Medium,
    Low,
}

impl ComplianceRisk {
    pub const HIGH_BELOW: f64 = 60.0;
    pub const MEDIUM_UP_TO: f64 = 80.0;

    /// Middle band is closed at both ends: 60.0 and 80.0 are both medium.
    pub fn classify(global: f64) -> Self {
        if global < Self::HIGH_BELOW {
            Self::High
        } else if global <= Self::MEDIUM_UP_TO {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Alto Risco",
            Self::Medium => "Médio Risco",
            Self::Low => "Baixo Risco",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#E74C3C",
            Self::Medium => "#F39C12",
            Self::Low => "#27AE60",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub policy: NotApplicablePolicy,
    pub categories: Vec<CategoryScore>,
    /// Sum of points over sum of totals across every category, one decimal.
    pub global: f64,
    pub risk: ComplianceRisk,
    pub risk_label: String,
    pub risk_color: String,
    pub total_compliant: u32,
    pub total_non_compliant: u32,
    pub counted: u32,
    pub unrecognized: u32,
}

impl ComplianceResult {
    pub fn category(&self, id: &str) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|category| category.category_id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComplianceScorer {
    policy: NotApplicablePolicy,
}

impl ComplianceScorer {
    pub fn new(policy: NotApplicablePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NotApplicablePolicy {
        self.policy
    }

    pub fn score(&self, responses: &ChecklistResponses) -> ComplianceResult {
        let categories: Vec<CategoryScore> = responses
            .categories
            .iter()
            .map(|(id, answers)| self.score_category(id, answers))
            .collect();

        let points: u32 = categories.iter().map(|category| category.points).sum();
        let total: u32 = categories.iter().map(|category| category.total).sum();
        let unrecognized = categories.iter().map(|category| category.unrecognized).sum();

        let global = percentage(points, total);
        let risk = ComplianceRisk::classify(global);

        ComplianceResult {
            policy: self.policy,
            categories,
            global,
            risk,
            risk_label: risk.label().to_string(),
            risk_color: risk.color().to_string(),
            total_compliant: points,
            total_non_compliant: total - points,
            counted: total,
            unrecognized,
        }
    }

    fn score_category(&self, id: &str, answers: &[Option<CategoryAnswer>]) -> CategoryScore {
        let mut points = 0;
        let mut total = 0;
        let mut not_applicable = 0;
        let mut unrecognized = 0;

        for answer in answers {
            match answer {
                Some(CategoryAnswer::Yes) => {
                    points += 1;
                    total += 1;
                }
                Some(CategoryAnswer::No) => total += 1,
                Some(CategoryAnswer::NotApplicable) => {
                    not_applicable += 1;
                    if self.policy == NotApplicablePolicy::CountedAsCompliant {
                        points += 1;
                        total += 1;
                    }
                }
                None => unrecognized += 1,
            }
        }

        if total == 0 {
            debug!(category = id, "category has no applicable answers");
        }

        CategoryScore {
            category_id: id.to_string(),
            points,
            total,
            not_applicable,
            unrecognized,
            percentage: percentage(points, total),
        }
    }
}

fn percentage(points: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(f64::from(points) / f64::from(total) * 100.0, 1)
}
