//! Cross-sectional roll-ups over already-scored evaluations.
//!
//! Every operation here reads a slice of [`Evaluation`]s and returns plain serializable
//! values. Evaluations are independent of each other, so callers are free to score them
//! in parallel before handing the batch over.

mod action_plan;
mod aggregate;
mod filter;

#[cfg(test)]
mod tests;

pub use action_plan::{generate_action_plan, ActionPlanEntry, ActionPriority};
pub use aggregate::{aggregate_aep, aggregate_copsoq, CategoryAverage, DomainAverage};
pub use filter::EvaluationFilter;

use crate::assessments::ergonomic::AepCatalog;
use crate::assessments::{AssessmentEngine, Evaluation};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a dashboard needs for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub filter: EvaluationFilter,
    pub total: usize,
    pub matched: usize,
    pub copsoq: Option<Vec<DomainAverage>>,
    pub aep: Option<Vec<CategoryAverage>>,
    pub action_plan: Vec<ActionPlanEntry>,
}

/// Analytics bound to the checklist catalog used for titles and item texts.
#[derive(Debug, Clone)]
pub struct CrossSectionalAnalytics {
    catalog: AepCatalog,
    fallback_sector: String,
}

impl CrossSectionalAnalytics {
    pub fn new(catalog: AepCatalog, fallback_sector: impl Into<String>) -> Self {
        Self {
            catalog,
            fallback_sector: fallback_sector.into(),
        }
    }

    pub fn for_engine(engine: &AssessmentEngine) -> Self {
        Self::new(
            engine.aep_catalog().clone(),
            engine.config().fallback_sector.clone(),
        )
    }

    pub fn filter<'a>(
        &self,
        evaluations: &'a [Evaluation],
        filter: &EvaluationFilter,
    ) -> Vec<&'a Evaluation> {
        filter.apply(evaluations)
    }

    pub fn aggregate_copsoq(&self, evaluations: &[&Evaluation]) -> Option<Vec<DomainAverage>> {
        aggregate_copsoq(evaluations)
    }

    pub fn aggregate_aep(&self, evaluations: &[&Evaluation]) -> Option<Vec<CategoryAverage>> {
        aggregate_aep(evaluations, &self.catalog)
    }

    pub fn action_plan(&self, evaluations: &[&Evaluation]) -> Vec<ActionPlanEntry> {
        generate_action_plan(evaluations, &self.catalog, &self.fallback_sector)
    }

    pub fn snapshot(
        &self,
        evaluations: &[Evaluation],
        filter: &EvaluationFilter,
    ) -> DashboardSnapshot {
        let matched = self.filter(evaluations, filter);
        debug!(
            total = evaluations.len(),
            matched = matched.len(),
            "filtered evaluations for dashboard"
        );

        DashboardSnapshot {
            filter: filter.clone(),
            total: evaluations.len(),
            matched: matched.len(),
            copsoq: self.aggregate_copsoq(&matched),
            aep: self.aggregate_aep(&matched),
            action_plan: self.action_plan(&matched),
        }
    }
}
