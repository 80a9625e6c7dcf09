//! COPSOQ II percentage scoring and the PROART divisor scorer.

mod aggregator;
pub mod catalog;
pub mod normalizer;
pub mod proart;

pub use aggregator::{DomainResult, PsychosocialResponses, PsychosocialResult, RiskLevel};
pub use catalog::{CopsoqCatalog, DomainDefinition, Polarity, Question, QuestionId};
pub use proart::{
    ProartCatalog, ProartLevel, ProartResponses, ProartResult, ProartScaleId, ProartScaleResult,
    ProartScorer,
};

/// Scores COPSOQ answer sets against the catalog it was built with.
#[derive(Debug, Clone)]
pub struct PsychosocialScorer {
    catalog: CopsoqCatalog,
}

impl PsychosocialScorer {
    pub fn new(catalog: CopsoqCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CopsoqCatalog {
        &self.catalog
    }

    pub fn score(&self, responses: &PsychosocialResponses) -> PsychosocialResult {
        aggregator::score_domains(&self.catalog, responses)
    }
}
