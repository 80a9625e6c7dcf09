//! AEP ergonomic checklists: answer resolution, catalogs and compliance scoring.

pub mod answer;
pub mod catalog;
pub mod compliance;
mod import;

pub use answer::{CategoryAnswer, ChecklistResponses, RawChecklist};
pub use catalog::{AepCatalog, AepChecklist, AepVariant, ChecklistCategory};
pub use compliance::{
    CategoryScore, ComplianceResult, ComplianceRisk, ComplianceScorer, NotApplicablePolicy,
};
pub use import::{AnswerSheetImportError, AnswerSheetImporter};
