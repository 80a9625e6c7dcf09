use crate::assessments::ergonomic::AepCatalog;
use crate::assessments::Evaluation;
use serde::{Deserialize, Serialize};

/// Every non-conformity carries the same priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionPriority {
    #[default]
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlanEntry {
    pub evaluation_id: String,
    pub person_name: String,
    pub sector: String,
    pub category_id: String,
    pub category: String,
    /// Zero-based position of the item inside its category.
    pub item_index: usize,
    pub question: String,
    pub priority: ActionPriority,
}

/// One entry per `No` answer across the ergonomic evaluations, in input order.
///
/// Sector falls back to the checklist variant and then to `fallback_sector`. Question
/// text comes from the evaluation's own checklist variant; when that is unknown or the
/// item is not defined there, a positional `Item #n` placeholder is used.
pub fn generate_action_plan(
    evaluations: &[&Evaluation],
    catalog: &AepCatalog,
    fallback_sector: &str,
) -> Vec<ActionPlanEntry> {
    let mut plan = Vec::new();

    for evaluation in evaluations {
        let Some((variant, responses)) = evaluation.checklist() else {
            continue;
        };

        let sector = evaluation
            .respondent
            .sector
            .as_deref()
            .map(str::trim)
            .filter(|sector| !sector.is_empty())
            .or(variant.map(|variant| variant.key()))
            .unwrap_or(fallback_sector);

        for (category_id, item_index) in responses.non_conformities() {
            let question = variant
                .and_then(|variant| catalog.category(variant, category_id))
                .and_then(|category| category.item(item_index))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Item #{}", item_index + 1));

            plan.push(ActionPlanEntry {
                evaluation_id: evaluation.id.clone(),
                person_name: evaluation.respondent.name.clone(),
                sector: sector.to_string(),
                category_id: category_id.to_string(),
                category: catalog.category_title(category_id).to_string(),
                item_index,
                question,
                priority: ActionPriority::High,
            });
        }
    }

    plan
}
