use crate::assessments::domain::round_to;
use crate::assessments::ergonomic::AepCatalog;
use crate::assessments::Evaluation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mean of one psychosocial domain across evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAverage {
    pub key: String,
    pub name: String,
    /// Simple mean of per-evaluation domain means, two decimals.
    pub mean: f64,
    pub evaluations: usize,
}

/// Mean compliance of one checklist category across evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub category_id: String,
    pub title: String,
    /// One decimal.
    pub mean: f64,
    pub evaluations: usize,
}

/// Running sums keyed by display name, kept in first-seen order.
struct Accumulator {
    index: HashMap<String, usize>,
    groups: Vec<Group>,
}

struct Group {
    id: String,
    name: String,
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn add(&mut self, id: &str, name: &str, value: f64) {
        let position = match self.index.get(name) {
            Some(position) => *position,
            None => {
                self.groups.push(Group {
                    id: id.to_string(),
                    name: name.to_string(),
                    sum: 0.0,
                    count: 0,
                });
                self.index.insert(name.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let group = &mut self.groups[position];
        group.sum += value;
        group.count += 1;
    }

    fn finish(self) -> impl Iterator<Item = (String, String, f64, usize)> {
        self.groups
            .into_iter()
            .map(|group| (group.id, group.name, group.sum / group.count as f64, group.count))
    }
}

/// Domain means across psychosocial evaluations; `None` when `evaluations` is empty.
/// Every catalog domain of every evaluation contributes, unanswered ones at 0.
pub fn aggregate_copsoq(evaluations: &[&Evaluation]) -> Option<Vec<DomainAverage>> {
    if evaluations.is_empty() {
        return None;
    }

    let mut accumulator = Accumulator::new();
    for result in evaluations.iter().filter_map(|evaluation| evaluation.psychosocial()) {
        for domain in &result.domains {
            accumulator.add(&domain.key, &domain.name, domain.mean);
        }
    }

    Some(
        accumulator
            .finish()
            .map(|(key, name, mean, evaluations)| DomainAverage {
                key,
                name,
                mean: round_to(mean, 2),
                evaluations,
            })
            .collect(),
    )
}

/// Category compliance means across ergonomic evaluations, grouped by display title;
/// `None` when `evaluations` is empty. Categories with no applicable item do not contribute.
pub fn aggregate_aep(
    evaluations: &[&Evaluation],
    catalog: &AepCatalog,
) -> Option<Vec<CategoryAverage>> {
    if evaluations.is_empty() {
        return None;
    }

    let mut accumulator = Accumulator::new();
    for result in evaluations.iter().filter_map(|evaluation| evaluation.compliance()) {
        for category in result.categories.iter().filter(|c| c.is_applicable()) {
            let title = catalog.category_title(&category.category_id);
            accumulator.add(&category.category_id, title, category.percentage);
        }
    }

    Some(
        accumulator
            .finish()
            .map(|(category_id, title, mean, evaluations)| CategoryAverage {
                category_id,
                title,
                mean: round_to(mean, 1),
                evaluations,
            })
            .collect(),
    )
}
