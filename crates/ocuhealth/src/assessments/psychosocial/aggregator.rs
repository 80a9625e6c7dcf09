use super::super::domain::{mean, round_to};
use super::catalog::{CopsoqCatalog, DomainDefinition, QuestionId};
use super::normalizer::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Raw 1–5 answers keyed by question id. Missing keys are unanswered questions.
pub type PsychosocialResponses = BTreeMap<QuestionId, i64>;

/// Risk tier for a 0–100 domain mean. Higher means are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Elevated,
    Moderate,
    Satisfactory,
}

impl RiskLevel {
    pub const MODERATE_FLOOR: f64 = 50.0;
    pub const SATISFACTORY_FLOOR: f64 = 75.0;

    /// Each band includes its lower bound and excludes its upper bound.
    pub fn classify(mean: f64) -> Self {
        if mean < Self::MODERATE_FLOOR {
            Self::Elevated
        } else if mean < Self::SATISFACTORY_FLOOR {
            Self::Moderate
        } else {
            Self::Satisfactory
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Elevated => "Risco Elevado",
            Self::Moderate => "Risco Moderado",
            Self::Satisfactory => "Condição Satisfatória",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Elevated => "#E74C3C",
            Self::Moderate => "#F39C12",
            Self::Satisfactory => "#27AE60",
        }
    }

    pub const fn observation(self) -> &'static str {
        match self {
            Self::Elevated => "Risco elevado detectado. Requer atenção imediata.",
            Self::Moderate => "Nível moderado. Monitoramento sugerido.",
            Self::Satisfactory => "Condição satisfatória.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResult {
    pub key: String,
    pub name: String,
    /// 0–100, one decimal. Zero when no member question was validly answered.
    pub mean: f64,
    pub risk: RiskLevel,
    pub classification: String,
    pub color: String,
    /// Normalized points in catalog order, answered questions only.
    pub scores: Vec<u8>,
    pub answered: usize,
    pub invalid_answers: usize,
}

impl DomainResult {
    pub fn is_answered(&self) -> bool {
        self.answered > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychosocialResult {
    pub catalog_version: String,
    pub domains: Vec<DomainResult>,
    /// Equal-weight mean of the answered domains, one decimal.
    pub overall: f64,
    pub overall_risk: RiskLevel,
    pub invalid_answers: usize,
    pub unknown_questions: Vec<QuestionId>,
}

impl PsychosocialResult {
    pub fn domain(&self, key: &str) -> Option<&DomainResult> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    pub fn answered_domains(&self) -> impl Iterator<Item = &DomainResult> + '_ {
        self.domains.iter().filter(|domain| domain.is_answered())
    }
}

pub(crate) fn score_domains(
    catalog: &CopsoqCatalog,
    responses: &PsychosocialResponses,
) -> PsychosocialResult {
    let mut domains = Vec::with_capacity(catalog.domains().len());
    let mut domain_means = Vec::with_capacity(catalog.domains().len());

    // Unanswered domains weigh in at 0.
    for definition in catalog.domains() {
        let (result, domain_mean) = score_domain(definition, responses);
        domain_means.push(domain_mean);
        domains.push(result);
    }

    let unknown_questions: Vec<QuestionId> = responses
        .keys()
        .copied()
        .filter(|id| catalog.question(*id).is_none())
        .collect();
    if !unknown_questions.is_empty() {
        debug!(?unknown_questions, "ignoring answers for questions outside the catalog");
    }

    let overall = mean(domain_means).unwrap_or(0.0);
    let invalid_answers = domains.iter().map(|domain| domain.invalid_answers).sum();

    PsychosocialResult {
        catalog_version: catalog.version().to_string(),
        domains,
        overall: round_to(overall, 1),
        overall_risk: RiskLevel::classify(overall),
        invalid_answers,
        unknown_questions,
    }
}

fn score_domain(
    definition: &DomainDefinition,
    responses: &PsychosocialResponses,
) -> (DomainResult, f64) {
    let mut scores = Vec::new();
    let mut invalid_answers = 0;

    for question in &definition.questions {
        let Some(raw) = responses.get(&question.id) else {
            continue;
        };

        match normalize(question.polarity, *raw) {
            Some(points) => scores.push(points),
            None => {
                debug!(
                    question = question.id,
                    raw,
                    domain = definition.key,
                    "excluding out-of-range answer"
                );
                invalid_answers += 1;
            }
        }
    }

    let domain_mean = mean(scores.iter().map(|points| f64::from(*points))).unwrap_or(0.0);
    let risk = RiskLevel::classify(domain_mean);

    let result = DomainResult {
        key: definition.key.to_string(),
        name: definition.name.to_string(),
        mean: round_to(domain_mean, 1),
        risk,
        classification: risk.label().to_string(),
        color: risk.color().to_string(),
        answered: scores.len(),
        scores,
        invalid_answers,
    };

    (result, domain_mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::psychosocial::catalog::Polarity;
    use proptest::prelude::*;

    fn catalog() -> CopsoqCatalog {
        CopsoqCatalog::standard().expect("standard catalog")
    }

    fn responses(pairs: &[(QuestionId, i64)]) -> PsychosocialResponses {
        pairs.iter().copied().collect()
    }

    #[test]
    fn classification_bands_include_lower_bound_only() {
        assert_eq!(RiskLevel::classify(49.99), RiskLevel::Elevated);
        assert_eq!(RiskLevel::classify(50.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(74.99), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(75.0), RiskLevel::Satisfactory);
        assert_eq!(RiskLevel::Elevated.color(), "#E74C3C");
        assert_eq!(RiskLevel::Satisfactory.label(), "Condição Satisfatória");
    }

    #[test]
    fn work_family_conflict_example_scores_moderate() {
        let result = score_domains(&catalog(), &responses(&[(56, 4), (57, 5), (58, 3)]));
        let domain = result
            .domain("conflito_trabalho_familia")
            .expect("domain scored");

        assert_eq!(domain.scores, vec![25, 0, 50]);
        assert_eq!(domain.mean, 25.0);
        assert_eq!(domain.risk, RiskLevel::Elevated);

        let result = score_domains(&catalog(), &responses(&[(56, 2), (57, 3), (58, 3)]));
        let domain = result.domain("conflito_trabalho_familia").expect("domain");
        assert_eq!(domain.scores, vec![75, 50, 50]);
        assert_eq!(domain.mean, 58.3);
        assert_eq!(domain.classification, "Risco Moderado");
        assert_eq!(domain.color, "#F39C12");
    }

    #[test]
    fn domain_mean_divides_by_answered_questions_only() {
        let result = score_domains(&catalog(), &responses(&[(14, 5)]));
        let influence = result.domain("influencia_trabalho").expect("domain");

        assert_eq!(influence.answered, 1);
        assert_eq!(influence.mean, 100.0);
        assert_eq!(influence.risk, RiskLevel::Satisfactory);
    }

    #[test]
    fn mixed_domain_uses_each_question_polarity() {
        let result = score_domains(&catalog(), &responses(&[(59, 1), (60, 5), (61, 1)]));
        let burnout = result.domain("burnout").expect("domain");
        assert_eq!(burnout.scores, vec![100, 100, 100]);
    }

    #[test]
    fn invalid_and_unknown_answers_are_counted_not_scored() {
        let result = score_domains(
            &catalog(),
            &responses(&[(14, 5), (15, 9), (16, 0), (999, 3)]),
        );
        let influence = result.domain("influencia_trabalho").expect("domain");

        assert_eq!(influence.answered, 1);
        assert_eq!(influence.invalid_answers, 2);
        assert_eq!(influence.mean, 100.0);
        assert_eq!(result.invalid_answers, 2);
        assert_eq!(result.unknown_questions, vec![999]);
    }

    #[test]
    fn overall_is_equal_weight_mean_of_all_domains() {
        // Quantitative demands has four items, influence three; both weigh the same.
        let result = score_domains(
            &catalog(),
            &responses(&[(3, 5), (4, 5), (5, 5), (6, 5), (14, 5), (15, 5), (16, 5)]),
        );

        assert_eq!(result.answered_domains().count(), 2);
        // demands 0 and influence 100, eighteen unanswered domains at 0
        assert_eq!(result.overall, 5.0);
        assert_eq!(result.overall_risk, RiskLevel::Elevated);
    }

    #[test]
    fn unanswered_domains_count_as_zero_in_overall() {
        let result = score_domains(&catalog(), &responses(&[(14, 5), (15, 5), (16, 5)]));

        assert_eq!(result.domains.len(), 20);
        assert_eq!(result.answered_domains().count(), 1);
        assert_eq!(result.overall, 5.0);
        assert_eq!(result.overall_risk, RiskLevel::Elevated);
    }

    #[test]
    fn empty_responses_yield_zero_scores_without_faults() {
        let result = score_domains(&catalog(), &PsychosocialResponses::new());

        assert_eq!(result.overall, 0.0);
        assert!(result.domains.iter().all(|domain| !domain.is_answered()));
        assert!(result.domains.iter().all(|domain| domain.mean == 0.0));
    }

    #[test]
    fn scoring_is_repeatable() {
        let answers = responses(&[(3, 2), (9, 4), (36, 1), (60, 3)]);
        let first = score_domains(&catalog(), &answers);
        let second = score_domains(&catalog(), &answers);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn domain_mean_is_bounded_and_order_independent(
            answers in proptest::collection::vec(1i64..=5, 4)
        ) {
            let forward = CopsoqCatalog::new(
                "forward",
                vec![DomainDefinition::from_table(
                    "d",
                    "D",
                    &[
                        (1, Polarity::Positive, "a"),
                        (2, Polarity::Negative, "b"),
                        (3, Polarity::Positive, "c"),
                        (4, Polarity::Negative, "d"),
                    ],
                )],
            )
            .expect("catalog");
            let reversed = CopsoqCatalog::new(
                "reversed",
                vec![DomainDefinition::from_table(
                    "d",
                    "D",
                    &[
                        (4, Polarity::Negative, "d"),
                        (3, Polarity::Positive, "c"),
                        (2, Polarity::Negative, "b"),
                        (1, Polarity::Positive, "a"),
                    ],
                )],
            )
            .expect("catalog");

            let set: PsychosocialResponses = answers
                .iter()
                .enumerate()
                .map(|(idx, raw)| (idx as QuestionId + 1, *raw))
                .collect();

            let a = score_domains(&forward, &set);
            let b = score_domains(&reversed, &set);
            prop_assert!(a.domains[0].mean >= 0.0 && a.domains[0].mean <= 100.0);
            prop_assert_eq!(a.domains[0].mean, b.domains[0].mean);
        }
    }
}
