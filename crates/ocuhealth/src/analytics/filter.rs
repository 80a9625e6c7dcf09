use crate::assessments::{Evaluation, Respondent};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Demographic and time criteria for dashboard roll-ups. Criteria are AND-combined;
/// `None` or blank text disables a criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationFilter {
    /// Case-insensitive substring of the respondent's sector.
    #[serde(default)]
    pub sector: Option<String>,
    /// Case-insensitive substring of the respondent's role.
    #[serde(default)]
    pub role: Option<String>,
    /// Exact gender match.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub min_tenure_years: Option<f64>,
    /// Inclusive; compared against the submission date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive of the whole day.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EvaluationFilter {
    pub fn is_empty(&self) -> bool {
        active_text(&self.sector).is_none()
            && active_text(&self.role).is_none()
            && active_text(&self.gender).is_none()
            && self.active_min_tenure().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    pub fn matches(&self, evaluation: &Evaluation) -> bool {
        let person = &evaluation.respondent;

        contains_folded(person.sector.as_deref(), active_text(&self.sector))
            && contains_folded(person.role.as_deref(), active_text(&self.role))
            && self.matches_gender(person)
            && self.matches_tenure(person)
            && self.matches_dates(person)
    }

    /// Matching evaluations in input order.
    pub fn apply<'a>(&self, evaluations: &'a [Evaluation]) -> Vec<&'a Evaluation> {
        evaluations
            .iter()
            .filter(|evaluation| self.matches(evaluation))
            .collect()
    }

    fn matches_gender(&self, person: &Respondent) -> bool {
        match active_text(&self.gender) {
            Some(wanted) => person.gender.as_deref() == Some(wanted),
            None => true,
        }
    }

    fn matches_tenure(&self, person: &Respondent) -> bool {
        match self.active_min_tenure() {
            Some(minimum) => person
                .tenure_years
                .is_some_and(|tenure| tenure >= minimum),
            None => true,
        }
    }

    fn matches_dates(&self, person: &Respondent) -> bool {
        let submitted = person.submitted_at.date();
        self.start_date.map_or(true, |start| submitted >= start)
            && self.end_date.map_or(true, |end| submitted <= end)
    }

    fn active_min_tenure(&self) -> Option<f64> {
        self.min_tenure_years
            .filter(|years| years.is_finite() && *years > 0.0)
    }
}

fn active_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn contains_folded(haystack: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack
            .is_some_and(|value| value.to_lowercase().contains(&needle.to_lowercase())),
        None => true,
    }
}
