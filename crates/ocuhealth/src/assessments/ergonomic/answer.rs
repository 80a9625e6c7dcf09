use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Three-valued checklist answer, resolved once at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryAnswer {
    Yes,
    No,
    NotApplicable,
}

impl CategoryAnswer {
    /// Accepts `Sim`/`Não`/`NA` in any case, with or without diacritics, plus the
    /// English and boolean spellings exported by older forms.
    pub fn parse(raw: &str) -> Option<Self> {
        match fold_token(raw).as_str() {
            "SIM" | "S" | "YES" | "Y" | "TRUE" | "1" => Some(Self::Yes),
            "NAO" | "N" | "NO" | "FALSE" | "0" => Some(Self::No),
            "NA" | "N/A" | "N.A." | "NAO SE APLICA" | "NOT APPLICABLE" => {
                Some(Self::NotApplicable)
            }
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Sim",
            Self::No => "Não",
            Self::NotApplicable => "NA",
        }
    }
}

impl fmt::Display for CategoryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn fold_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Checklist answers as they arrive from a form: category id to positional raw tokens.
pub type RawChecklist = BTreeMap<String, Vec<String>>;

/// Resolved answers per category. `None` marks a token that matched no known answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResponses {
    pub categories: BTreeMap<String, Vec<Option<CategoryAnswer>>>,
}

impl ChecklistResponses {
    pub fn from_raw(raw: &RawChecklist) -> Self {
        let categories = raw
            .iter()
            .map(|(category, tokens)| {
                let answers = tokens
                    .iter()
                    .enumerate()
                    .map(|(idx, token)| {
                        let answer = CategoryAnswer::parse(token);
                        if answer.is_none() {
                            debug!(category = %category, item = idx + 1, token = %token, "unrecognized checklist answer");
                        }
                        answer
                    })
                    .collect();
                (category.clone(), answers)
            })
            .collect();

        Self { categories }
    }

    pub fn insert(&mut self, category: impl Into<String>, answers: Vec<Option<CategoryAnswer>>) {
        self.categories.insert(category.into(), answers);
    }

    pub fn category(&self, id: &str) -> Option<&[Option<CategoryAnswer>]> {
        self.categories.get(id).map(Vec::as_slice)
    }

    /// Number of tokens that could not be resolved.
    pub fn unrecognized(&self) -> usize {
        self.categories
            .values()
            .flatten()
            .filter(|answer| answer.is_none())
            .count()
    }

    /// `(category, zero-based item index)` of every `No` answer, in category order.
    pub fn non_conformities(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.categories.iter().flat_map(|(category, answers)| {
            answers
                .iter()
                .enumerate()
                .filter(|(_, answer)| **answer == Some(CategoryAnswer::No))
                .map(move |(idx, _)| (category.as_str(), idx))
        })
    }
}
