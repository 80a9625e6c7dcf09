use super::answer::{CategoryAnswer, ChecklistResponses};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerSheetImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: item position must be a positive integer (found '{value}')")]
    InvalidItem { line: u64, value: String },
    #[error("category `{category}` answers item {item} more than once")]
    DuplicateItem { category: String, item: usize },
    #[error("category `{category}` skips item {item}")]
    MissingItem { category: String, item: usize },
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Answer", default)]
    answer: String,
}

/// Reads `Category,Item,Answer` sheets exported by the checklist forms.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ChecklistResponses, AnswerSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ChecklistResponses, AnswerSheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut positioned: BTreeMap<String, BTreeMap<usize, Option<CategoryAnswer>>> =
            BTreeMap::new();

        // Line 1 is the header.
        for (line, record) in (2u64..).zip(csv_reader.deserialize::<AnswerRow>()) {
            let row = record?;
            let item = parse_position(&row.item).ok_or_else(|| {
                AnswerSheetImportError::InvalidItem {
                    line,
                    value: row.item.clone(),
                }
            })?;

            let answers = positioned.entry(row.category.clone()).or_default();
            if answers
                .insert(item, CategoryAnswer::parse(&row.answer))
                .is_some()
            {
                return Err(AnswerSheetImportError::DuplicateItem {
                    category: row.category,
                    item,
                });
            }
        }

        let mut responses = ChecklistResponses::default();
        for (category, answers) in positioned {
            let mut ordered = Vec::with_capacity(answers.len());
            for (expected, (item, answer)) in (1..).zip(answers) {
                if item != expected {
                    return Err(AnswerSheetImportError::MissingItem {
                        category,
                        item: expected,
                    });
                }
                ordered.push(answer);
            }
            responses.insert(category, ordered);
        }

        Ok(responses)
    }
}

fn parse_position(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|item| *item > 0)
}
