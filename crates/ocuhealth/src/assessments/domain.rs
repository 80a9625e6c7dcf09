use thiserror::Error;

/// Structural problems detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("question {question} is assigned to both `{first}` and `{second}`")]
    DuplicateQuestion {
        question: u16,
        first: String,
        second: String,
    },
    #[error("`{0}` defines no questions")]
    EmptyGroup(String),
    #[error("`{group}` declares {declared} items but defines {found}")]
    ItemCountMismatch {
        group: String,
        declared: usize,
        found: usize,
    },
    #[error("scale `{0}` has a zero divisor")]
    ZeroDivisor(String),
    #[error("category `{category}` appears twice in `{checklist}`")]
    DuplicateCategory { checklist: String, category: String },
}

/// Round half away from zero to a fixed number of decimals.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Mean of an iterator of values, `None` when it is empty.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
