pub mod domain;
pub mod ergonomic;
mod evaluation;
pub mod psychosocial;

pub use domain::CatalogError;
pub use evaluation::{
    AssessmentEngine, Evaluation, EvaluationKind, EvaluationScores, Respondent, Submission,
    SubmittedAnswers,
};
