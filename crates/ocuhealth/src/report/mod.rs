mod insights;
mod summary;
pub mod views;

pub use insights::{ergonomic_insights, priority_domains, psychosocial_insights, PRIORITY_LIMIT};
pub use summary::evaluation_report;
