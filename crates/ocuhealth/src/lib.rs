//! Scoring and aggregation engine for occupational-health assessments.
//!
//! Raw psychosocial (COPSOQ II, PROART) and ergonomic (AEP) answers go in; normalized
//! domain scores, compliance percentages, cross-sectional averages, action plans, and
//! qualitative alerts come out. Every scoring call receives its catalog explicitly and
//! performs no I/O.

pub mod alerts;
pub mod analytics;
pub mod assessments;
pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
