//! Quantization of check outcomes into the four-level [`Severity`] scale.

mod error;
mod palette;
mod types;

pub use error::GradingError;
pub use palette::Palette;
pub use types::{GradeThresholds, Severity};

use crate::checks::Outcome;

/// Grades an evaluator outcome. A missing record is always [`Severity::Error`]
/// and a reachable server is always [`Severity::Good`].
pub fn grade(outcome: Outcome, thresholds: &GradeThresholds) -> Severity {
    match outcome {
        Outcome::Missing => Severity::Error,
        Outcome::Reachable => Severity::Good,
        Outcome::Scored(score) => thresholds.grade_score(score),
    }
}
