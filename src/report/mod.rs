//! Aggregation of all category checks into a [`HealthReport`].

mod types;

pub use types::{CheckResult, HealthReport};

use crate::checks::{Category, evaluate_category};
use crate::grading::{GradeThresholds, grade};
use crate::snapshot::DomainDnsSnapshot;
#[cfg(feature = "with-serde")]
use crate::snapshot::SnapshotError;

/// Grades every category of `snapshot` with the default thresholds.
pub fn evaluate(snapshot: &DomainDnsSnapshot) -> HealthReport {
    evaluate_with(snapshot, &GradeThresholds::default())
}

/// Grades every category of `snapshot`. Pure: the same snapshot and
/// thresholds always give the same report.
pub fn evaluate_with(snapshot: &DomainDnsSnapshot, thresholds: &GradeThresholds) -> HealthReport {
    let results = Category::ALL
        .iter()
        .map(|&category| {
            let outcome = evaluate_category(category, snapshot);
            let severity = grade(outcome, thresholds);
            #[cfg(feature = "with-tracing")]
            tracing::debug!(
                category = category.key(),
                score = ?outcome.score(),
                severity = severity.as_str(),
                "dns check graded"
            );
            CheckResult {
                category,
                outcome,
                severity,
            }
        })
        .collect();
    HealthReport::new(results)
}

/// Parses a DNS check payload and grades it. A payload that fails to parse or
/// validate is rejected as a whole.
#[cfg(feature = "with-serde")]
pub fn check_snapshot_json(
    input: &str,
    thresholds: &GradeThresholds,
) -> Result<HealthReport, SnapshotError> {
    let snapshot = match DomainDnsSnapshot::from_json(input) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            #[cfg(feature = "with-tracing")]
            tracing::warn!(error = %err, "dns check snapshot rejected");
            return Err(err);
        }
    };
    Ok(evaluate_with(&snapshot, thresholds))
}
