#![forbid(unsafe_code)]
//! dnshealth_lib — scoring de la santé DNS d'un domaine de messagerie
//!
//! A [`DomainDnsSnapshot`] holds the answers of one DNS check. [`evaluate`]
//! grades it into a [`HealthReport`] with one [`Severity`] per [`Category`].

pub mod advice;
pub mod checks;
pub mod grading;
pub mod report;
pub mod scoring;
pub mod snapshot;

pub use advice::{AdviceError, recommended_records};
pub use checks::{Category, MxScores, Observation, Outcome, evaluate_category, observations};
pub use grading::{GradeThresholds, GradingError, Palette, Severity, grade};
pub use report::{CheckResult, HealthReport, evaluate, evaluate_with};
#[cfg(feature = "with-serde")]
pub use report::check_snapshot_json;
pub use scoring::{RequirementLevel, Score, combine, score};
pub use snapshot::{
    DnsAnswers, DomainDnsSnapshot, MxRecords, SnapshotError, SrvTarget, TxtAnswer, TxtPresence,
};
