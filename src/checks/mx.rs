use crate::scoring::{RequirementLevel::*, Score, score};
use crate::snapshot::{DomainDnsSnapshot, MxRecords, is_resolved, resolved};

use super::Outcome;

/// Sub-score applied when the MX host does not reverse-resolve to itself.
pub const REVERSE_LOOKUP_MISMATCH_SCORE: Score = 70;

/// The three MX sub-checks before the worst one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MxScores {
    /// External answer is required, internal answer is recommended.
    pub primary: Score,
    /// Answers point at the server's own addresses.
    pub matched: Score,
    /// Equal to `primary` when the reverse lookup names the MX host.
    pub reverse: Score,
}

impl MxScores {
    pub fn total(&self) -> Score {
        self.primary.min(self.matched).min(self.reverse)
    }
}

pub(crate) fn evaluate(snapshot: &DomainDnsSnapshot) -> Outcome {
    match &snapshot.mx_records {
        Some(records) => Outcome::Scored(sub_scores(snapshot, records).total()),
        None => Outcome::Missing,
    }
}

pub(crate) fn sub_scores(snapshot: &DomainDnsSnapshot, records: &MxRecords) -> MxScores {
    let primary = score(
        is_resolved(&records.external_dns),
        is_resolved(&records.internal_dns),
        Required,
        Recommended,
    );

    let reverse = if reverse_lookup_matches(records) {
        primary
    } else {
        REVERSE_LOOKUP_MISMATCH_SCORE
    };

    let matched = score(
        snapshot.is_external_address(&records.external_dns),
        snapshot.is_own_address(&records.internal_dns),
        Optional,
        Optional,
    );

    MxScores {
        primary,
        matched,
        reverse,
    }
}

fn reverse_lookup_matches(records: &MxRecords) -> bool {
    match (resolved(&records.mx_domain), resolved(&records.reverse_lookup)) {
        (Some(domain), Some(reverse)) => normalize_host(domain) == normalize_host(reverse),
        _ => false,
    }
}

fn normalize_host(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}
