use crate::scoring::{RequirementLevel::*, score};
use crate::snapshot::TxtPresence;

use super::Outcome;

/// SPF, DKIM and DMARC share one rule: the external record is recommended and
/// the missing internal side counts as satisfied.
pub(crate) fn evaluate(record: Option<&TxtPresence>) -> Outcome {
    match record {
        Some(record) => Outcome::Scored(score(record.is_usable(), true, Recommended, Optional)),
        None => Outcome::Missing,
    }
}
