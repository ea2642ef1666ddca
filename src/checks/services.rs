use crate::scoring::{RequirementLevel::*, Score, score};
use crate::snapshot::{DnsAnswers, is_resolved};

use super::Outcome;

/// Value the `_caldavs._tcp`/`_carddavs._tcp` TXT record must carry, quotes included.
pub const DAV_PATH_HINT: &str = "\"path=/dav\"";

/// Scores every member of a group and keeps the worst. A single absent member
/// makes the whole group missing.
pub(crate) fn evaluate_group<F>(members: &[Option<&DnsAnswers>], member_score: F) -> Outcome
where
    F: Fn(&DnsAnswers) -> Score,
{
    let mut worst: Option<Score> = None;
    for member in members.iter().copied() {
        let Some(answers) = member else {
            return Outcome::Missing;
        };
        let current = member_score(answers);
        worst = Some(worst.map_or(current, |w| w.min(current)));
    }
    worst.map_or(Outcome::Missing, Outcome::Scored)
}

pub(crate) fn srv_score(answers: &DnsAnswers) -> Score {
    score(
        is_resolved(&answers.external_dns),
        is_resolved(&answers.internal_dns),
        Optional,
        Optional,
    )
}

pub(crate) fn dav_txt_score(answers: &DnsAnswers) -> Score {
    score(
        answers.external_dns.as_deref() == Some(DAV_PATH_HINT),
        answers.internal_dns.as_deref() == Some(DAV_PATH_HINT),
        Optional,
        Optional,
    )
}
