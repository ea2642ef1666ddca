//! Client autoconfiguration: Outlook autodiscover (CNAME and SRV) and
//! Thunderbird autoconfig.

use crate::scoring::{RequirementLevel, RequirementLevel::*, score};
use crate::snapshot::{DnsAnswers, DomainDnsSnapshot, is_resolved};

use super::Outcome;

pub(crate) fn evaluate_autodiscover(snapshot: &DomainDnsSnapshot) -> Outcome {
    match &snapshot.autodiscover {
        Some(answers) => host_answers(snapshot, answers, Recommended),
        None => Outcome::Missing,
    }
}

pub(crate) fn evaluate_autoconfig(snapshot: &DomainDnsSnapshot) -> Outcome {
    match &snapshot.autoconfig {
        Some(answers) => host_answers(snapshot, answers, Optional),
        None => Outcome::Missing,
    }
}

pub(crate) fn evaluate_autodiscover_srv(snapshot: &DomainDnsSnapshot) -> Outcome {
    let Some(srv) = &snapshot.autodiscover_srv else {
        return Outcome::Missing;
    };

    let presence = score(
        is_resolved(&srv.internal_dns),
        is_resolved(&srv.external_dns),
        Recommended,
        Recommended,
    );
    let matched = score(
        snapshot.is_external_address(&srv.ip),
        snapshot.is_own_address(&srv.ip),
        Optional,
        Optional,
    );
    Outcome::Scored(presence.min(matched))
}

// The internal answer is always recommended; only the external side varies.
fn host_answers(
    snapshot: &DomainDnsSnapshot,
    answers: &DnsAnswers,
    external_level: RequirementLevel,
) -> Outcome {
    let presence = score(
        is_resolved(&answers.internal_dns),
        is_resolved(&answers.external_dns),
        Recommended,
        external_level,
    );
    let matched = score(
        snapshot.is_external_address(&answers.external_dns),
        snapshot.is_own_address(&answers.internal_dns),
        Optional,
        Optional,
    );
    Outcome::Scored(presence.min(matched))
}
