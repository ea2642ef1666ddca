//! One evaluator per DNS health category.
//!
//! Every evaluator follows the same shape: when the category's record block is
//! absent from the snapshot the outcome is [`Outcome::Missing`]; otherwise one
//! or more sub-scores are computed with [`crate::scoring::score`] and the
//! lowest one is kept.

mod auth;
mod category;
mod discovery;
mod mx;
mod observe;
mod services;

pub use category::Category;
pub use mx::{MxScores, REVERSE_LOOKUP_MISMATCH_SCORE};
pub use observe::{Observation, observations};
pub use services::DAV_PATH_HINT;

use crate::scoring::Score;
use crate::snapshot::DomainDnsSnapshot;

/// Raw result of one evaluator, before grading.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "with-serde",
    serde(tag = "kind", content = "score", rename_all = "snake_case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The category's record block was absent.
    Missing,
    /// Reachability has no graded score, only present or absent.
    Reachable,
    Scored(Score),
}

impl Outcome {
    pub fn score(&self) -> Option<Score> {
        match self {
            Self::Scored(score) => Some(*score),
            Self::Missing | Self::Reachable => None,
        }
    }
}

/// Runs the evaluator for `category` against `snapshot`.
pub fn evaluate_category(category: Category, snapshot: &DomainDnsSnapshot) -> Outcome {
    use services::{dav_txt_score, evaluate_group, srv_score};

    match category {
        Category::Reachability => {
            if snapshot.external_address().is_some() {
                Outcome::Reachable
            } else {
                Outcome::Missing
            }
        }
        Category::Mx => mx::evaluate(snapshot),
        Category::Autodiscover => discovery::evaluate_autodiscover(snapshot),
        Category::AutodiscoverSrv => discovery::evaluate_autodiscover_srv(snapshot),
        Category::Autoconfig => discovery::evaluate_autoconfig(snapshot),
        Category::Spf => auth::evaluate(snapshot.txt.as_ref()),
        Category::Dkim => auth::evaluate(snapshot.dkim.as_ref()),
        Category::Dmarc => auth::evaluate(snapshot.dmarc.as_ref()),
        Category::DavTxt => evaluate_group(
            &[snapshot.caldav_txt.as_ref(), snapshot.carddav_txt.as_ref()],
            dav_txt_score,
        ),
        Category::CaldavSrv => evaluate_group(
            &[snapshot.caldav_srv.as_ref(), snapshot.caldavs_srv.as_ref()],
            srv_score,
        ),
        Category::CarddavSrv => evaluate_group(
            &[snapshot.carddav_srv.as_ref(), snapshot.carddavs_srv.as_ref()],
            srv_score,
        ),
        Category::ImapSrv => evaluate_group(
            &[snapshot.imap_srv.as_ref(), snapshot.imaps_srv.as_ref()],
            srv_score,
        ),
        Category::Pop3Srv => evaluate_group(
            &[snapshot.pop3_srv.as_ref(), snapshot.pop3s_srv.as_ref()],
            srv_score,
        ),
        Category::SubmissionSrv => evaluate_group(&[snapshot.submission_srv.as_ref()], srv_score),
    }
}

/// MX sub-scores, or `None` when the snapshot has no MX block.
pub fn mx_scores(snapshot: &DomainDnsSnapshot) -> Option<MxScores> {
    snapshot
        .mx_records
        .as_ref()
        .map(|records| mx::sub_scores(snapshot, records))
}

#[cfg(test)]
mod tests;
