use crate::snapshot::{DnsAnswers, DomainDnsSnapshot, TxtPresence, resolved};

use super::Category;

/// One observed DNS value, as a detail view would list it.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub label: String,
    /// `None` when the value did not resolve.
    pub value: Option<String>,
}

impl Observation {
    fn new(label: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Lists the values behind a category's grade.
pub fn observations(category: Category, snapshot: &DomainDnsSnapshot) -> Vec<Observation> {
    let mut out = Vec::new();
    match category {
        Category::Reachability => {
            out.push(Observation::new("External IP", snapshot.external_address()));
        }
        Category::Mx => {
            let mx = snapshot.mx_records.clone().unwrap_or_default();
            out.push(Observation::new("Internal DNS", resolved(&mx.internal_dns)));
            out.push(Observation::new("External DNS", resolved(&mx.external_dns)));
            out.push(Observation::new("MX Domain", resolved(&mx.mx_domain)));
            out.push(Observation::new("Reverse lookup", resolved(&mx.reverse_lookup)));
        }
        Category::Autodiscover => push_answers(&mut out, "", snapshot.autodiscover.as_ref()),
        Category::Autoconfig => push_answers(&mut out, "", snapshot.autoconfig.as_ref()),
        Category::AutodiscoverSrv => {
            let srv = snapshot.autodiscover_srv.clone().unwrap_or_default();
            out.push(Observation::new("Internal DNS", resolved(&srv.internal_dns)));
            out.push(Observation::new("External DNS", resolved(&srv.external_dns)));
            out.push(Observation::new("Target IP", resolved(&srv.ip)));
        }
        Category::Spf => push_txt(&mut out, snapshot.txt.as_ref()),
        Category::Dkim => push_txt(&mut out, snapshot.dkim.as_ref()),
        Category::Dmarc => push_txt(&mut out, snapshot.dmarc.as_ref()),
        Category::DavTxt => {
            push_answers(&mut out, "Caldav ", snapshot.caldav_txt.as_ref());
            push_answers(&mut out, "Carddav ", snapshot.carddav_txt.as_ref());
        }
        Category::CaldavSrv => {
            push_answers(&mut out, "Caldav ", snapshot.caldav_srv.as_ref());
            push_answers(&mut out, "Caldavs ", snapshot.caldavs_srv.as_ref());
        }
        Category::CarddavSrv => {
            push_answers(&mut out, "Carddav ", snapshot.carddav_srv.as_ref());
            push_answers(&mut out, "Carddavs ", snapshot.carddavs_srv.as_ref());
        }
        Category::ImapSrv => {
            push_answers(&mut out, "IMAP ", snapshot.imap_srv.as_ref());
            push_answers(&mut out, "IMAPs ", snapshot.imaps_srv.as_ref());
        }
        Category::Pop3Srv => {
            push_answers(&mut out, "POP3 ", snapshot.pop3_srv.as_ref());
            push_answers(&mut out, "POP3s ", snapshot.pop3s_srv.as_ref());
        }
        Category::SubmissionSrv => push_answers(&mut out, "", snapshot.submission_srv.as_ref()),
    }
    out
}

fn push_answers(out: &mut Vec<Observation>, prefix: &str, answers: Option<&DnsAnswers>) {
    let (internal, external) = answers
        .map(|a| (resolved(&a.internal_dns), resolved(&a.external_dns)))
        .unwrap_or((None, None));
    out.push(Observation::new(format!("{prefix}Internal DNS"), internal));
    out.push(Observation::new(format!("{prefix}External DNS"), external));
}

fn push_txt(out: &mut Vec<Observation>, record: Option<&TxtPresence>) {
    let value = record
        .and_then(|r| r.external_dns.as_ref())
        .filter(|answer| answer.is_usable())
        .map(|answer| answer.as_text().unwrap_or("found"));
    out.push(Observation::new("External DNS", value));
}
