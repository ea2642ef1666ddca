use super::{DnsAnswers, DomainDnsSnapshot, MxRecords, SrvTarget, TxtPresence};

pub(crate) const EXTERNAL_IP: &str = "192.0.2.10";
pub(crate) const LOCAL_IP: &str = "10.0.0.5";
pub(crate) const MAIL_HOST: &str = "mail.example.com";

fn srv() -> Option<DnsAnswers> {
    Some(DnsAnswers::new(MAIL_HOST, MAIL_HOST))
}

fn dav_txt() -> Option<DnsAnswers> {
    Some(DnsAnswers::new("\"path=/dav\"", "\"path=/dav\""))
}

/// Every block present, resolved and pointing at the server's own addresses.
pub(crate) fn healthy_snapshot() -> DomainDnsSnapshot {
    DomainDnsSnapshot {
        external_ip: Some(EXTERNAL_IP.to_string()),
        local_ip: Some(LOCAL_IP.to_string()),
        mx_records: Some(MxRecords {
            external_dns: Some(EXTERNAL_IP.to_string()),
            internal_dns: Some(LOCAL_IP.to_string()),
            reverse_lookup: Some(format!("{MAIL_HOST}.")),
            mx_domain: Some(MAIL_HOST.to_string()),
        }),
        autodiscover: Some(DnsAnswers::new(EXTERNAL_IP, LOCAL_IP)),
        autoconfig: Some(DnsAnswers::new(EXTERNAL_IP, LOCAL_IP)),
        autodiscover_srv: Some(SrvTarget {
            external_dns: Some(MAIL_HOST.to_string()),
            internal_dns: Some(MAIL_HOST.to_string()),
            ip: Some(EXTERNAL_IP.to_string()),
        }),
        txt: Some(TxtPresence::record("v=spf1 a mx -all")),
        dkim: Some(TxtPresence::found(true)),
        dmarc: Some(TxtPresence::found(true)),
        caldav_txt: dav_txt(),
        carddav_txt: dav_txt(),
        caldav_srv: srv(),
        caldavs_srv: srv(),
        carddav_srv: srv(),
        carddavs_srv: srv(),
        imap_srv: srv(),
        imaps_srv: srv(),
        pop3_srv: srv(),
        pop3s_srv: srv(),
        submission_srv: srv(),
    }
}
