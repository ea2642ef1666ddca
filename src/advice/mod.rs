//! Example zone records that satisfy each check.

mod error;

pub use error::AdviceError;

use crate::checks::Category;
use crate::snapshot::{DomainDnsSnapshot, resolved};

/// Zone lines to publish for `category`, with the domain IDNA-normalized.
///
/// The mail host is the snapshot's MX domain when it looks like a name,
/// otherwise `mail.<domain>.`. DKIM has no generic record since the selector
/// and key are deployment specific.
pub fn recommended_records(
    category: Category,
    domain: &str,
    snapshot: &DomainDnsSnapshot,
) -> Result<Vec<String>, AdviceError> {
    let domain = normalize_domain(domain)?;
    let host = mail_host(&domain, snapshot);
    let address = snapshot.external_address().unwrap_or("<external ip>");

    let records = match category {
        Category::Reachability => vec![zone_line(&host, "A", address)],
        Category::Mx => vec![zone_line(
            &format!("{domain}."),
            "MX",
            &format!("10 mail.{domain}."),
        )],
        Category::Autodiscover => vec![
            zone_line(&host, "A", address),
            zone_line(&format!("autodiscover.{domain}."), "CNAME", &host),
        ],
        Category::AutodiscoverSrv => vec![
            zone_line(&host, "A", address),
            srv_line("_autodiscover", &domain, 443, &host),
        ],
        Category::Autoconfig => vec![
            zone_line(&host, "A", address),
            zone_line(&format!("autoconfig.{domain}."), "CNAME", &host),
        ],
        Category::Spf => vec![zone_line(
            &format!("{domain}."),
            "TXT",
            "\"v=spf1 a mx -all\"",
        )],
        Category::Dkim => Vec::new(),
        Category::Dmarc => vec![zone_line(
            &format!("_dmarc.{domain}."),
            "TXT",
            &format!("\"v=DMARC1; p=quarantine; rua=mailto:admin@{domain}\""),
        )],
        Category::DavTxt => vec![
            zone_line(&format!("_caldavs._tcp.{domain}."), "TXT", "\"path=/dav\""),
            zone_line(&format!("_carddavs._tcp.{domain}."), "TXT", "\"path=/dav\""),
        ],
        Category::CaldavSrv => vec![
            srv_line("_caldavs", &domain, 443, &host),
            srv_line("_caldav", &domain, 80, &host),
        ],
        Category::CarddavSrv => vec![
            srv_line("_carddavs", &domain, 443, &host),
            srv_line("_carddav", &domain, 80, &host),
        ],
        Category::ImapSrv => vec![
            srv_line("_imaps", &domain, 993, &host),
            srv_line("_imap", &domain, 143, &host),
        ],
        Category::Pop3Srv => vec![
            srv_line("_pop3s", &domain, 995, &host),
            srv_line("_pop3", &domain, 110, &host),
        ],
        Category::SubmissionSrv => vec![srv_line("_submission", &domain, 587, &host)],
    };
    Ok(records)
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, AdviceError> {
    let trimmed = domain.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(AdviceError::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(AdviceError::idna)
}

fn mail_host(domain: &str, snapshot: &DomainDnsSnapshot) -> String {
    let from_snapshot = snapshot
        .mx_records
        .as_ref()
        .and_then(|mx| resolved(&mx.mx_domain))
        .filter(|name| name.len() > 1);
    match from_snapshot {
        Some(name) if name.ends_with('.') => name.to_string(),
        Some(name) => format!("{name}."),
        None => format!("mail.{domain}."),
    }
}

fn zone_line(owner: &str, rtype: &str, data: &str) -> String {
    format!("{owner}    1    IN    {rtype}    {data}")
}

fn srv_line(service: &str, domain: &str, port: u16, target: &str) -> String {
    zone_line(
        &format!("{service}._tcp.{domain}."),
        "SRV",
        &format!("0 0 {port} {target}"),
    )
}

#[cfg(test)]
mod tests;
