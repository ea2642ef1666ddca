use super::{AdviceError, normalize_domain, recommended_records};
use crate::checks::Category;
use crate::snapshot::{DomainDnsSnapshot, MxRecords};

fn snapshot_with_mx(mx_domain: &str) -> DomainDnsSnapshot {
    DomainDnsSnapshot {
        external_ip: Some("192.0.2.10".to_string()),
        mx_records: Some(MxRecords {
            mx_domain: Some(mx_domain.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = normalize_domain("  . ").expect_err("empty domain should fail");
    assert!(matches!(err, AdviceError::EmptyDomain));
}

#[test]
fn normalize_domain_converts_to_ascii() {
    assert_eq!(normalize_domain("Exämple.COM.").expect("idna"), "xn--exmple-cua.com");
}

#[test]
fn srv_records_target_snapshot_mail_host() {
    let records = recommended_records(
        Category::ImapSrv,
        "example.com",
        &snapshot_with_mx("mx.example.com"),
    )
    .expect("records");
    assert_eq!(
        records,
        vec![
            "_imaps._tcp.example.com.    1    IN    SRV    0 0 993 mx.example.com.".to_string(),
            "_imap._tcp.example.com.    1    IN    SRV    0 0 143 mx.example.com.".to_string(),
        ]
    );
}

#[test]
fn mail_host_falls_back_without_mx_domain() {
    let records = recommended_records(
        Category::Reachability,
        "example.com",
        &DomainDnsSnapshot::default(),
    )
    .expect("records");
    insta::assert_snapshot!(records.join("\n"), @"mail.example.com.    1    IN    A    <external ip>");
}

#[test]
fn dmarc_record_reports_to_domain_admin() {
    let records = recommended_records(Category::Dmarc, "example.com", &snapshot_with_mx("x"))
        .expect("records");
    assert_eq!(records.len(), 1);
    assert!(records[0].starts_with("_dmarc.example.com."));
    assert!(records[0].contains("rua=mailto:admin@example.com"));
}

#[test]
fn every_category_but_dkim_has_an_example() {
    let snapshot = snapshot_with_mx("mail.example.com.");
    for category in Category::ALL {
        let records = recommended_records(category, "example.com", &snapshot).expect("records");
        assert_eq!(records.is_empty(), category == Category::Dkim, "{category:?}");
    }
}
