use super::{
    Category, MxScores, Outcome, REVERSE_LOOKUP_MISMATCH_SCORE, evaluate_category, mx_scores,
    observations,
};
use crate::snapshot::fixtures::{EXTERNAL_IP, LOCAL_IP, MAIL_HOST, healthy_snapshot};
use crate::snapshot::{DnsAnswers, DomainDnsSnapshot, MxRecords, TxtPresence};

fn scored(category: Category, snapshot: &DomainDnsSnapshot) -> i32 {
    match evaluate_category(category, snapshot) {
        Outcome::Scored(score) => score,
        other => panic!("expected a score for {category:?}, got {other:?}"),
    }
}

#[test]
fn empty_snapshot_is_missing_everywhere() {
    let snapshot = DomainDnsSnapshot::default();
    for category in Category::ALL {
        assert_eq!(
            evaluate_category(category, &snapshot),
            Outcome::Missing,
            "{category:?}"
        );
    }
}

#[test]
fn healthy_snapshot_scores_perfect_everywhere() {
    let snapshot = healthy_snapshot();
    for category in Category::ALL {
        let outcome = evaluate_category(category, &snapshot);
        match category {
            Category::Reachability => assert_eq!(outcome, Outcome::Reachable),
            _ => assert_eq!(outcome, Outcome::Scored(100), "{category:?}"),
        }
    }
}

#[test]
fn reachability_needs_a_resolved_external_ip() {
    let snapshot = DomainDnsSnapshot {
        external_ip: Some(String::new()),
        local_ip: Some(LOCAL_IP.to_string()),
        ..Default::default()
    };
    assert_eq!(
        evaluate_category(Category::Reachability, &snapshot),
        Outcome::Missing
    );
}

#[test]
fn mx_reverse_lookup_mismatch_is_pinned_to_warning_score() {
    let snapshot = DomainDnsSnapshot {
        external_ip: Some(EXTERNAL_IP.to_string()),
        local_ip: Some(LOCAL_IP.to_string()),
        mx_records: Some(MxRecords {
            external_dns: Some("mx.example.com".to_string()),
            internal_dns: Some("mx.example.com".to_string()),
            reverse_lookup: Some("other.example.com".to_string()),
            mx_domain: Some("mx.example.com".to_string()),
        }),
        ..Default::default()
    };

    let scores = mx_scores(&snapshot).expect("mx block present");
    assert_eq!(
        scores,
        MxScores {
            primary: 100,
            matched: 80,
            reverse: REVERSE_LOOKUP_MISMATCH_SCORE,
        }
    );
    assert_eq!(scores.reverse, 70);
    assert_eq!(
        scored(Category::Mx, &snapshot),
        scores.primary.min(scores.matched).min(70)
    );
}

#[test]
fn mx_reverse_lookup_mismatch_keeps_lower_primary() {
    let snapshot = DomainDnsSnapshot {
        mx_records: Some(MxRecords {
            external_dns: None,
            internal_dns: Some(LOCAL_IP.to_string()),
            reverse_lookup: None,
            mx_domain: Some(MAIL_HOST.to_string()),
        }),
        ..Default::default()
    };
    let scores = mx_scores(&snapshot).expect("mx block present");
    assert_eq!(scores.primary, 45);
    assert_eq!(scores.reverse, 70);
    assert_eq!(scored(Category::Mx, &snapshot), 45);
}

#[test]
fn mx_matched_reverse_lookup_reuses_primary() {
    let mut snapshot = healthy_snapshot();
    if let Some(mx) = snapshot.mx_records.as_mut() {
        mx.internal_dns = None;
    }
    let scores = mx_scores(&snapshot).expect("mx block present");
    assert_eq!(scores.primary, 70);
    assert_eq!(scores.reverse, scores.primary);
    assert_eq!(scores.matched, 90);
    assert_eq!(scores.total(), 70);
}

#[test]
fn mx_internal_answer_may_be_the_external_ip() {
    let mut snapshot = healthy_snapshot();
    if let Some(mx) = snapshot.mx_records.as_mut() {
        mx.internal_dns = Some(EXTERNAL_IP.to_string());
    }
    assert_eq!(scored(Category::Mx, &snapshot), 100);
}

#[test]
fn mx_missing_answers_do_not_match_missing_addresses() {
    let snapshot = DomainDnsSnapshot {
        mx_records: Some(MxRecords::default()),
        ..Default::default()
    };
    let scores = mx_scores(&snapshot).expect("mx block present");
    assert_eq!(scores.matched, 80);
    assert_eq!(scores.total(), 15);
}

#[test]
fn autodiscover_weighs_internal_and_external_equally() {
    let mut snapshot = healthy_snapshot();
    snapshot.autodiscover = Some(DnsAnswers {
        external_dns: None,
        internal_dns: Some(LOCAL_IP.to_string()),
    });
    assert_eq!(scored(Category::Autodiscover, &snapshot), 77);
}

#[test]
fn autoconfig_treats_external_answer_as_optional() {
    let mut snapshot = healthy_snapshot();
    snapshot.autoconfig = Some(DnsAnswers {
        external_dns: None,
        internal_dns: Some(LOCAL_IP.to_string()),
    });
    assert_eq!(scored(Category::Autoconfig, &snapshot), 87);
}

#[test]
fn autodiscover_srv_checks_target_address() {
    let mut snapshot = healthy_snapshot();
    if let Some(srv) = snapshot.autodiscover_srv.as_mut() {
        srv.ip = Some(LOCAL_IP.to_string());
    }
    assert_eq!(scored(Category::AutodiscoverSrv, &snapshot), 90);
}

#[test]
fn spf_without_usable_record_scores_partially() {
    let mut snapshot = healthy_snapshot();
    snapshot.txt = Some(TxtPresence::found(false));
    assert_eq!(scored(Category::Spf, &snapshot), 67);
    snapshot.txt = Some(TxtPresence::default());
    assert_eq!(scored(Category::Spf, &snapshot), 67);
}

#[test]
fn dmarc_reads_its_own_record() {
    let mut snapshot = healthy_snapshot();
    snapshot.dmarc = None;
    assert_eq!(evaluate_category(Category::Dmarc, &snapshot), Outcome::Missing);
    assert_eq!(scored(Category::Dkim, &snapshot), 100);

    snapshot.dmarc = Some(TxtPresence::found(true));
    snapshot.dkim = None;
    assert_eq!(scored(Category::Dmarc, &snapshot), 100);
    assert_eq!(evaluate_category(Category::Dkim, &snapshot), Outcome::Missing);
}

#[test]
fn dav_txt_requires_exact_quoted_path() {
    let mut snapshot = healthy_snapshot();
    snapshot.caldav_txt = Some(DnsAnswers::new("path=/dav", "\"path=/dav\""));
    assert_eq!(scored(Category::DavTxt, &snapshot), 90);
    snapshot.carddav_txt = Some(DnsAnswers::default());
    assert_eq!(scored(Category::DavTxt, &snapshot), 80);
}

#[test]
fn dav_txt_missing_either_record_is_missing() {
    let mut snapshot = healthy_snapshot();
    snapshot.carddav_txt = None;
    assert_eq!(evaluate_category(Category::DavTxt, &snapshot), Outcome::Missing);
}

#[test]
fn paired_srv_with_absent_member_is_missing() {
    let mut snapshot = healthy_snapshot();
    snapshot.caldavs_srv = None;
    assert_eq!(
        evaluate_category(Category::CaldavSrv, &snapshot),
        Outcome::Missing
    );
    snapshot.caldavs_srv = Some(DnsAnswers::default());
    snapshot.caldav_srv = None;
    assert_eq!(
        evaluate_category(Category::CaldavSrv, &snapshot),
        Outcome::Missing
    );
}

#[test]
fn paired_srv_keeps_the_worst_member() {
    let mut snapshot = healthy_snapshot();
    snapshot.imaps_srv = Some(DnsAnswers::external_only(MAIL_HOST));
    assert_eq!(scored(Category::ImapSrv, &snapshot), 90);
    snapshot.imap_srv = Some(DnsAnswers::default());
    assert_eq!(scored(Category::ImapSrv, &snapshot), 80);
}

#[test]
fn submission_is_a_single_member_group() {
    let mut snapshot = healthy_snapshot();
    snapshot.submission_srv = Some(DnsAnswers::external_only(MAIL_HOST));
    assert_eq!(scored(Category::SubmissionSrv, &snapshot), 90);
    snapshot.submission_srv = None;
    assert_eq!(
        evaluate_category(Category::SubmissionSrv, &snapshot),
        Outcome::Missing
    );
}

#[test]
fn category_keys_round_trip_and_accept_aliases() {
    for category in Category::ALL {
        assert_eq!(Category::from_key(category.key()), Some(category));
    }
    assert_eq!(Category::from_key(" Autodiscover-SRV "), Some(Category::AutodiscoverSrv));
    assert_eq!(Category::from_key("txt"), Some(Category::Spf));
    assert_eq!(Category::from_key("ldap"), None);
}

#[test]
fn observations_list_unresolved_values_as_none() {
    let snapshot = DomainDnsSnapshot {
        mx_records: Some(MxRecords {
            external_dns: Some(EXTERNAL_IP.to_string()),
            internal_dns: Some(String::new()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let observed = observations(Category::Mx, &snapshot);
    let labels: Vec<&str> = observed.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Internal DNS", "External DNS", "MX Domain", "Reverse lookup"]
    );
    assert_eq!(observed[0].value, None);
    assert_eq!(observed[1].value.as_deref(), Some(EXTERNAL_IP));
}

#[test]
fn observations_cover_both_members_of_a_pair() {
    let observed = observations(Category::Pop3Srv, &healthy_snapshot());
    assert_eq!(observed.len(), 4);
    assert_eq!(observed[2].label, "POP3s Internal DNS");
    assert_eq!(observed[2].value.as_deref(), Some(MAIL_HOST));

    let spf = observations(Category::Dkim, &healthy_snapshot());
    assert_eq!(spf[0].value.as_deref(), Some("found"));
    let spf = observations(Category::Spf, &healthy_snapshot());
    assert_eq!(spf[0].value.as_deref(), Some("v=spf1 a mx -all"));
}
