/// Answers for the domain's MX host.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MxRecords {
    #[cfg_attr(feature = "with-serde", serde(rename = "externalDNS"))]
    pub external_dns: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "internalDNS"))]
    pub internal_dns: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "reverseLookup"))]
    pub reverse_lookup: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "mxDomain"))]
    pub mx_domain: Option<String>,
}

/// External and internal answer for one DNS name (CNAME/A, TXT or SRV).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswers {
    #[cfg_attr(feature = "with-serde", serde(rename = "externalDNS"))]
    pub external_dns: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "internalDNS"))]
    pub internal_dns: Option<String>,
}

impl DnsAnswers {
    pub fn new(external_dns: impl Into<String>, internal_dns: impl Into<String>) -> Self {
        Self {
            external_dns: Some(external_dns.into()),
            internal_dns: Some(internal_dns.into()),
        }
    }

    pub fn external_only(external_dns: impl Into<String>) -> Self {
        Self {
            external_dns: Some(external_dns.into()),
            internal_dns: None,
        }
    }
}

/// `_autodiscover._tcp` SRV answers plus the address its target resolved to.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrvTarget {
    #[cfg_attr(feature = "with-serde", serde(rename = "externalDNS"))]
    pub external_dns: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "internalDNS"))]
    pub internal_dns: Option<String>,
    pub ip: Option<String>,
}

/// Answer of a presence-only lookup: the prober reports either a flag or the
/// record text it found.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxtAnswer {
    Flag(bool),
    Record(String),
}

impl TxtAnswer {
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Flag(found) => *found,
            Self::Record(text) => !text.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Record(text) => Some(text.as_str()),
        }
    }
}

/// SPF, DKIM or DMARC lookup. There is no internal counterpart for these.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxtPresence {
    #[cfg_attr(feature = "with-serde", serde(rename = "externalDNS"))]
    pub external_dns: Option<TxtAnswer>,
}

impl TxtPresence {
    pub fn found(found: bool) -> Self {
        Self {
            external_dns: Some(TxtAnswer::Flag(found)),
        }
    }

    pub fn record(text: impl Into<String>) -> Self {
        Self {
            external_dns: Some(TxtAnswer::Record(text.into())),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.external_dns
            .as_ref()
            .map(TxtAnswer::is_usable)
            .unwrap_or(false)
    }
}

/// Result of one probing pass for a hosted mail domain.
///
/// Every block is optional: `None` means the prober returned nothing for that
/// category, which the checks treat differently from a block whose answers are
/// empty.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainDnsSnapshot {
    #[cfg_attr(feature = "with-serde", serde(rename = "externalIp"))]
    pub external_ip: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "localIp"))]
    pub local_ip: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(rename = "mxRecords"))]
    pub mx_records: Option<MxRecords>,
    pub autodiscover: Option<DnsAnswers>,
    pub autoconfig: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "autodiscoverSRV"))]
    pub autodiscover_srv: Option<SrvTarget>,
    /// SPF lookup.
    pub txt: Option<TxtPresence>,
    pub dkim: Option<TxtPresence>,
    pub dmarc: Option<TxtPresence>,
    #[cfg_attr(feature = "with-serde", serde(rename = "caldavTXT"))]
    pub caldav_txt: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "carddavTXT"))]
    pub carddav_txt: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "caldavSRV"))]
    pub caldav_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "caldavsSRV"))]
    pub caldavs_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "carddavSRV"))]
    pub carddav_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "carddavsSRV"))]
    pub carddavs_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "imapSRV"))]
    pub imap_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "imapsSRV"))]
    pub imaps_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "pop3SRV"))]
    pub pop3_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "pop3sSRV"))]
    pub pop3s_srv: Option<DnsAnswers>,
    #[cfg_attr(feature = "with-serde", serde(rename = "submissionSRV"))]
    pub submission_srv: Option<DnsAnswers>,
}
