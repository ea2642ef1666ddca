//! Resolved DNS data for one domain, as produced by the DNS check endpoint
//! (`GET /api/v1/domains/{id}/dnsCheck`).
//!
//! The snapshot is plain data. [`DomainDnsSnapshot::from_json`] is the only
//! place it is parsed and validated; the checks read it without mutation.

mod error;
mod types;

pub use error::SnapshotError;
pub use types::{DnsAnswers, DomainDnsSnapshot, MxRecords, SrvTarget, TxtAnswer, TxtPresence};

use std::net::IpAddr;

impl DomainDnsSnapshot {
    /// Parses and validates a snapshot from the JSON body of a DNS check.
    #[cfg(feature = "with-serde")]
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(input).map_err(SnapshotError::json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the address fields. Empty strings are accepted and read as
    /// unresolved; surrounding blanks are rejected since answers are compared
    /// verbatim.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        check_address("externalIp", self.external_ip.as_deref())?;
        check_address("localIp", self.local_ip.as_deref())?;
        if let Some(srv) = &self.autodiscover_srv {
            check_address("autodiscoverSRV.ip", srv.ip.as_deref())?;
        }
        Ok(())
    }

    /// The external address, when one was observed.
    pub fn external_address(&self) -> Option<&str> {
        resolved(&self.external_ip)
    }

    /// The internal address, when one was observed.
    pub fn local_address(&self) -> Option<&str> {
        resolved(&self.local_ip)
    }

    /// True when `answer` is one of the server's own addresses.
    pub(crate) fn is_own_address(&self, answer: &Option<String>) -> bool {
        let Some(answer) = resolved(answer) else {
            return false;
        };
        [self.local_address(), self.external_address()]
            .into_iter()
            .flatten()
            .any(|address| address == answer)
    }

    /// True when `answer` is the server's external address.
    pub(crate) fn is_external_address(&self, answer: &Option<String>) -> bool {
        match (resolved(answer), self.external_address()) {
            (Some(answer), Some(external)) => answer == external,
            _ => false,
        }
    }
}

/// Returns the value when it is present and non-empty.
pub(crate) fn resolved(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

pub(crate) fn is_resolved(value: &Option<String>) -> bool {
    resolved(value).is_some()
}

fn check_address(field: &'static str, value: Option<&str>) -> Result<(), SnapshotError> {
    let Some(value) = value.filter(|text| !text.is_empty()) else {
        return Ok(());
    };
    value
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|err| SnapshotError::invalid_address(field, value, err))
}

#[cfg(test)]
pub(crate) mod fixtures;
