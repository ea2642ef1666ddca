use thiserror::Error;

/// Reasons a snapshot is rejected before any check runs.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[cfg(feature = "with-serde")]
    #[error("snapshot JSON is malformed: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} is not an IP address: {value:?}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl SnapshotError {
    #[cfg(feature = "with-serde")]
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json { source }
    }

    pub(crate) fn invalid_address(
        field: &'static str,
        value: impl Into<String>,
        source: std::net::AddrParseError,
    ) -> Self {
        Self::InvalidAddress {
            field,
            value: value.into(),
            source,
        }
    }
}
