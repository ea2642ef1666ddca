use thiserror::Error;

/// Errors raised when building recommended records for a domain.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
}

impl AdviceError {
    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }
}
