use thiserror::Error;

use crate::scoring::Score;

/// Errors raised when building grade thresholds.
#[derive(Debug, Error)]
pub enum GradingError {
    #[error("warning threshold {warning_at} must be in ({min_exclusive}, {max}]")]
    WarningOutOfRange {
        warning_at: Score,
        min_exclusive: Score,
        max: Score,
    },
    #[error("good threshold {good_at} must be above {warning_at} and at most {max}")]
    GoodOutOfRange {
        good_at: Score,
        warning_at: Score,
        max: Score,
    },
    #[cfg(feature = "with-serde")]
    #[error("threshold JSON is malformed: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl GradingError {
    #[cfg(feature = "with-serde")]
    pub(crate) fn json(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
