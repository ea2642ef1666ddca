use crate::scoring::{OPTIONAL_PAIR_FLOOR, PERFECT_SCORE, REQUIRED_PAIR_FLOOR, Score};

use super::GradingError;

/// Health grade of one check, worst first.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Bad,
    Warning,
    Good,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Bad => "bad",
            Self::Warning => "warning",
            Self::Good => "good",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score boundaries for the three graded bands.
///
/// A score at or above `good_at` is [`Severity::Good`], at or above
/// `warning_at` is [`Severity::Warning`], anything lower is [`Severity::Bad`].
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(try_from = "RawThresholds"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeThresholds {
    good_at: Score,
    warning_at: Score,
}

impl GradeThresholds {
    pub const DEFAULT_GOOD_AT: Score = 90;
    pub const DEFAULT_WARNING_AT: Score = 60;

    /// Builds thresholds, rejecting any pair that would grade a perfect result
    /// below Good or grade a fully missing required pair as high as a fully
    /// missing optional pair.
    pub fn new(good_at: Score, warning_at: Score) -> Result<Self, GradingError> {
        let thresholds = Self {
            good_at,
            warning_at,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn good_at(&self) -> Score {
        self.good_at
    }

    pub fn warning_at(&self) -> Score {
        self.warning_at
    }

    pub fn with_good_at(self, good_at: Score) -> Result<Self, GradingError> {
        Self::new(good_at, self.warning_at)
    }

    pub fn with_warning_at(self, warning_at: Score) -> Result<Self, GradingError> {
        Self::new(self.good_at, warning_at)
    }

    /// Parses thresholds from JSON such as `{"good_at": 95, "warning_at": 70}`.
    #[cfg(feature = "with-serde")]
    pub fn from_json(input: &str) -> Result<Self, GradingError> {
        serde_json::from_str(input).map_err(GradingError::json)
    }

    pub fn validate(&self) -> Result<(), GradingError> {
        if self.warning_at <= REQUIRED_PAIR_FLOOR || self.warning_at > OPTIONAL_PAIR_FLOOR {
            return Err(GradingError::WarningOutOfRange {
                warning_at: self.warning_at,
                min_exclusive: REQUIRED_PAIR_FLOOR,
                max: OPTIONAL_PAIR_FLOOR,
            });
        }
        if self.good_at <= self.warning_at || self.good_at > PERFECT_SCORE {
            return Err(GradingError::GoodOutOfRange {
                good_at: self.good_at,
                warning_at: self.warning_at,
                max: PERFECT_SCORE,
            });
        }
        Ok(())
    }

    pub fn grade_score(&self, score: Score) -> Severity {
        if score >= self.good_at {
            Severity::Good
        } else if score >= self.warning_at {
            Severity::Warning
        } else {
            Severity::Bad
        }
    }
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            good_at: Self::DEFAULT_GOOD_AT,
            warning_at: Self::DEFAULT_WARNING_AT,
        }
    }
}

// Deserialized thresholds go through `GradeThresholds::new`.
#[cfg(feature = "with-serde")]
#[derive(serde::Deserialize)]
struct RawThresholds {
    good_at: Score,
    warning_at: Score,
}

#[cfg(feature = "with-serde")]
impl TryFrom<RawThresholds> for GradeThresholds {
    type Error = GradingError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.good_at, raw.warning_at)
    }
}
