use super::Severity;

/// Maps grades to display colors. Grading never depends on it.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub error: String,
    pub bad: String,
    pub warning: String,
    pub good: String,
}

impl Palette {
    pub fn new(
        error: impl Into<String>,
        bad: impl Into<String>,
        warning: impl Into<String>,
        good: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            bad: bad.into(),
            warning: warning.into(),
            good: good.into(),
        }
    }

    pub fn color(&self, severity: Severity) -> &str {
        match severity {
            Severity::Error => &self.error,
            Severity::Bad => &self.bad,
            Severity::Warning => &self.warning,
            Severity::Good => &self.good,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("#d32f2f", "#f57c00", "#ffa726", "#66bb6a")
    }
}
