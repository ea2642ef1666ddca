use crate::checks::{Category, Outcome};
use crate::grading::Severity;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub category: Category,
    pub outcome: Outcome,
    pub severity: Severity,
}

impl CheckResult {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Graded checks of one snapshot, one entry per [`Category`] in display order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    results: Vec<CheckResult>,
}

impl HealthReport {
    pub(crate) fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.category == category)
    }

    pub fn severity(&self, category: Category) -> Option<Severity> {
        self.get(category).map(|r| r.severity)
    }

    /// `(label, severity)` pairs in display order.
    pub fn severities(&self) -> impl Iterator<Item = (&'static str, Severity)> + '_ {
        self.results.iter().map(|r| (r.label(), r.severity))
    }

    /// Lowest grade in the report, `None` for an empty report.
    pub fn worst(&self) -> Option<Severity> {
        self.results.iter().map(|r| r.severity).min()
    }

    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Error)
    }
}

impl<'a> IntoIterator for &'a HealthReport {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
