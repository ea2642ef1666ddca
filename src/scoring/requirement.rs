use super::Score;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementLevel {
    Required,
    Recommended,
    Optional,
}

impl RequirementLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

/// Coefficients of the linear scoring formula `base + a·present_a + b·present_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    pub base: Score,
    pub weight_a: Score,
    pub weight_b: Score,
}

impl Coefficients {
    const fn new(base: Score, weight_a: Score, weight_b: Score) -> Self {
        Self {
            base,
            weight_a,
            weight_b,
        }
    }

    pub fn apply(&self, present_a: bool, present_b: bool) -> Score {
        let mut total = self.base;
        if present_a {
            total += self.weight_a;
        }
        if present_b {
            total += self.weight_b;
        }
        total
    }

    /// Score reached when both sides resolved.
    pub fn ceiling(&self) -> Score {
        self.apply(true, true)
    }

    /// Score reached when neither side resolved.
    pub fn floor(&self) -> Score {
        self.base
    }
}

/// Returns the coefficients for a requirement pair, or `None` when the pair is
/// not part of the table. The table is order-sensitive: the stricter level
/// always comes first.
pub fn try_combine(level_a: RequirementLevel, level_b: RequirementLevel) -> Option<Coefficients> {
    use RequirementLevel::{Optional, Recommended, Required};

    let coefficients = match (level_a, level_b) {
        (Required, Required) => Coefficients::new(-10, 55, 55),
        (Required, Recommended) => Coefficients::new(15, 55, 30),
        (Required, Optional) => Coefficients::new(25, 55, 20),
        (Recommended, Recommended) => Coefficients::new(54, 23, 23),
        (Recommended, Optional) => Coefficients::new(54, 33, 13),
        (Optional, Optional) => Coefficients::new(80, 10, 10),
        _ => return None,
    };
    Some(coefficients)
}

/// Returns the coefficients for a requirement pair.
///
/// # Panics
///
/// Panics on a pair outside the table. Evaluators only ever name supported
/// pairs, so hitting this means a check was wired with the wrong levels.
pub fn combine(level_a: RequirementLevel, level_b: RequirementLevel) -> Coefficients {
    match try_combine(level_a, level_b) {
        Some(coefficients) => coefficients,
        None => panic!(
            "unsupported requirement pair ({}, {})",
            level_a.as_str(),
            level_b.as_str()
        ),
    }
}
