//! Requirement algebra and the scoring primitive shared by every check.
//!
//! A check compares two DNS answers (usually the external and the internal
//! view). Each side carries a [`RequirementLevel`]; the pair selects a set of
//! [`Coefficients`] and [`score`] sums them according to which sides resolved.

mod requirement;

pub use requirement::{Coefficients, RequirementLevel, combine, try_combine};

/// Numeric health score. Higher is healthier, `100` is a perfect result.
pub type Score = i32;

/// Highest score any supported requirement pair can reach.
pub const PERFECT_SCORE: Score = 100;

/// Score of a `(Required, Required)` comparison where neither side resolved.
pub const REQUIRED_PAIR_FLOOR: Score = -10;

/// Score of an `(Optional, Optional)` comparison where neither side resolved.
pub const OPTIONAL_PAIR_FLOOR: Score = 80;

/// Weighs two presence flags under their requirement levels.
///
/// The flags already encode both presence and correctness of the underlying
/// answers; this function never looks at the values themselves. The result is
/// not clamped.
///
/// # Panics
///
/// Panics when `(level_a, level_b)` is not one of the supported pairs, see
/// [`combine`].
pub fn score(
    present_a: bool,
    present_b: bool,
    level_a: RequirementLevel,
    level_b: RequirementLevel,
) -> Score {
    combine(level_a, level_b).apply(present_a, present_b)
}
