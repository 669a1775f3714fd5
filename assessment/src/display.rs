//! Score presentation bands.
//!
//! Maps numeric scores to the status labels and hex colors used by the
//! dashboard frontend. Band edges are inclusive at the lower bound, so a
//! score of exactly 80 is EXCELLENT and exactly 60 is GOOD.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Presentation band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 up to 80
    Good,
    /// 40 up to 60
    NeedsImprovement,
    /// Below 40
    Critical,
}

impl ScoreBand {
    /// Classify a score. Total over all reals; anything below 40, including
    /// negative inputs, lands in the lowest band.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::NeedsImprovement
        } else {
            Self::Critical
        }
    }

    /// Status label shown next to the score.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::NeedsImprovement => "NEEDS IMPROVEMENT",
            Self::Critical => "CRITICAL",
        }
    }

    /// Hex color for gauges and badges.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#28a745",
            Self::Good => "#ffc107",
            Self::NeedsImprovement => "#fd7e14",
            Self::Critical => "#dc3545",
        }
    }
}

/// Status label for a score.
pub fn score_status(score: f64) -> &'static str {
    ScoreBand::from_score(score).status()
}

/// Hex color for a score.
pub fn score_color(score: f64) -> &'static str {
    ScoreBand::from_score(score).color()
}
