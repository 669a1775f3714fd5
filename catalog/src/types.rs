//! Core types for the question catalog.
//!
//! These types model the six-pillar Well-Architected question catalog.
//! Questions are immutable once defined; the catalog is loaded once and
//! shared read-only with the scoring engine.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the dashboard frontend.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Maximum points a single question can contribute.
///
/// Every question is worth the same fixed maximum; the denominator of every
/// score is `MAX_QUESTION_POINTS * catalog size`, not just answered questions.
pub const MAX_QUESTION_POINTS: u32 = 100;

/// The six pillars of the Well-Architected Framework.
///
/// This is a closed set: scoring always reports a score for every pillar,
/// even when a pillar has no questions in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    /// Running and monitoring systems to deliver business value
    OperationalExcellence,
    /// Protecting information, systems, and assets
    Security,
    /// Recovering from failures and meeting demand
    Reliability,
    /// Using computing resources efficiently
    PerformanceEfficiency,
    /// Avoiding unneeded costs
    CostOptimization,
    /// Minimizing the environmental impact of workloads
    Sustainability,
}

impl Pillar {
    /// Human-readable pillar name, used as the key in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OperationalExcellence => "Operational Excellence",
            Self::Security => "Security",
            Self::Reliability => "Reliability",
            Self::PerformanceEfficiency => "Performance Efficiency",
            Self::CostOptimization => "Cost Optimization",
            Self::Sustainability => "Sustainability",
        }
    }

    /// Dashboard icon for this pillar.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::OperationalExcellence => "⚙️",
            Self::Security => "🔒",
            Self::Reliability => "🛡️",
            Self::PerformanceEfficiency => "⚡",
            Self::CostOptimization => "💰",
            Self::Sustainability => "🌱",
        }
    }

    /// Brand color for this pillar (hex).
    pub fn color(&self) -> &'static str {
        match self {
            Self::OperationalExcellence => "#FF9900",
            Self::Security => "#EC7211",
            Self::Reliability => "#146EB4",
            Self::PerformanceEfficiency => "#9D5025",
            Self::CostOptimization => "#527FFF",
            Self::Sustainability => "#3F8624",
        }
    }

    /// All pillars in canonical review order.
    pub fn all() -> [Self; 6] {
        [
            Self::OperationalExcellence,
            Self::Security,
            Self::Reliability,
            Self::PerformanceEfficiency,
            Self::CostOptimization,
            Self::Sustainability,
        ]
    }
}

/// Risk classification attached to an answer.
///
/// Ordered by severity: `NONE < LOW < MEDIUM < HIGH < CRITICAL`. Only the
/// top two levels drive remediation action items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// No risk identified
    None,
    /// Informational finding
    Low,
    /// Should be addressed in the normal improvement cycle
    Medium,
    /// Needs a remediation action item
    High,
    /// Needs an immediate remediation action item
    Critical,
}

impl RiskLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Dashboard icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::None => "✅",
            Self::Low => "ℹ️",
            Self::Medium => "⚠️",
            Self::High => "🔴",
            Self::Critical => "🚨",
        }
    }

    /// Display color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            Self::None => "#28a745",
            Self::Low => "#17a2b8",
            Self::Medium => "#ffc107",
            Self::High => "#dc3545",
            Self::Critical => "#8b0000",
        }
    }

    /// Whether this risk level warrants a remediation action item.
    pub fn requires_action(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// Remediation priority rank (1 = most urgent) for actionable levels.
    pub fn priority(&self) -> Option<u8> {
        match self {
            Self::Critical => Some(1),
            Self::High => Some(2),
            _ => None,
        }
    }
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::None
    }
}

/// An answer choice on a question.
///
/// Points are on the fixed 0..=100 scale; the risk level of the selected
/// choice becomes the risk level of the recorded response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Choice {
    /// Unique identifier (question id + suffix)
    pub id: String,
    /// Choice text shown to the reviewer
    pub text: String,
    /// Risk classification implied by this choice
    pub risk_level: RiskLevel,
    /// Points earned (0..=100, higher is better)
    pub points: u32,
    /// Guidance shown after selecting this choice
    pub guidance: String,
}

/// A single catalog question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Question {
    /// Unique identifier (e.g. `SEC-IAM-001`)
    pub id: String,
    /// Pillar this question belongs to
    pub pillar: Pillar,
    /// Category within the pillar (e.g. `Identity & Access Management`)
    pub category: String,
    /// Question text
    pub text: String,
    /// Longer description of what is being assessed
    pub description: String,
    /// Best practices the question checks for
    pub best_practices: Vec<String>,
    /// Answer choices, best to worst
    pub choices: Vec<Choice>,
    /// Link to the relevant framework documentation
    pub help_link: String,
    /// AWS services involved in this practice area
    pub aws_services: Vec<String>,
}

impl Question {
    /// Get a choice by index.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Maximum points this question can contribute.
    pub fn max_points(&self) -> u32 {
        MAX_QUESTION_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_actionable_levels() {
        assert!(RiskLevel::Critical.requires_action());
        assert!(RiskLevel::High.requires_action());
        assert!(!RiskLevel::Medium.requires_action());
        assert!(!RiskLevel::Low.requires_action());
        assert!(!RiskLevel::None.requires_action());

        assert_eq!(RiskLevel::Critical.priority(), Some(1));
        assert_eq!(RiskLevel::High.priority(), Some(2));
        assert_eq!(RiskLevel::Medium.priority(), None);
    }

    #[test]
    fn test_pillar_set() {
        let pillars = Pillar::all();
        assert_eq!(pillars.len(), 6);
        assert_eq!(pillars[0].as_str(), "Operational Excellence");
        assert_eq!(pillars[5].as_str(), "Sustainability");
    }

    #[test]
    fn test_risk_serde_names() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let parsed: RiskLevel = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(parsed, RiskLevel::None);
    }
}
