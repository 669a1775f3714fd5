//! Reporting views over an assessment.
//!
//! These are read-only projections of the derived state: a flat summary for
//! export, risk breakdowns, and filtered action-item views used by the
//! remediation dashboard.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog::{Pillar, RiskLevel};

use crate::types::{ActionItem, ActionStatus, Assessment};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Effort phrases that qualify an item as a quick win.
const QUICK_WIN_EFFORTS: [&str; 4] = ["minutes", "1 hour", "2 hours", "half day"];
/// Cap on the quick-win list.
const QUICK_WIN_LIMIT: usize = 10;

/// Flat summary of an assessment for export and listing views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AssessmentSummary {
    pub id: String,
    pub name: String,
    pub workload_name: String,
    pub environment: String,
    pub overall_score: f64,
    pub progress: f64,
    pub pillar_scores: BTreeMap<Pillar, f64>,
    pub high_risk_count: usize,
    pub critical_risk_count: usize,
    pub quick_wins: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Build the flat export summary.
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            workload_name: self.workload_name.clone(),
            environment: self.environment.clone(),
            overall_score: self.scorecard.overall_score,
            progress: self.scorecard.progress,
            pillar_scores: self.scorecard.scores.clone(),
            high_risk_count: self.items_by_risk(RiskLevel::High).len(),
            critical_risk_count: self.items_by_risk(RiskLevel::Critical).len(),
            quick_wins: self.quick_wins().len(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Action items at one risk level, in catalog order.
    pub fn items_by_risk(&self, level: RiskLevel) -> Vec<&ActionItem> {
        self.action_items
            .iter()
            .filter(|item| item.risk_level == level)
            .collect()
    }

    /// Count of recorded answers at each risk level.
    pub fn risk_summary(&self) -> BTreeMap<RiskLevel, usize> {
        let mut counts = BTreeMap::new();
        for response in self.responses.values() {
            *counts.entry(response.risk_level).or_insert(0) += 1;
        }
        counts
    }

    /// Action items ordered by priority, critical first.
    ///
    /// The sort is stable, so items at equal priority keep catalog order.
    pub fn high_priority_items(&self) -> Vec<&ActionItem> {
        let mut items: Vec<_> = self
            .action_items
            .iter()
            .filter(|item| item.risk_level.requires_action())
            .collect();
        items.sort_by_key(|item| item.priority);
        items
    }

    /// Up to ten open items whose effort estimate reads as small.
    ///
    /// Matches HIGH and MEDIUM risk items that are not completed and whose
    /// effort mentions one of the quick phrases ("minutes", "1 hour",
    /// "2 hours", "half day").
    pub fn quick_wins(&self) -> Vec<&ActionItem> {
        self.action_items
            .iter()
            .filter(|item| {
                let effort = item.estimated_effort.to_lowercase();
                QUICK_WIN_EFFORTS.iter().any(|phrase| effort.contains(phrase))
                    && matches!(item.risk_level, RiskLevel::High | RiskLevel::Medium)
                    && item.status != ActionStatus::Completed
            })
            .take(QUICK_WIN_LIMIT)
            .collect()
    }

    /// Pretty-printed JSON export of the full assessment.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn item(id: &str, risk: RiskLevel, effort: &str, status: ActionStatus) -> ActionItem {
        ActionItem {
            id: format!("action_{}", id),
            question_id: id.to_string(),
            title: format!("Address {}", id),
            description: String::new(),
            risk_level: risk,
            pillar: Pillar::Security,
            status,
            priority: risk.priority().unwrap_or(3),
            estimated_effort: effort.to_string(),
            estimated_cost: "TBD".to_string(),
            created_at: Utc::now(),
        }
    }

    fn assessment_with_items(items: Vec<ActionItem>) -> Assessment {
        let mut assessment = Assessment::new("Test", "Shop");
        assessment.action_items = items;
        assessment
    }

    #[test]
    fn test_high_priority_items_sorted_critical_first() {
        let assessment = assessment_with_items(vec![
            item("Q-1", RiskLevel::High, "TBD", ActionStatus::Open),
            item("Q-2", RiskLevel::Critical, "TBD", ActionStatus::Open),
            item("Q-3", RiskLevel::High, "TBD", ActionStatus::Open),
        ]);

        let ordered = assessment.high_priority_items();
        assert_eq!(ordered.len(), 3);
        assert_eq!(ordered[0].question_id, "Q-2");
        // Stable sort keeps Q-1 before Q-3
        assert_eq!(ordered[1].question_id, "Q-1");
        assert_eq!(ordered[2].question_id, "Q-3");
    }

    #[test]
    fn test_quick_wins_filter() {
        let assessment = assessment_with_items(vec![
            item("Q-1", RiskLevel::High, "2 hours", ActionStatus::Open),
            item("Q-2", RiskLevel::Medium, "30 minutes", ActionStatus::InProgress),
            // Completed items are excluded even when cheap
            item("Q-3", RiskLevel::High, "1 hour", ActionStatus::Completed),
            // Critical items are never quick wins
            item("Q-4", RiskLevel::Critical, "1 hour", ActionStatus::Open),
            // Large efforts are excluded
            item("Q-5", RiskLevel::High, "2 weeks", ActionStatus::Open),
        ]);

        let wins = assessment.quick_wins();
        assert_eq!(wins.len(), 2);
        assert_eq!(wins[0].question_id, "Q-1");
        assert_eq!(wins[1].question_id, "Q-2");
    }

    #[test]
    fn test_quick_wins_capped_at_ten() {
        let items = (0..15)
            .map(|i| item(&format!("Q-{}", i), RiskLevel::High, "1 hour", ActionStatus::Open))
            .collect();
        let assessment = assessment_with_items(items);
        assert_eq!(assessment.quick_wins().len(), 10);
    }

    #[test]
    fn test_risk_summary_counts_responses() {
        let catalog = Catalog::builtin();
        let mut assessment = Assessment::new("Test", "Shop");
        assessment
            .record_response(&catalog, "SEC-IAM-001", 0, "")
            .unwrap();
        assessment
            .record_response(&catalog, "SEC-DET-001", 3, "")
            .unwrap();

        let summary = assessment.risk_summary();
        assert_eq!(summary.values().sum::<usize>(), 2);
        assert_eq!(summary.get(&RiskLevel::None), Some(&1));
    }

    #[test]
    fn test_summary_reflects_scorecard() {
        let catalog = Catalog::builtin();
        let mut assessment = Assessment::new("Q3 Review", "Shop").with_environment("Staging");
        assessment
            .record_response(&catalog, "SEC-IAM-001", 0, "")
            .unwrap();

        let summary = assessment.summary();
        assert_eq!(summary.environment, "Staging");
        assert_eq!(summary.overall_score, assessment.overall_score());
        assert_eq!(summary.progress, assessment.progress());
        assert_eq!(summary.pillar_scores.len(), 6);
    }

    #[test]
    fn test_export_json_round_trips() {
        let assessment = Assessment::new("Test", "Shop");
        let json = assessment.export_json().unwrap();
        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, assessment.id);
        assert_eq!(back.name, assessment.name);
    }
}
