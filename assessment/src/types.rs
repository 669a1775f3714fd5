//! Core types for assessments.
//!
//! An [`Assessment`] is the aggregate root: recorded responses plus the
//! derived [`Scorecard`] and remediation [`ActionItem`]s. Derived state is
//! always computed whole into a fresh [`Scorecard`] and swapped in, so no
//! reader ever observes a partially updated set of derived fields.
//!
//! With the `typescript` feature enabled, these types can be exported to
//! TypeScript using ts-rs for consistency with the dashboard frontend.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog::{Pillar, Question, RiskLevel, MAX_QUESTION_POINTS};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error types for assessment operations.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// Question id is not in the catalog
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// Choice index is out of range for the question
    #[error("Question {question_id} has no choice at index {index}")]
    UnknownChoice { question_id: String, index: usize },

    /// Points exceed the per-question maximum
    #[error("Points {points} out of range for question {question_id}")]
    PointsOutOfRange { question_id: String, points: u32 },

    /// Assessment id is not in the store
    #[error("Assessment not found: {0}")]
    AssessmentNotFound(String),
}

pub type Result<T> = std::result::Result<T, AssessmentError>;

/// A recorded answer to one question.
///
/// Re-answering replaces the whole record; responses are never partially
/// updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Response {
    /// Question this answers
    pub question_id: String,
    /// Selected choice id, if the answer came from a catalog choice
    pub choice_id: Option<String>,
    /// Points earned (0..=100)
    pub points: u32,
    /// Risk classification of the answer
    pub risk_level: RiskLevel,
    /// Reviewer notes and evidence
    pub notes: String,
    /// Whether the answer was pre-filled from a scan snapshot
    pub auto_detected: bool,
    /// When the answer was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Response {
    /// Create a response with explicit points and risk level.
    pub fn new(
        question_id: impl Into<String>,
        points: u32,
        risk_level: RiskLevel,
    ) -> Result<Self> {
        let question_id = question_id.into();
        if points > MAX_QUESTION_POINTS {
            return Err(AssessmentError::PointsOutOfRange {
                question_id,
                points,
            });
        }

        Ok(Self {
            question_id,
            choice_id: None,
            points,
            risk_level,
            notes: String::new(),
            auto_detected: false,
            recorded_at: Utc::now(),
        })
    }

    /// Create a response by selecting one of a question's choices.
    pub fn from_choice(question: &Question, choice_index: usize) -> Result<Self> {
        let choice = question
            .choice(choice_index)
            .ok_or_else(|| AssessmentError::UnknownChoice {
                question_id: question.id.clone(),
                index: choice_index,
            })?;

        Ok(Self {
            question_id: question.id.clone(),
            choice_id: Some(choice.id.clone()),
            points: choice.points,
            risk_level: choice.risk_level,
            notes: String::new(),
            auto_detected: false,
            recorded_at: Utc::now(),
        })
    }

    /// Attach reviewer notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Mark the response as auto-detected from a scan snapshot.
    pub fn mark_auto_detected(mut self) -> Self {
        self.auto_detected = true;
        self
    }
}

/// Lifecycle status of a remediation action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    /// Newly surfaced, not yet assigned
    Open,
    /// Being worked on
    InProgress,
    /// Remediation finished
    Completed,
    /// Accepted risk, deferred with justification
    Deferred,
}

impl ActionStatus {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Deferred => "Deferred",
        }
    }
}

impl Default for ActionStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// A derived remediation record for a high-severity answered question.
///
/// Action items are regenerated wholesale by the scoring engine; they are
/// never merged with a previous run's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ActionItem {
    /// Synthesized id (`action_<question_id>`)
    pub id: String,
    /// Question that surfaced this item
    pub question_id: String,
    /// Truncated title
    pub title: String,
    /// Question description
    pub description: String,
    /// Risk level of the answer
    pub risk_level: RiskLevel,
    /// Pillar of the question
    pub pillar: Pillar,
    /// Lifecycle status
    pub status: ActionStatus,
    /// Priority rank: 1 for CRITICAL, 2 for HIGH
    pub priority: u8,
    /// Effort estimate (placeholder until triaged)
    pub estimated_effort: String,
    /// Cost estimate (placeholder until triaged)
    pub estimated_cost: String,
    /// When the item was generated
    pub created_at: DateTime<Utc>,
}

/// The derived score snapshot for an assessment.
///
/// Every field is a deterministic function of (catalog, responses) at the
/// moment of computation; the whole struct is replaced atomically on each
/// recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Scorecard {
    /// Overall score, 0-100, one decimal
    pub overall_score: f64,
    /// Fraction of the catalog answered, 0-100, one decimal
    pub progress: f64,
    /// Per-pillar scores; all six pillars present when any response exists
    pub scores: BTreeMap<Pillar, f64>,
    /// Number of answered questions
    pub questions_answered: usize,
    /// Catalog size at computation time
    pub questions_total: usize,
    /// Fingerprint of the catalog that produced this snapshot
    pub catalog_fingerprint: String,
    /// When the snapshot was computed
    pub updated_at: DateTime<Utc>,
}

impl Scorecard {
    /// An all-zero scorecard for a freshly created assessment.
    pub fn empty() -> Self {
        Self {
            overall_score: 0.0,
            progress: 0.0,
            scores: BTreeMap::new(),
            questions_answered: 0,
            questions_total: 0,
            catalog_fingerprint: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Score for a pillar; 0 when the pillar key is absent.
    pub fn score_for(&self, pillar: Pillar) -> f64 {
        self.scores.get(&pillar).copied().unwrap_or(0.0)
    }
}

/// A Well-Architected assessment: responses plus derived state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Assessment {
    /// Unique identifier
    pub id: String,
    /// Assessment name (e.g. "Production Workload Q3 2026")
    pub name: String,
    /// Workload under review
    pub workload_name: String,
    /// Deployment environment label
    pub environment: String,
    /// When the assessment was created
    pub created_at: DateTime<Utc>,
    /// When derived state was last recomputed
    pub updated_at: DateTime<Utc>,
    /// Recorded responses by question id
    pub responses: HashMap<String, Response>,
    /// Derived score snapshot
    pub scorecard: Scorecard,
    /// Derived remediation items
    pub action_items: Vec<ActionItem>,
}

impl Assessment {
    /// Create an empty assessment.
    pub fn new(name: impl Into<String>, workload_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            workload_name: workload_name.into(),
            environment: "Production".to_string(),
            created_at: now,
            updated_at: now,
            responses: HashMap::new(),
            scorecard: Scorecard::empty(),
            action_items: Vec::new(),
        }
    }

    /// Set the environment label.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Current overall score.
    pub fn overall_score(&self) -> f64 {
        self.scorecard.overall_score
    }

    /// Current completion percentage.
    pub fn progress(&self) -> f64 {
        self.scorecard.progress
    }

    /// Number of recorded responses.
    pub fn questions_answered(&self) -> usize {
        self.responses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_points_validated() {
        assert!(Response::new("Q-1", 100, RiskLevel::None).is_ok());
        assert!(matches!(
            Response::new("Q-1", 101, RiskLevel::None),
            Err(AssessmentError::PointsOutOfRange { .. })
        ));
    }

    #[test]
    fn test_new_assessment_is_zeroed() {
        let assessment = Assessment::new("Test", "Shop");
        assert_eq!(assessment.overall_score(), 0.0);
        assert_eq!(assessment.progress(), 0.0);
        assert!(assessment.scorecard.scores.is_empty());
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_action_status_labels() {
        assert_eq!(ActionStatus::default(), ActionStatus::Open);
        assert_eq!(ActionStatus::Open.as_str(), "Open");
        assert_eq!(ActionStatus::InProgress.as_str(), "In Progress");
    }
}
