//! Assessment scoring and action-item derivation.
//!
//! The engine is pure and synchronous: it reads (catalog, responses) and
//! produces a fresh [`Scorecard`] plus remediation items, which the caller
//! swaps into the assessment in one step. Callers must serialize concurrent
//! recomputes on the same assessment; the engine itself holds no shared
//! state.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use catalog::{Catalog, Pillar, MAX_QUESTION_POINTS};

use crate::types::{ActionItem, ActionStatus, Assessment, Response, Result, Scorecard};

/// Action items regenerate only once an assessment is substantially complete
/// (strictly more than half answered)...
const ACTION_ITEM_PROGRESS_FLOOR: f64 = 50.0;
/// ...and still scoring below this ceiling.
const ACTION_ITEM_SCORE_CEILING: f64 = 80.0;

/// Title length for synthesized action items.
const ACTION_TITLE_CHARS: usize = 50;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Scorecard {
    /// Compute a fresh scorecard from the catalog and response mapping.
    ///
    /// An empty response mapping yields an all-zero scorecard with an empty
    /// pillar map; otherwise every pillar is present as a key, scoring 0 when
    /// it has no catalog questions. The denominator is always the full
    /// catalog size, so a partially answered assessment cannot reach a
    /// perfect score.
    pub fn compute(catalog: &Catalog, responses: &HashMap<String, Response>) -> Self {
        if responses.is_empty() {
            return Self {
                overall_score: 0.0,
                progress: 0.0,
                scores: BTreeMap::new(),
                questions_answered: 0,
                questions_total: catalog.len(),
                catalog_fingerprint: catalog.fingerprint().to_string(),
                updated_at: chrono::Utc::now(),
            };
        }

        let total_points: u64 = catalog
            .questions()
            .iter()
            .filter_map(|question| responses.get(&question.id))
            .map(|response| response.points as u64)
            .sum();
        let max_points = MAX_QUESTION_POINTS as u64 * catalog.len() as u64;

        let overall_score = if max_points > 0 {
            round1(total_points as f64 / max_points as f64 * 100.0)
        } else {
            0.0
        };

        let mut scores = BTreeMap::new();
        for pillar in Pillar::all() {
            let pillar_questions: Vec<_> = catalog.by_pillar(pillar).collect();

            let score = if pillar_questions.is_empty() {
                0.0
            } else {
                let pillar_points: u64 = pillar_questions
                    .iter()
                    .filter_map(|question| responses.get(&question.id))
                    .map(|response| response.points as u64)
                    .sum();
                let pillar_max = MAX_QUESTION_POINTS as u64 * pillar_questions.len() as u64;
                round1(pillar_points as f64 / pillar_max as f64 * 100.0)
            };

            scores.insert(pillar, score);
        }

        // Progress counts distinct answered ids against the full catalog,
        // independent of the points inside the responses.
        let progress = if catalog.is_empty() {
            0.0
        } else {
            round1(responses.len() as f64 / catalog.len() as f64 * 100.0)
        };

        Self {
            overall_score,
            progress,
            scores,
            questions_answered: responses.len(),
            questions_total: catalog.len(),
            catalog_fingerprint: catalog.fingerprint().to_string(),
            updated_at: chrono::Utc::now(),
        }
    }

    /// Whether this snapshot warrants regenerating remediation items.
    ///
    /// Both inequalities are strict: exactly 50% progress or exactly 80
    /// overall does not trigger.
    pub fn triggers_action_items(&self) -> bool {
        self.progress > ACTION_ITEM_PROGRESS_FLOOR
            && self.overall_score < ACTION_ITEM_SCORE_CEILING
    }
}

/// Derive remediation items for every answered question at HIGH or CRITICAL
/// risk, in catalog order.
///
/// CRITICAL maps to priority 1 and HIGH to priority 2; equal priorities keep
/// the catalog's natural order. LOW/MEDIUM/NONE answers and unanswered
/// questions never produce items.
pub fn derive_action_items(
    catalog: &Catalog,
    responses: &HashMap<String, Response>,
) -> Vec<ActionItem> {
    let mut items = Vec::new();

    for question in catalog.questions() {
        let Some(response) = responses.get(&question.id) else {
            continue;
        };
        let Some(priority) = response.risk_level.priority() else {
            continue;
        };

        items.push(ActionItem {
            id: format!("action_{}", question.id),
            question_id: question.id.clone(),
            title: action_title(&question.text),
            description: question.description.clone(),
            risk_level: response.risk_level,
            pillar: question.pillar,
            status: ActionStatus::Open,
            priority,
            estimated_effort: "TBD".to_string(),
            estimated_cost: "TBD".to_string(),
            created_at: chrono::Utc::now(),
        });
    }

    items
}

fn action_title(question_text: &str) -> String {
    let head: String = question_text.chars().take(ACTION_TITLE_CHARS).collect();
    if question_text.chars().count() > ACTION_TITLE_CHARS {
        format!("Address {}...", head)
    } else {
        format!("Address {}", head)
    }
}

impl Assessment {
    /// Recompute all derived state from the current responses.
    ///
    /// Builds a fresh scorecard and remediation list, then swaps both in
    /// together. When the regeneration condition does not hold the
    /// remediation list is cleared rather than left stale, keeping every
    /// derived field a pure function of (catalog, responses).
    pub fn recompute(&mut self, catalog: &Catalog) {
        let scorecard = Scorecard::compute(catalog, &self.responses);

        let action_items = if scorecard.triggers_action_items() {
            derive_action_items(catalog, &self.responses)
        } else {
            Vec::new()
        };

        debug!(
            assessment_id = %self.id,
            overall_score = scorecard.overall_score,
            progress = scorecard.progress,
            action_items = action_items.len(),
            "Scorecard recomputed"
        );

        self.updated_at = scorecard.updated_at;
        self.scorecard = scorecard;
        self.action_items = action_items;
    }

    /// Record an answer by choice selection and recompute derived state.
    ///
    /// Replaces any previous response for the question wholesale.
    pub fn record_response(
        &mut self,
        catalog: &Catalog,
        question_id: &str,
        choice_index: usize,
        notes: impl Into<String>,
    ) -> Result<()> {
        let question = catalog
            .get(question_id)
            .ok_or_else(|| crate::types::AssessmentError::UnknownQuestion(question_id.to_string()))?;

        let response = Response::from_choice(question, choice_index)?.with_notes(notes);
        self.responses.insert(question.id.clone(), response);
        self.recompute(catalog);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Choice, Question, RiskLevel};

    fn make_question(id: &str, pillar: Pillar) -> Question {
        Question {
            id: id.to_string(),
            pillar,
            category: "Test".to_string(),
            text: format!("Test question {}", id),
            description: "Test description".to_string(),
            best_practices: vec![],
            choices: vec![
                Choice {
                    id: format!("{}-A", id),
                    text: "Fully implemented".to_string(),
                    risk_level: RiskLevel::None,
                    points: 100,
                    guidance: String::new(),
                },
                Choice {
                    id: format!("{}-B", id),
                    text: "Partially implemented".to_string(),
                    risk_level: RiskLevel::Medium,
                    points: 40,
                    guidance: String::new(),
                },
                Choice {
                    id: format!("{}-C", id),
                    text: "Not implemented".to_string(),
                    risk_level: RiskLevel::High,
                    points: 0,
                    guidance: String::new(),
                },
            ],
            help_link: String::new(),
            aws_services: vec![],
        }
    }

    fn answer(assessment: &mut Assessment, id: &str, points: u32, risk: RiskLevel) {
        assessment
            .responses
            .insert(id.to_string(), Response::new(id, points, risk).unwrap());
    }

    #[test]
    fn test_empty_responses_yield_zeroes() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();
        let mut assessment = Assessment::new("Test", "Shop");

        assessment.recompute(&catalog);

        assert_eq!(assessment.overall_score(), 0.0);
        assert_eq!(assessment.progress(), 0.0);
        assert!(assessment.scorecard.scores.is_empty());
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_partial_answers_use_full_catalog_denominator() {
        // Two Reliability questions answered at 100 and 50 points, one
        // Security question unanswered.
        let catalog = Catalog::new(vec![
            make_question("REL-1", Pillar::Reliability),
            make_question("REL-2", Pillar::Reliability),
            make_question("SEC-1", Pillar::Security),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "REL-1", 100, RiskLevel::None);
        answer(&mut assessment, "REL-2", 50, RiskLevel::Medium);
        assessment.recompute(&catalog);

        assert_eq!(assessment.overall_score(), 50.0); // 150 / 300
        assert_eq!(assessment.progress(), 66.7); // 2 / 3
        assert_eq!(assessment.scorecard.score_for(Pillar::Reliability), 75.0);
        assert_eq!(assessment.scorecard.score_for(Pillar::Security), 0.0);
        // All six pillars are present as keys
        assert_eq!(assessment.scorecard.scores.len(), 6);
        assert_eq!(assessment.scorecard.questions_answered, 2);
        assert_eq!(assessment.scorecard.questions_total, 3);
    }

    #[test]
    fn test_progress_ignores_point_values() {
        let catalog = Catalog::new(vec![
            make_question("Q-1", Pillar::Security),
            make_question("Q-2", Pillar::Security),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 0, RiskLevel::None);
        assessment.recompute(&catalog);

        assert_eq!(assessment.progress(), 50.0);
        assert_eq!(assessment.overall_score(), 0.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();
        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 100, RiskLevel::None);
        assessment.recompute(&catalog);

        assert_eq!(assessment.overall_score(), 100.0);
        assert_eq!(assessment.progress(), 100.0);
    }

    #[test]
    fn test_action_items_generated_above_thresholds() {
        let catalog = Catalog::new(vec![
            make_question("Q-1", Pillar::Security),
            make_question("Q-2", Pillar::Reliability),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 0, RiskLevel::Critical);
        answer(&mut assessment, "Q-2", 0, RiskLevel::High);
        assessment.recompute(&catalog);

        // progress 100 > 50, overall 0 < 80
        assert_eq!(assessment.action_items.len(), 2);
        assert_eq!(assessment.action_items[0].priority, 1);
        assert_eq!(assessment.action_items[0].question_id, "Q-1");
        assert_eq!(assessment.action_items[1].priority, 2);
        assert_eq!(assessment.action_items[0].status, ActionStatus::Open);
        assert_eq!(assessment.action_items[0].id, "action_Q-1");
    }

    #[test]
    fn test_boundary_progress_does_not_trigger() {
        let catalog = Catalog::new(vec![
            make_question("Q-1", Pillar::Security),
            make_question("Q-2", Pillar::Security),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 0, RiskLevel::High);
        assessment.recompute(&catalog);

        // progress is exactly 50: strict inequality, no items
        assert_eq!(assessment.progress(), 50.0);
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_boundary_score_does_not_trigger() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 80, RiskLevel::High);
        assessment.recompute(&catalog);

        // overall is exactly 80: strict inequality, no items
        assert_eq!(assessment.overall_score(), 80.0);
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_low_risk_answers_never_produce_items() {
        let catalog = Catalog::new(vec![
            make_question("Q-1", Pillar::Security),
            make_question("Q-2", Pillar::Security),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 10, RiskLevel::Medium);
        answer(&mut assessment, "Q-2", 10, RiskLevel::Low);
        assessment.recompute(&catalog);

        assert!(assessment.scorecard.triggers_action_items());
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_stale_items_are_cleared_when_condition_lapses() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();
        let mut assessment = Assessment::new("Test", "Shop");

        answer(&mut assessment, "Q-1", 0, RiskLevel::High);
        assessment.recompute(&catalog);
        assert_eq!(assessment.action_items.len(), 1);

        // Re-answering well lifts the score above the ceiling; the old item
        // must not stick around.
        answer(&mut assessment, "Q-1", 100, RiskLevel::None);
        assessment.recompute(&catalog);
        assert!(assessment.action_items.is_empty());
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let catalog = Catalog::new(vec![
            make_question("Q-1", Pillar::Security),
            make_question("Q-2", Pillar::CostOptimization),
        ])
        .unwrap();

        let mut assessment = Assessment::new("Test", "Shop");
        answer(&mut assessment, "Q-1", 70, RiskLevel::Low);
        assessment.recompute(&catalog);
        let first = assessment.scorecard.clone();

        assessment.recompute(&catalog);
        let second = assessment.scorecard.clone();

        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.progress, second.progress);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.questions_answered, second.questions_answered);
        assert_eq!(first.catalog_fingerprint, second.catalog_fingerprint);
    }

    #[test]
    fn test_record_response_replaces_whole_record() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();
        let mut assessment = Assessment::new("Test", "Shop");

        assessment
            .record_response(&catalog, "Q-1", 2, "not started")
            .unwrap();
        assert_eq!(assessment.overall_score(), 0.0);
        assert_eq!(assessment.responses["Q-1"].risk_level, RiskLevel::High);

        assessment
            .record_response(&catalog, "Q-1", 0, "finished rollout")
            .unwrap();
        assert_eq!(assessment.overall_score(), 100.0);
        assert_eq!(assessment.responses["Q-1"].risk_level, RiskLevel::None);
        assert_eq!(assessment.responses["Q-1"].notes, "finished rollout");
        assert_eq!(assessment.responses.len(), 1);
    }

    #[test]
    fn test_record_response_validates_inputs() {
        let catalog = Catalog::new(vec![make_question("Q-1", Pillar::Security)]).unwrap();
        let mut assessment = Assessment::new("Test", "Shop");

        assert!(assessment
            .record_response(&catalog, "NOPE", 0, "")
            .is_err());
        assert!(assessment
            .record_response(&catalog, "Q-1", 99, "")
            .is_err());
    }

    #[test]
    fn test_action_title_truncation() {
        let short = action_title("Short question?");
        assert_eq!(short, "Address Short question?");

        let long_text = "How do you manage identities and permissions for people and machines across accounts?";
        let long = action_title(long_text);
        assert!(long.starts_with("Address "));
        assert!(long.ends_with("..."));
        assert_eq!(long.chars().count(), "Address ".chars().count() + 50 + 3);
    }
}
