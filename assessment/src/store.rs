//! In-memory assessment registry.
//!
//! Holds all live assessments keyed by id. Mutating operations take the
//! entry's shard lock for the whole read-modify-write, so a recompute is
//! never observed half done.

use dashmap::DashMap;

use catalog::Catalog;

use crate::report::AssessmentSummary;
use crate::types::{Assessment, AssessmentError, Result, Scorecard};

use tracing::info;

/// Thread-safe registry of assessments.
#[derive(Debug, Default)]
pub struct AssessmentStore {
    assessments: DashMap<String, Assessment>,
}

impl AssessmentStore {
    pub fn new() -> Self {
        Self {
            assessments: DashMap::new(),
        }
    }

    /// Create and register a new assessment, returning its id.
    pub fn create(&self, name: impl Into<String>, workload_name: impl Into<String>) -> String {
        let assessment = Assessment::new(name, workload_name);
        let id = assessment.id.clone();
        info!(assessment_id = %id, name = %assessment.name, "Assessment created");
        self.assessments.insert(id.clone(), assessment);
        id
    }

    /// Register an existing assessment, replacing any entry with the same id.
    pub fn insert(&self, assessment: Assessment) {
        self.assessments.insert(assessment.id.clone(), assessment);
    }

    /// Fetch a clone of an assessment.
    pub fn get(&self, id: &str) -> Option<Assessment> {
        self.assessments.get(id).map(|entry| entry.clone())
    }

    /// Record an answer on a stored assessment and return the fresh
    /// scorecard.
    pub fn record_response(
        &self,
        catalog: &Catalog,
        id: &str,
        question_id: &str,
        choice_index: usize,
        notes: impl Into<String>,
    ) -> Result<Scorecard> {
        let mut entry = self
            .assessments
            .get_mut(id)
            .ok_or_else(|| AssessmentError::AssessmentNotFound(id.to_string()))?;

        entry.record_response(catalog, question_id, choice_index, notes)?;
        Ok(entry.scorecard.clone())
    }

    /// Remove an assessment.
    pub fn remove(&self, id: &str) -> Result<Assessment> {
        let (_, assessment) = self
            .assessments
            .remove(id)
            .ok_or_else(|| AssessmentError::AssessmentNotFound(id.to_string()))?;
        info!(assessment_id = %id, "Assessment removed");
        Ok(assessment)
    }

    /// Summaries of every stored assessment, in no particular order.
    pub fn list_summaries(&self) -> Vec<AssessmentSummary> {
        self.assessments
            .iter()
            .map(|entry| entry.summary())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }
}
