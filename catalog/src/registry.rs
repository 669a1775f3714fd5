//! Catalog assembly and lookup.
//!
//! A [`Catalog`] is an ordered, immutable collection of questions with an id
//! index. It is built once (from the built-in pillar providers or from a
//! caller-supplied question list) and shared read-only with the scoring
//! engine.

use std::collections::HashMap;

use crate::fingerprint::fingerprint_questions;
use crate::pillars::builtin_providers;
use crate::types::{Pillar, Question};

/// Error types for catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two questions share the same id
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// A question has no answer choices
    #[error("Question has no choices: {0}")]
    EmptyChoices(String),
}

/// The assembled question catalog.
///
/// Question order is preserved from construction; remediation items derived
/// from equal-priority risks keep this order.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Questions in review order
    questions: Vec<Question>,
    /// Index from question id to position
    index: HashMap<String, usize>,
    /// Content fingerprint for audit purposes
    fingerprint: String,
}

impl Catalog {
    /// Build a catalog from an explicit question list.
    ///
    /// Rejects duplicate ids and questions without choices.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(questions.len());

        for (pos, question) in questions.iter().enumerate() {
            if question.choices.is_empty() {
                return Err(CatalogError::EmptyChoices(question.id.clone()));
            }
            if index.insert(question.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        let fingerprint = fingerprint_questions(&questions);

        Ok(Self {
            questions,
            index,
            fingerprint,
        })
    }

    /// Build the built-in catalog from all pillar providers.
    pub fn builtin() -> Self {
        let questions: Vec<Question> = builtin_providers()
            .iter()
            .flat_map(|provider| provider.questions())
            .collect();

        // Built-in providers are statically defined with unique ids.
        Self::new(questions).expect("built-in catalog is valid")
    }

    /// Get a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&pos| &self.questions[pos])
    }

    /// Whether a question id exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All questions in review order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions belonging to a pillar, in review order.
    pub fn by_pillar(&self, pillar: Pillar) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.pillar == pillar)
    }

    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Deterministic content fingerprint for audit purposes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
