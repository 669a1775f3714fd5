//! Catalog content fingerprinting.
//!
//! A catalog fingerprint lets derived scorecards record exactly which
//! question set produced them, and lets callers detect catalog drift between
//! recomputations.

use sha2::{Digest, Sha256};

use crate::types::Question;

/// Compute a hex-encoded SHA-256 fingerprint of an ordered question list.
///
/// The fingerprint covers the serialized question content, so both reordering
/// and editing any question changes it.
pub fn fingerprint_questions(questions: &[Question]) -> String {
    let mut hasher = Sha256::new();

    for question in questions {
        let json = serde_json::to_string(question).unwrap_or_default();
        hasher.update(question.id.as_bytes());
        hasher.update(json.as_bytes());
    }

    hex::encode(hasher.finalize())
}
