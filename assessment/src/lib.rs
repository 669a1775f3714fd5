//! Well-Architected assessment engine.
//!
//! Builds on the [`catalog`] crate to record review answers, score them, and
//! derive remediation work:
//!
//! - **Scoring**: overall, per-pillar, and progress percentages, recomputed
//!   whole into an immutable [`Scorecard`] snapshot
//! - **Action items**: regenerated for HIGH/CRITICAL answers once a review
//!   is substantially complete and still scoring poorly
//! - **Auto-detection**: pre-fills answers from an infrastructure
//!   [`ScanSnapshot`] without touching manual responses
//! - **Reporting**: summaries, risk breakdowns, quick wins, JSON export
//! - **Store**: a thread-safe registry of live assessments
//!
//! # Example
//!
//! ```
//! use assessment::{Assessment, AssessmentStore};
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let store = AssessmentStore::new();
//! let id = store.create("Q3 Review", "Payments API");
//!
//! let scorecard = store
//!     .record_response(&catalog, &id, "SEC-IAM-001", 0, "SSO rollout complete")
//!     .unwrap();
//! assert!(scorecard.overall_score > 0.0);
//! ```

pub mod detect;
pub mod display;
pub mod report;
pub mod scoring;
pub mod store;
pub mod types;

// Re-export main types
pub use detect::{
    detect_answers, DetectedAnswer, DetectionSummary, ResourceInventory, ScanFinding,
    ScanSnapshot, Severity,
};
pub use display::{score_color, score_status, ScoreBand};
pub use report::AssessmentSummary;
pub use scoring::derive_action_items;
pub use store::AssessmentStore;
pub use types::{
    ActionItem, ActionStatus, Assessment, AssessmentError, Response, Result, Scorecard,
};
