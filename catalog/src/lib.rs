//! Well-Architected question catalog.
//!
//! This crate defines the six-pillar question catalog consumed by the
//! scoring engine:
//!
//! - **Operational Excellence**: preparation, operation, observability
//! - **Security**: identity, detection, infrastructure, data protection
//! - **Reliability**: architecture, scaling, failure management
//! - **Performance Efficiency**: selection, content delivery
//! - **Cost Optimization**: commitments, storage lifecycle, right-sizing
//! - **Sustainability**: region selection, data retention
//!
//! # Key Components
//!
//! - [`Catalog`]: ordered, immutable question collection with an id index
//! - [`PillarProvider`]: trait supplying each pillar's built-in questions
//! - [`fingerprint_questions`]: deterministic content hash for audit
//!
//! # Example
//!
//! ```
//! use catalog::{Catalog, Pillar};
//!
//! let catalog = Catalog::builtin();
//! let security = catalog.by_pillar(Pillar::Security).count();
//! assert!(security > 0);
//! ```

pub mod fingerprint;
pub mod pillars;
pub mod registry;
pub mod types;

// Re-export main types
pub use fingerprint::fingerprint_questions;
pub use pillars::*;
pub use registry::{Catalog, CatalogError};
pub use types::*;
