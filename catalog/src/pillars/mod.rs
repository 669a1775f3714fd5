//! Per-pillar question definitions.
//!
//! Each pillar provides its built-in question set. The catalog assembles
//! these in canonical review order; custom catalogs can bypass the providers
//! entirely and construct questions directly.

pub mod cost_optimization;
pub mod operational_excellence;
pub mod performance_efficiency;
pub mod reliability;
pub mod security;
pub mod sustainability;

pub use cost_optimization::CostOptimizationPillar;
pub use operational_excellence::OperationalExcellencePillar;
pub use performance_efficiency::PerformanceEfficiencyPillar;
pub use reliability::ReliabilityPillar;
pub use security::SecurityPillar;
pub use sustainability::SustainabilityPillar;

use crate::types::{Pillar, Question};

/// Trait for pillar-specific question set generation.
pub trait PillarProvider: Send + Sync {
    /// Get the pillar this provider handles
    fn pillar(&self) -> Pillar;

    /// Get the built-in questions for this pillar, in review order
    fn questions(&self) -> Vec<Question>;
}

/// All built-in providers in canonical review order.
pub fn builtin_providers() -> Vec<Box<dyn PillarProvider>> {
    vec![
        Box::new(OperationalExcellencePillar),
        Box::new(SecurityPillar),
        Box::new(ReliabilityPillar),
        Box::new(PerformanceEfficiencyPillar),
        Box::new(CostOptimizationPillar),
        Box::new(SustainabilityPillar),
    ]
}
