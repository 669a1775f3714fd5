//! Performance Efficiency pillar - selection and content delivery.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Performance Efficiency pillar question set.
pub struct PerformanceEfficiencyPillar;

impl PillarProvider for PerformanceEfficiencyPillar {
    fn pillar(&self) -> Pillar {
        Pillar::PerformanceEfficiency
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "PERF-SEL-001".to_string(),
                pillar: Pillar::PerformanceEfficiency,
                category: "Selection".to_string(),
                text: "How do you select compute types for your workloads?".to_string(),
                description: "Instance families should be current generation and matched to the workload profile, revisited as new families become available.".to_string(),
                best_practices: vec![
                    "Use current-generation instance families".to_string(),
                    "Match instance family to workload profile (compute, memory, burst)".to_string(),
                    "Re-evaluate selection when new generations launch".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "PERF-SEL-001-A".to_string(),
                        text: "Current-generation families everywhere, selection reviewed per workload".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Compute Optimizer can confirm family fit over time.".to_string(),
                    },
                    Choice {
                        id: "PERF-SEL-001-B".to_string(),
                        text: "Mostly current generation, a few older families linger".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Migrate remaining previous-generation instances at next maintenance.".to_string(),
                    },
                    Choice {
                        id: "PERF-SEL-001-C".to_string(),
                        text: "One default instance type reused for everything".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Profile the top workloads and pick families to match.".to_string(),
                    },
                    Choice {
                        id: "PERF-SEL-001-D".to_string(),
                        text: "Instance types chosen years ago and never revisited".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Newer generations are faster and cheaper; plan a migration.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/performance-efficiency.html".to_string(),
                aws_services: vec!["EC2".to_string(), "Compute Optimizer".to_string()],
            },
            Question {
                id: "PERF-TRADE-001".to_string(),
                pillar: Pillar::PerformanceEfficiency,
                category: "Tradeoffs".to_string(),
                text: "How do you bring content closer to your users?".to_string(),
                description: "Static and cacheable content should be served from edge locations so latency does not scale with distance to the origin.".to_string(),
                best_practices: vec![
                    "Serve static assets through CloudFront".to_string(),
                    "Set cache lifetimes deliberately per content class".to_string(),
                    "Measure cache hit ratio and origin offload".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "PERF-TRADE-001-A".to_string(),
                        text: "CDN in front of all cacheable content with tuned cache policies".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Watch hit ratio after each release.".to_string(),
                    },
                    Choice {
                        id: "PERF-TRADE-001-B".to_string(),
                        text: "CDN for some content, defaults left untuned".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Review cache policies; default TTLs rarely match content lifetimes.".to_string(),
                    },
                    Choice {
                        id: "PERF-TRADE-001-C".to_string(),
                        text: "All traffic served directly from the origin region".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Front the busiest static paths with a distribution first.".to_string(),
                    },
                    Choice {
                        id: "PERF-TRADE-001-D".to_string(),
                        text: "Latency complaints from distant users, no edge strategy".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "A CDN is the cheapest latency win available; start there.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/performance-efficiency.html".to_string(),
                aws_services: vec!["CloudFront".to_string(), "S3".to_string()],
            },
        ]
    }
}
