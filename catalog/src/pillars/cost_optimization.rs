//! Cost Optimization pillar - commitment discounts, storage, and right-sizing.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Cost Optimization pillar question set.
pub struct CostOptimizationPillar;

impl PillarProvider for CostOptimizationPillar {
    fn pillar(&self) -> Pillar {
        Pillar::CostOptimization
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "COST-RES-001".to_string(),
                pillar: Pillar::CostOptimization,
                category: "Cost-Effective Resources".to_string(),
                text: "How do you use commitment discounts for steady-state usage?".to_string(),
                description: "Predictable baseline usage should be covered by Reserved Instances or Savings Plans instead of paying on-demand rates.".to_string(),
                best_practices: vec![
                    "Cover baseline compute with Savings Plans".to_string(),
                    "Review coverage and utilization monthly".to_string(),
                    "Keep commitments below the observed baseline".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "COST-RES-001-A".to_string(),
                        text: "Baseline covered by commitments, coverage reviewed monthly".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Re-commit as expiring terms approach.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-001-B".to_string(),
                        text: "Some commitments purchased, coverage not tracked".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Check Cost Explorer coverage reports to find the gap.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-001-C".to_string(),
                        text: "Commitments considered but never purchased".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "A one-year no-upfront Savings Plan is a low-risk starting point.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-001-D".to_string(),
                        text: "Everything runs at on-demand rates".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Steady workloads at on-demand rates overpay 30-60%; review commitments.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/cost-optimization.html".to_string(),
                aws_services: vec!["Cost Explorer".to_string(), "Savings Plans".to_string()],
            },
            Question {
                id: "COST-RES-002".to_string(),
                pillar: Pillar::CostOptimization,
                category: "Cost-Effective Resources".to_string(),
                text: "How do you manage the lifecycle of stored data?".to_string(),
                description: "Object data should transition to cheaper storage classes or expire through lifecycle policies instead of accumulating in Standard forever.".to_string(),
                best_practices: vec![
                    "Apply lifecycle rules to every bucket".to_string(),
                    "Use Intelligent-Tiering where access patterns are unknown".to_string(),
                    "Expire incomplete multipart uploads".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "COST-RES-002-A".to_string(),
                        text: "Lifecycle policies on all buckets, tiering matched to access patterns".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Storage Lens can confirm the policies are effective.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-002-B".to_string(),
                        text: "Lifecycle rules on the largest buckets only".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Extend rules to the long tail; small buckets add up.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-002-C".to_string(),
                        text: "Everything in Standard storage, growth unmonitored".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Enable Intelligent-Tiering as a safe default, then add expiry rules.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-002-D".to_string(),
                        text: "Unknown amounts of stale data retained indefinitely".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Inventory bucket sizes and ages before the bill grows further.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/cost-optimization.html".to_string(),
                aws_services: vec!["S3".to_string(), "S3 Storage Lens".to_string()],
            },
            Question {
                id: "COST-RES-003".to_string(),
                pillar: Pillar::CostOptimization,
                category: "Cost-Effective Resources".to_string(),
                text: "How do you right-size resources and remove idle capacity?".to_string(),
                description: "Utilization should be reviewed continuously so oversized instances are shrunk and unused resources are terminated.".to_string(),
                best_practices: vec![
                    "Act on Compute Optimizer right-sizing recommendations".to_string(),
                    "Terminate unattached volumes and idle load balancers".to_string(),
                    "Stop non-production resources outside working hours".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "COST-RES-003-A".to_string(),
                        text: "Continuous right-sizing with automated cleanup of idle resources".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Keep savings visible to the owning teams.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-003-B".to_string(),
                        text: "Periodic manual reviews catch the worst offenders".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Schedule the review monthly and automate the easy cleanups.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-003-C".to_string(),
                        text: "Sizing set at launch and never revisited".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Start with Compute Optimizer's top ten recommendations.".to_string(),
                    },
                    Choice {
                        id: "COST-RES-003-D".to_string(),
                        text: "No visibility into utilization or idle resources".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Enable Compute Optimizer; it is free and needs no agents.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/cost-optimization.html".to_string(),
                aws_services: vec!["Compute Optimizer".to_string(), "Cost Explorer".to_string()],
            },
        ]
    }
}
