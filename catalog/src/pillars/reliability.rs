//! Reliability pillar - architecture, scaling, and failure management.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Reliability pillar question set.
pub struct ReliabilityPillar;

impl PillarProvider for ReliabilityPillar {
    fn pillar(&self) -> Pillar {
        Pillar::Reliability
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "REL-ARCH-001".to_string(),
                pillar: Pillar::Reliability,
                category: "Workload Architecture".to_string(),
                text: "How do you design your databases to withstand Availability Zone failure?".to_string(),
                description: "Stateful tiers should be deployed Multi-AZ with automatic failover so a zone loss degrades capacity, not availability.".to_string(),
                best_practices: vec![
                    "Deploy RDS instances Multi-AZ".to_string(),
                    "Test failover regularly, not only during incidents".to_string(),
                    "Keep read replicas in distinct zones".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "REL-ARCH-001-A".to_string(),
                        text: "All databases Multi-AZ with regularly exercised failover".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Record observed failover times in your runbook.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-001-B".to_string(),
                        text: "Production databases Multi-AZ, failover untested".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Schedule a failover exercise; untested failover is assumed broken.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-001-C".to_string(),
                        text: "Single-AZ databases with automated backups".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Enable Multi-AZ on the databases behind customer-facing paths first.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-001-D".to_string(),
                        text: "Single-AZ databases, no tested recovery path".to_string(),
                        risk_level: RiskLevel::Critical,
                        points: 0,
                        guidance: "A single zone event takes the workload down; enable Multi-AZ now.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/reliability.html".to_string(),
                aws_services: vec!["RDS".to_string(), "Aurora".to_string()],
            },
            Question {
                id: "REL-ARCH-002".to_string(),
                pillar: Pillar::Reliability,
                category: "Workload Architecture".to_string(),
                text: "How does your compute tier adapt to changes in demand?".to_string(),
                description: "Stateless tiers should scale automatically across zones based on demand signals rather than being sized for peak by hand.".to_string(),
                best_practices: vec![
                    "Run stateless tiers in Auto Scaling groups across zones".to_string(),
                    "Scale on demand signals such as request count or queue depth".to_string(),
                    "Set minimum capacity to survive a zone loss".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "REL-ARCH-002-A".to_string(),
                        text: "Auto Scaling groups across zones driven by demand signals".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Verify scale-in protects long-running work.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-002-B".to_string(),
                        text: "Auto Scaling configured but thresholds rarely revisited".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Review scaling policies against recent traffic patterns.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-002-C".to_string(),
                        text: "Fixed fleet sized for estimated peak".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Move one tier into an Auto Scaling group as a pilot.".to_string(),
                    },
                    Choice {
                        id: "REL-ARCH-002-D".to_string(),
                        text: "Manual instance management, capacity changes need a person".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Demand spikes will outrun manual response; automate scaling.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/reliability.html".to_string(),
                aws_services: vec!["EC2 Auto Scaling".to_string(), "ELB".to_string()],
            },
            Question {
                id: "REL-FAIL-004".to_string(),
                pillar: Pillar::Reliability,
                category: "Failure Management".to_string(),
                text: "How do you back up your data and verify it can be restored?".to_string(),
                description: "Backups should be automated, centrally managed, and restore-tested; an unrestorable backup is not a backup.".to_string(),
                best_practices: vec![
                    "Centralize backup plans in AWS Backup".to_string(),
                    "Test restores on a schedule".to_string(),
                    "Keep copies outside the source account or region".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "REL-FAIL-004-A".to_string(),
                        text: "Centralized backup plans with scheduled restore testing and cross-account copies".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Track restore time against your recovery objectives.".to_string(),
                    },
                    Choice {
                        id: "REL-FAIL-004-B".to_string(),
                        text: "Automated backups per service, restores never exercised".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Run one restore test per critical data store this quarter.".to_string(),
                    },
                    Choice {
                        id: "REL-FAIL-004-C".to_string(),
                        text: "Ad-hoc snapshots taken before risky changes".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Define backup plans with retention instead of relying on habit.".to_string(),
                    },
                    Choice {
                        id: "REL-FAIL-004-D".to_string(),
                        text: "No backups beyond what services do by default".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Create an AWS Backup plan covering every stateful resource.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/reliability.html".to_string(),
                aws_services: vec!["AWS Backup".to_string(), "S3".to_string(), "RDS".to_string()],
            },
        ]
    }
}
