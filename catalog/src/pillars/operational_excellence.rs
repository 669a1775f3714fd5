//! Operational Excellence pillar - preparation, operation, and observability.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Operational Excellence pillar question set.
pub struct OperationalExcellencePillar;

impl PillarProvider for OperationalExcellencePillar {
    fn pillar(&self) -> Pillar {
        Pillar::OperationalExcellence
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "OPS-PREP-002".to_string(),
                pillar: Pillar::OperationalExcellence,
                category: "Prepare".to_string(),
                text: "How do you capture an audit trail of changes to your environment?".to_string(),
                description: "Every control-plane change should be logged centrally so operational events can be reconstructed and attributed.".to_string(),
                best_practices: vec![
                    "Enable CloudTrail across all accounts and regions".to_string(),
                    "Deliver trails to a dedicated, access-controlled log account".to_string(),
                    "Alert on changes to critical resources".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "OPS-PREP-002-A".to_string(),
                        text: "Organization-wide trails delivered to a central log account with change alerting".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Validate log integrity checks periodically.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-002-B".to_string(),
                        text: "Trails enabled per account, no central aggregation".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Aggregate trails into one account to simplify investigation.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-002-C".to_string(),
                        text: "Logging enabled only in production".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Extend trails to every account; incidents often start in non-production.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-002-D".to_string(),
                        text: "No audit trail of environment changes".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Enable CloudTrail before making further changes.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/operational-excellence.html".to_string(),
                aws_services: vec!["CloudTrail".to_string(), "CloudWatch".to_string()],
            },
            Question {
                id: "OPS-PREP-003".to_string(),
                pillar: Pillar::OperationalExcellence,
                category: "Prepare".to_string(),
                text: "How do you manage and patch your compute fleet?".to_string(),
                description: "Instances should be enrolled in a fleet manager so patching, inventory, and remote access are automated rather than ad-hoc.".to_string(),
                best_practices: vec![
                    "Enroll all instances in Systems Manager".to_string(),
                    "Automate patch baselines and maintenance windows".to_string(),
                    "Replace SSH access with Session Manager".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "OPS-PREP-003-A".to_string(),
                        text: "Entire fleet SSM-managed with automated patch baselines".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Track patch compliance as an operational metric.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-003-B".to_string(),
                        text: "Most instances managed, patching partially automated".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Close the enrollment gap; unmanaged hosts are the ones that drift.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-003-C".to_string(),
                        text: "Manual patching on a best-effort schedule".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Define patch baselines and pilot automated maintenance windows.".to_string(),
                    },
                    Choice {
                        id: "OPS-PREP-003-D".to_string(),
                        text: "No inventory of instances or their patch state".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Enroll instances in Systems Manager to get inventory first.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/operational-excellence.html".to_string(),
                aws_services: vec!["Systems Manager".to_string(), "EC2".to_string()],
            },
            Question {
                id: "OPS-OPER-001".to_string(),
                pillar: Pillar::OperationalExcellence,
                category: "Operate".to_string(),
                text: "How do you monitor the health of your workloads?".to_string(),
                description: "Workload health should be observable through metrics and alarms that page before customers notice, not after.".to_string(),
                best_practices: vec![
                    "Define alarms for every customer-facing service indicator".to_string(),
                    "Alarm on symptoms (latency, errors) not only causes (CPU)".to_string(),
                    "Review alarm coverage after every incident".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "OPS-OPER-001-A".to_string(),
                        text: "Broad alarm coverage on service indicators with on-call routing".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Prune noisy alarms so pages stay actionable.".to_string(),
                    },
                    Choice {
                        id: "OPS-OPER-001-B".to_string(),
                        text: "Alarms on key infrastructure metrics, gaps on service indicators".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Add latency and error-rate alarms for each customer-facing endpoint.".to_string(),
                    },
                    Choice {
                        id: "OPS-OPER-001-C".to_string(),
                        text: "A handful of alarms, dashboards checked manually".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Decide what should page a human and create those alarms first.".to_string(),
                    },
                    Choice {
                        id: "OPS-OPER-001-D".to_string(),
                        text: "Outages discovered by customers".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Start with one availability alarm per workload and grow from there.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/operational-excellence.html".to_string(),
                aws_services: vec!["CloudWatch".to_string(), "SNS".to_string()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_excellence_pillar() {
        let pillar = OperationalExcellencePillar;
        assert_eq!(pillar.pillar(), Pillar::OperationalExcellence);
        assert_eq!(pillar.questions().len(), 3);
    }
}
