//! Security pillar - identity, detection, infrastructure, and data protection.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Security pillar question set.
pub struct SecurityPillar;

impl PillarProvider for SecurityPillar {
    fn pillar(&self) -> Pillar {
        Pillar::Security
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "SEC-IAM-001".to_string(),
                pillar: Pillar::Security,
                category: "Identity & Access Management".to_string(),
                text: "How do you manage identities and permissions for people and machines?".to_string(),
                description: "IAM policies, roles, and permission boundaries should grant least-privilege access, with human access federated through an identity provider and machine access scoped to workload roles.".to_string(),
                best_practices: vec![
                    "Grant least-privilege access through IAM roles".to_string(),
                    "Federate human access through a central identity provider".to_string(),
                    "Rotate or eliminate long-lived credentials".to_string(),
                    "Review permissions continuously with IAM Access Analyzer".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SEC-IAM-001-A".to_string(),
                        text: "Least-privilege roles everywhere, federated human access, no long-lived access keys, continuous access review".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Keep access review automated and alert on policy drift.".to_string(),
                    },
                    Choice {
                        id: "SEC-IAM-001-B".to_string(),
                        text: "Roles used for most workloads, some shared users or long-lived keys remain".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Inventory remaining IAM users and migrate them to roles or federation.".to_string(),
                    },
                    Choice {
                        id: "SEC-IAM-001-C".to_string(),
                        text: "Broad managed policies attached directly to users, ad-hoc permission grants".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Replace direct user policies with scoped roles and permission boundaries.".to_string(),
                    },
                    Choice {
                        id: "SEC-IAM-001-D".to_string(),
                        text: "Shared root or admin credentials in regular use".to_string(),
                        risk_level: RiskLevel::Critical,
                        points: 0,
                        guidance: "Lock the root account behind MFA immediately and issue individual identities.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/security.html".to_string(),
                aws_services: vec!["IAM".to_string(), "IAM Identity Center".to_string(), "Organizations".to_string()],
            },
            Question {
                id: "SEC-DET-001".to_string(),
                pillar: Pillar::Security,
                category: "Detection".to_string(),
                text: "How do you detect and investigate security events?".to_string(),
                description: "Account activity and workload telemetry should be captured centrally, with managed threat detection evaluating it continuously.".to_string(),
                best_practices: vec![
                    "Enable CloudTrail in all accounts and regions".to_string(),
                    "Enable GuardDuty for managed threat detection".to_string(),
                    "Centralize findings in Security Hub".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SEC-DET-001-A".to_string(),
                        text: "CloudTrail and GuardDuty enabled everywhere, findings centralized and triaged".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Exercise the triage runbook regularly.".to_string(),
                    },
                    Choice {
                        id: "SEC-DET-001-B".to_string(),
                        text: "CloudTrail enabled, but no managed threat detection on top of it".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Enable GuardDuty; it consumes the trails you already have.".to_string(),
                    },
                    Choice {
                        id: "SEC-DET-001-C".to_string(),
                        text: "Partial logging in some accounts, reviewed only after incidents".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Turn on organization-wide trails and route findings to a single account.".to_string(),
                    },
                    Choice {
                        id: "SEC-DET-001-D".to_string(),
                        text: "No audit logging or threat detection in place".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Enable CloudTrail today; without it incidents cannot be investigated.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/security.html".to_string(),
                aws_services: vec!["CloudTrail".to_string(), "GuardDuty".to_string(), "Security Hub".to_string()],
            },
            Question {
                id: "SEC-INFRA-001".to_string(),
                pillar: Pillar::Security,
                category: "Infrastructure Protection".to_string(),
                text: "How do you control network access to your workloads?".to_string(),
                description: "Security groups and network ACLs should allow only required traffic; nothing should be open to 0.0.0.0/0 except intentional public endpoints.".to_string(),
                best_practices: vec![
                    "Define security groups per workload tier with minimal ingress".to_string(),
                    "Avoid 0.0.0.0/0 ingress outside of load balancers".to_string(),
                    "Audit rules automatically with AWS Config".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SEC-INFRA-001-A".to_string(),
                        text: "Tiered security groups with minimal ingress, automated rule auditing".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Keep Config rules enforcing the baseline.".to_string(),
                    },
                    Choice {
                        id: "SEC-INFRA-001-B".to_string(),
                        text: "Scoped rules for production, looser rules in non-production".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Apply the production baseline to every environment.".to_string(),
                    },
                    Choice {
                        id: "SEC-INFRA-001-C".to_string(),
                        text: "Broad internal ranges allowed, rules rarely reviewed".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Review ingress rules per tier and delete unused groups.".to_string(),
                    },
                    Choice {
                        id: "SEC-INFRA-001-D".to_string(),
                        text: "Management or database ports open to the internet".to_string(),
                        risk_level: RiskLevel::Critical,
                        points: 0,
                        guidance: "Close internet-facing admin ports now; use SSM Session Manager instead.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/security.html".to_string(),
                aws_services: vec!["VPC".to_string(), "Config".to_string(), "Systems Manager".to_string()],
            },
            Question {
                id: "SEC-DATA-001".to_string(),
                pillar: Pillar::Security,
                category: "Data Protection".to_string(),
                text: "How do you protect your data at rest?".to_string(),
                description: "All storage (object, block, database) should be encrypted at rest with managed keys, and key usage should be auditable.".to_string(),
                best_practices: vec![
                    "Enable default encryption on all S3 buckets".to_string(),
                    "Encrypt EBS volumes and RDS instances with KMS".to_string(),
                    "Audit key usage through CloudTrail".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SEC-DATA-001-A".to_string(),
                        text: "Encryption at rest enforced everywhere with KMS, key usage audited".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Consider customer-managed keys for sensitive data classes.".to_string(),
                    },
                    Choice {
                        id: "SEC-DATA-001-B".to_string(),
                        text: "Most storage encrypted, a few legacy buckets or volumes remain".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Enumerate unencrypted resources and schedule their migration.".to_string(),
                    },
                    Choice {
                        id: "SEC-DATA-001-C".to_string(),
                        text: "Encryption only where a compliance requirement forced it".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Set account-level default encryption so new resources are covered.".to_string(),
                    },
                    Choice {
                        id: "SEC-DATA-001-D".to_string(),
                        text: "Data stored unencrypted, no data classification".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Classify data and enable default encryption on every store.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/security.html".to_string(),
                aws_services: vec!["KMS".to_string(), "S3".to_string(), "RDS".to_string()],
            },
        ]
    }
}
