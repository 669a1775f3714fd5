//! Answer auto-detection from infrastructure scan snapshots.
//!
//! A [`ScanSnapshot`] carries findings and a resource inventory collected by
//! an external account scan. [`detect_answers`] maps the snapshot onto
//! proposed answers with a confidence percentage and evidence strings, and
//! [`Assessment::apply_detections`] fills unanswered questions from those
//! proposals. Manual answers are never overwritten.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use catalog::Catalog;

use crate::types::{Assessment, Response};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Confidence at or above which a detection counts as high confidence.
const HIGH_CONFIDENCE: u8 = 85;
/// Confidence at or above which a detection counts as medium confidence.
const MEDIUM_CONFIDENCE: u8 = 70;

/// Regions with a high share of carbon-free energy.
const LOW_CARBON_REGIONS: [&str; 4] = ["us-west-2", "eu-west-1", "eu-north-1", "ca-central-1"];

/// Current-generation EC2 instance families.
const CURRENT_GEN_FAMILIES: [&str; 9] = ["t3", "t4", "m5", "m6", "c5", "c6", "r5", "r6", "a1"];

/// Severity of a scan finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// HIGH and CRITICAL findings block a clean detection.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// One finding from an account scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScanFinding {
    /// Service the finding belongs to (e.g. "iam", "s3")
    pub service: String,
    /// Finding severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

/// S3 bucket facts relevant to detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct S3Bucket {
    pub name: String,
    #[serde(default)]
    pub encryption_enabled: bool,
    #[serde(default)]
    pub lifecycle_rules: bool,
}

/// EC2 instance facts relevant to detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Ec2Instance {
    pub instance_id: String,
    pub instance_type: String,
    #[serde(default)]
    pub state: String,
}

impl Ec2Instance {
    fn is_current_generation(&self) -> bool {
        CURRENT_GEN_FAMILIES
            .iter()
            .any(|family| self.instance_type.starts_with(family))
    }
}

/// RDS instance facts relevant to detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct RdsInstance {
    pub db_identifier: String,
    #[serde(default)]
    pub multi_az: bool,
    #[serde(default)]
    pub encrypted: bool,
}

/// Security group ingress summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct SecurityGroup {
    pub group_id: String,
    /// CIDR ranges with inbound access
    #[serde(default)]
    pub ingress_cidrs: Vec<String>,
}

impl SecurityGroup {
    fn is_overly_permissive(&self) -> bool {
        self.ingress_cidrs.iter().any(|cidr| cidr == "0.0.0.0/0")
    }
}

/// CloudWatch alarm state summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CloudWatchAlarm {
    pub alarm_name: String,
    pub state: AlarmState,
}

/// CloudWatch alarm state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmState {
    Ok,
    Alarm,
    InsufficientData,
}

impl CloudWatchAlarm {
    fn is_active(&self) -> bool {
        self.state != AlarmState::InsufficientData
    }
}

/// Auto Scaling group configuration summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AutoScalingGroup {
    pub name: String,
    #[serde(default)]
    pub desired_capacity: u32,
    #[serde(default)]
    pub min_size: u32,
    #[serde(default)]
    pub max_size: u32,
}

/// Inventory of scanned resources. Every field defaults to empty so partial
/// scans deserialize cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ResourceInventory {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub s3_buckets: Vec<S3Bucket>,
    #[serde(default)]
    pub ec2_instances: Vec<Ec2Instance>,
    #[serde(default)]
    pub rds_instances: Vec<RdsInstance>,
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
    #[serde(default)]
    pub cloudwatch_alarms: Vec<CloudWatchAlarm>,
    #[serde(default)]
    pub autoscaling_groups: Vec<AutoScalingGroup>,
    #[serde(default)]
    pub guardduty_enabled: bool,
    #[serde(default)]
    pub cloudtrail_enabled: bool,
    #[serde(default)]
    pub backup_vaults: Vec<String>,
    #[serde(default)]
    pub backup_plans: Vec<String>,
    #[serde(default)]
    pub cloudfront_distributions: Vec<String>,
    #[serde(default)]
    pub reserved_instances: Vec<String>,
    #[serde(default)]
    pub savings_plans: Vec<String>,
    #[serde(default)]
    pub ssm_managed_instances: Vec<String>,
}

/// A point-in-time account scan: findings plus resource inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScanSnapshot {
    #[serde(default)]
    pub findings: Vec<ScanFinding>,
    #[serde(default)]
    pub resources: ResourceInventory,
}

/// A proposed answer derived from scan data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DetectedAnswer {
    /// Question the proposal answers
    pub question_id: String,
    /// Index into the question's choice list
    pub choice_index: usize,
    /// Confidence percentage, 0-100
    pub confidence: u8,
    /// Findings supporting the proposal
    pub evidence: Vec<String>,
}

impl DetectedAnswer {
    fn new(question_id: &str, choice_index: usize, confidence: u8, evidence: Vec<String>) -> Self {
        Self {
            question_id: question_id.to_string(),
            choice_index,
            confidence,
            evidence,
        }
    }
}

/// Run every detection rule against a snapshot.
///
/// Each rule proposes at most one answer for one question; a question never
/// gets two proposals. Rules that lack the resources they inspect stay
/// silent rather than guessing.
pub fn detect_answers(snapshot: &ScanSnapshot) -> Vec<DetectedAnswer> {
    let mut detected = Vec::new();

    detect_security(snapshot, &mut detected);
    detect_reliability(snapshot, &mut detected);
    detect_operations(snapshot, &mut detected);
    detect_performance(snapshot, &mut detected);
    detect_cost(snapshot, &mut detected);
    detect_sustainability(snapshot, &mut detected);

    debug!(detections = detected.len(), "Scan detection finished");
    detected
}

fn detect_security(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // SEC-IAM-001: identity and access management posture
    let iam_findings: Vec<_> = snapshot
        .findings
        .iter()
        .filter(|f| f.service.to_lowercase().contains("iam"))
        .collect();
    if !iam_findings.is_empty() {
        let high_risk = iam_findings
            .iter()
            .filter(|f| f.severity.is_high_risk())
            .count();
        if high_risk == 0 {
            out.push(DetectedAnswer::new(
                "SEC-IAM-001",
                0,
                90,
                vec![
                    "IAM policies follow least privilege".to_string(),
                    "No high-risk findings".to_string(),
                ],
            ));
        } else if high_risk < 3 {
            out.push(DetectedAnswer::new(
                "SEC-IAM-001",
                1,
                85,
                vec![format!("Found {} IAM issues to address", high_risk)],
            ));
        }
    }

    // SEC-DATA-001: encryption at rest
    if !resources.s3_buckets.is_empty() {
        let total = resources.s3_buckets.len();
        let unencrypted = resources
            .s3_buckets
            .iter()
            .filter(|b| !b.encryption_enabled)
            .count();
        if unencrypted == 0 {
            out.push(DetectedAnswer::new(
                "SEC-DATA-001",
                0,
                95,
                vec![format!("All {} S3 buckets encrypted", total)],
            ));
        } else if (unencrypted as f64) < total as f64 * 0.2 {
            out.push(DetectedAnswer::new(
                "SEC-DATA-001",
                1,
                80,
                vec![format!("{}/{} buckets need encryption", unencrypted, total)],
            ));
        }
    }

    // SEC-INFRA-001: network access controls
    if !resources.security_groups.is_empty() {
        let total = resources.security_groups.len();
        let open = resources
            .security_groups
            .iter()
            .filter(|sg| sg.is_overly_permissive())
            .count();
        if open == 0 {
            out.push(DetectedAnswer::new(
                "SEC-INFRA-001",
                0,
                90,
                vec![format!("All {} security groups properly configured", total)],
            ));
        } else if (open as f64) < total as f64 * 0.1 {
            out.push(DetectedAnswer::new(
                "SEC-INFRA-001",
                1,
                75,
                vec![format!("{} security groups need tightening", open)],
            ));
        }
    }

    // SEC-DET-001: threat detection
    if resources.guardduty_enabled {
        out.push(DetectedAnswer::new(
            "SEC-DET-001",
            0,
            100,
            vec!["GuardDuty enabled for threat detection".to_string()],
        ));
    } else if resources.cloudtrail_enabled {
        out.push(DetectedAnswer::new(
            "SEC-DET-001",
            1,
            85,
            vec!["CloudTrail enabled but GuardDuty not enabled".to_string()],
        ));
    }
}

fn detect_reliability(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // REL-ARCH-001: database high availability
    if !resources.rds_instances.is_empty() {
        let total = resources.rds_instances.len();
        let multi_az = resources
            .rds_instances
            .iter()
            .filter(|db| db.multi_az)
            .count();
        if multi_az == total {
            out.push(DetectedAnswer::new(
                "REL-ARCH-001",
                0,
                95,
                vec![format!("All {} databases deployed Multi-AZ", total)],
            ));
        } else if multi_az > 0 {
            out.push(DetectedAnswer::new(
                "REL-ARCH-001",
                1,
                80,
                vec![format!("{}/{} databases Multi-AZ", multi_az, total)],
            ));
        }
    }

    // REL-FAIL-004: backup strategy
    if !resources.backup_vaults.is_empty() || !resources.backup_plans.is_empty() {
        out.push(DetectedAnswer::new(
            "REL-FAIL-004",
            0,
            90,
            vec![format!(
                "AWS Backup configured with {} vaults",
                resources.backup_vaults.len()
            )],
        ));
    }

    // REL-ARCH-002: auto scaling
    if !resources.autoscaling_groups.is_empty() {
        let total = resources.autoscaling_groups.len();
        let configured = resources
            .autoscaling_groups
            .iter()
            .filter(|asg| asg.desired_capacity > 0)
            .count();
        if configured == total {
            out.push(DetectedAnswer::new(
                "REL-ARCH-002",
                0,
                85,
                vec![format!("{} Auto Scaling groups configured", total)],
            ));
        }
    }
}

fn detect_operations(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // OPS-OPER-001: monitoring coverage
    if !resources.cloudwatch_alarms.is_empty() {
        let active = resources
            .cloudwatch_alarms
            .iter()
            .filter(|a| a.is_active())
            .count();
        if active >= 20 {
            out.push(DetectedAnswer::new(
                "OPS-OPER-001",
                0,
                85,
                vec![format!("{} CloudWatch alarms configured", active)],
            ));
        } else if active >= 5 {
            out.push(DetectedAnswer::new(
                "OPS-OPER-001",
                1,
                75,
                vec![format!("{} alarms - consider adding more", active)],
            ));
        }
    }

    // OPS-PREP-002: audit logging
    if resources.cloudtrail_enabled {
        out.push(DetectedAnswer::new(
            "OPS-PREP-002",
            0,
            95,
            vec!["CloudTrail enabled for audit logging".to_string()],
        ));
    }

    // OPS-PREP-003: fleet automation coverage
    if !resources.ssm_managed_instances.is_empty() && !resources.ec2_instances.is_empty() {
        let coverage = resources.ssm_managed_instances.len() as f64
            / resources.ec2_instances.len() as f64
            * 100.0;
        if coverage >= 90.0 {
            out.push(DetectedAnswer::new(
                "OPS-PREP-003",
                0,
                90,
                vec![format!(
                    "{:.0}% instances managed by Systems Manager",
                    coverage
                )],
            ));
        } else if coverage >= 50.0 {
            out.push(DetectedAnswer::new(
                "OPS-PREP-003",
                1,
                75,
                vec![format!("{:.0}% coverage - increase SSM adoption", coverage)],
            ));
        }
    }
}

fn detect_performance(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // PERF-SEL-001: compute selection
    if !resources.ec2_instances.is_empty() {
        let total = resources.ec2_instances.len();
        let current_gen = resources
            .ec2_instances
            .iter()
            .filter(|i| i.is_current_generation())
            .count();
        if current_gen == total {
            out.push(DetectedAnswer::new(
                "PERF-SEL-001",
                0,
                90,
                vec![format!(
                    "All {} instances using current generation",
                    total
                )],
            ));
        } else if current_gen as f64 > total as f64 * 0.7 {
            out.push(DetectedAnswer::new(
                "PERF-SEL-001",
                1,
                80,
                vec![format!("{}/{} using current gen", current_gen, total)],
            ));
        }
    }

    // PERF-TRADE-001: content delivery
    if !resources.cloudfront_distributions.is_empty() {
        out.push(DetectedAnswer::new(
            "PERF-TRADE-001",
            0,
            85,
            vec![format!(
                "CloudFront CDN configured with {} distributions",
                resources.cloudfront_distributions.len()
            )],
        ));
    }
}

fn detect_cost(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // COST-RES-001: commitment discounts
    let ri_count = resources.reserved_instances.len();
    let sp_count = resources.savings_plans.len();
    if ri_count + sp_count > 0 {
        out.push(DetectedAnswer::new(
            "COST-RES-001",
            0,
            90,
            vec![format!("{} RIs, {} Savings Plans active", ri_count, sp_count)],
        ));
    }

    // COST-RES-002: storage lifecycle
    if !resources.s3_buckets.is_empty() {
        let total = resources.s3_buckets.len();
        let lifecycle = resources
            .s3_buckets
            .iter()
            .filter(|b| b.lifecycle_rules)
            .count();
        if lifecycle as f64 > total as f64 * 0.8 {
            out.push(DetectedAnswer::new(
                "COST-RES-002",
                0,
                85,
                vec![format!("{}/{} buckets use lifecycle policies", lifecycle, total)],
            ));
        }
    }

    // COST-RES-003: right-sizing
    let cost_findings = snapshot
        .findings
        .iter()
        .filter(|f| {
            let text = format!("{} {}", f.service, f.message).to_lowercase();
            text.contains("cost") || text.contains("unused")
        })
        .count();
    if cost_findings == 0 {
        out.push(DetectedAnswer::new(
            "COST-RES-003",
            0,
            80,
            vec!["No unused or underutilized resources detected".to_string()],
        ));
    }
}

fn detect_sustainability(snapshot: &ScanSnapshot, out: &mut Vec<DetectedAnswer>) {
    let resources = &snapshot.resources;

    // SUS-REG-001: low-carbon region selection
    if !resources.regions.is_empty() {
        let using_low_carbon = resources
            .regions
            .iter()
            .any(|r| LOW_CARBON_REGIONS.contains(&r.as_str()));
        if using_low_carbon {
            out.push(DetectedAnswer::new(
                "SUS-REG-001",
                0,
                85,
                vec![format!(
                    "Using low-carbon regions: {}",
                    resources.regions.join(", ")
                )],
            ));
        }
    }
}

/// Aggregate statistics for a detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct DetectionSummary {
    /// Total proposed answers
    pub total_detected: usize,
    /// Proposals at confidence >= 85
    pub high_confidence: usize,
    /// Proposals at confidence 70..85
    pub medium_confidence: usize,
    /// Proposals below confidence 70
    pub low_confidence: usize,
    /// Share of the catalog covered, 0-100
    pub coverage_percentage: f64,
}

impl DetectionSummary {
    /// Summarize a detection run against a catalog.
    pub fn from_detections(detections: &[DetectedAnswer], catalog: &Catalog) -> Self {
        let high = detections
            .iter()
            .filter(|d| d.confidence >= HIGH_CONFIDENCE)
            .count();
        let medium = detections
            .iter()
            .filter(|d| d.confidence >= MEDIUM_CONFIDENCE && d.confidence < HIGH_CONFIDENCE)
            .count();
        let low = detections
            .iter()
            .filter(|d| d.confidence < MEDIUM_CONFIDENCE)
            .count();

        let coverage_percentage = if catalog.is_empty() {
            0.0
        } else {
            (detections.len() as f64 / catalog.len() as f64 * 1000.0).round() / 10.0
        };

        Self {
            total_detected: detections.len(),
            high_confidence: high,
            medium_confidence: medium,
            low_confidence: low,
            coverage_percentage,
        }
    }
}

impl Assessment {
    /// Fill unanswered questions from a detection run, then recompute.
    ///
    /// Questions with an existing response keep it, whether it was recorded
    /// manually or by a previous detection run. Proposals naming unknown
    /// questions or out-of-range choices are skipped with a warning rather
    /// than aborting the run. Returns the number of responses applied.
    pub fn apply_detections(&mut self, catalog: &Catalog, detections: &[DetectedAnswer]) -> usize {
        let mut applied = 0;

        for detection in detections {
            if self.responses.contains_key(&detection.question_id) {
                continue;
            }
            let Some(question) = catalog.get(&detection.question_id) else {
                warn!(
                    question_id = %detection.question_id,
                    "Detection targets a question outside the catalog, skipping"
                );
                continue;
            };

            let response = match Response::from_choice(question, detection.choice_index) {
                Ok(response) => response,
                Err(error) => {
                    warn!(
                        question_id = %detection.question_id,
                        choice_index = detection.choice_index,
                        %error,
                        "Detection proposed an invalid choice, skipping"
                    );
                    continue;
                }
            };

            let mut notes = String::from("Auto-detected from infrastructure scan\n");
            for line in &detection.evidence {
                notes.push_str("- ");
                notes.push_str(line);
                notes.push('\n');
            }

            self.responses.insert(
                question.id.clone(),
                response.with_notes(notes.trim_end()).mark_auto_detected(),
            );
            applied += 1;
        }

        if applied > 0 {
            self.recompute(catalog);
        }

        debug!(
            assessment_id = %self.id,
            applied,
            proposed = detections.len(),
            "Applied scan detections"
        );
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Snapshot of a reasonably healthy two-instance workload.
    fn demo_snapshot() -> ScanSnapshot {
        ScanSnapshot {
            findings: vec![
                ScanFinding {
                    service: "iam".to_string(),
                    severity: Severity::Low,
                    message: "IAM policy follows best practices".to_string(),
                },
                ScanFinding {
                    service: "s3".to_string(),
                    severity: Severity::Medium,
                    message: "2 buckets without encryption".to_string(),
                },
            ],
            resources: ResourceInventory {
                regions: vec!["us-east-1".to_string(), "us-west-2".to_string()],
                s3_buckets: vec![
                    S3Bucket {
                        name: "prod-data".to_string(),
                        encryption_enabled: true,
                        lifecycle_rules: true,
                    },
                    S3Bucket {
                        name: "dev-data".to_string(),
                        encryption_enabled: false,
                        lifecycle_rules: false,
                    },
                ],
                ec2_instances: vec![
                    Ec2Instance {
                        instance_id: "i-123".to_string(),
                        instance_type: "t3.medium".to_string(),
                        state: "running".to_string(),
                    },
                    Ec2Instance {
                        instance_id: "i-456".to_string(),
                        instance_type: "m5.large".to_string(),
                        state: "running".to_string(),
                    },
                ],
                rds_instances: vec![RdsInstance {
                    db_identifier: "prod-db".to_string(),
                    multi_az: true,
                    encrypted: true,
                }],
                security_groups: vec![
                    SecurityGroup {
                        group_id: "sg-123".to_string(),
                        ingress_cidrs: vec![],
                    },
                    SecurityGroup {
                        group_id: "sg-456".to_string(),
                        ingress_cidrs: vec!["10.0.0.0/8".to_string()],
                    },
                ],
                cloudwatch_alarms: vec![
                    CloudWatchAlarm {
                        alarm_name: "cpu-high".to_string(),
                        state: AlarmState::Ok,
                    },
                    CloudWatchAlarm {
                        alarm_name: "disk-full".to_string(),
                        state: AlarmState::Ok,
                    },
                ],
                autoscaling_groups: vec![AutoScalingGroup {
                    name: "web-asg".to_string(),
                    desired_capacity: 3,
                    min_size: 2,
                    max_size: 10,
                }],
                guardduty_enabled: true,
                cloudtrail_enabled: true,
                backup_vaults: vec!["default".to_string()],
                backup_plans: vec!["daily-backup".to_string()],
                cloudfront_distributions: vec!["E123".to_string()],
                reserved_instances: vec!["ri-123".to_string()],
                savings_plans: vec![],
                ssm_managed_instances: vec!["i-123".to_string(), "i-456".to_string()],
            },
        }
    }

    fn find<'a>(detections: &'a [DetectedAnswer], id: &str) -> Option<&'a DetectedAnswer> {
        detections.iter().find(|d| d.question_id == id)
    }

    #[test]
    fn test_empty_snapshot_proposes_only_cost_cleanliness() {
        // With no findings at all the right-sizing rule still fires; every
        // resource-gated rule stays silent.
        let detections = detect_answers(&ScanSnapshot::default());
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].question_id, "COST-RES-003");
    }

    #[test]
    fn test_demo_snapshot_detections() {
        let detections = detect_answers(&demo_snapshot());

        let clean_iam = find(&detections, "SEC-IAM-001").unwrap();
        assert_eq!(clean_iam.choice_index, 0);
        assert_eq!(clean_iam.confidence, 90);

        // 1 of 2 buckets unencrypted is not under the 20% bar
        assert!(find(&detections, "SEC-DATA-001").is_none());

        let guardduty = find(&detections, "SEC-DET-001").unwrap();
        assert_eq!(guardduty.confidence, 100);

        let multi_az = find(&detections, "REL-ARCH-001").unwrap();
        assert_eq!(multi_az.choice_index, 0);

        // Only 2 active alarms, below the minimum of 5
        assert!(find(&detections, "OPS-OPER-001").is_none());

        let ssm = find(&detections, "OPS-PREP-003").unwrap();
        assert_eq!(ssm.choice_index, 0);
        assert_eq!(ssm.evidence, vec!["100% instances managed by Systems Manager"]);

        let compute = find(&detections, "PERF-SEL-001").unwrap();
        assert_eq!(compute.choice_index, 0);

        // 1 of 2 buckets with lifecycle rules is not over the 80% bar
        assert!(find(&detections, "COST-RES-002").is_none());

        let regions = find(&detections, "SUS-REG-001").unwrap();
        assert!(regions.evidence[0].contains("us-west-2"));

        assert_eq!(detections.len(), 13);
    }

    #[test]
    fn test_open_security_group_detection() {
        let mut snapshot = ScanSnapshot::default();
        snapshot.resources.security_groups = vec![SecurityGroup {
            group_id: "sg-open".to_string(),
            ingress_cidrs: vec!["0.0.0.0/0".to_string()],
        }];

        let detections = detect_answers(&snapshot);
        // 1 of 1 open is above both thresholds, nothing is proposed
        assert!(find(&detections, "SEC-INFRA-001").is_none());
    }

    #[test]
    fn test_cloudtrail_without_guardduty_is_partial_credit() {
        let mut snapshot = ScanSnapshot::default();
        snapshot.resources.cloudtrail_enabled = true;

        let detections = detect_answers(&snapshot);
        let detection = find(&detections, "SEC-DET-001").unwrap();
        assert_eq!(detection.choice_index, 1);
        assert_eq!(detection.confidence, 85);
    }

    #[test]
    fn test_detection_summary_buckets() {
        let catalog = Catalog::builtin();
        let detections = detect_answers(&demo_snapshot());
        let summary = DetectionSummary::from_detections(&detections, &catalog);

        assert_eq!(summary.total_detected, 13);
        assert_eq!(summary.high_confidence, 12);
        assert_eq!(summary.medium_confidence, 1);
        assert_eq!(summary.low_confidence, 0);
        assert!(summary.coverage_percentage > 0.0);
        assert!(summary.coverage_percentage <= 100.0);
    }

    #[test]
    fn test_apply_detections_fills_unanswered_only() {
        let catalog = Catalog::builtin();
        let mut assessment = Assessment::new("Test", "Shop");

        // Manual answer on SEC-DET-001 before the scan is applied
        assessment
            .record_response(&catalog, "SEC-DET-001", 3, "manual answer")
            .unwrap();

        let detections = detect_answers(&demo_snapshot());
        let applied = assessment.apply_detections(&catalog, &detections);

        assert_eq!(applied, 12);
        let manual = &assessment.responses["SEC-DET-001"];
        assert!(!manual.auto_detected);
        assert_eq!(manual.notes, "manual answer");

        let auto = &assessment.responses["SEC-IAM-001"];
        assert!(auto.auto_detected);
        assert!(auto.notes.contains("least privilege"));
        assert!(assessment.progress() > 0.0);
    }

    #[test]
    fn test_apply_detections_skips_unknown_questions() {
        let catalog = Catalog::builtin();
        let mut assessment = Assessment::new("Test", "Shop");

        let detections = vec![DetectedAnswer::new("NOPE-001", 0, 90, vec![])];
        assert_eq!(assessment.apply_detections(&catalog, &detections), 0);
        assert!(assessment.responses.is_empty());
    }

    #[test]
    fn test_snapshot_deserializes_with_missing_fields() {
        let snapshot: ScanSnapshot = serde_json::from_str(
            r#"{"resources": {"guardduty_enabled": true}}"#,
        )
        .unwrap();
        assert!(snapshot.resources.guardduty_enabled);
        assert!(snapshot.findings.is_empty());
    }
}
