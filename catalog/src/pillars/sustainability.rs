//! Sustainability pillar - region selection and data management.

use crate::pillars::PillarProvider;
use crate::types::{Choice, Pillar, Question, RiskLevel};

/// Provider for the Sustainability pillar question set.
pub struct SustainabilityPillar;

impl PillarProvider for SustainabilityPillar {
    fn pillar(&self) -> Pillar {
        Pillar::Sustainability
    }

    fn questions(&self) -> Vec<Question> {
        vec![
            Question {
                id: "SUS-REG-001".to_string(),
                pillar: Pillar::Sustainability,
                category: "Region Selection".to_string(),
                text: "How do you factor carbon intensity into region selection?".to_string(),
                description: "Where latency and compliance allow, workloads should run in regions with a high share of renewable energy.".to_string(),
                best_practices: vec![
                    "Prefer low-carbon regions for latency-insensitive workloads".to_string(),
                    "Review the customer carbon footprint tool quarterly".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SUS-REG-001-A".to_string(),
                        text: "Carbon intensity is an explicit input to region selection".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Revisit placements as regional energy mixes improve.".to_string(),
                    },
                    Choice {
                        id: "SUS-REG-001-B".to_string(),
                        text: "Some batch workloads placed in low-carbon regions".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Extend the policy to new workloads at design time.".to_string(),
                    },
                    Choice {
                        id: "SUS-REG-001-C".to_string(),
                        text: "Regions chosen purely on latency and price".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Add carbon intensity as a tiebreaker between otherwise equal regions.".to_string(),
                    },
                    Choice {
                        id: "SUS-REG-001-D".to_string(),
                        text: "Region footprint never considered".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Review where flexible workloads run; moving them is often free.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/sustainability.html".to_string(),
                aws_services: vec!["Customer Carbon Footprint Tool".to_string()],
            },
            Question {
                id: "SUS-DATA-001".to_string(),
                pillar: Pillar::Sustainability,
                category: "Data".to_string(),
                text: "How do you avoid storing data you no longer need?".to_string(),
                description: "Retention policies should delete or archive data whose business value has lapsed, reducing both cost and footprint.".to_string(),
                best_practices: vec![
                    "Define retention per data class".to_string(),
                    "Automate deletion through lifecycle rules".to_string(),
                ],
                choices: vec![
                    Choice {
                        id: "SUS-DATA-001-A".to_string(),
                        text: "Retention defined per data class and enforced automatically".to_string(),
                        risk_level: RiskLevel::None,
                        points: 100,
                        guidance: "Excellent. Audit exemptions from the retention policy yearly.".to_string(),
                    },
                    Choice {
                        id: "SUS-DATA-001-B".to_string(),
                        text: "Retention enforced for regulated data only".to_string(),
                        risk_level: RiskLevel::Low,
                        points: 70,
                        guidance: "Extend retention rules to operational data such as logs.".to_string(),
                    },
                    Choice {
                        id: "SUS-DATA-001-C".to_string(),
                        text: "Retention documented but not enforced".to_string(),
                        risk_level: RiskLevel::Medium,
                        points: 40,
                        guidance: "Translate the documented policy into lifecycle rules.".to_string(),
                    },
                    Choice {
                        id: "SUS-DATA-001-D".to_string(),
                        text: "All data kept forever by default".to_string(),
                        risk_level: RiskLevel::High,
                        points: 0,
                        guidance: "Start with log data; it is the easiest class to expire.".to_string(),
                    },
                ],
                help_link: "https://docs.aws.amazon.com/wellarchitected/latest/framework/sustainability.html".to_string(),
                aws_services: vec!["S3".to_string(), "CloudWatch Logs".to_string()],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustainability_pillar() {
        let pillar = SustainabilityPillar;
        assert_eq!(pillar.pillar(), Pillar::Sustainability);
        assert_eq!(pillar.questions().len(), 2);
    }
}
