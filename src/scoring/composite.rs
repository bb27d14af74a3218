//! EduSight 360° 综合评分引擎
//!
//! 对学术 / 心理 / 体质三个领域的子分做固定权重加权，映射风险等级，
//! 并从静态建议表生成按优先级排序的干预建议。纯函数，无中间状态。

use serde::{Deserialize, Serialize};

use crate::errors::{EduSightError, Result};

/// 固定领域权重：学术 40%，心理 30%，体质 30%
const ACADEMIC_WEIGHT: f64 = 0.40;
const PSYCHOLOGICAL_WEIGHT: f64 = 0.30;
const PHYSICAL_WEIGHT: f64 = 0.30;

/// 风险等级阈值（综合分下界）
const LOW_RISK_FLOOR: f64 = 75.0;
const MEDIUM_RISK_FLOOR: f64 = 50.0;
const HIGH_RISK_FLOOR: f64 = 30.0;

/// 领域子分低于该值产生高优先级建议
const HIGH_PRIORITY_CEILING: f64 = 50.0;
/// 领域子分低于该值产生中优先级建议
const MEDIUM_PRIORITY_CEILING: f64 = 70.0;

// 评估领域
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Academic,
    Psychological,
    Physical,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Academic => write!(f, "academic"),
            Domain::Psychological => write!(f, "psychological"),
            Domain::Physical => write!(f, "physical"),
        }
    }
}

// 建议优先级
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

// 风险等级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

// 领域子分输入，任一领域可缺省
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainScores {
    pub academic: Option<f64>,
    pub psychological: Option<f64>,
    pub physical: Option<f64>,
}

// 干预建议
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub domain: Domain,
    pub priority: Priority,
    pub advice: String,
}

// 综合评分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeOutcome {
    pub composite_score: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
}

/// 静态建议表：(领域, 高优先级建议, 中优先级建议)
const ADVICE_TABLE: &[(Domain, &str, &str)] = &[
    (
        Domain::Academic,
        "学术成绩显著偏低，建议安排一对一辅导并与家长沟通学习计划",
        "学术成绩有提升空间，建议加强薄弱科目的课后练习",
    ),
    (
        Domain::Psychological,
        "心理评估分数偏低，建议尽快安排心理咨询师介入",
        "心理状态需要关注，建议增加师生沟通频次并观察情绪变化",
    ),
    (
        Domain::Physical,
        "体质测评显著偏低，建议制定体能提升计划并排查健康问题",
        "体质水平有待提高，建议保证每日锻炼时长与均衡饮食",
    ),
];

fn validate_score(domain: Domain, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) || value.is_nan() {
        return Err(EduSightError::validation(format!(
            "{domain} 子分超出范围 [0, 100]: {value}"
        )));
    }
    Ok(())
}

fn advice_for(domain: Domain, score: f64) -> Option<Recommendation> {
    let (_, high, medium) = ADVICE_TABLE.iter().find(|(d, _, _)| *d == domain)?;
    if score < HIGH_PRIORITY_CEILING {
        Some(Recommendation {
            domain,
            priority: Priority::High,
            advice: (*high).to_string(),
        })
    } else if score < MEDIUM_PRIORITY_CEILING {
        Some(Recommendation {
            domain,
            priority: Priority::Medium,
            advice: (*medium).to_string(),
        })
    } else {
        None
    }
}

/// 计算 360° 综合评分
///
/// 缺省领域按剩余领域重新归一化权重；三个领域全部缺省视为校验错误。
pub fn compute_360(scores: &DomainScores) -> Result<CompositeOutcome> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut recommendations = Vec::new();

    let domains = [
        (Domain::Academic, scores.academic, ACADEMIC_WEIGHT),
        (
            Domain::Psychological,
            scores.psychological,
            PSYCHOLOGICAL_WEIGHT,
        ),
        (Domain::Physical, scores.physical, PHYSICAL_WEIGHT),
    ];

    for (domain, value, weight) in domains {
        if let Some(value) = value {
            validate_score(domain, value)?;
            weighted_sum += value * weight;
            weight_total += weight;
            if let Some(rec) = advice_for(domain, value) {
                recommendations.push(rec);
            }
        }
    }

    if weight_total == 0.0 {
        return Err(EduSightError::validation(
            "至少需要提供一个领域的子分".to_string(),
        ));
    }

    let composite = (weighted_sum / weight_total * 100.0).round() / 100.0;
    let composite = composite.clamp(0.0, 100.0);

    // 高优先级在前，同优先级按领域固定顺序
    recommendations.sort_by_key(|r| (r.priority, r.domain));

    Ok(CompositeOutcome {
        composite_score: composite,
        risk_level: risk_level_for(composite),
        recommendations,
    })
}

/// 综合分到风险等级的固定阈值映射
pub fn risk_level_for(composite: f64) -> RiskLevel {
    if composite >= LOW_RISK_FLOOR {
        RiskLevel::Low
    } else if composite >= MEDIUM_RISK_FLOOR {
        RiskLevel::Medium
    } else if composite >= HIGH_RISK_FLOOR {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scores(academic: f64, psychological: f64, physical: f64) -> DomainScores {
        DomainScores {
            academic: Some(academic),
            psychological: Some(psychological),
            physical: Some(physical),
        }
    }

    #[test]
    fn test_weighted_sum_all_domains() {
        let outcome = compute_360(&full_scores(80.0, 70.0, 60.0)).unwrap();
        // 80*0.4 + 70*0.3 + 60*0.3 = 71
        assert_eq!(outcome.composite_score, 71.0);
        assert_eq!(outcome.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_perfect_scores_are_low_risk() {
        let outcome = compute_360(&full_scores(100.0, 100.0, 100.0)).unwrap();
        assert_eq!(outcome.composite_score, 100.0);
        assert_eq!(outcome.risk_level, RiskLevel::Low);
        assert!(outcome.recommendations.is_empty());
    }

    #[test]
    fn test_missing_domain_reweights() {
        // 只有学术和心理：(80*0.4 + 60*0.3) / 0.7 = 71.43
        let scores = DomainScores {
            academic: Some(80.0),
            psychological: Some(60.0),
            physical: None,
        };
        let outcome = compute_360(&scores).unwrap();
        assert_eq!(outcome.composite_score, 71.43);
    }

    #[test]
    fn test_single_domain_equals_itself() {
        let scores = DomainScores {
            academic: Some(42.0),
            ..Default::default()
        };
        let outcome = compute_360(&scores).unwrap();
        assert_eq!(outcome.composite_score, 42.0);
        assert_eq!(outcome.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_all_missing_is_error() {
        assert!(compute_360(&DomainScores::default()).is_err());
    }

    #[test]
    fn test_out_of_range_is_error() {
        let scores = DomainScores {
            academic: Some(105.0),
            ..Default::default()
        };
        assert!(compute_360(&scores).is_err());

        let scores = DomainScores {
            physical: Some(-1.0),
            ..Default::default()
        };
        assert!(compute_360(&scores).is_err());
    }

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(risk_level_for(75.0), RiskLevel::Low);
        assert_eq!(risk_level_for(74.99), RiskLevel::Medium);
        assert_eq!(risk_level_for(50.0), RiskLevel::Medium);
        assert_eq!(risk_level_for(49.99), RiskLevel::High);
        assert_eq!(risk_level_for(30.0), RiskLevel::High);
        assert_eq!(risk_level_for(29.99), RiskLevel::Critical);
        assert_eq!(risk_level_for(0.0), RiskLevel::Critical);
    }

    #[test]
    fn test_recommendations_priority_order() {
        // 心理 45 -> 高优先级；学术 65 -> 中优先级
        let outcome = compute_360(&full_scores(65.0, 45.0, 90.0)).unwrap();
        assert_eq!(outcome.recommendations.len(), 2);
        assert_eq!(outcome.recommendations[0].priority, Priority::High);
        assert_eq!(outcome.recommendations[0].domain, Domain::Psychological);
        assert_eq!(outcome.recommendations[1].priority, Priority::Medium);
        assert_eq!(outcome.recommendations[1].domain, Domain::Academic);
    }

    #[test]
    fn test_same_priority_sorted_by_domain() {
        let outcome = compute_360(&full_scores(40.0, 40.0, 40.0)).unwrap();
        assert_eq!(outcome.recommendations.len(), 3);
        assert!(
            outcome
                .recommendations
                .iter()
                .all(|r| r.priority == Priority::High)
        );
        assert_eq!(outcome.recommendations[0].domain, Domain::Academic);
        assert_eq!(outcome.recommendations[1].domain, Domain::Psychological);
        assert_eq!(outcome.recommendations[2].domain, Domain::Physical);
    }

    #[test]
    fn test_risk_level_round_trip() {
        for level in [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            let parsed: RiskLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }
}
