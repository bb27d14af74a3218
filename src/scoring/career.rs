//! 职业匹配引擎
//!
//! 将学生的特质向量与静态职业画像表做加权距离比较，输出排序后的
//! 匹配度列表。纯函数，无学习、无持久化。

use serde::{Deserialize, Serialize};

use crate::errors::{EduSightError, Result};

/// 匹配度低于该值的职业不返回
const MATCH_THRESHOLD: f64 = 50.0;
/// 默认返回的最大匹配数
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// 特质维度数：分析 / 创造 / 社交 / 技术 / 领导
const TRAIT_DIMENSIONS: usize = 5;

// 学生特质向量，各维度 0-100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TraitVector {
    pub analytical: f64,
    pub creative: f64,
    pub social: f64,
    pub technical: f64,
    pub leadership: f64,
}

impl TraitVector {
    fn as_array(&self) -> [f64; TRAIT_DIMENSIONS] {
        [
            self.analytical,
            self.creative,
            self.social,
            self.technical,
            self.leadership,
        ]
    }

    fn validate(&self) -> Result<()> {
        const NAMES: [&str; TRAIT_DIMENSIONS] =
            ["analytical", "creative", "social", "technical", "leadership"];
        for (name, value) in NAMES.iter().zip(self.as_array()) {
            if !(0.0..=100.0).contains(&value) || value.is_nan() {
                return Err(EduSightError::validation(format!(
                    "特质 {name} 超出范围 [0, 100]: {value}"
                )));
            }
        }
        Ok(())
    }
}

// 单个职业的匹配结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerFit {
    pub career: String,
    /// 匹配度 0-100
    pub score: f64,
}

// 静态职业画像：理想特质向量 + 各维度权重
struct CareerProfile {
    name: &'static str,
    ideal: [f64; TRAIT_DIMENSIONS],
    weights: [f64; TRAIT_DIMENSIONS],
}

/// 职业画像表，维度顺序: 分析 / 创造 / 社交 / 技术 / 领导
const CAREER_PROFILES: &[CareerProfile] = &[
    CareerProfile {
        name: "Software Engineer",
        ideal: [85.0, 60.0, 40.0, 95.0, 45.0],
        weights: [1.0, 0.6, 0.3, 1.2, 0.4],
    },
    CareerProfile {
        name: "Data Scientist",
        ideal: [95.0, 55.0, 40.0, 85.0, 40.0],
        weights: [1.3, 0.5, 0.3, 1.0, 0.3],
    },
    CareerProfile {
        name: "Doctor",
        ideal: [85.0, 45.0, 75.0, 70.0, 55.0],
        weights: [1.1, 0.3, 0.9, 0.7, 0.5],
    },
    CareerProfile {
        name: "Teacher",
        ideal: [60.0, 65.0, 90.0, 45.0, 65.0],
        weights: [0.6, 0.7, 1.3, 0.3, 0.7],
    },
    CareerProfile {
        name: "Graphic Designer",
        ideal: [45.0, 95.0, 55.0, 65.0, 35.0],
        weights: [0.4, 1.4, 0.5, 0.7, 0.3],
    },
    CareerProfile {
        name: "Journalist",
        ideal: [70.0, 85.0, 80.0, 40.0, 50.0],
        weights: [0.8, 1.1, 1.0, 0.3, 0.5],
    },
    CareerProfile {
        name: "Civil Engineer",
        ideal: [80.0, 55.0, 45.0, 85.0, 60.0],
        weights: [1.0, 0.5, 0.4, 1.1, 0.6],
    },
    CareerProfile {
        name: "Psychologist",
        ideal: [75.0, 55.0, 95.0, 35.0, 50.0],
        weights: [0.9, 0.5, 1.4, 0.2, 0.5],
    },
    CareerProfile {
        name: "Entrepreneur",
        ideal: [70.0, 80.0, 80.0, 55.0, 95.0],
        weights: [0.7, 0.9, 0.8, 0.5, 1.4],
    },
    CareerProfile {
        name: "Lawyer",
        ideal: [90.0, 60.0, 80.0, 35.0, 70.0],
        weights: [1.2, 0.5, 0.9, 0.2, 0.8],
    },
    CareerProfile {
        name: "Research Scientist",
        ideal: [95.0, 70.0, 35.0, 80.0, 35.0],
        weights: [1.4, 0.7, 0.2, 0.9, 0.2],
    },
    CareerProfile {
        name: "Social Worker",
        ideal: [55.0, 50.0, 95.0, 30.0, 60.0],
        weights: [0.5, 0.4, 1.5, 0.2, 0.6],
    },
];

/// 匹配度：100 减去加权平均绝对距离
fn similarity(traits: &[f64; TRAIT_DIMENSIONS], profile: &CareerProfile) -> f64 {
    let weight_total: f64 = profile.weights.iter().sum();
    let weighted_distance: f64 = traits
        .iter()
        .zip(profile.ideal.iter())
        .zip(profile.weights.iter())
        .map(|((t, ideal), w)| (t - ideal).abs() * w)
        .sum();
    let score = 100.0 - weighted_distance / weight_total;
    (score.max(0.0) * 100.0).round() / 100.0
}

/// 计算职业匹配列表：降序排列，过滤低于阈值的结果，截断到 limit
pub fn match_careers(traits: &TraitVector, limit: Option<usize>) -> Result<Vec<CareerFit>> {
    traits.validate()?;
    let limit = limit.unwrap_or(DEFAULT_MATCH_LIMIT).max(1);
    let vector = traits.as_array();

    let mut fits: Vec<CareerFit> = CAREER_PROFILES
        .iter()
        .map(|profile| CareerFit {
            career: profile.name.to_string(),
            score: similarity(&vector, profile),
        })
        .filter(|fit| fit.score >= MATCH_THRESHOLD)
        .collect();

    // 分数相同时按职业名稳定排序，保证输出确定性
    fits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.career.cmp(&b.career))
    });
    fits.truncate(limit);
    Ok(fits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(
        analytical: f64,
        creative: f64,
        social: f64,
        technical: f64,
        leadership: f64,
    ) -> TraitVector {
        TraitVector {
            analytical,
            creative,
            social,
            technical,
            leadership,
        }
    }

    #[test]
    fn test_technical_profile_prefers_engineering() {
        let fits = match_careers(&traits(85.0, 55.0, 40.0, 95.0, 45.0), None).unwrap();
        assert!(!fits.is_empty());
        assert_eq!(fits[0].career, "Software Engineer");
        assert!(fits[0].score > 90.0);
    }

    #[test]
    fn test_social_profile_prefers_people_careers() {
        let fits = match_careers(&traits(55.0, 50.0, 95.0, 30.0, 60.0), None).unwrap();
        assert_eq!(fits[0].career, "Social Worker");
        let names: Vec<_> = fits.iter().map(|f| f.career.as_str()).collect();
        assert!(names.contains(&"Psychologist") || names.contains(&"Teacher"));
    }

    #[test]
    fn test_results_sorted_descending() {
        let fits = match_careers(&traits(70.0, 70.0, 70.0, 70.0, 70.0), Some(12)).unwrap();
        for pair in fits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_limit_respected() {
        let fits = match_careers(&traits(70.0, 70.0, 70.0, 70.0, 70.0), Some(3)).unwrap();
        assert!(fits.len() <= 3);
    }

    #[test]
    fn test_default_limit_is_five() {
        let fits = match_careers(&traits(70.0, 70.0, 70.0, 70.0, 70.0), None).unwrap();
        assert!(fits.len() <= DEFAULT_MATCH_LIMIT);
    }

    #[test]
    fn test_threshold_filters_poor_fits() {
        // 全 0 特质与所有画像的距离都很大
        let fits = match_careers(&traits(0.0, 0.0, 0.0, 0.0, 0.0), Some(12)).unwrap();
        for fit in &fits {
            assert!(fit.score >= 50.0);
        }
    }

    #[test]
    fn test_out_of_range_trait_is_error() {
        assert!(match_careers(&traits(120.0, 50.0, 50.0, 50.0, 50.0), None).is_err());
        assert!(match_careers(&traits(50.0, -5.0, 50.0, 50.0, 50.0), None).is_err());
    }

    #[test]
    fn test_exact_ideal_match_scores_100() {
        // 与 Data Scientist 画像完全一致
        let fits = match_careers(&traits(95.0, 55.0, 40.0, 85.0, 40.0), None).unwrap();
        assert_eq!(fits[0].career, "Data Scientist");
        assert_eq!(fits[0].score, 100.0);
    }
}
