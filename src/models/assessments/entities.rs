use serde::{Deserialize, Serialize};

use crate::scoring::composite::{Recommendation, RiskLevel};

// 综合评估实体（一次 360° 评分的持久化结果）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub student_id: i64,
    pub assessed_by: i64,
    pub academic_score: Option<f64>,
    pub psychological_score: Option<f64>,
    pub physical_score: Option<f64>,
    pub composite_score: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    /// 学术子分来源文档（如果由提取结果推导）
    pub source_document_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
