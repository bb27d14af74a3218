use serde::{Deserialize, Serialize};

use crate::scoring::career::{CareerFit, TraitVector};

// 职业匹配实体（一次匹配计算的持久化结果）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub id: i64,
    pub student_id: i64,
    pub generated_by: i64,
    pub traits: TraitVector,
    pub matches: Vec<CareerFit>,
    pub top_career: String,
    pub top_score: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
