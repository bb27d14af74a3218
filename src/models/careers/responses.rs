use super::entities::CareerMatch;
use serde::Serialize;

// 职业匹配响应
#[derive(Debug, Serialize)]
pub struct CareerMatchResponse {
    pub career_match: CareerMatch,
}
