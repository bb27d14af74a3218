use crate::scoring::career::TraitVector;
use serde::Deserialize;

// 职业匹配计算请求
#[derive(Debug, Deserialize)]
pub struct ComputeCareerMatchRequest {
    pub traits: TraitVector,
    /// 返回的最大匹配数，默认 5
    pub limit: Option<usize>,
}
