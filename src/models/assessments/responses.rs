use super::entities::Assessment;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 评估响应
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub assessment: Assessment,
}

// 评估列表响应
#[derive(Debug, Serialize)]
pub struct AssessmentListResponse {
    pub items: Vec<Assessment>,
    pub pagination: PaginationInfo,
}
