use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 评估计算请求：三个领域子分均可缺省，但不能全部缺省
#[derive(Debug, Deserialize)]
pub struct ComputeAssessmentRequest {
    pub academic_score: Option<f64>,
    pub psychological_score: Option<f64>,
    pub physical_score: Option<f64>,
    /// 为空且未提供 academic_score 时，从该文档的提取结果推导学术子分
    pub source_document_token: Option<String>,
}

// 评估查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AssessmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub risk_level: Option<String>,
}

// 评估列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AssessmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: i64,
    pub risk_level: Option<String>,
}
