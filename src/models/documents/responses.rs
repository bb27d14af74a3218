use super::entities::Document;
use crate::models::common::PaginationInfo;
use crate::scoring::extraction::ExtractedReport;
use serde::Serialize;

// 文档上传响应
#[derive(Debug, Serialize)]
pub struct DocumentUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 文档列表响应
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub items: Vec<Document>,
    pub pagination: PaginationInfo,
}

// 提取结果响应
#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub download_token: String,
    pub status: String,
    pub report: ExtractedReport,
    pub quality_score: f64,
}
