use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 文档查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct DocumentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<String>,
}

// 文档列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct DocumentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: i64,
    pub status: Option<String>,
}

// 手动触发提取时可附带的原始文本（OCR 前置流程产出）
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// 覆盖文档自身内容的 OCR 文本；为空时读取已存储的文本文件
    pub text: Option<String>,
}
