use serde::{Deserialize, Serialize};

use crate::scoring::extraction::ExtractedReport;

// 文档提取状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,   // 已上传，尚未提取
    Extracted, // 提取完成
    Failed,    // 提取失败
}

impl<'de> Deserialize<'de> for DocumentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(DocumentStatus::Pending),
            "extracted" => Ok(DocumentStatus::Extracted),
            "failed" => Ok(DocumentStatus::Failed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的文档状态: '{s}'. 支持的状态: pending, extracted, failed"
            ))),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::Extracted => write!(f, "extracted"),
            DocumentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DocumentStatus::Pending),
            "extracted" => Ok(DocumentStatus::Extracted),
            "failed" => Ok(DocumentStatus::Failed),
            _ => Err(format!("Invalid document status: {s}")),
        }
    }
}

// 上传文档实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub student_id: i64,
    pub uploader_id: i64,
    /// 下载令牌，对外暴露的文档标识
    pub download_token: String,
    pub original_name: String,
    #[serde(skip_serializing, default)] // 磁盘文件名不对外暴露
    pub stored_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub status: DocumentStatus,
    /// 结构化提取结果（成绩/出勤/日期）
    pub extracted_data: Option<ExtractedReport>,
    /// 提取数据质量分 0-100
    pub quality_score: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
