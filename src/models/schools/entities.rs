use serde::{Deserialize, Serialize};

// 学校实体（租户）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    /// 学校代码，全平台唯一，用于租户定位
    pub code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
