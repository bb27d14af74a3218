use super::entities::Gender;
use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub school_id: i64,
    pub admission_number: String,
    pub full_name: String,
    pub grade_level: String,
    pub section: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<chrono::DateTime<chrono::Utc>>,
    pub parent_id: Option<i64>,
    pub user_id: Option<i64>,
}

// 学生更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub grade_level: Option<String>,
    pub section: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<chrono::DateTime<chrono::Utc>>,
    pub parent_id: Option<i64>,
    pub user_id: Option<i64>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub school_id: Option<i64>,
    pub grade_level: Option<String>,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub school_id: Option<i64>,
    pub parent_id: Option<i64>,
    pub grade_level: Option<String>,
    pub search: Option<String>,
}
