use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学校创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSchoolRequest {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
}

// 学校更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact_email: Option<String>,
}

// 学校查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct SchoolListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学校列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SchoolListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    /// 非平台管理员调用时收窄到本校
    pub school_id: Option<i64>,
}
