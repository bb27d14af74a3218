use super::entities::School;
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 学校响应
#[derive(Debug, Serialize)]
pub struct SchoolResponse {
    pub school: School,
}

// 学校列表响应
#[derive(Debug, Serialize)]
pub struct SchoolListResponse {
    pub items: Vec<School>,
    pub pagination: PaginationInfo,
}
