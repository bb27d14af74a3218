use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
    users::entities::UserRole,
};

pub async fn list_students(
    service: &StudentService,
    query: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    // 按角色收窄可见范围：
    // - 管理员可按 school_id 过滤或查看全部
    // - 校级角色强制本校
    // - 家长/学生只能看到与自己关联的学生
    let mut list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        school_id: query.school_id,
        parent_id: None,
        grade_level: query.grade_level,
        search: query.search,
    };

    match current_user.role {
        UserRole::Admin => {}
        UserRole::SchoolAdmin | UserRole::Teacher => {
            match current_user.school_id {
                Some(school_id) => list_query.school_id = Some(school_id),
                None => {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
                        ErrorCode::SchoolPermissionDenied,
                        "User is not associated with any school",
                    )));
                }
            };
        }
        UserRole::Parent | UserRole::Student => {
            list_query.school_id = None;
            list_query.parent_id = Some(current_user.id);
        }
    }

    let storage = service.get_storage(request);

    match storage.list_students_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
