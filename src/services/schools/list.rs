use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::{User, UserRole};
use crate::models::{
    ApiResponse, ErrorCode,
    schools::requests::{SchoolListParams, SchoolListQuery},
};

/// 计算列表的校域范围：平台管理员不过滤，其余教职工限定本校
fn school_scope(user: &User) -> Result<Option<i64>, HttpResponse> {
    if user.role == UserRole::Admin {
        return Ok(None);
    }
    match user.school_id {
        Some(school_id) => Ok(Some(school_id)),
        None => Err(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::SchoolPermissionDenied,
            "User is not assigned to any school",
        ))),
    }
}

pub async fn list_schools(
    service: &SchoolService,
    query: SchoolListParams,
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

    let school_id = match school_scope(&current_user) {
        Ok(school_id) => school_id,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let list_query = SchoolListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        school_id,
    };

    match storage.list_schools_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "School list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve school list: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserStatus;

    fn make_user(role: UserRole, school_id: Option<i64>) -> User {
        User {
            id: 1,
            username: "user1".to_string(),
            email: "user1@example.com".to_string(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            school_id,
            display_name: None,
            avatar_url: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn admin_lists_all_schools() {
        let admin = make_user(UserRole::Admin, None);
        assert_eq!(school_scope(&admin).unwrap(), None);
    }

    #[test]
    fn school_staff_limited_to_own_school() {
        let school_admin = make_user(UserRole::SchoolAdmin, Some(7));
        assert_eq!(school_scope(&school_admin).unwrap(), Some(7));
        let teacher = make_user(UserRole::Teacher, Some(3));
        assert_eq!(school_scope(&teacher).unwrap(), Some(3));
    }

    #[test]
    fn unassigned_staff_rejected() {
        let teacher = make_user(UserRole::Teacher, None);
        assert!(school_scope(&teacher).is_err());
    }
}
