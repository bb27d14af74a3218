use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::middlewares::RequireJWT;
use crate::models::assessments::requests::{AssessmentListParams, AssessmentListQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::students::access::load_student_checked;

pub async fn list_assessments(
    service: &AssessmentService,
    student_id: i64,
    params: AssessmentListParams,
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

    let storage = service.get_storage(request);

    let student = match load_student_checked(&storage, &current_user, student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    let query = AssessmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        student_id: student.id,
        risk_level: params.risk_level,
    };

    match storage.list_assessments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Assessments retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assessments: {e}"),
            )),
        ),
    }
}
