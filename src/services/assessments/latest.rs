use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::middlewares::RequireJWT;
use crate::models::assessments::responses::AssessmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::students::access::load_student_checked;

pub async fn latest_assessment(
    service: &AssessmentService,
    student_id: i64,
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

    match storage.get_latest_assessment(student.id).await {
        Ok(Some(assessment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssessmentResponse { assessment },
            "Assessment retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
            ErrorCode::AssessmentNotFound,
            "Student has no assessments yet",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load assessment: {e}"),
            )),
        ),
    }
}
