use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CareerService;
use crate::middlewares::RequireJWT;
use crate::models::careers::requests::ComputeCareerMatchRequest;
use crate::models::careers::responses::CareerMatchResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring::career;
use crate::services::students::access::load_student_checked;
use crate::storage::NewCareerMatch;

pub async fn compute_career_match(
    service: &CareerService,
    student_id: i64,
    compute_request: ComputeCareerMatchRequest,
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

    // 职业匹配由教职工发起
    if matches!(current_user.role, UserRole::Student | UserRole::Parent) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::Forbidden,
            "Only staff can run career matching",
        )));
    }

    let storage = service.get_storage(request);

    let student = match load_student_checked(&storage, &current_user, student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    let matches = match career::match_careers(&compute_request.traits, compute_request.limit) {
        Ok(matches) => matches,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                ErrorCode::ValidationFailed,
                e.to_string(),
            )));
        }
    };

    // 阈值过滤后可能一个都不剩
    let top = match matches.first() {
        Some(top) => top.clone(),
        None => {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error_empty(
                    ErrorCode::ScoringFailed,
                    "No career reached the minimum match threshold",
                )),
            );
        }
    };

    let traits_json = match serde_json::to_string(&compute_request.traits) {
        Ok(json) => json,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to serialize traits: {e}"),
                )),
            );
        }
    };
    let matches_json = match serde_json::to_string(&matches) {
        Ok(json) => json,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to serialize matches: {e}"),
                )),
            );
        }
    };

    let new_match = NewCareerMatch {
        student_id: student.id,
        generated_by: current_user.id,
        traits_json,
        matches_json,
        top_career: top.career,
        top_score: top.score,
    };

    match storage.create_career_match(new_match).await {
        Ok(career_match) => {
            tracing::info!(
                "Career match computed for student {}: top {} ({})",
                student.id,
                career_match.top_career,
                career_match.top_score
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CareerMatchResponse { career_match },
                "Career match computed successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save career match: {e}"),
            )),
        ),
    }
}
