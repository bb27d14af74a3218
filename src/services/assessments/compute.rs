use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::middlewares::RequireJWT;
use crate::models::assessments::requests::ComputeAssessmentRequest;
use crate::models::assessments::responses::AssessmentResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring::composite::{self, DomainScores};
use crate::services::documents::get::load_document_checked;
use crate::services::students::access::load_student_checked;
use crate::storage::NewAssessment;

pub async fn compute_assessment(
    service: &AssessmentService,
    student_id: i64,
    compute_request: ComputeAssessmentRequest,
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

    // 评估由教职工发起，学生与家长只能查看
    if matches!(current_user.role, UserRole::Student | UserRole::Parent) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::Forbidden,
            "Only staff can run assessments",
        )));
    }

    let storage = service.get_storage(request);

    let student = match load_student_checked(&storage, &current_user, student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    // 学术子分：显式传入优先，否则尝试从已提取文档推导
    let mut academic_score = compute_request.academic_score;
    let mut source_document_id = None;
    if academic_score.is_none() {
        if let Some(token) = &compute_request.source_document_token {
            let document = match load_document_checked(&storage, &current_user, token).await {
                Ok(document) => document,
                Err(resp) => return Ok(resp),
            };
            if document.student_id != student.id {
                return Ok(HttpResponse::UnprocessableEntity().json(
                    ApiResponse::<()>::error_empty(
                        ErrorCode::ValidationFailed,
                        "Source document belongs to another student",
                    ),
                ));
            }
            academic_score = document
                .extracted_data
                .as_ref()
                .and_then(|report| report.average_subject_score());
            if academic_score.is_none() {
                return Ok(HttpResponse::UnprocessableEntity().json(
                    ApiResponse::<()>::error_empty(
                        ErrorCode::ValidationFailed,
                        "Source document has no extracted subject grades",
                    ),
                ));
            }
            source_document_id = Some(document.id);
        }
    }

    let scores = DomainScores {
        academic: academic_score,
        psychological: compute_request.psychological_score,
        physical: compute_request.physical_score,
    };

    let outcome = match composite::compute_360(&scores) {
        Ok(outcome) => outcome,
        Err(e) => {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error_empty(
                    ErrorCode::ScoringFailed,
                    e.to_string(),
                )),
            );
        }
    };

    let recommendations_json = match serde_json::to_string(&outcome.recommendations) {
        Ok(json) => json,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to serialize recommendations: {e}"),
                )),
            );
        }
    };

    let new_assessment = NewAssessment {
        student_id: student.id,
        assessed_by: current_user.id,
        academic_score: scores.academic,
        psychological_score: scores.psychological,
        physical_score: scores.physical,
        composite_score: outcome.composite_score,
        risk_level: outcome.risk_level.to_string(),
        recommendations_json,
        source_document_id,
    };

    match storage.create_assessment(new_assessment).await {
        Ok(assessment) => {
            tracing::info!(
                "Assessment computed for student {}: composite {} risk {}",
                student.id,
                assessment.composite_score,
                assessment.risk_level
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssessmentResponse { assessment },
                "Assessment computed successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save assessment: {e}"),
            )),
        ),
    }
}
