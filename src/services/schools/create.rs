use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolService;
use crate::models::{
    ApiResponse, ErrorCode,
    schools::{requests::CreateSchoolRequest, responses::SchoolResponse},
};
use crate::utils::validate::validate_school_code;

pub async fn create_school(
    service: &SchoolService,
    school_data: CreateSchoolRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if school_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "School name cannot be empty",
        )));
    }

    if let Err(msg) = validate_school_code(&school_data.code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    // 学校代码是租户标识，全局唯一
    match storage.get_school_by_code(&school_data.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SchoolAlreadyExists,
                "School code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("School lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_school(school_data).await {
        Ok(school) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SchoolResponse { school },
            "学校创建成功",
        ))),
        Err(e) => {
            let msg = format!("School creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SchoolAlreadyExists,
                    "School code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
