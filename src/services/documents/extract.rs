use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;

use super::DocumentService;
use super::get::load_document_checked;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::documents::entities::DocumentStatus;
use crate::models::documents::requests::ExtractRequest;
use crate::models::documents::responses::ExtractionResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring::extraction;

pub async fn extract_document(
    service: &DocumentService,
    download_token: &str,
    extract_request: ExtractRequest,
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

    if current_user.role == UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::Forbidden,
            "Students cannot trigger document extraction",
        )));
    }

    let storage = service.get_storage(request);

    let document = match load_document_checked(&storage, &current_user, download_token).await {
        Ok(document) => document,
        Err(resp) => return Ok(resp),
    };

    // 文本来源：请求携带的 OCR 文本优先，其次读取已存储的纯文本文件
    let text = match extract_request.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            let config = AppConfig::get();
            let file_path = format!("{}/{}", config.upload.dir, document.stored_name);
            match fs::read_to_string(&file_path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Stored document is not readable as text: {}", e);
                    return Ok(HttpResponse::UnprocessableEntity().json(
                        ApiResponse::<()>::error_empty(
                            ErrorCode::ExtractionFailed,
                            "No text available for extraction; provide OCR text in the request body",
                        ),
                    ));
                }
            }
        }
    };

    let report = extraction::extract_report(&text);

    if report.is_empty() {
        let _ = storage
            .update_document_extraction(document.id, DocumentStatus::Failed, None, None)
            .await;
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::error_empty(
                ErrorCode::ExtractionFailed,
                "No recognizable grades, attendance or dates found in the document",
            )),
        );
    }

    let quality = extraction::quality_score(&report);
    let extracted_json = match serde_json::to_string(&report) {
        Ok(json) => Some(json),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to serialize extraction result: {e}"),
                )),
            );
        }
    };

    match storage
        .update_document_extraction(
            document.id,
            DocumentStatus::Extracted,
            extracted_json,
            Some(quality),
        )
        .await
    {
        Ok(Some(updated)) => {
            let response = ExtractionResponse {
                download_token: updated.download_token,
                status: updated.status.to_string(),
                report,
                quality_score: quality,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Document extracted successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            "Document not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to persist extraction result: {e}"),
            )),
        ),
    }
}
