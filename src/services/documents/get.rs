use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::middlewares::RequireJWT;
use crate::models::documents::entities::Document;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::students::access::load_student_checked;
use crate::storage::Storage;
use std::sync::Arc;

/// 通过令牌加载文档，并以其归属学生做访问检查
pub(crate) async fn load_document_checked(
    storage: &Arc<dyn Storage>,
    user: &User,
    download_token: &str,
) -> Result<Document, HttpResponse> {
    let document = match storage.get_document_by_token(download_token).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::<()>::error_empty(
                ErrorCode::DocumentNotFound,
                "Document not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Document lookup failed: {e}"),
                )),
            );
        }
    };

    load_student_checked(storage, user, document.student_id).await?;
    Ok(document)
}

pub async fn get_document(
    service: &DocumentService,
    download_token: &str,
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

    match load_document_checked(&storage, &current_user, download_token).await {
        Ok(document) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            document,
            "Document retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
