use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::DocumentService;
use crate::config::AppConfig;
use crate::errors::EduSightError;
use crate::middlewares::RequireJWT;
use crate::models::documents::entities::DocumentStatus;
use crate::models::documents::responses::DocumentUploadResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring::extraction;
use crate::services::students::access::load_student_checked;
use crate::storage::NewDocument;
use crate::utils::validate_magic_bytes;

pub async fn handle_upload(
    service: &DocumentService,
    student_id: i64,
    mut payload: Multipart,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let current_user = match RequireJWT::extract_user_claims(req) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    // 学生本人账号不能上传档案材料
    if current_user.role == UserRole::Student {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::<()>::error_empty(
            ErrorCode::Forbidden,
            "Students cannot upload documents",
        )));
    }

    let storage = service.get_storage(req);

    // 上传目标学生必须在当前用户的可见范围内
    let student = match load_student_checked(&storage, &current_user, student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", EduSightError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    // 文件相关信息
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut file_type = String::new();
    let mut stored_name = String::new();
    let mut extension = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 提取扩展名并校验
            extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            // 获取 MIME 类型（用于存储记录，不用于校验）
            file_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            stored_name = format!("{}-{}.bin", chrono::Utc::now().timestamp(), Uuid::new_v4());
            let file_path = format!("{upload_dir}/{stored_name}");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", EduSightError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                // 校验大小
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                f.write_all(&data)?;
            }
            file_size = total_size as i64;
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let new_document = NewDocument {
        student_id: student.id,
        uploader_id: current_user.id,
        download_token: Uuid::new_v4().to_string(),
        original_name,
        stored_name: stored_name.clone(),
        file_type,
        file_size,
    };

    let document = match storage.create_document(new_document).await {
        Ok(document) => document,
        Err(e) => {
            let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to record uploaded document: {e}"),
                )),
            );
        }
    };

    // 纯文本成绩单上传后立即提取；扫描件等待 OCR 文本再手动触发
    let mut status = document.status.clone();
    if extension == ".txt" {
        status = run_inline_extraction(&storage, &document.id, upload_dir, &stored_name).await;
    }

    let response = DocumentUploadResponse {
        download_token: document.download_token,
        file_name: document.original_name,
        size: document.file_size,
        content_type: document.file_type,
        status: status.to_string(),
        created_at: document.created_at,
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(response, "Document uploaded successfully")))
}

// 读取刚写入磁盘的文本并运行提取，写回结果
async fn run_inline_extraction(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    document_id: &i64,
    upload_dir: &str,
    stored_name: &str,
) -> DocumentStatus {
    let file_path = format!("{upload_dir}/{stored_name}");

    let text = match fs::read_to_string(&file_path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Inline extraction skipped, file unreadable: {}", e);
            let _ = storage
                .update_document_extraction(*document_id, DocumentStatus::Failed, None, None)
                .await;
            return DocumentStatus::Failed;
        }
    };

    let report = extraction::extract_report(&text);
    if report.is_empty() {
        let _ = storage
            .update_document_extraction(*document_id, DocumentStatus::Failed, None, None)
            .await;
        return DocumentStatus::Failed;
    }

    let quality = extraction::quality_score(&report);
    let extracted_json = serde_json::to_string(&report).ok();

    match storage
        .update_document_extraction(
            *document_id,
            DocumentStatus::Extracted,
            extracted_json,
            Some(quality),
        )
        .await
    {
        Ok(_) => DocumentStatus::Extracted,
        Err(e) => {
            tracing::error!("Failed to persist extraction result: {}", e);
            DocumentStatus::Pending
        }
    }
}
