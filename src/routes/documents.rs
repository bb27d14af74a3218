use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::documents::requests::{DocumentListParams, ExtractRequest};
use crate::models::users::entities::UserRole;
use crate::services::DocumentService;
use crate::utils::{SafeDocumentToken, SafeStudentIdI64};

// 懒加载的全局 DocumentService 实例
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

// 上传学生文档
pub async fn upload_document(
    req: HttpRequest,
    path: SafeStudentIdI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.upload_document(path.0, payload, &req).await
}

// 列出学生文档
pub async fn list_documents(
    req: HttpRequest,
    path: SafeStudentIdI64,
    query: web::Query<DocumentListParams>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .list_documents(path.0, query.into_inner(), &req)
        .await
}

// 获取文档元数据
pub async fn get_document(req: HttpRequest, path: SafeDocumentToken) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.get_document(&path.0, &req).await
}

// 手动触发文档提取
pub async fn extract_document(
    req: HttpRequest,
    path: SafeDocumentToken,
    extract_data: web::Json<ExtractRequest>,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE
        .extract_document(&path.0, extract_data.into_inner(), &req)
        .await
}

// 下载文档原件
pub async fn download_document(
    req: HttpRequest,
    path: SafeDocumentToken,
) -> ActixResult<HttpResponse> {
    DOCUMENT_SERVICE.download_document(&path.0, &req).await
}

// 配置路由
pub fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    // 学生维度的文档入口（上传、列表）
    cfg.service(
        web::scope("/api/v1/students/{student_id}/documents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出文档 - 所有登录用户可访问（业务层做监护人/校域检查）
                    .route(web::get().to(list_documents))
                    // 上传文档 - 仅教职工和家长
                    .route(
                        web::post()
                            .to(upload_document)
                            .wrap(RateLimit::file_upload())
                            .wrap(middlewares::RequireRole::new_any(UserRole::uploader_roles())),
                    ),
            ),
    );

    // 文档维度的入口（按下载令牌访问）
    cfg.service(
        web::scope("/api/v1/documents")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{token}").route(web::get().to(get_document)))
            .service(
                web::resource("/{token}/extract")
                    .route(web::post().to(extract_document).wrap(RateLimit::compute())),
            )
            .service(web::resource("/{token}/download").route(web::get().to(download_document))),
    );
}
