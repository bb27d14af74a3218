pub mod download;
pub mod extract;
pub mod get;
pub mod list;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::documents::requests::{DocumentListParams, ExtractRequest};
use crate::storage::Storage;

pub struct DocumentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DocumentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 上传学生文档
    pub async fn upload_document(
        &self,
        student_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, student_id, payload, request).await
    }

    // 列出学生文档
    pub async fn list_documents(
        &self,
        student_id: i64,
        query: DocumentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_documents(self, student_id, query, request).await
    }

    // 获取文档元数据
    pub async fn get_document(
        &self,
        download_token: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_document(self, download_token, request).await
    }

    // 手动触发文档提取
    pub async fn extract_document(
        &self,
        download_token: &str,
        extract_request: ExtractRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        extract::extract_document(self, download_token, extract_request, request).await
    }

    // 下载文档
    pub async fn download_document(
        &self,
        download_token: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::handle_download(self, download_token, request).await
    }
}
