use super::SeaOrmStorage;
use crate::entity::documents::{ActiveModel, Column, Entity as Documents};
use crate::errors::{EduSightError, Result};
use crate::models::{
    PaginationInfo,
    documents::{
        entities::{Document, DocumentStatus},
        requests::DocumentListQuery,
        responses::DocumentListResponse,
    },
};
use crate::storage::NewDocument;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建文档记录
    pub async fn create_document_impl(&self, doc: NewDocument) -> Result<Document> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(doc.student_id),
            uploader_id: Set(doc.uploader_id),
            download_token: Set(doc.download_token),
            original_name: Set(doc.original_name),
            stored_name: Set(doc.stored_name),
            file_type: Set(doc.file_type),
            file_size: Set(doc.file_size),
            status: Set(DocumentStatus::Pending.to_string()),
            extracted_data: Set(None),
            quality_score: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("创建文档记录失败: {e}")))?;

        Ok(result.into_document())
    }

    /// 通过下载令牌获取文档
    pub async fn get_document_by_token_impl(
        &self,
        download_token: &str,
    ) -> Result<Option<Document>> {
        let result = Documents::find()
            .filter(Column::DownloadToken.eq(download_token))
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询文档失败: {e}")))?;

        Ok(result.map(|m| m.into_document()))
    }

    /// 分页列出某学生的文档
    pub async fn list_documents_with_pagination_impl(
        &self,
        query: DocumentListQuery,
    ) -> Result<DocumentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Documents::find().filter(Column::StudentId.eq(query.student_id));

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询文档总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询文档页数失败: {e}")))?;

        let documents = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询文档列表失败: {e}")))?;

        Ok(DocumentListResponse {
            items: documents.into_iter().map(|m| m.into_document()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 写回提取结果（状态、结构化数据与质量分）
    pub async fn update_document_extraction_impl(
        &self,
        id: i64,
        status: DocumentStatus,
        extracted_json: Option<String>,
        quality_score: Option<f64>,
    ) -> Result<Option<Document>> {
        let existing = Documents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询文档失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            extracted_data: Set(extracted_json),
            quality_score: Set(quality_score),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("更新文档提取结果失败: {e}")))?;

        Ok(Some(updated.into_document()))
    }
}
