//! 上传文档实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub uploader_id: i64,
    #[sea_orm(unique)]
    pub download_token: String,
    pub original_name: String,
    pub stored_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub status: String,
    pub extracted_data: Option<String>,
    pub quality_score: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploaderId",
        to = "super::users::Column::Id"
    )]
    Uploader,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::{Document, DocumentStatus};
        use chrono::{DateTime, Utc};

        Document {
            id: self.id,
            student_id: self.student_id,
            uploader_id: self.uploader_id,
            download_token: self.download_token,
            original_name: self.original_name,
            stored_name: self.stored_name,
            file_type: self.file_type,
            file_size: self.file_size,
            status: self
                .status
                .parse::<DocumentStatus>()
                .unwrap_or(DocumentStatus::Pending),
            extracted_data: self
                .extracted_data
                .as_deref()
                .and_then(|json| serde_json::from_str(json).ok()),
            quality_score: self.quality_score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
