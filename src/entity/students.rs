//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: Option<i64>,
    pub admission_number: String,
    pub full_name: String,
    pub grade_level: String,
    pub section: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
    #[sea_orm(has_many = "super::documents::Entity")]
    Documents,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
    #[sea_orm(has_many = "super::career_matches::Entity")]
    CareerMatches,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl Related<super::career_matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerMatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Gender, Student};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            school_id: self.school_id,
            parent_id: self.parent_id,
            user_id: self.user_id,
            admission_number: self.admission_number,
            full_name: self.full_name,
            grade_level: self.grade_level,
            section: self.section,
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            date_of_birth: self
                .date_of_birth
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
