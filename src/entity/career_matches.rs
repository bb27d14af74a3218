//! 职业匹配实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "career_matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub generated_by: i64,
    pub traits: String,
    pub matches: String,
    pub top_career: String,
    pub top_score: f64,
    pub created_at: i64,
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
        from = "Column::GeneratedBy",
        to = "super::users::Column::Id"
    )]
    Generator,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Generator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_career_match(self) -> Option<crate::models::careers::entities::CareerMatch> {
        use crate::models::careers::entities::CareerMatch;
        use chrono::{DateTime, Utc};

        // traits 向量损坏时整条记录视为不可用
        let traits = serde_json::from_str(&self.traits).ok()?;

        Some(CareerMatch {
            id: self.id,
            student_id: self.student_id,
            generated_by: self.generated_by,
            traits,
            matches: serde_json::from_str(&self.matches).unwrap_or_default(),
            top_career: self.top_career,
            top_score: self.top_score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}
