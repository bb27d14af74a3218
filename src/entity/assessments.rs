//! 综合评估实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub assessed_by: i64,
    pub academic_score: Option<f64>,
    pub psychological_score: Option<f64>,
    pub physical_score: Option<f64>,
    pub composite_score: f64,
    pub risk_level: String,
    pub recommendations: String,
    pub source_document_id: Option<i64>,
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
        from = "Column::AssessedBy",
        to = "super::users::Column::Id"
    )]
    Assessor,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assessment(self) -> crate::models::assessments::entities::Assessment {
        use crate::models::assessments::entities::Assessment;
        use crate::scoring::composite::RiskLevel;
        use chrono::{DateTime, Utc};

        Assessment {
            id: self.id,
            student_id: self.student_id,
            assessed_by: self.assessed_by,
            academic_score: self.academic_score,
            psychological_score: self.psychological_score,
            physical_score: self.physical_score,
            composite_score: self.composite_score,
            risk_level: self
                .risk_level
                .parse::<RiskLevel>()
                .unwrap_or(RiskLevel::Critical),
            recommendations: serde_json::from_str(&self.recommendations).unwrap_or_default(),
            source_document_id: self.source_document_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
