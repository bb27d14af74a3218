use super::SeaOrmStorage;
use crate::entity::career_matches::{ActiveModel, Column, Entity as CareerMatches};
use crate::errors::{EduSightError, Result};
use crate::models::careers::entities::CareerMatch;
use crate::storage::NewCareerMatch;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入一条职业匹配记录
    pub async fn create_career_match_impl(
        &self,
        career_match: NewCareerMatch,
    ) -> Result<CareerMatch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(career_match.student_id),
            generated_by: Set(career_match.generated_by),
            traits: Set(career_match.traits_json),
            matches: Set(career_match.matches_json),
            top_career: Set(career_match.top_career),
            top_score: Set(career_match.top_score),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("创建职业匹配记录失败: {e}")))?;

        result.into_career_match().ok_or_else(|| {
            EduSightError::database_operation("职业匹配记录特质数据无法解析".to_string())
        })
    }

    /// 获取某学生最近一次职业匹配
    pub async fn get_latest_career_match_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<CareerMatch>> {
        let result = CareerMatches::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询最新职业匹配失败: {e}")))?;

        Ok(result.and_then(|m| m.into_career_match()))
    }
}
