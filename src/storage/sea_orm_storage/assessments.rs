use super::SeaOrmStorage;
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::errors::{EduSightError, Result};
use crate::models::{
    PaginationInfo,
    assessments::{
        entities::Assessment, requests::AssessmentListQuery, responses::AssessmentListResponse,
    },
};
use crate::storage::NewAssessment;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入一条评估记录
    pub async fn create_assessment_impl(&self, assessment: NewAssessment) -> Result<Assessment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(assessment.student_id),
            assessed_by: Set(assessment.assessed_by),
            academic_score: Set(assessment.academic_score),
            psychological_score: Set(assessment.psychological_score),
            physical_score: Set(assessment.physical_score),
            composite_score: Set(assessment.composite_score),
            risk_level: Set(assessment.risk_level),
            recommendations: Set(assessment.recommendations_json),
            source_document_id: Set(assessment.source_document_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("创建评估记录失败: {e}")))?;

        Ok(result.into_assessment())
    }

    /// 分页列出某学生的评估历史
    pub async fn list_assessments_with_pagination_impl(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assessments::find().filter(Column::StudentId.eq(query.student_id));

        if let Some(ref risk_level) = query.risk_level {
            select = select.filter(Column::RiskLevel.eq(risk_level));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询评估总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询评估页数失败: {e}")))?;

        let assessments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询评估列表失败: {e}")))?;

        Ok(AssessmentListResponse {
            items: assessments
                .into_iter()
                .map(|m| m.into_assessment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取某学生最近一次评估
    pub async fn get_latest_assessment_impl(&self, student_id: i64) -> Result<Option<Assessment>> {
        let result = Assessments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询最新评估失败: {e}")))?;

        Ok(result.map(|m| m.into_assessment()))
    }
}
