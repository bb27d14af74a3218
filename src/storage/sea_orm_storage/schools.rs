use super::SeaOrmStorage;
use crate::entity::schools::{ActiveModel, Column, Entity as Schools};
use crate::errors::{EduSightError, Result};
use crate::models::{
    PaginationInfo,
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, SchoolListQuery, UpdateSchoolRequest},
        responses::SchoolListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学校
    pub async fn create_school_impl(&self, req: CreateSchoolRequest) -> Result<School> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            address: Set(req.address),
            contact_email: Set(req.contact_email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("创建学校失败: {e}")))?;

        Ok(result.into_school())
    }

    /// 通过 ID 获取学校
    pub async fn get_school_by_id_impl(&self, id: i64) -> Result<Option<School>> {
        let result = Schools::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 通过学校代码获取学校
    pub async fn get_school_by_code_impl(&self, code: &str) -> Result<Option<School>> {
        let result = Schools::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 分页列出学校
    pub async fn list_schools_with_pagination_impl(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Schools::find();

        if let Some(school_id) = query.school_id {
            select = select.filter(Column::Id.eq(school_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Code.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询学校总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询学校页数失败: {e}")))?;

        let schools = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSightError::database_operation(format!("查询学校列表失败: {e}")))?;

        Ok(SchoolListResponse {
            items: schools.into_iter().map(|m| m.into_school()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学校信息
    pub async fn update_school_impl(
        &self,
        id: i64,
        update: UpdateSchoolRequest,
    ) -> Result<Option<School>> {
        let existing = self.get_school_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(contact_email) = update.contact_email {
            model.contact_email = Set(Some(contact_email));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("更新学校失败: {e}")))?;

        self.get_school_by_id_impl(id).await
    }

    /// 删除学校
    pub async fn delete_school_impl(&self, id: i64) -> Result<bool> {
        let result = Schools::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EduSightError::database_operation(format!("删除学校失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
