use std::sync::Arc;

use crate::models::{
    assessments::{
        entities::Assessment,
        requests::AssessmentListQuery,
        responses::AssessmentListResponse,
    },
    careers::entities::CareerMatch,
    documents::{
        entities::{Document, DocumentStatus},
        requests::DocumentListQuery,
        responses::DocumentListResponse,
    },
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, SchoolListQuery, UpdateSchoolRequest},
        responses::SchoolListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 新建文档记录的写入参数
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub student_id: i64,
    pub uploader_id: i64,
    pub download_token: String,
    pub original_name: String,
    pub stored_name: String,
    pub file_type: String,
    pub file_size: i64,
}

/// 新建评估记录的写入参数
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub student_id: i64,
    pub assessed_by: i64,
    pub academic_score: Option<f64>,
    pub psychological_score: Option<f64>,
    pub physical_score: Option<f64>,
    pub composite_score: f64,
    pub risk_level: String,
    pub recommendations_json: String,
    pub source_document_id: Option<i64>,
}

/// 新建职业匹配记录的写入参数
#[derive(Debug, Clone)]
pub struct NewCareerMatch {
    pub student_id: i64,
    pub generated_by: i64,
    pub traits_json: String,
    pub matches_json: String,
    pub top_career: String,
    pub top_score: f64,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学校管理方法
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School>;
    async fn get_school_by_id(&self, id: i64) -> Result<Option<School>>;
    async fn get_school_by_code(&self, code: &str) -> Result<Option<School>>;
    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse>;
    async fn update_school(&self, id: i64, update: UpdateSchoolRequest) -> Result<Option<School>>;
    async fn delete_school(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_admission_number(
        &self,
        school_id: i64,
        admission_number: &str,
    ) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 文档管理方法
    async fn create_document(&self, document: NewDocument) -> Result<Document>;
    async fn get_document_by_token(&self, download_token: &str) -> Result<Option<Document>>;
    async fn list_documents_with_pagination(
        &self,
        query: DocumentListQuery,
    ) -> Result<DocumentListResponse>;
    // 写回提取结果
    async fn update_document_extraction(
        &self,
        id: i64,
        status: DocumentStatus,
        extracted_json: Option<String>,
        quality_score: Option<f64>,
    ) -> Result<Option<Document>>;

    /// 评估管理方法
    async fn create_assessment(&self, assessment: NewAssessment) -> Result<Assessment>;
    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListQuery,
    ) -> Result<AssessmentListResponse>;
    async fn get_latest_assessment(&self, student_id: i64) -> Result<Option<Assessment>>;

    /// 职业匹配管理方法
    async fn create_career_match(&self, career_match: NewCareerMatch) -> Result<CareerMatch>;
    async fn get_latest_career_match(&self, student_id: i64) -> Result<Option<CareerMatch>>;
}

/// 创建存储后端实例
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
