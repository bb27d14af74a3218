pub mod compute;
pub mod latest;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assessments::requests::{AssessmentListParams, ComputeAssessmentRequest};
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
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

    // 计算并保存一次综合评估
    pub async fn compute_assessment(
        &self,
        student_id: i64,
        compute_request: ComputeAssessmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        compute::compute_assessment(self, student_id, compute_request, request).await
    }

    // 列出学生的评估历史
    pub async fn list_assessments(
        &self,
        student_id: i64,
        query: AssessmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assessments(self, student_id, query, request).await
    }

    // 获取学生最近一次评估
    pub async fn latest_assessment(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        latest::latest_assessment(self, student_id, request).await
    }
}
