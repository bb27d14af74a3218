pub mod compute;
pub mod latest;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::careers::requests::ComputeCareerMatchRequest;
use crate::storage::Storage;

pub struct CareerService {
    storage: Option<Arc<dyn Storage>>,
}

impl CareerService {
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

    // 计算并保存一次职业匹配
    pub async fn compute_career_match(
        &self,
        student_id: i64,
        compute_request: ComputeCareerMatchRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        compute::compute_career_match(self, student_id, compute_request, request).await
    }

    // 获取学生最近一次职业匹配
    pub async fn latest_career_match(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        latest::latest_career_match(self, student_id, request).await
    }
}
