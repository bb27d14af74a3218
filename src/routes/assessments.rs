use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::assessments::requests::{AssessmentListParams, ComputeAssessmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::AssessmentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 AssessmentService 实例
static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

// 计算综合评估
pub async fn compute_assessment(
    req: HttpRequest,
    path: SafeStudentIdI64,
    compute_data: web::Json<ComputeAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .compute_assessment(path.0, compute_data.into_inner(), &req)
        .await
}

// 列出评估历史
pub async fn list_assessments(
    req: HttpRequest,
    path: SafeStudentIdI64,
    query: web::Query<AssessmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_assessments(path.0, query.into_inner(), &req)
        .await
}

// 获取最近一次评估
pub async fn latest_assessment(
    req: HttpRequest,
    path: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE.latest_assessment(path.0, &req).await
}

// 配置路由
pub fn configure_assessment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students/{student_id}/assessments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 查看评估历史 - 所有登录用户可访问（业务层做监护人/校域检查）
                    .route(web::get().to(list_assessments))
                    // 计算评估 - 仅教职工
                    .route(
                        web::post()
                            .to(compute_assessment)
                            .wrap(RateLimit::compute())
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(web::resource("/latest").route(web::get().to(latest_assessment))),
    );
}
