use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::careers::requests::ComputeCareerMatchRequest;
use crate::models::users::entities::UserRole;
use crate::services::CareerService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 CareerService 实例
static CAREER_SERVICE: Lazy<CareerService> = Lazy::new(CareerService::new_lazy);

// 计算职业匹配
pub async fn compute_career_match(
    req: HttpRequest,
    path: SafeStudentIdI64,
    compute_data: web::Json<ComputeCareerMatchRequest>,
) -> ActixResult<HttpResponse> {
    CAREER_SERVICE
        .compute_career_match(path.0, compute_data.into_inner(), &req)
        .await
}

// 获取最近一次职业匹配
pub async fn latest_career_match(
    req: HttpRequest,
    path: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    CAREER_SERVICE.latest_career_match(path.0, &req).await
}

// 配置路由
pub fn configure_career_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students/{student_id}/career-matches")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 计算职业匹配 - 仅教职工
                    .route(
                        web::post()
                            .to(compute_career_match)
                            .wrap(RateLimit::compute())
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            // 查看最近匹配 - 所有登录用户可访问（业务层做监护人/校域检查）
            .service(web::resource("/latest").route(web::get().to(latest_career_match))),
    );
}
