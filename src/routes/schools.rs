use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schools::requests::{
    CreateSchoolRequest, SchoolListParams, UpdateSchoolRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SchoolService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SchoolService 实例
static SCHOOL_SERVICE: Lazy<SchoolService> = Lazy::new(SchoolService::new_lazy);

// 列出学校
pub async fn list_schools(
    req: HttpRequest,
    query: web::Query<SchoolListParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.list_schools(query.into_inner(), &req).await
}

// 创建学校
pub async fn create_school(
    req: HttpRequest,
    school_data: web::Json<CreateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .create_school(school_data.into_inner(), &req)
        .await
}

// 获取学校详情
pub async fn get_school(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.get_school(path.0, &req).await
}

// 更新学校
pub async fn update_school(
    req: HttpRequest,
    path: SafeIDI64,
    school_data: web::Json<UpdateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .update_school(path.0, school_data.into_inner(), &req)
        .await
}

// 删除学校
pub async fn delete_school(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.delete_school(path.0, &req).await
}

// 配置路由
pub fn configure_school_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出学校 - 教职工（业务层将非管理员收窄到本校）
                    .route(
                        web::get()
                            .to(list_schools)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    // 创建学校 - 仅平台管理员
                    .route(
                        web::post()
                            .to(create_school)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取学校详情 - 所有登录用户可访问（业务层做校域检查）
                    .route(web::get().to(get_school))
                    // 更新学校 - 平台管理员或本校管理员
                    .route(web::put().to(update_school).wrap(
                        middlewares::RequireRole::new_any(UserRole::school_admin_roles()),
                    ))
                    // 删除学校 - 仅平台管理员
                    .route(
                        web::delete()
                            .to(delete_school)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
