//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::favorites::{__path_press_favorite, __path_project_favorite_info, __path_user_favorite_info};
use crate::routes::favorites::{press_favorite, project_favorite_info, user_favorite_info};
use crate::routes::hashtags::{__path_library_count, __path_library_hashtags, __path_project_hashtags};
use crate::routes::hashtags::{library_count, library_hashtags, project_hashtags};
use crate::routes::projects::{
    __path_create_project, __path_delete_project, __path_get_project, __path_list_my_projects,
    __path_list_public_projects, __path_paging_my_projects, __path_paging_projects, __path_update_project,
};
use crate::routes::projects::{
    create_project, delete_project, get_project, list_my_projects, list_public_projects, paging_my_projects,
    paging_projects, update_project,
};
use crate::AppState;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod favorites;
pub mod hashtags;
pub mod projects;

/// 导出当前App的所有业务路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放各个服务和令牌密钥。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口。
/// 不能这样定义：
///
/// ```rust,ignore
/// routes!(get, get, post)
/// ```
///
/// 需要拆开定义
///
/// ```rust,ignore
/// routes!(get, post)
/// .routes!(get)
/// ```
///
/// 除了 `library_count` 外，所有接口都需要携带令牌，参考 [`crate::auth`]。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_public_projects, create_project))
        .routes(routes!(get_project, update_project, delete_project))
        .routes(routes!(paging_projects))
        .routes(routes!(list_my_projects))
        .routes(routes!(paging_my_projects))
        .routes(routes!(project_favorite_info, press_favorite))
        .routes(routes!(user_favorite_info))
        .routes(routes!(project_hashtags))
        .routes(routes!(library_hashtags))
        .routes(routes!(library_count))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由，业务接口统一挂在 `/api/v1` 下
/// - 使用Scalar作为最终在线文档格式，挂在 `/docs`
/// - 健康检查 `/health`
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "libraryhub", description = r#"
LibraryHub 后端，覆盖场景：

- 项目的创建、更新、删除和分页浏览
- 项目/依赖库标签搜索
- 项目收藏
            "#)
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .route("/health", get(health_check))
        .merge(Scalar::with_url("/docs", api))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "libraryhub"
    }))
}
