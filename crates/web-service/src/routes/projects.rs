//! 项目相关接口
//!

use crate::auth::Principal;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::projects::{PagingQuery, ProjectDetail, ProjectInput, ProjectResult, ProjectView};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 创建项目
///
/// 根据用户输入参数创建项目信息，当前用户即为项目所有者。
///
/// ## Json化
///
/// 通过`Json(input): Json<ProjectInput>`这种语法，框架能自动将body数据反序列化为[`ProjectInput`]对象，如果
/// 反序列化失败会直接返回4xx错误。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Create project result", body = Reply<ProjectView>)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    principal: Principal,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Reply<ProjectView>>, AppError> {
    debug!("Creating project {:#?}", input);

    // 验证输入参数，确保有效性
    input.validate()?;

    let project = state.project_service.create_project(&principal, input).await?;
    Ok(Json(Reply::new(project)))
}

/// 全部公开项目
///
/// 返回全部数据，`total_pages` 为向下取整的页数
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All public projects", body = Reply<ProjectResult>)
    )
)]
pub async fn list_public_projects(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Reply<ProjectResult>>, AppError> {
    let result = state.project_service.list_public_projects(&principal).await?;
    Ok(Json(Reply::new(result)))
}

/// 公开项目分页
///
/// 按 `mode` 排序后取第 `page` 页（从 1 开始，每页 10 条）
#[utoipa::path(get,
    path = "/projects/page/{page}",
    tag = "projects",
    params(("page" = i64, Path, description = "页码，从 1 开始"), PagingQuery),
    responses(
        (status = 200, description = "One page of public projects", body = Reply<ProjectResult>),
        (status = 400, description = "Page out of range")
    )
)]
pub async fn paging_projects(
    State(state): State<AppState>,
    principal: Principal,
    Path(page): Path<i64>,
    Query(query): Query<PagingQuery>,
) -> Result<Json<Reply<ProjectResult>>, AppError> {
    debug!("Paging public projects page {} mode {:?}", page, query.mode);

    let result = state.project_service.paging_projects(&principal, page, query.mode).await?;
    Ok(Json(Reply::new(result)))
}

/// 当前用户的全部项目（包含非公开项目）
#[utoipa::path(get,
    path = "/me/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects of the current user", body = Reply<ProjectResult>)
    )
)]
pub async fn list_my_projects(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Reply<ProjectResult>>, AppError> {
    let result = state
        .project_service
        .list_user_projects(&principal, principal.user_id)
        .await?;
    Ok(Json(Reply::new(result)))
}

/// 当前用户的项目分页
#[utoipa::path(get,
    path = "/me/projects/page/{page}",
    tag = "projects",
    params(("page" = i64, Path, description = "页码，从 1 开始"), PagingQuery),
    responses(
        (status = 200, description = "One page of the current user's projects", body = Reply<ProjectResult>),
        (status = 400, description = "Page out of range")
    )
)]
pub async fn paging_my_projects(
    State(state): State<AppState>,
    principal: Principal,
    Path(page): Path<i64>,
    Query(query): Query<PagingQuery>,
) -> Result<Json<Reply<ProjectResult>>, AppError> {
    let result = state
        .project_service
        .paging_user_projects(&principal, principal.user_id, page, query.mode)
        .await?;
    Ok(Json(Reply::new(result)))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Project detail", body = Reply<ProjectDetail>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    principal: Principal,
    Path(project_id): Path<i64>,
) -> Result<Json<Reply<ProjectDetail>>, AppError> {
    debug!("Getting project id {:#?}", project_id);

    let project = state.project_service.get_project(&principal, project_id).await?;
    Ok(Json(Reply::new(project)))
}

/// 更新项目信息
///
/// 覆盖项目的全部字段，`project_hashtags` 会整体替换原有标签。
#[utoipa::path(put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "项目ID")),
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Updated project", body = Reply<ProjectDetail>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    principal: Principal,
    Path(project_id): Path<i64>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Reply<ProjectDetail>>, AppError> {
    debug!("Updating project {} with {:#?}", project_id, input);

    input.validate()?;

    let project = state
        .project_service
        .update_project(&principal, project_id, input)
        .await?;
    Ok(Json(Reply::new(project)))
}

/// 删除指定的项目
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    _principal: Principal,
    Path(project_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("delete project {:#?}", project_id);

    state.project_service.delete_project(project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
