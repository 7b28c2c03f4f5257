//! 收藏相关接口

use crate::auth::Principal;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::projects::{FavoriteView, ProjectView};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// 收藏/取消收藏项目
///
/// 已收藏则取消，未收藏则收藏，返回切换后的收藏信息
#[utoipa::path(post,
    path = "/projects/{id}/favorite",
    tag = "favorites",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Favorite state after toggling", body = Reply<FavoriteView>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn press_favorite(
    State(state): State<AppState>,
    principal: Principal,
    Path(project_id): Path<i64>,
) -> Result<Json<Reply<FavoriteView>>, AppError> {
    let favorite = state.project_service.press_favorite(&principal, project_id).await?;
    Ok(Json(Reply::new(favorite)))
}

/// 项目收藏信息
#[utoipa::path(get,
    path = "/projects/{id}/favorite",
    tag = "favorites",
    params(("id" = i64, Path, description = "项目ID")),
    responses(
        (status = 200, description = "Favorite count and liked state", body = Reply<FavoriteView>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn project_favorite_info(
    State(state): State<AppState>,
    principal: Principal,
    Path(project_id): Path<i64>,
) -> Result<Json<Reply<FavoriteView>>, AppError> {
    let favorite = state.project_service.favorite_info(&principal, project_id).await?;
    Ok(Json(Reply::new(favorite)))
}

/// 当前用户收藏的全部项目
#[utoipa::path(get,
    path = "/favorites",
    tag = "favorites",
    responses(
        (status = 200, description = "Projects liked by the current user", body = Reply<Vec<ProjectView>>)
    )
)]
pub async fn user_favorite_info(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Reply<Vec<ProjectView>>>, AppError> {
    let projects = state.favorite_service.user_favorite_info(&principal).await?;
    Ok(Json(Reply::new(projects)))
}
