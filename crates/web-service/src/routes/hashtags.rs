//! 标签和依赖库统计接口

use crate::auth::Principal;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::hashtags::{HashtagSearch, HashtagView, LibraryCount};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;

/// 项目标签
///
/// 传入 `content` 时只返回包含该子串的标签（大小写敏感）
#[utoipa::path(get,
    path = "/projects/{id}/hashtags",
    tag = "hashtags",
    params(("id" = i64, Path, description = "项目ID"), HashtagSearch),
    responses(
        (status = 200, description = "Project hashtags", body = Reply<Vec<HashtagView>>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn project_hashtags(
    State(state): State<AppState>,
    _principal: Principal,
    Path(project_id): Path<i64>,
    Query(search): Query<HashtagSearch>,
) -> Result<Json<Reply<Vec<HashtagView>>>, AppError> {
    let tags = match search.content {
        Some(content) => state.hashtag_service.search_in_project(project_id, &content).await?,
        None => state.hashtag_service.tags_for_project(project_id).await?,
    };
    Ok(Json(Reply::new(tags)))
}

/// 依赖库标签
#[utoipa::path(get,
    path = "/libraries/{id}/hashtags",
    tag = "hashtags",
    params(("id" = i64, Path, description = "依赖库ID"), HashtagSearch),
    responses(
        (status = 200, description = "Library hashtags", body = Reply<Vec<HashtagView>>),
        (status = 404, description = "Library not found")
    )
)]
pub async fn library_hashtags(
    State(state): State<AppState>,
    _principal: Principal,
    Path(library_id): Path<i64>,
    Query(search): Query<HashtagSearch>,
) -> Result<Json<Reply<Vec<HashtagView>>>, AppError> {
    let tags = match search.content {
        Some(content) => state.hashtag_service.search_in_library(library_id, &content).await?,
        None => state.hashtag_service.tags_for_library(library_id).await?,
    };
    Ok(Json(Reply::new(tags)))
}

/// 依赖库被使用的次数
///
/// 公开接口，不需要令牌
#[utoipa::path(get,
    path = "/library-count/{name}",
    tag = "libraries",
    params(("name" = String, Path, description = "依赖库名称")),
    responses(
        (status = 200, description = "Usage count", body = Reply<LibraryCount>)
    )
)]
pub async fn library_count(
    State(state): State<AppState>,
    Path(library_name): Path<String>,
) -> Result<Json<Reply<LibraryCount>>, AppError> {
    let count = state.library_service.count_by_name(&library_name).await?;
    Ok(Json(Reply::new(count)))
}
