//! 组装项目视图
//!
//! 项目列表、收藏列表都需要把项目、所有者、标签和收藏信息拼成 [`ProjectView`]

use crate::auth::Principal;
use crate::models::err::AppError;
use crate::models::projects::{FavoriteView, OwnerView, ProjectView};
use database::{HashtagOwner, ProjectInfo, Repositories, UserInfo};

/// 确认当前用户仍在用户表中，写操作前调用，避免留下无主数据
pub(crate) async fn current_user(repos: &Repositories, principal: &Principal) -> Result<UserInfo, AppError> {
    repos
        .users
        .find_user_by_id(principal.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized(format!("unknown user {}", principal.user_id)))
}

/// 项目的收藏数量以及当前用户是否已收藏
pub(crate) async fn favorite_view(repos: &Repositories, viewer: &Principal, project_id: i64) -> Result<FavoriteView, AppError> {
    let favorite_count = repos.favorites.count_favorites_by_project(project_id).await?;
    let is_liked = repos.favorites.exists_by_user_and_project(viewer.user_id, project_id).await?;

    Ok(FavoriteView { favorite_count, is_liked })
}

/// 项目标签内容，按插入顺序
pub(crate) async fn project_hashtags(repos: &Repositories, project_id: i64) -> Result<Vec<String>, AppError> {
    let tags = repos.hashtags.find_hashtags_by_owner(HashtagOwner::Project(project_id)).await?;
    Ok(tags.into_iter().map(|t| t.content).collect())
}

pub(crate) async fn project_view(repos: &Repositories, viewer: &Principal, project: ProjectInfo) -> Result<ProjectView, AppError> {
    let owner = repos
        .users
        .find_user_by_id(project.user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("user {}", project.user_id)))?;
    let hashtags = project_hashtags(repos, project.id).await?;
    let favorite = favorite_view(repos, viewer, project.id).await?;

    Ok(ProjectView::new(project, OwnerView::from(owner), hashtags, favorite))
}

/// 逐个组装项目视图，保持输入顺序
pub(crate) async fn project_views(
    repos: &Repositories,
    viewer: &Principal,
    projects: Vec<ProjectInfo>,
) -> Result<Vec<ProjectView>, AppError> {
    let mut views = Vec::with_capacity(projects.len());
    for project in projects {
        views.push(project_view(repos, viewer, project).await?);
    }
    Ok(views)
}
