//! 收藏服务
//!
//! 记录用户收藏了哪些项目，并据此计算项目的收藏数以及当前用户是否已收藏

use crate::auth::Principal;
use crate::models::err::AppError;
use crate::models::projects::{FavoriteView, ProjectView};
use crate::services::views;
use database::Repositories;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct FavoriteService {
    repos: Repositories,
}

impl FavoriteService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// 项目收藏信息，只读
    pub async fn project_favorite_info(&self, viewer: &Principal, project_id: i64) -> Result<FavoriteView, AppError> {
        views::favorite_view(&self.repos, viewer, project_id).await
    }

    /// 当前用户收藏的全部项目（不分页），按收藏顺序返回
    pub async fn user_favorite_info(&self, viewer: &Principal) -> Result<Vec<ProjectView>, AppError> {
        debug!("⭐ 查询用户 {} 的收藏", viewer.user_id);

        let favorites = self.repos.favorites.find_favorites_by_user(viewer.user_id).await?;

        let mut projects = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            match self.repos.projects.find_project_by_id(favorite.project_id).await? {
                Some(project) => projects.push(views::project_view(&self.repos, viewer, project).await?),
                None => warn!("⚠️ 收藏记录 {} 指向不存在的项目 {}", favorite.id, favorite.project_id),
            }
        }

        Ok(projects)
    }

    /// 切换收藏状态：已收藏则取消，未收藏则收藏
    ///
    /// 返回切换后的收藏信息
    pub async fn toggle_favorite(&self, viewer: &Principal, project_id: i64) -> Result<FavoriteView, AppError> {
        views::current_user(&self.repos, viewer).await?;

        let outcome = self.repos.favorites.toggle_favorite(viewer.user_id, project_id).await?;
        debug!("⭐ 用户 {} 对项目 {} 已收藏: {}", viewer.user_id, project_id, outcome.is_liked());

        self.project_favorite_info(viewer, project_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::Fixture;
    use database::{FavoriteRepositoryTrait, ProjectCreate, ProjectInfo, ProjectRepositoryTrait};

    async fn project(fixture: &Fixture, owner: &Principal, name: &str) -> ProjectInfo {
        fixture
            .store
            .create_project(ProjectCreate {
                user_id: owner.user_id,
                project_name: name.to_string(),
                description: String::new(),
                is_public: true,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_count_matches_rows_after_toggles() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let bob = fixture.user("bob").await;
        let carol = fixture.user("carol").await;
        let target = project(&fixture, &alice, "target").await;
        let service = FavoriteService::new(fixture.repos.clone());

        for viewer in [&alice, &bob, &carol, &bob] {
            service.toggle_favorite(viewer, target.id).await.unwrap();
        }

        let rows = fixture.store.count_favorites_by_project(target.id).await.unwrap();
        let info = service.project_favorite_info(&alice, target.id).await.unwrap();
        assert_eq!(rows, 2);
        assert_eq!(info.favorite_count, rows);
        assert!(info.is_liked);
        assert!(!service.project_favorite_info(&bob, target.id).await.unwrap().is_liked);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let bob = fixture.user("bob").await;
        let target = project(&fixture, &alice, "target").await;
        let service = FavoriteService::new(fixture.repos.clone());
        service.toggle_favorite(&alice, target.id).await.unwrap();

        let before = service.project_favorite_info(&bob, target.id).await.unwrap();
        let liked = service.toggle_favorite(&bob, target.id).await.unwrap();
        assert_eq!(liked, FavoriteView { favorite_count: 2, is_liked: true });

        let after = service.toggle_favorite(&bob, target.id).await.unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_concurrent_toggles_stay_consistent() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let target = project(&fixture, &alice, "target").await;
        let service = FavoriteService::new(fixture.repos.clone());
        let project_id = target.id;

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.toggle_favorite(&alice, project_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // 偶数次切换后回到未收藏
        let info = service.project_favorite_info(&alice, target.id).await.unwrap();
        assert_eq!(info, FavoriteView { favorite_count: 0, is_liked: false });
    }

    #[tokio::test]
    async fn test_user_favorite_info_lists_liked_projects() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let bob = fixture.user("bob").await;
        let first = project(&fixture, &alice, "first").await;
        let second = project(&fixture, &alice, "second").await;
        project(&fixture, &alice, "ignored").await;
        let service = FavoriteService::new(fixture.repos.clone());

        service.toggle_favorite(&bob, second.id).await.unwrap();
        service.toggle_favorite(&bob, first.id).await.unwrap();

        let liked = service.user_favorite_info(&bob).await.unwrap();
        let names: Vec<_> = liked.iter().map(|p| p.project_name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert!(liked.iter().all(|p| p.favorite.is_liked && p.owner.username == "alice"));

        fixture.store.delete_project(second.id).await.unwrap();
        assert_eq!(service.user_favorite_info(&bob).await.unwrap().len(), 1);
    }
}
