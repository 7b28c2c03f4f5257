//! 项目服务
//!
//! 负责项目的增删改查，并把标签、收藏、依赖库信息组装成返回视图。
//!
//! 列表和分页都是先加载全部数据再在内存中排序、切页，参考 [`crate::services::paging`]。

use crate::auth::Principal;
use crate::models::err::AppError;
use crate::models::projects::{FavoriteView, PagingMode, ProjectDetail, ProjectInput, ProjectResult, ProjectView};
use crate::services::paging::{get_page, list_total_pages, sort_by_mode};
use crate::services::{views, FavoriteService, HashtagService, LibraryService};
use database::{ProjectCreate, ProjectInfo, ProjectUpdate, Repositories};
use shared_lib::PAGE_SIZE;
use tracing::debug;

#[derive(Clone)]
pub struct ProjectService {
    repos: Repositories,
    favorites: FavoriteService,
    hashtags: HashtagService,
    libraries: LibraryService,
}

impl ProjectService {
    pub fn new(repos: Repositories) -> Self {
        Self {
            favorites: FavoriteService::new(repos.clone()),
            hashtags: HashtagService::new(repos.clone()),
            libraries: LibraryService::new(repos.clone()),
            repos,
        }
    }

    /// 创建项目，`owner` 为项目所有者
    ///
    /// 先保存项目，再按顺序保存标签，最后重新读取标签和收藏信息组装返回值
    pub async fn create_project(&self, owner: &Principal, input: ProjectInput) -> Result<ProjectView, AppError> {
        debug!("📝 用户 {} 创建项目 {:#?}", owner.user_id, input);

        views::current_user(&self.repos, owner).await?;
        let project = self
            .repos
            .projects
            .create_project(ProjectCreate {
                user_id: owner.user_id,
                project_name: input.project_name,
                description: input.description,
                is_public: input.is_public,
            })
            .await?;

        self.hashtags
            .attach_project_hashtags(project.id, &input.project_hashtags)
            .await?;

        views::project_view(&self.repos, owner, project).await
    }

    /// 全部公开项目，`total_pages` 向下取整
    pub async fn list_public_projects(&self, viewer: &Principal) -> Result<ProjectResult, AppError> {
        let projects = self.repos.projects.find_public_projects().await?;
        self.to_result(viewer, projects).await
    }

    /// 某个用户的全部项目（包含非公开项目），`total_pages` 向下取整
    pub async fn list_user_projects(&self, viewer: &Principal, user_id: i64) -> Result<ProjectResult, AppError> {
        if self.repos.users.find_user_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(format!("user {user_id}")));
        }

        let projects = self.repos.projects.find_projects_by_user(user_id).await?;
        self.to_result(viewer, projects).await
    }

    /// 项目详情，包含标签、依赖库和收藏信息
    pub async fn get_project(&self, viewer: &Principal, project_id: i64) -> Result<ProjectDetail, AppError> {
        let project = self.find_project(project_id).await?;
        self.to_detail(viewer, project).await
    }

    /// 覆盖更新项目，并用输入的标签整体替换原有标签
    pub async fn update_project(
        &self,
        viewer: &Principal,
        project_id: i64,
        input: ProjectInput,
    ) -> Result<ProjectDetail, AppError> {
        debug!("🔄 更新项目 {} {:#?}", project_id, input);

        self.find_project(project_id).await?;
        let project = self
            .repos
            .projects
            .update_project(
                project_id,
                ProjectUpdate {
                    project_name: input.project_name,
                    description: input.description,
                    is_public: input.is_public,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found(format!("project {project_id}")))?;

        self.hashtags
            .replace_project_hashtags(project.id, &input.project_hashtags)
            .await?;

        self.to_detail(viewer, project).await
    }

    pub async fn delete_project(&self, project_id: i64) -> Result<(), AppError> {
        debug!("🗑️ 删除项目 {}", project_id);

        self.find_project(project_id).await?;
        self.repos.projects.delete_project(project_id).await?;
        Ok(())
    }

    /// 公开项目分页
    pub async fn paging_projects(&self, viewer: &Principal, page: i64, mode: PagingMode) -> Result<ProjectResult, AppError> {
        let all = self.list_public_projects(viewer).await?;
        get_page(sort_by_mode(all.projects, mode), page, PAGE_SIZE)
    }

    /// 某个用户的项目分页
    pub async fn paging_user_projects(
        &self,
        viewer: &Principal,
        user_id: i64,
        page: i64,
        mode: PagingMode,
    ) -> Result<ProjectResult, AppError> {
        let all = self.list_user_projects(viewer, user_id).await?;
        get_page(sort_by_mode(all.projects, mode), page, PAGE_SIZE)
    }

    /// 收藏/取消收藏项目，返回切换后的收藏信息
    pub async fn press_favorite(&self, viewer: &Principal, project_id: i64) -> Result<FavoriteView, AppError> {
        self.find_project(project_id).await?;
        self.favorites.toggle_favorite(viewer, project_id).await
    }

    /// 项目收藏信息
    pub async fn favorite_info(&self, viewer: &Principal, project_id: i64) -> Result<FavoriteView, AppError> {
        self.find_project(project_id).await?;
        self.favorites.project_favorite_info(viewer, project_id).await
    }

    async fn find_project(&self, project_id: i64) -> Result<ProjectInfo, AppError> {
        self.repos
            .projects
            .find_project_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("project {project_id}")))
    }

    async fn to_result(&self, viewer: &Principal, projects: Vec<ProjectInfo>) -> Result<ProjectResult, AppError> {
        let projects = views::project_views(&self.repos, viewer, projects).await?;
        let total_pages = list_total_pages(projects.len(), PAGE_SIZE);
        Ok(ProjectResult { projects, total_pages })
    }

    async fn to_detail(&self, viewer: &Principal, project: ProjectInfo) -> Result<ProjectDetail, AppError> {
        let hashtags = views::project_hashtags(&self.repos, project.id).await?;
        let libraries = self.libraries.libraries_for_project(project.id).await?;
        let favorite = views::favorite_view(&self.repos, viewer, project.id).await?;

        Ok(ProjectDetail::new(project, hashtags, libraries, favorite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::Fixture;
    use database::{LibraryCreate, LibraryRepositoryTrait, Role};

    fn input(name: &str, is_public: bool, tags: &[&str]) -> ProjectInput {
        ProjectInput {
            project_name: name.to_string(),
            description: format!("{name} description"),
            is_public,
            project_hashtags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn names(projects: &[ProjectView]) -> Vec<&str> {
        projects.iter().map(|p| p.project_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_project_returns_full_view() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());

        let view = service
            .create_project(&alice, input("hub", true, &["rust", "axum"]))
            .await
            .unwrap();

        assert_eq!(view.project_name, "hub");
        assert_eq!(view.owner.user_id, alice.user_id);
        assert_eq!(view.project_hashtags, vec!["rust", "axum"]);
        assert_eq!(view.favorite, FavoriteView { favorite_count: 0, is_liked: false });
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_hashtags() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());
        let created = service.create_project(&alice, input("old", true, &["a", "b"])).await.unwrap();

        let updated = service
            .update_project(&alice, created.project_id, input("new", false, &["c"]))
            .await
            .unwrap();

        assert_eq!(updated.project_name, "new");
        assert!(!updated.is_public);
        assert_eq!(updated.project_hashtags, vec!["c"]);
        assert_eq!(
            service.get_project(&alice, created.project_id).await.unwrap().project_hashtags,
            vec!["c"]
        );
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());

        assert!(matches!(service.get_project(&alice, 404).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update_project(&alice, 404, input("x", true, &[])).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete_project(404).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.press_favorite(&alice, 404).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.list_user_projects(&alice, 404).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_owner_leaves_no_project() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());
        let ghost = Principal::new(777, Role::User);

        assert!(matches!(
            service.create_project(&ghost, input("orphan", true, &["x"])).await,
            Err(AppError::Unauthorized(_))
        ));

        let visible = service.create_project(&alice, input("kept", true, &[])).await.unwrap();
        let listed = service.list_public_projects(&alice).await.unwrap();
        assert_eq!(names(&listed.projects), vec!["kept"]);

        assert!(matches!(
            service.press_favorite(&ghost, visible.project_id).await,
            Err(AppError::Unauthorized(_))
        ));
        assert_eq!(service.favorite_info(&alice, visible.project_id).await.unwrap().favorite_count, 0);
    }

    #[tokio::test]
    async fn test_delete_project() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());
        let created = service.create_project(&alice, input("gone", true, &["x"])).await.unwrap();

        service.delete_project(created.project_id).await.unwrap();
        assert!(matches!(
            service.get_project(&alice, created.project_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_project_includes_libraries() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());
        let created = service.create_project(&alice, input("deps", true, &[])).await.unwrap();
        fixture
            .store
            .create_library(LibraryCreate {
                project_id: created.project_id,
                library_name: "sqlx".to_string(),
                version: "0.8".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();

        let detail = service.get_project(&alice, created.project_id).await.unwrap();
        assert_eq!(detail.libraries.len(), 1);
        assert_eq!(detail.libraries[0].library_name, "sqlx");
    }

    #[tokio::test]
    async fn test_list_total_pages_rounds_down_but_paging_rounds_up() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());
        for i in 0..25 {
            service
                .create_project(&alice, input(&format!("p{i}"), true, &[]))
                .await
                .unwrap();
        }
        service.create_project(&alice, input("private", false, &[])).await.unwrap();

        let all = service.list_public_projects(&alice).await.unwrap();
        assert_eq!(all.projects.len(), 25);
        assert_eq!(all.total_pages, 2);

        let last = service.paging_projects(&alice, 3, PagingMode::Latest).await.unwrap();
        assert_eq!(last.total_pages, 3);
        assert_eq!(names(&last.projects), vec!["p4", "p3", "p2", "p1", "p0"]);

        assert!(matches!(
            service.paging_projects(&alice, 4, PagingMode::Latest).await,
            Err(AppError::PageOutOfRange { page: 4, total_pages: 3 })
        ));

        // 用户自己的项目包含非公开项目
        let mine = service.list_user_projects(&alice, alice.user_id).await.unwrap();
        assert_eq!(mine.projects.len(), 26);
    }

    #[tokio::test]
    async fn test_paging_popular_orders_by_favorites() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let fans = [fixture.user("bob").await, fixture.user("carol").await, fixture.user("dave").await];
        let service = ProjectService::new(fixture.repos.clone());

        let mut ids = Vec::new();
        for (name, likes) in [("three", 3), ("one", 1), ("two", 2)] {
            let project = service.create_project(&alice, input(name, true, &[])).await.unwrap();
            for fan in fans.iter().take(likes) {
                service.press_favorite(fan, project.project_id).await.unwrap();
            }
            ids.push(project.project_id);
        }

        let popular = service.paging_projects(&alice, 1, PagingMode::Popular).await.unwrap();
        assert_eq!(names(&popular.projects), vec!["three", "two", "one"]);

        let latest = service.paging_projects(&alice, 1, PagingMode::Latest).await.unwrap();
        assert_eq!(names(&latest.projects), vec!["two", "one", "three"]);

        let info = service.favorite_info(&fans[0], ids[0]).await.unwrap();
        assert_eq!(info, FavoriteView { favorite_count: 3, is_liked: true });
    }

    #[tokio::test]
    async fn test_paging_empty_list_is_out_of_range() {
        let fixture = Fixture::new();
        let alice = fixture.user("alice").await;
        let service = ProjectService::new(fixture.repos.clone());

        assert!(matches!(
            service.paging_user_projects(&alice, alice.user_id, 1, PagingMode::Popular).await,
            Err(AppError::PageOutOfRange { page: 1, total_pages: 0 })
        ));
    }
}
