//! 内存仓库
//!
//! 所有仓库 trait 的内存实现，数据只存在于进程内。
//!
//! 主要用途：
//! - 服务层和接口层的单元测试，不需要启动 PostgreSQL
//! - 本地快速演示
//!
//! 行为与 PostgreSQL 实现保持一致：
//! - 列表按插入顺序（`id` 递增）返回
//! - 删除项目会级联删除其标签、收藏和依赖库（以及依赖库的标签）
//! - 收藏切换在同一把写锁内完成，天然是串行的

use crate::models::favorite::{FavoriteInfo, ToggleOutcome};
use crate::models::hashtag::{HashtagInfo, HashtagOwner};
use crate::models::library::{LibraryCreate, LibraryInfo};
use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::models::user::{UserCreate, UserInfo};
use crate::repositories::traits::{
    FavoriteRepositoryTrait, HashtagRepositoryTrait, LibraryRepositoryTrait, ProjectRepositoryTrait, UserRepositoryTrait,
};
use crate::DatabaseResult;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
    users: Vec<UserInfo>,
    projects: Vec<ProjectInfo>,
    libraries: Vec<LibraryInfo>,
    hashtags: Vec<HashtagInfo>,
    favorites: Vec<FavoriteInfo>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// 创建时间严格递增，保证按时间排序的结果可预期
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }
}

/// 内存存储，克隆后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for MemoryStore {
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo> {
        let mut tables = self.tables.write().await;
        let info = UserInfo {
            id: tables.next_id(),
            username: user.username,
            email: user.email,
            role: user.role,
        };
        tables.users.push(info.clone());
        Ok(info)
    }

    async fn find_user_by_id(&self, id: i64) -> DatabaseResult<Option<UserInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryStore {
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let mut tables = self.tables.write().await;
        let info = ProjectInfo {
            id: tables.next_id(),
            user_id: project.user_id,
            project_name: project.project_name,
            description: project.description,
            is_public: project.is_public,
            created_at: tables.next_created_at(),
        };
        tables.projects.push(info.clone());
        Ok(info)
    }

    async fn find_project_by_id(&self, id: i64) -> DatabaseResult<Option<ProjectInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn find_public_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().filter(|p| p.is_public).cloned().collect())
    }

    async fn find_projects_by_user(&self, user_id: i64) -> DatabaseResult<Vec<ProjectInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }

    async fn update_project(&self, id: i64, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.project_name = update.project_name;
        project.description = update.description;
        project.is_public = update.is_public;
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        if tables.projects.len() == before {
            return Ok(false);
        }

        let library_ids: Vec<i64> = tables.libraries.iter().filter(|l| l.project_id == id).map(|l| l.id).collect();
        tables.libraries.retain(|l| l.project_id != id);
        tables.favorites.retain(|f| f.project_id != id);
        tables.hashtags.retain(|h| match h.owner {
            HashtagOwner::Project(project_id) => project_id != id,
            HashtagOwner::Library(library_id) => !library_ids.contains(&library_id),
        });
        Ok(true)
    }
}

#[async_trait::async_trait]
impl HashtagRepositoryTrait for MemoryStore {
    async fn create_hashtag(&self, owner: HashtagOwner, content: String) -> DatabaseResult<HashtagInfo> {
        let mut tables = self.tables.write().await;
        let info = HashtagInfo {
            id: tables.next_id(),
            content,
            owner,
        };
        tables.hashtags.push(info.clone());
        Ok(info)
    }

    async fn find_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<Vec<HashtagInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.hashtags.iter().filter(|h| h.owner == owner).cloned().collect())
    }

    async fn delete_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.hashtags.len();
        tables.hashtags.retain(|h| h.owner != owner);
        Ok((before - tables.hashtags.len()) as u64)
    }
}

#[async_trait::async_trait]
impl FavoriteRepositoryTrait for MemoryStore {
    async fn count_favorites_by_project(&self, project_id: i64) -> DatabaseResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.favorites.iter().filter(|f| f.project_id == project_id).count() as i64)
    }

    async fn exists_by_user_and_project(&self, user_id: i64, project_id: i64) -> DatabaseResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.project_id == project_id))
    }

    async fn find_favorites_by_user(&self, user_id: i64) -> DatabaseResult<Vec<FavoriteInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.favorites.iter().filter(|f| f.user_id == user_id).cloned().collect())
    }

    async fn toggle_favorite(&self, user_id: i64, project_id: i64) -> DatabaseResult<ToggleOutcome> {
        let mut tables = self.tables.write().await;
        let position = tables
            .favorites
            .iter()
            .position(|f| f.user_id == user_id && f.project_id == project_id);

        match position {
            Some(index) => {
                tables.favorites.remove(index);
                Ok(ToggleOutcome::Unliked)
            }
            None => {
                let id = tables.next_id();
                tables.favorites.push(FavoriteInfo { id, user_id, project_id });
                Ok(ToggleOutcome::Liked)
            }
        }
    }
}

#[async_trait::async_trait]
impl LibraryRepositoryTrait for MemoryStore {
    async fn create_library(&self, library: LibraryCreate) -> DatabaseResult<LibraryInfo> {
        let mut tables = self.tables.write().await;
        let info = LibraryInfo {
            id: tables.next_id(),
            project_id: library.project_id,
            library_name: library.library_name,
            version: library.version,
            description: library.description,
            created_at: tables.next_created_at(),
        };
        tables.libraries.push(info.clone());
        Ok(info)
    }

    async fn find_library_by_id(&self, id: i64) -> DatabaseResult<Option<LibraryInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.libraries.iter().find(|l| l.id == id).cloned())
    }

    async fn find_libraries_by_project(&self, project_id: i64) -> DatabaseResult<Vec<LibraryInfo>> {
        let tables = self.tables.read().await;
        Ok(tables.libraries.iter().filter(|l| l.project_id == project_id).cloned().collect())
    }

    async fn count_libraries_by_name(&self, library_name: &str) -> DatabaseResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.libraries.iter().filter(|l| l.library_name == library_name).count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    async fn seed_project(store: &MemoryStore, user_id: i64, is_public: bool) -> ProjectInfo {
        store
            .create_project(ProjectCreate {
                user_id,
                project_name: "demo".to_string(),
                description: String::new(),
                is_public,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_created_at_is_strictly_increasing() {
        let store = MemoryStore::new();
        let first = seed_project(&store, 1, true).await;
        let second = seed_project(&store, 1, true).await;
        assert!(second.created_at > first.created_at);
    }

    #[tokio::test]
    async fn test_public_projects_filter_private() {
        let store = MemoryStore::new();
        let public = seed_project(&store, 1, true).await;
        seed_project(&store, 1, false).await;

        let projects = store.find_public_projects().await.unwrap();
        assert_eq!(projects, vec![public]);
        assert_eq!(store.find_projects_by_user(1).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_never_duplicates() {
        let store = MemoryStore::new();
        let user = store
            .create_user(UserCreate {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role: Role::User,
            })
            .await
            .unwrap();
        let project = seed_project(&store, user.id, true).await;

        assert_eq!(store.toggle_favorite(user.id, project.id).await.unwrap(), ToggleOutcome::Liked);
        assert_eq!(store.count_favorites_by_project(project.id).await.unwrap(), 1);
        assert_eq!(store.toggle_favorite(user.id, project.id).await.unwrap(), ToggleOutcome::Unliked);
        assert_eq!(store.count_favorites_by_project(project.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let store = MemoryStore::new();
        let project = seed_project(&store, 1, true).await;
        let library = store
            .create_library(LibraryCreate {
                project_id: project.id,
                library_name: "serde".to_string(),
                version: "1.0".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        store
            .create_hashtag(HashtagOwner::Project(project.id), "rust".to_string())
            .await
            .unwrap();
        store
            .create_hashtag(HashtagOwner::Library(library.id), "json".to_string())
            .await
            .unwrap();
        store.toggle_favorite(1, project.id).await.unwrap();

        assert!(store.delete_project(project.id).await.unwrap());
        assert!(!store.delete_project(project.id).await.unwrap());

        assert!(store.find_library_by_id(library.id).await.unwrap().is_none());
        assert!(store
            .find_hashtags_by_owner(HashtagOwner::Project(project.id))
            .await
            .unwrap()
            .is_empty());
        assert!(store
            .find_hashtags_by_owner(HashtagOwner::Library(library.id))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(store.count_favorites_by_project(project.id).await.unwrap(), 0);
    }
}
