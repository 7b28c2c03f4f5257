//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod favorite;
pub mod hashtag;
pub mod library;
pub mod project;
pub mod traits;
pub mod user;

use crate::memory::MemoryStore;
use sqlx::PgPool;
use std::sync::Arc;

// 重新导出具体的类型
pub use favorite::FavoriteRepository;
pub use hashtag::HashtagRepository;
pub use library::LibraryRepository;
pub use project::ProjectRepository;
pub use traits::{
    FavoriteRepositoryTrait, HashtagRepositoryTrait, LibraryRepositoryTrait, ProjectRepositoryTrait, UserRepositoryTrait,
};
pub use user::UserRepository;

/// 服务层使用的全部仓库
///
/// 每个仓库都是 trait object，方便在 PostgreSQL 和内存实现之间切换
#[derive(Clone)]
pub struct Repositories {
    pub projects: Arc<dyn ProjectRepositoryTrait>,
    pub hashtags: Arc<dyn HashtagRepositoryTrait>,
    pub favorites: Arc<dyn FavoriteRepositoryTrait>,
    pub libraries: Arc<dyn LibraryRepositoryTrait>,
    pub users: Arc<dyn UserRepositoryTrait>,
}

impl Repositories {
    /// 基于 PostgreSQL 连接池创建全部仓库
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            projects: Arc::new(ProjectRepository::new(pool.clone())),
            hashtags: Arc::new(HashtagRepository::new(pool.clone())),
            favorites: Arc::new(FavoriteRepository::new(pool.clone())),
            libraries: Arc::new(LibraryRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool)),
        }
    }

    /// 基于内存存储创建全部仓库，所有仓库共享同一份数据
    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            projects: Arc::new(store.clone()),
            hashtags: Arc::new(store.clone()),
            favorites: Arc::new(store.clone()),
            libraries: Arc::new(store.clone()),
            users: Arc::new(store),
        }
    }
}
