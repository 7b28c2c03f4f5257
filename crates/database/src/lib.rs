//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询等功能。
//!
//! 除了基于 PostgreSQL 的仓库实现外，还提供了一个内存版本 [`memory::MemoryStore`]，
//! 主要用于服务层和接口层的测试。

pub mod connection;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use memory::MemoryStore;
pub use models::{
    FavoriteInfo, HashtagInfo, HashtagOwner, LibraryCreate, LibraryInfo, ProjectCreate, ProjectInfo, ProjectUpdate, Role,
    ToggleOutcome, UserCreate, UserInfo,
};
pub use repositories::traits::{
    FavoriteRepositoryTrait, HashtagRepositoryTrait, LibraryRepositoryTrait, ProjectRepositoryTrait, UserRepositoryTrait,
};
pub use repositories::{
    FavoriteRepository, HashtagRepository, LibraryRepository, ProjectRepository, Repositories, UserRepository,
};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
