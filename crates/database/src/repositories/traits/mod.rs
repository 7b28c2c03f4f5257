//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：仓库实例会在多个请求（多个线程）之间共享
//! - `'static`：仓库作为应用服务长期存活，不依赖短期引用
//!
//! 通过 [`async_trait`] 生成的方法都是对象安全的，因此服务层统一持有
//! `Arc<dyn XxxRepositoryTrait>`，同一套服务代码既可以跑在 PostgreSQL 上，
//! 也可以跑在测试用的 [`crate::MemoryStore`] 上：
//!
//! ```rust,ignore
//! let repos = Repositories::postgres(pool.clone());
//! let project = repos.projects.find_project_by_id(1).await?;
//! ```
//!
//! 查询单条数据的方法统一返回 `DatabaseResult<Option<T>>`，
//! 由服务层决定"不存在"时返回什么错误。

pub mod favorite;
pub mod hashtag;
pub mod library;
pub mod project;
pub mod user;

// 重新导出
pub use favorite::FavoriteRepositoryTrait;
pub use hashtag::HashtagRepositoryTrait;
pub use library::LibraryRepositoryTrait;
pub use project::ProjectRepositoryTrait;
pub use user::UserRepositoryTrait;
