//! 服务层模块
//!
//! 包含业务逻辑的服务层实现。服务只依赖 [`database::Repositories`] 中的仓库 trait，
//! 当前用户 [`crate::auth::Principal`] 由调用方显式传入。

pub mod favorite;
pub mod hashtag;
pub mod library;
pub mod paging;
pub mod project;
mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use favorite::FavoriteService;
pub use hashtag::HashtagService;
pub use library::LibraryService;
pub use project::ProjectService;
