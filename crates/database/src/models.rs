//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod favorite;
pub mod hashtag;
pub mod library;
pub mod project;
pub mod user;

// 重新导出具体的模型
pub use favorite::{FavoriteInfo, ToggleOutcome};
pub use hashtag::{HashtagInfo, HashtagOwner};
pub use library::{LibraryCreate, LibraryInfo};
pub use project::{ProjectCreate, ProjectInfo, ProjectUpdate};
pub use user::{Role, UserCreate, UserInfo};
