//! 收藏仓库 trait 定义

use crate::models::favorite::{FavoriteInfo, ToggleOutcome};
use crate::DatabaseResult;

/// 收藏仓库trait定义
#[async_trait::async_trait]
pub trait FavoriteRepositoryTrait: Send + Sync + 'static {
    /// 统计项目的收藏数量
    async fn count_favorites_by_project(&self, project_id: i64) -> DatabaseResult<i64>;

    /// 用户是否收藏了该项目
    async fn exists_by_user_and_project(&self, user_id: i64, project_id: i64) -> DatabaseResult<bool>;

    /// 查询用户的全部收藏记录，按收藏顺序返回
    async fn find_favorites_by_user(&self, user_id: i64) -> DatabaseResult<Vec<FavoriteInfo>>;

    /// 切换收藏状态：已收藏则删除，未收藏则新增
    ///
    /// 实现必须保证同一用户的并发切换是串行的，
    /// 不能出现重复收藏或者丢失更新。
    async fn toggle_favorite(&self, user_id: i64, project_id: i64) -> DatabaseResult<ToggleOutcome>;
}
