//! 收藏（点赞）数据库模型

/// 一条收藏记录，同一用户对同一项目最多存在一条
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FavoriteInfo {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
}

/// 切换收藏状态的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// 之前未收藏，已新增收藏记录
    Liked,
    /// 之前已收藏，已删除收藏记录
    Unliked,
}

impl ToggleOutcome {
    pub fn is_liked(&self) -> bool {
        matches!(self, ToggleOutcome::Liked)
    }
}
