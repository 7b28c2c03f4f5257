//! 收藏仓库
//!
//! 负责用户收藏（点赞）项目的数据库操作

use crate::models::favorite::{FavoriteInfo, ToggleOutcome};
use crate::repositories::traits::FavoriteRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

/// 收藏仓库结构体
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    async fn count_favorites_by_project(&self, project_id: i64) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hub.favorites WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn exists_by_user_and_project(&self, user_id: i64, project_id: i64) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM hub.favorites WHERE user_id = $1 AND project_id = $2)",
        )
        .bind(user_id)
        .bind(project_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_favorites_by_user(&self, user_id: i64) -> DatabaseResult<Vec<FavoriteInfo>> {
        let favorites = sqlx::query_as::<_, FavoriteInfo>(
            r#"
            SELECT id, user_id, project_id
            FROM hub.favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    /// 切换收藏状态
    ///
    /// 在一个事务中完成"检查-删除/新增"：
    /// 1. `SELECT ... FOR UPDATE` 锁住用户行，同一用户的切换操作会在这里排队
    /// 2. 尝试删除收藏记录，删除成功即为取消收藏
    /// 3. 否则新增收藏记录，唯一约束 `(user_id, project_id)` 兜底防止重复
    ///
    /// 用户不存在或新增被唯一约束跳过时返回 [`DatabaseError::IntegrityError`]
    async fn toggle_favorite(&self, user_id: i64, project_id: i64) -> DatabaseResult<ToggleOutcome> {
        debug!("⭐ 用户 {} 切换项目 {} 的收藏状态", user_id, project_id);

        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query("SELECT id FROM hub.users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(DatabaseError::integrity(format!("user {user_id} does not exist")));
        }

        let deleted = sqlx::query("DELETE FROM hub.favorites WHERE user_id = $1 AND project_id = $2")
            .bind(user_id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let outcome = if deleted > 0 {
            ToggleOutcome::Unliked
        } else {
            let inserted = sqlx::query(
                r#"
                INSERT INTO hub.favorites (user_id, project_id, created_at)
                VALUES ($1, $2, now())
                ON CONFLICT (user_id, project_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(project_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if inserted == 0 {
                return Err(DatabaseError::integrity(format!(
                    "favorite ({user_id}, {project_id}) appeared while toggling"
                )));
            }
            ToggleOutcome::Liked
        };

        tx.commit().await?;

        debug!("✅ 收藏状态切换完成: {:?}", outcome);
        Ok(outcome)
    }
}
