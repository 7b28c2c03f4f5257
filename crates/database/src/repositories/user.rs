//! 用户仓库

use crate::models::user::{Role, UserCreate, UserInfo};
use crate::repositories::traits::UserRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::PgPool;

/// 用户仓库结构体
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    role: String,
}

impl TryFrom<UserRow> for UserInfo {
    type Error = DatabaseError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserInfo {
            id: row.id,
            username: row.username,
            email: row.email,
            role: row.role.parse::<Role>().map_err(DatabaseError::integrity)?,
        })
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO hub.users (username, email, role, created_at)
            VALUES ($1, $2, $3, now())
            RETURNING id, username, email, role;
            "#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_user_by_id(&self, id: i64) -> DatabaseResult<Option<UserInfo>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username, email, role FROM hub.users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserInfo::try_from).transpose()
    }
}
