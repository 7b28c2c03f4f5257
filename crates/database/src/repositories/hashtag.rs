//! 标签仓库
//!
//! 负责项目/依赖库标签的数据库操作

use crate::models::hashtag::{HashtagInfo, HashtagOwner, HashtagRow};
use crate::repositories::traits::HashtagRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 标签仓库结构体
#[derive(Debug, Clone)]
pub struct HashtagRepository {
    pool: PgPool,
}

impl HashtagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl HashtagRepositoryTrait for HashtagRepository {
    async fn create_hashtag(&self, owner: HashtagOwner, content: String) -> DatabaseResult<HashtagInfo> {
        debug!("🏷️ 新增标签 {:?} -> {}", owner, content);

        let (project_id, library_id) = owner.as_columns();
        let row = sqlx::query_as::<_, HashtagRow>(
            r#"
            INSERT INTO hub.hashtags (content, project_id, library_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, project_id, library_id;
            "#,
        )
        .bind(content)
        .bind(project_id)
        .bind(library_id)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<Vec<HashtagInfo>> {
        // 只匹配所有者对应的一列，走 project_id / library_id 上的索引
        let query = match owner {
            HashtagOwner::Project(_) => {
                "SELECT id, content, project_id, library_id FROM hub.hashtags WHERE project_id = $1 ORDER BY id"
            }
            HashtagOwner::Library(_) => {
                "SELECT id, content, project_id, library_id FROM hub.hashtags WHERE library_id = $1 ORDER BY id"
            }
        };
        let rows = sqlx::query_as::<_, HashtagRow>(query)
            .bind(owner.id())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(HashtagInfo::try_from).collect()
    }

    async fn delete_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<u64> {
        debug!("🗑️ 删除 {:?} 的全部标签", owner);

        let query = match owner {
            HashtagOwner::Project(_) => "DELETE FROM hub.hashtags WHERE project_id = $1",
            HashtagOwner::Library(_) => "DELETE FROM hub.hashtags WHERE library_id = $1",
        };
        let result = sqlx::query(query).bind(owner.id()).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
