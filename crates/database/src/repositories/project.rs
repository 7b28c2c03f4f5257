//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let project_info = sqlx::query_as::<_, ProjectInfo>(
            r#"
            INSERT INTO hub.projects (user_id, project_name, description, is_public, created_at, updated_at)
            VALUES ($1, $2, $3, $4, now(), now())
            RETURNING id, user_id, project_name, description, is_public, created_at;
            "#,
        )
        .bind(project.user_id)
        .bind(project.project_name)
        .bind(project.description)
        .bind(project.is_public)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: {:#?}", project_info);
        Ok(project_info)
    }

    async fn find_project_by_id(&self, id: i64) -> DatabaseResult<Option<ProjectInfo>> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, user_id, project_name, description, is_public, created_at
            FROM hub.projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// 查询全部公开项目
    ///
    /// 排序和分页在服务层内存中完成，这里只保证稳定的插入顺序（按 `id`）
    async fn find_public_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部公开项目");

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, user_id, project_name, description, is_public, created_at
            FROM hub.projects
            WHERE is_public
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 找到 {} 个公开项目", projects.len());
        Ok(projects)
    }

    async fn find_projects_by_user(&self, user_id: i64) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询用户 {} 的项目", user_id);

        let projects = sqlx::query_as::<_, ProjectInfo>(
            r#"
            SELECT id, user_id, project_name, description, is_public, created_at
            FROM hub.projects
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 用户 {} 共有 {} 个项目", user_id, projects.len());
        Ok(projects)
    }

    async fn update_project(&self, id: i64, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let project = sqlx::query_as::<_, ProjectInfo>(
            r#"
            UPDATE hub.projects
            SET project_name = $2,
                description = $3,
                is_public = $4,
                updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, project_name, description, is_public, created_at;
            "#,
        )
        .bind(id)
        .bind(update.project_name)
        .bind(update.description)
        .bind(update.is_public)
        .fetch_optional(&self.pool)
        .await?;

        debug!("✅ 项目更新完成: {:#?}", project);
        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<bool> {
        debug!("🗑️ 删除项目: {}", id);

        let result = sqlx::query("DELETE FROM hub.projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("✅ 项目删除完成，影响行数 {}", result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}
