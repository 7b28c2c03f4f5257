//! 依赖库仓库

use crate::models::library::{LibraryCreate, LibraryInfo};
use crate::repositories::traits::LibraryRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 依赖库仓库结构体
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LibraryRepositoryTrait for LibraryRepository {
    async fn create_library(&self, library: LibraryCreate) -> DatabaseResult<LibraryInfo> {
        debug!("📦 新增依赖库: {:#?}", library);

        let library = sqlx::query_as::<_, LibraryInfo>(
            r#"
            INSERT INTO hub.libraries (project_id, library_name, version, description, created_at)
            VALUES ($1, $2, $3, $4, now())
            RETURNING id, project_id, library_name, version, description, created_at;
            "#,
        )
        .bind(library.project_id)
        .bind(library.library_name)
        .bind(library.version)
        .bind(library.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(library)
    }

    async fn find_library_by_id(&self, id: i64) -> DatabaseResult<Option<LibraryInfo>> {
        let library = sqlx::query_as::<_, LibraryInfo>(
            r#"
            SELECT id, project_id, library_name, version, description, created_at
            FROM hub.libraries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(library)
    }

    async fn find_libraries_by_project(&self, project_id: i64) -> DatabaseResult<Vec<LibraryInfo>> {
        let libraries = sqlx::query_as::<_, LibraryInfo>(
            r#"
            SELECT id, project_id, library_name, version, description, created_at
            FROM hub.libraries
            WHERE project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(libraries)
    }

    async fn count_libraries_by_name(&self, library_name: &str) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hub.libraries WHERE library_name = $1")
            .bind(library_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
