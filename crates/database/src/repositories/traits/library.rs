//! 依赖库仓库 trait 定义

use crate::models::library::{LibraryCreate, LibraryInfo};
use crate::DatabaseResult;

/// 依赖库仓库trait定义
#[async_trait::async_trait]
pub trait LibraryRepositoryTrait: Send + Sync + 'static {
    /// 新增依赖库
    async fn create_library(&self, library: LibraryCreate) -> DatabaseResult<LibraryInfo>;

    /// 根据 ID 获取依赖库，不存在时返回 `None`
    async fn find_library_by_id(&self, id: i64) -> DatabaseResult<Option<LibraryInfo>>;

    /// 查询项目的全部依赖库，按插入顺序返回
    async fn find_libraries_by_project(&self, project_id: i64) -> DatabaseResult<Vec<LibraryInfo>>;

    /// 统计使用了指定名称依赖库的记录数（大小写敏感）
    async fn count_libraries_by_name(&self, library_name: &str) -> DatabaseResult<i64>;
}
