//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目创建
/// - 项目查询（单个、公开项目、某个用户的项目）
/// - 项目更新
/// - 项目删除
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 创建新项目
    ///
    /// # 返回值
    /// 返回创建的项目信息（包含数据库生成的 `id` 和 `created_at`）
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息，不存在时返回 `None`
    async fn find_project_by_id(&self, id: i64) -> DatabaseResult<Option<ProjectInfo>>;

    /// 查询全部公开项目，按创建顺序返回
    async fn find_public_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 查询某个用户的全部项目（包含非公开项目），按创建顺序返回
    async fn find_projects_by_user(&self, user_id: i64) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 覆盖更新项目信息
    ///
    /// # 返回值
    /// 返回更新后的项目信息，项目不存在时返回 `None`
    async fn update_project(&self, id: i64, update: ProjectUpdate) -> DatabaseResult<Option<ProjectInfo>>;

    /// 删除项目，关联的标签、收藏和依赖库会级联删除
    ///
    /// # 返回值
    /// 是否真的删除了数据
    async fn delete_project(&self, id: i64) -> DatabaseResult<bool>;
}
