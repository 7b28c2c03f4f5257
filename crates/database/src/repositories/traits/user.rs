//! 用户仓库 trait 定义

use crate::models::user::{UserCreate, UserInfo};
use crate::DatabaseResult;

/// 用户仓库trait定义
///
/// 用户注册/登录由外部身份服务负责，这里只提供项目视图需要的查询
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    /// 新增用户
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo>;

    /// 根据 ID 获取用户，不存在时返回 `None`
    async fn find_user_by_id(&self, id: i64) -> DatabaseResult<Option<UserInfo>>;
}
