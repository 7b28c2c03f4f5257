//! 标签仓库 trait 定义

use crate::models::hashtag::{HashtagInfo, HashtagOwner};
use crate::DatabaseResult;

/// 标签仓库trait定义
///
/// 所有方法都以 [`HashtagOwner`] 区分项目标签和依赖库标签
#[async_trait::async_trait]
pub trait HashtagRepositoryTrait: Send + Sync + 'static {
    /// 为项目或依赖库新增一个标签
    async fn create_hashtag(&self, owner: HashtagOwner, content: String) -> DatabaseResult<HashtagInfo>;

    /// 查询归属者的全部标签，按插入顺序返回
    async fn find_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<Vec<HashtagInfo>>;

    /// 删除归属者的全部标签
    ///
    /// # 返回值
    /// 被删除的标签数量
    async fn delete_hashtags_by_owner(&self, owner: HashtagOwner) -> DatabaseResult<u64>;
}
