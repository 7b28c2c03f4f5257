//! 标签服务
//!
//! 标签属于一个项目或一个依赖库，搜索是对归属者全部标签的子串过滤。
//! 每个项目/依赖库的标签数量很少，所以不建索引，直接线性扫描。

use crate::models::err::AppError;
use crate::models::hashtags::HashtagView;
use database::{HashtagOwner, Repositories};
use tracing::debug;

#[derive(Clone)]
pub struct HashtagService {
    repos: Repositories,
}

impl HashtagService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// 项目的全部标签，项目不存在时返回 NotFound
    pub async fn tags_for_project(&self, project_id: i64) -> Result<Vec<HashtagView>, AppError> {
        if self.repos.projects.find_project_by_id(project_id).await?.is_none() {
            return Err(AppError::not_found(format!("project {project_id}")));
        }
        self.tags_of(HashtagOwner::Project(project_id)).await
    }

    /// 依赖库的全部标签，依赖库不存在时返回 NotFound
    pub async fn tags_for_library(&self, library_id: i64) -> Result<Vec<HashtagView>, AppError> {
        if self.repos.libraries.find_library_by_id(library_id).await?.is_none() {
            return Err(AppError::not_found(format!("library {library_id}")));
        }
        self.tags_of(HashtagOwner::Library(library_id)).await
    }

    pub async fn search_in_project(&self, project_id: i64, content: &str) -> Result<Vec<HashtagView>, AppError> {
        debug!("🔍 在项目 {} 中搜索标签 {:?}", project_id, content);
        Ok(filter_by_content(self.tags_for_project(project_id).await?, content))
    }

    pub async fn search_in_library(&self, library_id: i64, content: &str) -> Result<Vec<HashtagView>, AppError> {
        debug!("🔍 在依赖库 {} 中搜索标签 {:?}", library_id, content);
        Ok(filter_by_content(self.tags_for_library(library_id).await?, content))
    }

    /// 按顺序为项目创建标签
    pub async fn attach_project_hashtags(&self, project_id: i64, hashtags: &[String]) -> Result<(), AppError> {
        for content in hashtags {
            self.repos
                .hashtags
                .create_hashtag(HashtagOwner::Project(project_id), content.clone())
                .await?;
        }
        Ok(())
    }

    /// 删除项目原有的全部标签后按新列表重建（整体替换，不做差异比较）
    pub async fn replace_project_hashtags(&self, project_id: i64, hashtags: &[String]) -> Result<(), AppError> {
        let removed = self
            .repos
            .hashtags
            .delete_hashtags_by_owner(HashtagOwner::Project(project_id))
            .await?;
        debug!("🏷️ 项目 {} 删除 {} 个旧标签，新增 {} 个", project_id, removed, hashtags.len());

        self.attach_project_hashtags(project_id, hashtags).await
    }

    async fn tags_of(&self, owner: HashtagOwner) -> Result<Vec<HashtagView>, AppError> {
        let tags = self.repos.hashtags.find_hashtags_by_owner(owner).await?;
        Ok(tags.into_iter().map(HashtagView::from).collect())
    }
}

/// 保留包含 `content` 的标签（大小写敏感），顺序不变
pub fn filter_by_content(tags: Vec<HashtagView>, content: &str) -> Vec<HashtagView> {
    tags.into_iter().filter(|tag| tag.content.contains(content)).collect()
}
