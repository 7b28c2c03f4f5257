//! 依赖库服务
//!
//! 依赖库的增删改由其他模块负责，这里只提供项目详情和公开统计需要的查询

use crate::models::err::AppError;
use crate::models::hashtags::LibraryCount;
use crate::models::projects::LibraryView;
use database::Repositories;

#[derive(Clone)]
pub struct LibraryService {
    repos: Repositories,
}

impl LibraryService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn libraries_for_project(&self, project_id: i64) -> Result<Vec<LibraryView>, AppError> {
        let libraries = self.repos.libraries.find_libraries_by_project(project_id).await?;
        Ok(libraries.into_iter().map(LibraryView::from).collect())
    }

    /// 有多少项目记录使用了这个名称的依赖库
    pub async fn count_by_name(&self, library_name: &str) -> Result<LibraryCount, AppError> {
        let count = self.repos.libraries.count_libraries_by_name(library_name).await?;
        Ok(LibraryCount {
            library_name: library_name.to_string(),
            count,
        })
    }
}
