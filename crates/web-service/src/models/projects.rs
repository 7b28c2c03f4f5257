use chrono::{DateTime, Utc};
use database::{LibraryInfo, ProjectInfo, UserInfo};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// 新建/更新项目的输入
///
/// 更新时会覆盖全部字段，并用 `project_hashtags` 整体替换原有标签
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct ProjectInput {
    #[schema(example = "libraryhub")]
    #[validate(length(min = 1, max = 100))]
    /// 项目名称
    pub project_name: String,

    #[schema(example = "share the libraries your project depends on")]
    #[validate(length(max = 2000))]
    #[serde(default)]
    /// 项目描述
    pub description: String,

    #[schema(example = true)]
    #[serde(default = "default_public")]
    /// 是否公开
    pub is_public: bool,

    #[schema(example = json!(["rust", "axum"]))]
    #[validate(length(max = 30), custom(function = "validate_hashtags"))]
    #[serde(default)]
    /// 项目标签，按顺序保存
    pub project_hashtags: Vec<String>,
}

fn default_public() -> bool {
    true
}

#[allow(clippy::ptr_arg)]
fn validate_hashtags(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.iter().any(|t| t.trim().is_empty() || t.chars().count() > 50) {
        return Err(ValidationError::new("hashtag_length"));
    }
    Ok(())
}

/// 项目排序方式
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PagingMode {
    /// 按创建时间倒序
    Latest,
    /// 按收藏数倒序
    Popular,
}

/// 分页查询参数
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PagingQuery {
    /// 排序方式：`LATEST` 或 `POPULAR`
    pub mode: PagingMode,
}

/// 收藏信息
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema, Serialize)]
pub struct FavoriteView {
    #[schema(example = 12)]
    /// 项目被收藏的次数
    pub favorite_count: i64,

    #[schema(example = false)]
    /// 当前用户是否已收藏
    pub is_liked: bool,
}

/// 项目所有者
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct OwnerView {
    #[schema(example = 1)]
    pub user_id: i64,

    #[schema(example = "alice")]
    pub username: String,
}

impl From<UserInfo> for OwnerView {
    fn from(user: UserInfo) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
        }
    }
}

/// 项目列表中的单个项目
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct ProjectView {
    #[schema(example = 15)]
    pub project_id: i64,

    #[schema(example = "libraryhub")]
    pub project_name: String,

    pub description: String,

    pub is_public: bool,

    pub owner: OwnerView,

    pub project_hashtags: Vec<String>,

    pub favorite: FavoriteView,

    pub created_at: DateTime<Utc>,
}

impl ProjectView {
    pub fn new(project: ProjectInfo, owner: OwnerView, project_hashtags: Vec<String>, favorite: FavoriteView) -> Self {
        Self {
            project_id: project.id,
            project_name: project.project_name,
            description: project.description,
            is_public: project.is_public,
            owner,
            project_hashtags,
            favorite,
            created_at: project.created_at,
        }
    }
}

/// 项目依赖库
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct LibraryView {
    #[schema(example = 4)]
    pub library_id: i64,

    #[schema(example = "serde")]
    pub library_name: String,

    #[schema(example = "1.0.216")]
    pub version: String,

    pub description: String,
}

impl From<LibraryInfo> for LibraryView {
    fn from(library: LibraryInfo) -> Self {
        Self {
            library_id: library.id,
            library_name: library.library_name,
            version: library.version,
            description: library.description,
        }
    }
}

/// 项目详情，包含依赖库
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct ProjectDetail {
    #[schema(example = 15)]
    pub project_id: i64,

    #[schema(example = 1)]
    pub user_id: i64,

    pub project_name: String,

    pub description: String,

    pub is_public: bool,

    pub project_hashtags: Vec<String>,

    pub libraries: Vec<LibraryView>,

    pub favorite: FavoriteView,

    pub created_at: DateTime<Utc>,
}

impl ProjectDetail {
    pub fn new(
        project: ProjectInfo,
        project_hashtags: Vec<String>,
        libraries: Vec<LibraryView>,
        favorite: FavoriteView,
    ) -> Self {
        Self {
            project_id: project.id,
            user_id: project.user_id,
            project_name: project.project_name,
            description: project.description,
            is_public: project.is_public,
            project_hashtags,
            libraries,
            favorite,
            created_at: project.created_at,
        }
    }
}

/// 项目列表结果
///
/// 列表接口返回全部项目，`total_pages` 为向下取整的页数；
/// 分页接口返回单页数据，`total_pages` 为向上取整的页数。
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct ProjectResult {
    pub projects: Vec<ProjectView>,

    #[schema(example = 3)]
    pub total_pages: usize,
}
