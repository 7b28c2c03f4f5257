use database::HashtagInfo;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 标签信息
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema, Serialize)]
pub struct HashtagView {
    #[schema(example = 3)]
    pub hashtag_id: i64,

    #[schema(example = "rust")]
    pub content: String,
}

impl From<HashtagInfo> for HashtagView {
    fn from(tag: HashtagInfo) -> Self {
        Self {
            hashtag_id: tag.id,
            content: tag.content,
        }
    }
}

/// 标签搜索参数
///
/// `content`为空时返回全部标签，否则返回包含该子串的标签（大小写敏感）
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HashtagSearch {
    /// 标签内容子串
    pub content: Option<String>,
}

/// 依赖库使用次数
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct LibraryCount {
    #[schema(example = "serde")]
    pub library_name: String,

    #[schema(example = 42)]
    pub count: i64,
}
