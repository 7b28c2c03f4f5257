//! 标签数据库模型
//!
//! 表中使用 `project_id` / `library_id` 两个可空外键并通过 CHECK 约束保证只有一个非空，
//! 代码中则统一使用 [`HashtagOwner`] 表示标签的归属。

use crate::DatabaseError;

/// 标签归属：项目或依赖库，二者互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashtagOwner {
    Project(i64),
    Library(i64),
}

impl HashtagOwner {
    /// 拆分为 `(project_id, library_id)`，用于写入数据库
    pub fn as_columns(&self) -> (Option<i64>, Option<i64>) {
        match *self {
            HashtagOwner::Project(id) => (Some(id), None),
            HashtagOwner::Library(id) => (None, Some(id)),
        }
    }

    /// 所有者自身的 ID，查询时与 [`HashtagOwner`] 的类型一起决定匹配哪一列
    pub fn id(&self) -> i64 {
        match *self {
            HashtagOwner::Project(id) | HashtagOwner::Library(id) => id,
        }
    }
}

/// 标签信息结构体
#[derive(Debug, Clone, PartialEq)]
pub struct HashtagInfo {
    pub id: i64,
    pub content: String,
    pub owner: HashtagOwner,
}

/// 数据库中的原始行
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct HashtagRow {
    pub id: i64,
    pub content: String,
    pub project_id: Option<i64>,
    pub library_id: Option<i64>,
}

impl TryFrom<HashtagRow> for HashtagInfo {
    type Error = DatabaseError;

    fn try_from(row: HashtagRow) -> Result<Self, Self::Error> {
        let owner = match (row.project_id, row.library_id) {
            (Some(project_id), None) => HashtagOwner::Project(project_id),
            (None, Some(library_id)) => HashtagOwner::Library(library_id),
            _ => {
                return Err(DatabaseError::integrity(format!(
                    "hashtag {} must belong to exactly one project or library",
                    row.id
                )))
            }
        };

        Ok(HashtagInfo {
            id: row.id,
            content: row.content,
            owner,
        })
    }
}
