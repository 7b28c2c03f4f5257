//! 依赖库数据库模型

use chrono::{DateTime, Utc};

/// 依赖库信息结构体，每个依赖库都属于一个项目
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LibraryInfo {
    pub id: i64,
    pub project_id: i64,
    pub library_name: String,
    pub version: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// 依赖库创建参数
#[derive(Debug, Clone)]
pub struct LibraryCreate {
    pub project_id: i64,
    pub library_name: String,
    pub version: String,
    pub description: String,
}
