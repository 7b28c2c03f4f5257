//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::{DateTime, Utc};

/// 项目信息结构体
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i64,
    /// 项目所属用户
    pub user_id: i64,
    pub project_name: String,
    pub description: String,
    /// 是否公开，只有公开项目会出现在项目广场
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// 项目创建参数
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub user_id: i64,
    pub project_name: String,
    pub description: String,
    pub is_public: bool,
}

/// 项目更新参数
///
/// 更新时所有可变字段都会被覆盖
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub project_name: String,
    pub description: String,
    pub is_public: bool,
}
