use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 项目/依赖库/用户不存在
    #[error("{0} not found")]
    NotFound(String),

    /// 分页参数超出范围
    #[error("page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange { page: i64, total_pages: usize },

    /// 缺少或无效的访问令牌
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 角色不允许访问
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

impl AppError {
    pub fn not_found<T: ToString>(what: T) -> Self {
        Self::NotFound(what.to_string())
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            AppError::RepositoryError(err) => match err {
                DatabaseError::SqlxError(sqlx_err @ sqlx::Error::RowNotFound) => {
                    (StatusCode::NOT_FOUND, format!("Record not found: {sqlx_err}")).into_response()
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response(),
            },
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Resource not found: {what}")).into_response(),
            err @ AppError::PageOutOfRange { .. } => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, format!("Unauthorized: {msg}")).into_response(),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, format!("Forbidden: {msg}")).into_response(),
            AppError::InternalError(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response(),
        }
    }
}
