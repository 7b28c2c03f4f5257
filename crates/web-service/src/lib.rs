//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use crate::auth::JwtKeys;
use crate::services::{FavoriteService, HashtagService, LibraryService, ProjectService};
use color_eyre::Result;
use database::{DatabasePool, Repositories, UserRepositoryTrait};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod auth;
pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
///
/// 所有字段都可以廉价克隆（内部是 `Arc`），axum 会为每个请求克隆一份
#[derive(Clone)]
pub struct AppState {
    pub project_service: ProjectService,
    pub favorite_service: FavoriteService,
    pub hashtag_service: HashtagService,
    pub library_service: LibraryService,
    pub jwt_keys: Arc<JwtKeys>,
    /// 认证时确认令牌中的用户仍然存在
    pub users: Arc<dyn UserRepositoryTrait>,
}

impl AppState {
    pub fn new(repos: Repositories, jwt_keys: JwtKeys) -> Self {
        Self {
            project_service: ProjectService::new(repos.clone()),
            favorite_service: FavoriteService::new(repos.clone()),
            hashtag_service: HashtagService::new(repos.clone()),
            users: repos.users.clone(),
            library_service: LibraryService::new(repos),
            jwt_keys: Arc::new(jwt_keys),
        }
    }
}

/// 启动 Web 服务
pub async fn start_web_service(config: Arc<AppConfig>, pool: DatabasePool, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let shared_state = AppState::new(
        Repositories::postgres(pool),
        JwtKeys::new(config.jwt_secret.as_bytes()),
    );

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
