use crate::models::constants::{DEFAULT_BIND_ADDR, DEFAULT_MAX_CONNECTIONS};
use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::sync::Arc;
use tracing::warn;

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 数据库连接池最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_db_connections: u32,

    /// Web服务监听地址
    pub bind_addr: String,

    /// 校验访问令牌(HS256)使用的密钥
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(e) = dotenvy::dotenv() {
            warn!("⚠️ 未加载 .env 文件: {}", e);
        }

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .context("Can not load JWT_SECRET in environment")
            .suggestion("设置 JWT_SECRET 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            max_db_connections: std::env::var("DB_MAX_CONNECTIONS")
                .map_or(DEFAULT_MAX_CONNECTIONS, |s| s.parse().unwrap_or(DEFAULT_MAX_CONNECTIONS)),
            bind_addr: std::env::var("WEB_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret,
        };
        Ok(Arc::new(config))
    }
}
