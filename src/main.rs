use color_eyre::eyre::Context;
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::DEBUG);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = AppConfig::load()?;

    let pool = database::initialize_database(&config)
        .await
        .context("Initialize postgresql database")?;

    // 关闭信号：收到 Ctrl-C 后通知 Web 服务优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("📴 收到 Ctrl-C，准备关闭服务...");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(config, pool, shutdown_rx).await?;

    info!("✅ 服务已退出");
    Ok(())
}
