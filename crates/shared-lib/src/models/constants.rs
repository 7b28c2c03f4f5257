//! 公共常量定义模块
//!
//! 统一管理服务之间共享的默认值，避免各处硬编码。

/// 项目列表每页的固定大小
///
/// 列表接口的 `total_pages`（向下取整）和分页接口（向上取整）都以此为准
pub const PAGE_SIZE: usize = 10;

/// Web 服务默认监听地址
///
/// 可通过环境变量 `WEB_BIND_ADDR` 覆盖
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 数据库连接池默认的最大连接数
///
/// 可通过环境变量 `DB_MAX_CONNECTIONS` 覆盖
pub const DEFAULT_MAX_CONNECTIONS: u32 = 40;
