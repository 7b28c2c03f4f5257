//! 🔧 共享库模块
//!
//! 这个模块包含了在多个服务之间共享的通用代码，包括：
//! - 程序配置
//! - 分页等公共常量

pub mod models;

// 重新导出常用类型
pub use models::{AppConfig, DEFAULT_BIND_ADDR, DEFAULT_MAX_CONNECTIONS, PAGE_SIZE};
