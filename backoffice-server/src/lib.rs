//! Back Office Server - 销售分析后台节点
//!
//! # 架构概述
//!
//! 本模块是 Back Office Server 的主入口，提供以下核心功能：
//!
//! - **销售分析** (`analytics`): 双源对账、期间聚合、前期比较
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! backoffice-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── analytics/     # 销售分析聚合引擎
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod analytics;
pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use analytics::{PeriodBoundary, PeriodKind, ReportRequest, ReportScope, SalesRecordSource};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在加载 [`Config`] 之前调用，否则 `.env` 中的变量不会生效。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present; absence is not an error
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __   ____  _________
   / __ )____ ______/ /__/ __ \/ __/ __(_)_______
  / __  / __ `/ ___/ //_/ / / / /_/ /_/ / ___/ _ \
 / /_/ / /_/ / /__/ ,< / /_/ / __/ __/ / /__/  __/
/_____/\__,_/\___/_/|_|\____/_/ /_/ /_/\___/\___/
    "#
    );
}
