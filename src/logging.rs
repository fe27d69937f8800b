// ==========================================
// 学业负载规划系统 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 引擎以库形式被集成, 默认不抢占订阅器; 由入口显式初始化
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

// 默认日志级别 (RUST_LOG 未设置时)
const DEFAULT_DIRECTIVE: &str = "info";

/// 初始化日志系统 (命令行入口使用)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器
///   例如: RUST_LOG=debug 或 RUST_LOG=study_aps=trace
pub fn init() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 输出交给测试框架捕获; 重复调用安全 (try_init)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// 从环境变量构建过滤器, 未设置时回落默认级别
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
