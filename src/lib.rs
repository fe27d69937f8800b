// ==========================================
// 学业负载规划系统 - 核心库
// ==========================================
// 依据: Planner_Master_Spec.md - 系统定位
// 技术栈: Rust (纯计算引擎, 无持久化)
// 系统定位: 过载冲突检测与重排引擎 (调用方持有最终落库权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActivityKind, ReprogramReason, SubtaskStatus};

// 领域实体
pub use domain::{
    Activity, CapacityConstraint, Course, DailyCapacity, PlanningSnapshot,
    ReprogrammingLogEntry, Subtask,
};

// 引擎
pub use engine::{
    AuditRecorder, ConflictDetector, DayConflict, DayLoad, LoadCalculator,
    PlannerOrchestrator, ReprogramOutcome, ReprogramPlanner, ScheduleResult, ScheduleStats,
    StructuralError, SubtaskMove, WorkloadGraph,
};

// 配置
pub use config::PlannerConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学业负载规划系统";

// ==========================================
// 预编译检查
// ==========================================
