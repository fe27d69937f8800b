// ==========================================
// 学业负载规划系统 - 领域模型层
// ==========================================
// 依据: Planner_Master_Spec.md - 数据与状态体系
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod activity;
pub mod capacity;
pub mod reprogram_log;
pub mod snapshot;
pub mod subtask;
pub mod types;

// 重导出核心类型
pub use activity::{Activity, Course};
pub use capacity::{CapacityConstraint, DailyCapacity};
pub use reprogram_log::ReprogrammingLogEntry;
pub use snapshot::PlanningSnapshot;
pub use subtask::Subtask;
pub use types::{ActivityKind, ReprogramReason, SubtaskStatus};
