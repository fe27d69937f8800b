// ==========================================
// 学业负载规划系统 - 重排引擎
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 4. Reprogram Planner
// 红线: 改期只许向后 (挪入未来空余容量), 不得越过父活动截止日期
// 红线: 无解(unschedulable)是业务结果, 不是错误
// ==========================================

mod core;
mod types;


pub use self::core::ReprogramPlanner;
pub use self::types::{ReprogramOutcome, SubtaskMove};
