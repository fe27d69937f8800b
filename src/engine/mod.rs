// ==========================================
// 学业负载规划系统 - 引擎层
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 模块拆分
// ==========================================
// 职责: 实现过载检测与重排业务规则
// 红线: 引擎无持久化, 所有改期必须输出 reason 与日志
// ==========================================

pub mod audit;
pub mod conflict_detector;
pub mod error;
pub mod load_calculator;
pub mod orchestrator;
pub mod reprogrammer;
pub mod workload_graph;

// 重导出核心引擎
pub use audit::AuditRecorder;
pub use conflict_detector::{ConflictDetector, DayConflict};
pub use error::{EngineResult, StructuralError};
pub use load_calculator::{DayLoad, LoadCalculator};
pub use orchestrator::{PlannerOrchestrator, ScheduleResult, ScheduleStats};
pub use reprogrammer::{ReprogramOutcome, ReprogramPlanner, SubtaskMove};
pub use workload_graph::WorkloadGraph;
