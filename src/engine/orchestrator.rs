// ==========================================
// 学业负载规划系统 - 引擎编排器
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 计算主流程
// 用途: 协调五个核心引擎的执行顺序
// ==========================================
// 红线: 引擎无副作用; 改期与日志由调用方原子落库
// ==========================================

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::domain::activity::Activity;
use crate::domain::capacity::DailyCapacity;
use crate::domain::reprogram_log::ReprogrammingLogEntry;
use crate::domain::snapshot::PlanningSnapshot;
use crate::domain::subtask::Subtask;
use crate::engine::audit::AuditRecorder;
use crate::engine::conflict_detector::{ConflictDetector, DayConflict};
use crate::engine::error::EngineResult;
use crate::engine::load_calculator::LoadCalculator;
use crate::engine::reprogrammer::{ReprogramPlanner, SubtaskMove};
use crate::engine::workload_graph::WorkloadGraph;

// ==========================================
// ScheduleStats - 排程统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub open_subtasks: usize,     // 视野内开放子任务数
    pub conflict_days: usize,     // 检出冲突日数
    pub moved_count: usize,       // 实际改期子任务数
    pub unresolved_days: usize,   // 残留冲突日数
}

// ==========================================
// ScheduleResult - 排程结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    // Reprogram Planner 输出
    pub moves: Vec<SubtaskMove>,
    pub unresolved_conflicts: Vec<DayConflict>,
    pub conflicted_subtask_ids: Vec<Uuid>,

    // Audit Recorder 输出
    pub log_entries: Vec<ReprogrammingLogEntry>,

    // 统计
    pub stats: ScheduleStats,
}

impl ScheduleResult {
    /// 判断计划是否完全可行
    pub fn is_feasible(&self) -> bool {
        self.unresolved_conflicts.is_empty()
    }
}

// ==========================================
// PlannerOrchestrator - 引擎编排器
// ==========================================

pub struct PlannerOrchestrator {
    config: PlannerConfig,
    load_calculator: LoadCalculator,
    conflict_detector: ConflictDetector,
    planner: ReprogramPlanner,
    audit: AuditRecorder,
}

impl PlannerOrchestrator {
    /// 创建编排器 (默认参数)
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// 创建编排器
    ///
    /// # 参数
    /// - config: 引擎参数
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            load_calculator: LoadCalculator::new(),
            conflict_detector: ConflictDetector::new(),
            planner: ReprogramPlanner::new(),
            audit: AuditRecorder::new(),
        }
    }

    /// 执行完整排程流程 (以系统时钟为准)
    ///
    /// 纯函数于 输入 + 本次调用时间戳; 时间戳只用于日志条目的 created_at
    pub fn compute_schedule(
        &self,
        capacity: &DailyCapacity,
        activities: &[Activity],
        subtasks: &[Subtask],
    ) -> EngineResult<ScheduleResult> {
        let today = Local::now().date_naive();
        let now = Utc::now().naive_utc();
        self.compute_schedule_at(capacity, activities, subtasks, today, now)
    }

    /// 以快照形式执行完整排程流程
    pub fn compute_schedule_snapshot(
        &self,
        snapshot: &PlanningSnapshot,
    ) -> EngineResult<ScheduleResult> {
        self.compute_schedule(
            &snapshot.capacity,
            &snapshot.activities,
            &snapshot.subtasks,
        )
    }

    /// 执行完整排程流程 (显式时间, 供调用方与测试控制)
    ///
    /// # 参数
    /// - capacity: 每日容量
    /// - activities: 活动集合 (顺序无关)
    /// - subtasks: 子任务集合 (顺序无关, DONE 被忽略)
    /// - today: 视野起点
    /// - now: 日志条目时间戳
    ///
    /// # 返回
    /// - `Ok(ScheduleResult)`: 改期记录 + 残留冲突 + 审计日志
    /// - `Err(StructuralError)`: 快照结构性不一致, 调用方须修复后重试
    pub fn compute_schedule_at(
        &self,
        capacity: &DailyCapacity,
        activities: &[Activity],
        subtasks: &[Subtask],
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> EngineResult<ScheduleResult> {
        info!(
            today = %today,
            activities_count = activities.len(),
            subtasks_count = subtasks.len(),
            daily_hour_limit = capacity.daily_hour_limit,
            "开始执行排程流程"
        );

        // ==========================================
        // 步骤1: Workload Graph - 负载视图构建与校验
        // ==========================================
        debug!("步骤1: 构建负载视图");

        let graph = WorkloadGraph::build(capacity, activities, subtasks, today, &self.config)?;

        // ==========================================
        // 步骤2: Load Calculator - 日负载聚合
        // ==========================================
        debug!("步骤2: 聚合日负载");

        let day_loads = self.load_calculator.calculate(&graph);

        // ==========================================
        // 步骤3: Conflict Detector - 过载冲突检测
        // ==========================================
        debug!("步骤3: 检测过载冲突");

        let conflicts = self
            .conflict_detector
            .detect(&day_loads, capacity, &self.config);

        // ==========================================
        // 步骤4: Reprogram Planner - 贪心重排
        // ==========================================
        debug!("步骤4: 执行重排");

        let outcome = self.planner.plan(&graph, &conflicts, capacity, &self.config);

        // ==========================================
        // 步骤5: Audit Recorder - 审计日志
        // ==========================================
        debug!("步骤5: 生成审计日志");

        let log_entries = self.audit.record(&outcome.moves, now);

        let stats = ScheduleStats {
            open_subtasks: graph.open_subtasks().len(),
            conflict_days: conflicts.len(),
            moved_count: outcome.moves.len(),
            unresolved_days: outcome.unresolved_conflicts.len(),
        };

        info!(
            open_subtasks = stats.open_subtasks,
            conflict_days = stats.conflict_days,
            moved = stats.moved_count,
            unresolved_days = stats.unresolved_days,
            "排程流程完成"
        );

        // ==========================================
        // 返回结果
        // ==========================================

        Ok(ScheduleResult {
            moves: outcome.moves,
            unresolved_conflicts: outcome.unresolved_conflicts,
            conflicted_subtask_ids: outcome.conflicted_subtask_ids,
            log_entries,
            stats,
        })
    }
}

impl Default for PlannerOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
