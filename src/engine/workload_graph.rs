// ==========================================
// 学业负载规划系统 - 负载视图引擎
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 1. Workload Graph
// 红线: 结构性不一致必须在排程前拦截, 不得绕过
// ==========================================
// 职责: 构建单个学生规划视野内的开放子任务视图
// 输入: 每日容量 + 活动集合 + 子任务集合 + 当前日期
// 输出: 校验通过的负载视图 (引擎内只读快照)
// ==========================================

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::domain::activity::Activity;
use crate::domain::capacity::DailyCapacity;
use crate::domain::subtask::Subtask;
use crate::engine::error::{EngineResult, StructuralError};

// ==========================================
// WorkloadGraph - 负载视图
// ==========================================
// 视野: [today, 开放活动的最大 deadline]
// 开放活动: 至少持有一个非 DONE 子任务的活动
pub struct WorkloadGraph {
    today: NaiveDate,
    horizon_end: Option<NaiveDate>, // 无开放子任务时为 None
    activities: HashMap<Uuid, Activity>,
    subtasks: Vec<Subtask>, // 开放且落在视野内的子任务
}

impl WorkloadGraph {
    /// 构建负载视图
    ///
    /// # 参数
    /// - `capacity`: 每日容量
    /// - `activities`: 活动集合 (顺序无关)
    /// - `subtasks`: 子任务集合 (顺序无关, 可含 DONE)
    /// - `today`: 当前日期 (视野起点)
    /// - `config`: 引擎参数
    ///
    /// # 返回
    /// - `Ok(WorkloadGraph)`: 校验通过的视图
    /// - `Err(StructuralError)`: 快照违反数据模型不变量
    ///
    /// # 校验规则
    /// 1. 每日时长限制落在配置区间内
    /// 2. 活动ID与子任务ID无重复
    /// 3. 非 DONE 子任务: 父活动存在、预估小时为正且有限、目标日期不越过截止日期
    /// 4. DONE 子任务整体忽略, 不参与任何校验与负载
    pub fn build(
        capacity: &DailyCapacity,
        activities: &[Activity],
        subtasks: &[Subtask],
        today: NaiveDate,
        config: &PlannerConfig,
    ) -> EngineResult<WorkloadGraph> {
        // 1. 容量校验
        if !capacity.is_within_bounds(config) {
            warn!(
                daily_hour_limit = capacity.daily_hour_limit,
                "每日时长限制越界, 拒绝快照"
            );
            return Err(StructuralError::HourLimitOutOfRange {
                limit: capacity.daily_hour_limit,
                min: config.min_daily_hour_limit,
                max: config.max_daily_hour_limit,
            });
        }

        // 2. 活动索引 (检查ID重复)
        let mut activity_index: HashMap<Uuid, Activity> = HashMap::with_capacity(activities.len());
        for activity in activities {
            if activity_index.insert(activity.id, activity.clone()).is_some() {
                warn!(activity_id = %activity.id, "活动ID重复, 拒绝快照");
                return Err(StructuralError::DuplicateActivityId {
                    activity_id: activity.id,
                });
            }
        }

        // 3. 子任务ID重复检查 (DONE 也占用ID命名空间, 保护审计引用)
        let mut seen_ids: HashSet<Uuid> = HashSet::with_capacity(subtasks.len());
        for subtask in subtasks {
            if !seen_ids.insert(subtask.id) {
                warn!(subtask_id = %subtask.id, "子任务ID重复, 拒绝快照");
                return Err(StructuralError::DuplicateSubtaskId {
                    subtask_id: subtask.id,
                });
            }
        }

        // 4. 开放子任务逐条校验
        let mut open_subtasks: Vec<Subtask> = Vec::new();
        for subtask in subtasks {
            if !subtask.is_open() {
                continue;
            }

            let parent = activity_index.get(&subtask.activity_id).ok_or_else(|| {
                warn!(
                    subtask_id = %subtask.id,
                    activity_id = %subtask.activity_id,
                    "孤儿子任务, 拒绝快照"
                );
                StructuralError::OrphanSubtask {
                    subtask_id: subtask.id,
                    activity_id: subtask.activity_id,
                }
            })?;

            if !subtask.estimated_hours.is_finite() || subtask.estimated_hours <= 0.0 {
                warn!(
                    subtask_id = %subtask.id,
                    estimated_hours = subtask.estimated_hours,
                    "预估小时数非法, 拒绝快照"
                );
                return Err(StructuralError::NonPositiveHours {
                    subtask_id: subtask.id,
                    hours: subtask.estimated_hours,
                });
            }

            if subtask.target_date > parent.deadline {
                warn!(
                    subtask_id = %subtask.id,
                    target_date = %subtask.target_date,
                    deadline = %parent.deadline,
                    "目标日期越过父活动截止日期, 拒绝快照"
                );
                return Err(StructuralError::TargetDateBeyondDeadline {
                    subtask_id: subtask.id,
                    target_date: subtask.target_date,
                    deadline: parent.deadline,
                });
            }

            open_subtasks.push(subtask.clone());
        }

        // 5. 视野终点: 开放活动的最大截止日期
        let horizon_end = open_subtasks
            .iter()
            .filter_map(|s| activity_index.get(&s.activity_id))
            .map(|a| a.deadline)
            .max();

        // 6. 视野过滤: 只保留 [today, horizon_end] 内的子任务
        //    (早于 today 的逾期任务不参与负载, 由调用方改期后重新调用)
        let before_filter = open_subtasks.len();
        let subtasks_in_horizon: Vec<Subtask> = match horizon_end {
            Some(end) => open_subtasks
                .into_iter()
                .filter(|s| s.target_date >= today && s.target_date <= end)
                .collect(),
            None => Vec::new(),
        };

        if before_filter > subtasks_in_horizon.len() {
            debug!(
                excluded = before_filter - subtasks_in_horizon.len(),
                "视野外子任务已排除 (早于当前日期)"
            );
        }

        info!(
            today = %today,
            horizon_end = ?horizon_end,
            activities = activity_index.len(),
            open_subtasks = subtasks_in_horizon.len(),
            "负载视图构建完成"
        );

        Ok(WorkloadGraph {
            today,
            horizon_end,
            activities: activity_index,
            subtasks: subtasks_in_horizon,
        })
    }

    // ==========================================
    // 访问器
    // ==========================================

    /// 视野起点 (当前日期)
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// 视野终点 (无开放子任务时为 None)
    pub fn horizon_end(&self) -> Option<NaiveDate> {
        self.horizon_end
    }

    /// 视野内的开放子任务
    pub fn open_subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// 查询活动
    pub fn activity(&self, activity_id: &Uuid) -> Option<&Activity> {
        self.activities.get(activity_id)
    }

    /// 查询子任务的硬截止日期 (父活动 deadline)
    ///
    /// 构建时已校验父活动存在, 此处缺失视为内部错误
    pub fn deadline_of(&self, subtask: &Subtask) -> NaiveDate {
        self.activities
            .get(&subtask.activity_id)
            .map(|a| a.deadline)
            .unwrap_or(subtask.target_date)
    }

    /// 判断视野是否为空 (无可规划工作)
    pub fn is_empty(&self) -> bool {
        self.subtasks.is_empty()
    }
}
