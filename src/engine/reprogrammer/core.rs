// ==========================================
// 重排引擎 - 贪心重排核心
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 4. Reprogram Planner
// ==========================================
// 职责: 把过载日上的子任务挪到有空余容量的未来日期
// 输入: 负载视图 + 冲突日序列 + 每日容量
// 输出: 改期记录 + 残留冲突
// ==========================================
// 算法 (贪心, 日期升序):
// 1) 冲突日按日期升序处理 (最早的冲突约束最少的未来日)
// 2) 同日候选按 预估小时降序 → 父截止日期升序 → 子任务ID升序
//    (先挪大块, 用更少的移动清掉超限)
// 3) 自冲突日次日起逐日前扫, 取首个 d: d <= 父deadline 且
//    load(d) + estimated_hours <= limit; 无此 d 则原地保留并上报无解
// 4) 每次移动立即更新工作负载模型, 后续决策看到新总量
// 5) 当日总量降到 limit 以下或候选耗尽后, 推进到下一个冲突日
// ==========================================

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::domain::capacity::{CapacityConstraint, DailyCapacity};
use crate::engine::conflict_detector::DayConflict;
use crate::engine::reprogrammer::types::{ReprogramOutcome, SubtaskMove};
use crate::engine::workload_graph::WorkloadGraph;

// ==========================================
// 工作副本 - 单次调用内私有, 外部不可见
// ==========================================
#[derive(Debug, Clone)]
struct WorkingSubtask {
    id: Uuid,
    estimated_hours: f64,
    deadline: NaiveDate,      // 父活动截止日期 (改期硬上界)
    original_date: NaiveDate, // 快照中的原目标日期
}

// ==========================================
// ReprogramPlanner - 重排引擎
// ==========================================
pub struct ReprogramPlanner {
    // 无状态引擎,不需要注入依赖
}

impl ReprogramPlanner {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行重排
    ///
    /// # 参数
    /// - `graph`: 负载视图
    /// - `conflicts`: 冲突检测输出 (按日期升序)
    /// - `capacity`: 每日容量
    /// - `config`: 引擎参数
    ///
    /// # 返回
    /// 重排结果; 固定的排序与平手规则保证同一快照必得同一计划
    pub fn plan(
        &self,
        graph: &WorkloadGraph,
        conflicts: &[DayConflict],
        capacity: &DailyCapacity,
        config: &PlannerConfig,
    ) -> ReprogramOutcome {
        // ===== Step 1: 建立工作负载模型 =====
        // 日期 -> 当日小时总量; 日期 -> 当日子任务工作副本
        let mut load_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut tasks_by_date: BTreeMap<NaiveDate, Vec<WorkingSubtask>> = BTreeMap::new();

        for subtask in graph.open_subtasks() {
            *load_by_date.entry(subtask.target_date).or_insert(0.0) += subtask.estimated_hours;
            // 生命周期规则: 只有 PENDING/IN_PROGRESS 可被改期
            if !subtask.is_movable() {
                continue;
            }
            tasks_by_date
                .entry(subtask.target_date)
                .or_default()
                .push(WorkingSubtask {
                    id: subtask.id,
                    estimated_hours: subtask.estimated_hours,
                    deadline: graph.deadline_of(subtask),
                    original_date: subtask.target_date,
                });
        }

        let mut moves: Vec<SubtaskMove> = Vec::new();
        let mut unresolved: Vec<DayConflict> = Vec::new();

        // ===== Step 2: 冲突日循环 (日期升序) =====
        for conflict in conflicts {
            let day = conflict.date;

            // 以工作模型的实时总量为准 (前序移动只会减少冲突日负载)
            let mut day_total = load_by_date.get(&day).copied().unwrap_or(0.0);
            if !capacity.is_overloaded(day_total, config) {
                debug!(date = %day, "冲突日已被前序移动化解, 跳过");
                continue;
            }

            // ----- 2.1 候选排序: 预估小时降序 → 父截止日期升序 → ID升序 -----
            let mut candidates = tasks_by_date.remove(&day).unwrap_or_default();
            candidates.sort_by(Self::compare_candidates);

            let mut remaining: Vec<WorkingSubtask> = Vec::new();

            // ----- 2.2 逐候选尝试外移 -----
            for candidate in candidates {
                if !capacity.is_overloaded(day_total, config) {
                    // 当日已降到限额内, 其余候选原地保留
                    remaining.push(candidate);
                    continue;
                }

                match Self::scan_forward(&candidate, day, capacity, &load_by_date, config) {
                    Some(new_date) => {
                        // 移动并立即更新工作模型, 后续决策看到新总量
                        day_total -= candidate.estimated_hours;
                        *load_by_date.entry(day).or_insert(0.0) -= candidate.estimated_hours;
                        *load_by_date.entry(new_date).or_insert(0.0) +=
                            candidate.estimated_hours;

                        debug!(
                            subtask_id = %candidate.id,
                            from = %day,
                            to = %new_date,
                            hours = candidate.estimated_hours,
                            "子任务外移"
                        );

                        moves.push(SubtaskMove {
                            subtask_id: candidate.id,
                            original_date: candidate.original_date,
                            new_date,
                        });

                        tasks_by_date.entry(new_date).or_default().push(candidate);
                    }
                    None => {
                        // 截止日期内无可容纳日期: 原地保留, 计入残留冲突
                        debug!(
                            subtask_id = %candidate.id,
                            date = %day,
                            deadline = %candidate.deadline,
                            hours = candidate.estimated_hours,
                            "子任务无解, 原地保留"
                        );
                        remaining.push(candidate);
                    }
                }
            }

            tasks_by_date.insert(day, remaining);

            // ----- 2.3 残留冲突判定 -----
            if capacity.is_overloaded(day_total, config) {
                unresolved.push(DayConflict {
                    date: day,
                    overflow_hours: capacity.overflow_hours(day_total, config),
                });
            }
        }

        // ===== Step 3: 汇总仍处冲突日的子任务 (供调用方刷新冲突标记) =====
        let mut conflicted_ids: Vec<Uuid> = unresolved
            .iter()
            .filter_map(|c| tasks_by_date.get(&c.date))
            .flatten()
            .map(|t| t.id)
            .collect();
        conflicted_ids.sort();

        info!(
            moves = moves.len(),
            unresolved_days = unresolved.len(),
            conflicted_subtasks = conflicted_ids.len(),
            "重排完成"
        );

        ReprogramOutcome {
            moves,
            unresolved_conflicts: unresolved,
            conflicted_subtask_ids: conflicted_ids,
        }
    }

    // ==========================================
    // 内部规则
    // ==========================================

    /// 候选排序键: 预估小时降序 → 父截止日期升序 → 子任务ID升序
    ///
    /// ID为最终平手项且全局唯一, 排序因此是全序, 保证确定性
    fn compare_candidates(a: &WorkingSubtask, b: &WorkingSubtask) -> Ordering {
        b.estimated_hours
            .total_cmp(&a.estimated_hours)
            .then_with(|| a.deadline.cmp(&b.deadline))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// 自冲突日次日起逐日前扫, 取首个可容纳日期
    ///
    /// 约束: d <= 父deadline 且 load(d) + estimated_hours <= limit
    /// 扫描排除冲突日自身, 因此移动必然向后 (new_date > 原日期)
    fn scan_forward(
        candidate: &WorkingSubtask,
        conflict_date: NaiveDate,
        capacity: &DailyCapacity,
        load_by_date: &BTreeMap<NaiveDate, f64>,
        config: &PlannerConfig,
    ) -> Option<NaiveDate> {
        let mut date = conflict_date.succ_opt()?;
        while date <= candidate.deadline {
            let load = load_by_date.get(&date).copied().unwrap_or(0.0);
            if capacity.can_fit(load, candidate.estimated_hours, config) {
                return Some(date);
            }
            date = date.succ_opt()?;
        }
        None
    }
}

impl Default for ReprogramPlanner {
    fn default() -> Self {
        Self::new()
    }
}
