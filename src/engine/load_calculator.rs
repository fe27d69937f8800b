// ==========================================
// 学业负载规划系统 - 日负载聚合引擎
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 2. Load Calculator
// ==========================================
// 职责: 按日汇总视野内开放子任务的预估小时
// 输入: 负载视图
// 输出: 按日期升序的稀疏日负载序列
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::engine::workload_graph::WorkloadGraph;

// ==========================================
// DayLoad - 日负载
// ==========================================
// 引擎内部结构, 不落库: 子任务状态随时变化, 每次调用重算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLoad {
    pub date: NaiveDate,    // 日期
    pub total_hours: f64,   // 当日开放子任务预估小时之和
    pub subtask_count: usize, // 当日开放子任务数
}

// ==========================================
// LoadCalculator - 日负载聚合引擎
// ==========================================
pub struct LoadCalculator {
    // 无状态引擎,不需要注入依赖
}

impl LoadCalculator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合视野内的日负载
    ///
    /// 稀疏表示: 只为持有至少一个开放子任务的日期生成条目,
    /// 零负载日期不物化, 结构规模与实际工作量成正比
    ///
    /// # 参数
    /// - `graph`: 负载视图
    ///
    /// # 返回
    /// 按日期升序的日负载序列; 同一快照必得同一序列, 与输入顺序无关
    pub fn calculate(&self, graph: &WorkloadGraph) -> Vec<DayLoad> {
        // BTreeMap 聚合: 键序即日期升序, 天然确定性
        let mut per_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

        for subtask in graph.open_subtasks() {
            let entry = per_day.entry(subtask.target_date).or_insert((0.0, 0));
            entry.0 += subtask.estimated_hours;
            entry.1 += 1;
        }

        let loads: Vec<DayLoad> = per_day
            .into_iter()
            .map(|(date, (total_hours, subtask_count))| DayLoad {
                date,
                total_hours,
                subtask_count,
            })
            .collect();

        debug!(loaded_days = loads.len(), "日负载聚合完成");

        loads
    }
}

impl Default for LoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}
