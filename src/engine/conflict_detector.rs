// ==========================================
// 学业负载规划系统 - 冲突检测引擎
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 3. Conflict Detector
// 红线: 容量约束优先于任务目标日期
// ==========================================
// 职责: 将日负载与每日时长限制比对, 标记过载日
// 输入: 日负载序列 + 每日容量
// 输出: 按日期升序的冲突日序列 (最早的冲突约束最少的未来日, 必须先解)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::domain::capacity::{CapacityConstraint, DailyCapacity};
use crate::engine::load_calculator::DayLoad;

// ==========================================
// DayConflict - 冲突日
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConflict {
    pub date: NaiveDate,     // 冲突日期
    pub overflow_hours: f64, // 超限小时数 (sum - limit)
}

// ==========================================
// ConflictDetector - 冲突检测引擎
// ==========================================
pub struct ConflictDetector {
    // 无状态引擎,不需要注入依赖
}

impl ConflictDetector {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 检测过载冲突日
    ///
    /// 冲突判定: total_hours > daily_hour_limit (超出容差)
    ///
    /// # 参数
    /// - `day_loads`: 按日期升序的日负载序列
    /// - `capacity`: 每日容量
    /// - `config`: 引擎参数 (容差)
    ///
    /// # 返回
    /// 按日期升序的冲突日序列
    pub fn detect(
        &self,
        day_loads: &[DayLoad],
        capacity: &DailyCapacity,
        config: &PlannerConfig,
    ) -> Vec<DayConflict> {
        let conflicts: Vec<DayConflict> = day_loads
            .iter()
            .filter(|load| capacity.is_overloaded(load.total_hours, config))
            .map(|load| DayConflict {
                date: load.date,
                overflow_hours: capacity.overflow_hours(load.total_hours, config),
            })
            .collect();

        if conflicts.is_empty() {
            debug!("未检测到过载冲突");
        } else {
            info!(
                conflict_days = conflicts.len(),
                first_conflict = %conflicts[0].date,
                "检测到过载冲突日"
            );
        }

        conflicts
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
