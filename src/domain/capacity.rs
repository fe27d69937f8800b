// ==========================================
// 学业负载规划系统 - 每日容量领域模型
// ==========================================
// 依据: Planner_Master_Spec.md - 每日学习时长限制
// ==========================================
// 红线: 容量约束优先于任务目标日期
// 用途: 单个学生的每日可投入小时预算
// ==========================================

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;

// ==========================================
// DailyCapacity - 每日容量
// ==========================================
// 由调用方从用户档案读出后注入, 引擎内不可变
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyCapacity {
    pub daily_hour_limit: f64, // 每日时长限制 (小时, 正小数)
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 负载检查接口 (冲突检测与重排共用)
pub trait CapacityConstraint {
    /// 检查在已有负载上还能否放入指定小时数
    fn can_fit(&self, load_hours: f64, extra_hours: f64, config: &PlannerConfig) -> bool;

    /// 判断指定负载是否超限
    fn is_overloaded(&self, load_hours: f64, config: &PlannerConfig) -> bool;

    /// 计算剩余容量 (可为负)
    fn remaining_hours(&self, load_hours: f64) -> f64;

    /// 计算超限小时数 (不超限时为 0)
    fn overflow_hours(&self, load_hours: f64, config: &PlannerConfig) -> f64;
}

impl CapacityConstraint for DailyCapacity {
    fn can_fit(&self, load_hours: f64, extra_hours: f64, config: &PlannerConfig) -> bool {
        config.le_hours(load_hours + extra_hours, self.daily_hour_limit)
    }

    fn is_overloaded(&self, load_hours: f64, config: &PlannerConfig) -> bool {
        config.exceeds_hours(load_hours, self.daily_hour_limit)
    }

    fn remaining_hours(&self, load_hours: f64) -> f64 {
        self.daily_hour_limit - load_hours
    }

    fn overflow_hours(&self, load_hours: f64, config: &PlannerConfig) -> f64 {
        if self.is_overloaded(load_hours, config) {
            load_hours - self.daily_hour_limit
        } else {
            0.0
        }
    }
}

// ==========================================
// DailyCapacity 辅助方法
// ==========================================
impl DailyCapacity {
    /// 创建每日容量
    pub fn new(daily_hour_limit: f64) -> Self {
        Self { daily_hour_limit }
    }

    /// 判断时长限制是否落在配置的合法区间内
    ///
    /// 合法区间默认 [0.5, 24.0], 同时排除 NaN / 无穷大
    pub fn is_within_bounds(&self, config: &PlannerConfig) -> bool {
        self.daily_hour_limit.is_finite()
            && self.daily_hour_limit >= config.min_daily_hour_limit
            && self.daily_hour_limit <= config.max_daily_hour_limit
    }
}
