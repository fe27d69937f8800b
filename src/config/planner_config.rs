// ==========================================
// 学业负载规划系统 - 引擎参数
// ==========================================
// 依据: Planner_Master_Spec.md - 每日学习时长限制
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PlannerConfig - 引擎参数
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub min_daily_hour_limit: f64, // 每日时长下限: 0.5小时
    pub max_daily_hour_limit: f64, // 每日时长上限: 24小时
    pub hours_epsilon: f64,        // 小时数比较容差 (浮点求和噪声)
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_daily_hour_limit: 0.5,
            max_daily_hour_limit: 24.0,
            hours_epsilon: 1e-6,
        }
    }
}

impl PlannerConfig {
    /// 判断两个小时数在容差内是否可视为 a <= b
    pub fn le_hours(&self, a: f64, b: f64) -> bool {
        a <= b + self.hours_epsilon
    }

    /// 判断小时数在容差内是否严格超出 limit
    pub fn exceeds_hours(&self, sum: f64, limit: f64) -> bool {
        sum > limit + self.hours_epsilon
    }
}
