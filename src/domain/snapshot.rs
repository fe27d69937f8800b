// ==========================================
// 学业负载规划系统 - 规划快照
// ==========================================
// 依据: Planner_Master_Spec.md - 快照式调用契约
// ==========================================
// 用途: 调用方一次性传入单个学生的全部开放数据
// 红线: 快照在引擎内只读; 引擎返回的变更由调用方原子落库
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::activity::{Activity, Course};
use crate::domain::capacity::DailyCapacity;
use crate::domain::subtask::Subtask;

// ==========================================
// PlanningSnapshot - 规划快照
// ==========================================
// 集合无序: 引擎输出与 activities/subtasks 的传入顺序无关
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    pub capacity: DailyCapacity,  // 每日容量
    pub activities: Vec<Activity>, // 活动集合
    pub subtasks: Vec<Subtask>,    // 子任务集合 (可含 DONE, 引擎忽略)

    // 课程为纯分类数据, 引擎透传不消费
    #[serde(default)]
    pub courses: Vec<Course>, // 课程集合 (可选)
}
