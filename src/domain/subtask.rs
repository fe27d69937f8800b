// ==========================================
// 学业负载规划系统 - 子任务领域模型
// ==========================================
// 依据: Planner_Master_Spec.md - 主实体定义
// ==========================================
// 红线: 非 DONE 子任务的 target_date 不得晚于父活动 deadline
// 红线: 引擎只改写 target_date, 其余字段由拥有者维护
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::SubtaskStatus;

// ==========================================
// Subtask - 子任务
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    // ===== 主键 =====
    pub id: Uuid, // 子任务ID

    // ===== 归属 =====
    pub activity_id: Uuid, // 父活动ID

    // ===== 基本信息 =====
    pub title: String,         // 子任务标题
    pub status: SubtaskStatus, // 状态 (PENDING/IN_PROGRESS/DONE)

    // ===== 计划信息 =====
    pub estimated_hours: f64,   // 预估投入 (小时, 正小数)
    pub target_date: NaiveDate, // 目标日期 (引擎重排时改写)

    // ===== 扩展字段 (调用方数据, 引擎透传) =====
    #[serde(default)]
    pub order: i64, // 活动内展示顺序
    #[serde(default)]
    pub execution_note: Option<String>, // 执行备注
    #[serde(default)]
    pub is_conflicted: bool, // 冲突标记 (引擎输出刷新值, 调用方落库)
}

impl Subtask {
    /// 创建子任务 (最小字段集, 扩展字段取默认)
    pub fn new(
        activity_id: Uuid,
        title: &str,
        estimated_hours: f64,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity_id,
            title: title.to_string(),
            status: SubtaskStatus::Pending,
            estimated_hours,
            target_date,
            order: 0,
            execution_note: None,
            is_conflicted: false,
        }
    }

    /// 判断是否为开放子任务 (参与负载与重排)
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// 判断引擎能否改写其目标日期
    ///
    /// 与 is_open 同义: 生命周期中只有 PENDING/IN_PROGRESS 可被重排
    pub fn is_movable(&self) -> bool {
        matches!(
            self.status,
            SubtaskStatus::Pending | SubtaskStatus::InProgress
        )
    }
}
