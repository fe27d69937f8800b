// ==========================================
// 学业负载规划系统 - 引擎层错误类型
// ==========================================
// 依据: Planner_Master_Spec.md - 错误分级
// 工具: thiserror 派生宏
// ==========================================
// 红线: 结构性错误不可在引擎内恢复, 必须上抛给调用方修复快照
// 红线: 不可行重排(无解)不是错误, 以结果形式返回
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// 引擎层结构性错误
///
/// 快照违反数据模型不变量时产生; 调用方必须修复或拒绝快照后重试
#[derive(Error, Debug)]
pub enum StructuralError {
    // ===== 引用完整性错误 =====
    #[error("孤儿子任务: subtask_id={subtask_id}, 父活动 {activity_id} 不在快照中")]
    OrphanSubtask { subtask_id: Uuid, activity_id: Uuid },

    #[error("活动ID重复: {activity_id}")]
    DuplicateActivityId { activity_id: Uuid },

    #[error("子任务ID重复: {subtask_id}")]
    DuplicateSubtaskId { subtask_id: Uuid },

    // ===== 数据不变量错误 =====
    #[error("目标日期越过截止日期: subtask_id={subtask_id}, target_date={target_date}, deadline={deadline}")]
    TargetDateBeyondDeadline {
        subtask_id: Uuid,
        target_date: NaiveDate,
        deadline: NaiveDate,
    },

    #[error("预估小时数非法: subtask_id={subtask_id}, estimated_hours={hours} (要求为正且有限)")]
    NonPositiveHours { subtask_id: Uuid, hours: f64 },

    #[error("每日时长限制越界: limit={limit} (合法区间 [{min}, {max}])")]
    HourLimitOutOfRange { limit: f64, min: f64, max: f64 },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, StructuralError>;
