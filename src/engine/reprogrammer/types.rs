// ==========================================
// 重排引擎 - 结果类型
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::conflict_detector::DayConflict;

// ==========================================
// SubtaskMove - 改期记录
// ==========================================
// 每个被移动的子任务恰有一条; original_date 为快照中的原值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskMove {
    pub subtask_id: Uuid,         // 被改期子任务ID
    pub original_date: NaiveDate, // 改期前目标日期
    pub new_date: NaiveDate,      // 改期后目标日期
}

// ==========================================
// ReprogramOutcome - 重排结果（内部使用）
// ==========================================
/// 重排结果
/// 职责: plan 的返回值, 包含改期明细与残留冲突
#[derive(Debug, Clone)]
pub struct ReprogramOutcome {
    /// 改期记录 (仅实际移动的子任务)
    pub moves: Vec<SubtaskMove>,
    /// 残留冲突日 (按日期升序, overflow 为重排后的残值)
    pub unresolved_conflicts: Vec<DayConflict>,
    /// 仍落在残留冲突日上的开放子任务 (按ID升序, 供调用方刷新冲突标记)
    pub conflicted_subtask_ids: Vec<Uuid>,
}

impl ReprogramOutcome {
    /// 判断计划是否完全可行 (无残留冲突)
    pub fn is_feasible(&self) -> bool {
        self.unresolved_conflicts.is_empty()
    }
}
