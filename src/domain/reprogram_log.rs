// ==========================================
// 学业负载规划系统 - 重排日志领域模型
// ==========================================
// 依据: Planner_Master_Spec.md - 审计追踪
// ==========================================
// 红线: 只追加, 写入后永不修改或删除
// 用途: 审计追踪, 每次自动改期的可解释性
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::ReprogramReason;

// ==========================================
// ReprogrammingLogEntry - 重排日志条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReprogrammingLogEntry {
    // ===== 主键 =====
    pub log_id: Uuid, // 日志ID

    // ===== 关联 =====
    pub subtask_id: Uuid, // 被改期的子任务

    // ===== 改期内容 =====
    pub original_date: NaiveDate, // 改期前目标日期 (快照中的原值)
    pub new_date: NaiveDate,      // 改期后目标日期

    // ===== 原因与时间 =====
    pub reason: ReprogramReason,   // 改期原因 (OVERLOAD/MANUAL)
    pub created_at: NaiveDateTime, // 记录时间 (本次引擎调用的统一时间戳)
}

// ==========================================
// ReprogrammingLogEntry 辅助方法
// ==========================================
impl ReprogrammingLogEntry {
    /// 创建过载重排日志 (引擎自动改期)
    ///
    /// # 参数
    /// - `subtask_id`: 被改期子任务ID
    /// - `original_date`: 改期前目标日期
    /// - `new_date`: 改期后目标日期
    /// - `created_at`: 本次调用的统一时间戳
    pub fn overload(
        subtask_id: Uuid,
        original_date: NaiveDate,
        new_date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            log_id: Uuid::new_v4(),
            subtask_id,
            original_date,
            new_date,
            reason: ReprogramReason::Overload,
            created_at,
        }
    }

    /// 创建手动改期日志 (供调用方在用户改期时记录)
    pub fn manual(
        subtask_id: Uuid,
        original_date: NaiveDate,
        new_date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            log_id: Uuid::new_v4(),
            subtask_id,
            original_date,
            new_date,
            reason: ReprogramReason::Manual,
            created_at,
        }
    }
}
