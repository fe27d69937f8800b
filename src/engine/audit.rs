// ==========================================
// 学业负载规划系统 - 审计记录引擎
// ==========================================
// 依据: Engine_Specs_v0.1_Planner.md - 5. Audit Recorder
// 红线: 每个被移动的子任务每次调用恰记一条; 日志只追加
// ==========================================
// 职责: 把重排引擎的改期记录转换为不可变日志条目
// 输入: 改期记录 + 本次调用时间戳
// 输出: 重排日志条目序列
// ==========================================

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::reprogram_log::ReprogrammingLogEntry;
use crate::engine::reprogrammer::SubtaskMove;

// ==========================================
// AuditRecorder - 审计记录引擎
// ==========================================
pub struct AuditRecorder {
    // 无状态引擎,不需要注入依赖
}

impl AuditRecorder {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 为每条改期记录生成过载重排日志
    ///
    /// original_date 取移动前快照值, new_date 取移动后值;
    /// 扫描规则排除原日期本身, 因此不存在 new_date == original_date 的空移动
    ///
    /// # 参数
    /// - `moves`: 重排引擎输出的改期记录
    /// - `created_at`: 本次引擎调用的统一时间戳
    ///
    /// # 返回
    /// 与 moves 等长、顺序一致的日志条目序列
    pub fn record(
        &self,
        moves: &[SubtaskMove],
        created_at: NaiveDateTime,
    ) -> Vec<ReprogrammingLogEntry> {
        let entries: Vec<ReprogrammingLogEntry> = moves
            .iter()
            .map(|m| {
                ReprogrammingLogEntry::overload(
                    m.subtask_id,
                    m.original_date,
                    m.new_date,
                    created_at,
                )
            })
            .collect();

        debug!(log_entries = entries.len(), "审计日志生成完成");

        entries
    }
}

impl Default for AuditRecorder {
    fn default() -> Self {
        Self::new()
    }
}
