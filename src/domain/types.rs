// ==========================================
// 学业负载规划系统 - 领域类型定义
// ==========================================
// 依据: Planner_Master_Spec.md - 子任务生命周期
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 子任务状态 (Subtask Status)
// ==========================================
// 生命周期: PENDING ⇄ IN_PROGRESS → DONE (终态)
// 序列化格式: SCREAMING_SNAKE_CASE (与存储层一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubtaskStatus {
    Pending,    // 待办
    InProgress, // 进行中
    Done,       // 已完成 (终态, 不参与负载与重排)
}

impl SubtaskStatus {
    /// 判断是否为开放状态 (参与负载计算与重排)
    pub fn is_open(&self) -> bool {
        !matches!(self, SubtaskStatus::Done)
    }

    /// 判断状态迁移是否合法
    ///
    /// 合法迁移: PENDING ⇄ IN_PROGRESS, PENDING → DONE, IN_PROGRESS → DONE
    /// DONE 为终态, 不允许任何出边
    pub fn can_transition_to(&self, next: SubtaskStatus) -> bool {
        match (self, next) {
            (SubtaskStatus::Pending, SubtaskStatus::InProgress) => true,
            (SubtaskStatus::Pending, SubtaskStatus::Done) => true,
            (SubtaskStatus::InProgress, SubtaskStatus::Pending) => true,
            (SubtaskStatus::InProgress, SubtaskStatus::Done) => true,
            _ => false,
        }
    }
}

impl fmt::Display for SubtaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtaskStatus::Pending => write!(f, "PENDING"),
            SubtaskStatus::InProgress => write!(f, "IN_PROGRESS"),
            SubtaskStatus::Done => write!(f, "DONE"),
        }
    }
}

// ==========================================
// 活动类型 (Activity Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Exam,       // 考试
    Project,    // 项目
    Assignment, // 作业
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Exam => write!(f, "EXAM"),
            ActivityKind::Project => write!(f, "PROJECT"),
            ActivityKind::Assignment => write!(f, "ASSIGNMENT"),
        }
    }
}

// ==========================================
// 重排原因 (Reprogram Reason)
// ==========================================
// 红线: 引擎自动重排只产生 Overload; Manual 由调用方人工改期时记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReprogramReason {
    Overload, // 当日负载超出每日时长限制
    Manual,   // 用户手动改期
}

impl ReprogramReason {
    /// 转换为字符串 (用于存储)
    pub fn as_str(&self) -> &'static str {
        match self {
            ReprogramReason::Overload => "OVERLOAD",
            ReprogramReason::Manual => "MANUAL",
        }
    }

    /// 从字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OVERLOAD" => Some(ReprogramReason::Overload),
            "MANUAL" => Some(ReprogramReason::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for ReprogramReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 单元测试
// ==========================================
