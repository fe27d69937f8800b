// ==========================================
// 学业负载规划系统 - 课程与活动领域模型
// ==========================================
// 依据: Planner_Master_Spec.md - 主实体定义
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::ActivityKind;

// ==========================================
// Course - 课程
// ==========================================
// 纯分类实体, 引擎不持有其生命周期
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,     // 课程ID
    pub name: String, // 课程名称
}

// ==========================================
// Activity - 评估活动
// ==========================================
// 红线: deadline 为纯日期 (无时间成分), 是子任务改期的硬上界
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    // ===== 主键 =====
    pub id: Uuid, // 活动ID

    // ===== 基本信息 =====
    pub title: String,          // 活动标题
    pub kind: ActivityKind,     // 活动类型 (EXAM/PROJECT/ASSIGNMENT)
    pub course_id: Option<Uuid>, // 所属课程 (可空, 课程删除后活动保留)

    // ===== 日期 =====
    pub deadline: NaiveDate, // 硬截止日期

    // ===== 扩展字段 (调用方数据, 引擎透传) =====
    #[serde(default)]
    pub description: Option<String>, // 描述
    #[serde(default)]
    pub event_datetime: Option<NaiveDateTime>, // 事件时刻 (如考试开考时间)
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>, // 创建时间
}

impl Activity {
    /// 创建活动 (最小字段集, 扩展字段置空)
    pub fn new(title: &str, kind: ActivityKind, deadline: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind,
            course_id: None,
            deadline,
            description: None,
            event_datetime: None,
            created_at: None,
        }
    }
}
