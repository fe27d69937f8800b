// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use study_aps::domain::types::{ActivityKind, SubtaskStatus};
use study_aps::domain::{Activity, DailyCapacity, Subtask};
use study_aps::engine::SubtaskMove;

/// 测试用日期 (2026年3月)
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

/// 测试用统一时间戳
pub fn timestamp() -> NaiveDateTime {
    day(1).and_hms_opt(8, 0, 0).unwrap()
}

/// 测试用每日容量
pub fn capacity(limit: f64) -> DailyCapacity {
    DailyCapacity::new(limit)
}

// ==========================================
// Activity 构建器
// ==========================================

pub struct ActivityBuilder {
    id: Uuid,
    title: String,
    kind: ActivityKind,
    course_id: Option<Uuid>,
    deadline: NaiveDate,
}

impl ActivityBuilder {
    pub fn new(title: &str, deadline: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind: ActivityKind::Assignment,
            course_id: None,
            deadline,
        }
    }

    pub fn id(mut self, id: u128) -> Self {
        self.id = Uuid::from_u128(id);
        self
    }

    pub fn kind(mut self, kind: ActivityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn course(mut self, course_id: Uuid) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn build(self) -> Activity {
        let mut activity = Activity::new(&self.title, self.kind, self.deadline);
        activity.id = self.id;
        activity.course_id = self.course_id;
        activity
    }
}

// ==========================================
// Subtask 构建器
// ==========================================

pub struct SubtaskBuilder {
    id: Uuid,
    activity_id: Uuid,
    title: String,
    status: SubtaskStatus,
    estimated_hours: f64,
    target_date: NaiveDate,
}

impl SubtaskBuilder {
    pub fn new(activity: &Activity, estimated_hours: f64, target_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            activity_id: activity.id,
            title: "子任务".to_string(),
            status: SubtaskStatus::Pending,
            estimated_hours,
            target_date,
        }
    }

    pub fn id(mut self, id: u128) -> Self {
        self.id = Uuid::from_u128(id);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn status(mut self, status: SubtaskStatus) -> Self {
        self.status = status;
        self
    }

    /// 直接指定父活动ID (用于构造孤儿子任务等非法快照)
    pub fn activity_id(mut self, activity_id: Uuid) -> Self {
        self.activity_id = activity_id;
        self
    }

    pub fn build(self) -> Subtask {
        let mut subtask = Subtask::new(
            self.activity_id,
            &self.title,
            self.estimated_hours,
            self.target_date,
        );
        subtask.id = self.id;
        subtask.status = self.status;
        subtask
    }
}

// ==========================================
// 结果应用辅助
// ==========================================

/// 把引擎输出的改期记录套用回子任务集合 (模拟调用方落库)
pub fn apply_moves(subtasks: &mut [Subtask], moves: &[SubtaskMove]) {
    for m in moves {
        if let Some(subtask) = subtasks.iter_mut().find(|s| s.id == m.subtask_id) {
            subtask.target_date = m.new_date;
        }
    }
}
