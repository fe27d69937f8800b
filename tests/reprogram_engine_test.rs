// ==========================================
// 重排引擎 端到端属性测试
// ==========================================
// 测试目标: 通过编排器验证重排的业务属性
// 覆盖范围: 容量守恒、截止日期保全、只向后移动、幂等性
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use std::collections::BTreeMap;

use study_aps::domain::{Activity, Subtask};
use study_aps::engine::PlannerOrchestrator;

fn run(
    limit: f64,
    activities: &[Activity],
    subtasks: &[Subtask],
) -> study_aps::engine::ScheduleResult {
    PlannerOrchestrator::new()
        .compute_schedule_at(&capacity(limit), activities, subtasks, day(1), timestamp())
        .expect("快照应通过校验")
}

/// 按日期汇总开放子任务小时数 (测试侧独立实现, 用于交叉验证)
fn loads_after(subtasks: &[Subtask]) -> BTreeMap<chrono::NaiveDate, f64> {
    let mut per_day = BTreeMap::new();
    for s in subtasks.iter().filter(|s| s.is_open()) {
        *per_day.entry(s.target_date).or_insert(0.0) += s.estimated_hours;
    }
    per_day
}

// ==========================================
// 规格场景
// ==========================================

/// 场景: 8小时限额, 同日两个5小时子任务 → 挪走一个即可化解
#[test]
fn test_two_tasks_one_move_resolves() {
    let activity = ActivityBuilder::new("项目一", day(10)).build();
    let subtasks = vec![
        SubtaskBuilder::new(&activity, 5.0, day(2)).id(1).build(),
        SubtaskBuilder::new(&activity, 5.0, day(2)).id(2).build(),
    ];

    let result = run(8.0, &[activity], &subtasks);

    assert_eq!(result.moves.len(), 1);
    assert_eq!(result.moves[0].new_date, day(3)); // 次日空载
    assert!(result.unresolved_conflicts.is_empty());
    assert!(result.is_feasible());
}

/// 场景: 4小时限额, 6小时子任务截止日期内无处容身 → 上报无解
#[test]
fn test_oversized_task_reported_unresolved() {
    let activity = ActivityBuilder::new("考试复习", day(3)).build();
    let subtasks = vec![
        SubtaskBuilder::new(&activity, 6.0, day(1)).id(1).build(),
        SubtaskBuilder::new(&activity, 3.0, day(1)).id(2).build(),
    ];

    let result = run(4.0, &[activity], &subtasks);

    // 3小时任务外移, 6小时任务原地保留并上报
    assert_eq!(result.moves.len(), 1);
    assert_eq!(result.unresolved_conflicts.len(), 1);
    assert_eq!(result.unresolved_conflicts[0].date, day(1));
    assert!((result.unresolved_conflicts[0].overflow_hours - 2.0).abs() < 1e-9);
    assert!(!result.is_feasible());
}

// ==========================================
// 业务属性
// ==========================================

/// 容量守恒: 套用改期后, 非残留冲突日的负载均不超限
#[test]
fn test_capacity_respected_after_applying_moves() {
    let a1 = ActivityBuilder::new("作业一", day(12)).build();
    let a2 = ActivityBuilder::new("项目一", day(16)).build();
    let mut subtasks = vec![
        SubtaskBuilder::new(&a1, 3.0, day(2)).id(1).build(),
        SubtaskBuilder::new(&a1, 2.5, day(2)).id(2).build(),
        SubtaskBuilder::new(&a1, 2.0, day(2)).id(3).build(),
        SubtaskBuilder::new(&a2, 4.0, day(3)).id(4).build(),
        SubtaskBuilder::new(&a2, 1.5, day(3)).id(5).build(),
        SubtaskBuilder::new(&a2, 1.0, day(5)).id(6).build(),
    ];

    let result = run(5.0, &[a1, a2], &subtasks);
    apply_moves(&mut subtasks, &result.moves);

    let unresolved_dates: Vec<_> = result
        .unresolved_conflicts
        .iter()
        .map(|c| c.date)
        .collect();

    for (date, hours) in loads_after(&subtasks) {
        if !unresolved_dates.contains(&date) {
            assert!(
                hours <= 5.0 + 1e-6,
                "日期 {} 套用改期后负载 {} 超限",
                date,
                hours
            );
        }
    }
}

/// 截止日期保全: 每条改期的 new_date 不晚于父活动 deadline
#[test]
fn test_deadline_preserved_for_every_move() {
    let a1 = ActivityBuilder::new("作业一", day(6)).build();
    let a2 = ActivityBuilder::new("项目一", day(14)).build();
    let subtasks = vec![
        SubtaskBuilder::new(&a1, 4.0, day(2)).id(1).build(),
        SubtaskBuilder::new(&a1, 3.0, day(2)).id(2).build(),
        SubtaskBuilder::new(&a2, 3.0, day(2)).id(3).build(),
        SubtaskBuilder::new(&a2, 2.0, day(4)).id(4).build(),
    ];
    let deadlines = [
        (1u128, day(6)),
        (2, day(6)),
        (3, day(14)),
        (4, day(14)),
    ];

    let result = run(5.0, &[a1, a2], &subtasks);

    for m in &result.moves {
        let deadline = deadlines
            .iter()
            .find(|(id, _)| uuid::Uuid::from_u128(*id) == m.subtask_id)
            .map(|(_, d)| *d)
            .expect("改期的子任务必在快照内");
        assert!(m.new_date <= deadline);
    }
    assert!(!result.moves.is_empty());
}

/// 只向后移动: new_date 严格晚于 original_date
#[test]
fn test_moves_are_strictly_forward() {
    let activity = ActivityBuilder::new("作业一", day(20)).build();
    let subtasks = vec![
        SubtaskBuilder::new(&activity, 6.0, day(3)).id(1).build(),
        SubtaskBuilder::new(&activity, 5.0, day(3)).id(2).build(),
        SubtaskBuilder::new(&activity, 4.0, day(3)).id(3).build(),
    ];

    let result = run(8.0, &[activity], &subtasks);

    assert!(!result.moves.is_empty());
    for m in &result.moves {
        assert!(m.new_date > m.original_date);
    }
}

/// 幂等性: 套用改期后的快照再跑一遍, 无改期无冲突
#[test]
fn test_idempotent_on_resolved_plan() {
    let a1 = ActivityBuilder::new("作业一", day(15)).build();
    let a2 = ActivityBuilder::new("项目一", day(18)).build();
    let mut subtasks = vec![
        SubtaskBuilder::new(&a1, 3.0, day(2)).id(1).build(),
        SubtaskBuilder::new(&a1, 3.0, day(2)).id(2).build(),
        SubtaskBuilder::new(&a2, 2.0, day(2)).id(3).build(),
        SubtaskBuilder::new(&a2, 4.0, day(3)).id(4).build(),
    ];

    let first = run(5.0, &[a1.clone(), a2.clone()], &subtasks);
    assert!(first.is_feasible(), "该快照应能完全化解");

    apply_moves(&mut subtasks, &first.moves);
    let second = run(5.0, &[a1, a2], &subtasks);

    assert!(second.moves.is_empty());
    assert!(second.unresolved_conflicts.is_empty());
    assert!(second.log_entries.is_empty());
}

/// 冲突标记刷新: 残留冲突日上的子任务全部列出
#[test]
fn test_conflicted_subtask_ids_cover_unresolved_days() {
    let activity = ActivityBuilder::new("考试复习", day(2)).build();
    // 截止日期只到 day2, day2 又被占满: day1 的两个任务均无解
    let subtasks = vec![
        SubtaskBuilder::new(&activity, 5.0, day(1)).id(1).build(),
        SubtaskBuilder::new(&activity, 5.0, day(1)).id(2).build(),
        SubtaskBuilder::new(&activity, 8.0, day(2)).id(3).build(),
    ];

    let result = run(8.0, &[activity], &subtasks);

    assert!(result.moves.is_empty());
    assert_eq!(result.unresolved_conflicts.len(), 1);
    assert_eq!(
        result.conflicted_subtask_ids,
        vec![uuid::Uuid::from_u128(1), uuid::Uuid::from_u128(2)]
    );
}
