// ==========================================
// 学业负载规划系统 - 命令行入口
// ==========================================
// 依据: Planner_Master_Spec.md
// 用途: 读取单个学生的规划快照(JSON), 执行排程, 输出结果(JSON)
// 系统定位: 演示与排障入口; 正式调用方通过库接口集成
// ==========================================

use anyhow::{bail, Context, Result};
use std::fs;

use study_aps::domain::PlanningSnapshot;
use study_aps::engine::PlannerOrchestrator;
use study_aps::logging;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 过载冲突检测与重排引擎", study_aps::APP_NAME);
    tracing::info!("系统版本: {}", study_aps::VERSION);
    tracing::info!("==================================================");

    // 读取快照路径
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("用法: {} <snapshot.json>", args[0]);
    }
    let snapshot_path = &args[1];

    tracing::info!("读取规划快照: {}", snapshot_path);

    let raw = fs::read_to_string(snapshot_path)
        .with_context(|| format!("无法读取快照文件: {}", snapshot_path))?;
    let snapshot: PlanningSnapshot =
        serde_json::from_str(&raw).context("快照JSON解析失败")?;

    // 执行排程
    let orchestrator = PlannerOrchestrator::new();
    let result = orchestrator
        .compute_schedule_snapshot(&snapshot)
        .context("快照结构性校验未通过, 请修复数据后重试")?;

    tracing::info!(
        moved = result.stats.moved_count,
        unresolved_days = result.stats.unresolved_days,
        feasible = result.is_feasible(),
        "排程完成"
    );

    // 输出结果 (stdout, 供调用方/脚本消费)
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
