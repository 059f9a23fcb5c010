// ==========================================
// 研究生学术研讨会管理系统 - 主入口
// ==========================================
// 说明: GUI 外壳不在本仓库范围内; 本入口以无界面方式
//       打开引擎, 输出实时分析并导出三份文本报表
// ==========================================

use anyhow::Context;
use seminar_system::app::{default_data_path, AppState};
use seminar_system::report::{
    compute_analytics, compute_awards, export_evaluation_report, export_run_sheet,
    export_schedule, render_award_summary, CeremonyDetails,
};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    seminar_system::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", seminar_system::APP_NAME);
    tracing::info!("系统版本: {}", seminar_system::VERSION);
    tracing::info!("==================================================");

    // 获取快照路径并初始化引擎
    let data_path = default_data_path();
    tracing::info!("使用数据文件: {}", data_path.display());

    let state = AppState::new(&data_path);
    let engine = state
        .engine
        .lock()
        .map_err(|_| anyhow::anyhow!("引擎状态锁中毒"))?;

    // 实时分析
    let analytics = compute_analytics(&engine);
    tracing::info!(
        "已登记报告: {} | 评审进度: {}% ({}/{}) | 全局均分: {:.2} | 场次: {}",
        analytics.total_presentations,
        analytics.completion_percent,
        analytics.evaluated_count,
        analytics.total_presentations,
        analytics.global_average,
        analytics.session_count
    );

    // 评奖结果
    let winners = compute_awards(&engine);
    for line in render_award_summary(&winners).lines().filter(|l| !l.is_empty()) {
        tracing::info!("{}", line);
    }

    // 导出三份文本报表到当前目录
    export_schedule(&engine, "Seminar_Schedule.txt").context("导出日程失败")?;
    export_evaluation_report(&engine, "Final_Evaluation_Report.txt").context("导出评审报告失败")?;

    let ceremony = CeremonyDetails {
        date: "20/04/2026".to_string(),
        time: "14:00 - 17:00".to_string(),
        venue: "Main Grand Hall".to_string(),
    };
    export_run_sheet(&ceremony, "Event_Run_Sheet.txt").context("导出流程单失败")?;

    tracing::info!("报表导出完成: Seminar_Schedule.txt / Final_Evaluation_Report.txt / Event_Run_Sheet.txt");
    Ok(())
}
