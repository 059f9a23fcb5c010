// ==========================================
// 研究生学术研讨会管理系统 - 报表层
// ==========================================
// 职责: 只读汇总计算与文本导出 (日程 / 评审报告 / 分析 / 评奖 / 流程单)
// 红线: 不修改引擎状态, 不缓存结果
// ==========================================

pub mod analytics;
pub mod evaluation_report;
pub mod run_sheet;
pub mod schedule;

// 重导出核心类型
pub use analytics::{
    compute_analytics, compute_awards, render_analytics_summary, render_award_summary,
    AwardWinners, LiveAnalytics, ScoredWinner, VotedWinner,
};
pub use evaluation_report::{export_evaluation_report, render_evaluation_report};
pub use run_sheet::{export_run_sheet, render_run_sheet, CeremonyDetails};
pub use schedule::{export_schedule, render_schedule};
