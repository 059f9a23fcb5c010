// ==========================================
// 研究生学术研讨会管理系统 - 颁奖流程单导出
// ==========================================
// 职责: 按输入的颁奖典礼信息生成固定流程表
// ==========================================

use std::fs;
use std::path::Path;

/// 颁奖典礼信息 (由协调员表单输入)
#[derive(Debug, Clone, PartialEq)]
pub struct CeremonyDetails {
    pub date: String,  // 例: 20/04/2026
    pub time: String,  // 例: 14:00 - 17:00
    pub venue: String, // 例: Main Grand Hall
}

fn row(time: &str, activity: &str, remarks: &str) -> String {
    format!("{:<10} | {:<40} | {:<20}\n", time, activity, remarks)
}

/// 生成活动流程单文本
pub fn render_run_sheet(details: &CeremonyDetails) -> String {
    let today = chrono::Local::now().date_naive();

    let mut out = String::new();
    out.push_str("EVENT RUN SHEET & PROTOCOL\n");
    out.push_str("Event: Annual Research Seminar\n");
    out.push_str(&format!("Date:  {}\n", details.date));
    out.push_str(&format!("Time:  {}\n", details.time));
    out.push_str(&format!("Venue: {}\n", details.venue));
    out.push_str(&format!("Generated: {}\n", today));
    out.push_str("=========================================================================\n");
    out.push_str(&row("TIME", "ACTIVITY / MILESTONE", "REMARKS"));
    out.push_str("=========================================================================\n");
    out.push_str(&row("14:00", "Guest Arrival & Registration", "Front Desk Team"));
    out.push_str(&row("14:15", "Welcoming Speech (Dean)", "Stage Ready"));
    out.push_str(&row("14:30", "Keynote: Innovation in Tech", "Projector On"));
    out.push_str("-------------------------------------------------------------------------\n");
    out.push_str(&row("15:00", "AWARD CEREMONY COMMENCES", "MC Announce"));
    out.push_str(&row("     ", " - Best Oral Presenter", "Prepare Trophy"));
    out.push_str(&row("     ", " - Best Poster Presenter", "Prepare Trophy"));
    out.push_str(&row("     ", " - People's Choice Award", "Check Live Votes"));
    out.push_str("-------------------------------------------------------------------------\n");
    out.push_str(&row("15:45", "Photography Session", "Group Photo"));
    out.push_str(&row("16:00", "Refreshments & End", "Catering Team"));

    out
}

/// 导出流程单到文本文件
pub fn export_run_sheet(details: &CeremonyDetails, path: impl AsRef<Path>) -> std::io::Result<()> {
    fs::write(path, render_run_sheet(details))
}
