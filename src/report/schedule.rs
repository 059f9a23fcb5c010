// ==========================================
// 研究生学术研讨会管理系统 - 日程导出
// ==========================================
// 职责: 按场次生成日程文本 (评审名单 + 报告名单)
// 说明: 纯只读计算, 每次调用基于引擎当前状态重新推导
// ==========================================

use crate::domain::Role;
use crate::engine::SeminarEngine;
use std::fs;
use std::path::Path;

/// 生成日程文本
///
/// 每个场次输出编号/日期/时间/场地/类型, 以及解析后的评审显示名与报告标题;
/// 评审 ID 无法解析时显示 "Unknown (<id>)", 空列表输出占位行
pub fn render_schedule(engine: &SeminarEngine) -> String {
    let evaluators = engine.users_by_role(Role::Evaluator);
    let mut out = String::new();
    out.push_str("=== SEMINAR SCHEDULE ===\n\n");

    for s in engine.sessions() {
        out.push_str(&format!("SESSION: {}\n", s.session_id));
        out.push_str(&format!("  Date: {} | Time: {}\n", s.date, s.time));
        out.push_str(&format!("  Venue: {} ({})\n", s.venue, s.kind));

        out.push_str("  \nEvaluators:\n");
        if s.evaluator_ids.is_empty() {
            out.push_str("    (No evaluators assigned)\n");
        } else {
            for evaluator_id in &s.evaluator_ids {
                let name = evaluators
                    .iter()
                    .find(|u| u.id == *evaluator_id)
                    .map(|u| u.username.as_str())
                    .unwrap_or("Unknown");
                out.push_str(&format!("    - {} ({})\n", name, evaluator_id));
            }
        }

        out.push_str("  \nPresentations:\n");
        if s.student_ids.is_empty() {
            out.push_str("    (No presentations assigned yet)\n");
        } else {
            for student_id in &s.student_ids {
                if let Some(p) = engine.presentation_by_student(student_id) {
                    out.push_str(&format!("    - \"{}\" by {}\n", p.title, p.student_name));
                }
            }
        }

        out.push_str("\n--------------------------------------------------\n\n");
    }

    out
}

/// 导出日程到文本文件
pub fn export_schedule(engine: &SeminarEngine, path: impl AsRef<Path>) -> std::io::Result<()> {
    fs::write(path, render_schedule(engine))
}
