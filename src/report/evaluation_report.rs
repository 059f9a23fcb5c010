// ==========================================
// 研究生学术研讨会管理系统 - 评审报告导出
// ==========================================
// 职责: 按报告生成明细评分文本 (四项评分 + 评语 + 合计均分)
// 说明: 均分为本报告各评审合计分的平均, 非加权分, 两位小数
// ==========================================

use crate::domain::{PresentationType, Role};
use crate::engine::SeminarEngine;
use std::fs;
use std::path::Path;

/// 生成最终评审报告文本
///
/// 无评审的报告输出 PENDING 状态;
/// Poster 类型且已分配展板号的报告在类型后追加 [Board: B-xx]
pub fn render_evaluation_report(engine: &SeminarEngine) -> String {
    let evaluators = engine.users_by_role(Role::Evaluator);
    let today = chrono::Local::now().date_naive();

    let mut out = String::new();
    out.push_str("*************************************************************\n");
    out.push_str("              FINAL EVALUATION REPORT             \n");
    out.push_str(&format!("             Generated on: {}\n", today));
    out.push_str("*************************************************************\n\n");

    for p in engine.presentations() {
        let mut type_str = p.kind.to_string();
        if p.kind == PresentationType::Poster {
            if let Some(board_id) = &p.board_id {
                type_str.push_str(&format!(" [Board: {}]", board_id));
            }
        }

        out.push_str(&format!("STUDENT: {:<25} | ID: {}\n", p.student_name, p.student_id));
        out.push_str(&format!("TITLE:   {:<50}\n", p.title));
        out.push_str(&format!("TYPE:    {:<25}\n", type_str));
        out.push_str("-------------------------------------------------------------\n");

        if p.evaluations.is_empty() {
            out.push_str("STATUS:  PENDING (No evaluations yet)\n");
        } else {
            for ev in &p.evaluations {
                // 评审人已被删除时退回显示原始 ID
                let name = evaluators
                    .iter()
                    .find(|u| u.id == ev.evaluator_id)
                    .map(|u| u.username.as_str())
                    .unwrap_or(ev.evaluator_id.as_str());

                out.push_str(&format!("   > Evaluator: {}\n", name));
                out.push_str(&format!(
                    "     [Scores] Clarity: {} | Method: {} | Results: {} | Pres: {}\n",
                    ev.problem_clarity, ev.methodology, ev.results, ev.presentation
                ));
                out.push_str(&format!("     [Comment] \"{}\"\n", ev.comments));
                out.push('\n');
            }

            out.push_str(&format!(
                "FINAL AVERAGE SCORE: {:.2} / 20.00\n",
                p.average_total()
            ));
        }
        out.push_str("=============================================================\n\n");
    }

    out
}

/// 导出评审报告到文本文件
pub fn export_evaluation_report(
    engine: &SeminarEngine,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    fs::write(path, render_evaluation_report(engine))
}
