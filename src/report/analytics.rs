// ==========================================
// 研究生学术研讨会管理系统 - 实时分析与评奖
// ==========================================
// 职责: 基于引擎当前状态计算分析指标与获奖者
// 红线: 无缓存, 每次调用重新推导
// ==========================================

use crate::domain::PresentationType;
use crate::engine::SeminarEngine;

// ==========================================
// LiveAnalytics - 实时分析指标
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct LiveAnalytics {
    pub total_presentations: usize, // 已登记报告总数
    pub evaluated_count: usize,     // 至少有一条评审的报告数
    pub completion_percent: usize,  // 评审进度 (整数下取整, 无报告时为 0)
    pub global_average: f64,        // 全部评审合计分的平坦均值 (非先按报告平均)
    pub session_count: usize,       // 场次总数
}

/// 计算实时分析指标
pub fn compute_analytics(engine: &SeminarEngine) -> LiveAnalytics {
    let total_presentations = engine.presentations().len();
    let mut evaluated_count = 0;
    let mut sum_scores = 0.0;
    let mut count_scores = 0;

    for p in engine.presentations() {
        if !p.evaluations.is_empty() {
            evaluated_count += 1;
            for ev in &p.evaluations {
                sum_scores += f64::from(ev.total());
                count_scores += 1;
            }
        }
    }

    let global_average = if count_scores > 0 {
        sum_scores / f64::from(count_scores)
    } else {
        0.0
    };
    let completion_percent = if total_presentations > 0 {
        evaluated_count * 100 / total_presentations
    } else {
        0
    };

    LiveAnalytics {
        total_presentations,
        evaluated_count,
        completion_percent,
        global_average,
        session_count: engine.sessions().len(),
    }
}

/// 生成分析面板文本
pub fn render_analytics_summary(a: &LiveAnalytics) -> String {
    format!(
        ">> DATA ANALYTICS DASHBOARD <<\n\n\
         Total Presentations Registered: {}\n\
         Evaluation Progress: {}% ({}/{})\n\
         Overall Average Score: {:.2} / 20.00\n\
         Active Sessions: {}",
        a.total_presentations,
        a.completion_percent,
        a.evaluated_count,
        a.total_presentations,
        a.global_average,
        a.session_count
    )
}

// ==========================================
// 评奖计算
// ==========================================

/// 按评分获奖者 (最佳 Oral / 最佳 Poster)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWinner {
    pub student_id: String,
    pub student_name: String,
    pub average_total: f64, // 获奖时的报告均分
}

/// 按票数获奖者 (观众选择奖)
#[derive(Debug, Clone, PartialEq)]
pub struct VotedWinner {
    pub student_id: String,
    pub student_name: String,
    pub votes: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AwardWinners {
    pub best_oral: Option<ScoredWinner>,
    pub best_poster: Option<ScoredWinner>,
    pub peoples_choice: Option<VotedWinner>,
}

/// 单次线性扫描计算三个奖项
///
/// # 说明
/// 比较使用严格大于, 平分时先遇到者获奖;
/// 无评审的报告按均分 0 参与 Oral/Poster 比较, 全场未评审时仍可产生获奖者
pub fn compute_awards(engine: &SeminarEngine) -> AwardWinners {
    let mut winners = AwardWinners::default();
    let mut max_oral = -1.0_f64;
    let mut max_poster = -1.0_f64;
    let mut max_votes = -1_i32;

    for p in engine.presentations() {
        let avg = p.average_total();

        if p.kind == PresentationType::Oral && avg > max_oral {
            max_oral = avg;
            winners.best_oral = Some(ScoredWinner {
                student_id: p.student_id.clone(),
                student_name: p.student_name.clone(),
                average_total: avg,
            });
        }
        if p.kind == PresentationType::Poster && avg > max_poster {
            max_poster = avg;
            winners.best_poster = Some(ScoredWinner {
                student_id: p.student_id.clone(),
                student_name: p.student_name.clone(),
                average_total: avg,
            });
        }
        if p.audience_votes > max_votes {
            max_votes = p.audience_votes;
            winners.peoples_choice = Some(VotedWinner {
                student_id: p.student_id.clone(),
                student_name: p.student_name.clone(),
                votes: p.audience_votes,
            });
        }
    }

    winners
}

/// 生成获奖者文本块
pub fn render_award_summary(winners: &AwardWinners) -> String {
    let mut out = String::from(">> CURRENT BEST PRESENTER <<\n\n");

    out.push_str("BEST AWARD (Oral):   ");
    match &winners.best_oral {
        Some(w) => out.push_str(&format!("{} ({:.2})", w.student_name, w.average_total)),
        None => out.push('-'),
    }
    out.push('\n');

    out.push_str("BEST AWARD (Poster): ");
    match &winners.best_poster {
        Some(w) => out.push_str(&format!("{} ({:.2})", w.student_name, w.average_total)),
        None => out.push('-'),
    }
    out.push('\n');

    out.push_str("PEOPLE'S CHOICE:     ");
    match &winners.peoples_choice {
        Some(w) => out.push_str(&format!("{} ({} votes)", w.student_name, w.votes)),
        None => out.push('-'),
    }
    out.push('\n');

    out
}
