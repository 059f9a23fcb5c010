// ==========================================
// 报表层集成测试
// ==========================================
// 测试目标: 验证日程/评审报告/实时分析/评奖/流程单的计算与文本输出
// ==========================================


use seminar_system::domain::PresentationType;
use seminar_system::report::{
    compute_analytics, compute_awards, render_analytics_summary, render_award_summary,
    render_evaluation_report, render_run_sheet, render_schedule, CeremonyDetails,
};
use test_helpers::{create_test_engine, sample_evaluation, sample_presentation, sample_session};

// ===== 日程导出 =====

#[test]
fn test_schedule_renders_placeholders_for_empty_lists() {
    let (_dir, mut engine) = create_test_engine();
    engine.create_session(sample_session("S-1001", PresentationType::Oral));

    let text = render_schedule(&engine);

    assert!(text.starts_with("=== SEMINAR SCHEDULE ===\n"));
    assert!(text.contains("SESSION: S-1001"));
    assert!(text.contains("  Date: 01/04/2026 | Time: 09:00 - 12:00\n"));
    assert!(text.contains("  Venue: Hall A (Oral)\n"));
    assert!(text.contains("    (No evaluators assigned)\n"));
    assert!(text.contains("    (No presentations assigned yet)\n"));
}

#[test]
fn test_schedule_resolves_names_and_marks_unknown_evaluators() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "Jasmyne Yap", PresentationType::Oral));
    engine.create_session(sample_session("S-1001", PresentationType::Oral));
    engine.assign_to_session(
        "S-1001",
        vec!["E001".to_string(), "E999".to_string()],
        vec!["S001".to_string(), "GHOST".to_string()],
    );

    let text = render_schedule(&engine);

    assert!(text.contains("    - Prof. Josh (E001)\n"));
    // 无法解析的评审 ID 渲染为 Unknown
    assert!(text.contains("    - Unknown (E999)\n"));
    assert!(text.contains("    - \"Study S001\" by Jasmyne Yap\n"));
    // 无报告的学生 ID 不产生输出行
    assert!(!text.contains("GHOST"));
}

// ===== 评审报告 =====

#[test]
fn test_evaluation_report_pending_and_average() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "Jasmyne Yap", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S002", "Wan Hanani", PresentationType::Oral));
    // S002: 合计 14 与 18, 均分 16.00
    engine.add_evaluation("S002", sample_evaluation("E001", [3, 4, 3, 4], "decent"));
    engine.add_evaluation("S002", sample_evaluation("E002", [5, 5, 4, 4], "strong"));

    let text = render_evaluation_report(&engine);

    assert!(text.contains("FINAL EVALUATION REPORT"));
    assert!(text.contains("Generated on: "));
    assert!(text.contains("STATUS:  PENDING (No evaluations yet)\n"));
    assert!(text.contains("   > Evaluator: Prof. Josh\n"));
    assert!(text.contains("     [Scores] Clarity: 3 | Method: 4 | Results: 3 | Pres: 4\n"));
    assert!(text.contains("     [Comment] \"decent\"\n"));
    assert!(text.contains("FINAL AVERAGE SCORE: 16.00 / 20.00\n"));
}

#[test]
fn test_evaluation_report_appends_board_id_for_posters() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "Jasmyne Yap", PresentationType::Poster));
    engine.create_session(sample_session("S-2001", PresentationType::Poster));
    engine.assign_to_session("S-2001", Vec::new(), vec!["S001".to_string()]);

    let text = render_evaluation_report(&engine);

    assert!(text.contains("TYPE:    Poster [Board: B-01]"));
}

#[test]
fn test_evaluation_report_falls_back_to_raw_evaluator_id() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "Jasmyne Yap", PresentationType::Oral));
    engine.add_evaluation("S001", sample_evaluation("E999", [3, 3, 3, 3], "anon"));

    let text = render_evaluation_report(&engine);

    // 评审人不在用户集合中时直接显示原始 ID
    assert!(text.contains("   > Evaluator: E999\n"));
}

// ===== 实时分析 =====

#[test]
fn test_analytics_global_average_is_flat_mean() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "A", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S002", "B", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S003", "C", PresentationType::Poster));
    // 合计 {10, 14} 在 S001, {18} 在 S002: 平坦均值 (10+14+18)/3 = 14.0
    engine.add_evaluation("S001", sample_evaluation("E001", [2, 3, 2, 3], ""));
    engine.add_evaluation("S001", sample_evaluation("E002", [3, 4, 3, 4], ""));
    engine.add_evaluation("S002", sample_evaluation("E001", [5, 5, 4, 4], ""));
    engine.create_session(sample_session("S-1001", PresentationType::Oral));

    let a = compute_analytics(&engine);

    assert_eq!(a.total_presentations, 3);
    assert_eq!(a.evaluated_count, 2);
    // 2/3 下取整
    assert_eq!(a.completion_percent, 66);
    assert!((a.global_average - 14.0).abs() < f64::EPSILON);
    assert_eq!(a.session_count, 1);

    let text = render_analytics_summary(&a);
    assert!(text.contains("Evaluation Progress: 66% (2/3)"));
    assert!(text.contains("Overall Average Score: 14.00 / 20.00"));
}

#[test]
fn test_analytics_empty_state_is_all_zero() {
    let (_dir, engine) = create_test_engine();

    let a = compute_analytics(&engine);

    assert_eq!(a.total_presentations, 0);
    assert_eq!(a.evaluated_count, 0);
    assert_eq!(a.completion_percent, 0);
    assert_eq!(a.global_average, 0.0);
    assert_eq!(a.session_count, 0);
}

// ===== 评奖计算 =====

#[test]
fn test_award_best_oral_by_average_total() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "A", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S002", "B", PresentationType::Oral));
    // A: {14, 18} 均分 16; B: {20} 均分 20
    engine.add_evaluation("S001", sample_evaluation("E001", [3, 4, 3, 4], ""));
    engine.add_evaluation("S001", sample_evaluation("E002", [5, 5, 4, 4], ""));
    engine.add_evaluation("S002", sample_evaluation("E001", [5, 5, 5, 5], ""));

    let winners = compute_awards(&engine);

    let best_oral = winners.best_oral.expect("Best oral should exist");
    assert_eq!(best_oral.student_id, "S002");
    assert!((best_oral.average_total - 20.0).abs() < f64::EPSILON);
    assert!(winners.best_poster.is_none());
}

#[test]
fn test_award_tie_keeps_first_encountered() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "First", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S002", "Second", PresentationType::Oral));
    engine.add_evaluation("S001", sample_evaluation("E001", [4, 4, 4, 4], ""));
    engine.add_evaluation("S002", sample_evaluation("E001", [4, 4, 4, 4], ""));

    let winners = compute_awards(&engine);

    assert_eq!(winners.best_oral.unwrap().student_id, "S001");
}

#[test]
fn test_unevaluated_presentation_can_win_with_zero_average() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "A", PresentationType::Poster));
    engine.register_presentation(sample_presentation("S002", "B", PresentationType::Poster));

    let winners = compute_awards(&engine);

    let best_poster = winners.best_poster.expect("Unevaluated poster can still win");
    assert_eq!(best_poster.student_id, "S001");
    assert_eq!(best_poster.average_total, 0.0);
}

#[test]
fn test_peoples_choice_highest_votes_first_on_tie() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "A", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S002", "B", PresentationType::Oral));
    engine.register_presentation(sample_presentation("S003", "C", PresentationType::Oral));
    engine.update_votes("S002", 5);
    engine.update_votes("S003", 5);

    let winners = compute_awards(&engine);

    // 严格大于比较: 平票时先遇到者获奖
    assert_eq!(winners.peoples_choice.unwrap().student_id, "S002");
}

#[test]
fn test_award_summary_rendering() {
    let (_dir, mut engine) = create_test_engine();
    engine.register_presentation(sample_presentation("S001", "Jasmyne Yap", PresentationType::Oral));
    engine.add_evaluation("S001", sample_evaluation("E001", [5, 5, 5, 5], ""));
    engine.update_votes("S001", 9);

    let text = render_award_summary(&compute_awards(&engine));

    assert!(text.contains(">> CURRENT BEST PRESENTER <<"));
    assert!(text.contains("BEST AWARD (Oral):   Jasmyne Yap (20.00)\n"));
    assert!(text.contains("BEST AWARD (Poster): -\n"));
    assert!(text.contains("PEOPLE'S CHOICE:     Jasmyne Yap (9 votes)\n"));
}

// ===== 流程单 =====

#[test]
fn test_run_sheet_embeds_ceremony_details() {
    let details = CeremonyDetails {
        date: "20/04/2026".to_string(),
        time: "14:00 - 17:00".to_string(),
        venue: "Main Grand Hall".to_string(),
    };

    let text = render_run_sheet(&details);

    assert!(text.starts_with("EVENT RUN SHEET & PROTOCOL\n"));
    assert!(text.contains("Event: Annual Research Seminar\n"));
    assert!(text.contains("Date:  20/04/2026\n"));
    assert!(text.contains("Time:  14:00 - 17:00\n"));
    assert!(text.contains("Venue: Main Grand Hall\n"));
    assert!(text.contains("AWARD CEREMONY COMMENCES"));
    assert!(text.contains(" - People's Choice Award"));
}
