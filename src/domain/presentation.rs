// ==========================================
// 研究生学术研讨会管理系统 - 报告领域模型
// ==========================================
// 职责: 定义报告记录与评审记录
// 身份: 报告以 student_id 唯一; 评审在单个报告内以 evaluator_id 唯一
// ==========================================

use crate::domain::types::PresentationType;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Evaluation - 单次评审
// ==========================================
// 四项评分各取 [1,5], 合计范围 [4,20]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub evaluator_id: String, // 评审人ID
    pub problem_clarity: i32, // 评分1: 问题清晰度
    pub methodology: i32,     // 评分2: 研究方法
    pub results: i32,         // 评分3: 结果与发现
    pub presentation: i32,    // 评分4: 表达与答辩
    pub comments: String,     // 评语
}

impl Evaluation {
    pub fn new(
        evaluator_id: impl Into<String>,
        problem_clarity: i32,
        methodology: i32,
        results: i32,
        presentation: i32,
        comments: impl Into<String>,
    ) -> Self {
        // 评分范围由表单滑块保证, 引擎侧不做截断
        debug_assert!((1..=5).contains(&problem_clarity));
        debug_assert!((1..=5).contains(&methodology));
        debug_assert!((1..=5).contains(&results));
        debug_assert!((1..=5).contains(&presentation));

        Self {
            evaluator_id: evaluator_id.into(),
            problem_clarity,
            methodology,
            results,
            presentation,
            comments: comments.into(),
        }
    }

    /// 四项评分合计 (范围 4-20)
    pub fn total(&self) -> i32 {
        self.problem_clarity + self.methodology + self.results + self.presentation
    }
}

// ==========================================
// Presentation - 学生报告
// ==========================================
// 展板号 board_id 仅 Poster 类型由分配操作设置
// audience_votes 为观众投票数, 初始为 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub student_id: String,            // 学生ID (唯一键)
    pub student_name: String,          // 学生姓名
    pub title: String,                 // 报告标题
    pub abstract_text: String,         // 摘要
    pub supervisor: String,            // 导师
    pub kind: PresentationType,        // 报告类型
    pub file_path: String,             // 上传文件路径
    pub board_id: Option<String>,      // 展板号 (仅 Poster)
    pub audience_votes: i32,           // 观众投票数
    pub evaluations: Vec<Evaluation>,  // 评审列表 (按提交顺序)
}

impl Presentation {
    pub fn new(
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        supervisor: impl Into<String>,
        kind: PresentationType,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
            title: title.into(),
            abstract_text: abstract_text.into(),
            supervisor: supervisor.into(),
            kind,
            file_path: file_path.into(),
            board_id: None,
            audience_votes: 0,
            evaluations: Vec::new(),
        }
    }

    /// 判断指定评审人是否已对本报告评分
    pub fn is_graded_by(&self, evaluator_id: &str) -> bool {
        self.evaluations.iter().any(|e| e.evaluator_id == evaluator_id)
    }

    /// 写入一次评审: 同一评审人重复提交时替换旧记录, 不产生重复
    pub fn upsert_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations
            .retain(|old| old.evaluator_id != evaluation.evaluator_id);
        self.evaluations.push(evaluation);
    }

    /// 本报告的评审合计平均分
    ///
    /// # 返回
    /// 无评审时返回 0.0 (未评审的报告在评奖比较中按 0 参与)
    pub fn average_total(&self) -> f64 {
        if self.evaluations.is_empty() {
            return 0.0;
        }
        let sum: i32 = self.evaluations.iter().map(Evaluation::total).sum();
        f64::from(sum) / self.evaluations.len() as f64
    }
}

// 显示格式: "标题 (学生姓名)"
impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.student_name)
    }
}
