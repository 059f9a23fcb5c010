// ==========================================
// 研究生学术研讨会管理系统 - 场次领域模型
// ==========================================
// 职责: 定义研讨会场次记录
// 身份: session_id 唯一; 人员列表仅存 ID 引用, 不共享可变对象
// ==========================================

use crate::domain::types::PresentationType;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SeminarSession - 研讨会场次
// ==========================================
// date/time 为自由文本 (DD/MM/YYYY, HH:MM - HH:MM), 由表单层负责格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeminarSession {
    pub session_id: String,          // 场次ID (唯一)
    pub date: String,                // 日期
    pub time: String,                // 时间段
    pub venue: String,               // 场地
    pub kind: PresentationType,      // 场次类型 (Oral / Poster)
    pub evaluator_ids: Vec<String>,  // 已分配评审ID列表
    pub student_ids: Vec<String>,    // 已分配学生ID列表
}

impl SeminarSession {
    pub fn new(
        session_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
        kind: PresentationType,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            date: date.into(),
            time: time.into(),
            venue: venue.into(),
            kind,
            evaluator_ids: Vec::new(),
            student_ids: Vec::new(),
        }
    }
}

// 显示格式: "日期 (时间) - 场地 [类型]"
impl fmt::Display for SeminarSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {} [{}]", self.date, self.time, self.venue, self.kind)
    }
}
