// ==========================================
// 研究生学术研讨会管理系统 - 领域类型定义
// ==========================================
// 职责: 定义封闭的角色与报告类型枚举
// 红线: 角色集合封闭, 不允许开放式继承
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 用户角色 (Role)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (快照自描述, 无需外部类型提示)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,     // 学生 (报告人)
    Evaluator,   // 评审
    Coordinator, // 协调员
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Evaluator => write!(f, "Evaluator"),
            Role::Coordinator => write!(f, "Coordinator"),
        }
    }
}

// ==========================================
// 报告类型 (Presentation Type)
// ==========================================
// Oral 为口头报告, Poster 为海报展示 (仅 Poster 分配展板号)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PresentationType {
    Oral,   // 口头报告
    Poster, // 海报展示
}

impl fmt::Display for PresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationType::Oral => write!(f, "Oral"),
            PresentationType::Poster => write!(f, "Poster"),
        }
    }
}
