// ==========================================
// 研究生学术研讨会管理系统 - 默认数据播种
// ==========================================
// 职责: 用户集合为空时写入固定的初始账号
// ==========================================

use crate::domain::{Role, User};

/// 默认初始用户: 1 名协调员, 2 名学生, 2 名评审
pub fn default_users() -> Vec<User> {
    vec![
        User::new("C001", "Dr. Ng Hu", "pass", Role::Coordinator),
        User::new("S001", "Jasmyne Yap", "pass", Role::Student),
        User::new("S002", "Wan Hanani", "pass", Role::Student),
        User::new("E001", "Prof. Josh", "pass", Role::Evaluator),
        User::new("E002", "Dr. Lim", "pass", Role::Evaluator),
    ]
}
