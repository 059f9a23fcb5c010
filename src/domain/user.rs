// ==========================================
// 研究生学术研讨会管理系统 - 用户领域模型
// ==========================================
// 职责: 定义用户记录 (创建后不可变)
// 红线: 角色通过封闭枚举标签区分, 公共字段统一承载
// ==========================================

use crate::domain::types::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// User - 系统用户
// ==========================================
// 身份: id 全局唯一 (插入时不区分大小写比较)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,       // 用户ID (全局唯一)
    pub username: String, // 显示名
    pub password: String, // 占位口令 (登录不校验内容)
    pub role: Role,       // 角色标签
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

// 显示格式: "显示名 (ID)", 与列表控件的展示形式一致
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}
