// ==========================================
// 研究生学术研讨会管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与封闭类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod presentation;
pub mod session;
pub mod types;
pub mod user;

// 重导出核心类型
pub use presentation::{Evaluation, Presentation};
pub use session::SeminarSession;
pub use types::{PresentationType, Role};
pub use user::User;
