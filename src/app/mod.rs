// ==========================================
// 研究生学术研讨会管理系统 - 应用层
// ==========================================
// 职责: 共享状态与数据路径解析
// ==========================================

pub mod state;

pub use state::{default_data_path, AppState};
