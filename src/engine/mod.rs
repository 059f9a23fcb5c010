// ==========================================
// 研究生学术研讨会管理系统 - 引擎层
// ==========================================
// 职责: 集合所有权, 领域操作, 不变式维护, 变更后快照提交
// 红线: 不含展示逻辑
// ==========================================

pub mod error;
pub mod seed;
pub mod seminar_engine;

// 重导出核心类型
pub use error::{EngineError, EngineResult};
pub use seminar_engine::SeminarEngine;
