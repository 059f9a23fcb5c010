// ==========================================
// 研究生学术研讨会管理系统 - 引擎层错误类型
// ==========================================
// 职责: 必须上抛给调用方展示的业务错误
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 持久化失败不在此列: 按约定记录日志后吞掉, 内存数据保持权威
#[derive(Error, Debug)]
pub enum EngineError {
    /// 新增用户时 ID 已存在 (不区分大小写)
    #[error("User ID {id} already exists!")]
    DuplicateIdentity { id: String },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
