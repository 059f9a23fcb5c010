// ==========================================
// 研究生学术研讨会管理系统 - 数据仓储层
// ==========================================
// 职责: 快照持久化 (读 / 整体覆盖写)
// 红线: 不含业务规则
// ==========================================

pub mod error;
pub mod snapshot_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use snapshot_repo::{FileSnapshotStore, Snapshot, SnapshotStore};
