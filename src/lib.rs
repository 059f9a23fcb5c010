// ==========================================
// 研究生学术研讨会管理系统 - 核心库
// ==========================================
// 技术栈: Rust + JSON 快照持久化
// 系统定位: 研讨会数据管理与汇总引擎 (GUI 作为外部协作方)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 快照持久化
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 报表层 - 只读汇总与文本导出
pub mod report;

// 日志系统
pub mod logging;

// 应用层 - 共享状态与数据路径
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PresentationType, Role};

// 领域实体
pub use domain::{Evaluation, Presentation, SeminarSession, User};

// 引擎
pub use engine::{EngineError, EngineResult, SeminarEngine};

// 仓储
pub use repository::{FileSnapshotStore, Snapshot, SnapshotStore};

// 报表
pub use report::{AwardWinners, CeremonyDetails, LiveAnalytics};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "研究生学术研讨会管理系统";

// 快照格式版本
pub const SCHEMA_VERSION: u32 = 1;

// ==========================================
// 预编译检查
// ==========================================
