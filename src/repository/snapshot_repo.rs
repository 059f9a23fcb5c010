// ==========================================
// 研究生学术研讨会管理系统 - 快照仓储
// ==========================================
// 职责: 以单一 JSON 文件整体读写三个顶层集合
// 红线: 快照模式与内存表示解耦 (显式 schema_version)
// 说明: 保存为整体覆盖写入, 不做增量; 进程崩溃期间写入可能截断,
//       截断/损坏的文件在加载时视为不存在, 由调用方兜底播种
// ==========================================

use crate::domain::{Presentation, SeminarSession, User};
use crate::repository::error::RepositoryResult;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// Snapshot - 持久化单元
// ==========================================
// 固定顺序: users, presentations, sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub schema_version: u32,
    pub users: Vec<User>,
    pub presentations: Vec<Presentation>,
    pub sessions: Vec<SeminarSession>,
}

impl Snapshot {
    pub fn new(
        users: Vec<User>,
        presentations: Vec<Presentation>,
        sessions: Vec<SeminarSession>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            users,
            presentations,
            sessions,
        }
    }
}

// ==========================================
// Trait: SnapshotStore
// ==========================================
// 用途: 持久化接缝, 测试可替换为临时文件或内存实现
pub trait SnapshotStore {
    /// 读取快照
    ///
    /// # 返回
    /// - `Ok(Some(Snapshot))`: 读取成功
    /// - `Ok(None)`: 文件不存在, 或内容无法反序列化 (视为不存在)
    fn load(&self) -> RepositoryResult<Option<Snapshot>>;

    /// 整体覆盖保存快照
    fn save(&self, snapshot: &Snapshot) -> RepositoryResult<()>;
}

// ==========================================
// FileSnapshotStore - JSON 文件实现
// ==========================================
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> RepositoryResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                // 损坏的快照视为不存在, 由引擎重新播种
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "快照文件无法解析, 按无历史数据处理"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
