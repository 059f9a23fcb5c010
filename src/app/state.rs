// ==========================================
// 研究生学术研讨会管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享引擎实例与数据文件路径
// 说明: 引擎本身单线程同步; Mutex 仅保证 GUI 外壳下的单写者语义
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::engine::SeminarEngine;
use crate::repository::FileSnapshotStore;

/// 应用状态
///
/// GUI 外壳持有本句柄, 所有操作经由 engine 的方法面
pub struct AppState {
    /// 快照文件路径
    pub data_path: PathBuf,

    /// 研讨会引擎 (单写者)
    pub engine: Arc<Mutex<SeminarEngine>>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - data_path: 快照文件路径
    ///
    /// # 说明
    /// 构造时引擎即完成快照加载与默认数据播种
    pub fn new(data_path: impl AsRef<Path>) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        tracing::info!(path = %data_path.display(), "初始化 AppState");

        let store = FileSnapshotStore::new(&data_path);
        let engine = SeminarEngine::new(Box::new(store));

        Self {
            data_path,
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

/// 获取默认快照文件路径
///
/// # 返回
/// - 环境变量 SEMINAR_SYSTEM_DATA_PATH 优先
/// - 开发环境: 用户数据目录/seminar-system-dev/seminar_data.json
/// - 生产环境: 用户数据目录/seminar-system/seminar_data.json
/// - 拿不到数据目录时回退 ./seminar_data.json
pub fn default_data_path() -> PathBuf {
    // 允许通过环境变量显式指定路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("SEMINAR_SYSTEM_DATA_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let mut path = PathBuf::from("./seminar_data.json");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("seminar-system-dev").join("seminar_data.json");
        }
        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("seminar-system").join("seminar_data.json");
        }
    }

    path
}
