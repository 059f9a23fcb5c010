// ==========================================
// 研究生学术研讨会管理系统 - 研讨会引擎
// ==========================================
// 职责: 唯一持有三个顶层集合, 执行全部领域操作并维护身份不变式
// 红线: 每次变更操作结束后整体提交一次快照
// 红线: 单线程同步执行, 操作之间不交错
// ==========================================

use crate::domain::{Evaluation, Presentation, PresentationType, Role, SeminarSession, User};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::seed;
use crate::repository::{Snapshot, SnapshotStore};

// ==========================================
// SeminarEngine - 数据管理与汇总引擎
// ==========================================
// GUI 层只通过本类型的方法面与系统交互
pub struct SeminarEngine {
    users: Vec<User>,
    presentations: Vec<Presentation>,
    sessions: Vec<SeminarSession>,
    store: Box<dyn SnapshotStore>,
}

impl SeminarEngine {
    /// 创建引擎实例
    ///
    /// # 说明
    /// 启动时读取快照; 文件缺失或损坏按空数据处理,
    /// 用户集合为空时播种默认账号并立即保存
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        let snapshot = match store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => Snapshot::new(Vec::new(), Vec::new(), Vec::new()),
            Err(e) => {
                tracing::warn!(error = %e, "快照读取失败, 按无历史数据处理");
                Snapshot::new(Vec::new(), Vec::new(), Vec::new())
            }
        };

        let mut engine = Self {
            users: snapshot.users,
            presentations: snapshot.presentations,
            sessions: snapshot.sessions,
            store,
        };

        if engine.users.is_empty() {
            tracing::info!("用户集合为空, 写入默认初始数据");
            engine.users = seed::default_users();
            engine.persist();
        }

        engine
    }

    // ==========================================
    // 登录
    // ==========================================

    /// 按 ID 与角色标签登录
    ///
    /// # 返回
    /// - `Some(&User)`: ID 精确匹配且角色一致 (集合顺序下的第一个匹配)
    /// - `None`: 未找到
    ///
    /// # 说明
    /// 口令不做内容校验
    pub fn login(&self, id: &str, role: Role) -> Option<&User> {
        self.users.iter().find(|u| u.id == id && u.role == role)
    }

    // ==========================================
    // 报告管理
    // ==========================================

    /// 登记报告: 同一学生已有报告时原地替换 (旧评审随之丢弃)
    pub fn register_presentation(&mut self, p: Presentation) {
        self.presentations
            .retain(|exist| exist.student_id != p.student_id);
        self.presentations.push(p);
        self.persist();
    }

    // ==========================================
    // 场次管理
    // ==========================================

    pub fn create_session(&mut self, s: SeminarSession) {
        self.sessions.push(s);
        self.persist();
    }

    /// 按场次 ID 删除
    ///
    /// # 返回
    /// 是否有场次被移除
    pub fn delete_session(&mut self, session_id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.session_id != session_id);
        let removed = self.sessions.len() != before;
        self.persist();
        removed
    }

    /// 为场次分配评审与学生 (整体替换, 非增量合并)
    ///
    /// # 参数
    /// - session_id: 目标场次
    /// - evaluator_ids / student_ids: 替换后的完整 ID 列表
    ///
    /// # 返回
    /// - `true`: 分配完成
    /// - `false`: 场次不存在 (不做任何变更)
    ///
    /// # 说明
    /// Poster 场次按 student_ids 的输入顺序分配展板号 "B-01", "B-02", ...
    /// 学生无法解析为报告时静默跳过, 但序号仍然前进;
    /// 重复分配会按新的顺序重新计算展板号, 不保证与上次一致
    pub fn assign_to_session(
        &mut self,
        session_id: &str,
        evaluator_ids: Vec<String>,
        student_ids: Vec<String>,
    ) -> bool {
        let Some(session) = self
            .sessions
            .iter_mut()
            .find(|s| s.session_id == session_id)
        else {
            return false;
        };

        let is_poster = session.kind == PresentationType::Poster;
        session.evaluator_ids = evaluator_ids;
        session.student_ids = student_ids.clone();

        if is_poster {
            for (index, student_id) in student_ids.iter().enumerate() {
                if let Some(p) = self
                    .presentations
                    .iter_mut()
                    .find(|p| p.student_id == *student_id)
                {
                    p.board_id = Some(format!("B-{:02}", index + 1));
                }
            }
        }

        self.persist();
        true
    }

    // ==========================================
    // 评审
    // ==========================================

    /// 提交一次评审: 同一评审人重复提交时替换旧记录
    ///
    /// # 返回
    /// - `true`: 已写入
    /// - `false`: 学生无报告, 未做任何变更
    pub fn add_evaluation(&mut self, student_id: &str, evaluation: Evaluation) -> bool {
        let Some(p) = self
            .presentations
            .iter_mut()
            .find(|p| p.student_id == student_id)
        else {
            return false;
        };

        p.upsert_evaluation(evaluation);
        self.persist();
        true
    }

    /// 覆盖写入观众投票数
    ///
    /// # 返回
    /// - `true`: 已写入
    /// - `false`: 学生无报告, 未做任何变更
    pub fn update_votes(&mut self, student_id: &str, votes: i32) -> bool {
        let Some(p) = self
            .presentations
            .iter_mut()
            .find(|p| p.student_id == student_id)
        else {
            return false;
        };

        p.audience_votes = votes;
        self.persist();
        true
    }

    // ==========================================
    // 用户管理
    // ==========================================

    /// 新增用户
    ///
    /// # 返回
    /// - `Err(DuplicateIdentity)`: 已存在不区分大小写的同 ID 用户, 集合不变
    pub fn add_user(&mut self, user: User) -> EngineResult<()> {
        if self
            .users
            .iter()
            .any(|u| u.id.eq_ignore_ascii_case(&user.id))
        {
            return Err(EngineError::DuplicateIdentity { id: user.id });
        }

        self.users.push(user);
        self.persist();
        Ok(())
    }

    /// 按 ID 精确删除用户 (唯一性不变式下至多一个)
    pub fn delete_user(&mut self, user_id: &str) {
        self.users.retain(|u| u.id != user_id);
        self.persist();
    }

    // ==========================================
    // 读取访问器
    // ==========================================

    pub fn presentations(&self) -> &[Presentation] {
        &self.presentations
    }

    pub fn sessions(&self) -> &[SeminarSession] {
        &self.sessions
    }

    pub fn session_by_id(&self, session_id: &str) -> Option<&SeminarSession> {
        self.sessions.iter().find(|s| s.session_id == session_id)
    }

    /// 按角色过滤用户
    pub fn users_by_role(&self, role: Role) -> Vec<&User> {
        self.users.iter().filter(|u| u.role == role).collect()
    }

    pub fn presentation_by_student(&self, student_id: &str) -> Option<&Presentation> {
        self.presentations
            .iter()
            .find(|p| p.student_id == student_id)
    }

    /// 按学生姓名查找报告 (线性扫描, 姓名不保证唯一, 取第一个匹配)
    pub fn presentation_by_student_name(&self, name: &str) -> Option<&Presentation> {
        self.presentations
            .iter()
            .find(|p| p.student_name == name)
    }

    // ==========================================
    // 持久化提交
    // ==========================================

    // 失败只记录日志: 内存数据保持权威, 不回滚之前的变更
    fn persist(&self) {
        let snapshot = Snapshot::new(
            self.users.clone(),
            self.presentations.clone(),
            self.sessions.clone(),
        );
        if let Err(e) = self.store.save(&snapshot) {
            tracing::error!(error = %e, "快照保存失败, 内存数据与磁盘可能不一致");
        }
    }
}
