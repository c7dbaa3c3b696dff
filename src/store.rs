//! 任务列表状态管理
//!
//! TaskStore 持有有序的任务集合和唯一的编辑会话，暴露全部状态变更操作。
//! 纯内存状态，不做任何 I/O，进程退出即丢弃。

use chrono::{DateTime, Utc};

/// 单个任务
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// 任务 ID（store 内单调递增，创建后不可变）
    pub id: u64,
    /// 任务文本（trim 后非空）
    pub text: String,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Task {
    fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// 编辑会话：正在编辑的任务 ID + 草稿文本
///
/// 草稿只在会话存在期间有效，所以两者绑在同一个 Option 里。
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: u64,
    pub draft: String,
}

/// 任务列表状态
#[derive(Debug)]
pub struct TaskStore {
    /// 任务集合（保持插入顺序）
    tasks: Vec<Task>,
    /// 当前编辑会话（最多一个）
    editing: Option<EditSession>,
    /// 下一个可用 ID
    next_id: u64,
}

impl TaskStore {
    /// 创建空的任务列表
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            editing: None,
            next_id: 1,
        }
    }

    /// 创建带示例数据的任务列表（`--demo` 启动路径）
    pub fn sample() -> Self {
        let mut store = Self::new();
        let first = store.add_task("Water the plants").unwrap_or_default();
        store.add_task("Sharpen the shears");
        store.add_task("Plan the spring beds");
        store.toggle_complete(first);
        store
    }

    // ========== 变更操作 ==========

    /// 添加任务
    ///
    /// trim 后为空则拒绝（集合不变，返回 None），否则追加到末尾并返回新 ID。
    pub fn add_task(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// 删除任务（ID 不存在则静默忽略）
    ///
    /// 如果被删除的任务正在编辑，同时清除编辑会话。
    pub fn delete_task(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
        }
    }

    /// 切换任务完成状态（ID 不存在则静默忽略）
    pub fn toggle_complete(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// 开始编辑任务
    ///
    /// ID 不存在或任务已完成则静默忽略；否则用当前文本初始化草稿。
    pub fn start_edit(&mut self, id: u64) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        if task.completed {
            return;
        }

        self.editing = Some(EditSession {
            id,
            draft: task.text.clone(),
        });
    }

    /// 替换编辑草稿（未在编辑时静默忽略）
    pub fn update_draft(&mut self, text: impl Into<String>) {
        if let Some(ref mut session) = self.editing {
            session.draft = text.into();
        }
    }

    /// 提交编辑：用草稿覆盖任务文本并结束会话
    ///
    /// 草稿 trim 后为空则拒绝提交，会话保持打开；未在编辑时静默忽略。
    pub fn save_edit(&mut self) {
        let Some(ref session) = self.editing else {
            return;
        };

        let draft = session.draft.trim();
        if draft.is_empty() {
            return;
        }

        let id = session.id;
        let text = draft.to_string();
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = text;
        }
        self.editing = None;
    }

    /// 取消编辑：结束会话，任务保持原文本
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ========== 读取操作 ==========

    /// 任务列表
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 按 ID 查找任务
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 任务总数
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 当前编辑的任务 ID
    pub fn editing_id(&self) -> Option<u64> {
        self.editing.as_ref().map(|e| e.id)
    }

    /// 当前编辑草稿
    pub fn editing_draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.draft.as_str())
    }

    /// 统计：(已完成数, 总数)
    pub fn summary(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (completed, self.tasks.len())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// 复刻参考场景：两个任务，第一个已完成
    fn two_task_store() -> TaskStore {
        let mut store = TaskStore::new();
        let first = store.add_task("Learn React").unwrap();
        store.add_task("Build a todo app").unwrap();
        store.toggle_complete(first);
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.summary(), (0, 0));
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_add_task_appends_incomplete_task() {
        let mut store = TaskStore::new();
        let id = store.add_task("Ship it").unwrap();

        assert_eq!(store.len(), 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Ship it");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_task_rejects_empty_text() {
        let mut store = TaskStore::new();
        assert_eq!(store.add_task(""), None);
        assert_eq!(store.add_task("   "), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut store = TaskStore::new();
        let id = store.add_task("  Ship it  ").unwrap();
        assert_eq!(store.get(id).unwrap().text, "Ship it");
    }

    #[test]
    fn test_add_task_ids_are_unique_and_increasing() {
        let mut store = TaskStore::new();
        let a = store.add_task("one").unwrap();
        let b = store.add_task("two").unwrap();
        store.delete_task(b);
        let c = store.add_task("three").unwrap();

        // 删除不会回收 ID
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = TaskStore::new();
        store.add_task("first");
        store.add_task("second");
        store.add_task("third");

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_toggle_complete_is_involution() {
        let mut store = TaskStore::new();
        let id = store.add_task("task").unwrap();

        store.toggle_complete(id);
        assert!(store.get(id).unwrap().completed);

        store.toggle_complete(id);
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_complete_missing_id_is_noop() {
        let mut store = two_task_store();
        store.toggle_complete(999);
        assert_eq!(store.summary(), (1, 2));
    }

    #[test]
    fn test_delete_task_removes_exactly_one() {
        let mut store = two_task_store();
        store.delete_task(2);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "Learn React");
        assert_eq!(store.summary(), (1, 1));
    }

    #[test]
    fn test_delete_task_is_idempotent() {
        let mut store = two_task_store();
        store.delete_task(2);
        store.delete_task(2); // 第二次应为 no-op
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_edited_task_clears_session() {
        let mut store = two_task_store();
        store.start_edit(2);
        assert_eq!(store.editing_id(), Some(2));

        store.delete_task(2);
        assert_eq!(store.editing_id(), None);
        assert_eq!(store.editing_draft(), None);
    }

    #[test]
    fn test_delete_other_task_keeps_session() {
        let mut store = two_task_store();
        store.add_task("third").unwrap();
        store.start_edit(2);

        store.delete_task(3);
        assert_eq!(store.editing_id(), Some(2));
    }

    #[test]
    fn test_start_edit_seeds_draft_with_current_text() {
        let mut store = two_task_store();
        store.start_edit(2);

        assert_eq!(store.editing_id(), Some(2));
        assert_eq!(store.editing_draft(), Some("Build a todo app"));
    }

    #[test]
    fn test_start_edit_completed_task_is_noop() {
        let mut store = two_task_store();
        store.start_edit(1); // 已完成
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_start_edit_missing_id_is_noop() {
        let mut store = two_task_store();
        store.start_edit(999);
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_save_edit_commits_draft_and_ends_session() {
        let mut store = two_task_store();
        store.start_edit(2);
        store.update_draft("X");
        store.save_edit();

        assert_eq!(store.get(2).unwrap().text, "X");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_save_edit_trims_draft() {
        let mut store = two_task_store();
        store.start_edit(2);
        store.update_draft("  spaced out  ");
        store.save_edit();

        assert_eq!(store.get(2).unwrap().text, "spaced out");
    }

    #[test]
    fn test_save_edit_rejects_empty_draft() {
        let mut store = two_task_store();
        store.start_edit(2);
        store.update_draft("   ");
        store.save_edit();

        // 会话保持打开，任务原文本不变
        assert_eq!(store.editing_id(), Some(2));
        assert_eq!(store.get(2).unwrap().text, "Build a todo app");
    }

    #[test]
    fn test_save_edit_without_session_is_noop() {
        let mut store = two_task_store();
        store.save_edit();
        assert_eq!(store.get(2).unwrap().text, "Build a todo app");
    }

    #[test]
    fn test_cancel_edit_keeps_original_text() {
        let mut store = two_task_store();
        store.start_edit(2);
        store.update_draft("X");
        store.cancel_edit();

        assert_eq!(store.get(2).unwrap().text, "Build a todo app");
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn test_update_draft_without_session_is_noop() {
        let mut store = two_task_store();
        store.update_draft("X");
        assert_eq!(store.editing_draft(), None);
    }

    #[test]
    fn test_summary_after_add() {
        let mut store = two_task_store();
        let id = store.add_task("Ship it").unwrap();

        assert_eq!(store.len(), 3);
        let last = store.tasks().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Ship it");
        assert!(!last.completed);
        assert_eq!(store.summary(), (1, 3));
    }

    #[test]
    fn test_sample_store() {
        let store = TaskStore::sample();
        assert_eq!(store.len(), 3);
        assert_eq!(store.summary(), (1, 3));
        assert!(store.tasks()[0].completed);
    }
}
