//! 全局应用状态
//!
//! App 持有 TaskStore 和所有围绕它的视图状态（列表选中、弹窗、主题、Toast），
//! 事件层的所有按键最终都落到这里的方法上。

use std::time::Duration;

use ratatui::widgets::ListState;

use crate::storage::config::{self, Config, ThemeConfig};
use crate::store::{Task, TaskStore};
use crate::theme::{get_theme_colors, Theme};
use crate::ui_state::UiState;

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表（核心状态）
    pub store: TaskStore,
    /// 列表选中状态（视图状态，不属于 store）
    pub list_state: ListState,
    /// 是否显示 Add Task 弹窗
    pub show_add_dialog: bool,
    /// Add Task 输入内容
    pub add_input: String,
    /// UI 状态（主题、Toast、帮助面板）
    pub ui: UiState,
}

impl App {
    pub fn new(theme: Theme, store: TaskStore) -> Self {
        let colors = get_theme_colors(theme);
        let last_system_dark = crate::theme::detect_system_theme();

        let mut list_state = ListState::default();
        if !store.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            should_quit: false,
            store,
            list_state,
            show_add_dialog: false,
            add_input: String::new(),
            ui: UiState::new(theme, colors, last_system_dark),
        }
    }

    // ========== 列表选择 ==========

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.list_state.selected()?;
        self.store.tasks().get(index)
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 确保选中项有效（删除后可能越界）
    pub fn ensure_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }

        match self.list_state.selected() {
            Some(index) if index >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    // ========== Add Task 弹窗 ==========

    /// 打开 Add Task 弹窗
    pub fn open_add_dialog(&mut self) {
        self.add_input.clear();
        self.show_add_dialog = true;
    }

    /// 关闭 Add Task 弹窗
    pub fn close_add_dialog(&mut self) {
        self.show_add_dialog = false;
        self.add_input.clear();
    }

    /// Add Task 输入字符
    pub fn add_input_char(&mut self, c: char) {
        self.add_input.push(c);
    }

    /// Add Task 删除字符
    pub fn add_delete_char(&mut self) {
        self.add_input.pop();
    }

    /// 提交新任务
    ///
    /// store 拒绝空文本时（返回 None）弹窗保持打开，输入不清除。
    pub fn confirm_add(&mut self) {
        let Some(id) = self.store.add_task(&self.add_input) else {
            return;
        };

        // 选中刚创建的任务（总是追加在末尾）
        self.list_state.select(Some(self.store.len() - 1));
        self.close_add_dialog();

        let text = self.store.get(id).map(|t| t.text.clone()).unwrap_or_default();
        self.show_toast(format!("Added: {}", text));
    }

    // ========== 任务操作 ==========

    /// 切换当前选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.toggle_complete(id);
        }
    }

    /// 删除当前选中任务
    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        let text = task.text.clone();

        self.store.delete_task(id);
        self.ensure_selection();
        self.show_toast(format!("Deleted: {}", text));
    }

    // ========== 行内编辑 ==========

    /// 开始编辑当前选中任务（已完成的任务会被 store 静默拒绝）
    pub fn start_edit_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.start_edit(id);
        }
    }

    /// 是否处于编辑模式
    pub fn is_editing(&self) -> bool {
        self.store.editing_id().is_some()
    }

    /// 编辑草稿输入字符
    pub fn edit_input_char(&mut self, c: char) {
        let Some(draft) = self.store.editing_draft() else {
            return;
        };
        let mut draft = draft.to_string();
        draft.push(c);
        self.store.update_draft(draft);
    }

    /// 编辑草稿删除字符
    pub fn edit_delete_char(&mut self) {
        let Some(draft) = self.store.editing_draft() else {
            return;
        };
        let mut draft = draft.to_string();
        draft.pop();
        self.store.update_draft(draft);
    }

    /// 提交编辑（空草稿会被 store 拒绝，会话保持打开）
    pub fn save_edit(&mut self) {
        self.store.save_edit();
    }

    /// 取消编辑
    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    // ========== 主题选择器 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        // 找到当前主题在列表中的索引
        let themes = Theme::all();
        self.ui.theme_selector_index = themes
            .iter()
            .position(|t| *t == self.ui.theme)
            .unwrap_or(0);
        self.ui.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.ui.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = if self.ui.theme_selector_index == 0 {
            len - 1
        } else {
            self.ui.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = (self.ui.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化偏好
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.ui.theme_selector_index);
        self.ui.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: self.ui.theme.label().to_string(),
            },
        };
        let _ = config::save_config(&config);

        self.show_toast(format!("Theme: {}", self.ui.theme.label()));
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.ui.set_theme(*theme);
        }
    }

    // ========== Toast / 主题检测 ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message, TOAST_DURATION);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        self.ui.clear_expired_toast();
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        // 只在 Auto 模式下检查
        if self.ui.theme != Theme::Auto {
            return;
        }

        let current_dark = crate::theme::detect_system_theme();
        if current_dark != self.ui.last_system_dark {
            self.ui.last_system_dark = current_dark;
            self.ui.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_tasks(texts: &[&str]) -> App {
        let mut store = TaskStore::new();
        for text in texts {
            store.add_task(text);
        }
        App::new(Theme::Dark, store)
    }

    #[test]
    fn test_new_selects_first_task() {
        let app = app_with_tasks(&["one", "two"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_new_with_empty_store_selects_nothing() {
        let app = app_with_tasks(&[]);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app_with_tasks(&["one", "two", "three"]);

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));

        app.select_next();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0)); // 回绕到开头

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2)); // 回绕到末尾
    }

    #[test]
    fn test_confirm_add_creates_and_selects_task() {
        let mut app = app_with_tasks(&["one"]);
        app.open_add_dialog();
        for c in "two".chars() {
            app.add_input_char(c);
        }
        app.confirm_add();

        assert_eq!(app.store.len(), 2);
        assert!(!app.show_add_dialog);
        assert!(app.add_input.is_empty());
        assert_eq!(app.list_state.selected(), Some(1));
        assert!(app.ui.toast.is_some());
    }

    #[test]
    fn test_confirm_add_empty_input_keeps_dialog_open() {
        let mut app = app_with_tasks(&[]);
        app.open_add_dialog();
        app.add_input_char(' ');
        app.confirm_add();

        assert!(app.store.is_empty());
        assert!(app.show_add_dialog);
        assert_eq!(app.add_input, " "); // 输入不被清除
    }

    #[test]
    fn test_add_delete_char() {
        let mut app = app_with_tasks(&[]);
        app.open_add_dialog();
        app.add_input_char('a');
        app.add_input_char('b');
        app.add_delete_char();
        assert_eq!(app.add_input, "a");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with_tasks(&["one"]);
        app.toggle_selected();
        assert!(app.store.tasks()[0].completed);

        app.toggle_selected();
        assert!(!app.store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_selected_reanchors_selection() {
        let mut app = app_with_tasks(&["one", "two"]);
        app.select_next();
        app.delete_selected(); // 删除末尾项

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));

        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_edit_flow_through_app() {
        let mut app = app_with_tasks(&["one"]);
        app.start_edit_selected();
        assert!(app.is_editing());

        app.edit_input_char('!');
        assert_eq!(app.store.editing_draft(), Some("one!"));

        app.save_edit();
        assert!(!app.is_editing());
        assert_eq!(app.store.tasks()[0].text, "one!");
    }

    #[test]
    fn test_edit_completed_task_is_refused() {
        let mut app = app_with_tasks(&["one"]);
        app.toggle_selected();
        app.start_edit_selected();
        assert!(!app.is_editing());
    }

    #[test]
    fn test_edit_delete_char_can_empty_draft() {
        let mut app = app_with_tasks(&["ab"]);
        app.start_edit_selected();
        app.edit_delete_char();
        app.edit_delete_char();
        assert_eq!(app.store.editing_draft(), Some(""));

        // 空草稿提交被拒绝，会话保持
        app.save_edit();
        assert!(app.is_editing());
        assert_eq!(app.store.tasks()[0].text, "ab");
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut app = app_with_tasks(&["one"]);
        app.start_edit_selected();
        app.edit_input_char('x');
        app.cancel_edit();

        assert!(!app.is_editing());
        assert_eq!(app.store.tasks()[0].text, "one");
    }

    #[test]
    fn test_theme_selector_cycles() {
        let mut app = app_with_tasks(&[]);
        app.open_theme_selector();
        assert!(app.ui.show_theme_selector);

        let start = app.ui.theme_selector_index;
        app.theme_selector_next();
        assert_ne!(app.ui.theme_selector_index, start);

        app.theme_selector_prev();
        assert_eq!(app.ui.theme_selector_index, start);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with_tasks(&[]);
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
