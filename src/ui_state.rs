//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast、帮助面板等。
//! 这里只有展示状态，任务数据一律在 [`crate::store::TaskStore`]。

use std::time::{Duration, Instant};

use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme, colors: ThemeColors, last_system_dark: bool) -> Self {
        Self {
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            show_help: false,
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> UiState {
        let theme = Theme::Dark;
        UiState::new(theme, get_theme_colors(theme), false)
    }

    #[test]
    fn test_new_creates_default_state() {
        let state = new_state();
        assert!(state.toast.is_none());
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.show_theme_selector);
        assert!(!state.show_help);
        assert_eq!(state.theme_selector_index, 0);
    }

    #[test]
    fn test_show_toast() {
        let mut state = new_state();
        state.show_toast("Test message", Duration::from_secs(3));
        assert!(state.toast.is_some());
        assert_eq!(state.toast.as_ref().unwrap().message, "Test message");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Test", Duration::from_millis(1));
        assert!(!toast.is_expired());
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = new_state();
        state.show_toast("Test", Duration::from_millis(1));
        assert!(state.toast.is_some());

        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_set_theme() {
        let mut state = new_state();
        state.set_theme(Theme::Nord);
        assert_eq!(state.theme, Theme::Nord);
    }
}
