//! 事件处理
//!
//! 按模式优先级分发按键：帮助面板 > 主题选择器 > Add Task 弹窗 > 行内编辑 > 列表。

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理覆盖层事件

    // 帮助面板
    if app.ui.show_help {
        handle_help_key(app, key);
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // Add Task 弹窗
    if app.show_add_dialog {
        handle_add_dialog_key(app, key);
        return;
    }

    // 行内编辑模式
    if app.is_editing() {
        handle_edit_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理列表模式的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 功能按键 - 添加任务
        KeyCode::Char('a') => {
            app.open_add_dialog();
        }

        // 功能按键 - 切换完成状态
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.toggle_selected();
        }

        // 功能按键 - 编辑（已完成任务会被静默拒绝）
        KeyCode::Char('e') | KeyCode::Enter => {
            app.start_edit_selected();
        }

        // 功能按键 - 删除
        KeyCode::Char('d') => {
            app.delete_selected();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.ui.show_help = true;
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_add_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认创建（空输入时弹窗保持打开）
        KeyCode::Enter => {
            app.confirm_add();
        }

        // 取消
        KeyCode::Esc => {
            app.close_add_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.add_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.add_input_char(c);
        }

        _ => {}
    }
}

/// 处理行内编辑模式的键盘事件
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交编辑（空草稿会被拒绝，会话保持打开）
        KeyCode::Enter => {
            app.save_edit();
        }

        // 取消编辑
        KeyCode::Esc => {
            app.cancel_edit();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.edit_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.edit_input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.ui.show_help = false;
        }
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
