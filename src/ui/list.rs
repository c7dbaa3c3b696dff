//! 任务列表页面渲染

use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    add_task_dialog, empty_state, footer, header, help_panel, summary, task_list, theme_selector,
    toast,
};

/// 渲染任务列表页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, list_area, summary_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1), // 统计行
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header
    header::render(frame, header_area, app.store.len(), colors);

    // 渲染列表或空状态
    if app.store.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.store.tasks(),
            app.list_state.selected(),
            app.store.editing_id(),
            app.store.editing_draft(),
            colors,
        );
    }

    // 渲染统计行
    let (completed, total) = app.store.summary();
    summary::render(frame, summary_area, completed, total, colors);

    // 渲染 Footer
    footer::render(
        frame,
        footer_area,
        !app.store.is_empty(),
        app.is_editing(),
        colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, colors);
    }

    // 渲染 Add Task 弹窗（如果打开）
    if app.show_add_dialog {
        add_task_dialog::render(frame, &app.add_input, colors);
    }

    // 渲染帮助面板
    if app.ui.show_help {
        help_panel::render(frame, colors);
    }
}
