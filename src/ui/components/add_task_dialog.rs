//! Add Task 弹窗组件

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};

/// 渲染 Add Task 弹窗
pub fn render(frame: &mut Frame, input: &str, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 9u16;

    let popup_area = center_dialog(area, popup_width, popup_height);
    let inner_area = render_dialog_frame(frame, popup_area, " Add Task ", colors.highlight, colors);

    // 内部布局: 空行 + 输入行 + 空行 + 预览行 + 空行 + 提示行
    let [_, input_area, _, preview_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1), // 顶部空行
        Constraint::Length(1), // 输入行
        Constraint::Length(1), // 空行
        Constraint::Length(1), // 预览行
        Constraint::Length(1), // 空行
        Constraint::Length(1), // 提示行
    ])
    .areas(inner_area);

    // 渲染输入行: "Task: {input}█"
    let input_line = Line::from(vec![
        Span::styled("  Task: ", Style::default().fg(colors.muted)),
        Span::styled(input, Style::default().fg(colors.text)),
        Span::styled("█", Style::default().fg(colors.highlight)), // 光标
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    // 渲染预览行：trim 后将被保存的文本
    let preview_line = if input.trim().is_empty() {
        Line::from(Span::styled(
            "  (enter task text)",
            Style::default().fg(colors.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled("  → ", Style::default().fg(colors.status_done)),
            Span::styled(
                input.trim().to_string(),
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(preview_line), preview_area);

    // 渲染底部提示
    render_hint(
        frame,
        hint_area,
        &[("Enter", "add"), ("Esc", "cancel")],
        colors,
    );
}
