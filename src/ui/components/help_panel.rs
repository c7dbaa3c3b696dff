//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame};

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 22;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let panel_area = center_dialog(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_dialog_frame(frame, panel_area, " Help ", colors.border, colors);

    let paragraph = Paragraph::new(build_help_lines(colors));
    frame.render_widget(paragraph, inner);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![
        // Navigation 分组
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        Line::from(""),
        // Tasks 分组
        section_header("Tasks", colors),
        key_line("a", "Add task", colors),
        key_line("Space / x", "Toggle complete", colors),
        key_line("e / Enter", "Edit task", colors),
        key_line("d", "Delete task", colors),
        Line::from(""),
        // Editing 分组
        section_header("Editing", colors),
        key_line("Enter", "Save", colors),
        key_line("Esc", "Cancel", colors),
        Line::from(""),
        // Other 分组
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("q", "Quit", colors),
    ];

    // 版本信息区域
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  ────────────────────────────────",
        Style::default().fg(colors.muted),
    )));
    lines.push(Line::from(Span::styled(
        format!("  Sprig v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(colors.text),
    )));

    lines
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(colors.text)),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
