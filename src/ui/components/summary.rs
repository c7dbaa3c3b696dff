//! 任务统计行组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染统计行："N of M tasks completed"
pub fn render(frame: &mut Frame, area: Rect, completed: usize, total: usize, colors: &ThemeColors) {
    let style = if total > 0 && completed == total {
        Style::default().fg(colors.status_done)
    } else {
        Style::default().fg(colors.muted)
    };

    let line = Line::from(Span::styled(
        format!(" {} of {} tasks completed", completed, total),
        style,
    ));

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(paragraph, area);
}
