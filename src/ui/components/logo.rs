//! ASCII Logo 组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo
const LOGO: &[&str] = &[
    "███████╗██████╗ ██████╗ ██╗ ██████╗ ",
    "██╔════╝██╔══██╗██╔══██╗██║██╔════╝ ",
    "███████╗██████╔╝██████╔╝██║██║  ███╗",
    "╚════██║██╔═══╝ ██╔══██╗██║██║   ██║",
    "███████║██║     ██║  ██║██║╚██████╔╝",
    "╚══════╝╚═╝     ╚═╝  ╚═╝╚═╝ ╚═════╝ ",
];

/// Logo 高度（行数）
pub const LOGO_HEIGHT: u16 = 6;

/// 渲染 Logo（水平居中）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.logo))))
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
