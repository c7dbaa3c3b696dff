//! 任务列表组件
//!
//! 正在编辑的行用草稿 + 光标替换任务文本渲染，其余行显示完成图标和相对时间。

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::store::Task;
use crate::theme::ThemeColors;

use super::format_relative_time;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    editing_id: Option<u64>,
    editing_draft: Option<&str>,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 完成图标
        Cell::from("TASK"),
        Cell::from("CREATED"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let is_editing = editing_id == Some(task.id);
            let selector = if is_selected { "❯" } else { " " };

            // 完成图标
            let (icon, icon_style) = if task.completed {
                ("✓", Style::default().fg(colors.status_done))
            } else {
                ("○", Style::default().fg(colors.status_open))
            };

            // 文本单元格：编辑中显示草稿 + 光标，已完成加删除线
            let text_cell = if is_editing {
                let draft = editing_draft.unwrap_or_default();
                Cell::from(Line::from(vec![
                    Span::styled(draft.to_string(), Style::default().fg(colors.text)),
                    Span::styled("█", Style::default().fg(colors.highlight)), // 光标
                ]))
            } else if task.completed {
                Cell::from(task.text.clone()).style(
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                Cell::from(task.text.clone())
            };

            let row_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(icon).style(icon_style),
                text_cell,
                Cell::from(format_relative_time(task.created_at))
                    .style(Style::default().fg(colors.muted)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(2),  // 完成图标
        Constraint::Fill(1),    // TASK (flex)
        Constraint::Length(14), // CREATED
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}
