//! Process table with per-cell coloring and keyboard scrolling.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::types::StatsSnapshot;

pub const NO_PROCESS_PLACEHOLDER: &str = "no process data";

const COLS: [Constraint; 5] = [
    Constraint::Length(8),      // PID
    Constraint::Percentage(40), // Name
    Constraint::Length(8),      // CPU %
    Constraint::Length(10),     // Mem
    Constraint::Length(10),     // Status
];

pub fn draw_processes(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    m: Option<&StatsSnapshot>,
    scroll_offset: usize,
) {
    let procs = m.map(|s| s.processes.as_slice()).unwrap_or(&[]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Processes ({})", procs.len()));
    f.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height < 1 || inner.width < 3 {
        return;
    }

    if procs.is_empty() {
        f.render_widget(Paragraph::new(NO_PROCESS_PLACEHOLDER), inner);
        return;
    }

    let header_rows = 1usize;
    let viewport_rows = inner.height.saturating_sub(header_rows as u16) as usize;
    let max_off = procs.len().saturating_sub(viewport_rows);
    let offset = scroll_offset.min(max_off);

    let rows_iter = procs.iter().skip(offset).take(viewport_rows).map(|p| {
        let cpu_fg = match p.cpu_usage {
            x if x < 25.0 => Color::Green,
            x if x < 60.0 => Color::Yellow,
            _ => Color::Red,
        };
        Row::new(vec![
            Cell::from(p.pid.to_string()).style(Style::default().fg(Color::DarkGray)),
            Cell::from(p.name.clone()),
            Cell::from(format!("{:>5.1}", p.cpu_usage.clamp(0.0, 100.0)))
                .style(Style::default().fg(cpu_fg)),
            Cell::from(format!("{:.0} MB", p.memory_mb)),
            Cell::from(p.status.clone()).style(Style::default().fg(Color::Gray)),
        ])
    });

    let header = Row::new(vec!["PID", "Name", "CPU %", "Mem", "Status"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows_iter, COLS.to_vec())
        .header(header)
        .column_spacing(1);
    f.render_widget(table, inner);
}
