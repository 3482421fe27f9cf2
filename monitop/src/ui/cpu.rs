//! Per-core usage bars plus frequency and load averages.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::StatsSnapshot;
use crate::ui::util::gauge_ratio;

pub fn core_color(usage: f32) -> Color {
    match usage {
        x if x < 25.0 => Color::Green,
        x if x < 60.0 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn draw_cores(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Cores"), area);
    let Some(s) = m else { return };

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height == 0 {
        return;
    }

    let adv = &s.cpu_advanced;

    // First line: frequency + load averages
    let summary = format!(
        "freq {} MHz · load {:.2} {:.2} {:.2}",
        adv.cpu_frequency_mhz, adv.load_avg_1, adv.load_avg_5, adv.load_avg_15
    );
    let summary_area = Rect {
        height: 1,
        ..inner
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            summary,
            Style::default().fg(Color::Gray),
        ))),
        summary_area,
    );

    let cores_area = Rect {
        x: inner.x,
        y: inner.y + 1,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    if adv.per_core_usage.is_empty() {
        f.render_widget(Paragraph::new("no core data"), cores_area);
        return;
    }

    let rows = cores_area.height as usize;
    let show_n = rows.min(adv.per_core_usage.len());
    if show_n == 0 {
        return;
    }
    let constraints: Vec<Constraint> = (0..show_n).map(|_| Constraint::Length(1)).collect();
    let vchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(cores_area);

    for i in 0..show_n {
        let hchunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(6), Constraint::Length(12)])
            .split(vchunks[i]);

        let curr = adv.per_core_usage[i].clamp(0.0, 100.0);
        let fg = core_color(curr);

        let g = Gauge::default()
            .gauge_style(Style::default().fg(fg))
            .label(Span::raw(""))
            .ratio(gauge_ratio(curr as f64));
        f.render_widget(g, hchunks[0]);

        let label = format!("cpu{i:<2} {curr:>5.1}%");
        let line = Line::from(Span::styled(
            label,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(line).right_aligned(), hchunks[1]);
    }
}
