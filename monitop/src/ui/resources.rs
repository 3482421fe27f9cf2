//! CPU and memory gauges from the merged resource block.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::types::StatsSnapshot;
use crate::ui::util::{fmt_gb, fmt_pct, gauge_ratio};

pub fn draw_cpu_gauge(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    let (ratio, label) = if let Some(s) = m {
        let r = &s.resources;
        (
            gauge_ratio(r.cpu_usage as f64),
            format!(
                "{} — {} ({} cores)",
                fmt_pct(r.cpu_usage as f64),
                r.cpu_name,
                r.cpu_count
            ),
        )
    } else {
        (0.0, "—".to_string())
    };

    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("CPU"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(label);
    f.render_widget(g, area);
}

pub fn draw_mem_gauge(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    let (ratio, label) = if let Some(s) = m {
        let r = &s.resources;
        (
            gauge_ratio(r.memory_usage_percent),
            format!(
                "{} / {} ({})",
                fmt_gb(r.memory_used),
                fmt_gb(r.memory_total),
                fmt_pct(r.memory_usage_percent)
            ),
        )
    } else {
        (0.0, "—".to_string())
    };

    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Memory"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio)
        .label(label);
    f.render_widget(g, area);
}
