//! GPU panel: utilization and VRAM bars, sensor line, top VRAM processes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::StatsSnapshot;
use crate::ui::util::{fmt_pct, fmt_temp, gauge_ratio};

/// Placeholder rendered when the backend reports no GPU at all.
pub const NO_GPU_PLACEHOLDER: &str = "no GPU detected";

/// VRAM percentage is not on the wire; derive it here.
pub fn vram_pct(used_mb: u64, total_mb: u64) -> f64 {
    if total_mb == 0 {
        0.0
    } else {
        used_mb as f64 / total_mb as f64 * 100.0
    }
}

pub fn draw_gpu(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    let mut area = area;
    let block = Block::default().borders(Borders::ALL).title("GPU");
    f.render_widget(block, area);

    if area.height <= 2 || area.width <= 2 {
        return;
    }
    area.y += 1;
    area.height = area.height.saturating_sub(2);
    area.x += 1;
    area.width = area.width.saturating_sub(2);

    let Some(s) = m else {
        return;
    };
    let Some(g) = s.gpu.as_ref() else {
        f.render_widget(Paragraph::new(NO_GPU_PLACEHOLDER), area);
        return;
    };

    // name, util bar, vram bar, sensor line, then top processes
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ];
    let proc_rows = (area.height as usize)
        .saturating_sub(constraints.len())
        .min(g.top_processes.len());
    constraints.extend(std::iter::repeat(Constraint::Length(1)).take(proc_rows));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    if rows.len() < 4 {
        return;
    }

    // Per bar horizontal layout: [gauge] [value]
    let split_bar = |r: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(8),     // gauge column
                Constraint::Length(26), // value column
            ])
            .split(r)
    };

    f.render_widget(
        Paragraph::new(Span::raw(format!("{} {}", g.vendor, g.name)))
            .style(Style::default().fg(Color::Gray)),
        rows[0],
    );

    let util_cols = split_bar(rows[1]);
    let util_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .label(Span::raw(""))
        .ratio(gauge_ratio(g.usage_percent as f64));
    f.render_widget(util_gauge, util_cols[0]);
    f.render_widget(
        Paragraph::new(Span::raw(format!("util: {}", fmt_pct(g.usage_percent as f64))))
            .style(Style::default().fg(Color::Gray)),
        util_cols[1],
    );

    let mem_cols = split_bar(rows[2]);
    let pct = vram_pct(g.memory_used_mb, g.memory_total_mb);
    let mem_gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightMagenta))
        .label(Span::raw(""))
        .ratio(gauge_ratio(pct));
    f.render_widget(mem_gauge, mem_cols[0]);
    f.render_widget(
        Paragraph::new(Span::raw(format!(
            "vram: {}/{} MB ({})",
            g.memory_used_mb,
            g.memory_total_mb,
            fmt_pct(pct)
        )))
        .style(Style::default().fg(Color::Gray)),
        mem_cols[1],
    );

    let fan = g
        .fan_speed_percent
        .map(|v| fmt_pct(v as f64))
        .unwrap_or_else(|| "n/a".into());
    let core = g
        .core_clock_mhz
        .map(|v| format!("{v} MHz"))
        .unwrap_or_else(|| "n/a".into());
    let mem_clk = g
        .memory_clock_mhz
        .map(|v| format!("{v} MHz"))
        .unwrap_or_else(|| "n/a".into());
    f.render_widget(
        Paragraph::new(Span::raw(format!(
            "temp {} · fan {} · core {} · mem {}",
            fmt_temp(g.temperature as f32),
            fan,
            core,
            mem_clk
        )))
        .style(Style::default().fg(Color::Gray)),
        rows[3],
    );

    // Top VRAM consumers, one per remaining row
    for (slot, p) in rows.iter().skip(4).zip(g.top_processes.iter()) {
        f.render_widget(
            Paragraph::new(Span::raw(format!(
                "  {:>7} {} — {} MB",
                p.pid, p.name, p.memory_mb
            )))
            .style(Style::default().fg(Color::DarkGray)),
            *slot,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vram_pct_derived_client_side() {
        assert_eq!(vram_pct(2048, 10240), 20.0);
        assert_eq!(vram_pct(0, 0), 0.0, "zero total must not divide");
    }
}
