//! Disk cards with per-device gauge and title line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::StatsSnapshot;
use crate::ui::util::{disk_icon, fmt_gb, fmt_pct, gauge_ratio, truncate_middle};

pub const NO_DISK_PLACEHOLDER: &str = "no disk data";

pub fn draw_disks(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Disks"), area);
    let Some(s) = m else { return };

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.height < 1 {
        return;
    }
    if s.disks.is_empty() {
        f.render_widget(Paragraph::new(NO_DISK_PLACEHOLDER), inner);
        return;
    }
    if inner.height < 3 {
        return;
    }

    let per_disk_h = 3u16;
    let max_cards = (inner.height / per_disk_h).min(s.disks.len() as u16) as usize;

    let constraints: Vec<Constraint> =
        (0..max_cards).map(|_| Constraint::Length(per_disk_h)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, slot) in rows.iter().enumerate() {
        let d = &s.disks[i];
        let pct = d.usage_percent;

        let color = if pct < 70.0 {
            Color::Green
        } else if pct < 90.0 {
            Color::Yellow
        } else {
            Color::Red
        };

        let title = format!(
            "{} {} on {}   {} / {}  ({})",
            disk_icon(&d.name),
            truncate_middle(&d.name, (slot.width.saturating_sub(6)) as usize / 3),
            d.mount_point,
            fmt_gb(d.used_gb),
            fmt_gb(d.total_gb),
            fmt_pct(pct)
        );

        let card = Block::default().borders(Borders::ALL).title(title);
        f.render_widget(card, *slot);

        let inner_card = Rect {
            x: slot.x + 1,
            y: slot.y + 1,
            width: slot.width.saturating_sub(2),
            height: slot.height.saturating_sub(2),
        };
        if inner_card.height == 0 {
            continue;
        }

        let gauge_rect = Rect {
            x: inner_card.x,
            y: inner_card.y + inner_card.height / 2,
            width: inner_card.width,
            height: 1,
        };

        let g = Gauge::default()
            .ratio(gauge_ratio(pct))
            .label(ratatui::text::Span::raw(""))
            .gauge_style(Style::default().fg(color));
        f.render_widget(g, gauge_rect);
    }
}
