//! Network panel: live up/down rates plus per-interface totals.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::types::StatsSnapshot;
use crate::ui::util::fmt_mbps;

pub const NO_INTERFACE_PLACEHOLDER: &str = "no interface data";

pub fn draw_net(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Network"),
        area,
    );
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

    let net = &s.network_advanced;
    let mut lines = vec![Line::from(vec![
        Span::styled("↓ ", Style::default().fg(Color::Green)),
        Span::raw(fmt_mbps(net.download_speed_mbps)),
        Span::raw("   "),
        Span::styled("↑ ", Style::default().fg(Color::Blue)),
        Span::raw(fmt_mbps(net.upload_speed_mbps)),
    ])];

    if net.interfaces.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_INTERFACE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for iface in &net.interfaces {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:<12} rx {} MB · tx {} MB",
                    iface.name, iface.received_mb, iface.transmitted_mb
                ),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines.truncate(inner.height as usize);
    f.render_widget(Paragraph::new(lines), inner);
}
