//! Top header with hostname, OS, uptime, clock, and pause indicator.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::types::StatsSnapshot;
use crate::ui::util::fmt_uptime_hours;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>, paused: bool) {
    let clock = chrono::Local::now().format("%H:%M:%S");
    let pause_tag = if paused { " [paused]" } else { "" };
    let title = if let Some(s) = m {
        format!(
            "monitop — {} | {} | up {} | {}{}  (q quit · l log out)",
            s.hostname,
            s.os_version,
            fmt_uptime_hours(s.uptime_hours),
            clock,
            pause_tag
        )
    } else {
        format!("monitop — connecting... | {clock}{pause_tag}  (q quit · l log out)")
    };
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
