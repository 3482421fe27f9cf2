//! Battery gauge with charge state and remaining time.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::{BatteryInfo, StatsSnapshot};
use crate::ui::util::{fmt_minutes, fmt_pct, gauge_ratio};

pub const NO_BATTERY_PLACEHOLDER: &str = "no battery detected";

/// Gauge label: charge state plus remaining time when the backend knows it.
pub fn battery_label(b: &BatteryInfo) -> String {
    let pct = fmt_pct(b.percentage as f64);
    if b.is_charging {
        format!("{pct} — charging")
    } else {
        match b.time_remaining_minutes {
            Some(mins) => format!("{pct} — {} left", fmt_minutes(mins)),
            None => pct,
        }
    }
}

pub fn draw_battery(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    let battery = m.and_then(|s| s.battery.as_ref());
    let Some(b) = battery else {
        f.render_widget(
            Block::default().borders(Borders::ALL).title("Battery"),
            area,
        );
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if inner.height > 0 {
            f.render_widget(Paragraph::new(NO_BATTERY_PLACEHOLDER), inner);
        }
        return;
    };

    let color = if b.is_charging || b.percentage > 40.0 {
        Color::Green
    } else if b.percentage > 15.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let g = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Battery (health {})", fmt_pct(b.health_percent as f64))),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(gauge_ratio(b.percentage as f64))
        .label(battery_label(b));
    f.render_widget(g, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_time_renders_hours_and_minutes() {
        let b = BatteryInfo {
            percentage: 88.5,
            is_charging: false,
            time_remaining_minutes: Some(125),
            health_percent: 97.0,
        };
        assert_eq!(battery_label(&b), "88.5% — 2h 5m left");
    }

    #[test]
    fn charging_hides_remaining_time() {
        let b = BatteryInfo {
            percentage: 50.0,
            is_charging: true,
            time_remaining_minutes: Some(10),
            health_percent: 90.0,
        };
        assert_eq!(battery_label(&b), "50.0% — charging");
    }

    #[test]
    fn unknown_remaining_time_shows_bare_percentage() {
        let b = BatteryInfo {
            percentage: 61.2,
            is_charging: false,
            time_remaining_minutes: None,
            health_percent: 80.0,
        };
        assert_eq!(battery_label(&b), "61.2%");
    }
}
