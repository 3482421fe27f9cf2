//! Hardware sensor readouts: temperatures, fan, voltage.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::types::StatsSnapshot;
use crate::ui::util::fmt_temp;

pub const NO_SENSOR_PLACEHOLDER: &str = "no sensor data";

pub fn draw_sensors(f: &mut ratatui::Frame<'_>, area: Rect, m: Option<&StatsSnapshot>) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title("Sensors"),
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

    let sensors = &s.sensors;
    if sensors.is_empty() {
        f.render_widget(Paragraph::new(NO_SENSOR_PLACEHOLDER), inner);
        return;
    }

    let reading = |label: &str, value: Option<String>| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
            Span::raw(value.unwrap_or_else(|| "n/a".into())),
        ])
    };

    let mut lines = vec![
        reading("CPU temp", sensors.cpu_temp_celsius.map(fmt_temp)),
        reading(
            "Board temp",
            sensors.motherboard_temp_celsius.map(fmt_temp),
        ),
        reading(
            "CPU fan",
            sensors.cpu_fan_rpm.map(|v| format!("{v} RPM")),
        ),
        reading(
            "CPU voltage",
            sensors.cpu_voltage.map(|v| format!("{v:.2} V")),
        ),
    ];
    lines.truncate(inner.height as usize);
    f.render_widget(Paragraph::new(lines), inner);
}
