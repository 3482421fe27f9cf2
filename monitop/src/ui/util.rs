//! Small UI helpers: fixed-precision formatting, truncation, icons.
//!
//! Display precision is fixed across the dashboard: one decimal for
//! percentages and temperatures, two for GB values, zero for counts.

pub fn fmt_pct(v: f64) -> String {
    format!("{v:.1}%")
}

pub fn fmt_temp(v: f32) -> String {
    format!("{v:.1}°C")
}

pub fn fmt_gb(v: f64) -> String {
    format!("{v:.2} GB")
}

pub fn fmt_mbps(v: f64) -> String {
    format!("{v:.2} Mbps")
}

/// Remaining battery time: 125 -> "2h 5m", 45 -> "45m".
pub fn fmt_minutes(total: i64) -> String {
    let total = total.max(0);
    let h = total / 60;
    let m = total % 60;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}

/// Uptime reported in hours: 30.5 -> "1d 6h", 6.9 -> "6h".
pub fn fmt_uptime_hours(hours: f64) -> String {
    let total = hours.max(0.0) as u64;
    let d = total / 24;
    let h = total % 24;
    if d > 0 {
        format!("{d}d {h}h")
    } else {
        format!("{h}h")
    }
}

/// Gauge widgets want a 0..=1 ratio; the producer owns percentage clamping,
/// this only keeps the widget from panicking on a bad payload.
pub fn gauge_ratio(pct: f64) -> f64 {
    (pct / 100.0).clamp(0.0, 1.0)
}

pub fn truncate_middle(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return "...".into();
    }
    let keep = max - 3;
    let left = keep / 2;
    let right = keep - left;
    format!("{}...{}", &s[..left], &s[s.len() - right..])
}

pub fn disk_icon(name: &str) -> &'static str {
    let n = name.to_ascii_lowercase();
    if n.contains(':') {
        "🗄️"
    } else if n.contains("nvme") {
        "⚡"
    } else if n.starts_with("sd") {
        "💽"
    } else if n.contains("overlay") {
        "📦"
    } else {
        "🖴"
    }
}
