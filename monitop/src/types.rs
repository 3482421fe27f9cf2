//! Types that mirror the backend's JSON schema.
//!
//! Every section tolerates absence: the backend owns the payload shape and
//! older agents may omit whole blocks. Numeric percentages are clamped by the
//! producer; the client does not re-validate them.

use serde::Deserialize;

/// One point-in-time telemetry payload from `GET /api/stats`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StatsSnapshot {
    pub hostname: String,
    pub os_version: String,
    pub uptime_hours: f64,
    pub resources: ResourceBlock,
    pub cpu_advanced: CpuAdvanced,
    pub gpu: Option<GpuInfo>,
    pub processes: Vec<ProcessInfo>,
    pub disks: Vec<DiskInfo>,
    pub network_advanced: NetworkAdvanced,
    pub sensors: HardwareSensors,
    pub battery: Option<BatteryInfo>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ResourceBlock {
    pub cpu_usage: f32,
    pub cpu_count: usize,
    pub cpu_name: String,
    // memory values are GB
    pub memory_total: f64,
    pub memory_used: f64,
    pub memory_usage_percent: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CpuAdvanced {
    pub per_core_usage: Vec<f32>,
    pub cpu_frequency_mhz: u64,
    pub load_avg_1: f64,
    pub load_avg_5: f64,
    pub load_avg_15: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GpuInfo {
    pub vendor: String,
    pub name: String,
    pub usage_percent: u32,
    pub memory_total_mb: u64,
    pub memory_used_mb: u64,
    pub temperature: u32,
    pub fan_speed_percent: Option<u32>,
    pub core_clock_mhz: Option<u32>,
    pub memory_clock_mhz: Option<u32>,
    pub top_processes: Vec<GpuProcessInfo>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GpuProcessInfo {
    pub pid: u32,
    pub name: String,
    pub memory_mb: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_usage: f32,
    pub memory_mb: f64,
    pub status: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DiskInfo {
    pub name: String,
    pub total_gb: f64,
    pub used_gb: f64,
    pub usage_percent: f64,
    pub mount_point: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NetworkAdvanced {
    pub interfaces: Vec<NetworkInterface>,
    pub download_speed_mbps: f64,
    pub upload_speed_mbps: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NetworkInterface {
    pub name: String,
    pub received_mb: u64,
    pub transmitted_mb: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct HardwareSensors {
    pub cpu_temp_celsius: Option<f32>,
    pub motherboard_temp_celsius: Option<f32>,
    pub cpu_fan_rpm: Option<u32>,
    pub cpu_voltage: Option<f32>,
}

impl HardwareSensors {
    /// True when no sensor reported anything at all.
    pub fn is_empty(&self) -> bool {
        self.cpu_temp_celsius.is_none()
            && self.motherboard_temp_celsius.is_none()
            && self.cpu_fan_rpm.is_none()
            && self.cpu_voltage.is_none()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BatteryInfo {
    pub percentage: f32,
    pub is_charging: bool,
    pub time_remaining_minutes: Option<i64>,
    pub health_percent: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_parses() {
        let json = r#"{
            "hostname": "box",
            "os_version": "Linux 6.8",
            "uptime_hours": 30.5,
            "resources": {
                "cpu_usage": 12.5, "cpu_count": 8, "cpu_name": "Ryzen 7",
                "memory_total": 31.2, "memory_used": 10.6, "memory_usage_percent": 33.9
            },
            "cpu_advanced": {
                "per_core_usage": [1.0, 2.0], "cpu_frequency_mhz": 3800,
                "load_avg_1": 0.5, "load_avg_5": 0.4, "load_avg_15": 0.3
            },
            "gpu": {
                "vendor": "NVIDIA", "name": "RTX 3080", "usage_percent": 42,
                "memory_total_mb": 10240, "memory_used_mb": 2048, "temperature": 61,
                "fan_speed_percent": 35, "core_clock_mhz": 1710, "memory_clock_mhz": 9501,
                "top_processes": [{"pid": 4242, "name": "ffmpeg", "memory_mb": 900}]
            },
            "processes": [
                {"pid": 1, "name": "init", "cpu_usage": 0.1, "memory_mb": 12.0, "status": "Sleep"}
            ],
            "disks": [
                {"name": "nvme0n1", "total_gb": 931.5, "used_gb": 400.2,
                 "usage_percent": 42.9, "mount_point": "/"}
            ],
            "network_advanced": {
                "interfaces": [{"name": "eth0", "received_mb": 1200, "transmitted_mb": 300}],
                "download_speed_mbps": 12.34, "upload_speed_mbps": 1.2
            },
            "sensors": {
                "cpu_temp_celsius": 54.0, "motherboard_temp_celsius": null,
                "cpu_fan_rpm": 1250, "cpu_voltage": 1.25
            },
            "battery": {
                "percentage": 88.5, "is_charging": false,
                "time_remaining_minutes": 125, "health_percent": 97.0
            }
        }"#;
        let s: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(s.hostname, "box");
        assert_eq!(s.resources.cpu_count, 8);
        assert_eq!(s.cpu_advanced.per_core_usage.len(), 2);
        let gpu = s.gpu.unwrap();
        assert_eq!(gpu.memory_used_mb, 2048);
        assert_eq!(gpu.top_processes[0].pid, 4242);
        assert_eq!(s.disks[0].mount_point, "/");
        assert_eq!(s.battery.unwrap().time_remaining_minutes, Some(125));
        assert!(!s.sensors.is_empty());
    }

    #[test]
    fn missing_sections_default() {
        let s: StatsSnapshot = serde_json::from_str(r#"{"hostname":"bare"}"#).unwrap();
        assert_eq!(s.hostname, "bare");
        assert!(s.gpu.is_none());
        assert!(s.battery.is_none());
        assert!(s.processes.is_empty());
        assert!(s.disks.is_empty());
        assert!(s.sensors.is_empty());
        assert_eq!(s.resources.cpu_count, 0);
    }

    #[test]
    fn null_gpu_and_unknown_fields_tolerated() {
        let s: StatsSnapshot =
            serde_json::from_str(r#"{"gpu":null,"battery":null,"extra_field":7}"#).unwrap();
        assert!(s.gpu.is_none());
        assert!(s.battery.is_none());
    }

    #[test]
    fn sensors_all_null_is_empty() {
        let s: HardwareSensors = serde_json::from_str("{}").unwrap();
        assert!(s.is_empty());
        let s: HardwareSensors =
            serde_json::from_str(r#"{"cpu_fan_rpm":900}"#).unwrap();
        assert!(!s.is_empty());
    }
}
