use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use view_state::{ControllerConfig, TeardownPolicy};

pub const SETTINGS_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub content_path: Option<PathBuf>,
    pub log_filter: String,
    pub scroll_threshold_px: u32,
    pub reveal_threshold: f64,
    pub sent_reset_ms: u64,
    pub cancel_reset_on_teardown: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let controller = ControllerConfig::default();
        Self {
            content_path: None,
            log_filter: "info".into(),
            scroll_threshold_px: controller.scroll_threshold_px,
            reveal_threshold: controller.reveal_threshold,
            sent_reset_ms: u64::try_from(controller.sent_reset_delay.as_millis())
                .unwrap_or(u64::MAX),
            cancel_reset_on_teardown: false,
        }
    }
}

impl Settings {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            scroll_threshold_px: self.scroll_threshold_px,
            reveal_threshold: self.reveal_threshold,
            sent_reset_delay: Duration::from_millis(self.sent_reset_ms),
            teardown: if self.cancel_reset_on_teardown {
                TeardownPolicy::CancelPendingReset
            } else {
                TeardownPolicy::LeavePendingReset
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    content_path: Option<PathBuf>,
    log_filter: Option<String>,
    scroll_threshold_px: Option<u32>,
    reveal_threshold: Option<f64>,
    sent_reset_ms: Option<u64>,
    cancel_reset_on_teardown: Option<bool>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file if it parses, then environment overrides.
/// Values that fail to parse are ignored.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            apply_file(&mut settings, file_cfg);
        }
    }

    if let Some(v) = env("PORTFOLIO_CONTENT") {
        settings.content_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__CONTENT_PATH") {
        settings.content_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = env("APP__SCROLL_THRESHOLD_PX") {
        if let Ok(parsed) = v.trim().parse::<u32>() {
            settings.scroll_threshold_px = parsed;
        }
    }

    if let Some(v) = env("APP__REVEAL_THRESHOLD") {
        if let Some(parsed) = parse_ratio(&v) {
            settings.reveal_threshold = parsed;
        }
    }

    if let Some(v) = env("APP__SENT_RESET_MS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.sent_reset_ms = parsed;
        }
    }

    if let Some(v) = env("APP__CANCEL_RESET_ON_TEARDOWN") {
        if let Some(parsed) = parse_flag(&v) {
            settings.cancel_reset_on_teardown = parsed;
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.content_path {
        settings.content_path = Some(v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.scroll_threshold_px {
        settings.scroll_threshold_px = v;
    }
    if let Some(v) = file_cfg.reveal_threshold.filter(|v| is_ratio(*v)) {
        settings.reveal_threshold = v;
    }
    if let Some(v) = file_cfg.sent_reset_ms {
        settings.sent_reset_ms = v;
    }
    if let Some(v) = file_cfg.cancel_reset_on_teardown {
        settings.cancel_reset_on_teardown = v;
    }
}

fn is_ratio(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn parse_ratio(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| is_ratio(*v))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
