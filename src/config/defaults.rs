use super::settings::{
    AiConfig, BackendConfig, ConsoleConfig, LoggingConfig, PollingConfig, ThresholdsConfig,
};

// ---------------------------------------------------------------------------
// Top-level struct defaults
// ---------------------------------------------------------------------------

pub fn default_backend_config() -> BackendConfig {
    BackendConfig {
        base_url: default_backend_base_url(),
        request_timeout_ms: default_request_timeout_ms(),
    }
}

pub fn default_polling_config() -> PollingConfig {
    PollingConfig {
        stats_ms: default_stats_ms(),
        history_ms: default_history_ms(),
        alerts_ms: default_alerts_ms(),
        blocked_ms: default_blocked_ms(),
        status_ms: default_status_ms(),
        ai_status_ms: default_ai_status_ms(),
    }
}

pub fn default_thresholds_config() -> ThresholdsConfig {
    ThresholdsConfig {
        fallback_arp: default_fallback_arp(),
        fallback_mac: default_fallback_mac(),
    }
}

pub fn default_ai_config() -> AiConfig {
    AiConfig {
        flood_label: default_flood_label(),
    }
}

pub fn default_console_config() -> ConsoleConfig {
    ConsoleConfig {
        bind: default_console_bind(),
        push_interval_ms: default_push_interval_ms(),
    }
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file: default_log_file(),
    }
}

// ---------------------------------------------------------------------------
// BackendConfig field defaults
// ---------------------------------------------------------------------------

pub fn default_backend_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

pub fn default_request_timeout_ms() -> u64 {
    5_000
}

// ---------------------------------------------------------------------------
// PollingConfig field defaults
// ---------------------------------------------------------------------------

pub fn default_stats_ms() -> u64 {
    1_000
}

pub fn default_history_ms() -> u64 {
    1_000
}

pub fn default_alerts_ms() -> u64 {
    2_000
}

pub fn default_blocked_ms() -> u64 {
    3_000
}

pub fn default_status_ms() -> u64 {
    1_000
}

pub fn default_ai_status_ms() -> u64 {
    1_000
}

// ---------------------------------------------------------------------------
// ThresholdsConfig field defaults
// ---------------------------------------------------------------------------

pub fn default_fallback_arp() -> u64 {
    10
}

pub fn default_fallback_mac() -> u64 {
    10
}

// ---------------------------------------------------------------------------
// AiConfig / ConsoleConfig / LoggingConfig field defaults
// ---------------------------------------------------------------------------

pub fn default_flood_label() -> String {
    "ARP_FLOOD".to_string()
}

pub fn default_console_bind() -> String {
    "127.0.0.1:8088".to_string()
}

pub fn default_push_interval_ms() -> u64 {
    250
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_log_file() -> String {
    "logs/switchwatch.log".to_string()
}
