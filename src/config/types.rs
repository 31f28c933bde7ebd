use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub support: SupportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Contact numbers and canned text for the support affordances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportConfig {
    /// WhatsApp support number (default: "+2348000000000").
    #[serde(default = "default_support_number")]
    pub whatsapp_number: String,
    /// Pre-filled chat message.
    #[serde(default = "default_support_message")]
    pub message: String,
    /// Number the tracked rider is reached on.
    #[serde(default = "default_support_number")]
    pub rider_phone: String,
}

/// Event loop timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Live tracking step interval in milliseconds (default: 1000).
    #[serde(default = "default_tracking_interval_ms")]
    pub tracking_interval_ms: u64,
}

fn default_support_number() -> String {
    "+2348000000000".to_string()
}

fn default_support_message() -> String {
    "Hi Níbbo Support, I need help.".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_tracking_interval_ms() -> u64 {
    1000
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_support_number(),
            message: default_support_message(),
            rider_phone: default_support_number(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            tracking_interval_ms: default_tracking_interval_ms(),
        }
    }
}
