// --- File: crates/bookings_config/src/models.rs ---

use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    30
}

fn default_follow_redirects() -> bool {
    true
}

fn default_local_store_path() -> String {
    ".bookings_local_store.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Remote Booking Service ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingServiceConfig {
    pub base_url: String, // e.g. https://bookings.example.com, no trailing /bookings
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

// --- Identity ---
// The signed-in user. `None` while unauthenticated.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct IdentityConfig {
    #[serde(default)]
    pub email: Option<String>,
}

// --- Local ephemeral store (booking status markers) ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LocalStoreConfig {
    #[serde(default = "default_local_store_path")]
    pub path: String,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            path: default_local_store_path(),
        }
    }
}

// --- Logging ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // trace | debug | info | warn | error
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // The remote service is mandatory
    pub booking_service: BookingServiceConfig,

    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub local_store: LocalStoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
