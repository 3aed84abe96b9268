//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Calendar configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Calendar configuration.
///
/// The season reference years drive year inference for calendar lines that
/// carry no explicit year ("18 ott"): months from August onward fall in
/// `season_early_year`, months before August in `season_late_year`. These
/// MUST be rolled forward each season by deployment configuration; the
/// defaults only match the 2025/26 season.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Path of the raw calendar text blob.
    #[serde(default = "default_calendar_path")]
    pub path: String,
    /// Year assigned to yearless dates in August-December.
    #[serde(default = "default_season_early_year")]
    pub season_early_year: i32,
    /// Year assigned to yearless dates in January-July.
    #[serde(default = "default_season_late_year")]
    pub season_late_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            path: default_calendar_path(),
            season_early_year: default_season_early_year(),
            season_late_year: default_season_late_year(),
        }
    }
}

fn default_calendar_path() -> String {
    "data/calendar.txt".to_string()
}

fn default_season_early_year() -> i32 {
    2025
}

fn default_season_late_year() -> i32 {
    2026
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CROCETTE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
