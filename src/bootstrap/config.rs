use crate::core::types::LanguageCode;
use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Config {
    pub general: GeneralConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub operational_parameters: OperationalParameters,
}

#[derive(Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_lang")]
    pub default_lang: LanguageCode,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevelConfig,
}

const fn default_lang() -> LanguageCode {
    LanguageCode::Ru
}

const fn default_log_level() -> LogLevelConfig {
    LogLevelConfig::Info
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevelConfig {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevelConfig {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub db_file: String,
}

#[derive(Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub admin_chat_id: i64,
}

#[derive(Deserialize, Clone)]
pub struct OperationalParameters {
    /// Zone in which all end-time and notification comparisons happen.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default = "default_scheduler_tick_seconds")]
    #[serde(rename = "scheduler_tick_seconds")]
    pub scheduler_tick: u64,
}

impl Default for OperationalParameters {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            scheduler_tick: default_scheduler_tick_seconds(),
        }
    }
}

fn default_timezone() -> Tz {
    chrono_tz::Europe::Berlin
}

const fn default_scheduler_tick_seconds() -> u64 {
    60
}

#[cfg(test)]
#[path = "../../tests/unit/bootstrap_config.rs"]
mod tests;
