//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is honored by the binary
//! (`dotenv().ok()` runs before `AppConfig::from_env`).

use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::roi::UnknownCropPolicy;

pub const ENV_DATA_DIR: &str = "INTELLITECH_DATA_DIR";
pub const ENV_LOG: &str = "INTELLITECH_LOG";
pub const ENV_LOG_JSON: &str = "INTELLITECH_LOG_JSON";
pub const ENV_UNKNOWN_CROP: &str = "INTELLITECH_UNKNOWN_CROP";
pub const ENV_TYPING_DELAY: &str = "INTELLITECH_TYPING_DELAY";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where preferences are stored
    pub data_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// How the calculator treats unknown crop identifiers
    pub unknown_crop_policy: UnknownCropPolicy,
    /// Simulate assistant typing before showing replies
    pub typing_delay: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_filter: "info".to_string(),
            log_json: false,
            unknown_crop_policy: UnknownCropPolicy::Reject,
            typing_delay: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let data_dir = env::var(ENV_DATA_DIR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let log_filter = env::var(ENV_LOG)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let log_json = match env::var(ENV_LOG_JSON) {
            Ok(v) => parse_bool(ENV_LOG_JSON, &v)?,
            Err(_) => defaults.log_json,
        };

        let unknown_crop_policy = match env::var(ENV_UNKNOWN_CROP) {
            Ok(v) => parse_policy(&v)?,
            Err(_) => defaults.unknown_crop_policy,
        };

        let typing_delay = match env::var(ENV_TYPING_DELAY) {
            Ok(v) => parse_bool(ENV_TYPING_DELAY, &v)?,
            Err(_) => defaults.typing_delay,
        };

        Ok(Self {
            data_dir,
            log_filter,
            log_json,
            unknown_crop_policy,
            typing_delay,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

fn parse_policy(value: &str) -> Result<UnknownCropPolicy, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reject" | "strict" => Ok(UnknownCropPolicy::Reject),
        "default" | "use_default" => Ok(UnknownCropPolicy::UseDefault),
        other => Err(AppError::Config(format!(
            "{} must be 'reject' or 'default', got '{}'",
            ENV_UNKNOWN_CROP, other
        ))),
    }
}
