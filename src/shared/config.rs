/// Runtime configuration read from the environment (and `.env` via dotenvy)
use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const IMPORT_ROW_DELAY_MS: &str = "IMPORT_ROW_DELAY_MS";
pub const IMPORT_RESET_PROGRESS_ON_FAILURE: &str = "IMPORT_RESET_PROGRESS_ON_FAILURE";

/// Tuning knobs for the background import worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSettings {
    /// Pause applied after each row is built. Zero disables throttling.
    pub row_delay: Duration,
    /// Zero the processed-row counter when an import fails instead of
    /// keeping the count reached at failure time.
    pub reset_progress_on_failure: bool,
}

impl ImportSettings {
    pub fn with_row_delay(mut self, row_delay: Duration) -> Self {
        self.row_delay = row_delay;
        self
    }

    pub fn with_reset_progress_on_failure(mut self, reset: bool) -> Self {
        self.reset_progress_on_failure = reset;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub import: ImportSettings,
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup(DATABASE_URL) {
            Some(url) => Some(validate_database_url(url)?),
            None => None,
        };

        let row_delay = match lookup(IMPORT_ROW_DELAY_MS) {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("{} must be a whole number: {}", IMPORT_ROW_DELAY_MS, e))
            })?),
            None => Duration::ZERO,
        };

        let reset_progress_on_failure = match lookup(IMPORT_RESET_PROGRESS_ON_FAILURE) {
            Some(raw) => parse_flag(IMPORT_RESET_PROGRESS_ON_FAILURE, &raw)?,
            None => false,
        };

        Ok(Self {
            database_url,
            import: ImportSettings {
                row_delay,
                reset_progress_on_failure,
            },
        })
    }

    pub fn require_database_url(&self) -> AppResult<&str> {
        self.database_url.as_deref().ok_or_else(|| {
            AppError::ConfigError(format!("{} environment variable not found", DATABASE_URL))
        })
    }
}

fn validate_database_url(database_url: String) -> AppResult<String> {
    if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
        return Err(AppError::ConfigError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }

    if database_url.contains("password=") || database_url.len() < 20 {
        return Err(AppError::ConfigError(
            "Database URL appears to be malformed or insecure".to_string(),
        ));
    }

    Ok(database_url)
}

fn parse_flag(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
