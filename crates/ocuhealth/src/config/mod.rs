use crate::assessments::ergonomic::NotApplicablePolicy;
use std::env;
use std::fmt;

const DEFAULT_FALLBACK_SECTOR: &str = "N/A";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let not_applicable = match env::var("OCU_AEP_NA_POLICY") {
            Ok(raw) => parse_not_applicable_policy(&raw)?,
            Err(_) => NotApplicablePolicy::default(),
        };

        let fallback_sector = env::var("OCU_ACTION_PLAN_FALLBACK_SECTOR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_SECTOR.to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                not_applicable,
                fallback_sector,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_not_applicable_policy(raw: &str) -> Result<NotApplicablePolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "strict" | "excluded" => Ok(NotApplicablePolicy::Excluded),
        "legacy" | "compliant" => Ok(NotApplicablePolicy::CountedAsCompliant),
        _ => Err(ConfigError::InvalidNotApplicablePolicy(raw.to_string())),
    }
}

/// Knobs that change how scores are computed or labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub not_applicable: NotApplicablePolicy,
    pub fallback_sector: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            not_applicable: NotApplicablePolicy::default(),
            fallback_sector: DEFAULT_FALLBACK_SECTOR.to_string(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNotApplicablePolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNotApplicablePolicy(value) => write!(
                f,
                "OCU_AEP_NA_POLICY must be 'strict' or 'legacy' (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("OCU_AEP_NA_POLICY");
        env::remove_var("OCU_ACTION_PLAN_FALLBACK_SECTOR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.scoring.not_applicable, NotApplicablePolicy::Excluded);
        assert_eq!(config.scoring.fallback_sector, "N/A");
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn accepts_legacy_not_applicable_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("OCU_AEP_NA_POLICY", " Legacy ");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.scoring.not_applicable,
            NotApplicablePolicy::CountedAsCompliant
        );
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_unknown_not_applicable_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("OCU_AEP_NA_POLICY", "sometimes");
        match AppConfig::load() {
            Err(ConfigError::InvalidNotApplicablePolicy(value)) => assert_eq!(value, "sometimes"),
            other => panic!("expected invalid policy error, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn blank_fallback_sector_keeps_default() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("OCU_ACTION_PLAN_FALLBACK_SECTOR", "   ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scoring.fallback_sector, "N/A");
        reset_env();
    }
}
