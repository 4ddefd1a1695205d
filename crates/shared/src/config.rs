//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Planning defaults.
    #[serde(default)]
    pub planning: PlanningConfig,
    /// Table pagination defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Planning defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningConfig {
    /// Budget year preselected for new sessions.
    #[serde(default = "default_year")]
    pub default_year: i32,
}

fn default_year() -> i32 {
    2026
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_year: default_year(),
        }
    }
}

/// Table pagination defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Default number of rows per table page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    20
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Reads `config/default` and `config/{RUN_MODE}` when present, then
    /// applies `RKAS__`-prefixed environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RKAS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_sources() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.planning.default_year, 2026);
        assert_eq!(config.pagination.per_page, 20);
    }

    #[test]
    fn test_env_override_wins() {
        temp_env::with_vars(
            [
                ("RKAS__PLANNING__DEFAULT_YEAR", Some("2027")),
                ("RKAS__PAGINATION__PER_PAGE", Some("50")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.planning.default_year, 2027);
                assert_eq!(config.pagination.per_page, 50);
            },
        );
    }
}
