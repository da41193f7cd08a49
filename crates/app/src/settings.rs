use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use study_core::Locale;
use study_core::model::Phase;
use study_core::plan::default_plan;

pub const DEFAULT_DB_URL: &str = "sqlite://study-dashboard.sqlite3";

/// Looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG_NAME: &str = "dashboard";

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub db_url: String,
    pub locale: Locale,
    pub log_level: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl DashboardConfig {
    /// Defaults, then the TOML file, then `DASHBOARD_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or any layer
    /// holds a value of the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix("DASHBOARD"))
            .build()?
            .try_deserialize()
    }

    /// The configured phases, or the built-in plan when none are listed.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in plan fails validation.
    pub fn plan(&self) -> Result<Vec<Phase>, study_core::Error> {
        if self.phases.is_empty() {
            default_plan()
        } else {
            Ok(self.phases.clone())
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("db_url", DEFAULT_DB_URL)?
        .set_default("locale", Locale::default().code())?
        .set_default("log_level", "info")
}
