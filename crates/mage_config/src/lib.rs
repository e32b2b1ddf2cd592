//! # mage_config
//!
//! Layered configuration loading for astromage using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ASTROMAGE_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `astromage.toml`
//! 4. User-level `~/.config/astromage/config.toml`
//! 5. Built-in defaults
//!
//! `ASTROMAGE_PROFILE__SIGN=leo` maps to `profile.sign`,
//! `ASTROMAGE_COMPATIBILITY__SEED=42` to `compatibility.seed`.
//!
//! # Usage
//!
//! ```no_run
//! use mage_config::MageConfig;
//!
//! let config = MageConfig::load().expect("config");
//! if let Some(sign) = config.profile.sign().expect("valid sign") {
//!     println!("default sign: {sign}");
//! }
//! ```

mod compatibility;
mod error;
mod location;
mod logging;
mod profile;

pub use compatibility::CompatibilityConfig;
pub use error::ConfigError;
pub use location::{LocationConfig, PlaceConfig, gazetteer};
pub use logging::LoggingConfig;
pub use profile::ProfileConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mage_base::StaticGazetteer;
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "astromage.toml";
/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ASTROMAGE_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MageConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub places: Vec<PlaceConfig>,
    #[serde(default)]
    pub compatibility: CompatibilityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MageConfig {
    /// Load and validate configuration from defaults, TOML files and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`load`](Self::load), with `path` merged after the standard
    /// TOML layers. A missing explicit file is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = path.filter(|p| !p.is_file()) {
            return Err(ConfigError::invalid(
                "--config",
                format!("{} is not a readable file", p.display()),
            ));
        }
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("astromage").join("config.toml"))
    }

    /// Check every typed value: dates, times, sign, coordinates, places.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile.birth_date()?;
        self.profile.birth_time()?;
        self.profile.sign()?;
        self.location.geo_location()?;
        gazetteer(&self.places)?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::invalid("logging.filter", "must not be empty"));
        }
        Ok(())
    }

    /// Offline place lookup built from `places`.
    pub fn places_gazetteer(&self) -> Result<StaticGazetteer, ConfigError> {
        gazetteer(&self.places)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
