//! # Config
//!
//! Define and implement config options for module

use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;
use std::sync::Arc;

use crate::campus::{Campus, CampusError};
use crate::router::router_types::road_router::{DEFAULT_MAX_DEPTH, MAX_SEARCH_DEPTH};
use crate::router::router_types::route::DEFAULT_WALKING_SPEED_KMH;
use crate::router::RoutingMode;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// path to log configuration YAML file
    pub log_config: String,

    /// path to a campus JSON file, the embedded campus is used when empty
    pub campus_data: String,

    /// routing model answering requests
    pub routing_mode: RoutingMode,

    /// largest number of hops the road router explores
    pub max_search_depth: usize,

    /// walking pace for time estimates, in km/h
    pub walking_speed_kmh: f64,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            log_config: String::from("log4rs.yaml"),
            campus_data: String::new(),
            routing_mode: RoutingMode::Road,
            max_search_depth: DEFAULT_MAX_DEPTH,
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        let config: Config = config::Config::builder()
            .set_default("log_config", default_config.log_config)?
            .set_default("campus_data", default_config.campus_data)?
            .set_default("routing_mode", default_config.routing_mode.to_string())?
            .set_default("max_search_depth", default_config.max_search_depth as u64)?
            .set_default("walking_speed_kmh", default_config.walking_speed_kmh)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.max_search_depth) {
            return Err(ConfigError::Message(format!(
                "max_search_depth must be within 1..={MAX_SEARCH_DEPTH}, got {}",
                self.max_search_depth
            )));
        }

        if !self.walking_speed_kmh.is_finite() || self.walking_speed_kmh <= 0.0 {
            return Err(ConfigError::Message(format!(
                "walking_speed_kmh must be positive, got {}",
                self.walking_speed_kmh
            )));
        }

        Ok(())
    }

    /// Load the configured campus: the file at `campus_data`, or the
    /// embedded campus when no file is configured.
    pub fn load_campus(&self) -> Result<Arc<Campus>, CampusError> {
        if self.campus_data.trim().is_empty() {
            log::info!("(load_campus) Using embedded campus data.");
            return Campus::embedded();
        }

        Campus::from_file(&self.campus_data).map(Arc::new)
    }
}
