use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the trip catalog feed, loaded once at startup.
    pub path: String,
    /// Number of trips shown on the storefront home rail.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Upper bound on the traveler selector. The workflow core only enforces
    /// a minimum of one; the cap is a storefront policy applied here.
    #[serde(default = "default_max_travelers")]
    pub max_travelers: u32,
}

fn default_featured_limit() -> usize {
    6
}

fn default_max_travelers() -> u32 {
    6
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of VOYARA)
            // Eg. `VOYARA_SERVER__PORT=9000` would set `server.port`
            .add_source(config::Environment::with_prefix("VOYARA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
