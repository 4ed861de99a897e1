use std::time::Duration;

use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: u16,
    pub mongo_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub operation_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobboard")?
            .set_default("listen_port", 8080)?
            .set_default("database_name", "graphql-job-board")?
            .set_default("collection_name", "jobs")?
            .set_default("operation_timeout_secs", 30)?
            .set_default("connect_timeout_secs", 30)?
            .add_source(env)
            .build()?;
        conf.try_deserialize()
    }

    /// Budget applied to every single store round trip.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
