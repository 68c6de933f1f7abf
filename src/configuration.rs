use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        // optional `configuration.{yaml,json,toml}` next to the binary
        .add_source(config::File::with_name("configuration").required(false))
        // e.g. APP__APP_PORT=9000, APP__CONNECTORS__CONTACT__SIMULATED_LATENCY_MS=0
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize()
}
