use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "qa-agent.toml";
/// Env var naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "QA_CONFIG";

/// Top-level config (qa-agent.toml + QA_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QaConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl QaConfig {
    /// Load config from a TOML file with QA_* env var overrides.
    ///
    /// The file is the explicit path if given, otherwise `./qa-agent.toml`.
    /// A missing file is not an error; defaults fill every field.
    /// Env vars map onto nested keys, e.g. `QA_GATEWAY_PORT=8080`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::debug!(path = %path, "loading config");

        let config: QaConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("QA_").split("_"))
            .extract()
            .map_err(|e| crate::error::QaError::Config(e.to_string()))?;

        Ok(config)
    }
}
