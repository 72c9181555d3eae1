//! Gateway configuration.

use anyhow::Result;
use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Service name.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Server host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve GraphiQL on `GET /`.
    #[serde(default = "default_true")]
    pub graphiql: bool,

    /// CORS allowed origins.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Vault connection.
    #[serde(default)]
    pub vault: VaultSettings,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Vault connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultSettings {
    /// Vault identifier.
    #[serde(default)]
    pub vault_id: String,

    /// Vault base URL.
    #[serde(default)]
    pub vault_url: String,

    /// Static bearer token. Takes precedence over `token_env`.
    pub bearer_token: Option<SecretString>,

    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Cache tokens for this many seconds.
    pub token_ttl_secs: Option<u64>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries on retryable failures.
    #[serde(default)]
    pub max_retries: u32,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            vault_id: String::new(),
            vault_url: String::new(),
            bearer_token: None,
            token_env: default_token_env(),
            token_ttl_secs: None,
            timeout_secs: default_timeout(),
            max_retries: 0,
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (json, pretty).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_service_name() -> String {
    "vault-graphql-gateway".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_true() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_token_env() -> String {
    "VAULT_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl ServerConfig {
    /// Loads configuration from files and environment.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("service_name", default_service_name())?
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let server_config: ServerConfig = config.try_deserialize()?;
        server_config.validate()?;
        Ok(server_config)
    }

    /// Validates the configuration.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Invalid port: 0");
        }

        if self.vault.vault_id.trim().is_empty() {
            anyhow::bail!("vault.vault_id is required");
        }

        if self.vault.vault_url.trim().is_empty() {
            anyhow::bail!("vault.vault_url is required");
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            host: default_host(),
            port: default_port(),
            graphiql: true,
            cors_origins: default_cors_origins(),
            vault: VaultSettings::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}
