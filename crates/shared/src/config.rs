//! Application configuration management.

use std::fmt;

use serde::Deserialize;

/// Application configuration.
///
/// Built once at process start and passed by value into the pieces that
/// need it; nothing reads the environment after startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote asset store credentials.
    pub store: StoreCredentials,
    /// Upload limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Credentials and endpoint for the remote asset store.
#[derive(Clone, Deserialize)]
pub struct StoreCredentials {
    /// Account (cloud) name.
    pub cloud_name: String,
    /// API key.
    pub api_key: String,
    /// API secret used for request signing.
    pub api_secret: String,
    /// Base URL of the store API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Ask the store for HTTPS delivery URLs.
    #[serde(default = "default_secure")]
    pub secure: bool,
    /// Digest used to sign requests; must match the account setting.
    #[serde(default)]
    pub signature_algorithm: SignatureAlgorithm,
}

/// Request signature digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    /// SHA-1, the store's account default.
    #[default]
    Sha1,
    /// SHA-256.
    Sha256,
}

// Keep the secret out of logs.
impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("secure", &self.secure)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://api.cloudinary.com".to_string()
}

fn default_secure() -> bool {
    true
}

/// Upload limits.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Size ceiling applied when the form carries no `max_size`.
    #[serde(default = "default_max_size")]
    pub default_max_size: u64,
    /// Transport-level request body ceiling.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl UploadConfig {
    /// Default per-upload size ceiling in bytes.
    pub const DEFAULT_MAX_SIZE: u64 = 2_000_000;
    /// Default request body ceiling: 20MB.
    pub const DEFAULT_BODY_LIMIT: usize = 20 * 1024 * 1024;
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            default_max_size: default_max_size(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_max_size() -> u64 {
    UploadConfig::DEFAULT_MAX_SIZE
}

fn default_body_limit() -> usize {
    UploadConfig::DEFAULT_BODY_LIMIT
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MEDIAGATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
