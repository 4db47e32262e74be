//! Store client configuration.

use mediagate_shared::{SignatureAlgorithm, StoreCredentials};

/// Store client configuration.
#[derive(Clone)]
pub struct StoreConfig {
    /// Account (cloud) name.
    pub cloud_name: String,
    /// API key.
    pub api_key: String,
    /// API secret.
    pub api_secret: String,
    /// API base URL without trailing slash.
    pub api_base_url: String,
    /// Report HTTPS delivery URLs.
    pub secure: bool,
    /// Digest used for request signatures.
    pub signature_algorithm: SignatureAlgorithm,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_base_url", &self.api_base_url)
            .field("secure", &self.secure)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish_non_exhaustive()
    }
}

impl StoreConfig {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cloudinary.com";

    /// Create a config against the default endpoint.
    #[must_use]
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base_url: Self::DEFAULT_BASE_URL.to_string(),
            secure: true,
            signature_algorithm: SignatureAlgorithm::default(),
        }
    }

    /// Point the client at another endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Choose between HTTPS and plain delivery URLs.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Sign requests with `algorithm`.
    #[must_use]
    pub fn with_signature_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = algorithm;
        self
    }

    /// Image endpoint for `action`, e.g. `upload` or `destroy`.
    #[must_use]
    pub fn image_url(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{action}",
            self.api_base_url, self.cloud_name
        )
    }

    /// Admin endpoint listing uploaded image resources.
    #[must_use]
    pub fn resources_url(&self) -> String {
        format!(
            "{}/v1_1/{}/resources/image/upload",
            self.api_base_url, self.cloud_name
        )
    }
}

impl From<StoreCredentials> for StoreConfig {
    fn from(creds: StoreCredentials) -> Self {
        Self::new(creds.cloud_name, creds.api_key, creds.api_secret)
            .with_base_url(creds.api_base_url)
            .with_secure(creds.secure)
            .with_signature_algorithm(creds.signature_algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::new("demo", "key", "secret");
        assert_eq!(config.api_base_url, StoreConfig::DEFAULT_BASE_URL);
        assert!(config.secure);
        assert_eq!(config.signature_algorithm, SignatureAlgorithm::Sha1);
    }

    #[test]
    fn test_endpoints() {
        let config = StoreConfig::new("demo", "key", "secret").with_base_url("http://localhost:9/");
        assert_eq!(
            config.image_url("upload"),
            "http://localhost:9/v1_1/demo/image/upload"
        );
        assert_eq!(
            config.image_url("destroy"),
            "http://localhost:9/v1_1/demo/image/destroy"
        );
        assert_eq!(
            config.resources_url(),
            "http://localhost:9/v1_1/demo/resources/image/upload"
        );
    }

    #[test]
    fn test_from_credentials() {
        let creds = StoreCredentials {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            api_base_url: "https://api.example.test".into(),
            secure: false,
            signature_algorithm: SignatureAlgorithm::Sha256,
        };
        let config = StoreConfig::from(creds);
        assert_eq!(config.cloud_name, "demo");
        assert_eq!(config.api_base_url, "https://api.example.test");
        assert!(!config.secure);
        assert_eq!(config.signature_algorithm, SignatureAlgorithm::Sha256);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = StoreConfig::new("demo", "key-123", "secret-456");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-456"));
        assert!(!debug.contains("key-123"));
    }
}
