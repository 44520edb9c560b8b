//! Generator configuration

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "AURABEAT_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "AURABEAT_GENERATOR_MODEL";

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the generative model endpoint.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// API credential. `None` means generation is disabled.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Base URL of the model API.
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with an explicit credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read configuration from the environment.
    ///
    /// A missing credential is not an error here; it becomes
    /// [`GeneratorError::NotConfigured`](crate::GeneratorError::NotConfigured)
    /// when a generation is actually attempted.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let model =
            std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            model,
            ..Self::default()
        }
    }

    /// Override the base URL (used for testing against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_gemini() {
        let config = GeneratorConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn new_sets_credential() {
        let config = GeneratorConfig::new("secret");
        assert!(config.is_configured());
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn base_url_override() {
        let config = GeneratorConfig::new("secret").with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }
}
