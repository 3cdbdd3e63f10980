use serde::{Deserialize, Serialize};

/// Configuration struct for the Gemini provider
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeminiConfig {
    /// API key for the generativelanguage endpoint. Absent means every
    /// generation request is answered from the fallback generator.
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    /// Override for the API base URL. Tests point this at an unroutable
    /// address to exercise the transport-failure path.
    pub api_base: Option<String>,
}

impl GeminiConfig {
    /// Creates a new configuration
    pub fn new(api_key: Option<String>, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name,
            api_base: None,
        }
    }

    /// Reads the API key from the GOOGLE_AI_KEY environment variable when
    /// the config itself does not carry one.
    pub fn with_env_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var("GOOGLE_AI_KEY").ok().filter(|k| !k.is_empty());
        }
        self
    }

    /// Merges this config with another config, preferring values from the
    /// other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_key: other.api_key.clone().or_else(|| self.api_key.clone()),
            model_name: other.model_name.clone().or_else(|| self.model_name.clone()),
            api_base: other.api_base.clone().or_else(|| self.api_base.clone()),
        }
    }

    /// Whether a provider credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_other() {
        let base = GeminiConfig::new(Some("base-key".into()), Some("model-a".into()));
        let other = GeminiConfig::new(None, Some("model-b".into()));

        let merged = base.merge(&other);
        assert_eq!(merged.api_key.as_deref(), Some("base-key"));
        assert_eq!(merged.model_name.as_deref(), Some("model-b"));
    }

    #[test]
    fn credential_check_rejects_empty_key() {
        let mut config = GeminiConfig::default();
        assert!(!config.has_credential());

        config.api_key = Some(String::new());
        assert!(!config.has_credential());

        config.api_key = Some("key".into());
        assert!(config.has_credential());
    }
}
