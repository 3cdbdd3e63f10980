use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tripsync_core::config::GeminiConfig;

/// Application configuration for the TripSync server.
///
/// Loaded from a TOML file when one is given, then overridden by
/// environment variables, then by CLI arguments (handled in the daemon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// HMAC secret for JWT signing.
    pub jwt_secret: String,
    /// Key handed to the browser for the mapping collaborator. Optional;
    /// the maps-key route reports availability to the client.
    pub maps_api_key: Option<String>,
    /// Gemini provider settings. An absent API key switches trip
    /// generation to the deterministic fallback.
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            jwt_secret: "change-this-development-secret".to_string(),
            maps_api_key: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a file if it exists, otherwise returns the
    /// default config
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply environment-variable overrides:
    /// TRIPSYNC_BIND_ADDR, TRIPSYNC_JWT_SECRET, GOOGLE_MAPS_API_KEY,
    /// GOOGLE_AI_KEY (via the Gemini config).
    pub fn apply_env(mut self) -> Self {
        if let Ok(addr) = std::env::var("TRIPSYNC_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(secret) = std::env::var("TRIPSYNC_JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Ok(key) = std::env::var("GOOGLE_MAPS_API_KEY") {
            self.maps_api_key = Some(key);
        }
        self.maps_api_key = self.maps_api_key.filter(|k| !k.is_empty());
        self.gemini = self.gemini.with_env_key();
        self
    }
}
