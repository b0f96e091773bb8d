use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Ingredient-recognition strategy selection
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    /// Detection backend settings (used by the "detector" strategy)
    #[serde(default)]
    pub detector: DetectorConfig,
    /// Remote recipe catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Which recognizer strategy the deployment runs
#[derive(Debug, Deserialize, Clone)]
pub struct RecognizerConfig {
    /// "color" (heuristic, no backend) or "detector" (remote model)
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
        }
    }
}

/// Configuration for the remote object-detection backend
#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    /// Base URL of the inference service
    #[serde(default = "default_detector_endpoint")]
    pub endpoint: String,
    /// API key (can also be set via DETECTOR_API_KEY)
    pub api_key: Option<String>,
    /// Minimum confidence for a predicted box to count
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_detector_endpoint(),
            api_key: None,
            confidence: default_confidence(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the remote recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY). Without a key the
    /// catalog path is skipped and lookups go straight to the local table.
    pub api_key: Option<String>,
    /// Base URL for the catalog API
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, applied to every outbound call
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How many candidates to request from the by-ingredients search
    #[serde(default = "default_max_candidates")]
    pub max_candidates: u32,
    /// How many candidates get a detail lookup
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_catalog_base_url(),
            timeout: default_timeout(),
            max_candidates: default_max_candidates(),
            detail_limit: default_detail_limit(),
        }
    }
}

impl CatalogConfig {
    /// API key from config, falling back to the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
    }
}

impl DetectorConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("DETECTOR_API_KEY").ok())
    }
}

// Default value functions
fn default_strategy() -> String {
    "color".to_string()
}

fn default_detector_endpoint() -> String {
    "http://localhost:8500".to_string()
}

fn default_confidence() -> f64 {
    0.4
}

fn default_timeout() -> u64 {
    10
}

fn default_catalog_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_max_candidates() -> u32 {
    12
}

fn default_detail_limit() -> usize {
    8
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRYCHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRYCHEF__CATALOG__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: PANTRYCHEF__CATALOG__API_KEY
            .add_source(
                Environment::with_prefix("PANTRYCHEF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_strategy(), "color");
        assert_eq!(default_confidence(), 0.4);
        assert_eq!(default_timeout(), 10);
        assert_eq!(default_max_candidates(), 12);
        assert_eq!(default_detail_limit(), 8);
        assert_eq!(default_catalog_base_url(), "https://api.spoonacular.com");
    }

    #[test]
    fn test_catalog_config_default() {
        let catalog = CatalogConfig::default();
        assert!(catalog.api_key.is_none());
        assert_eq!(catalog.timeout, 10);
        assert_eq!(catalog.max_candidates, 12);
        assert_eq!(catalog.detail_limit, 8);
    }

    #[test]
    fn test_app_config_default_strategy() {
        let config = AppConfig::default();
        assert_eq!(config.recognizer.strategy, "color");
        assert_eq!(config.detector.confidence, 0.4);
    }
}
