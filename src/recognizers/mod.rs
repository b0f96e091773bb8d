mod color;
mod detector;

pub use color::ColorHeuristic;
pub use detector::ObjectDetector;

use async_trait::async_trait;
use image::RgbImage;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::PantryError;
use crate::model::IngredientSet;

/// Labels substituted when a recognizer fails. One contract for every
/// strategy; the detect pipeline applies it.
pub const FALLBACK_INGREDIENTS: [&str; 5] = ["onion", "garlic", "tomato", "potato", "carrot"];

/// Unified trait for ingredient-recognition strategies
#[async_trait]
pub trait IngredientRecognizer: Send + Sync {
    /// Get the strategy name (e.g. "color", "detector")
    fn strategy_name(&self) -> &str;

    /// Turn a decoded pixel grid into a deduplicated set of ingredient labels
    async fn recognize(&self, image: &RgbImage) -> Result<IngredientSet, PantryError>;
}

pub struct RecognizerFactory;

impl RecognizerFactory {
    /// Create a recognizer instance from configuration.
    ///
    /// Meant to run once at startup; the returned handle is read-only and
    /// safe to share across concurrent requests.
    pub fn create(
        strategy: &str,
        config: &AppConfig,
    ) -> Result<Arc<dyn IngredientRecognizer>, PantryError> {
        match strategy {
            "color" => Ok(Arc::new(ColorHeuristic)),
            "detector" => Ok(Arc::new(ObjectDetector::new(&config.detector)?)),
            other => Err(PantryError::UnknownRecognizer(other.to_string())),
        }
    }

    /// Create the recognizer named by the configuration itself.
    pub fn from_config(config: &AppConfig) -> Result<Arc<dyn IngredientRecognizer>, PantryError> {
        Self::create(&config.recognizer.strategy, config)
    }

    /// List all available strategy names
    pub fn available_strategies() -> Vec<&'static str> {
        vec!["color", "detector"]
    }
}
