pub mod catalog;
pub mod config;
pub mod decoder;
pub mod error;
pub mod matcher;
pub mod model;
pub mod pipelines;
pub mod recognizers;

pub use catalog::{CatalogClient, SearchFilters};
pub use config::AppConfig;
pub use error::{ErrorClass, PantryError};
pub use model::{Difficulty, IngredientSet, Nutrition, Recipe};
pub use recognizers::{IngredientRecognizer, RecognizerFactory};

/// Decode an uploaded photo and infer the ingredients visible in it.
///
/// Builds the configured recognizer strategy and runs the detect pipeline.
/// Servers handling many requests should build the recognizer once via
/// [`RecognizerFactory`] and call [`pipelines::detect`] directly instead.
pub async fn detect_ingredients(
    bytes: &[u8],
    config: &AppConfig,
) -> Result<IngredientSet, PantryError> {
    let recognizer = RecognizerFactory::from_config(config)?;
    pipelines::detect(bytes, recognizer.as_ref()).await
}

/// Find recipe candidates for a set of ingredients.
///
/// Uses the remote catalog when an API key is configured, falling back to
/// the local recipe table on failure or empty results.
pub async fn find_recipes(
    ingredients: &IngredientSet,
    filters: &SearchFilters,
    config: &AppConfig,
) -> Result<Vec<Recipe>, PantryError> {
    let catalog = CatalogClient::from_config(&config.catalog)?;
    Ok(pipelines::search_recipes(ingredients, filters, catalog.as_ref()).await)
}
