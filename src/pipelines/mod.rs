use log::{info, warn};

use crate::catalog::{CatalogClient, SearchFilters};
use crate::decoder;
use crate::error::PantryError;
use crate::matcher;
use crate::model::{IngredientSet, Recipe};
use crate::recognizers::{IngredientRecognizer, FALLBACK_INGREDIENTS};

/// Decode an uploaded image and recognize its ingredients.
///
/// Undecodable bytes surface as [`PantryError::Decode`] (bad input). A
/// recognition failure does not: every strategy shares one fallback
/// contract, and the fixed fallback labels are substituted with a warning.
/// A successful recognition that found nothing passes through as the empty
/// set; downstream matching already short-circuits on it.
pub async fn detect(
    bytes: &[u8],
    recognizer: &dyn IngredientRecognizer,
) -> Result<IngredientSet, PantryError> {
    let grid = decoder::decode(bytes)?;

    match recognizer.recognize(&grid).await {
        Ok(labels) => Ok(labels),
        Err(e) => {
            warn!(
                "Recognizer '{}' failed ({e}); using fallback labels",
                recognizer.strategy_name()
            );
            Ok(FALLBACK_INGREDIENTS.into_iter().collect())
        }
    }
}

/// Find recipes for an ingredient set: remote catalog first, local table
/// when the catalog is unconfigured, failing, or empty.
///
/// Catalog failures never surface to the caller, so this cannot fail and
/// never returns an empty list.
pub async fn search_recipes(
    ingredients: &IngredientSet,
    filters: &SearchFilters,
    catalog: Option<&CatalogClient>,
) -> Vec<Recipe> {
    if let Some(catalog) = catalog {
        match catalog.find_by_ingredients(ingredients, filters).await {
            Ok(recipes) if !recipes.is_empty() => return recipes,
            Ok(_) => info!("Catalog returned no recipes; falling back to local table"),
            Err(e) => warn!("Catalog lookup failed ({e}); falling back to local table"),
        }
    } else {
        info!("No catalog configured; using local table");
    }

    matcher::find_matches(ingredients)
}
