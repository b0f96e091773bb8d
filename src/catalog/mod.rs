pub mod filters;
pub mod format;

pub use filters::SearchFilters;

use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::CatalogConfig;
use crate::error::{catalog_error, PantryError};
use crate::model::{IngredientSet, Recipe};

/// Client for the remote recipe-by-ingredients catalog.
///
/// One summary query fans out into per-recipe detail lookups; a detail
/// failure drops that candidate only, never the batch.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_candidates: u32,
    detail_limit: usize,
}

impl CatalogClient {
    /// Create a client from configuration. Returns `None` when no API key
    /// is available, which callers treat as "catalog not configured".
    pub fn from_config(config: &CatalogConfig) -> Result<Option<Self>, PantryError> {
        let Some(api_key) = config.resolved_api_key() else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| PantryError::Catalog(format!("failed to build HTTP client: {e}")))?;

        Ok(Some(CatalogClient {
            client,
            base_url: config.base_url.clone(),
            api_key,
            max_candidates: config.max_candidates,
            detail_limit: config.detail_limit,
        }))
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String, timeout: Duration) -> Self {
        CatalogClient {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            api_key,
            max_candidates: 12,
            detail_limit: 8,
        }
    }

    /// Query the catalog for recipes using the given ingredients.
    ///
    /// Candidates are ranked to maximize used ingredients, ignoring what
    /// the user already has on hand. Filters pass through as query
    /// parameters.
    pub async fn find_by_ingredients(
        &self,
        ingredients: &IngredientSet,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, PantryError> {
        let mut params = vec![
            ("apiKey".to_string(), self.api_key.clone()),
            ("ingredients".to_string(), ingredients.to_csv()),
            ("number".to_string(), self.max_candidates.to_string()),
            ("ranking".to_string(), "2".to_string()),
            ("ignorePantry".to_string(), "true".to_string()),
        ];
        params.extend(filters.to_query_params());

        let response = self
            .client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(catalog_error)?;

        if !response.status().is_success() {
            return Err(PantryError::Catalog(format!(
                "catalog returned {}",
                response.status()
            )));
        }

        let candidates: Vec<Value> = response.json().await.map_err(catalog_error)?;
        debug!("Catalog returned {} candidates", candidates.len());

        let mut recipes = Vec::new();
        for candidate in candidates.iter().take(self.detail_limit) {
            match self.fetch_detail(candidate).await {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    warn!(
                        "Skipping candidate {}: {e}",
                        candidate["id"].as_i64().unwrap_or_default()
                    );
                }
            }
        }

        Ok(recipes)
    }

    async fn fetch_detail(&self, candidate: &Value) -> Result<Recipe, PantryError> {
        let id = candidate["id"]
            .as_i64()
            .ok_or_else(|| PantryError::Catalog("candidate is missing an id".to_string()))?;

        let response = self
            .client
            .get(format!("{}/recipes/{id}/information", self.base_url))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(catalog_error)?;

        if !response.status().is_success() {
            return Err(PantryError::Catalog(format!(
                "detail lookup for {id} returned {}",
                response.status()
            )));
        }

        let detail: Value = response.json().await.map_err(catalog_error)?;
        format::build_recipe(candidate, &detail)
    }
}
