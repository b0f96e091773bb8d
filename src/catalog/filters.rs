use serde::Deserialize;
use std::collections::HashMap;

/// Search options forwarded to the catalog query.
///
/// The recognized options are explicit fields; anything else the caller
/// wants passed through goes in `extra`, keeping the query open to catalog
/// options this crate does not model yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub intolerances: Option<String>,
    pub max_ready_time: Option<u32>,
    /// Pass-through fields appended to the query verbatim
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl SearchFilters {
    /// Render as query parameters, recognized fields first.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(cuisine) = &self.cuisine {
            params.push(("cuisine".to_string(), cuisine.clone()));
        }
        if let Some(diet) = &self.diet {
            params.push(("diet".to_string(), diet.clone()));
        }
        if let Some(intolerances) = &self.intolerances {
            params.push(("intolerances".to_string(), intolerances.clone()));
        }
        if let Some(max_ready_time) = self.max_ready_time {
            params.push(("maxReadyTime".to_string(), max_ready_time.to_string()));
        }
        let mut extra: Vec<_> = self.extra.iter().collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in extra {
            params.push((key.clone(), value.clone()));
        }
        params
    }
}
