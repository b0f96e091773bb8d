use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated set of normalized (trimmed, lowercased) ingredient names.
///
/// Backed by a `BTreeSet`, so iteration order is alphabetical and
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IngredientSet(BTreeSet<String>);

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, normalizing it first. Empty names are dropped.
    pub fn insert(&mut self, name: impl AsRef<str>) {
        let normalized = name.as_ref().trim().to_lowercase();
        if !normalized.is_empty() {
            self.0.insert(normalized);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Comma-separated form used by the catalog query format.
    pub fn to_csv(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    /// Keep at most `cap` labels. Which labels survive follows set order
    /// (alphabetical); callers should rely on size and membership only.
    pub fn capped(mut self, cap: usize) -> Self {
        while self.0.len() > cap {
            if let Some(last) = self.0.iter().next_back().cloned() {
                self.0.remove(&last);
            }
        }
        self
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = IngredientSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<String>> for IngredientSet {
    fn from(names: Vec<String>) -> Self {
        names.iter().collect()
    }
}

impl From<IngredientSet> for Vec<String> {
    fn from(set: IngredientSet) -> Self {
        set.0.into_iter().collect()
    }
}

/// Difficulty tier derived from total cooking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// <=20 minutes is Easy, <=45 Medium, anything longer Hard.
    pub fn from_ready_minutes(minutes: u32) -> Self {
        if minutes <= 20 {
            Difficulty::Easy
        } else if minutes <= 45 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

/// Per-serving nutrition summary. Amounts other than calories are kept as
/// gram strings ("12g") to match the wire shape consumed by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

/// Normalized recipe record. Built freshly per request, immutable once
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    pub rating: f64,
    pub reviews: u32,
    /// Id in the external catalog, when the recipe came from there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
}
