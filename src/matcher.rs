use log::debug;

use crate::model::{Difficulty, IngredientSet, Recipe};

/// Fully-populated local recipes served when the catalog is unavailable or
/// comes back empty.
fn local_table() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Classic Vegetable Stir Fry".to_string(),
            image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            cook_time: "20 minutes".to_string(),
            servings: 4,
            difficulty: Difficulty::Easy,
            description: "A quick and healthy stir fry using fresh vegetables.".to_string(),
            ingredients: vec![
                "Mixed vegetables".to_string(),
                "Garlic".to_string(),
                "Ginger".to_string(),
                "Soy sauce".to_string(),
            ],
            instructions: vec![
                "Heat oil in a large wok".to_string(),
                "Add garlic and ginger".to_string(),
                "Add vegetables and stir-fry".to_string(),
                "Add sauce and serve".to_string(),
            ],
            tags: vec!["Vegetarian".to_string(), "Quick".to_string(), "Healthy".to_string()],
            nutrition: None,
            rating: 4.5,
            reviews: 234,
            source_id: None,
        },
        Recipe {
            id: 2,
            title: "Garlic Herb Roasted Potatoes".to_string(),
            image: "https://images.pexels.com/photos/1893556/pexels-photo-1893556.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            cook_time: "35 minutes".to_string(),
            servings: 6,
            difficulty: Difficulty::Easy,
            description: "Crispy roasted potatoes with fresh herbs.".to_string(),
            ingredients: vec![
                "Potatoes".to_string(),
                "Garlic".to_string(),
                "Herbs".to_string(),
                "Olive oil".to_string(),
            ],
            instructions: vec![
                "Preheat oven to 425°F".to_string(),
                "Cut potatoes into chunks".to_string(),
                "Toss with oil and seasonings".to_string(),
                "Roast until golden".to_string(),
            ],
            tags: vec!["Vegetarian".to_string(), "Side Dish".to_string()],
            nutrition: None,
            rating: 4.7,
            reviews: 189,
            source_id: None,
        },
    ]
}

/// Filter the local table against the requested ingredients.
///
/// A recipe is kept when any of its ingredient names equals any requested
/// name case-insensitively (whole names, not substrings). When nothing
/// matches, the whole table is returned in table order; this path never
/// produces an empty list.
pub fn find_matches(ingredients: &IngredientSet) -> Vec<Recipe> {
    let table = local_table();
    let matching: Vec<Recipe> = table
        .iter()
        .filter(|recipe| {
            recipe
                .ingredients
                .iter()
                .any(|name| ingredients.contains(name))
        })
        .cloned()
        .collect();

    if matching.is_empty() {
        debug!("No local recipe matched; returning the full table");
        table
    } else {
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_returns_full_table() {
        let recipes = find_matches(&IngredientSet::new());
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_unmatched_set_returns_full_table() {
        let ingredients: IngredientSet = ["durian"].into_iter().collect();
        let recipes = find_matches(&ingredients);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Classic Vegetable Stir Fry");
        assert_eq!(recipes[1].title, "Garlic Herb Roasted Potatoes");
    }

    #[test]
    fn test_garlic_matches_both_recipes_case_insensitively() {
        let ingredients: IngredientSet = ["GARLIC"].into_iter().collect();
        let recipes = find_matches(&ingredients);
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_potatoes_matches_one_recipe() {
        let ingredients: IngredientSet = ["potatoes"].into_iter().collect();
        let recipes = find_matches(&ingredients);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Garlic Herb Roasted Potatoes");
    }

    #[test]
    fn test_matching_is_not_substring_based() {
        // "potato" is not an ingredient name in the table; "Potatoes" is
        let ingredients: IngredientSet = ["potato"].into_iter().collect();
        let recipes = find_matches(&ingredients);
        assert_eq!(recipes.len(), 2, "no exact match, so the full table comes back");
    }

    #[test]
    fn test_table_recipes_are_fully_populated() {
        for recipe in find_matches(&IngredientSet::new()) {
            assert!(!recipe.title.is_empty());
            assert!(!recipe.image.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
            assert!(!recipe.tags.is_empty());
            assert!(recipe.rating > 0.0);
            assert!(recipe.reviews > 0);
            assert!(recipe.source_id.is_none());
        }
    }
}
