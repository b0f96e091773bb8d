use mockito::Matcher;
use serde_json::json;

use pantrychef::config::CatalogConfig;
use pantrychef::{find_recipes, AppConfig, Difficulty, IngredientSet, SearchFilters};

fn catalog_config(base_url: String) -> AppConfig {
    AppConfig {
        catalog: CatalogConfig {
            api_key: Some("test-key".to_string()),
            base_url,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_catalog_recipes_are_normalized() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
            Matcher::UrlEncoded("ingredients".into(), "garlic,tomato".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 4242, "title": "Garlic Tomato Pasta", "image": "https://img/4242.jpg"}]"#)
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/recipes/4242/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "readyInMinutes": 55,
                "servings": 3,
                "summary": "Rich <i>weeknight</i> pasta.",
                "vegan": true,
                "extendedIngredients": [{"original": "3 tomatoes"}],
                "analyzedInstructions": [{"steps": [{"step": "Simmer the sauce"}]}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let ingredients: IngredientSet = ["tomato", "garlic"].into_iter().collect();
    let recipes = find_recipes(
        &ingredients,
        &SearchFilters::default(),
        &catalog_config(server.url()),
    )
    .await
    .unwrap();

    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.title, "Garlic Tomato Pasta");
    assert_eq!(recipe.difficulty, Difficulty::Hard);
    assert_eq!(recipe.cook_time, "55 minutes");
    assert_eq!(recipe.source_id, Some(4242));
    assert!(recipe.tags.contains(&"Homemade".to_string()));
    assert!(recipe.tags.contains(&"Vegan".to_string()));
    assert!((4.2..4.8).contains(&recipe.rating));
    assert!((100..1000).contains(&recipe.reviews));
}

#[tokio::test]
async fn test_synthetic_ratings_repeat_across_requests() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 77, "title": "Stable", "image": ""}]"#)
        .expect(2)
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/recipes/77/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let config = catalog_config(server.url());
    let ingredients: IngredientSet = ["onion"].into_iter().collect();
    let first = find_recipes(&ingredients, &SearchFilters::default(), &config)
        .await
        .unwrap();
    let second = find_recipes(&ingredients, &SearchFilters::default(), &config)
        .await
        .unwrap();

    assert_eq!(first[0].rating, second[0].rating);
    assert_eq!(first[0].reviews, second[0].reviews);
}

#[tokio::test]
async fn test_catalog_outage_serves_local_table() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let ingredients: IngredientSet = ["garlic"].into_iter().collect();
    let recipes = find_recipes(
        &ingredients,
        &SearchFilters::default(),
        &catalog_config(server.url()),
    )
    .await
    .unwrap();

    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().all(|r| r.source_id.is_none()));
}

#[tokio::test]
async fn test_filters_reach_the_catalog_query() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("cuisine".into(), "italian".into()),
            Matcher::UrlEncoded("maxReadyTime".into(), "25".into()),
            Matcher::UrlEncoded("sort".into(), "popularity".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let filters = SearchFilters {
        cuisine: Some("italian".to_string()),
        max_ready_time: Some(25),
        extra: [("sort".to_string(), "popularity".to_string())]
            .into_iter()
            .collect(),
        ..Default::default()
    };

    let ingredients: IngredientSet = ["basil"].into_iter().collect();
    let recipes = find_recipes(&ingredients, &filters, &catalog_config(server.url()))
        .await
        .unwrap();

    // Empty catalog response falls back to the local table
    assert_eq!(recipes.len(), 2);
    search.assert_async().await;
}
