use serde_json::json;
use std::env;

use pantrychef::{detect_ingredients, find_recipes, AppConfig, IngredientSet, SearchFilters};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = AppConfig::load()?;

    match args.get(1).map(String::as_str) {
        Some("detect") => {
            let path = args
                .get(2)
                .ok_or("Usage: pantrychef detect <image-file>")?;
            let bytes = tokio::fs::read(path).await?;
            let ingredients = detect_ingredients(&bytes, &config).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "ingredients": ingredients }))?
            );
        }
        Some("recipes") => {
            let csv = args
                .get(2)
                .ok_or("Usage: pantrychef recipes <ingredient,ingredient,...>")?;
            let ingredients: IngredientSet = csv.split(',').collect();
            let recipes = find_recipes(&ingredients, &SearchFilters::default(), &config).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "recipes": recipes }))?
            );
        }
        _ => {
            eprintln!("Usage: pantrychef <detect|recipes> ...");
            std::process::exit(2);
        }
    }

    Ok(())
}
